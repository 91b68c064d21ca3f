// src/knowledge/catalog.rs
//
// Evidence-based clinical catalog. Symptom prevalence and severity figures
// are taken from published medical literature and WHO/CDC fact sheets; the
// [R#] tags below identify the sources cited per disease.
//
//   R1  WHO Malaria Fact Sheet            R10 WHO Leptospirosis Guidance 2003
//   R2  WHO Dengue Fact Sheet             R11 Harrison's Principles, 21st ed.
//   R3  WHO Typhoid Fact Sheet            R12 Manson's Tropical Diseases, 24th ed.
//   R4  WHO Chikungunya Fact Sheet        R13 Guzman & Harris, Lancet 2015
//   R5  WHO Zika Virus Fact Sheet         R14 Parry et al., NEJM 2002
//   R6  WHO Cholera Fact Sheet            R15 Crawley et al., Lancet 2010
//   R7  WHO Yellow Fever Fact Sheet       R16 Heikkinen & Järvinen, Lancet 2003
//   R8  WHO Influenza Fact Sheet          R17 Nicholson et al., Lancet 2003
//   R9  CDC Common Cold                   R18 Haake & Levett, Curr Top 2015
//
// Rule weights reflect clinical diagnostic importance:
//   0.80-0.95 hallmark symptoms, 0.40-0.70 common/moderately specific,
//   0.15-0.35 nonspecific. Rules expecting 'none'/'normal' encode negative
//   evidence: the ABSENCE of a symptom helps the differential.

use crate::models::{Disease, Symptom};

pub(super) struct SymptomSpec {
    pub symptom: Symptom,
    pub display_name: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    pub help: &'static str,
}

pub(super) struct ProfileSpec {
    pub disease: Disease,
    pub description: &'static str,
    pub precautions: &'static [&'static str],
    pub references: &'static [&'static str],
    pub hallmarks: &'static [Symptom],
    /// (symptom, prevalence, severity_mean, severity_std)
    pub stats: &'static [(Symptom, f64, f64, f64)],
    /// (symptom, expected fuzzy level, diagnostic weight)
    pub rules: &'static [(Symptom, &'static str, f64)],
}

// ── Symptom definitions ──────────────────────────────────────────────────────

pub(super) const SYMPTOMS: &[SymptomSpec] = &[
    SymptomSpec {
        symptom: Symptom::Fever,
        display_name: "Body Temperature",
        min: 95.0,
        max: 106.0,
        unit: "°F",
        help: "Normal: 97-99°F. Measure orally. Leave blank if not measured.",
    },
    SymptomSpec {
        symptom: Symptom::Headache,
        display_name: "Headache",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 3 = mild, 5 = moderate, 7 = severe, 10 = worst possible",
    },
    SymptomSpec {
        symptom: Symptom::JointPain,
        display_name: "Joint Pain",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate, 10 = worst possible",
    },
    SymptomSpec {
        symptom: Symptom::MusclePain,
        display_name: "Muscle Pain / Body Aches",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate, 10 = worst possible",
    },
    SymptomSpec {
        symptom: Symptom::Rash,
        display_name: "Skin Rash",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate, 10 = severe/widespread",
    },
    SymptomSpec {
        symptom: Symptom::NauseaVomiting,
        display_name: "Nausea / Vomiting",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate, 10 = continuous vomiting",
    },
    SymptomSpec {
        symptom: Symptom::Fatigue,
        display_name: "Fatigue / Weakness",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate, 10 = bed-bound",
    },
    SymptomSpec {
        symptom: Symptom::AbdominalPain,
        display_name: "Abdominal Pain",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate, 10 = worst possible",
    },
    SymptomSpec {
        symptom: Symptom::Diarrhea,
        display_name: "Diarrhea",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate watery, 10 = profuse/rice-water",
    },
    SymptomSpec {
        symptom: Symptom::Bleeding,
        display_name: "Bleeding (gums/nose/skin)",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate, 10 = severe hemorrhage",
    },
    SymptomSpec {
        symptom: Symptom::Chills,
        display_name: "Chills / Rigors",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate shivering, 10 = shaking rigors",
    },
    SymptomSpec {
        symptom: Symptom::Jaundice,
        display_name: "Jaundice (yellow skin/eyes)",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate yellowing, 10 = deep yellow",
    },
    SymptomSpec {
        symptom: Symptom::Dehydration,
        display_name: "Dehydration",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate (dry mouth, less urine), 10 = severe/shock",
    },
    SymptomSpec {
        symptom: Symptom::EyePain,
        display_name: "Eye Pain / Redness",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate, 10 = severe pain/redness/conjunctivitis",
    },
    SymptomSpec {
        symptom: Symptom::Cough,
        display_name: "Cough",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 3 = occasional, 5 = frequent, 10 = continuous/painful",
    },
    SymptomSpec {
        symptom: Symptom::SoreThroat,
        display_name: "Sore Throat",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate, 10 = severe difficulty swallowing",
    },
    SymptomSpec {
        symptom: Symptom::RunnyNose,
        display_name: "Runny Nose",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate, 10 = profuse/continuous",
    },
    SymptomSpec {
        symptom: Symptom::Congestion,
        display_name: "Nasal Congestion",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = moderate stuffiness, 10 = complete blockage",
    },
    SymptomSpec {
        symptom: Symptom::Sneezing,
        display_name: "Sneezing",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = none, 5 = frequent bouts, 10 = continuous",
    },
    SymptomSpec {
        symptom: Symptom::LossOfAppetite,
        display_name: "Loss of Appetite",
        min: 0.0,
        max: 10.0,
        unit: "severity (0-10)",
        help: "0 = normal appetite, 5 = eating much less, 10 = cannot eat at all",
    },
];

// ── Disease profiles and rule tables ─────────────────────────────────────────

pub(super) const PROFILES: &[ProfileSpec] = &[
    ProfileSpec {
        disease: Disease::Malaria,
        description: "Parasitic infection transmitted by Anopheles mosquitoes. \
            Caused by Plasmodium species (P. falciparum most lethal). \
            Characterized by cyclical high fever with severe chills and \
            rigors, followed by sweating. WHO estimates 282 million cases and \
            610,000 deaths globally in 2024. Early symptoms (fever, headache, \
            chills) can be mild and difficult to recognize.",
        precautions: &[
            "Seek IMMEDIATE medical treatment — malaria can be fatal within 24 hours",
            "Use antimalarial medications as prescribed (e.g., ACT)",
            "Sleep under insecticide-treated mosquito nets",
            "Apply insect repellent containing DEET",
        ],
        references: &["R1", "R11 Ch.219", "R12 Ch.43", "R15"],
        hallmarks: &[Symptom::Chills, Symptom::Fever],
        stats: &[
            (Symptom::Fever, 0.96, 102.5, 1.5), // R1,R15: nearly universal
            (Symptom::Headache, 0.70, 6.5, 1.5),
            (Symptom::JointPain, 0.25, 3.5, 1.5),
            (Symptom::MusclePain, 0.50, 5.5, 1.5),
            (Symptom::Rash, 0.05, 2.0, 1.0), // rare in malaria
            (Symptom::NauseaVomiting, 0.40, 5.0, 1.5),
            (Symptom::Fatigue, 0.75, 7.0, 1.5),
            (Symptom::AbdominalPain, 0.20, 4.0, 1.5),
            (Symptom::Diarrhea, 0.25, 4.0, 1.5),
            (Symptom::Bleeding, 0.05, 3.0, 1.5),
            (Symptom::Chills, 0.85, 8.0, 1.2), // R1,R15: hallmark, 78-90%
            (Symptom::Jaundice, 0.10, 4.5, 1.5),
            (Symptom::Dehydration, 0.35, 4.5, 1.5),
            (Symptom::EyePain, 0.08, 2.0, 1.0),
            (Symptom::Cough, 0.18, 3.0, 1.5),
            (Symptom::SoreThroat, 0.05, 2.0, 1.0),
            (Symptom::RunnyNose, 0.03, 1.5, 1.0),
            (Symptom::Congestion, 0.03, 1.5, 1.0),
            (Symptom::Sneezing, 0.02, 1.0, 0.8),
            (Symptom::LossOfAppetite, 0.65, 6.5, 1.5),
        ],
        rules: &[
            (Symptom::Fever, "high", 0.80),
            (Symptom::Headache, "severe", 0.55),
            (Symptom::JointPain, "mild", 0.20),
            (Symptom::MusclePain, "moderate", 0.40),
            (Symptom::Rash, "none", 0.40), // absence helps vs dengue/chik/zika
            (Symptom::NauseaVomiting, "moderate", 0.40),
            (Symptom::Fatigue, "severe", 0.55),
            (Symptom::AbdominalPain, "mild", 0.30),
            (Symptom::Diarrhea, "mild", 0.30),
            (Symptom::Bleeding, "none", 0.35),
            (Symptom::Chills, "very_severe", 0.95), // defining symptom
            (Symptom::Jaundice, "none", 0.25),
            (Symptom::Dehydration, "moderate", 0.30),
            (Symptom::EyePain, "none", 0.25),
            (Symptom::Cough, "none", 0.30),
            (Symptom::SoreThroat, "none", 0.30),
            (Symptom::RunnyNose, "none", 0.35),
            (Symptom::Congestion, "none", 0.30),
            (Symptom::Sneezing, "none", 0.30),
            (Symptom::LossOfAppetite, "severe", 0.40),
        ],
    },
    ProfileSpec {
        disease: Disease::DengueFever,
        description: "Viral infection transmitted by Aedes aegypti mosquitoes. \
            Known as \"breakbone fever\" due to severe joint and muscle pain. \
            Retro-orbital (behind-eye) pain is characteristic. Can progress to \
            dengue hemorrhagic fever. WHO reports 14.6 million cases in 2024. \
            High fever (40°C/104°F), severe headache, pain behind eyes, \
            muscle/joint pains, nausea, rash are typical per WHO.",
        precautions: &[
            "Seek medical care immediately",
            "Stay hydrated with oral rehydration salts",
            "AVOID aspirin and NSAIDs (increased bleeding risk)",
            "Monitor for warning signs: severe abdominal pain, persistent vomiting, bleeding",
        ],
        references: &["R2", "R11 Ch.204", "R13"],
        hallmarks: &[
            Symptom::JointPain,
            Symptom::EyePain,
            Symptom::Rash,
            Symptom::Bleeding,
        ],
        stats: &[
            (Symptom::Fever, 0.97, 103.0, 1.2),
            (Symptom::Headache, 0.90, 7.5, 1.2),
            (Symptom::JointPain, 0.70, 7.5, 1.5), // hallmark "breakbone"
            (Symptom::MusclePain, 0.85, 7.0, 1.5),
            (Symptom::Rash, 0.65, 5.5, 1.5), // hallmark, 50-80%
            (Symptom::NauseaVomiting, 0.55, 5.5, 1.5),
            (Symptom::Fatigue, 0.80, 7.0, 1.2),
            (Symptom::AbdominalPain, 0.35, 5.0, 1.5),
            (Symptom::Diarrhea, 0.15, 3.5, 1.5),
            (Symptom::Bleeding, 0.25, 4.5, 2.0), // hallmark gums/nose, 20-30%
            (Symptom::Chills, 0.45, 5.0, 1.5),
            (Symptom::Jaundice, 0.03, 2.0, 1.0),
            (Symptom::Dehydration, 0.40, 4.5, 1.5),
            (Symptom::EyePain, 0.55, 6.5, 1.5), // hallmark retro-orbital pain
            (Symptom::Cough, 0.10, 2.5, 1.0),
            (Symptom::SoreThroat, 0.15, 3.0, 1.5),
            (Symptom::RunnyNose, 0.05, 2.0, 1.0),
            (Symptom::Congestion, 0.05, 2.0, 1.0),
            (Symptom::Sneezing, 0.03, 1.0, 0.8),
            (Symptom::LossOfAppetite, 0.70, 7.0, 1.5),
        ],
        rules: &[
            (Symptom::Fever, "high", 0.75),
            (Symptom::Headache, "severe", 0.70),
            (Symptom::JointPain, "severe", 0.90), // "breakbone"
            (Symptom::MusclePain, "severe", 0.70),
            (Symptom::Rash, "moderate", 0.85),
            (Symptom::NauseaVomiting, "moderate", 0.45),
            (Symptom::Fatigue, "severe", 0.45),
            (Symptom::AbdominalPain, "moderate", 0.40),
            (Symptom::Diarrhea, "mild", 0.15),
            (Symptom::Bleeding, "moderate", 0.80), // key differentiator vs chikungunya
            (Symptom::Chills, "moderate", 0.25),
            (Symptom::Jaundice, "none", 0.30),
            (Symptom::Dehydration, "moderate", 0.30),
            (Symptom::EyePain, "severe", 0.90), // retro-orbital pain
            (Symptom::Cough, "none", 0.40),
            (Symptom::SoreThroat, "none", 0.35),
            (Symptom::RunnyNose, "none", 0.40),
            (Symptom::Congestion, "none", 0.30),
            (Symptom::Sneezing, "none", 0.35),
            (Symptom::LossOfAppetite, "severe", 0.40),
        ],
    },
    ProfileSpec {
        disease: Disease::TyphoidFever,
        description: "Bacterial infection caused by Salmonella typhi, spread \
            through contaminated food and water. Characterized by sustained \
            high fever (stepladder pattern), significant abdominal symptoms, \
            and marked fatigue. Rose spots may appear on trunk. WHO: \
            \"prolonged high fever, fatigue, headache, nausea, abdominal pain, \
            constipation or diarrhoea.\" 9 million cases, 110,000 deaths \
            annually.",
        precautions: &[
            "Complete full course of prescribed antibiotics",
            "Drink only boiled or treated water",
            "Practice strict hand hygiene",
            "Avoid raw or undercooked food in endemic areas",
        ],
        references: &["R3", "R11 Ch.164", "R14"],
        hallmarks: &[
            Symptom::AbdominalPain,
            Symptom::Diarrhea,
            Symptom::LossOfAppetite,
        ],
        stats: &[
            (Symptom::Fever, 0.95, 102.0, 1.0), // sustained stepladder
            (Symptom::Headache, 0.65, 6.0, 1.5),
            (Symptom::JointPain, 0.10, 3.0, 1.5),
            (Symptom::MusclePain, 0.25, 4.0, 1.5),
            (Symptom::Rash, 0.20, 3.0, 1.5), // rose spots, 10-30%
            (Symptom::NauseaVomiting, 0.45, 5.5, 1.5),
            (Symptom::Fatigue, 0.80, 7.5, 1.2),
            (Symptom::AbdominalPain, 0.55, 6.5, 1.5), // hallmark
            (Symptom::Diarrhea, 0.45, 6.0, 1.5),      // hallmark, 30-60%
            (Symptom::Bleeding, 0.05, 3.0, 1.5),
            (Symptom::Chills, 0.30, 4.0, 1.5),
            (Symptom::Jaundice, 0.05, 2.5, 1.0),
            (Symptom::Dehydration, 0.40, 5.0, 1.5),
            (Symptom::EyePain, 0.05, 2.0, 1.0),
            (Symptom::Cough, 0.15, 3.0, 1.5),
            (Symptom::SoreThroat, 0.08, 2.5, 1.0),
            (Symptom::RunnyNose, 0.03, 1.5, 1.0),
            (Symptom::Congestion, 0.03, 1.5, 1.0),
            (Symptom::Sneezing, 0.02, 1.0, 0.8),
            (Symptom::LossOfAppetite, 0.75, 7.5, 1.2), // hallmark
        ],
        rules: &[
            (Symptom::Fever, "high", 0.75),
            (Symptom::Headache, "moderate", 0.45),
            (Symptom::JointPain, "none", 0.30),
            (Symptom::MusclePain, "mild", 0.25),
            (Symptom::Rash, "mild", 0.25), // rose spots
            (Symptom::NauseaVomiting, "moderate", 0.50),
            (Symptom::Fatigue, "severe", 0.65),
            (Symptom::AbdominalPain, "severe", 0.90), // severe cramps
            (Symptom::Diarrhea, "severe", 0.90),
            (Symptom::Bleeding, "none", 0.30),
            (Symptom::Chills, "mild", 0.20),
            (Symptom::Jaundice, "none", 0.25),
            (Symptom::Dehydration, "moderate", 0.50),
            (Symptom::EyePain, "none", 0.25),
            (Symptom::Cough, "none", 0.30),
            (Symptom::SoreThroat, "none", 0.25),
            (Symptom::RunnyNose, "none", 0.35),
            (Symptom::Congestion, "none", 0.25),
            (Symptom::Sneezing, "none", 0.30),
            (Symptom::LossOfAppetite, "severe", 0.85), // prominent anorexia
        ],
    },
    ProfileSpec {
        disease: Disease::Chikungunya,
        description: "Viral infection transmitted by Aedes mosquitoes. \
            Distinguished by extremely severe, debilitating bilateral joint \
            pain and swelling that can persist weeks to months. WHO: \
            \"characterized by abrupt onset of fever, frequently accompanied \
            by severe joint pain.\" Name from Kimakonde language meaning \
            \"that which bends up\" describing the contorted posture from \
            joint pain.",
        precautions: &[
            "Rest and stay well hydrated",
            "Use paracetamol for pain and fever relief",
            "Avoid aspirin until dengue is ruled out",
            "Use mosquito protection to prevent onward transmission",
        ],
        references: &["R4", "R11 Ch.204", "R12 Ch.15"],
        hallmarks: &[Symptom::JointPain, Symptom::Rash],
        stats: &[
            (Symptom::Fever, 0.92, 102.5, 1.2),
            (Symptom::Headache, 0.60, 6.0, 1.5),
            (Symptom::JointPain, 0.90, 8.5, 1.0), // hallmark, debilitating
            (Symptom::MusclePain, 0.60, 6.5, 1.5),
            (Symptom::Rash, 0.55, 5.5, 1.5), // hallmark, 40-75%
            (Symptom::NauseaVomiting, 0.30, 4.0, 1.5),
            (Symptom::Fatigue, 0.60, 6.5, 1.5),
            (Symptom::AbdominalPain, 0.10, 3.0, 1.5),
            (Symptom::Diarrhea, 0.08, 2.5, 1.0),
            (Symptom::Bleeding, 0.02, 2.0, 1.0), // very rare, key vs dengue
            (Symptom::Chills, 0.40, 5.0, 1.5),
            (Symptom::Jaundice, 0.02, 1.5, 1.0),
            (Symptom::Dehydration, 0.20, 3.5, 1.5),
            (Symptom::EyePain, 0.25, 4.0, 1.5),
            (Symptom::Cough, 0.05, 2.0, 1.0),
            (Symptom::SoreThroat, 0.05, 2.0, 1.0),
            (Symptom::RunnyNose, 0.03, 1.5, 1.0),
            (Symptom::Congestion, 0.03, 1.5, 1.0),
            (Symptom::Sneezing, 0.02, 1.0, 0.8),
            (Symptom::LossOfAppetite, 0.50, 6.0, 1.5),
        ],
        rules: &[
            (Symptom::Fever, "high", 0.70),
            (Symptom::Headache, "moderate", 0.40),
            (Symptom::JointPain, "very_severe", 0.95), // THE defining symptom
            (Symptom::MusclePain, "moderate", 0.50),
            (Symptom::Rash, "moderate", 0.75),
            (Symptom::NauseaVomiting, "mild", 0.25),
            (Symptom::Fatigue, "moderate", 0.40),
            (Symptom::AbdominalPain, "none", 0.30),
            (Symptom::Diarrhea, "none", 0.35),
            (Symptom::Bleeding, "none", 0.65), // absence distinguishes from dengue
            (Symptom::Chills, "moderate", 0.25),
            (Symptom::Jaundice, "none", 0.45),
            (Symptom::Dehydration, "mild", 0.20),
            (Symptom::EyePain, "mild", 0.25),
            (Symptom::Cough, "none", 0.35),
            (Symptom::SoreThroat, "none", 0.30),
            (Symptom::RunnyNose, "none", 0.35),
            (Symptom::Congestion, "none", 0.30),
            (Symptom::Sneezing, "none", 0.30),
            (Symptom::LossOfAppetite, "moderate", 0.30),
        ],
    },
    ProfileSpec {
        disease: Disease::ZikaVirus,
        description: "Viral infection transmitted by Aedes mosquitoes. Usually \
            a mild illness — most infections are asymptomatic. WHO: \"symptoms \
            include rash, fever, conjunctivitis, muscle and joint pain, \
            malaise and headache, lasting 2-7 days.\" Major concern during \
            pregnancy due to microcephaly risk. Notably MILD fever \
            distinguishes from dengue.",
        precautions: &[
            "Rest and drink plenty of fluids",
            "Use paracetamol for fever and pain",
            "Pregnant women should seek immediate medical care",
            "Use mosquito protection measures consistently",
        ],
        references: &["R5", "R11 Ch.204"],
        hallmarks: &[Symptom::Rash, Symptom::EyePain, Symptom::Fever],
        stats: &[
            (Symptom::Fever, 0.65, 99.5, 0.8), // notably LOW grade
            (Symptom::Headache, 0.45, 4.5, 1.5),
            (Symptom::JointPain, 0.65, 5.0, 1.5),
            (Symptom::MusclePain, 0.48, 4.0, 1.5),
            (Symptom::Rash, 0.90, 6.5, 1.5), // hallmark, ~90%, most prominent
            (Symptom::NauseaVomiting, 0.15, 3.0, 1.5),
            (Symptom::Fatigue, 0.45, 4.5, 1.5),
            (Symptom::AbdominalPain, 0.05, 2.0, 1.0),
            (Symptom::Diarrhea, 0.05, 2.0, 1.0),
            (Symptom::Bleeding, 0.01, 1.0, 0.5),
            (Symptom::Chills, 0.15, 3.0, 1.5),
            (Symptom::Jaundice, 0.01, 1.0, 0.5),
            (Symptom::Dehydration, 0.10, 2.5, 1.0),
            (Symptom::EyePain, 0.60, 5.5, 1.5), // hallmark conjunctivitis, 55-65%
            (Symptom::Cough, 0.05, 2.0, 1.0),
            (Symptom::SoreThroat, 0.05, 2.0, 1.0),
            (Symptom::RunnyNose, 0.05, 2.0, 1.0),
            (Symptom::Congestion, 0.03, 1.5, 1.0),
            (Symptom::Sneezing, 0.02, 1.0, 0.8),
            (Symptom::LossOfAppetite, 0.30, 4.0, 1.5),
        ],
        rules: &[
            (Symptom::Fever, "low_grade", 0.80), // notably mild fever
            (Symptom::Headache, "moderate", 0.35),
            (Symptom::JointPain, "moderate", 0.45),
            (Symptom::MusclePain, "mild", 0.35),
            (Symptom::Rash, "severe", 0.90), // most prominent symptom
            (Symptom::NauseaVomiting, "mild", 0.20),
            (Symptom::Fatigue, "moderate", 0.30),
            (Symptom::AbdominalPain, "none", 0.25),
            (Symptom::Diarrhea, "none", 0.25),
            (Symptom::Bleeding, "none", 0.50),
            (Symptom::Chills, "mild", 0.20),
            (Symptom::Jaundice, "none", 0.45),
            (Symptom::Dehydration, "none", 0.20),
            (Symptom::EyePain, "moderate", 0.85), // conjunctivitis
            (Symptom::Cough, "none", 0.25),
            (Symptom::SoreThroat, "none", 0.20),
            (Symptom::RunnyNose, "none", 0.20),
            (Symptom::Congestion, "none", 0.20),
            (Symptom::Sneezing, "none", 0.20),
            (Symptom::LossOfAppetite, "mild", 0.20),
        ],
    },
    ProfileSpec {
        disease: Disease::Leptospirosis,
        description: "Bacterial infection caused by Leptospira spirochetes, \
            transmitted through contact with water/soil contaminated by \
            infected animal urine. Characterized by severe calf muscle pain, \
            conjunctival suffusion (eye redness without discharge), and in \
            severe form (Weil's disease) jaundice, renal failure, and \
            hemorrhage. Common after flooding events in tropical areas.",
        precautions: &[
            "Seek immediate medical treatment — antibiotics (doxycycline/penicillin)",
            "Avoid wading in floodwater or stagnant water",
            "Wear protective clothing and boots in endemic areas",
            "Monitor for signs of liver/kidney involvement",
        ],
        references: &["R10", "R11 Ch.179", "R12 Ch.42", "R18"],
        hallmarks: &[Symptom::MusclePain, Symptom::Jaundice, Symptom::EyePain],
        stats: &[
            (Symptom::Fever, 0.95, 102.5, 1.2),
            (Symptom::Headache, 0.85, 7.0, 1.2), // 75-95%, prominent
            (Symptom::JointPain, 0.35, 4.5, 1.5),
            (Symptom::MusclePain, 0.90, 8.0, 1.2), // hallmark calves, 80-95%
            (Symptom::Rash, 0.08, 2.5, 1.0),
            (Symptom::NauseaVomiting, 0.50, 6.0, 1.5),
            (Symptom::Fatigue, 0.70, 7.0, 1.5),
            (Symptom::AbdominalPain, 0.40, 5.0, 1.5),
            (Symptom::Diarrhea, 0.25, 4.0, 1.5),
            (Symptom::Bleeding, 0.15, 4.0, 2.0),
            (Symptom::Chills, 0.55, 6.0, 1.5),
            (Symptom::Jaundice, 0.20, 6.5, 1.5), // hallmark Weil's, 5-40%
            (Symptom::Dehydration, 0.35, 4.5, 1.5),
            (Symptom::EyePain, 0.40, 5.0, 1.5), // hallmark conjunctival suffusion
            (Symptom::Cough, 0.20, 3.5, 1.5),
            (Symptom::SoreThroat, 0.05, 2.0, 1.0),
            (Symptom::RunnyNose, 0.03, 1.5, 1.0),
            (Symptom::Congestion, 0.03, 1.5, 1.0),
            (Symptom::Sneezing, 0.02, 1.0, 0.8),
            (Symptom::LossOfAppetite, 0.60, 6.5, 1.5),
        ],
        rules: &[
            (Symptom::Fever, "high", 0.75),
            (Symptom::Headache, "severe", 0.65),
            (Symptom::JointPain, "moderate", 0.35),
            (Symptom::MusclePain, "very_severe", 0.95), // calf muscles
            (Symptom::Rash, "none", 0.35),
            (Symptom::NauseaVomiting, "moderate", 0.50),
            (Symptom::Fatigue, "severe", 0.55),
            (Symptom::AbdominalPain, "moderate", 0.40),
            (Symptom::Diarrhea, "mild", 0.25),
            (Symptom::Bleeding, "mild", 0.40),
            (Symptom::Chills, "moderate", 0.45),
            (Symptom::Jaundice, "severe", 0.85), // Weil's disease
            (Symptom::Dehydration, "moderate", 0.30),
            (Symptom::EyePain, "moderate", 0.70), // conjunctival suffusion
            (Symptom::Cough, "mild", 0.25),
            (Symptom::SoreThroat, "none", 0.20),
            (Symptom::RunnyNose, "none", 0.25),
            (Symptom::Congestion, "none", 0.20),
            (Symptom::Sneezing, "none", 0.20),
            (Symptom::LossOfAppetite, "severe", 0.45),
        ],
    },
    ProfileSpec {
        disease: Disease::Cholera,
        description: "Acute diarrheal infection caused by Vibrio cholerae, \
            transmitted through contaminated water or food. WHO: \"severe \
            acute watery diarrhoea, which can be fatal within hours if \
            untreated.\" Hallmarked by profuse rice-water diarrhea and rapid \
            dehydration. Most have mild/moderate symptoms. Critically: fever \
            is usually MINIMAL or ABSENT — key differentiator from other \
            tropical diseases.",
        precautions: &[
            "Begin oral rehydration therapy (ORS) IMMEDIATELY",
            "Seek emergency medical care — IV fluids may be needed",
            "Drink only boiled or treated water",
            "Practice strict sanitation and hand hygiene",
        ],
        references: &["R6", "R11 Ch.163"],
        hallmarks: &[
            Symptom::Diarrhea,
            Symptom::Dehydration,
            Symptom::NauseaVomiting,
        ],
        stats: &[
            (Symptom::Fever, 0.10, 99.5, 0.8), // usually ABSENT, key differentiator
            (Symptom::Headache, 0.20, 3.5, 1.5),
            (Symptom::JointPain, 0.05, 2.0, 1.0),
            (Symptom::MusclePain, 0.35, 4.5, 1.5), // cramps from dehydration
            (Symptom::Rash, 0.01, 1.0, 0.5),
            (Symptom::NauseaVomiting, 0.70, 7.5, 1.2), // hallmark, 60-80%
            (Symptom::Fatigue, 0.60, 6.5, 1.5),
            (Symptom::AbdominalPain, 0.40, 5.0, 1.5),
            (Symptom::Diarrhea, 0.98, 9.0, 0.8), // hallmark profuse rice-water
            (Symptom::Bleeding, 0.01, 1.0, 0.5),
            (Symptom::Chills, 0.10, 2.5, 1.0),
            (Symptom::Jaundice, 0.01, 1.0, 0.5),
            (Symptom::Dehydration, 0.90, 8.5, 1.0), // hallmark, life-threatening
            (Symptom::EyePain, 0.02, 1.5, 0.8),
            (Symptom::Cough, 0.02, 1.5, 0.8),
            (Symptom::SoreThroat, 0.02, 1.5, 0.8),
            (Symptom::RunnyNose, 0.01, 1.0, 0.5),
            (Symptom::Congestion, 0.01, 1.0, 0.5),
            (Symptom::Sneezing, 0.01, 1.0, 0.5),
            (Symptom::LossOfAppetite, 0.70, 7.5, 1.2),
        ],
        rules: &[
            (Symptom::Fever, "normal", 0.80), // fever usually ABSENT
            (Symptom::Headache, "mild", 0.25),
            (Symptom::JointPain, "none", 0.35),
            (Symptom::MusclePain, "mild", 0.35),
            (Symptom::Rash, "none", 0.50),
            (Symptom::NauseaVomiting, "very_severe", 0.80),
            (Symptom::Fatigue, "severe", 0.50),
            (Symptom::AbdominalPain, "moderate", 0.50),
            (Symptom::Diarrhea, "very_severe", 0.95), // rice-water
            (Symptom::Bleeding, "none", 0.50),
            (Symptom::Chills, "none", 0.30),
            (Symptom::Jaundice, "none", 0.45),
            (Symptom::Dehydration, "very_severe", 0.95),
            (Symptom::EyePain, "none", 0.30),
            (Symptom::Cough, "none", 0.30),
            (Symptom::SoreThroat, "none", 0.25),
            (Symptom::RunnyNose, "none", 0.25),
            (Symptom::Congestion, "none", 0.25),
            (Symptom::Sneezing, "none", 0.25),
            (Symptom::LossOfAppetite, "severe", 0.55),
        ],
    },
    ProfileSpec {
        disease: Disease::YellowFever,
        description: "Viral hemorrhagic disease transmitted by Aedes and \
            Haemagogus mosquitoes. WHO: \"initial symptoms fever, headache, \
            body aches, nausea, vomiting. About 15% develop severe infection \
            with jaundice, bleeding, organ failure — 50% of severe cases die \
            within 7-10 days.\" Named for the jaundice it causes. \
            Vaccine-preventable with single dose. 31,000-82,000 deaths/year \
            in endemic regions.",
        precautions: &[
            "Seek emergency medical care immediately",
            "Supportive care in intensive care unit if severe",
            "Get vaccinated BEFORE traveling to endemic areas",
            "Use mosquito protection measures at all times",
        ],
        references: &["R7", "R11 Ch.204", "R12 Ch.17"],
        hallmarks: &[Symptom::Jaundice, Symptom::Bleeding, Symptom::Fever],
        stats: &[
            (Symptom::Fever, 0.98, 103.5, 1.2), // hallmark, very high
            (Symptom::Headache, 0.75, 7.0, 1.5),
            (Symptom::JointPain, 0.20, 3.5, 1.5),
            (Symptom::MusclePain, 0.55, 6.0, 1.5),
            (Symptom::Rash, 0.05, 2.0, 1.0),
            (Symptom::NauseaVomiting, 0.60, 7.0, 1.5),
            (Symptom::Fatigue, 0.70, 7.0, 1.5),
            (Symptom::AbdominalPain, 0.35, 5.0, 1.5),
            (Symptom::Diarrhea, 0.15, 3.5, 1.5),
            (Symptom::Bleeding, 0.20, 6.5, 2.0), // hallmark, 15-20%
            (Symptom::Chills, 0.50, 5.5, 1.5),
            (Symptom::Jaundice, 0.30, 7.5, 1.5), // hallmark toxic phase
            (Symptom::Dehydration, 0.40, 5.0, 1.5),
            (Symptom::EyePain, 0.15, 3.0, 1.5),
            (Symptom::Cough, 0.05, 2.0, 1.0),
            (Symptom::SoreThroat, 0.03, 1.5, 1.0),
            (Symptom::RunnyNose, 0.02, 1.0, 0.5),
            (Symptom::Congestion, 0.02, 1.0, 0.5),
            (Symptom::Sneezing, 0.01, 1.0, 0.5),
            (Symptom::LossOfAppetite, 0.65, 7.0, 1.5),
        ],
        rules: &[
            (Symptom::Fever, "very_high", 0.85),
            (Symptom::Headache, "severe", 0.60),
            (Symptom::JointPain, "mild", 0.25),
            (Symptom::MusclePain, "moderate", 0.50),
            (Symptom::Rash, "none", 0.35),
            (Symptom::NauseaVomiting, "severe", 0.65),
            (Symptom::Fatigue, "severe", 0.55),
            (Symptom::AbdominalPain, "moderate", 0.40),
            (Symptom::Diarrhea, "mild", 0.25),
            (Symptom::Bleeding, "severe", 0.90), // hemorrhagic
            (Symptom::Chills, "moderate", 0.40),
            (Symptom::Jaundice, "very_severe", 0.95), // the namesake
            (Symptom::Dehydration, "moderate", 0.40),
            (Symptom::EyePain, "mild", 0.25),
            (Symptom::Cough, "none", 0.30),
            (Symptom::SoreThroat, "none", 0.25),
            (Symptom::RunnyNose, "none", 0.30),
            (Symptom::Congestion, "none", 0.25),
            (Symptom::Sneezing, "none", 0.25),
            (Symptom::LossOfAppetite, "severe", 0.45),
        ],
    },
    ProfileSpec {
        disease: Disease::CommonCold,
        description: "Upper respiratory tract infection caused by rhinoviruses \
            (most common), coronaviruses, or other respiratory viruses. CDC: \
            \"symptoms include runny nose, nasal congestion, cough, sneezing, \
            sore throat, headache, mild body aches, fever usually low grade \
            in adults.\" Peaks within 2-3 days, usually resolves in <1 week. \
            Adults average 2-3 colds per year.",
        precautions: &[
            "Rest and drink plenty of fluids",
            "Use over-the-counter cold remedies for symptom relief",
            "Cover coughs and sneezes; wash hands frequently",
            "Seek medical care if symptoms worsen or last >10 days",
        ],
        references: &["R9", "R16"],
        hallmarks: &[
            Symptom::RunnyNose,
            Symptom::Congestion,
            Symptom::Sneezing,
            Symptom::SoreThroat,
        ],
        stats: &[
            (Symptom::Fever, 0.15, 99.5, 0.6), // low-grade or absent in adults
            (Symptom::Headache, 0.35, 3.5, 1.5),
            (Symptom::JointPain, 0.05, 2.0, 1.0),
            (Symptom::MusclePain, 0.15, 2.5, 1.0),
            (Symptom::Rash, 0.01, 1.0, 0.5),
            (Symptom::NauseaVomiting, 0.03, 2.0, 1.0),
            (Symptom::Fatigue, 0.30, 3.5, 1.5),
            (Symptom::AbdominalPain, 0.02, 1.5, 0.8),
            (Symptom::Diarrhea, 0.02, 1.5, 0.8),
            (Symptom::Bleeding, 0.00, 0.0, 0.0), // never
            (Symptom::Chills, 0.10, 2.5, 1.0),
            (Symptom::Jaundice, 0.00, 0.0, 0.0), // never
            (Symptom::Dehydration, 0.05, 2.0, 1.0),
            (Symptom::EyePain, 0.10, 2.5, 1.0), // watery eyes
            (Symptom::Cough, 0.50, 4.0, 1.5),
            (Symptom::SoreThroat, 0.65, 5.0, 1.5), // hallmark
            (Symptom::RunnyNose, 0.90, 6.5, 1.5),  // hallmark, 80-100%
            (Symptom::Congestion, 0.88, 6.5, 1.5), // hallmark, 80-100%
            (Symptom::Sneezing, 0.65, 5.5, 1.5),   // hallmark, 50-75%
            (Symptom::LossOfAppetite, 0.15, 3.0, 1.5),
        ],
        rules: &[
            (Symptom::Fever, "normal", 0.80), // absent or very low; key differentiator
            (Symptom::Headache, "mild", 0.25),
            (Symptom::JointPain, "none", 0.35),
            (Symptom::MusclePain, "none", 0.30),
            (Symptom::Rash, "none", 0.45),
            (Symptom::NauseaVomiting, "none", 0.40),
            (Symptom::Fatigue, "mild", 0.30),
            (Symptom::AbdominalPain, "none", 0.40),
            (Symptom::Diarrhea, "none", 0.40),
            (Symptom::Bleeding, "none", 0.55),
            (Symptom::Chills, "none", 0.35),
            (Symptom::Jaundice, "none", 0.55),
            (Symptom::Dehydration, "none", 0.30),
            (Symptom::EyePain, "none", 0.25),
            (Symptom::Cough, "moderate", 0.55),
            (Symptom::SoreThroat, "moderate", 0.85),
            (Symptom::RunnyNose, "severe", 0.95), // THE defining symptom
            (Symptom::Congestion, "severe", 0.95),
            (Symptom::Sneezing, "moderate", 0.85),
            (Symptom::LossOfAppetite, "none", 0.20),
        ],
    },
    ProfileSpec {
        disease: Disease::Influenza,
        description: "Acute respiratory infection caused by influenza A or B \
            viruses. WHO: \"symptoms include sudden onset of fever, cough \
            (usually dry), headache, muscle and joint pain, severe malaise, \
            sore throat, runny nose.\" Distinguished from common cold by \
            SUDDEN onset, HIGH fever, SEVERE body aches, and extreme fatigue. \
            ~1 billion annual cases, 290,000-650,000 respiratory deaths \
            globally.",
        precautions: &[
            "Rest and stay home to avoid spreading infection",
            "Drink plenty of fluids",
            "Seek medical care if in high-risk group (elderly, pregnant, chronic illness)",
            "Annual flu vaccination is recommended for prevention",
        ],
        references: &["R8", "R11 Ch.203", "R17"],
        hallmarks: &[
            Symptom::Fever,
            Symptom::Cough,
            Symptom::MusclePain,
            Symptom::Fatigue,
        ],
        stats: &[
            (Symptom::Fever, 0.80, 102.0, 1.0), // hallmark, sudden high
            (Symptom::Headache, 0.55, 5.5, 1.5),
            (Symptom::JointPain, 0.35, 4.5, 1.5),
            (Symptom::MusclePain, 0.70, 6.5, 1.5), // hallmark
            (Symptom::Rash, 0.02, 1.5, 0.8),
            (Symptom::NauseaVomiting, 0.15, 3.5, 1.5),
            (Symptom::Fatigue, 0.85, 7.5, 1.2), // hallmark "severe malaise"
            (Symptom::AbdominalPain, 0.05, 2.5, 1.0),
            (Symptom::Diarrhea, 0.08, 2.5, 1.0),
            (Symptom::Bleeding, 0.01, 1.0, 0.5),
            (Symptom::Chills, 0.50, 5.5, 1.5),
            (Symptom::Jaundice, 0.00, 0.0, 0.0), // never
            (Symptom::Dehydration, 0.25, 3.5, 1.5),
            (Symptom::EyePain, 0.15, 3.0, 1.5),
            (Symptom::Cough, 0.88, 6.0, 1.5), // hallmark, usually dry
            (Symptom::SoreThroat, 0.60, 5.0, 1.5),
            (Symptom::RunnyNose, 0.50, 4.5, 1.5), // present but less than cold
            (Symptom::Congestion, 0.45, 4.0, 1.5),
            (Symptom::Sneezing, 0.20, 3.0, 1.5),
            (Symptom::LossOfAppetite, 0.60, 6.0, 1.5),
        ],
        rules: &[
            (Symptom::Fever, "high", 0.85), // sudden-onset high fever
            (Symptom::Headache, "moderate", 0.45),
            (Symptom::JointPain, "moderate", 0.30),
            (Symptom::MusclePain, "severe", 0.85), // severe body aches
            (Symptom::Rash, "none", 0.40),
            (Symptom::NauseaVomiting, "mild", 0.20),
            (Symptom::Fatigue, "severe", 0.90), // extreme malaise
            (Symptom::AbdominalPain, "none", 0.25),
            (Symptom::Diarrhea, "none", 0.25),
            (Symptom::Bleeding, "none", 0.45),
            (Symptom::Chills, "moderate", 0.45),
            (Symptom::Jaundice, "none", 0.45),
            (Symptom::Dehydration, "mild", 0.20),
            (Symptom::EyePain, "none", 0.30),
            (Symptom::Cough, "severe", 0.90), // key differentiator vs tropical
            (Symptom::SoreThroat, "moderate", 0.50),
            (Symptom::RunnyNose, "moderate", 0.30),
            (Symptom::Congestion, "mild", 0.25),
            (Symptom::Sneezing, "mild", 0.15),
            (Symptom::LossOfAppetite, "moderate", 0.40),
        ],
    },
];
