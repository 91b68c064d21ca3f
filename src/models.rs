// src/models.rs

use serde::{Deserialize, Serialize};

//------------------------------------------------------------------------------
// SYMPTOM IDENTIFIERS
//------------------------------------------------------------------------------
// The 20 tracked symptoms. The declaration order of `Symptom::ORDER` is the
// canonical feature-vector schema: every numeric vector in the system (synthetic
// patient rows, classifier inputs, CSV columns) is laid out in this order.

/// One of the fixed set of clinically tracked symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symptom {
    Fever,
    Headache,
    JointPain,
    MusclePain,
    Rash,
    NauseaVomiting,
    Fatigue,
    AbdominalPain,
    Diarrhea,
    Bleeding,
    Chills,
    Jaundice,
    Dehydration,
    EyePain,
    Cough,
    SoreThroat,
    RunnyNose,
    Congestion,
    Sneezing,
    LossOfAppetite,
}

/// Symptom grouping used by the form-rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymptomCategory {
    Systemic,
    Pain,
    Gastrointestinal,
    Respiratory,
    SkinAndHemorrhagic,
    Other,
}

impl Symptom {
    /// Canonical feature ordering. Must be identical everywhere a numeric
    /// vector is built.
    pub const ORDER: [Symptom; 20] = [
        Symptom::Fever,
        Symptom::Headache,
        Symptom::JointPain,
        Symptom::MusclePain,
        Symptom::Rash,
        Symptom::NauseaVomiting,
        Symptom::Fatigue,
        Symptom::AbdominalPain,
        Symptom::Diarrhea,
        Symptom::Bleeding,
        Symptom::Chills,
        Symptom::Jaundice,
        Symptom::Dehydration,
        Symptom::EyePain,
        Symptom::Cough,
        Symptom::SoreThroat,
        Symptom::RunnyNose,
        Symptom::Congestion,
        Symptom::Sneezing,
        Symptom::LossOfAppetite,
    ];

    /// Converts the enum to its wire/key representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symptom::Fever => "fever",
            Symptom::Headache => "headache",
            Symptom::JointPain => "joint_pain",
            Symptom::MusclePain => "muscle_pain",
            Symptom::Rash => "rash",
            Symptom::NauseaVomiting => "nausea_vomiting",
            Symptom::Fatigue => "fatigue",
            Symptom::AbdominalPain => "abdominal_pain",
            Symptom::Diarrhea => "diarrhea",
            Symptom::Bleeding => "bleeding",
            Symptom::Chills => "chills",
            Symptom::Jaundice => "jaundice",
            Symptom::Dehydration => "dehydration",
            Symptom::EyePain => "eye_pain",
            Symptom::Cough => "cough",
            Symptom::SoreThroat => "sore_throat",
            Symptom::RunnyNose => "runny_nose",
            Symptom::Congestion => "congestion",
            Symptom::Sneezing => "sneezing",
            Symptom::LossOfAppetite => "loss_of_appetite",
        }
    }

    /// Parses a symptom key as supplied by the external input layer.
    pub fn parse(key: &str) -> Option<Self> {
        Symptom::ORDER
            .iter()
            .copied()
            .find(|s| s.as_str() == key)
    }

    /// Position of this symptom in the canonical feature vector.
    pub fn feature_index(&self) -> usize {
        match self {
            Symptom::Fever => 0,
            Symptom::Headache => 1,
            Symptom::JointPain => 2,
            Symptom::MusclePain => 3,
            Symptom::Rash => 4,
            Symptom::NauseaVomiting => 5,
            Symptom::Fatigue => 6,
            Symptom::AbdominalPain => 7,
            Symptom::Diarrhea => 8,
            Symptom::Bleeding => 9,
            Symptom::Chills => 10,
            Symptom::Jaundice => 11,
            Symptom::Dehydration => 12,
            Symptom::EyePain => 13,
            Symptom::Cough => 14,
            Symptom::SoreThroat => 15,
            Symptom::RunnyNose => 16,
            Symptom::Congestion => 17,
            Symptom::Sneezing => 18,
            Symptom::LossOfAppetite => 19,
        }
    }

    /// UI grouping for this symptom.
    pub fn category(&self) -> SymptomCategory {
        match self {
            Symptom::Fever | Symptom::Fatigue | Symptom::Chills | Symptom::LossOfAppetite => {
                SymptomCategory::Systemic
            }
            Symptom::Headache
            | Symptom::JointPain
            | Symptom::MusclePain
            | Symptom::AbdominalPain
            | Symptom::EyePain => SymptomCategory::Pain,
            Symptom::NauseaVomiting | Symptom::Diarrhea => SymptomCategory::Gastrointestinal,
            Symptom::Cough
            | Symptom::SoreThroat
            | Symptom::RunnyNose
            | Symptom::Congestion
            | Symptom::Sneezing => SymptomCategory::Respiratory,
            Symptom::Rash | Symptom::Bleeding => SymptomCategory::SkinAndHemorrhagic,
            Symptom::Jaundice | Symptom::Dehydration => SymptomCategory::Other,
        }
    }

    /// Healthy baseline value substituted when this symptom is not reported.
    /// "Not reported" is treated as "not experiencing".
    pub fn baseline_value(&self) -> f64 {
        match self {
            Symptom::Fever => 98.6, // normal body temperature
            _ => 0.0,
        }
    }
}

//------------------------------------------------------------------------------
// DISEASE IDENTIFIERS
//------------------------------------------------------------------------------
// Variant declaration order matches the clinical catalog order and is used as
// the deterministic tie-break when sorting equal scores.

/// One of the ten diseases covered by the screening catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Disease {
    #[serde(rename = "Malaria")]
    Malaria,
    #[serde(rename = "Dengue Fever")]
    DengueFever,
    #[serde(rename = "Typhoid Fever")]
    TyphoidFever,
    #[serde(rename = "Chikungunya")]
    Chikungunya,
    #[serde(rename = "Zika Virus")]
    ZikaVirus,
    #[serde(rename = "Leptospirosis")]
    Leptospirosis,
    #[serde(rename = "Cholera")]
    Cholera,
    #[serde(rename = "Yellow Fever")]
    YellowFever,
    #[serde(rename = "Common Cold")]
    CommonCold,
    #[serde(rename = "Influenza")]
    Influenza,
}

impl Disease {
    /// All diseases in catalog order.
    pub const ALL: [Disease; 10] = [
        Disease::Malaria,
        Disease::DengueFever,
        Disease::TyphoidFever,
        Disease::Chikungunya,
        Disease::ZikaVirus,
        Disease::Leptospirosis,
        Disease::Cholera,
        Disease::YellowFever,
        Disease::CommonCold,
        Disease::Influenza,
    ];

    /// Human-readable display name (also the serialized form).
    pub fn as_str(&self) -> &'static str {
        match self {
            Disease::Malaria => "Malaria",
            Disease::DengueFever => "Dengue Fever",
            Disease::TyphoidFever => "Typhoid Fever",
            Disease::Chikungunya => "Chikungunya",
            Disease::ZikaVirus => "Zika Virus",
            Disease::Leptospirosis => "Leptospirosis",
            Disease::Cholera => "Cholera",
            Disease::YellowFever => "Yellow Fever",
            Disease::CommonCold => "Common Cold",
            Disease::Influenza => "Influenza",
        }
    }

    /// Creates the enum from its display name.
    pub fn parse(name: &str) -> Option<Self> {
        Disease::ALL.iter().copied().find(|d| d.as_str() == name)
    }
}
