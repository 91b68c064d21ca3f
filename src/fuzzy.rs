// src/fuzzy.rs
//
// Fuzzy inference engine for disease screening.
//
// Membership functions are calibrated to clinical symptom ranges:
// - Fever (°F): five overlapping sets anchored at standard medical
//   temperature thresholds (normal < 99, low-grade 98-100.4, moderate
//   100-102, high 101.5-104, very high > 103.5).
// - Severity (0-10): a shared five-level family with deliberate overlap so a
//   boundary value gets partial membership in two adjacent levels.
//
// The engine scores how well a patient's reported symptoms match each
// disease's expected fuzzy pattern, using weighted membership matching
// against the knowledge-base rule tables.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::knowledge::KnowledgeBase;
use crate::models::{Disease, Symptom};
use crate::results::{FuzzyAnalysis, SymptomContribution};
use crate::util::{round3, round4};

//------------------------------------------------------------------------------
// MEMBERSHIP FUNCTIONS
//------------------------------------------------------------------------------

/// Triangular membership: peak = 1.0 at `b`, zero at `a` and `c`.
/// Uses a small tolerance at the peak so the peak value always gets
/// membership 1.0 despite floating-point representation.
fn triangular(x: f64, a: f64, b: f64, c: f64) -> f64 {
    if x < a || x > c {
        return 0.0;
    }
    if (x - b).abs() < 1e-9 {
        return 1.0; // exact peak
    }
    if a == b {
        return if c != b { (c - x) / (c - b) } else { 0.0 };
    }
    if b == c {
        return if b != a { (x - a) / (b - a) } else { 0.0 };
    }
    if x <= b {
        (x - a) / (b - a)
    } else {
        (c - x) / (c - b)
    }
}

/// Trapezoidal membership: plateau = 1.0 on [b, c], zero outside [a, d].
/// The boundary points x == a and x == d return a small epsilon (0.01)
/// instead of zero for continuity with the neighbouring set.
fn trapezoidal(x: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    if x < a || x > d {
        return 0.0;
    }
    if x >= b && x <= c {
        return 1.0;
    }
    if x <= a {
        return 0.01; // x == a edge
    }
    if x >= d {
        return 0.01; // x == d edge
    }
    if x < b {
        if b != a { (x - a) / (b - a) } else { 1.0 }
    } else {
        if d != c { (d - x) / (d - c) } else { 1.0 }
    }
}

//------------------------------------------------------------------------------
// FUZZY-SET FAMILIES
//------------------------------------------------------------------------------

/// Fever fuzzy levels (°F family).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeverLevel {
    Normal,
    LowGrade,
    Moderate,
    High,
    VeryHigh,
}

impl FeverLevel {
    pub const ALL: [FeverLevel; 5] = [
        FeverLevel::Normal,
        FeverLevel::LowGrade,
        FeverLevel::Moderate,
        FeverLevel::High,
        FeverLevel::VeryHigh,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeverLevel::Normal => "normal",
            FeverLevel::LowGrade => "low_grade",
            FeverLevel::Moderate => "moderate",
            FeverLevel::High => "high",
            FeverLevel::VeryHigh => "very_high",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        FeverLevel::ALL.iter().copied().find(|l| l.as_str() == name)
    }

    /// Membership degree of a temperature reading in this level.
    pub fn membership(&self, x: f64) -> f64 {
        match self {
            FeverLevel::Normal => trapezoidal(x, 93.0, 95.0, 97.5, 99.5),
            FeverLevel::LowGrade => triangular(x, 98.0, 99.5, 101.0),
            FeverLevel::Moderate => triangular(x, 99.5, 101.0, 102.5),
            FeverLevel::High => triangular(x, 101.0, 102.5, 104.5),
            FeverLevel::VeryHigh => trapezoidal(x, 103.0, 104.5, 106.0, 108.0),
        }
    }
}

/// Generic severity fuzzy levels (0-10 family) shared by all non-fever
/// symptoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    None,
    Mild,
    Moderate,
    Severe,
    VerySevere,
}

impl SeverityLevel {
    pub const ALL: [SeverityLevel; 5] = [
        SeverityLevel::None,
        SeverityLevel::Mild,
        SeverityLevel::Moderate,
        SeverityLevel::Severe,
        SeverityLevel::VerySevere,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityLevel::None => "none",
            SeverityLevel::Mild => "mild",
            SeverityLevel::Moderate => "moderate",
            SeverityLevel::Severe => "severe",
            SeverityLevel::VerySevere => "very_severe",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        SeverityLevel::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == name)
    }

    /// Membership degree of a 0-10 severity value in this level.
    /// Adjacent levels overlap on purpose: e.g. a value of 8 belongs to both
    /// severe and very_severe, which is clinically realistic.
    pub fn membership(&self, x: f64) -> f64 {
        match self {
            SeverityLevel::None => trapezoidal(x, -1.0, 0.0, 0.5, 2.5),
            SeverityLevel::Mild => triangular(x, 0.5, 2.5, 5.0),
            SeverityLevel::Moderate => triangular(x, 3.0, 5.0, 7.5),
            SeverityLevel::Severe => triangular(x, 5.5, 7.5, 9.5),
            SeverityLevel::VerySevere => trapezoidal(x, 7.5, 8.5, 10.0, 11.0),
        }
    }
}

/// A level from either family, as referenced by a diagnostic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum FuzzyLevel {
    Fever(FeverLevel),
    Severity(SeverityLevel),
}

impl FuzzyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            FuzzyLevel::Fever(l) => l.as_str(),
            FuzzyLevel::Severity(l) => l.as_str(),
        }
    }

    pub fn membership(&self, x: f64) -> f64 {
        match self {
            FuzzyLevel::Fever(l) => l.membership(x),
            FuzzyLevel::Severity(l) => l.membership(x),
        }
    }

    /// Resolves a level name against the family that applies to `symptom`.
    /// Returns `None` when the name is not defined in that family.
    pub fn resolve(symptom: Symptom, name: &str) -> Option<Self> {
        if symptom == Symptom::Fever {
            FeverLevel::from_name(name).map(FuzzyLevel::Fever)
        } else {
            SeverityLevel::from_name(name).map(FuzzyLevel::Severity)
        }
    }
}

/// Membership degrees of `value` across every level of the family that
/// applies to `symptom`, in canonical family order.
pub fn membership_profile(symptom: Symptom, value: f64) -> Vec<(FuzzyLevel, f64)> {
    if symptom == Symptom::Fever {
        FeverLevel::ALL
            .iter()
            .map(|l| (FuzzyLevel::Fever(*l), l.membership(value)))
            .collect()
    } else {
        SeverityLevel::ALL
            .iter()
            .map(|l| (FuzzyLevel::Severity(*l), l.membership(value)))
            .collect()
    }
}

//------------------------------------------------------------------------------
// INFERENCE ENGINE
//------------------------------------------------------------------------------

/// Fuzzy inference engine. Read-only over the shared knowledge base and safe
/// to call from concurrent requests.
pub struct FuzzyEngine {
    kb: Arc<KnowledgeBase>,
}

impl FuzzyEngine {
    pub fn new(kb: Arc<KnowledgeBase>) -> Self {
        Self { kb }
    }

    /// Scores every disease against the reported symptom values.
    ///
    /// For each disease, rules whose symptom was reported contribute
    /// `membership(expected level) * weight` to a weighted average. Rules for
    /// unreported symptoms are skipped and neither help nor hurt the score.
    /// Diseases with no applicable rule get no entry.
    ///
    /// Returns `(disease, score)` pairs with scores in [0, 1], sorted by
    /// score descending (catalog order breaks ties).
    pub fn predict(&self, symptom_values: &HashMap<Symptom, f64>) -> Vec<(Disease, f64)> {
        if symptom_values.is_empty() {
            return Vec::new();
        }

        let mut scores: Vec<(Disease, f64)> = Vec::new();

        for disease in self.kb.diseases() {
            let mut weighted_sum = 0.0;
            let mut total_weight = 0.0;

            for rule in self.kb.rules(disease) {
                let Some(&value) = symptom_values.get(&rule.symptom) else {
                    continue;
                };
                weighted_sum += rule.expected.membership(value) * rule.weight;
                total_weight += rule.weight;
            }

            if total_weight > 0.0 {
                scores.push((disease, round4(weighted_sum / total_weight)));
            }
        }

        // Stable sort: equal scores keep catalog order, so output is
        // deterministic across calls.
        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        debug!(
            "Fuzzy inference scored {} diseases from {} reported symptoms",
            scores.len(),
            symptom_values.len()
        );

        scores
    }

    /// Per-symptom breakdown for the top-scoring disease: which fuzzy level
    /// the reported value actually falls in versus the level the rule
    /// expects, and how much each rule contributed to the score. Explains WHY
    /// a particular disease came out on top.
    pub fn detailed_analysis(
        &self,
        symptom_values: &HashMap<Symptom, f64>,
    ) -> Option<FuzzyAnalysis> {
        let scores = self.predict(symptom_values);
        let &(top_disease, top_score) = scores.first()?;

        let profile = self.kb.profile(top_disease);
        let mut details: Vec<SymptomContribution> = Vec::new();

        for rule in self.kb.rules(top_disease) {
            let Some(&value) = symptom_values.get(&rule.symptom) else {
                continue;
            };

            let memberships = membership_profile(rule.symptom, value);

            // First maximal membership in family order wins ties.
            let mut actual_level = memberships[0].0;
            let mut best = memberships[0].1;
            for &(level, degree) in &memberships[1..] {
                if degree > best {
                    best = degree;
                    actual_level = level;
                }
            }

            let match_degree = rule.expected.membership(value);

            details.push(SymptomContribution {
                symptom: rule.symptom,
                display_name: self.kb.definition(rule.symptom).display_name.to_string(),
                value,
                expected_level: rule.expected.as_str().to_string(),
                actual_level: actual_level.as_str().to_string(),
                match_degree: round3(match_degree),
                weight: rule.weight,
                contribution: round3(match_degree * rule.weight),
                is_hallmark: profile.hallmarks.contains(&rule.symptom),
            });
        }

        details.sort_by(|a, b| {
            b.contribution
                .partial_cmp(&a.contribution)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Some(FuzzyAnalysis {
            disease: top_disease,
            score: top_score,
            details,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::KnowledgeBase;

    fn engine() -> FuzzyEngine {
        FuzzyEngine::new(Arc::new(KnowledgeBase::load().unwrap()))
    }

    fn symptoms(pairs: &[(Symptom, f64)]) -> HashMap<Symptom, f64> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn triangular_peak_and_bounds() {
        assert_eq!(triangular(102.5, 101.0, 102.5, 104.5), 1.0);
        assert_eq!(triangular(100.9, 101.0, 102.5, 104.5), 0.0);
        assert_eq!(triangular(104.6, 101.0, 102.5, 104.5), 0.0);
        let rising = triangular(101.75, 101.0, 102.5, 104.5);
        assert!((rising - 0.5).abs() < 1e-9);
    }

    #[test]
    fn trapezoidal_plateau_and_boundary_epsilon() {
        assert_eq!(trapezoidal(96.0, 93.0, 95.0, 97.5, 99.5), 1.0);
        // Exact boundary points carry the continuity epsilon, not zero.
        assert_eq!(trapezoidal(93.0, 93.0, 95.0, 97.5, 99.5), 0.01);
        assert_eq!(trapezoidal(99.5, 93.0, 95.0, 97.5, 99.5), 0.01);
        assert_eq!(trapezoidal(92.9, 93.0, 95.0, 97.5, 99.5), 0.0);
        assert_eq!(trapezoidal(99.6, 93.0, 95.0, 97.5, 99.5), 0.0);
    }

    #[test]
    fn all_memberships_stay_in_unit_interval() {
        let mut t = 90.0;
        while t <= 110.0 {
            for level in FeverLevel::ALL {
                let m = level.membership(t);
                assert!((0.0..=1.0).contains(&m), "{:?} at {} gave {}", level, t, m);
            }
            t += 0.1;
        }
        let mut s = -1.0;
        while s <= 12.0 {
            for level in SeverityLevel::ALL {
                let m = level.membership(s);
                assert!((0.0..=1.0).contains(&m), "{:?} at {} gave {}", level, s, m);
            }
            s += 0.1;
        }
    }

    #[test]
    fn adjacent_severity_levels_overlap() {
        // A value of 8 is both severe and very_severe to some degree.
        let severe = SeverityLevel::Severe.membership(8.0);
        let very_severe = SeverityLevel::VerySevere.membership(8.0);
        assert!(severe > 0.0);
        assert!(very_severe > 0.0);
    }

    #[test]
    fn scores_are_bounded_and_sorted() {
        let input = symptoms(&[
            (Symptom::Fever, 103.0),
            (Symptom::Headache, 7.0),
            (Symptom::Chills, 9.0),
        ]);
        let scores = engine().predict(&input);
        assert!(!scores.is_empty());
        for window in scores.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
        for (_, score) in &scores {
            assert!((0.0..=1.0).contains(score));
        }
    }

    #[test]
    fn empty_input_scores_nothing() {
        assert!(engine().predict(&HashMap::new()).is_empty());
        assert!(engine().detailed_analysis(&HashMap::new()).is_none());
    }

    #[test]
    fn classic_malaria_presentation_tops_as_malaria() {
        let input = symptoms(&[
            (Symptom::Fever, 103.0),
            (Symptom::Headache, 7.0),
            (Symptom::Chills, 9.0),
            (Symptom::Fatigue, 7.0),
            (Symptom::MusclePain, 5.0),
            (Symptom::NauseaVomiting, 5.0),
            (Symptom::LossOfAppetite, 6.0),
        ]);
        let scores = engine().predict(&input);
        assert_eq!(scores[0].0, Disease::Malaria, "scores: {:?}", scores);
    }

    #[test]
    fn classic_common_cold_presentation_tops_as_cold() {
        let input = symptoms(&[
            (Symptom::RunnyNose, 7.0),
            (Symptom::Congestion, 7.0),
            (Symptom::Sneezing, 6.0),
            (Symptom::SoreThroat, 5.0),
            (Symptom::Cough, 4.0),
            (Symptom::Headache, 3.0),
        ]);
        let scores = engine().predict(&input);
        assert_eq!(scores[0].0, Disease::CommonCold, "scores: {:?}", scores);
    }

    #[test]
    fn classic_cholera_presentation_tops_as_cholera() {
        let input = symptoms(&[
            (Symptom::Diarrhea, 9.0),
            (Symptom::Dehydration, 9.0),
            (Symptom::NauseaVomiting, 8.0),
            (Symptom::AbdominalPain, 5.0),
            (Symptom::Fatigue, 7.0),
            (Symptom::LossOfAppetite, 8.0),
        ]);
        let scores = engine().predict(&input);
        assert_eq!(scores[0].0, Disease::Cholera, "scores: {:?}", scores);
    }

    #[test]
    fn classic_presentations_rank_their_disease_first() {
        // Textbook presentations per the WHO/CDC-sourced catalog. Each case
        // must put its disease first on the fuzzy ranking alone.
        let cases: Vec<(Disease, Vec<(Symptom, f64)>)> = vec![
            (
                Disease::Malaria,
                vec![
                    (Symptom::Fever, 103.0),
                    (Symptom::Headache, 7.0),
                    (Symptom::Chills, 9.0),
                    (Symptom::Fatigue, 7.0),
                    (Symptom::MusclePain, 5.0),
                    (Symptom::NauseaVomiting, 5.0),
                    (Symptom::LossOfAppetite, 6.0),
                ],
            ),
            (
                Disease::DengueFever,
                vec![
                    (Symptom::Fever, 103.5),
                    (Symptom::Headache, 8.0),
                    (Symptom::JointPain, 8.0),
                    (Symptom::MusclePain, 7.0),
                    (Symptom::Rash, 5.0),
                    (Symptom::EyePain, 7.0),
                    (Symptom::Fatigue, 7.0),
                    (Symptom::Bleeding, 3.0),
                ],
            ),
            (
                Disease::TyphoidFever,
                vec![
                    (Symptom::Fever, 102.0),
                    (Symptom::Fatigue, 8.0),
                    (Symptom::AbdominalPain, 7.0),
                    (Symptom::Diarrhea, 6.0),
                    (Symptom::LossOfAppetite, 8.0),
                    (Symptom::Headache, 6.0),
                    (Symptom::NauseaVomiting, 5.0),
                ],
            ),
            (
                Disease::Chikungunya,
                vec![
                    (Symptom::Fever, 102.5),
                    (Symptom::JointPain, 9.0),
                    (Symptom::MusclePain, 7.0),
                    (Symptom::Rash, 5.0),
                    (Symptom::Headache, 6.0),
                    (Symptom::Fatigue, 6.0),
                ],
            ),
            (
                Disease::ZikaVirus,
                vec![
                    (Symptom::Fever, 99.5),
                    (Symptom::Rash, 7.0),
                    (Symptom::EyePain, 6.0),
                    (Symptom::JointPain, 5.0),
                    (Symptom::Headache, 4.0),
                    (Symptom::Fatigue, 4.0),
                ],
            ),
            (
                Disease::Leptospirosis,
                vec![
                    (Symptom::Fever, 102.5),
                    (Symptom::MusclePain, 8.0),
                    (Symptom::Headache, 7.0),
                    (Symptom::Jaundice, 6.0),
                    (Symptom::EyePain, 5.0),
                    (Symptom::Chills, 6.0),
                    (Symptom::NauseaVomiting, 6.0),
                ],
            ),
            (
                Disease::Cholera,
                vec![
                    (Symptom::Diarrhea, 9.0),
                    (Symptom::Dehydration, 9.0),
                    (Symptom::NauseaVomiting, 8.0),
                    (Symptom::AbdominalPain, 5.0),
                    (Symptom::Fatigue, 7.0),
                    (Symptom::LossOfAppetite, 8.0),
                ],
            ),
            (
                Disease::YellowFever,
                vec![
                    (Symptom::Fever, 104.0),
                    (Symptom::Jaundice, 8.0),
                    (Symptom::Bleeding, 7.0),
                    (Symptom::NauseaVomiting, 7.0),
                    (Symptom::Headache, 7.0),
                    (Symptom::Fatigue, 7.0),
                    (Symptom::MusclePain, 6.0),
                ],
            ),
            (
                Disease::CommonCold,
                vec![
                    (Symptom::RunnyNose, 7.0),
                    (Symptom::Congestion, 7.0),
                    (Symptom::Sneezing, 6.0),
                    (Symptom::SoreThroat, 5.0),
                    (Symptom::Cough, 4.0),
                    (Symptom::Headache, 3.0),
                ],
            ),
            (
                Disease::Influenza,
                vec![
                    (Symptom::Fever, 102.0),
                    (Symptom::Cough, 6.0),
                    (Symptom::MusclePain, 7.0),
                    (Symptom::Fatigue, 8.0),
                    (Symptom::Headache, 6.0),
                    (Symptom::Chills, 5.0),
                    (Symptom::SoreThroat, 5.0),
                ],
            ),
        ];

        let engine = engine();
        for (expected, input) in cases {
            let scores = engine.predict(&symptoms(&input));
            assert_eq!(
                scores[0].0,
                expected,
                "expected {} first, got {:?}",
                expected.as_str(),
                scores
            );
        }
    }

    #[test]
    fn detailed_analysis_explains_top_disease() {
        let input = symptoms(&[
            (Symptom::Fever, 103.0),
            (Symptom::Chills, 9.0),
            (Symptom::Headache, 7.0),
        ]);
        let analysis = engine().detailed_analysis(&input).unwrap();
        assert_eq!(analysis.disease, Disease::Malaria);
        assert_eq!(analysis.details.len(), 3);
        for window in analysis.details.windows(2) {
            assert!(window[0].contribution >= window[1].contribution);
        }
        let chills = analysis
            .details
            .iter()
            .find(|d| d.symptom == Symptom::Chills)
            .unwrap();
        assert!(chills.is_hallmark);
        assert_eq!(chills.expected_level, "very_severe");
    }
}
