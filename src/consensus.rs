// src/consensus.rs
//
// Consensus combiner: reconciles the fuzzy engine's knowledge-based opinion
// with the classifier's data-driven opinion into one ranked, confidence-
// scored result.
//
// Weighting is adaptive:
// - Sparse inputs favor the fuzzy rules (they handle partial vectors by
//   skipping unreported symptoms); complete vectors favor the classifier.
// - When the fuzzy engine's two leading hypotheses are nearly tied, its
//   weight is halved and the classifier takes the remainder.
//
// Agreement between the two models raises the reported confidence; a
// disagreement is surfaced in the validation block with both top picks.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use log::{debug, info};

use crate::classifier::ClassifierPredictor;
use crate::config::{
    BALANCED_COMPLETENESS_THRESHOLD, BALANCED_WEIGHTS, COMPLETE_WEIGHTS, FUZZY_GAP_THRESHOLD,
    HIGH_CONFIDENCE_MIN_SCORE, LOW_CERTAINTY_WARNING_PCT, LOW_COMPLETENESS_WARNING_PCT,
    LOW_CONSENSUS_WARNING_SCORE, MEDIUM_CONFIDENCE_MIN_SCORE, MIN_FUZZY_WEIGHT,
    MODERATE_THRESHOLD, MORE_SYMPTOMS_RECOMMENDATION_PCT, RELIABLE_THRESHOLD,
    SPARSE_COMPLETENESS_THRESHOLD, SPARSE_WEIGHTS,
};
use crate::fuzzy::FuzzyEngine;
use crate::knowledge::KnowledgeBase;
use crate::models::{Disease, Symptom};
use crate::results::{
    ConfidenceLevel, DiseasePrediction, PredictionResult, ReliabilityStatus, ValidationReport,
};
use crate::util::{round1, round4};

/// Explicit weight override for one prediction. When absent, weights are
/// derived from input completeness.
#[derive(Debug, Clone, Copy)]
pub struct ConsensusWeights {
    pub fuzzy: f64,
    pub classifier: f64,
}

//------------------------------------------------------------------------------
// PURE COMBINATION STEPS
//------------------------------------------------------------------------------
// Free functions so the consensus math is unit-testable without a trained
// model artifact.

/// Default (fuzzy, classifier) weights for a given input completeness.
fn default_weights(completeness: f64) -> (f64, f64) {
    if completeness < SPARSE_COMPLETENESS_THRESHOLD {
        SPARSE_WEIGHTS
    } else if completeness < BALANCED_COMPLETENESS_THRESHOLD {
        BALANCED_WEIGHTS
    } else {
        COMPLETE_WEIGHTS
    }
}

/// Normalizes raw fuzzy scores to sum to 1 for a fair convex combination.
/// When every score is zero, every catalog disease gets a normalized score
/// of zero instead.
fn normalize_fuzzy(
    fuzzy_scores: &[(Disease, f64)],
    kb: &KnowledgeBase,
) -> HashMap<Disease, f64> {
    let total: f64 = fuzzy_scores.iter().map(|(_, s)| s).sum();
    if total > 0.0 {
        fuzzy_scores
            .iter()
            .map(|&(d, s)| (d, s / total))
            .collect()
    } else {
        kb.diseases().map(|d| (d, 0.0)).collect()
    }
}

/// Relative gap between the top two raw fuzzy scores. Defined as 1.0
/// (maximal confidence, no correction) when fewer than two diseases scored
/// or the leader scored zero.
fn fuzzy_confidence_gap(fuzzy_scores: &[(Disease, f64)]) -> f64 {
    if fuzzy_scores.len() >= 2 && fuzzy_scores[0].1 > 0.0 {
        (fuzzy_scores[0].1 - fuzzy_scores[1].1) / fuzzy_scores[0].1
    } else {
        1.0
    }
}

/// Ambiguity in the rule-based opinion defers to the data-driven one: the
/// fuzzy weight is halved (floored) and the classifier weight recomputed as
/// its complement.
fn apply_uncertainty_override(fuzzy_weight: f64) -> (f64, f64) {
    let fuzzy = (fuzzy_weight * 0.5).max(MIN_FUZZY_WEIGHT);
    (fuzzy, 1.0 - fuzzy)
}

/// Convex combination over the union of diseases scored by either model,
/// rounded to 4 decimals and sorted descending (catalog order breaks ties).
fn combine(
    fuzzy_normalized: &HashMap<Disease, f64>,
    rf_probs: &HashMap<Disease, f64>,
    fuzzy_weight: f64,
    classifier_weight: f64,
) -> Vec<(Disease, f64)> {
    let mut consensus: Vec<(Disease, f64)> = Disease::ALL
        .iter()
        .filter(|d| fuzzy_normalized.contains_key(*d) || rf_probs.contains_key(*d))
        .map(|&d| {
            let f = fuzzy_normalized.get(&d).copied().unwrap_or(0.0);
            let r = rf_probs.get(&d).copied().unwrap_or(0.0);
            (d, round4(fuzzy_weight * f + classifier_weight * r))
        })
        .collect();

    consensus.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    consensus
}

/// Relative gap between the top two consensus scores, percent. 100 when
/// fewer than two diseases scored. The 0.001 divisor floor guards the
/// degenerate all-zero case.
fn certainty_pct(consensus: &[(Disease, f64)]) -> f64 {
    if consensus.len() >= 2 {
        round1((consensus[0].1 - consensus[1].1) / consensus[0].1.max(0.001) * 100.0)
    } else {
        100.0
    }
}

/// 0-100 composite of consensus strength, model agreement, completeness and
/// certainty.
fn reliability_score(
    top_consensus: f64,
    models_agree: bool,
    completeness_pct: f64,
    certainty: f64,
) -> f64 {
    let agreement = if models_agree { 30.0 } else { 15.0 };
    let raw = top_consensus * 100.0 * 0.30
        + agreement
        + completeness_pct.min(100.0) * 0.25
        + certainty.min(100.0) * 0.15;
    round1(raw.min(100.0))
}

fn build_validation(
    provided: usize,
    consensus: &[(Disease, f64)],
    fuzzy_top: Option<Disease>,
    rf_top: Option<Disease>,
    models_agree: bool,
    confidence_level: ConfidenceLevel,
) -> ValidationReport {
    let total = Symptom::ORDER.len();
    let completeness = round1(provided as f64 / total as f64 * 100.0);
    let top_consensus = consensus.first().map(|(_, s)| *s).unwrap_or(0.0);
    let certainty = certainty_pct(consensus);
    let reliability = reliability_score(top_consensus, models_agree, completeness, certainty);

    let status = if reliability >= RELIABLE_THRESHOLD {
        ReliabilityStatus::Reliable
    } else if reliability >= MODERATE_THRESHOLD {
        ReliabilityStatus::Moderate
    } else {
        ReliabilityStatus::Uncertain
    };

    let mut warnings = Vec::new();
    if completeness < LOW_COMPLETENESS_WARNING_PCT {
        warnings.push(format!(
            "Only {}/{} symptoms provided. More data improves accuracy.",
            provided, total
        ));
    }
    if !models_agree {
        warnings.push(format!(
            "Models disagree: Fuzzy suggests {}, RF suggests {}.",
            fuzzy_top.map(|d| d.as_str()).unwrap_or("?"),
            rf_top.map(|d| d.as_str()).unwrap_or("?")
        ));
    }
    if certainty < LOW_CERTAINTY_WARNING_PCT {
        warnings.push("Multiple diseases have similar scores — prediction is ambiguous.".to_string());
    }
    if top_consensus < LOW_CONSENSUS_WARNING_SCORE {
        warnings.push(
            "Low overall confidence. Symptoms may not clearly match any single disease."
                .to_string(),
        );
    }

    let mut recommendations = Vec::new();
    if completeness < MORE_SYMPTOMS_RECOMMENDATION_PCT {
        recommendations.push("Provide more symptom values for improved accuracy.".to_string());
    }
    recommendations.push(
        "This is a screening tool only — consult a healthcare professional for proper diagnosis."
            .to_string(),
    );
    if !models_agree {
        recommendations
            .push("Consider both suggested diseases and discuss with a doctor.".to_string());
    }

    ValidationReport {
        status,
        reliability_score: reliability,
        confidence_level,
        data_completeness: completeness,
        prediction_certainty: certainty,
        models_agree,
        symptoms_provided: format!("{}/{}", provided, total),
        warnings,
        recommendations,
    }
}

/// Canonical result for an empty symptom map. None of the combination steps
/// run.
fn empty_result() -> PredictionResult {
    let total = Symptom::ORDER.len();
    PredictionResult {
        predictions: Vec::new(),
        consensus_top: None,
        fuzzy_top: None,
        rf_top: None,
        models_agree: false,
        confidence_level: ConfidenceLevel::Low,
        validation: ValidationReport {
            status: ReliabilityStatus::Uncertain,
            reliability_score: 0.0,
            confidence_level: ConfidenceLevel::Low,
            data_completeness: 0.0,
            prediction_certainty: 0.0,
            models_agree: false,
            symptoms_provided: format!("0/{}", total),
            warnings: vec!["No symptoms provided.".to_string()],
            recommendations: vec!["Please enter at least a few symptom values.".to_string()],
        },
        fuzzy_details: None,
        symptom_values: HashMap::new(),
    }
}

//------------------------------------------------------------------------------
// SERVICE
//------------------------------------------------------------------------------

/// The prediction-time service object: explicitly constructed once at process
/// initialization and shared by reference across request handlers. Stateless
/// per request.
pub struct ScreeningService {
    kb: Arc<KnowledgeBase>,
    fuzzy: FuzzyEngine,
    classifier: ClassifierPredictor,
}

impl ScreeningService {
    pub fn new(kb: Arc<KnowledgeBase>, classifier: ClassifierPredictor) -> Self {
        let fuzzy = FuzzyEngine::new(kb.clone());
        Self {
            kb,
            fuzzy,
            classifier,
        }
    }

    pub fn knowledge(&self) -> &Arc<KnowledgeBase> {
        &self.kb
    }

    pub fn fuzzy_engine(&self) -> &FuzzyEngine {
        &self.fuzzy
    }

    /// Generates the consensus prediction for a (possibly partial) symptom
    /// vector. Values must already be validated against their declared
    /// ranges; absent keys mean "not reported".
    pub async fn predict(
        &self,
        symptom_values: &HashMap<Symptom, f64>,
        weights: Option<ConsensusWeights>,
    ) -> Result<PredictionResult> {
        if symptom_values.is_empty() {
            return Ok(empty_result());
        }

        let completeness = symptom_values.len() as f64 / Symptom::ORDER.len() as f64;
        let (mut fuzzy_weight, mut classifier_weight) = match weights {
            Some(w) => (w.fuzzy, w.classifier),
            None => default_weights(completeness),
        };

        // The two opinions are independent; run them concurrently and join.
        let (fuzzy_scores, rf_result) = tokio::join!(
            async { self.fuzzy.predict(symptom_values) },
            self.classifier.predict(symptom_values)
        );
        let rf_scores = rf_result?;
        let rf_probs: HashMap<Disease, f64> = rf_scores.iter().copied().collect();

        let fuzzy_normalized = normalize_fuzzy(&fuzzy_scores, &self.kb);

        let gap = fuzzy_confidence_gap(&fuzzy_scores);
        if gap < FUZZY_GAP_THRESHOLD {
            let (f, c) = apply_uncertainty_override(fuzzy_weight);
            debug!(
                "Fuzzy top-2 gap {:.3} below {}; shifting weight to classifier ({:.2} -> {:.2})",
                gap, FUZZY_GAP_THRESHOLD, fuzzy_weight, f
            );
            fuzzy_weight = f;
            classifier_weight = c;
        }

        let consensus = combine(&fuzzy_normalized, &rf_probs, fuzzy_weight, classifier_weight);

        // Agreement is judged on the raw top picks, before normalization.
        let fuzzy_top = fuzzy_scores.first().map(|&(d, _)| d);
        let rf_top = rf_scores.first().map(|&(d, _)| d);
        let consensus_top = consensus.first().map(|&(d, _)| d);
        let models_agree = match (fuzzy_top, rf_top) {
            (Some(f), Some(r)) => f == r,
            _ => false,
        };

        let top_score = consensus.first().map(|&(_, s)| s).unwrap_or(0.0);
        let confidence_level = if models_agree && top_score >= HIGH_CONFIDENCE_MIN_SCORE {
            ConfidenceLevel::High
        } else if models_agree || top_score >= MEDIUM_CONFIDENCE_MIN_SCORE {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        };

        let fuzzy_details = self.fuzzy.detailed_analysis(symptom_values);
        let validation = build_validation(
            symptom_values.len(),
            &consensus,
            fuzzy_top,
            rf_top,
            models_agree,
            confidence_level,
        );

        let fuzzy_raw: HashMap<Disease, f64> = fuzzy_scores.iter().copied().collect();
        let predictions = consensus
            .iter()
            .take(3)
            .map(|&(disease, score)| {
                let profile = self.kb.profile(disease);
                DiseasePrediction {
                    disease,
                    confidence: round1(score * 100.0),
                    fuzzy_score: round1(fuzzy_raw.get(&disease).copied().unwrap_or(0.0) * 100.0),
                    rf_score: round1(rf_probs.get(&disease).copied().unwrap_or(0.0) * 100.0),
                    description: profile.description.to_string(),
                    precautions: profile.precautions.iter().map(|p| p.to_string()).collect(),
                    hallmarks: profile.hallmarks.to_vec(),
                    references: profile.references.iter().map(|r| r.to_string()).collect(),
                }
            })
            .collect();

        info!(
            "Consensus: top {:?} ({:.4}), agree={}, level={}, weights fuzzy {:.2} / rf {:.2}",
            consensus_top.map(|d| d.as_str()),
            top_score,
            models_agree,
            confidence_level.as_str(),
            fuzzy_weight,
            classifier_weight
        );

        Ok(PredictionResult {
            predictions,
            consensus_top,
            fuzzy_top,
            rf_top,
            models_agree,
            confidence_level,
            validation,
            fuzzy_details,
            symptom_values: symptom_values.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{PredictorOptions, TrainingOptions};

    #[test]
    fn default_weights_follow_completeness_bands() {
        assert_eq!(default_weights(0.10), (0.65, 0.35));
        assert_eq!(default_weights(0.29), (0.65, 0.35));
        assert_eq!(default_weights(0.30), (0.50, 0.50));
        assert_eq!(default_weights(0.45), (0.50, 0.50));
        assert_eq!(default_weights(0.60), (0.40, 0.60));
        assert_eq!(default_weights(0.95), (0.40, 0.60));
    }

    #[test]
    fn classifier_weight_strictly_increases_across_bands() {
        let sparse = default_weights(0.20).1;
        let balanced = default_weights(0.40).1;
        let complete = default_weights(0.80).1;
        assert!(sparse < balanced && balanced < complete);
    }

    #[test]
    fn gap_sentinels() {
        assert_eq!(fuzzy_confidence_gap(&[]), 1.0);
        assert_eq!(fuzzy_confidence_gap(&[(Disease::Malaria, 0.8)]), 1.0);
        assert_eq!(
            fuzzy_confidence_gap(&[(Disease::Malaria, 0.0), (Disease::Cholera, 0.0)]),
            1.0
        );
        let gap = fuzzy_confidence_gap(&[(Disease::Malaria, 0.8), (Disease::Cholera, 0.4)]);
        assert!((gap - 0.5).abs() < 1e-9);
    }

    #[test]
    fn uncertainty_override_halves_and_floors() {
        let (f, c) = apply_uncertainty_override(0.65);
        assert!((f - 0.325).abs() < 1e-9);
        assert!((f + c - 1.0).abs() < 1e-9);

        // Floor applies when half the weight would drop below the minimum.
        let (f, c) = apply_uncertainty_override(0.20);
        assert_eq!(f, MIN_FUZZY_WEIGHT);
        assert!((c - 0.85).abs() < 1e-9);
    }

    #[test]
    fn normalization_handles_all_zero_scores() {
        let kb = KnowledgeBase::load().unwrap();
        let zeroed: Vec<(Disease, f64)> = Disease::ALL.iter().map(|&d| (d, 0.0)).collect();
        let normalized = normalize_fuzzy(&zeroed, &kb);
        assert_eq!(normalized.len(), Disease::ALL.len());
        assert!(normalized.values().all(|&v| v == 0.0));

        let scored = vec![(Disease::Malaria, 0.6), (Disease::DengueFever, 0.2)];
        let normalized = normalize_fuzzy(&scored, &kb);
        let sum: f64 = normalized.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!((normalized[&Disease::Malaria] - 0.75).abs() < 1e-9);
    }

    #[test]
    fn combined_scores_form_a_convex_distribution() {
        let kb = KnowledgeBase::load().unwrap();
        let fuzzy = vec![
            (Disease::Malaria, 0.8),
            (Disease::DengueFever, 0.4),
            (Disease::Influenza, 0.2),
        ];
        let normalized = normalize_fuzzy(&fuzzy, &kb);
        let rf: HashMap<Disease, f64> = Disease::ALL.iter().map(|&d| (d, 0.1)).collect();

        let consensus = combine(&normalized, &rf, 0.5, 0.5);
        let sum: f64 = consensus.iter().map(|(_, s)| s).sum();
        assert!((sum - 1.0).abs() < 1e-3);
        for window in consensus.windows(2) {
            assert!(window[0].1 >= window[1].1);
        }
    }

    #[test]
    fn certainty_sentinel_and_divisor_guard() {
        assert_eq!(certainty_pct(&[]), 100.0);
        assert_eq!(certainty_pct(&[(Disease::Malaria, 0.4)]), 100.0);
        // All-zero consensus: the 0.001 floor keeps the division defined.
        let c = certainty_pct(&[(Disease::Malaria, 0.0), (Disease::Cholera, 0.0)]);
        assert_eq!(c, 0.0);
        let c = certainty_pct(&[(Disease::Malaria, 0.5), (Disease::Cholera, 0.25)]);
        assert_eq!(c, 50.0);
    }

    #[test]
    fn reliability_is_capped_and_banded() {
        let r = reliability_score(1.0, true, 100.0, 100.0);
        assert_eq!(r, 100.0);
        let r = reliability_score(0.0, false, 0.0, 0.0);
        assert_eq!(r, 15.0);
    }

    #[test]
    fn validation_warnings_accumulate() {
        // Sparse, disagreeing, ambiguous, weak: all four warnings fire.
        let consensus = vec![(Disease::Malaria, 0.10), (Disease::Cholera, 0.09)];
        let validation = build_validation(
            3,
            &consensus,
            Some(Disease::Malaria),
            Some(Disease::Cholera),
            false,
            ConfidenceLevel::Low,
        );
        assert_eq!(validation.warnings.len(), 4);
        assert_eq!(validation.status, ReliabilityStatus::Uncertain);
        assert_eq!(validation.symptoms_provided, "3/20");
        // Disclaimer is always present.
        assert!(
            validation
                .recommendations
                .iter()
                .any(|r| r.contains("screening tool"))
        );
        assert!(
            validation
                .recommendations
                .iter()
                .any(|r| r.contains("Consider both"))
        );
    }

    #[tokio::test]
    async fn empty_input_short_circuits_without_touching_the_model() {
        let kb = Arc::new(KnowledgeBase::load().unwrap());
        let dir = tempfile::tempdir().unwrap();
        // auto_train disabled and no artifact on disk: any model use would
        // error, so a clean empty result proves the short circuit.
        let classifier = ClassifierPredictor::new(
            kb.clone(),
            dir.path(),
            PredictorOptions {
                auto_train: false,
                training: TrainingOptions::default(),
            },
        );
        let service = ScreeningService::new(kb, classifier);

        let result = service.predict(&HashMap::new(), None).await.unwrap();
        assert!(result.predictions.is_empty());
        assert_eq!(result.consensus_top, None);
        assert_eq!(result.fuzzy_top, None);
        assert_eq!(result.rf_top, None);
        assert!(!result.models_agree);
        assert_eq!(result.confidence_level, ConfidenceLevel::Low);
        assert_eq!(result.validation.status, ReliabilityStatus::Uncertain);
        assert_eq!(result.validation.reliability_score, 0.0);
        assert_eq!(result.validation.warnings, vec!["No symptoms provided."]);
        assert_eq!(result.validation.symptoms_provided, "0/20");
    }
}
