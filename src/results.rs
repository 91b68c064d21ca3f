// src/results.rs
//
// Structured results handed to the external request/rendering collaborators.
// Everything here is serializable and carries no behavior beyond enum/string
// conversions.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Disease, Symptom};

//------------------------------------------------------------------------------
// PREDICTION RESULTS
//------------------------------------------------------------------------------

/// Qualitative confidence of a consensus prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
        }
    }
}

/// Overall reliability band of a prediction (0-100 composite score).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReliabilityStatus {
    Reliable,
    Moderate,
    Uncertain,
}

impl ReliabilityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReliabilityStatus::Reliable => "reliable",
            ReliabilityStatus::Moderate => "moderate",
            ReliabilityStatus::Uncertain => "uncertain",
        }
    }
}

/// One of the top-3 diseases in the consensus ranking, with profile metadata
/// for display. Score fields are percentages rounded to one decimal.
#[derive(Debug, Clone, Serialize)]
pub struct DiseasePrediction {
    pub disease: Disease,
    /// Combined consensus confidence, percent.
    pub confidence: f64,
    /// Raw fuzzy-engine score, percent.
    pub fuzzy_score: f64,
    /// Classifier probability, percent.
    pub rf_score: f64,
    pub description: String,
    pub precautions: Vec<String>,
    pub hallmarks: Vec<Symptom>,
    pub references: Vec<String>,
}

/// Validation and reliability block for one prediction.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub status: ReliabilityStatus,
    /// 0-100 composite of consensus strength, agreement, completeness and
    /// certainty.
    pub reliability_score: f64,
    pub confidence_level: ConfidenceLevel,
    /// Percentage of the 20 tracked symptoms actually supplied.
    pub data_completeness: f64,
    /// Relative gap between the top two consensus scores, percent.
    pub prediction_certainty: f64,
    pub models_agree: bool,
    /// Display string, e.g. "7/20".
    pub symptoms_provided: String,
    pub warnings: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Per-symptom contribution to the top fuzzy match.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomContribution {
    pub symptom: Symptom,
    pub display_name: String,
    pub value: f64,
    /// Fuzzy level the rule expects for the top disease.
    pub expected_level: String,
    /// Fuzzy level with the highest membership for the reported value.
    pub actual_level: String,
    /// Membership of the reported value in the expected level.
    pub match_degree: f64,
    pub weight: f64,
    /// match_degree × weight.
    pub contribution: f64,
    pub is_hallmark: bool,
}

/// Explanation of the fuzzy engine's top prediction.
#[derive(Debug, Clone, Serialize)]
pub struct FuzzyAnalysis {
    pub disease: Disease,
    pub score: f64,
    /// Sorted by contribution descending.
    pub details: Vec<SymptomContribution>,
}

/// Complete per-request prediction result. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    /// Top-3 diseases by consensus score, descending.
    pub predictions: Vec<DiseasePrediction>,
    pub consensus_top: Option<Disease>,
    pub fuzzy_top: Option<Disease>,
    pub rf_top: Option<Disease>,
    pub models_agree: bool,
    pub confidence_level: ConfidenceLevel,
    pub validation: ValidationReport,
    /// Absent when no prediction was possible.
    pub fuzzy_details: Option<FuzzyAnalysis>,
    /// Echo of the caller's input.
    pub symptom_values: HashMap<Symptom, f64>,
}

//------------------------------------------------------------------------------
// TRAINING RESULTS
//------------------------------------------------------------------------------

/// Per-disease precision/recall on the held-out test split.
#[derive(Debug, Clone, Serialize)]
pub struct ClassMetrics {
    pub disease: Disease,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Test samples of this class.
    pub support: usize,
}

/// Metrics produced by one training run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    pub run_id: Uuid,
    pub trained_at: NaiveDateTime,
    pub total_samples: usize,
    pub feature_count: usize,
    pub class_count: usize,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
    /// train_accuracy - test_accuracy.
    pub overfit_gap: f64,
    /// Set when the gap exceeds the configured threshold. Diagnostic only.
    pub overfit_flagged: bool,
    pub cv_accuracy_mean: f64,
    pub cv_accuracy_std: f64,
    pub cv_fold_scores: Vec<f64>,
    pub per_class: Vec<ClassMetrics>,
    /// Permutation importance per feature, sorted descending.
    pub feature_importances: Vec<(Symptom, f64)>,
}
