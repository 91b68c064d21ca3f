// src/config.rs

// Default consensus weights (fuzzy, classifier) by input completeness band.
// Sparse inputs lean on the rule engine; complete vectors lean on the forest.
pub const SPARSE_COMPLETENESS_THRESHOLD: f64 = 0.30;
pub const BALANCED_COMPLETENESS_THRESHOLD: f64 = 0.60;
pub const SPARSE_WEIGHTS: (f64, f64) = (0.65, 0.35);
pub const BALANCED_WEIGHTS: (f64, f64) = (0.50, 0.50);
pub const COMPLETE_WEIGHTS: (f64, f64) = (0.40, 0.60);

// Fuzzy-uncertainty override: when the top two raw fuzzy scores are within
// this relative gap, the fuzzy weight is halved (floored) and the classifier
// weight recomputed as its complement.
pub const FUZZY_GAP_THRESHOLD: f64 = 0.15;
pub const MIN_FUZZY_WEIGHT: f64 = 0.15;

// Consensus confidence level cutoffs on the top combined score.
pub const HIGH_CONFIDENCE_MIN_SCORE: f64 = 0.25;
pub const MEDIUM_CONFIDENCE_MIN_SCORE: f64 = 0.20;

// Reliability status bands (0-100 composite score).
pub const RELIABLE_THRESHOLD: f64 = 70.0;
pub const MODERATE_THRESHOLD: f64 = 50.0;

// Validation warning triggers.
pub const LOW_COMPLETENESS_WARNING_PCT: f64 = 50.0;
pub const LOW_CERTAINTY_WARNING_PCT: f64 = 30.0;
pub const LOW_CONSENSUS_WARNING_SCORE: f64 = 0.15;
pub const MORE_SYMPTOMS_RECOMMENDATION_PCT: f64 = 70.0;

// Training defaults and validation protocol.
pub const DEFAULT_SAMPLES_PER_DISEASE: usize = 300;
pub const DEFAULT_TRAINING_SEED: u64 = 42;
pub const TEST_FRACTION: f64 = 0.20;
pub const CV_FOLDS: usize = 5;

// A train/test accuracy gap above this is flagged as overfitting (not fatal).
pub const OVERFIT_GAP_THRESHOLD: f64 = 0.10;

// Dataset generation: post-clip Gaussian jitter applied to present symptoms.
pub const SAMPLE_JITTER_STD: f64 = 0.3;
