// src/classifier.rs
//
// Random forest trainer/predictor for disease screening.
//
// Trained on the prevalence-based synthetic dataset (see dataset.rs) with
// deliberately conservative hyperparameters, a stratified 80/20 holdout, and
// 5-fold stratified cross-validation for an honest accuracy estimate. The
// deployed model is refit on the full dataset after validation and persisted
// together with its label encoder as a matched pair of JSON artifacts.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use chrono::{NaiveDateTime, Utc};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use uuid::Uuid;

// SmartCore imports
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::tree::decision_tree_classifier::SplitCriterion;

use crate::config::{
    CV_FOLDS, DEFAULT_SAMPLES_PER_DISEASE, DEFAULT_TRAINING_SEED, OVERFIT_GAP_THRESHOLD,
    TEST_FRACTION,
};
use crate::dataset;
use crate::knowledge::KnowledgeBase;
use crate::models::{Disease, Symptom};
use crate::results::{ClassMetrics, TrainingReport};
use crate::util::{mean, round4, std_dev};

/// File names of the two durable artifact halves. They are only meaningful as
/// a matched pair.
pub const MODEL_FILE: &str = "rf_disease_model.json";
pub const ENCODER_FILE: &str = "label_encoder.json";

type Forest = RandomForestClassifier<f64, usize, DenseMatrix<f64>, Vec<usize>>;

//------------------------------------------------------------------------------
// ARTIFACT TYPES
//------------------------------------------------------------------------------

// Wrapper for SmartCore RandomForestClassifier to help with
// serialization/deserialization of the persisted artifact.
#[derive(Serialize, Deserialize)]
struct RandomForestClassifierWrapper {
    serialized_model: String,
}

impl RandomForestClassifierWrapper {
    fn from_forest(forest: &Forest) -> Result<Self> {
        let serialized_model = serde_json::to_string(forest)
            .map_err(|e| anyhow!("Failed to serialize forest: {}", e))?;
        Ok(Self { serialized_model })
    }

    fn to_forest(&self) -> Result<Forest> {
        let forest: Forest = serde_json::from_str(&self.serialized_model)
            .map_err(|e| anyhow!("Failed to deserialize forest: {}", e))?;
        Ok(forest)
    }
}

/// On-disk envelope for the fitted classifier.
#[derive(Serialize, Deserialize)]
struct ModelArtifact {
    version: u32,
    trained_at: NaiveDateTime,
    forest: RandomForestClassifierWrapper,
}

/// Mapping between internal class indices and disease names. Classes are
/// sorted alphabetically by display name, so the encoding is stable across
/// training runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<Disease>,
}

impl LabelEncoder {
    pub fn fit() -> Self {
        let mut classes = Disease::ALL.to_vec();
        classes.sort_by_key(|d| d.as_str());
        Self { classes }
    }

    pub fn encode(&self, disease: Disease) -> Result<usize> {
        self.classes
            .iter()
            .position(|d| *d == disease)
            .ok_or_else(|| anyhow!("Disease {} missing from label encoder", disease.as_str()))
    }

    pub fn decode(&self, index: usize) -> Option<Disease> {
        self.classes.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

//------------------------------------------------------------------------------
// TRAINING
//------------------------------------------------------------------------------

/// Parameters of one training run.
#[derive(Debug, Clone)]
pub struct TrainingOptions {
    pub samples_per_disease: usize,
    /// Feature-masking augmentation: teaches the model to stay accurate with
    /// partial symptom reporting.
    pub augment: bool,
    pub seed: u64,
}

impl Default for TrainingOptions {
    fn default() -> Self {
        Self {
            samples_per_disease: DEFAULT_SAMPLES_PER_DISEASE,
            augment: true,
            seed: DEFAULT_TRAINING_SEED,
        }
    }
}

struct PreparedData {
    x: Vec<Vec<f64>>,
    y: Vec<usize>,
    encoder: LabelEncoder,
}

/// Generates, augments and encodes the training table.
///
/// Augmentation adds two copies of every base record with 1-4 randomly chosen
/// feature columns overwritten by their healthy baseline (98.6 °F for fever,
/// 0 otherwise). Masking is limited to 4 columns so the disease signal is not
/// corrupted.
fn prepare_training_data(kb: &KnowledgeBase, options: &TrainingOptions) -> Result<PreparedData> {
    let base = dataset::generate(kb, options.samples_per_disease, options.seed)?;
    let encoder = LabelEncoder::fit();

    let mut x: Vec<Vec<f64>> = Vec::with_capacity(base.len() * 3);
    let mut y: Vec<usize> = Vec::with_capacity(base.len() * 3);

    let mut rng = StdRng::seed_from_u64(options.seed + 1);

    for record in &base.records {
        let label = encoder.encode(record.disease)?;

        x.push(record.values.clone());
        y.push(label);

        if options.augment {
            for _ in 0..2 {
                let mut masked = record.values.clone();
                let n_mask = rng.gen_range(1..5);
                let picked =
                    rand::seq::index::sample(&mut rng, Symptom::ORDER.len(), n_mask);
                for idx in picked.iter() {
                    masked[idx] = Symptom::ORDER[idx].baseline_value();
                }
                x.push(masked);
                y.push(label);
            }
        }
    }

    Ok(PreparedData { x, y, encoder })
}

/// Stratified train/test index split: shuffles within each class and takes
/// `test_fraction` of every class for the holdout.
fn stratified_split(y: &[usize], test_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut by_class: HashMap<usize, Vec<usize>> = HashMap::new();
    for (idx, label) in y.iter().enumerate() {
        by_class.entry(*label).or_default().push(idx);
    }

    let mut classes: Vec<usize> = by_class.keys().copied().collect();
    classes.sort_unstable();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train = Vec::new();
    let mut test = Vec::new();

    for class in classes {
        let mut indices = by_class.remove(&class).unwrap_or_default();
        indices.shuffle(&mut rng);
        let n_test = (indices.len() as f64 * test_fraction).round() as usize;
        test.extend_from_slice(&indices[..n_test]);
        train.extend_from_slice(&indices[n_test..]);
    }

    (train, test)
}

/// Stratified K-fold assignment: shuffles within each class and deals indices
/// round-robin across folds, so every fold keeps the class balance.
fn stratified_folds(y: &[usize], folds: usize, seed: u64) -> Vec<Vec<usize>> {
    let mut by_class: HashMap<usize, Vec<usize>> = HashMap::new();
    for (idx, label) in y.iter().enumerate() {
        by_class.entry(*label).or_default().push(idx);
    }

    let mut classes: Vec<usize> = by_class.keys().copied().collect();
    classes.sort_unstable();

    let mut rng = StdRng::seed_from_u64(seed);
    let mut assignment: Vec<Vec<usize>> = vec![Vec::new(); folds];

    for class in classes {
        let mut indices = by_class.remove(&class).unwrap_or_default();
        indices.shuffle(&mut rng);
        for (i, idx) in indices.into_iter().enumerate() {
            assignment[i % folds].push(idx);
        }
    }

    assignment
}

fn select_rows(x: &[Vec<f64>], indices: &[usize]) -> Vec<Vec<f64>> {
    indices.iter().map(|&i| x[i].clone()).collect()
}

fn select_labels(y: &[usize], indices: &[usize]) -> Vec<usize> {
    indices.iter().map(|&i| y[i]).collect()
}

fn to_matrix(rows: &Vec<Vec<f64>>) -> Result<DenseMatrix<f64>> {
    DenseMatrix::from_2d_vec(rows).map_err(|e| anyhow!("Failed to build feature matrix: {}", e))
}

/// Conservative capacity controls: enough trees without excess, bounded
/// depth, leaf/split floors, sqrt-sized feature subset per split. The
/// generator emits exactly balanced classes, so no extra class weighting is
/// required.
fn forest_params(seed: u64) -> RandomForestClassifierParameters {
    RandomForestClassifierParameters {
        criterion: SplitCriterion::Gini,
        max_depth: Some(12),
        min_samples_leaf: 5,
        min_samples_split: 10,
        n_trees: 150,
        m: None, // defaults to sqrt(n_features) per split
        keep_samples: false,
        seed,
    }
}

fn fit_forest(x: &Vec<Vec<f64>>, y: &Vec<usize>, seed: u64) -> Result<Forest> {
    let matrix = to_matrix(x)?;
    RandomForestClassifier::fit(&matrix, y, forest_params(seed))
        .map_err(|e| anyhow!("Failed to train random forest: {}", e))
}

fn predict_labels(forest: &Forest, x: &Vec<Vec<f64>>) -> Result<Vec<usize>> {
    let matrix = to_matrix(x)?;
    forest
        .predict(&matrix)
        .map_err(|e| anyhow!("Failed to generate predictions: {}", e))
}

fn accuracy(predicted: &[usize], actual: &[usize]) -> f64 {
    if actual.is_empty() {
        return 0.0;
    }
    let hits = predicted
        .iter()
        .zip(actual)
        .filter(|(p, a)| p == a)
        .count();
    hits as f64 / actual.len() as f64
}

fn per_class_report(
    actual: &[usize],
    predicted: &[usize],
    encoder: &LabelEncoder,
) -> Vec<ClassMetrics> {
    let mut report = Vec::with_capacity(encoder.len());

    for class in 0..encoder.len() {
        let Some(disease) = encoder.decode(class) else {
            continue;
        };

        let mut tp = 0usize;
        let mut fp = 0usize;
        let mut fn_ = 0usize;
        for (a, p) in actual.iter().zip(predicted) {
            match (*a == class, *p == class) {
                (true, true) => tp += 1,
                (false, true) => fp += 1,
                (true, false) => fn_ += 1,
                (false, false) => {}
            }
        }

        let precision = if tp + fp > 0 {
            tp as f64 / (tp + fp) as f64
        } else {
            0.0
        };
        let recall = if tp + fn_ > 0 {
            tp as f64 / (tp + fn_) as f64
        } else {
            0.0
        };
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };

        report.push(ClassMetrics {
            disease,
            precision,
            recall,
            f1,
            support: tp + fn_,
        });
    }

    report
}

/// Permutation importance on the held-out split: how much test accuracy drops
/// when one feature column is shuffled. SmartCore does not expose impurity
/// importances, so this is the diagnostic ranking.
fn permutation_importance(
    forest: &Forest,
    x_test: &[Vec<f64>],
    y_test: &[usize],
    baseline_accuracy: f64,
    seed: u64,
) -> Result<Vec<(Symptom, f64)>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut importances = Vec::with_capacity(Symptom::ORDER.len());

    for symptom in Symptom::ORDER {
        let column = symptom.feature_index();
        let mut shuffled_column: Vec<f64> = x_test.iter().map(|row| row[column]).collect();
        shuffled_column.shuffle(&mut rng);

        let mut permuted: Vec<Vec<f64>> = x_test.to_vec();
        for (row, value) in permuted.iter_mut().zip(shuffled_column) {
            row[column] = value;
        }

        let predicted = predict_labels(forest, &permuted)?;
        importances.push((symptom, baseline_accuracy - accuracy(&predicted, y_test)));
    }

    importances.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    Ok(importances)
}

fn peek_version(model_dir: &Path) -> u32 {
    let path = model_dir.join(MODEL_FILE);
    let Ok(contents) = fs::read_to_string(path) else {
        return 0;
    };
    serde_json::from_str::<ModelArtifact>(&contents)
        .map(|artifact| artifact.version)
        .unwrap_or(0)
}

/// Trains, validates and persists the classifier. This is a long-running
/// batch operation intended to be invoked out of band, not inside a
/// latency-sensitive request path.
///
/// Validation protocol:
/// 1. Generate + augment data, stratified 80/20 train/test split.
/// 2. Fit on the train split, evaluate on the holdout.
/// 3. Flag a train/test accuracy gap above 0.10 as overfitting (not fatal).
/// 4. 5-fold stratified cross-validation over the full table.
/// 5. Refit on the full table for deployment; the CV already provided the
///    honest estimate, so the deployed model uses all available data.
pub fn train_model(
    kb: &KnowledgeBase,
    model_dir: &Path,
    options: &TrainingOptions,
) -> Result<TrainingReport> {
    let run_id = Uuid::new_v4();
    let data = prepare_training_data(kb, options)?;
    let n_samples = data.x.len();
    let n_features = Symptom::ORDER.len();

    info!(
        "Training run {}: {} samples, {} features, {} classes",
        run_id,
        n_samples,
        n_features,
        data.encoder.len()
    );

    // ── Step 1: stratified train/test split ──
    let (train_idx, test_idx) = stratified_split(&data.y, TEST_FRACTION, options.seed);
    let x_train = select_rows(&data.x, &train_idx);
    let y_train = select_labels(&data.y, &train_idx);
    let x_test = select_rows(&data.x, &test_idx);
    let y_test = select_labels(&data.y, &test_idx);
    debug!(
        "Split: {} train / {} test samples",
        x_train.len(),
        x_test.len()
    );

    // ── Step 2: fit and evaluate ──
    let forest = fit_forest(&x_train, &y_train, options.seed)?;
    let train_accuracy = accuracy(&predict_labels(&forest, &x_train)?, &y_train);
    let y_pred_test = predict_labels(&forest, &x_test)?;
    let test_accuracy = accuracy(&y_pred_test, &y_test);

    let overfit_gap = train_accuracy - test_accuracy;
    let overfit_flagged = overfit_gap > OVERFIT_GAP_THRESHOLD;
    if overfit_flagged {
        warn!(
            "Overfitting detected: train {:.4} vs test {:.4} (gap {:.4})",
            train_accuracy, test_accuracy, overfit_gap
        );
    } else {
        info!(
            "Overfitting check OK: train {:.4} vs test {:.4} (gap {:.4})",
            train_accuracy, test_accuracy, overfit_gap
        );
    }

    // ── Step 3: cross-validation ──
    let folds = stratified_folds(&data.y, CV_FOLDS, options.seed);
    let mut cv_fold_scores = Vec::with_capacity(CV_FOLDS);
    for (fold_no, holdout) in folds.iter().enumerate() {
        let fit_idx: Vec<usize> = folds
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != fold_no)
            .flat_map(|(_, fold)| fold.iter().copied())
            .collect();

        let fold_forest = fit_forest(
            &select_rows(&data.x, &fit_idx),
            &select_labels(&data.y, &fit_idx),
            options.seed,
        )?;
        let fold_x = select_rows(&data.x, holdout);
        let fold_y = select_labels(&data.y, holdout);
        let score = accuracy(&predict_labels(&fold_forest, &fold_x)?, &fold_y);
        debug!("CV fold {}: accuracy {:.4}", fold_no + 1, score);
        cv_fold_scores.push(score);
    }
    let cv_accuracy_mean = mean(&cv_fold_scores);
    let cv_accuracy_std = std_dev(&cv_fold_scores);
    info!(
        "{}-fold CV accuracy: {:.4} (+/- {:.4})",
        CV_FOLDS, cv_accuracy_mean, cv_accuracy_std
    );

    // ── Step 4: diagnostics ──
    let per_class = per_class_report(&y_test, &y_pred_test, &data.encoder);
    let feature_importances =
        permutation_importance(&forest, &x_test, &y_test, test_accuracy, options.seed)?;

    // ── Step 5: refit on the full dataset for deployment ──
    let deployed = fit_forest(&data.x, &data.y, options.seed)?;

    let version = peek_version(model_dir) + 1;
    save_artifact(model_dir, &deployed, &data.encoder, version)?;

    Ok(TrainingReport {
        run_id,
        trained_at: Utc::now().naive_utc(),
        total_samples: n_samples,
        feature_count: n_features,
        class_count: data.encoder.len(),
        train_accuracy,
        test_accuracy,
        overfit_gap,
        overfit_flagged,
        cv_accuracy_mean,
        cv_accuracy_std,
        cv_fold_scores,
        per_class,
        feature_importances,
    })
}

//------------------------------------------------------------------------------
// ARTIFACT PERSISTENCE
//------------------------------------------------------------------------------

fn save_artifact(
    model_dir: &Path,
    forest: &Forest,
    encoder: &LabelEncoder,
    version: u32,
) -> Result<()> {
    fs::create_dir_all(model_dir)
        .with_context(|| format!("Failed to create model directory {}", model_dir.display()))?;

    let artifact = ModelArtifact {
        version,
        trained_at: Utc::now().naive_utc(),
        forest: RandomForestClassifierWrapper::from_forest(forest)?,
    };

    let model_path = model_dir.join(MODEL_FILE);
    let model_json = serde_json::to_string(&artifact).context("Failed to encode model artifact")?;
    fs::write(&model_path, model_json)
        .with_context(|| format!("Failed to write {}", model_path.display()))?;

    let encoder_path = model_dir.join(ENCODER_FILE);
    let encoder_json = serde_json::to_string(encoder).context("Failed to encode label encoder")?;
    fs::write(&encoder_path, encoder_json)
        .with_context(|| format!("Failed to write {}", encoder_path.display()))?;

    info!(
        "Saved model artifact v{} to {}",
        version,
        model_dir.display()
    );
    Ok(())
}

/// Loads the persisted pair. `Ok(None)` when neither half exists; an error
/// when exactly one half exists, since the artifacts are only valid together.
fn load_artifact(model_dir: &Path) -> Result<Option<(Forest, LabelEncoder, u32)>> {
    let model_path = model_dir.join(MODEL_FILE);
    let encoder_path = model_dir.join(ENCODER_FILE);

    match (model_path.exists(), encoder_path.exists()) {
        (false, false) => return Ok(None),
        (true, false) => bail!(
            "Model artifact {} exists without its label encoder; the pair must be loaded together",
            model_path.display()
        ),
        (false, true) => bail!(
            "Label encoder {} exists without its model artifact; the pair must be loaded together",
            encoder_path.display()
        ),
        (true, true) => {}
    }

    let model_json = fs::read_to_string(&model_path)
        .with_context(|| format!("Failed to read {}", model_path.display()))?;
    let artifact: ModelArtifact =
        serde_json::from_str(&model_json).context("Failed to decode model artifact")?;
    let forest = artifact.forest.to_forest()?;

    let encoder_json = fs::read_to_string(&encoder_path)
        .with_context(|| format!("Failed to read {}", encoder_path.display()))?;
    let encoder: LabelEncoder =
        serde_json::from_str(&encoder_json).context("Failed to decode label encoder")?;

    if encoder.is_empty() {
        bail!("Label encoder at {} has no classes", encoder_path.display());
    }

    Ok(Some((forest, encoder, artifact.version)))
}

//------------------------------------------------------------------------------
// PREDICTOR
//------------------------------------------------------------------------------

/// How the predictor behaves when the persisted artifact is missing.
#[derive(Debug, Clone)]
pub struct PredictorOptions {
    /// Train with `training` options when no artifact exists. The first
    /// caller pays the training cost; concurrent first callers are serialized
    /// by a single-flight lock. Callers needing bounded latency should
    /// pre-train and use [`ClassifierPredictor::open`] instead.
    pub auto_train: bool,
    pub training: TrainingOptions,
}

impl Default for PredictorOptions {
    fn default() -> Self {
        Self {
            auto_train: true,
            training: TrainingOptions::default(),
        }
    }
}

struct LoadedModel {
    forest: Forest,
    encoder: LabelEncoder,
    version: u32,
}

/// Probability predictor over the persisted forest.
///
/// The artifact is loaded once and shared read-only afterwards; the lock is
/// only contended while loading (or auto-training) the model.
pub struct ClassifierPredictor {
    kb: Arc<KnowledgeBase>,
    model_dir: PathBuf,
    options: PredictorOptions,
    state: Mutex<Option<Arc<LoadedModel>>>,
}

impl ClassifierPredictor {
    /// Lazy predictor: touches the artifact (and possibly trains) on first
    /// use.
    pub fn new<P: Into<PathBuf>>(
        kb: Arc<KnowledgeBase>,
        model_dir: P,
        options: PredictorOptions,
    ) -> Self {
        Self {
            kb,
            model_dir: model_dir.into(),
            options,
            state: Mutex::new(None),
        }
    }

    /// Fail-fast predictor: requires the persisted artifact to already exist
    /// and loads it immediately. A missing artifact is a hard error, never an
    /// implicit training run.
    pub async fn open<P: Into<PathBuf>>(kb: Arc<KnowledgeBase>, model_dir: P) -> Result<Self> {
        let predictor = Self::new(
            kb,
            model_dir,
            PredictorOptions {
                auto_train: false,
                training: TrainingOptions::default(),
            },
        );
        predictor.ensure_loaded().await?;
        Ok(predictor)
    }

    async fn ensure_loaded(&self) -> Result<Arc<LoadedModel>> {
        // Single-flight: concurrent first callers queue here instead of
        // triggering redundant training runs.
        let mut state = self.state.lock().await;
        if let Some(model) = state.as_ref() {
            return Ok(model.clone());
        }

        let loaded = match load_artifact(&self.model_dir)? {
            Some((forest, encoder, version)) => {
                info!(
                    "Loaded model artifact v{} from {}",
                    version,
                    self.model_dir.display()
                );
                LoadedModel {
                    forest,
                    encoder,
                    version,
                }
            }
            None if self.options.auto_train => {
                warn!(
                    "No trained model found in {}; training now",
                    self.model_dir.display()
                );
                let kb = self.kb.clone();
                let model_dir = self.model_dir.clone();
                let training = self.options.training.clone();
                let report =
                    tokio::task::spawn_blocking(move || train_model(&kb, &model_dir, &training))
                        .await
                        .context("Training task panicked")??;
                info!(
                    "Fallback training finished (run {}, CV accuracy {:.4})",
                    report.run_id, report.cv_accuracy_mean
                );

                let (forest, encoder, version) = load_artifact(&self.model_dir)?
                    .ok_or_else(|| anyhow!("Training finished but no artifact was persisted"))?;
                LoadedModel {
                    forest,
                    encoder,
                    version,
                }
            }
            None => bail!(
                "Model artifact unavailable in {} and auto-training is disabled",
                self.model_dir.display()
            ),
        };

        let model = Arc::new(loaded);
        *state = Some(model.clone());
        Ok(model)
    }

    /// Version of the currently loaded artifact, if one has been loaded.
    pub async fn loaded_version(&self) -> Option<u32> {
        self.state.lock().await.as_ref().map(|m| m.version)
    }

    /// Predicts disease probabilities for a (possibly partial) symptom
    /// vector. Missing symptoms are filled with their healthy baselines.
    ///
    /// Returns `(disease, probability)` sorted by probability descending;
    /// probabilities are rounded to 4 decimals and sum to 1 up to rounding.
    pub async fn predict(
        &self,
        symptom_values: &HashMap<Symptom, f64>,
    ) -> Result<Vec<(Disease, f64)>> {
        if symptom_values.is_empty() {
            return Ok(Vec::new());
        }

        let model = self.ensure_loaded().await?;

        let features: Vec<f64> = Symptom::ORDER
            .iter()
            .map(|s| {
                symptom_values
                    .get(s)
                    .copied()
                    .unwrap_or_else(|| s.baseline_value())
            })
            .collect();

        let matrix = to_matrix(&vec![features])?;
        let probabilities = model
            .forest
            .predict_proba(&matrix)
            .map_err(|e| anyhow!("Failed to compute class probabilities: {}", e))?;

        let (_, n_classes) = probabilities.shape();
        if n_classes != model.encoder.len() {
            bail!(
                "Artifact mismatch: model outputs {} classes but encoder has {}",
                n_classes,
                model.encoder.len()
            );
        }

        let mut result = Vec::with_capacity(n_classes);
        for class in 0..n_classes {
            let disease = model
                .encoder
                .decode(class)
                .ok_or_else(|| anyhow!("Class index {} out of encoder range", class))?;
            result.push((disease, round4(*probabilities.get((0, class)))));
        }

        // Stable sort keeps encoder order on ties for deterministic output.
        result.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_encoder_is_alphabetical_and_total() {
        let encoder = LabelEncoder::fit();
        assert_eq!(encoder.len(), 10);
        let names: Vec<&str> = (0..encoder.len())
            .map(|i| encoder.decode(i).unwrap().as_str())
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        for disease in Disease::ALL {
            let idx = encoder.encode(disease).unwrap();
            assert_eq!(encoder.decode(idx), Some(disease));
        }
    }

    #[test]
    fn stratified_split_preserves_class_shares() {
        // 4 classes x 50 samples.
        let y: Vec<usize> = (0..200).map(|i| i % 4).collect();
        let (train, test) = stratified_split(&y, 0.20, 42);
        assert_eq!(train.len() + test.len(), 200);
        for class in 0..4 {
            let in_test = test.iter().filter(|&&i| y[i] == class).count();
            assert_eq!(in_test, 10, "class {} holdout share", class);
        }
        // Deterministic.
        let (train2, test2) = stratified_split(&y, 0.20, 42);
        assert_eq!(train, train2);
        assert_eq!(test, test2);
    }

    #[test]
    fn stratified_folds_partition_all_samples() {
        let y: Vec<usize> = (0..100).map(|i| i % 5).collect();
        let folds = stratified_folds(&y, 5, 7);
        assert_eq!(folds.len(), 5);
        let mut all: Vec<usize> = folds.iter().flatten().copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..100).collect::<Vec<_>>());
        for fold in &folds {
            for class in 0..5 {
                let count = fold.iter().filter(|&&i| y[i] == class).count();
                assert_eq!(count, 4);
            }
        }
    }

    #[test]
    fn per_class_report_computes_precision_recall() {
        let encoder = LabelEncoder::fit();
        // Class 0 predicted perfectly, class 1 never predicted.
        let actual = vec![0, 0, 1, 1];
        let predicted = vec![0, 0, 0, 0];
        let report = per_class_report(&actual, &predicted, &encoder);
        let class0 = &report[0];
        assert_eq!(class0.support, 2);
        assert!((class0.precision - 0.5).abs() < 1e-9);
        assert!((class0.recall - 1.0).abs() < 1e-9);
        let class1 = &report[1];
        assert_eq!(class1.support, 2);
        assert_eq!(class1.precision, 0.0);
        assert_eq!(class1.recall, 0.0);
        assert_eq!(class1.f1, 0.0);
    }

    #[test]
    fn augmentation_triples_the_table() {
        let kb = KnowledgeBase::load().unwrap();
        let data = prepare_training_data(
            &kb,
            &TrainingOptions {
                samples_per_disease: 5,
                augment: true,
                seed: 42,
            },
        )
        .unwrap();
        assert_eq!(data.x.len(), 5 * 10 * 3);
        assert_eq!(data.y.len(), data.x.len());

        let unaugmented = prepare_training_data(
            &kb,
            &TrainingOptions {
                samples_per_disease: 5,
                augment: false,
                seed: 42,
            },
        )
        .unwrap();
        assert_eq!(unaugmented.x.len(), 5 * 10);
    }

    #[test]
    fn loading_half_an_artifact_pair_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_artifact(dir.path()).unwrap().is_none());

        std::fs::write(dir.path().join(MODEL_FILE), "{}").unwrap();
        let err = load_artifact(dir.path()).unwrap_err();
        assert!(err.to_string().contains("label encoder"));

        std::fs::remove_file(dir.path().join(MODEL_FILE)).unwrap();
        std::fs::write(dir.path().join(ENCODER_FILE), "{\"classes\":[]}").unwrap();
        let err = load_artifact(dir.path()).unwrap_err();
        assert!(err.to_string().contains("model artifact"));
    }

    #[tokio::test]
    async fn missing_artifact_without_auto_train_fails_fast() {
        let kb = Arc::new(KnowledgeBase::load().unwrap());
        let dir = tempfile::tempdir().unwrap();
        let result = ClassifierPredictor::open(kb, dir.path()).await;
        assert!(result.is_err());
    }
}
