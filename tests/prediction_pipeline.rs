// tests/prediction_pipeline.rs
//
// End-to-end pipeline tests: train -> persist -> reload -> predict, plus the
// consensus-level properties that need a real trained artifact. Sample counts
// are reduced from the production default to keep the suite fast; the
// pipeline itself is identical.

use std::collections::HashMap;
use std::sync::Arc;

use screening_lib::classifier::{self, PredictorOptions, TrainingOptions};
use screening_lib::consensus::ScreeningService;
use screening_lib::knowledge::KnowledgeBase;
use screening_lib::models::{Disease, Symptom};
use screening_lib::{ClassifierPredictor, ConfidenceLevel};

fn test_training_options() -> TrainingOptions {
    let _ = env_logger::builder().is_test(true).try_init();
    TrainingOptions {
        samples_per_disease: 30,
        augment: true,
        seed: 42,
    }
}

fn symptoms(pairs: &[(Symptom, f64)]) -> HashMap<Symptom, f64> {
    pairs.iter().copied().collect()
}

#[test]
fn training_produces_artifact_pair_and_sane_metrics() {
    let kb = KnowledgeBase::load().unwrap();
    let dir = tempfile::tempdir().unwrap();

    let report = classifier::train_model(&kb, dir.path(), &test_training_options()).unwrap();

    assert_eq!(report.total_samples, 30 * 10 * 3);
    assert_eq!(report.feature_count, 20);
    assert_eq!(report.class_count, 10);
    assert!((0.0..=1.0).contains(&report.train_accuracy));
    assert!((0.0..=1.0).contains(&report.test_accuracy));
    assert_eq!(report.cv_fold_scores.len(), 5);
    assert!((0.0..=1.0).contains(&report.cv_accuracy_mean));
    assert_eq!(report.per_class.len(), 10);
    assert_eq!(report.feature_importances.len(), 20);

    // The synthetic classes are well separated; even a reduced run should
    // beat random guessing (0.10) by a wide margin.
    assert!(report.cv_accuracy_mean > 0.5, "cv mean {}", report.cv_accuracy_mean);

    assert!(dir.path().join(classifier::MODEL_FILE).exists());
    assert!(dir.path().join(classifier::ENCODER_FILE).exists());
}

#[tokio::test]
async fn retraining_increments_the_artifact_version() {
    let kb = Arc::new(KnowledgeBase::load().unwrap());
    let dir = tempfile::tempdir().unwrap();

    classifier::train_model(&kb, dir.path(), &test_training_options()).unwrap();
    classifier::train_model(&kb, dir.path(), &test_training_options()).unwrap();

    let predictor = ClassifierPredictor::open(kb, dir.path()).await.unwrap();
    assert_eq!(predictor.loaded_version().await, Some(2));
}

#[tokio::test]
async fn reloaded_model_outputs_probability_distributions() {
    let kb = Arc::new(KnowledgeBase::load().unwrap());
    let dir = tempfile::tempdir().unwrap();
    classifier::train_model(&kb, dir.path(), &test_training_options()).unwrap();

    let predictor = ClassifierPredictor::open(kb, dir.path()).await.unwrap();

    let input = symptoms(&[
        (Symptom::Fever, 103.0),
        (Symptom::Chills, 9.0),
        (Symptom::Headache, 7.0),
    ]);
    let probs = predictor.predict(&input).await.unwrap();

    assert_eq!(probs.len(), 10);
    let sum: f64 = probs.iter().map(|(_, p)| p).sum();
    assert!((sum - 1.0).abs() < 1e-3, "probabilities sum to {}", sum);
    for (_, p) in &probs {
        assert!(*p >= 0.0);
    }
    for window in probs.windows(2) {
        assert!(window[0].1 >= window[1].1);
    }

    // Empty input returns no distribution rather than a baseline-only guess.
    assert!(predictor.predict(&HashMap::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn auto_train_fallback_trains_once_and_serves() {
    let kb = Arc::new(KnowledgeBase::load().unwrap());
    let dir = tempfile::tempdir().unwrap();

    let predictor = ClassifierPredictor::new(
        kb.clone(),
        dir.path(),
        PredictorOptions {
            auto_train: true,
            training: test_training_options(),
        },
    );

    // First caller pays the training cost.
    let input = symptoms(&[(Symptom::Diarrhea, 9.0), (Symptom::Dehydration, 9.0)]);
    let probs = predictor.predict(&input).await.unwrap();
    assert_eq!(probs.len(), 10);

    // The artifact pair must now be on disk for later fail-fast loads.
    assert!(dir.path().join(classifier::MODEL_FILE).exists());
    assert!(dir.path().join(classifier::ENCODER_FILE).exists());
    assert_eq!(predictor.loaded_version().await, Some(1));
}

#[tokio::test]
async fn consensus_pipeline_screens_classic_presentations() {
    let kb = Arc::new(KnowledgeBase::load().unwrap());
    let dir = tempfile::tempdir().unwrap();
    classifier::train_model(&kb, dir.path(), &test_training_options()).unwrap();
    let predictor = ClassifierPredictor::open(kb.clone(), dir.path()).await.unwrap();
    let service = ScreeningService::new(kb, predictor);

    // Classic malaria presentation: the fuzzy opinion must put Malaria first.
    let input = symptoms(&[
        (Symptom::Fever, 103.0),
        (Symptom::Headache, 7.0),
        (Symptom::Chills, 9.0),
        (Symptom::Fatigue, 7.0),
        (Symptom::MusclePain, 5.0),
        (Symptom::NauseaVomiting, 5.0),
        (Symptom::LossOfAppetite, 6.0),
    ]);
    let result = service.predict(&input, None).await.unwrap();

    assert_eq!(result.fuzzy_top, Some(Disease::Malaria));
    assert!(!result.predictions.is_empty() && result.predictions.len() <= 3);
    assert_eq!(
        result.consensus_top,
        result.predictions.first().map(|p| p.disease)
    );
    assert_eq!(result.symptom_values, input);

    let details = result.fuzzy_details.expect("analysis for top fuzzy match");
    assert_eq!(details.disease, Disease::Malaria);
    assert!(!details.details.is_empty());

    // The screening disclaimer is always emitted.
    assert!(
        result
            .validation
            .recommendations
            .iter()
            .any(|r| r.contains("screening tool"))
    );

    // Classic cholera presentation, no fever reported.
    let input = symptoms(&[
        (Symptom::Diarrhea, 9.0),
        (Symptom::Dehydration, 9.0),
        (Symptom::NauseaVomiting, 8.0),
        (Symptom::AbdominalPain, 5.0),
        (Symptom::Fatigue, 7.0),
        (Symptom::LossOfAppetite, 8.0),
    ]);
    let result = service.predict(&input, None).await.unwrap();
    assert_eq!(result.fuzzy_top, Some(Disease::Cholera));

    // Classic common cold: when the classifier concurs, confidence is not Low.
    let input = symptoms(&[
        (Symptom::RunnyNose, 7.0),
        (Symptom::Congestion, 7.0),
        (Symptom::Sneezing, 6.0),
        (Symptom::SoreThroat, 5.0),
        (Symptom::Cough, 4.0),
        (Symptom::Headache, 3.0),
    ]);
    let result = service.predict(&input, None).await.unwrap();
    assert_eq!(result.fuzzy_top, Some(Disease::CommonCold));
    if result.models_agree {
        assert_ne!(result.confidence_level, ConfidenceLevel::Low);
    }
}

#[tokio::test]
async fn repeated_predictions_are_byte_identical() {
    let kb = Arc::new(KnowledgeBase::load().unwrap());
    let dir = tempfile::tempdir().unwrap();
    classifier::train_model(&kb, dir.path(), &test_training_options()).unwrap();
    let predictor = ClassifierPredictor::open(kb.clone(), dir.path()).await.unwrap();
    let service = ScreeningService::new(kb, predictor);

    let input = symptoms(&[
        (Symptom::Fever, 102.0),
        (Symptom::Cough, 6.0),
        (Symptom::MusclePain, 7.0),
        (Symptom::Fatigue, 8.0),
    ]);

    let first = service.predict(&input, None).await.unwrap();
    let second = service.predict(&input, None).await.unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[tokio::test]
async fn explicit_weight_override_is_honored() {
    let kb = Arc::new(KnowledgeBase::load().unwrap());
    let dir = tempfile::tempdir().unwrap();
    classifier::train_model(&kb, dir.path(), &test_training_options()).unwrap();
    let predictor = ClassifierPredictor::open(kb.clone(), dir.path()).await.unwrap();
    let service = ScreeningService::new(kb, predictor);

    let input = symptoms(&[
        (Symptom::Fever, 103.0),
        (Symptom::Chills, 9.0),
        (Symptom::Headache, 7.0),
    ]);

    // All weight on the fuzzy engine: the top consensus pick must match the
    // fuzzy top pick.
    let result = service
        .predict(
            &input,
            Some(screening_lib::ConsensusWeights {
                fuzzy: 1.0,
                classifier: 0.0,
            }),
        )
        .await
        .unwrap();
    assert_eq!(result.consensus_top, result.fuzzy_top);
}
