// src/dataset.rs
//
// Synthetic patient generator. Turns the clinical knowledge base into labeled
// training rows with a two-step model per symptom:
//
//   1. Bernoulli trial (p = prevalence) decides whether the symptom is
//      present for this patient.
//   2. If present, severity is drawn from Normal(mean, std), clipped to the
//      symptom's valid range, jittered and clipped again. If absent, a
//      healthy-baseline draw is used instead.
//
// Not every malaria patient has a headache and not every dengue patient
// bleeds; the prevalence step keeps that variance in the data so the
// classifier is not fit to "perfect" presentations.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

use crate::config::SAMPLE_JITTER_STD;
use crate::knowledge::KnowledgeBase;
use crate::models::{Disease, Symptom};
use crate::util::round1;

/// One synthetic patient: a full 20-dimensional vector in canonical symptom
/// order plus the disease label. Ephemeral training data, never persisted
/// beyond the run (except through the optional CSV side output).
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    pub values: Vec<f64>,
    pub disease: Disease,
}

/// A generated record table plus the canonical column ordering.
#[derive(Debug, Clone)]
pub struct SyntheticDataset {
    pub columns: &'static [Symptom; 20],
    pub records: Vec<PatientRecord>,
}

impl SyntheticDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Writes the dataset as a tabular file: the 20 symptom keys in canonical
    /// order followed by the disease label. Diagnostic side output only.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create dataset file {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        let header: Vec<&str> = self
            .columns
            .iter()
            .map(|s| s.as_str())
            .chain(std::iter::once("disease"))
            .collect();
        writeln!(writer, "{}", header.join(","))
            .context("Failed to write dataset header")?;

        for record in &self.records {
            for value in &record.values {
                write!(writer, "{:.1},", value).context("Failed to write dataset row")?;
            }
            writeln!(writer, "{}", record.disease.as_str())
                .context("Failed to write dataset row")?;
        }

        writer.flush().context("Failed to flush dataset file")?;
        info!(
            "Wrote {} synthetic records to {}",
            self.records.len(),
            path.display()
        );
        Ok(())
    }
}

/// Generates `samples_per_disease` labeled records per disease.
///
/// Fully reproducible: the same seed produces a byte-identical dataset.
pub fn generate(
    kb: &KnowledgeBase,
    samples_per_disease: usize,
    seed: u64,
) -> Result<SyntheticDataset> {
    let mut rng = StdRng::seed_from_u64(seed);

    // Baseline draws for absent symptoms: near-normal temperature for fever,
    // near-zero severity for everything else.
    let absent_fever: Normal<f64> = Normal::new(98.2, 0.4)
        .map_err(|e| anyhow!("Failed to build absent-fever distribution: {}", e))?;
    let absent_other: Normal<f64> = Normal::new(0.2, 0.3)
        .map_err(|e| anyhow!("Failed to build absent-symptom distribution: {}", e))?;
    let jitter = Normal::new(0.0, SAMPLE_JITTER_STD)
        .map_err(|e| anyhow!("Failed to build jitter distribution: {}", e))?;

    let mut records = Vec::with_capacity(samples_per_disease * Disease::ALL.len());

    for disease in kb.diseases().collect::<Vec<_>>() {
        let profile = kb.profile(disease);

        // Severity distributions per symptom; None when the profile's std is
        // zero, in which case the symptom is treated as absent.
        let mut severity: Vec<Option<Normal<f64>>> = Vec::with_capacity(Symptom::ORDER.len());
        for symptom in Symptom::ORDER {
            let stats = profile.stats(symptom);
            if stats.severity_std > 0.0 {
                let dist = Normal::new(stats.severity_mean, stats.severity_std).map_err(|e| {
                    anyhow!(
                        "Invalid severity distribution for {}/{}: {}",
                        disease.as_str(),
                        symptom.as_str(),
                        e
                    )
                })?;
                severity.push(Some(dist));
            } else {
                severity.push(None);
            }
        }

        for _ in 0..samples_per_disease {
            let mut values = Vec::with_capacity(Symptom::ORDER.len());

            for symptom in Symptom::ORDER {
                let def = kb.definition(symptom);
                let stats = profile.stats(symptom);
                let idx = symptom.feature_index();

                let is_present = rng.r#gen::<f64>() < stats.prevalence;

                let value = match (is_present, severity[idx]) {
                    (true, Some(dist)) => {
                        let drawn = dist.sample(&mut rng).clamp(def.min, def.max);
                        (drawn + jitter.sample(&mut rng)).clamp(def.min, def.max)
                    }
                    _ => {
                        if symptom == Symptom::Fever {
                            absent_fever.sample(&mut rng).clamp(97.0, 99.0)
                        } else {
                            absent_other.sample(&mut rng).max(0.0).clamp(0.0, 1.5)
                        }
                    }
                };

                values.push(round1(value));
            }

            records.push(PatientRecord { values, disease });
        }
    }

    info!(
        "Generated {} synthetic records ({} per disease, seed {})",
        records.len(),
        samples_per_disease,
        seed
    );

    Ok(SyntheticDataset {
        columns: KnowledgeBase::symptom_order(),
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::load().unwrap()
    }

    #[test]
    fn same_seed_gives_identical_dataset() {
        let kb = kb();
        let a = generate(&kb, 20, 42).unwrap();
        let b = generate(&kb, 20, 42).unwrap();
        assert_eq!(a.records, b.records);
    }

    #[test]
    fn different_seeds_differ() {
        let kb = kb();
        let a = generate(&kb, 20, 42).unwrap();
        let b = generate(&kb, 20, 43).unwrap();
        assert_ne!(a.records, b.records);
    }

    #[test]
    fn records_are_balanced_and_in_range() {
        let kb = kb();
        let dataset = generate(&kb, 15, 7).unwrap();
        assert_eq!(dataset.len(), 15 * Disease::ALL.len());

        for disease in Disease::ALL {
            let count = dataset
                .records
                .iter()
                .filter(|r| r.disease == disease)
                .count();
            assert_eq!(count, 15, "{} is unbalanced", disease.as_str());
        }

        for record in &dataset.records {
            assert_eq!(record.values.len(), 20);
            for (symptom, value) in Symptom::ORDER.iter().zip(&record.values) {
                let def = kb.definition(*symptom);
                assert!(
                    *value >= def.min && *value <= def.max,
                    "{} value {} outside [{}, {}]",
                    symptom.as_str(),
                    value,
                    def.min,
                    def.max
                );
                // One-decimal rounding.
                assert!((value * 10.0 - (value * 10.0).round()).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn zero_std_symptom_stays_at_baseline() {
        // Common Cold bleeding has prevalence 0 and std 0; values must come
        // from the absent-symptom draw, clipped to [0, 1.5].
        let kb = kb();
        let dataset = generate(&kb, 50, 3).unwrap();
        let idx = Symptom::Bleeding.feature_index();
        for record in dataset
            .records
            .iter()
            .filter(|r| r.disease == Disease::CommonCold)
        {
            assert!(record.values[idx] >= 0.0 && record.values[idx] <= 1.5);
        }
    }

    #[test]
    fn csv_side_output_has_header_and_rows() {
        let kb = kb();
        let dataset = generate(&kb, 5, 1).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patients.csv");
        dataset.write_csv(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("fever,"));
        assert!(header.ends_with(",disease"));
        assert_eq!(lines.count(), dataset.len());
    }
}
