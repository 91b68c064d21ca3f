// src/knowledge/mod.rs
//
// Immutable clinical knowledge base: symptom definitions, per-disease
// prevalence/severity profiles and fuzzy diagnostic rule tables.
//
// The catalog itself lives in `catalog.rs` as embedded static tables.
// `KnowledgeBase::load` turns those tables into typed lookup structures and
// enforces the integrity invariants once, at startup: a violation aborts
// initialization instead of silently producing biased scores.

mod catalog;

use std::collections::HashMap;

use anyhow::{Result, bail};
use log::info;
use serde::Serialize;

use crate::fuzzy::FuzzyLevel;
use crate::models::{Disease, Symptom};

/// Static definition of one symptom input: valid numeric range, unit and the
/// help text shown by the form-rendering collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct SymptomDefinition {
    pub symptom: Symptom,
    pub display_name: &'static str,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    pub help: &'static str,
}

/// Clinical statistics for one symptom under one disease.
///
/// `prevalence` is the fraction of symptomatic patients who present the
/// symptom at all; `severity_mean`/`severity_std` describe its typical
/// severity when present (0-10 scale, or °F for fever).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SymptomStats {
    pub prevalence: f64,
    pub severity_mean: f64,
    pub severity_std: f64,
}

/// One fuzzy diagnostic rule: the fuzzy level this disease is expected to
/// produce for a symptom, and the diagnostic weight of that expectation.
#[derive(Debug, Clone, Copy)]
pub struct SymptomRule {
    pub symptom: Symptom,
    pub expected: FuzzyLevel,
    pub weight: f64,
}

/// Full clinical profile of one disease.
#[derive(Debug, Clone)]
pub struct DiseaseProfile {
    pub disease: Disease,
    pub description: &'static str,
    pub precautions: &'static [&'static str],
    pub references: &'static [&'static str],
    /// Clinically distinctive symptoms, flagged in the detailed analysis.
    pub hallmarks: &'static [Symptom],
    /// Per-symptom statistics, indexed by `Symptom::feature_index`.
    stats: Vec<SymptomStats>,
}

impl DiseaseProfile {
    /// Statistics for a symptom. Every profile covers all 20 symptoms
    /// (validated at load).
    pub fn stats(&self, symptom: Symptom) -> &SymptomStats {
        &self.stats[symptom.feature_index()]
    }
}

/// The validated, read-only catalog. Built once at startup and shared freely
/// across concurrent requests (no interior mutability).
pub struct KnowledgeBase {
    definitions: Vec<SymptomDefinition>,
    profiles: Vec<DiseaseProfile>,
    rules: HashMap<Disease, Vec<SymptomRule>>,
}

impl KnowledgeBase {
    /// Builds and validates the knowledge base from the embedded catalog.
    ///
    /// Fails fast when a disease profile does not cover exactly the 20
    /// symptoms, a prevalence falls outside [0, 1], a rule weight falls
    /// outside (0, 1], or a rule references a level that is not defined in
    /// the fuzzy family for its symptom.
    pub fn load() -> Result<Self> {
        let definitions = Self::load_definitions()?;
        let mut profiles = Vec::with_capacity(Disease::ALL.len());
        let mut rules: HashMap<Disease, Vec<SymptomRule>> = HashMap::new();

        for spec in catalog::PROFILES {
            if profiles.iter().any(|p: &DiseaseProfile| p.disease == spec.disease) {
                bail!("duplicate disease profile for {}", spec.disease.as_str());
            }

            profiles.push(Self::load_profile(spec)?);
            rules.insert(spec.disease, Self::load_rules(spec)?);
        }

        if profiles.len() != Disease::ALL.len() {
            bail!(
                "disease catalog covers {} of {} diseases",
                profiles.len(),
                Disease::ALL.len()
            );
        }

        info!(
            "Knowledge base loaded: {} symptoms, {} disease profiles, {} rule tables",
            definitions.len(),
            profiles.len(),
            rules.len()
        );

        Ok(Self {
            definitions,
            profiles,
            rules,
        })
    }

    fn load_definitions() -> Result<Vec<SymptomDefinition>> {
        let mut slots: Vec<Option<SymptomDefinition>> = vec![None; Symptom::ORDER.len()];

        for spec in catalog::SYMPTOMS {
            if spec.min >= spec.max {
                bail!(
                    "symptom {} has an empty valid range [{}, {}]",
                    spec.symptom.as_str(),
                    spec.min,
                    spec.max
                );
            }
            let slot = &mut slots[spec.symptom.feature_index()];
            if slot.is_some() {
                bail!("duplicate definition for symptom {}", spec.symptom.as_str());
            }
            *slot = Some(SymptomDefinition {
                symptom: spec.symptom,
                display_name: spec.display_name,
                min: spec.min,
                max: spec.max,
                unit: spec.unit,
                help: spec.help,
            });
        }

        let mut definitions = Vec::with_capacity(slots.len());
        for (idx, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(def) => definitions.push(def),
                None => bail!(
                    "no definition for symptom {}",
                    Symptom::ORDER[idx].as_str()
                ),
            }
        }
        Ok(definitions)
    }

    fn load_profile(spec: &catalog::ProfileSpec) -> Result<DiseaseProfile> {
        let mut slots: Vec<Option<SymptomStats>> = vec![None; Symptom::ORDER.len()];

        for &(symptom, prevalence, severity_mean, severity_std) in spec.stats {
            if !(0.0..=1.0).contains(&prevalence) {
                bail!(
                    "{}: prevalence {} for {} is outside [0, 1]",
                    spec.disease.as_str(),
                    prevalence,
                    symptom.as_str()
                );
            }
            if severity_std < 0.0 {
                bail!(
                    "{}: negative severity std for {}",
                    spec.disease.as_str(),
                    symptom.as_str()
                );
            }
            let slot = &mut slots[symptom.feature_index()];
            if slot.is_some() {
                bail!(
                    "{}: duplicate statistics entry for {}",
                    spec.disease.as_str(),
                    symptom.as_str()
                );
            }
            *slot = Some(SymptomStats {
                prevalence,
                severity_mean,
                severity_std,
            });
        }

        let mut stats = Vec::with_capacity(slots.len());
        for (idx, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(s) => stats.push(s),
                None => bail!(
                    "{}: profile is missing statistics for {}",
                    spec.disease.as_str(),
                    Symptom::ORDER[idx].as_str()
                ),
            }
        }

        Ok(DiseaseProfile {
            disease: spec.disease,
            description: spec.description,
            precautions: spec.precautions,
            references: spec.references,
            hallmarks: spec.hallmarks,
            stats,
        })
    }

    fn load_rules(spec: &catalog::ProfileSpec) -> Result<Vec<SymptomRule>> {
        let mut rules = Vec::with_capacity(spec.rules.len());

        for &(symptom, level_name, weight) in spec.rules {
            if !(weight > 0.0 && weight <= 1.0) {
                bail!(
                    "{}: rule weight {} for {} is outside (0, 1]",
                    spec.disease.as_str(),
                    weight,
                    symptom.as_str()
                );
            }
            if rules.iter().any(|r: &SymptomRule| r.symptom == symptom) {
                bail!(
                    "{}: duplicate rule for {}",
                    spec.disease.as_str(),
                    symptom.as_str()
                );
            }
            let Some(expected) = FuzzyLevel::resolve(symptom, level_name) else {
                bail!(
                    "{}: rule for {} references undefined fuzzy level '{}'",
                    spec.disease.as_str(),
                    symptom.as_str(),
                    level_name
                );
            };
            rules.push(SymptomRule {
                symptom,
                expected,
                weight,
            });
        }

        Ok(rules)
    }

    /// The canonical 20-symptom feature ordering.
    pub fn symptom_order() -> &'static [Symptom; 20] {
        &Symptom::ORDER
    }

    /// Definition for a symptom.
    pub fn definition(&self, symptom: Symptom) -> &SymptomDefinition {
        &self.definitions[symptom.feature_index()]
    }

    /// Clinical profile for a disease.
    pub fn profile(&self, disease: Disease) -> &DiseaseProfile {
        &self.profiles[disease as usize]
    }

    /// Fuzzy rule table for a disease.
    pub fn rules(&self, disease: Disease) -> &[SymptomRule] {
        self.rules
            .get(&disease)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Diseases in catalog order.
    pub fn diseases(&self) -> impl Iterator<Item = Disease> + '_ {
        self.profiles.iter().map(|p| p.disease)
    }

    /// Display names of every covered disease, in catalog order.
    pub fn disease_names(&self) -> Vec<&'static str> {
        self.profiles.iter().map(|p| p.disease.as_str()).collect()
    }
}
