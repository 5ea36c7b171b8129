// Scoring criteria table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named, weighted scoring dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Display name (e.g. "Potential Impact")
    pub name: String,
    /// Weight in 0..=1
    pub weight: f64,
}

/// Criterion key → criterion. Serializes as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CriteriaTable {
    criteria: BTreeMap<String, Criterion>,
}

const BUILTIN_CRITERIA: &[(&str, &str, f64)] = &[
    ("creativity", "Creativity", 0.2),
    ("feasibility", "Feasibility", 0.25),
    ("impact", "Potential Impact", 0.25),
    ("originality", "Originality", 0.15),
    ("viability", "Commercial Viability", 0.15),
];

impl CriteriaTable {
    pub fn new(criteria: impl IntoIterator<Item = (String, Criterion)>) -> Self {
        Self {
            criteria: criteria.into_iter().collect(),
        }
    }

    /// The five criteria shipped with the server
    pub fn builtin() -> Self {
        Self::new(BUILTIN_CRITERIA.iter().map(|(key, name, weight)| {
            (
                key.to_string(),
                Criterion {
                    name: name.to_string(),
                    weight: *weight,
                },
            )
        }))
    }

    pub fn get(&self, key: &str) -> Option<&Criterion> {
        self.criteria.get(key)
    }

    pub fn weight(&self, key: &str) -> Option<f64> {
        self.criteria.get(key).map(|c| c.weight)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Criterion)> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn weight_sum(&self) -> f64 {
        self.criteria.values().map(|c| c.weight).sum()
    }

    /// Weights are expected to sum to 1.0 but nothing enforces it
    pub fn is_normalized(&self) -> bool {
        (self.weight_sum() - 1.0).abs() < 1e-9
    }
}

impl Default for CriteriaTable {
    fn default() -> Self {
        Self::builtin()
    }
}
