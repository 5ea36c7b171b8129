// Persona catalog
//
// Personas are prompt templates that steer the tone of generated ideas. The
// built-in set is compiled in from data/personas/*.toml; a deployment can add
// or override entries from a directory of TOML files at startup. The catalog
// is read-only once built.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::errors::BrainstormError;

/// A named prompt template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Persona {
    /// Display name (e.g. "The Innovator")
    pub name: String,

    /// One-line summary shown in the persona picker
    pub description: String,

    /// Instruction text prepended to every generation prompt
    pub prompt: String,
}

impl Persona {
    /// Load persona from TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read persona from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse persona TOML {}", path.display()))
    }
}

const BUILTIN_PERSONAS: &[(&str, &str)] = &[
    ("innovator", include_str!("../../data/personas/innovator.toml")),
    ("critic", include_str!("../../data/personas/critic.toml")),
    ("visionary", include_str!("../../data/personas/visionary.toml")),
    ("pragmatist", include_str!("../../data/personas/pragmatist.toml")),
    ("empath", include_str!("../../data/personas/empath.toml")),
    ("economist", include_str!("../../data/personas/economist.toml")),
];

/// Persona key → persona
#[derive(Debug, Clone, Default)]
pub struct PersonaCatalog {
    personas: BTreeMap<String, Persona>,
}

impl PersonaCatalog {
    /// Catalog with the six built-in personas
    pub fn builtin() -> Result<Self> {
        let mut personas = BTreeMap::new();
        for (key, template) in BUILTIN_PERSONAS {
            let persona: Persona = toml::from_str(template)
                .with_context(|| format!("Failed to parse builtin persona: {}", key))?;
            personas.insert(key.to_string(), persona);
        }
        Ok(Self { personas })
    }

    /// Add every `*.toml` in `dir`, keyed by file stem. Existing keys are replaced.
    pub fn with_dir(mut self, dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read persona directory {}", dir.display()))?;

        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let persona = Persona::load(&path)?;
            tracing::info!(key, name = %persona.name, "Loaded custom persona");
            self.personas.insert(key.to_string(), persona);
        }
        Ok(self)
    }

    pub fn lookup(&self, key: &str) -> std::result::Result<&Persona, BrainstormError> {
        self.personas
            .get(key)
            .ok_or_else(|| BrainstormError::UnknownPersona(key.to_string()))
    }

    pub fn list_all(&self) -> &BTreeMap<String, Persona> {
        &self.personas
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}
