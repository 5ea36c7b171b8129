// Mind-map branch expansion

use std::collections::HashSet;
use std::sync::Arc;

use super::prompt::compose_mindmap_prompt;
use crate::errors::{BrainstormError, Result};
use crate::providers::TextGenerator;

/// Upper bound on branches returned per expansion
pub const MAX_BRANCHES: usize = 5;

pub struct MindmapExpander {
    generator: Arc<dyn TextGenerator>,
}

impl MindmapExpander {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Ask for new branches under `topic`, at most [`MAX_BRANCHES`]
    pub async fn expand(&self, topic: &str, current_branches: &[String]) -> Result<Vec<String>> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(BrainstormError::InvalidInput("Topic is required".to_string()));
        }

        let prompt = compose_mindmap_prompt(topic, current_branches);
        let raw = self.generator.generate(&prompt).await.map_err(|e| {
            tracing::error!(provider = self.generator.name(), "Error expanding mind map: {:#}", e);
            BrainstormError::Generation(e)
        })?;

        let branches = parse_branches(&raw, current_branches);
        tracing::debug!(topic, count = branches.len(), "Mind map expanded");
        Ok(branches)
    }
}

/// Turn a line-per-branch response into clean branch labels.
///
/// Strips bullet and dash prefixes, drops blank lines and keeps the first
/// [`MAX_BRANCHES`] labels. A label repeating an existing branch or an earlier
/// label (case-insensitive) is skipped only while the response has lines to
/// spare, so a long enough reply still yields [`MAX_BRANCHES`] labels.
pub fn parse_branches(raw: &str, existing: &[String]) -> Vec<String> {
    let labels: Vec<String> = raw
        .lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(|c: char| matches!(c, '-' | '*' | '•'))
                .trim()
                .to_string()
        })
        .filter(|label| !label.is_empty())
        .collect();

    let mut spare = labels.len().saturating_sub(MAX_BRANCHES);
    let mut seen: HashSet<String> = existing.iter().map(|b| b.trim().to_lowercase()).collect();
    let mut branches = Vec::with_capacity(MAX_BRANCHES);

    for label in labels {
        if branches.len() == MAX_BRANCHES {
            break;
        }
        if !seen.insert(label.to_lowercase()) && spare > 0 {
            spare -= 1;
            continue;
        }
        branches.push(label);
    }
    branches
}
