use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::scoring::AdditiveRubric;
use crate::search::{SimulatedSearch, DEFAULT_CANNED_MATCHES};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Additive rubric overrides; defaults apply when absent
    pub scoring: Option<AdditiveRubric>,
    pub search: Option<SearchConfig>,
}

impl Config {
    pub fn rubric(&self) -> AdditiveRubric {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn search_config(&self) -> SearchConfig {
        self.search.clone().unwrap_or_default()
    }
}

/// Simulated candidate search settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// How long the search pretends to run, e.g. "1500ms" or "2s"
    pub delay: String,
    pub canned_matches: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            delay: "1500ms".to_string(),
            canned_matches: DEFAULT_CANNED_MATCHES,
        }
    }
}

impl SearchConfig {
    pub fn to_search(&self) -> Result<SimulatedSearch> {
        let delay = humantime::parse_duration(self.delay.trim())
            .with_context(|| format!("Invalid search delay '{}'", self.delay))?;
        Ok(SimulatedSearch {
            delay,
            canned_matches: self.canned_matches,
        })
    }
}
