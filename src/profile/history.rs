use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use super::types::ProfessionalProfile;
use crate::scoring::PlatformActivity;

/// Engagement signals that the profile record itself does not carry.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ActivityHistory {
    pub locum_jobs: u32,
    pub platform_activity: PlatformActivity,
    pub volunteering: bool,
}

/// Source of locum, activity and volunteering data for a profile.
pub trait HistoryProvider {
    fn history_for(&self, profile: &ProfessionalProfile) -> ActivityHistory;
}

impl<T: HistoryProvider + ?Sized> HistoryProvider for &T {
    fn history_for(&self, profile: &ProfessionalProfile) -> ActivityHistory {
        (**self).history_for(profile)
    }
}

impl<T: HistoryProvider + ?Sized> HistoryProvider for Box<T> {
    fn history_for(&self, profile: &ProfessionalProfile) -> ActivityHistory {
        (**self).history_for(profile)
    }
}

/// Fixed stand-in values used before real activity tracking existed.
///
/// Every profile gets the same history. Only useful to reproduce legacy scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderHistory;

impl PlaceholderHistory {
    pub const HISTORY: ActivityHistory = ActivityHistory {
        locum_jobs: 3,
        platform_activity: PlatformActivity {
            logins: 25,
            applications: 2,
            profile_updates: 1,
        },
        volunteering: false,
    };
}

impl HistoryProvider for PlaceholderHistory {
    fn history_for(&self, profile: &ProfessionalProfile) -> ActivityHistory {
        warn!(
            profile = profile.id.as_deref().unwrap_or("(unsaved)"),
            "using placeholder activity history; locum, activity and volunteering are not real data"
        );
        Self::HISTORY
    }
}

/// Activity history keyed by profile id.
///
/// Profiles without a record (or without an id) get an all-zero history.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct RecordedHistory {
    records: HashMap<String, ActivityHistory>,
}

impl RecordedHistory {
    pub fn new(records: HashMap<String, ActivityHistory>) -> Self {
        Self { records }
    }

    /// Load records from a JSON or YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let history: Self = crate::input::read_document(path)?;
        debug!(records = history.records.len(), path = %path.display(), "loaded activity history");
        Ok(history)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl HistoryProvider for RecordedHistory {
    fn history_for(&self, profile: &ProfessionalProfile) -> ActivityHistory {
        match profile.id.as_deref().and_then(|id| self.records.get(id)) {
            Some(history) => *history,
            None => {
                debug!(
                    profile = profile.id.as_deref().unwrap_or("(unsaved)"),
                    "no activity history recorded, scoring as zero"
                );
                ActivityHistory::default()
            }
        }
    }
}
