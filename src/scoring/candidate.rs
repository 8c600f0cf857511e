use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Input record of the additive score.
///
/// Field names follow the camelCase shape the UI layer sends. Every field has
/// a default, so a payload that omits a nested object scores it as zero.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CandidateData {
    pub experience: Experience,
    pub skills: BTreeSet<String>,
    /// Ordinal level per skill name
    pub skill_levels: BTreeMap<String, u32>,
    /// Informational, not scored
    pub certifications: BTreeSet<String>,
    pub locum_jobs: u32,
    pub platform_activity: PlatformActivity,
    pub volunteering: bool,
    pub location: Location,
    /// Pre-computed match against an employer's criteria, expected in [0, 110]
    pub employer_match: f64,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Experience {
    pub years: u32,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlatformActivity {
    pub logins: u32,
    pub applications: u32,
    pub profile_updates: u32,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Per-factor result of the additive score. `total` is the plain sum of the seven sub-scores.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub experience: f64,
    pub skills: f64,
    pub locum_jobs: f64,
    pub platform_activity: f64,
    pub volunteering: f64,
    pub location: f64,
    pub employer_match: f64,
    pub total: f64,
}

impl ScoreBreakdown {
    /// Sub-scores in display order, labelled
    pub fn components(&self) -> [(&'static str, f64); 7] {
        [
            ("Experience", self.experience),
            ("Skills", self.skills),
            ("Locum Jobs", self.locum_jobs),
            ("Platform Activity", self.platform_activity),
            ("Volunteering", self.volunteering),
            ("Location", self.location),
            ("Employer Match", self.employer_match),
        ]
    }
}
