use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::scoring::Location;

/// Professional profile as held by the profile store.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfessionalProfile {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub experiences: Vec<ExperienceEntry>,
    pub skills: Vec<ProfileSkill>,
    pub certificates: Vec<Certificate>,
    pub location: Option<Location>,
    /// Previously published score, if any
    pub glohsen_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Still in this role; the end date is ignored
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProfileSkill {
    pub name: String,
    /// Raw level label, e.g. "ADVANCED"
    #[serde(default)]
    pub level: String,
}

impl ProfileSkill {
    pub fn level_value(&self) -> u32 {
        SkillLevel::from_label(&self.level)
            .unwrap_or(SkillLevel::Beginner)
            .value()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub name: String,
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub issued_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SkillLevel {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
    Expert = 4,
}

impl SkillLevel {
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_uppercase().as_str() {
            "BEGINNER" => Some(SkillLevel::Beginner),
            "INTERMEDIATE" => Some(SkillLevel::Intermediate),
            "ADVANCED" => Some(SkillLevel::Advanced),
            "EXPERT" => Some(SkillLevel::Expert),
            _ => None,
        }
    }

    pub fn value(self) -> u32 {
        self as u32
    }
}
