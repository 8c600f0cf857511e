use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display ceiling of the criteria product
pub const CRITERIA_SCORE_CAP: u64 = 1_000_000_000;

/// One of the nine employer-side sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Experience,
    SkillLevel,
    Certifications,
    Education,
    Specialization,
    Location,
    PlatformActivity,
    LocumJobs,
    Volunteering,
}

impl Criterion {
    pub const ALL: [Criterion; 9] = [
        Criterion::Experience,
        Criterion::SkillLevel,
        Criterion::Certifications,
        Criterion::Education,
        Criterion::Specialization,
        Criterion::Location,
        Criterion::PlatformActivity,
        Criterion::LocumJobs,
        Criterion::Volunteering,
    ];

    /// Config/CLI key, matches the `CriteriaSelection` field name
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::Experience => "experience",
            Criterion::SkillLevel => "skill_level",
            Criterion::Certifications => "certifications",
            Criterion::Education => "education",
            Criterion::Specialization => "specialization",
            Criterion::Location => "location",
            Criterion::PlatformActivity => "platform_activity",
            Criterion::LocumJobs => "locum_jobs",
            Criterion::Volunteering => "volunteering",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Experience => "Experience",
            Criterion::SkillLevel => "Skill Level",
            Criterion::Certifications => "Certifications",
            Criterion::Education => "Education",
            Criterion::Specialization => "Specialization",
            Criterion::Location => "Location",
            Criterion::PlatformActivity => "Platform Activity",
            Criterion::LocumJobs => "Locum Jobs",
            Criterion::Volunteering => "Volunteering",
        }
    }

    /// Inclusive slider bounds. Locum jobs and volunteering may be switched off entirely.
    pub fn range(&self) -> (u8, u8) {
        match self {
            Criterion::LocumJobs | Criterion::Volunteering => (0, 10),
            _ => (1, 10),
        }
    }

    pub fn contains(&self, value: u8) -> bool {
        let (low, high) = self.range();
        value >= low && value <= high
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Criterion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match Criterion::ALL.iter().find(|c| c.key() == normalized) {
            Some(criterion) => Ok(*criterion),
            None => bail!(
                "Unknown criterion '{}'. Expected one of: {}",
                s,
                Criterion::ALL.map(|c| c.key()).join(", ")
            ),
        }
    }
}

/// Slider positions chosen by an employer.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CriteriaSelection {
    pub experience: u8,
    pub skill_level: u8,
    pub certifications: u8,
    pub education: u8,
    pub specialization: u8,
    pub location: u8,
    pub platform_activity: u8,
    pub locum_jobs: u8,
    pub volunteering: u8,
}

impl Default for CriteriaSelection {
    fn default() -> Self {
        Self::uniform(5)
    }
}

impl CriteriaSelection {
    /// Every slider at `value`, without range checks
    pub fn uniform(value: u8) -> Self {
        Self {
            experience: value,
            skill_level: value,
            certifications: value,
            education: value,
            specialization: value,
            location: value,
            platform_activity: value,
            locum_jobs: value,
            volunteering: value,
        }
    }

    /// Every slider at its lowest allowed position
    pub fn minimum() -> Self {
        let mut selection = Self::uniform(1);
        selection.locum_jobs = Criterion::LocumJobs.range().0;
        selection.volunteering = Criterion::Volunteering.range().0;
        selection
    }

    pub fn get(&self, criterion: Criterion) -> u8 {
        match criterion {
            Criterion::Experience => self.experience,
            Criterion::SkillLevel => self.skill_level,
            Criterion::Certifications => self.certifications,
            Criterion::Education => self.education,
            Criterion::Specialization => self.specialization,
            Criterion::Location => self.location,
            Criterion::PlatformActivity => self.platform_activity,
            Criterion::LocumJobs => self.locum_jobs,
            Criterion::Volunteering => self.volunteering,
        }
    }

    pub fn set(&mut self, criterion: Criterion, value: u8) -> Result<()> {
        if !criterion.contains(value) {
            let (low, high) = criterion.range();
            bail!(
                "{} must be between {} and {}, got {}",
                criterion.key(),
                low,
                high,
                value
            );
        }
        let slot = match criterion {
            Criterion::Experience => &mut self.experience,
            Criterion::SkillLevel => &mut self.skill_level,
            Criterion::Certifications => &mut self.certifications,
            Criterion::Education => &mut self.education,
            Criterion::Specialization => &mut self.specialization,
            Criterion::Location => &mut self.location,
            Criterion::PlatformActivity => &mut self.platform_activity,
            Criterion::LocumJobs => &mut self.locum_jobs,
            Criterion::Volunteering => &mut self.volunteering,
        };
        *slot = value;
        Ok(())
    }

    /// Apply a "name=value" assignment, as passed on the command line
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let Some((name, value)) = assignment.split_once('=') else {
            bail!("Invalid criterion assignment '{}', expected name=value", assignment);
        };
        let criterion: Criterion = name.parse()?;
        let value: u8 = value.trim().parse().map_err(|e| {
            anyhow::anyhow!("Invalid value for {}: '{}' - {}", criterion, value.trim(), e)
        })?;
        self.set(criterion, value)
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CriteriaScore {
    /// Product of all nine sliders
    pub raw: u64,
    /// `raw` limited to the display ceiling
    pub capped: u64,
}

impl CriteriaScore {
    pub fn is_maximum(&self) -> bool {
        self.capped >= CRITERIA_SCORE_CAP
    }

    pub fn display(&self) -> String {
        format_criteria_score(self.capped)
    }
}

/// Employer-side score: the product of the nine slider values.
///
/// Kept separate from the additive model; the two are not reconciled.
#[derive(Debug, Clone, Copy, Default)]
pub struct MultiplicativeCriteriaModel;

impl MultiplicativeCriteriaModel {
    pub fn score(&self, selection: &CriteriaSelection) -> CriteriaScore {
        criteria_score(selection)
    }
}

pub fn criteria_score(selection: &CriteriaSelection) -> CriteriaScore {
    let raw = Criterion::ALL
        .iter()
        .map(|&criterion| {
            let (low, high) = criterion.range();
            selection.get(criterion).clamp(low, high) as u64
        })
        .product::<u64>();

    CriteriaScore {
        raw,
        capped: raw.min(CRITERIA_SCORE_CAP),
    }
}

/// Human-friendly magnitude: "Maximum (1,000,000,000)", "1.9 million", "3.1K", "720"
pub fn format_criteria_score(value: u64) -> String {
    if value >= CRITERIA_SCORE_CAP {
        "Maximum (1,000,000,000)".to_string()
    } else if value >= 1_000_000 {
        format!("{:.1} million", value as f64 / 1_000_000.0)
    } else if value >= 1_000 {
        format!("{:.1}K", value as f64 / 1_000.0)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tens_is_maximum() {
        let score = criteria_score(&CriteriaSelection::uniform(10));
        assert_eq!(score.raw, 1_000_000_000);
        assert_eq!(score.capped, 1_000_000_000);
        assert!(score.is_maximum());
        assert_eq!(score.display(), "Maximum (1,000,000,000)");
    }

    #[test]
    fn test_minimum_collapses_to_zero() {
        let score = criteria_score(&CriteriaSelection::minimum());
        assert_eq!(score.raw, 0);
        assert_eq!(score.display(), "0");
    }

    #[test]
    fn test_single_zero_slider_collapses_product() {
        let mut selection = CriteriaSelection::uniform(10);
        selection.set(Criterion::Volunteering, 0).unwrap();
        assert_eq!(criteria_score(&selection).raw, 0);
    }

    #[test]
    fn test_all_ones_is_one() {
        assert_eq!(criteria_score(&CriteriaSelection::uniform(1)).raw, 1);
    }

    #[test]
    fn test_default_selection_product() {
        // 5^9
        let score = criteria_score(&CriteriaSelection::default());
        assert_eq!(score.raw, 1_953_125);
        assert_eq!(score.display(), "2.0 million");
    }

    #[test]
    fn test_out_of_range_values_clamped() {
        let mut selection = CriteriaSelection::uniform(10);
        selection.experience = 200;
        assert_eq!(criteria_score(&selection).raw, 1_000_000_000);

        selection.education = 0;
        // Education cannot go below 1
        assert_eq!(criteria_score(&selection).raw, 100_000_000);
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let mut selection = CriteriaSelection::default();
        assert!(selection.set(Criterion::Experience, 0).is_err());
        assert!(selection.set(Criterion::Experience, 11).is_err());
        assert!(selection.set(Criterion::LocumJobs, 0).is_ok());
        assert_eq!(selection.get(Criterion::LocumJobs), 0);
    }

    #[test]
    fn test_apply_assignment() {
        let mut selection = CriteriaSelection::default();
        selection.apply_assignment("skill-level=9").unwrap();
        selection.apply_assignment(" Platform_Activity = 2").unwrap();

        assert_eq!(selection.skill_level, 9);
        assert_eq!(selection.platform_activity, 2);
    }

    #[test]
    fn test_apply_assignment_errors() {
        let mut selection = CriteriaSelection::default();
        assert!(selection.apply_assignment("experience").is_err());
        assert!(selection.apply_assignment("salary=4").is_err());
        assert!(selection.apply_assignment("experience=high").is_err());
        assert!(selection.apply_assignment("education=0").is_err());
    }

    #[test]
    fn test_format_criteria_score_magnitudes() {
        assert_eq!(format_criteria_score(720), "720");
        assert_eq!(format_criteria_score(3_100), "3.1K");
        assert_eq!(format_criteria_score(2_500_000), "2.5 million");
        assert_eq!(format_criteria_score(999_000_000), "999.0 million");
        assert_eq!(format_criteria_score(5_000_000_000), "Maximum (1,000,000,000)");
    }

    #[test]
    fn test_partial_selection_parse() {
        let yaml = r#"
experience: 8
locum_jobs: 0
"#;
        let selection: CriteriaSelection = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(selection.experience, 8);
        assert_eq!(selection.locum_jobs, 0);
        assert_eq!(selection.education, 5);
    }

    #[test]
    fn test_criterion_keys_roundtrip() {
        for criterion in Criterion::ALL {
            assert_eq!(criterion.key().parse::<Criterion>().unwrap(), criterion);
        }
    }
}
