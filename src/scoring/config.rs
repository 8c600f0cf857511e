use serde::{Deserialize, Serialize};

/// Caps and weights of the additive GLOHSEN Score.
///
/// The defaults are the platform's published rubric. Every field can be
/// overridden from the config file; omitted fields keep their default.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   experience_cap: 10
///   skills_divisor: 2
///   home_country: Nigeria
///   home_country_bonus: 5
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AdditiveRubric {
    /// Maximum points for years of practice (one point per year)
    pub experience_cap: f64,

    /// Sum of skill levels is divided by this before capping
    pub skills_divisor: f64,
    pub skills_cap: f64,

    /// Points per completed locum job
    pub locum_job_points: f64,
    pub locum_jobs_cap: f64,

    /// Logins are divided by this; applications and profile updates are multiplied
    pub login_divisor: f64,
    pub application_points: f64,
    pub profile_update_points: f64,
    pub platform_activity_cap: f64,

    pub volunteering_bonus: f64,

    /// Country that earns the home-market bonus (exact match)
    pub home_country: String,
    pub home_country_bonus: f64,
    pub other_country_bonus: f64,

    /// Upper bound of the externally supplied employer match
    pub employer_match_max: f64,
}

impl Default for AdditiveRubric {
    fn default() -> Self {
        Self {
            experience_cap: 10.0,
            skills_divisor: 2.0,
            skills_cap: 15.0,
            locum_job_points: 2.0,
            locum_jobs_cap: 10.0,
            login_divisor: 10.0,
            application_points: 2.0,
            profile_update_points: 3.0,
            platform_activity_cap: 10.0,
            volunteering_bonus: 10.0,
            home_country: "Nigeria".to_string(),
            home_country_bonus: 5.0,
            other_country_bonus: 3.0,
            employer_match_max: 110.0,
        }
    }
}

impl AdditiveRubric {
    /// Largest value the location sub-score can take
    pub fn location_cap(&self) -> f64 {
        self.home_country_bonus.max(self.other_country_bonus)
    }

    /// Sum of every sub-score cap. Informational only; totals are never normalized against it.
    pub fn nominal_max(&self) -> f64 {
        self.experience_cap
            + self.skills_cap
            + self.locum_jobs_cap
            + self.platform_activity_cap
            + self.volunteering_bonus
            + self.location_cap()
            + self.employer_match_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rubric_matches_published_constants() {
        let rubric = AdditiveRubric::default();

        assert_eq!(rubric.experience_cap, 10.0);
        assert_eq!(rubric.skills_cap, 15.0);
        assert_eq!(rubric.home_country, "Nigeria");
        assert_eq!(rubric.employer_match_max, 110.0);
    }

    #[test]
    fn test_nominal_max_is_170() {
        assert_eq!(AdditiveRubric::default().nominal_max(), 170.0);
    }

    #[test]
    fn test_rubric_serde_roundtrip() {
        let rubric = AdditiveRubric::default();
        let yaml = serde_saphyr::to_string(&rubric).unwrap();
        let parsed: AdditiveRubric = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(rubric, parsed);
    }

    #[test]
    fn test_partial_rubric_keeps_defaults() {
        let yaml = r#"
experience_cap: 20
home_country: Ghana
"#;
        let rubric: AdditiveRubric = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(rubric.experience_cap, 20.0);
        assert_eq!(rubric.home_country, "Ghana");
        assert_eq!(rubric.skills_cap, 15.0);
        assert_eq!(rubric.volunteering_bonus, 10.0);
    }

    #[test]
    fn test_unknown_rubric_field_rejected() {
        let yaml = "experience_weight: 3\n";
        let result: Result<AdditiveRubric, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_location_cap_uses_larger_bonus() {
        let rubric = AdditiveRubric {
            home_country_bonus: 2.0,
            other_country_bonus: 4.0,
            ..AdditiveRubric::default()
        };
        assert_eq!(rubric.location_cap(), 4.0);
    }
}
