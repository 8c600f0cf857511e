use super::config::AdditiveRubric;
use super::criteria::{CriteriaSelection, Criterion};

/// Validate the scoring rubric at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(rubric: &AdditiveRubric) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let non_negative = [
        ("experience_cap", rubric.experience_cap),
        ("skills_cap", rubric.skills_cap),
        ("locum_job_points", rubric.locum_job_points),
        ("locum_jobs_cap", rubric.locum_jobs_cap),
        ("application_points", rubric.application_points),
        ("profile_update_points", rubric.profile_update_points),
        ("platform_activity_cap", rubric.platform_activity_cap),
        ("volunteering_bonus", rubric.volunteering_bonus),
        ("home_country_bonus", rubric.home_country_bonus),
        ("other_country_bonus", rubric.other_country_bonus),
    ];
    for (name, value) in non_negative {
        if !value.is_finite() || value < 0.0 {
            errors.push(format!("scoring.{}: must be a non-negative number", name));
        }
    }

    // Divisors must be strictly positive
    for (name, value) in [
        ("skills_divisor", rubric.skills_divisor),
        ("login_divisor", rubric.login_divisor),
    ] {
        if !value.is_finite() || value <= 0.0 {
            errors.push(format!("scoring.{}: must be greater than zero", name));
        }
    }

    if !rubric.employer_match_max.is_finite() || rubric.employer_match_max <= 0.0 {
        errors.push("scoring.employer_match_max: must be greater than zero".to_string());
    }

    if rubric.home_country.trim().is_empty() {
        errors.push("scoring.home_country: must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check every slider against its allowed range.
pub fn validate_criteria(selection: &CriteriaSelection) -> Result<(), Vec<String>> {
    let errors: Vec<String> = Criterion::ALL
        .iter()
        .filter(|criterion| !criterion.contains(selection.get(**criterion)))
        .map(|criterion| {
            let (low, high) = criterion.range();
            format!(
                "criteria.{}: must be between {} and {}, got {}",
                criterion.key(),
                low,
                high,
                selection.get(*criterion)
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rubric_valid() {
        assert!(validate_scoring(&AdditiveRubric::default()).is_ok());
    }

    #[test]
    fn test_negative_cap() {
        let rubric = AdditiveRubric {
            experience_cap: -1.0,
            ..AdditiveRubric::default()
        };
        let errors = validate_scoring(&rubric).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.experience_cap"));
    }

    #[test]
    fn test_zero_divisor() {
        let rubric = AdditiveRubric {
            login_divisor: 0.0,
            ..AdditiveRubric::default()
        };
        let errors = validate_scoring(&rubric).unwrap_err();
        assert!(errors[0].contains("scoring.login_divisor"));
    }

    #[test]
    fn test_empty_home_country() {
        let rubric = AdditiveRubric {
            home_country: "  ".to_string(),
            ..AdditiveRubric::default()
        };
        let errors = validate_scoring(&rubric).unwrap_err();
        assert!(errors[0].contains("home_country"));
    }

    #[test]
    fn test_collects_all_errors() {
        let rubric = AdditiveRubric {
            skills_cap: -5.0,           // Error 1
            skills_divisor: 0.0,        // Error 2
            employer_match_max: 0.0,    // Error 3
            ..AdditiveRubric::default()
        };
        let errors = validate_scoring(&rubric).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_valid_criteria() {
        assert!(validate_criteria(&CriteriaSelection::default()).is_ok());
        assert!(validate_criteria(&CriteriaSelection::minimum()).is_ok());
        assert!(validate_criteria(&CriteriaSelection::uniform(10)).is_ok());
    }

    #[test]
    fn test_criteria_out_of_range() {
        let mut selection = CriteriaSelection::uniform(0);
        selection.experience = 12;
        let errors = validate_criteria(&selection).unwrap_err();

        // Seven sliders reject 0 (experience rejects 12 instead); locum jobs and volunteering accept it
        assert_eq!(errors.len(), 7);
        assert!(errors[0].contains("criteria.experience"));
        assert!(errors[0].contains("got 12"));
        assert!(!errors.iter().any(|e| e.contains("locum_jobs")));
    }
}
