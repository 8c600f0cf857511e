use super::candidate::{CandidateData, ScoreBreakdown};
use super::config::AdditiveRubric;

/// Additive GLOHSEN Score: seven capped sub-scores summed into a total.
///
/// Stateless apart from its rubric, so one model can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct AdditiveScoreModel {
    rubric: AdditiveRubric,
}

impl AdditiveScoreModel {
    pub fn new(rubric: AdditiveRubric) -> Self {
        Self { rubric }
    }

    pub fn rubric(&self) -> &AdditiveRubric {
        &self.rubric
    }

    pub fn compute(&self, data: &CandidateData) -> ScoreBreakdown {
        let r = &self.rubric;

        let experience = bounded(data.experience.years as f64, r.experience_cap);

        let level_sum: u64 = data.skill_levels.values().map(|&level| level as u64).sum();
        let skills = bounded(level_sum as f64 / r.skills_divisor, r.skills_cap);

        let locum_jobs = bounded(data.locum_jobs as f64 * r.locum_job_points, r.locum_jobs_cap);

        let activity = &data.platform_activity;
        let raw_activity = activity.logins as f64 / r.login_divisor
            + activity.applications as f64 * r.application_points
            + activity.profile_updates as f64 * r.profile_update_points;
        let platform_activity = bounded(raw_activity, r.platform_activity_cap);

        let volunteering = if data.volunteering {
            bounded(r.volunteering_bonus, r.volunteering_bonus)
        } else {
            0.0
        };

        let location_bonus = if is_home_country(&data.location.country, &r.home_country) {
            r.home_country_bonus
        } else {
            r.other_country_bonus
        };
        let location = bounded(location_bonus, r.location_cap());

        let employer_match = bounded(data.employer_match, r.employer_match_max);

        let total = experience
            + skills
            + locum_jobs
            + platform_activity
            + volunteering
            + location
            + employer_match;

        ScoreBreakdown {
            experience,
            skills,
            locum_jobs,
            platform_activity,
            volunteering,
            location,
            employer_match,
            total,
        }
    }
}

/// Score a candidate with the default rubric.
pub fn compute_score(data: &CandidateData) -> ScoreBreakdown {
    AdditiveScoreModel::default().compute(data)
}

/// Clamp into [0, cap]; non-finite raw values count as zero.
fn bounded(value: f64, cap: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, cap.max(0.0))
}

/// Exact, case-sensitive match against the rubric's home country
fn is_home_country(country: &str, home: &str) -> bool {
    !country.is_empty() && country == home
}
