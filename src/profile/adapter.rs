use chrono::{Datelike, Local, NaiveDate};
use tracing::debug;

use super::history::HistoryProvider;
use super::types::{ExperienceEntry, ProfessionalProfile};
use crate::scoring::{CandidateData, Experience};

/// Employer match assumed when the profile has never been scored
pub const DEFAULT_EMPLOYER_MATCH: f64 = 70.0;

/// Subtracted from a previously published score to estimate the employer match
pub const PUBLISHED_SCORE_OFFSET: f64 = 50.0;

pub const EMPLOYER_MATCH_MAX: f64 = 110.0;

/// Translates a stored professional profile into the scoring input.
///
/// Activity signals come from the injected `HistoryProvider`; `today` closes
/// experience entries that are still open.
pub struct ProfileAdapter<H> {
    history: H,
    today: NaiveDate,
}

impl<H: HistoryProvider> ProfileAdapter<H> {
    pub fn new(history: H) -> Self {
        Self {
            history,
            today: Local::now().date_naive(),
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn to_candidate_data(&self, profile: &ProfessionalProfile) -> CandidateData {
        let years = experience_years(&profile.experiences, self.today);
        let history = self.history.history_for(profile);

        let skill_levels = profile
            .skills
            .iter()
            .map(|skill| (skill.name.clone(), skill.level_value()))
            .collect();

        let employer_match = estimate_employer_match(profile.glohsen_score);

        debug!(
            profile = profile.id.as_deref().unwrap_or("(unsaved)"),
            years,
            skills = profile.skills.len(),
            employer_match,
            "adapted profile"
        );

        CandidateData {
            experience: Experience { years },
            skills: profile.skills.iter().map(|s| s.name.clone()).collect(),
            skill_levels,
            certifications: profile.certificates.iter().map(|c| c.name.clone()).collect(),
            locum_jobs: history.locum_jobs,
            platform_activity: history.platform_activity,
            volunteering: history.volunteering,
            location: profile.location.clone().unwrap_or_default(),
            employer_match,
        }
    }
}

/// Sum of whole calendar years across all entries. Open entries run until `today`.
pub fn experience_years(entries: &[ExperienceEntry], today: NaiveDate) -> u32 {
    entries
        .iter()
        .map(|entry| {
            let end = match entry.end_date {
                Some(end) if !entry.current => end,
                _ => today,
            };
            (end.year() - entry.start_date.year()).max(0) as u32
        })
        .sum()
}

fn estimate_employer_match(published: Option<f64>) -> f64 {
    let estimate = match published {
        Some(score) if score.is_finite() => score - PUBLISHED_SCORE_OFFSET,
        _ => DEFAULT_EMPLOYER_MATCH,
    };
    estimate.clamp(0.0, EMPLOYER_MATCH_MAX)
}
