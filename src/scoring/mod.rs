pub mod candidate;
pub mod config;
pub mod criteria;
pub mod engine;
pub mod validation;

pub use candidate::{CandidateData, Experience, Location, PlatformActivity, ScoreBreakdown};
pub use config::*;
pub use criteria::{
    criteria_score, format_criteria_score, CriteriaScore, CriteriaSelection, Criterion,
    MultiplicativeCriteriaModel, CRITERIA_SCORE_CAP,
};
pub use engine::{compute_score, AdditiveScoreModel};
pub use validation::{validate_criteria, validate_scoring};
