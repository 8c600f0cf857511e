pub mod adapter;
pub mod history;
pub mod types;

pub use adapter::{experience_years, ProfileAdapter};
pub use history::{ActivityHistory, HistoryProvider, PlaceholderHistory, RecordedHistory};
pub use types::{Certificate, ExperienceEntry, ProfessionalProfile, ProfileSkill, SkillLevel};
