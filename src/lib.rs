//! GLOHSEN Score engine.
//!
//! Two independent scoring models live here: the additive candidate score
//! ([`scoring::AdditiveScoreModel`]) and the employer-side criteria product
//! ([`scoring::MultiplicativeCriteriaModel`]). [`profile`] turns stored
//! professional profiles into additive-score input.

pub mod config;
pub mod input;
pub mod logging;
pub mod output;
pub mod profile;
pub mod scoring;
pub mod search;
