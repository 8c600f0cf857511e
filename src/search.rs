use anyhow::Result;
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tracing::info;

use crate::scoring::{criteria_score, CriteriaScore, CriteriaSelection};

/// Default wait before the simulated search answers
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(1500);

/// Default number of matches the simulated search reports
pub const DEFAULT_CANNED_MATCHES: usize = 12;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct SearchOutcome {
    pub matches: usize,
    pub criteria: CriteriaScore,
}

/// "Find Matching Candidates" for an employer's slider selection.
pub trait CandidateSearch {
    fn find_matching(
        &self,
        selection: &CriteriaSelection,
    ) -> impl Future<Output = Result<SearchOutcome>> + Send;
}

/// Stand-in search: waits a fixed delay and reports a canned result count.
/// No candidate store is queried.
#[derive(Debug, Clone)]
pub struct SimulatedSearch {
    pub delay: Duration,
    pub canned_matches: usize,
}

impl Default for SimulatedSearch {
    fn default() -> Self {
        Self {
            delay: DEFAULT_SEARCH_DELAY,
            canned_matches: DEFAULT_CANNED_MATCHES,
        }
    }
}

impl CandidateSearch for SimulatedSearch {
    fn find_matching(
        &self,
        selection: &CriteriaSelection,
    ) -> impl Future<Output = Result<SearchOutcome>> + Send {
        let criteria = criteria_score(selection);
        let delay = self.delay;
        let matches = self.canned_matches;

        async move {
            tokio::time::sleep(delay).await;
            info!(matches, criteria = criteria.capped, "simulated candidate search finished");
            Ok(SearchOutcome { matches, criteria })
        }
    }
}
