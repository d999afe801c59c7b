use crate::domains::matching::models::{DispatchReport, ResourceMatch};

/// Outcome of one match pipeline run
#[derive(Debug, Clone)]
pub enum MatchingEvent {
    /// Nothing overlapped; no messages were sent
    NoMatchesFound {
        trigger_email: String,
        candidate_count: usize,
    },
    /// Matches found and every planned message attempted
    MatchesDispatched {
        matches: Vec<ResourceMatch>,
        report: DispatchReport,
    },
}

impl MatchingEvent {
    /// The dispatch report for this run; zero matches for `NoMatchesFound`
    pub fn report(&self) -> DispatchReport {
        match self {
            Self::NoMatchesFound { trigger_email, .. } => DispatchReport::new(trigger_email.clone(), 0),
            Self::MatchesDispatched { report, .. } => report.clone(),
        }
    }

    pub fn match_count(&self) -> usize {
        match self {
            Self::NoMatchesFound { .. } => 0,
            Self::MatchesDispatched { matches, .. } => matches.len(),
        }
    }
}
