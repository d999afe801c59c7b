use serde::Serialize;

use crate::domains::directory::Organization;

/// Tag overlap between the trigger (T) and one counterpart (C)
///
/// Transient: built fresh on every trigger and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceMatch {
    pub counterpart: Organization,
    /// T.resourcesNeeded ∩ C.resourcesHave, in T's order
    pub match_needed: Vec<String>,
    /// T.resourcesHave ∩ C.resourcesNeeded, in T's order
    pub match_offered: Vec<String>,
}

impl ResourceMatch {
    pub fn is_empty(&self) -> bool {
        self.match_needed.is_empty() && self.match_offered.is_empty()
    }
}
