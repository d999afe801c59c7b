//! Pure match computation
//!
//! No I/O and no errors: the trigger plus a snapshot fully determine the result.
//! Cost is O(n·m) for n candidates and m tags per set; tag sets are small, so no
//! index is built.

use std::collections::HashSet;

use crate::domains::directory::Organization;
use crate::domains::matching::models::ResourceMatch;

/// Tags of `left` that also appear in `right`, in `left`'s order, without repeats.
///
/// Membership is exact string equality.
pub fn intersect(left: &[String], right: &[String]) -> Vec<String> {
    let right: HashSet<&str> = right.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut shared = Vec::new();

    for tag in left {
        if right.contains(tag.as_str()) && seen.insert(tag.as_str()) {
            shared.push(tag.clone());
        }
    }
    shared
}

/// Overlap between the trigger and a single candidate, if any.
pub fn match_candidate(trigger: &Organization, candidate: &Organization) -> Option<ResourceMatch> {
    let found = ResourceMatch {
        counterpart: candidate.clone(),
        match_needed: intersect(&trigger.resources_needed, &candidate.resources_have),
        match_offered: intersect(&trigger.resources_have, &candidate.resources_needed),
    };

    (!found.is_empty()).then_some(found)
}

/// Compute every match for `trigger` against `snapshot`, preserving snapshot order.
///
/// Candidates sharing the trigger's identity are skipped, so an unfiltered snapshot
/// still never yields a self-match.
pub fn compute_matches(trigger: &Organization, snapshot: &[Organization]) -> Vec<ResourceMatch> {
    snapshot
        .iter()
        .filter(|candidate| !candidate.is_same_entity(&trigger.email))
        .filter_map(|candidate| match_candidate(trigger, candidate))
        .collect()
}
