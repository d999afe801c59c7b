//! Idempotency keys for outbound notifications.
//!
//! A key identifies "this trigger told this counterpart about these tags". The service
//! never deduplicates on it; it is handed to the transport so a receiver can.

use sha2::{Digest, Sha256};

use crate::domains::matching::models::ResourceMatch;

const FIELD_SEP: &str = "\u{1f}";

fn sorted_joined(tags: &[String]) -> String {
    let mut sorted: Vec<&str> = tags.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(FIELD_SEP)
}

fn hash(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

/// Key for the counterpart message of one match
///
/// Stable under tag reordering; changes when either tag set changes.
pub fn pair_idempotency_key(trigger_email: &str, found: &ResourceMatch) -> String {
    hash(&[
        "pair",
        trigger_email,
        &found.counterpart.email,
        &sorted_joined(&found.match_needed),
        &sorted_joined(&found.match_offered),
    ])
}

/// Key for the aggregate message to the trigger
pub fn aggregate_idempotency_key(trigger_email: &str, matches: &[ResourceMatch]) -> String {
    let mut pair_keys: Vec<String> = matches
        .iter()
        .map(|m| pair_idempotency_key(trigger_email, m))
        .collect();
    pair_keys.sort_unstable();

    let mut parts = vec!["aggregate", trigger_email];
    parts.extend(pair_keys.iter().map(String::as_str));
    hash(&parts)
}
