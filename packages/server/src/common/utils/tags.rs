//! Resource tag helpers
//!
//! Tags are opaque, case-sensitive strings. The only normalization applied is to the
//! comma-separated form used by the registration form, where each piece is trimmed and
//! empty pieces are dropped.

use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// Split a comma-separated tag list ("SEO, Legal Advice,") into tags.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    dedup_tags(
        raw.split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string),
    )
}

/// Collapse repeated tags, keeping the first occurrence of each.
pub fn dedup_tags(tags: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagInput {
    List(Vec<String>),
    Csv(String),
}

/// Serde helper accepting a JSON array of tags, a comma-separated string, or null.
pub fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TagInput>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(TagInput::List(tags)) => dedup_tags(tags),
        Some(TagInput::Csv(raw)) => parse_tag_list(&raw),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_tags")]
        tags: Vec<String>,
    }

    fn tags_of(json: &str) -> Vec<String> {
        serde_json::from_str::<Holder>(json).unwrap().tags
    }

    #[test]
    fn test_csv_is_trimmed_and_empties_dropped() {
        assert_eq!(
            parse_tag_list(" SEO ,Legal Advice,, "),
            vec!["SEO".to_string(), "Legal Advice".to_string()]
        );
    }

    #[test]
    fn test_array_keeps_case_and_spacing() {
        assert_eq!(
            tags_of(r#"{"tags": ["seo", "SEO", " SEO"]}"#),
            vec!["seo".to_string(), "SEO".to_string(), " SEO".to_string()]
        );
    }

    #[test]
    fn test_duplicates_collapse_to_first() {
        assert_eq!(
            tags_of(r#"{"tags": ["SEO", "Catering", "SEO"]}"#),
            vec!["SEO".to_string(), "Catering".to_string()]
        );
    }

    #[test]
    fn test_string_form_accepted() {
        assert_eq!(
            tags_of(r#"{"tags": "Web Development, Printing"}"#),
            vec!["Web Development".to_string(), "Printing".to_string()]
        );
    }

    #[test]
    fn test_null_and_missing_are_empty() {
        assert!(tags_of(r#"{"tags": null}"#).is_empty());
        assert!(tags_of("{}").is_empty());
    }
}
