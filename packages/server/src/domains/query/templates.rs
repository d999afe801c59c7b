//! Question intent parsing.
//!
//! An ordered table of case-insensitive phrase templates. The first template that
//! matches wins, so "who has X and needs Y" only ever filters on `resourcesHave`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domains::directory::Organization;

/// Which tag list of an organization a question filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionField {
    ResourcesHave,
    ResourcesNeeded,
}

impl QuestionField {
    /// Wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResourcesHave => "resourcesHave",
            Self::ResourcesNeeded => "resourcesNeeded",
        }
    }

    pub fn values<'a>(&self, organization: &'a Organization) -> &'a [String] {
        match self {
            Self::ResourcesHave => &organization.resources_have,
            Self::ResourcesNeeded => &organization.resources_needed,
        }
    }
}

/// A parsed question: the tag asked about and the field to look in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionIntent {
    pub tag: String,
    pub field: QuestionField,
}

lazy_static! {
    // Order matters: first match wins
    static ref QUESTION_TEMPLATES: Vec<(Regex, QuestionField)> = vec![
        (Regex::new(r"(?i)\bwho\s+has\s+(.+)").unwrap(), QuestionField::ResourcesHave),
        (Regex::new(r"(?i)\bwhat\s+business\s+has\s+(.+)").unwrap(), QuestionField::ResourcesHave),
        (Regex::new(r"(?i)\bwho\s+needs\s+(.+)").unwrap(), QuestionField::ResourcesNeeded),
        (Regex::new(r"(?i)\bwhat\s+business\s+needs\s+(.+)").unwrap(), QuestionField::ResourcesNeeded),
    ];
}

fn clean_tag(raw: &str) -> String {
    raw.trim()
        .trim_end_matches(['?', '.', '!'])
        .trim()
        .to_string()
}

/// Parse a free-text question into an intent.
///
/// `None` when no template matches or the captured tag is empty after trimming.
pub fn parse_question(question: &str) -> Option<QuestionIntent> {
    QUESTION_TEMPLATES.iter().find_map(|(pattern, field)| {
        let captures = pattern.captures(question)?;
        let tag = clean_tag(captures.get(1)?.as_str());

        (!tag.is_empty()).then_some(QuestionIntent { tag, field: *field })
    })
}
