use tracing::{debug, info, instrument};

use crate::domains::directory::{fetch_all, Organization};
use crate::domains::query::{
    errors::QueryError,
    templates::{parse_question, QuestionIntent},
};
use crate::kernel::BaseDirectory;

/// Summary used when the question names nothing the directory has
pub const NO_DATA_FALLBACK: &str = "No relevant data found in the database.";

/// One line per organization: `{name} has: {...} and needs: {...}.`
pub fn summarize(organizations: &[&Organization]) -> String {
    organizations
        .iter()
        .map(|org| {
            format!(
                "{} has: {} and needs: {}.",
                org.display_name(),
                org.resources_have.join(", "),
                org.resources_needed.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Organizations whose selected field contains the tag exactly
pub fn filter_by_intent<'a>(
    organizations: &'a [Organization],
    intent: &QuestionIntent,
) -> Vec<&'a Organization> {
    organizations
        .iter()
        .filter(|org| intent.field.values(org).iter().any(|t| *t == intent.tag))
        .collect()
}

/// Context block handed to the text-generation backend
pub fn build_answer_context(summary: &str, question: &str) -> String {
    format!("Database context:\n{}\n\nUser question: {}", summary, question)
}

/// Resolve a question into an answer context.
///
/// The directory is only read when a template matched; the read is unfiltered (no one
/// is excluded). No template or no hits yields [`NO_DATA_FALLBACK`].
#[instrument(skip(directory))]
pub async fn resolve(question: &str, directory: &dyn BaseDirectory) -> Result<String, QueryError> {
    if question.trim().is_empty() {
        return Err(QueryError::EmptyQuestion);
    }

    let summary = match parse_question(question) {
        Some(intent) => {
            debug!(tag = %intent.tag, field = intent.field.as_str(), "Question intent parsed");

            let organizations = fetch_all(directory).await?;
            let hits = filter_by_intent(&organizations, &intent);
            info!(tag = %intent.tag, hits = hits.len(), "Directory lookup");

            if hits.is_empty() {
                NO_DATA_FALLBACK.to_string()
            } else {
                summarize(&hits)
            }
        }
        None => {
            debug!("No question template matched");
            NO_DATA_FALLBACK.to_string()
        }
    };

    Ok(build_answer_context(&summary, question))
}
