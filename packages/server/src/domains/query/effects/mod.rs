use tracing::{info, instrument, warn};

use crate::domains::query::{
    errors::QueryError,
    models::{ChatAnswer, TextGenFailure},
    resolver::resolve,
};
use crate::kernel::ServerDeps;

/// Reply used when the backend fails or returns nothing
pub const DEFAULT_RESPONSE: &str = "No response from AI";

const ASSISTANT_PREAMBLE: &str = "You are the assistant for Zero-Sum, a directory where \
businesses and organizations list the resources they have and the resources they need. \
Answer questions about the organizations in the directory and about social-good topics \
such as volunteering, donations and community support. Keep answers to a few short plain \
paragraphs and do not use the \"*\" character for formatting.";

/// Full prompt sent to the backend for one question
pub fn build_prompt(context: &str) -> String {
    format!("{}\n\n{}", ASSISTANT_PREAMBLE, context)
}

/// Answer a user question.
///
/// Resolves the question against the directory, then asks the text generator. Backend
/// errors and empty replies degrade to [`DEFAULT_RESPONSE`] instead of failing.
#[instrument(skip(deps))]
pub async fn answer_question(question: &str, deps: &ServerDeps) -> Result<ChatAnswer, QueryError> {
    let context = resolve(question, deps.directory.as_ref()).await?;
    let prompt = build_prompt(&context);

    let answer = match deps.text_generator.generate(&prompt).await {
        Ok(Some(text)) if !text.trim().is_empty() => ChatAnswer::generated(text),
        Ok(_) => {
            warn!("Text generator returned no content");
            degraded(TextGenFailure::EmptyReply)
        }
        Err(e) => {
            warn!(error = %e, "Text generation failed");
            degraded(TextGenFailure::Backend {
                error: e.to_string(),
            })
        }
    };

    info!(degraded = answer.is_degraded(), "Question answered");
    Ok(answer)
}

fn degraded(reason: TextGenFailure) -> ChatAnswer {
    ChatAnswer {
        response: DEFAULT_RESPONSE.to_string(),
        degraded: Some(reason),
    }
}
