/// Why an answer fell back to the default reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextGenFailure {
    /// The backend call errored
    Backend { error: String },
    /// The backend replied without usable text
    EmptyReply,
}

/// Reply to a user question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAnswer {
    pub response: String,
    /// Set when `response` is the default reply rather than generated text
    pub degraded: Option<TextGenFailure>,
}

impl ChatAnswer {
    pub fn generated(response: String) -> Self {
        Self {
            response,
            degraded: None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}
