pub mod effects;
pub mod errors;
pub mod models;
pub mod resolver;
pub mod templates;

// Re-export commonly used types
pub use effects::{answer_question, DEFAULT_RESPONSE};
pub use errors::QueryError;
pub use models::{ChatAnswer, TextGenFailure};
pub use resolver::{resolve, NO_DATA_FALLBACK};
pub use templates::{parse_question, QuestionField, QuestionIntent};
