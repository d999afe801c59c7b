pub mod chat_answer;

pub use chat_answer::{ChatAnswer, TextGenFailure};
