// HTTP routes
pub mod chatbot;
pub mod health;
pub mod match_resources;
pub mod test_email;

pub use chatbot::*;
pub use health::*;
pub use match_resources::*;
pub use test_email::*;
