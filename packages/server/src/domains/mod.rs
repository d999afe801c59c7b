// Business domains
pub mod directory;
pub mod matching;
pub mod query;
