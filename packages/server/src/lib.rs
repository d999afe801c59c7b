// Zero-Sum resource exchange - API Core
//
// Matches organizations on the resources they have and need, notifies matched
// parties, and answers directory questions through a text-generation backend.
//
// Each domain keeps its pure logic in utils/ and its I/O in effects/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
