//! Probe collaborators for the verification engine.
//!
//! [`ShellProber`] captures the raw command output the text checks parse;
//! [`HttpSearchClient`] posts the log-search query. Both hand back raw text
//! and leave all interpretation to `vigil-check`.

pub mod search;
pub mod system;

pub use search::HttpSearchClient;
pub use system::ShellProber;
