//! Finding delivery with console and email channels.
//!
//! A verification run that produced findings hands them to one [`Reporter`];
//! a clean run produces no output at all.

pub mod channels;
pub mod error;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use vigil_common::Finding;

pub use channels::console::ConsoleReporter;
pub use channels::email::EmailReporter;

/// Delivers one run's findings to an operator-facing channel.
#[async_trait]
pub trait Reporter: Send + Sync {
    /// Delivers the batch. Callers only invoke this with a non-empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if delivery fails; the caller logs it and the run
    /// is otherwise unaffected.
    async fn report(&self, findings: &[Finding]) -> error::Result<()>;

    /// Returns the channel name (e.g. `"console"`, `"email"`).
    fn channel_name(&self) -> &str;
}
