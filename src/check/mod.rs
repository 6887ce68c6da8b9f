//! Domain record classification.
//!
//! Turns three DNS queries (MX, TXT at the domain, TXT at `_dmarc.<domain>`)
//! into a [`DomainCheckResult`].

mod classify;
mod types;

// Re-export public API
pub use classify::classify;
pub use types::DomainCheckResult;

#[cfg(test)]
mod tests;
