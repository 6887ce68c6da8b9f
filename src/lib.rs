//! email_domain_checker library: MX, SPF, and DMARC presence checks behind a web form
//!
//! The core is [`classify`], which queries a domain's MX records, its TXT
//! records, and the TXT records at `_dmarc.<domain>`, then reports which of
//! the three are present along with the raw SPF and DMARC record text. The
//! [`server`] module wraps it in a two-page HTML front-end.
//!
//! # Example
//!
//! ```no_run
//! use email_domain_checker::classify;
//! use email_domain_checker::dns::HickoryLookup;
//! use email_domain_checker::initialization::init_resolver;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let lookup = HickoryLookup::new(init_resolver());
//! let result = classify("example.com", &lookup).await;
//! println!("MX: {}, SPF: {}, DMARC: {}",
//!          result.has_mx(), result.has_spf(), result.has_dmarc());
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod check;
pub mod config;
pub mod dns;
mod error_handling;
pub mod initialization;
pub mod server;

// Re-export public API
pub use check::{classify, DomainCheckResult};
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use error_handling::{DnsLookupError, InitializationError, RequestError};
pub use run::run_server;

mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};

    use crate::config::Config;
    use crate::dns::HickoryLookup;
    use crate::initialization::{init_renderer, init_resolver};
    use crate::server::{start_server, AppState};

    /// Builds the shared resources and serves the checker until Ctrl-C.
    ///
    /// The logger is not initialized here; binaries call
    /// [`init_logger_with`](crate::initialization::init_logger_with) first.
    ///
    /// # Errors
    ///
    /// Returns an error if the page template doesn't compile, the listen
    /// address can't be bound, or the server fails.
    pub async fn run_server(config: Config) -> Result<()> {
        let resolver = init_resolver();
        let renderer = init_renderer().context("Failed to initialize page renderer")?;
        let state = AppState::new(Arc::new(HickoryLookup::new(resolver)), renderer);

        start_server(config.listen_addr(), state).await
    }
}
