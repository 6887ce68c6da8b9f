//! DNS resolver initialization.

use std::sync::Arc;

use hickory_resolver::config::ResolverConfig;
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::TokioResolver;

/// Initializes the DNS resolver for record lookups.
///
/// Reads the system configuration (`/etc/resolv.conf` on Unix) so lookups
/// behave like the host's own resolver, including its timeouts and attempts.
/// If the system configuration can't be read, falls back to Google public DNS
/// with default options.
///
/// # Returns
///
/// A `TokioResolver` wrapped in `Arc` for sharing across request handlers.
pub fn init_resolver() -> Arc<TokioResolver> {
    let resolver = match TokioResolver::builder_tokio() {
        Ok(builder) => builder.build(),
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using Google DNS: {e}");
            TokioResolver::builder_with_config(
                ResolverConfig::google(),
                TokioConnectionProvider::default(),
            )
            .build()
        }
    };
    Arc::new(resolver)
}
