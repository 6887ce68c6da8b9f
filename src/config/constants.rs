//! Configuration constants.
//!
//! Defaults for the listen address and the fixed record prefixes the checker
//! looks for.

/// Default listen address (all interfaces)
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_PORT: u16 = 8080;

/// Prefix identifying an SPF policy in a TXT record
pub const SPF_PREFIX: &str = "v=spf1";
/// Prefix identifying a DMARC policy in a TXT record
pub const DMARC_PREFIX: &str = "v=DMARC1";
/// Label prepended to a domain to find its DMARC policy
pub const DMARC_LABEL: &str = "_dmarc.";
