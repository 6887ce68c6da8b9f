//! DNS record queries (MX, TXT).
//!
//! This module provides functions to query the record types the checker needs:
//! - Mail exchanger records (MX)
//! - Text records (TXT)

use hickory_resolver::proto::rr::RData;
use hickory_resolver::{ResolveError, TokioResolver};

use crate::dns::RecordKind;
use crate::error_handling::DnsLookupError;

/// Queries TXT (text) records for a name.
///
/// # Arguments
///
/// * `name` - The name to query, used as-is
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// TXT record strings in the order the resolver returned them. A record made
/// of several character-strings is returned as their concatenation.
///
/// # Errors
///
/// Returns `DnsLookupError::NoRecords` for NXDOMAIN or an empty answer and
/// `DnsLookupError::Failed` for everything else (timeouts, network errors).
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioResolver,
) -> Result<Vec<String>, DnsLookupError> {
    let lookup = resolver
        .lookup(name, RecordKind::Txt.into())
        .await
        .map_err(|e| lookup_error(name, RecordKind::Txt, &e))?;

    let txt_records = lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::TXT(txt) = rdata {
                Some(
                    txt.iter()
                        .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
                        .collect::<Vec<String>>()
                        .join(""),
                )
            } else {
                None
            }
        })
        .collect();
    Ok(txt_records)
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query, used as-is
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of (priority, hostname) tuples, sorted by priority (lower = higher priority).
///
/// # Errors
///
/// Same classification as [`lookup_txt_records`].
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioResolver,
) -> Result<Vec<(u16, String)>, DnsLookupError> {
    let lookup = resolver
        .lookup(domain, RecordKind::Mx.into())
        .await
        .map_err(|e| lookup_error(domain, RecordKind::Mx, &e))?;

    let mut mx_records: Vec<(u16, String)> = lookup
        .iter()
        .filter_map(|rdata| {
            if let RData::MX(mx) = rdata {
                Some((mx.preference(), mx.exchange().to_utf8()))
            } else {
                None
            }
        })
        .collect();
    mx_records.sort_by_key(|(priority, _)| *priority);
    Ok(mx_records)
}

/// Converts a resolver error and logs it. This is the only place lookup
/// failures are logged.
fn lookup_error(name: &str, kind: RecordKind, e: &ResolveError) -> DnsLookupError {
    if e.is_nx_domain() || e.is_no_records_found() {
        log::debug!("No {kind} records for {name}: {e}");
        DnsLookupError::no_records(name, kind)
    } else {
        log::warn!("Failed to lookup {kind} records for {name}: {e}");
        DnsLookupError::failed(name, kind, e.to_string())
    }
}
