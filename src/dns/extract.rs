//! DNS record extraction utilities.
//!
//! This module provides functions to extract SPF and DMARC policies from
//! TXT record collections.
//!
//! Matching is a literal prefix test on the record text as the resolver
//! returned it. Records are not trimmed and policies are not parsed.

use crate::config::{DMARC_PREFIX, SPF_PREFIX};

/// Extracts SPF record from TXT records.
///
/// SPF records start with "v=spf1".
///
/// # Arguments
///
/// * `txt_records` - TXT record strings in resolver order
///
/// # Returns
///
/// The first SPF record found, or `None` if no SPF record exists. Further
/// SPF-looking records are ignored.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    first_with_prefix(txt_records, SPF_PREFIX)
}

/// Extracts DMARC record from TXT records.
///
/// Callers pass the records published at `_dmarc.<domain>`.
/// DMARC records start with "v=DMARC1".
///
/// # Arguments
///
/// * `txt_records` - TXT record strings in resolver order
///
/// # Returns
///
/// The first DMARC record found, or `None` if no DMARC record exists.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    first_with_prefix(txt_records, DMARC_PREFIX)
}

fn first_with_prefix(txt_records: &[String], prefix: &str) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.starts_with(prefix))
        .cloned()
}
