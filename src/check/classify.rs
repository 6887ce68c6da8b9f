//! MX/SPF/DMARC classification.

use log::info;

use super::types::DomainCheckResult;
use crate::config::DMARC_LABEL;
use crate::dns::{extract_dmarc_record, extract_spf_record, RecordLookup};
use crate::error_handling::DnsLookupError;

/// Checks whether `domain` publishes MX, SPF, and DMARC records.
///
/// The domain is used exactly as given; callers reject empty input. The three
/// queries run concurrently and all of them finish before the result is built.
///
/// Lookup errors (NXDOMAIN, SERVFAIL, timeouts) are reported as "record
/// absent". The page only shows presence, so a failed query and a missing
/// record look the same on purpose. This function never fails.
pub async fn classify(domain: &str, lookup: &dyn RecordLookup) -> DomainCheckResult {
    let dmarc_name = format!("{DMARC_LABEL}{domain}");

    let (mx, txt, dmarc_txt) = tokio::join!(
        lookup.mx_records(domain),
        lookup.txt_records(domain),
        lookup.txt_records(&dmarc_name),
    );

    let has_mx = !absorb(mx).is_empty();
    let spf_record = extract_spf_record(&absorb(txt));
    let dmarc_record = extract_dmarc_record(&absorb(dmarc_txt));

    let result = DomainCheckResult::new(domain, has_mx, spf_record, dmarc_record);
    info!(
        "Checked {}: mx={} spf={} dmarc={}",
        result.domain(),
        result.has_mx(),
        result.has_spf(),
        result.has_dmarc()
    );
    result
}

/// Lookup errors are already logged by the lookup layer.
fn absorb<T>(records: Result<Vec<T>, DnsLookupError>) -> Vec<T> {
    records.unwrap_or_default()
}
