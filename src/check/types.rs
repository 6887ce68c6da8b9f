//! Domain check result.

use serde::Serialize;

/// Outcome of checking one domain.
///
/// Fields are private so the record/flag pairs can only be built together:
/// `spf_record` is non-empty exactly when `has_spf` is true, and the same for
/// DMARC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCheckResult {
    domain: String,
    has_mx: bool,
    has_spf: bool,
    spf_record: String,
    has_dmarc: bool,
    dmarc_record: String,
}

impl DomainCheckResult {
    /// Builds a result from the lookup outcomes.
    ///
    /// `spf_record` and `dmarc_record` are the matched TXT records, if any.
    pub fn new(
        domain: impl Into<String>,
        has_mx: bool,
        spf_record: Option<String>,
        dmarc_record: Option<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            has_mx,
            has_spf: spf_record.is_some(),
            spf_record: spf_record.unwrap_or_default(),
            has_dmarc: dmarc_record.is_some(),
            dmarc_record: dmarc_record.unwrap_or_default(),
        }
    }

    /// Domain as submitted.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Whether at least one MX record was returned.
    pub fn has_mx(&self) -> bool {
        self.has_mx
    }

    /// Whether a `v=spf1` TXT record was found.
    pub fn has_spf(&self) -> bool {
        self.has_spf
    }

    /// SPF record text, empty when absent.
    pub fn spf_record(&self) -> &str {
        &self.spf_record
    }

    /// Whether a `v=DMARC1` TXT record was found at `_dmarc.<domain>`.
    pub fn has_dmarc(&self) -> bool {
        self.has_dmarc
    }

    /// DMARC record text, empty when absent.
    pub fn dmarc_record(&self) -> &str {
        &self.dmarc_record
    }
}
