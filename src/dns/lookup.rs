//! Record lookup abstraction.

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioResolver;

use super::records::{lookup_mx_records, lookup_txt_records};
use crate::error_handling::DnsLookupError;

/// Source of MX and TXT records.
///
/// Implementations return records in the order the resolver supplied them
/// (MX sorted by preference). Errors are reported, not hidden: deciding that a
/// failed query means "record absent" is the classifier's job.
#[async_trait]
pub trait RecordLookup: Send + Sync {
    /// MX records for `domain` as (preference, exchange) pairs.
    async fn mx_records(&self, domain: &str) -> Result<Vec<(u16, String)>, DnsLookupError>;

    /// TXT records published at `name`.
    async fn txt_records(&self, name: &str) -> Result<Vec<String>, DnsLookupError>;
}

/// [`RecordLookup`] backed by a shared `hickory-resolver` instance.
#[derive(Clone)]
pub struct HickoryLookup {
    resolver: Arc<TokioResolver>,
}

impl HickoryLookup {
    /// Wraps a resolver shared with the rest of the process.
    pub fn new(resolver: Arc<TokioResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl RecordLookup for HickoryLookup {
    async fn mx_records(&self, domain: &str) -> Result<Vec<(u16, String)>, DnsLookupError> {
        lookup_mx_records(domain, &self.resolver).await
    }

    async fn txt_records(&self, name: &str) -> Result<Vec<String>, DnsLookupError> {
        lookup_txt_records(name, &self.resolver).await
    }
}
