//! DNS record querying.
//!
//! This module provides async DNS operations using `hickory-resolver`:
//! - Mail exchanger queries (MX records)
//! - Text record queries (TXT records) with SPF/DMARC extraction
//!
//! Queries go through the [`RecordLookup`] trait so the classifier can run
//! against a stub resolver in tests. [`HickoryLookup`] is the production
//! implementation and respects the system DNS configuration.

mod extract;
mod lookup;
mod records;
mod types;

// Re-export public API
pub use extract::{extract_dmarc_record, extract_spf_record};
pub use lookup::{HickoryLookup, RecordLookup};
pub use records::{lookup_mx_records, lookup_txt_records};
pub use types::RecordKind;
