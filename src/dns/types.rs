//! DNS record types queried by the checker.

use strum_macros::{Display, EnumIter};

/// Record types the checker queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum RecordKind {
    /// Mail exchanger
    #[strum(serialize = "MX")]
    Mx,
    /// Free-text record carrying SPF and DMARC policies
    #[strum(serialize = "TXT")]
    Txt,
}

impl From<RecordKind> for hickory_resolver::proto::rr::RecordType {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Mx => Self::MX,
            RecordKind::Txt => Self::TXT,
        }
    }
}
