//! Classifier tests against a stub resolver.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::*;
use crate::dns::{RecordKind, RecordLookup};
use crate::error_handling::DnsLookupError;

/// Answers queries from fixed tables. Names missing from a table fail with
/// a resolver error, like an unreachable or non-existent zone.
#[derive(Default)]
struct StubLookup {
    mx: HashMap<String, Vec<(u16, String)>>,
    txt: HashMap<String, Vec<String>>,
    queried: Mutex<Vec<(RecordKind, String)>>,
}

impl StubLookup {
    fn with_mx(mut self, name: &str, exchanges: &[&str]) -> Self {
        let records = exchanges
            .iter()
            .enumerate()
            .map(|(i, host)| (i as u16 * 10, host.to_string()))
            .collect();
        self.mx.insert(name.to_string(), records);
        self
    }

    fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        self.txt.insert(
            name.to_string(),
            records.iter().map(|r| r.to_string()).collect(),
        );
        self
    }

    fn queried(&self) -> Vec<(RecordKind, String)> {
        let mut queried = self.queried.lock().unwrap().clone();
        queried.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.to_string().cmp(&b.0.to_string())));
        queried
    }

    fn record_query(&self, kind: RecordKind, name: &str) {
        self.queried.lock().unwrap().push((kind, name.to_string()));
    }
}

#[async_trait]
impl RecordLookup for StubLookup {
    async fn mx_records(&self, domain: &str) -> Result<Vec<(u16, String)>, DnsLookupError> {
        self.record_query(RecordKind::Mx, domain);
        self.mx.get(domain).cloned().ok_or_else(|| {
            DnsLookupError::failed(domain, RecordKind::Mx, "request timed out")
        })
    }

    async fn txt_records(&self, name: &str) -> Result<Vec<String>, DnsLookupError> {
        self.record_query(RecordKind::Txt, name);
        self.txt
            .get(name)
            .cloned()
            .ok_or_else(|| DnsLookupError::no_records(name, RecordKind::Txt))
    }
}

#[tokio::test]
async fn test_classify_all_records_present() {
    let lookup = StubLookup::default()
        .with_mx("example.com", &["mx1.example.com."])
        .with_txt(
            "example.com",
            &["v=spf1 include:_spf.example.com ~all", "unrelated=1"],
        )
        .with_txt("_dmarc.example.com", &["v=DMARC1; p=none;"]);

    let result = classify("example.com", &lookup).await;

    assert_eq!(result.domain(), "example.com");
    assert!(result.has_mx());
    assert!(result.has_spf());
    assert_eq!(result.spf_record(), "v=spf1 include:_spf.example.com ~all");
    assert!(result.has_dmarc());
    assert_eq!(result.dmarc_record(), "v=DMARC1; p=none;");
}

#[tokio::test]
async fn test_classify_all_lookups_fail() {
    let lookup = StubLookup::default();

    let result = classify("nodns.invalid", &lookup).await;

    assert_eq!(
        result,
        DomainCheckResult::new("nodns.invalid", false, None, None)
    );
    assert_eq!(result.spf_record(), "");
    assert_eq!(result.dmarc_record(), "");
}

#[tokio::test]
async fn test_classify_queries_each_name_once() {
    let lookup = StubLookup::default();

    classify("example.org", &lookup).await;

    assert_eq!(
        lookup.queried(),
        vec![
            (RecordKind::Txt, "_dmarc.example.org".to_string()),
            (RecordKind::Mx, "example.org".to_string()),
            (RecordKind::Txt, "example.org".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_classify_reports_first_spf_record() {
    let lookup = StubLookup::default().with_txt(
        "example.com",
        &["v=spf1 ip4:192.0.2.1 -all", "v=spf1 include:other.example ~all"],
    );

    let result = classify("example.com", &lookup).await;

    assert!(result.has_spf());
    assert_eq!(result.spf_record(), "v=spf1 ip4:192.0.2.1 -all");
}

#[tokio::test]
async fn test_classify_empty_mx_answer_is_absent() {
    let lookup = StubLookup::default().with_mx("example.com", &[]);

    let result = classify("example.com", &lookup).await;

    assert!(!result.has_mx());
}

#[tokio::test]
async fn test_classify_failed_lookup_does_not_affect_others() {
    // MX and the domain's TXT fail; only the DMARC query answers.
    let lookup =
        StubLookup::default().with_txt("_dmarc.example.com", &["v=DMARC1; p=reject; pct=100"]);

    let result = classify("example.com", &lookup).await;

    assert!(!result.has_mx());
    assert!(!result.has_spf());
    assert!(result.has_dmarc());
    assert_eq!(result.dmarc_record(), "v=DMARC1; p=reject; pct=100");
}

#[tokio::test]
async fn test_classify_dmarc_only_read_from_dmarc_name() {
    // A DMARC-looking record at the apex does not count.
    let lookup = StubLookup::default().with_txt("example.com", &["v=DMARC1; p=none;"]);

    let result = classify("example.com", &lookup).await;

    assert!(!result.has_dmarc());
    assert!(!result.has_spf());
}

#[tokio::test]
async fn test_classify_uses_domain_verbatim() {
    // No normalization: trailing dots and case are passed through as typed.
    let lookup = StubLookup::default()
        .with_mx("Example.COM.", &["mx.example.com."])
        .with_txt("_dmarc.Example.COM.", &["v=DMARC1; p=none;"]);

    let result = classify("Example.COM.", &lookup).await;

    assert_eq!(result.domain(), "Example.COM.");
    assert!(result.has_mx());
    assert!(result.has_dmarc());
}

#[test]
fn test_result_record_flag_invariant() {
    let present = DomainCheckResult::new(
        "example.com",
        true,
        Some("v=spf1 -all".to_string()),
        Some("v=DMARC1; p=none;".to_string()),
    );
    assert!(present.has_spf() && !present.spf_record().is_empty());
    assert!(present.has_dmarc() && !present.dmarc_record().is_empty());

    let absent = DomainCheckResult::new("example.com", true, None, None);
    assert!(!absent.has_spf() && absent.spf_record().is_empty());
    assert!(!absent.has_dmarc() && absent.dmarc_record().is_empty());
}

#[test]
fn test_result_serializes_all_fields() {
    let result = DomainCheckResult::new("example.com", true, Some("v=spf1 -all".into()), None);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "domain": "example.com",
            "has_mx": true,
            "has_spf": true,
            "spf_record": "v=spf1 -all",
            "has_dmarc": false,
            "dmarc_record": "",
        })
    );
}

#[tokio::test]
async fn test_classify_with_live_resolver_never_fails() {
    use crate::dns::HickoryLookup;
    use hickory_resolver::config::{ResolverConfig, ResolverOpts};
    use hickory_resolver::name_server::TokioConnectionProvider;
    use hickory_resolver::TokioResolver;
    use std::sync::Arc;
    use std::time::Duration;

    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(1);
    opts.attempts = 1;
    let resolver = TokioResolver::builder_with_config(
        ResolverConfig::google(),
        TokioConnectionProvider::default(),
    )
    .with_options(opts)
    .build();
    let lookup = HickoryLookup::new(Arc::new(resolver));

    // NXDOMAIN online, network errors offline: both collapse to "absent".
    let result = classify("nodns.invalid", &lookup).await;

    assert_eq!(
        result,
        DomainCheckResult::new("nodns.invalid", false, None, None)
    );
}
