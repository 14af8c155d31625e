//! crates/cumle/tests/client_tests.rs
//!
//! Client behavior against an endpoint that is never reachable: every call
//! must resolve to a transport failure within its deadline instead of
//! hanging, and the aggregate report must still be fully formed. No live
//! NLP server is required.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};

use cumle::clients::LanguageIdClient;
use cumle::errors::{CumleError, ServiceErrorKind};
use cumle::{CumleClient, CumleConfig};

/// A lazily-connected channel to a port nothing listens on.
fn unreachable_channel() -> Channel {
  Endpoint::from_static("http://127.0.0.1:1").connect_lazy()
}

fn short_deadline_config() -> CumleConfig {
  CumleConfig { deadline_ms: 500, ..CumleConfig::default() }
}

// ============================================================================
// Aggregate behavior
// ============================================================================

#[tokio::test]
async fn unreachable_endpoint_fills_every_slot_with_transport_failure() {
  let client = CumleClient::new(unreachable_channel(), short_deadline_config())
    .expect("valid config");

  let report = tokio::time::timeout(
    Duration::from_secs(5),
    client.analyze("Kavanozun kapağını açamadım."),
  )
  .await
  .expect("analyze must resolve within the deadline, not hang");

  // Partial failure contract: a report is always fully formed. Here all
  // four slots fail, but each one failed independently and carries its own
  // transport detail.
  let errors = report.errors();
  assert_eq!(errors.len(), 4);
  for error in errors {
    assert_eq!(error.kind(), ServiceErrorKind::Transport);
    assert!(!error.message().is_empty());
  }
}

#[tokio::test]
async fn repeated_calls_yield_equal_outcome_kinds() {
  let client = CumleClient::new(unreachable_channel(), short_deadline_config())
    .expect("valid config");

  let first = client.language_id().detect("Merhaba dünya!").await;
  let second = client.language_id().detect("Merhaba dünya!").await;

  // Idempotence up to timing-dependent detail: same input, same remote
  // state, same outcome kind.
  assert_eq!(
    first.unwrap_err().kind(),
    second.unwrap_err().kind(),
  );
}

// ============================================================================
// Individual clients
// ============================================================================

#[tokio::test]
async fn single_client_reports_transport_failure() {
  let client = LanguageIdClient::new(unreachable_channel(), short_deadline_config());

  let outcome = client.detect("Merhaba dünya!").await;
  assert_eq!(outcome.unwrap_err().kind(), ServiceErrorKind::Transport);
}

#[tokio::test]
async fn empty_input_is_forwarded_not_rejected() {
  // Empty input is valid; the only failure here is the unreachable
  // transport, never an input precondition.
  let client = LanguageIdClient::new(unreachable_channel(), short_deadline_config());

  let outcome = client.detect("").await;
  assert_eq!(outcome.unwrap_err().kind(), ServiceErrorKind::Transport);
}

#[tokio::test]
async fn tight_deadline_resolves_instead_of_hanging() {
  let config = CumleConfig { deadline_ms: 1, ..CumleConfig::default() };
  let client = LanguageIdClient::new(unreachable_channel(), config);

  let outcome = tokio::time::timeout(Duration::from_secs(5), client.detect("Merhaba"))
    .await
    .expect("call must resolve once the deadline expires");

  assert_eq!(outcome.unwrap_err().kind(), ServiceErrorKind::Transport);
}

// ============================================================================
// Construction preconditions
// ============================================================================

#[tokio::test]
async fn zero_deadline_is_rejected_before_any_call() {
  let config = CumleConfig { deadline_ms: 0, ..CumleConfig::default() };

  let result = CumleClient::new(unreachable_channel(), config);
  assert!(matches!(result, Err(CumleError::Config(_))));
}

#[tokio::test]
async fn negative_sample_count_is_rejected_before_any_call() {
  let config = CumleConfig { max_sample_count: -3, ..CumleConfig::default() };

  let result = CumleClient::new(unreachable_channel(), config);
  assert!(matches!(result, Err(CumleError::Config(_))));
}
