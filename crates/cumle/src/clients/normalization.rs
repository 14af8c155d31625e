// crates/cumle/src/clients/normalization.rs

//! Text normalization client.
//!
//! The remote service signals success and failure through two sibling
//! fields on one response message. The client folds that convention into
//! the tagged [`Outcome`] the rest of the crate speaks: "could not
//! normalize" is an expected remote outcome carried as data, and whether
//! the normalized text happens to be empty is never used as a failure
//! signal.

use tonic::client::Grpc;
use tonic::transport::Channel;

use crate::clients::unary_call;
use crate::config::CumleConfig;
use crate::errors::{Outcome, ServiceError};
use crate::proto::normalization::{self, NormalizationRequest, NormalizationResponse};

/// Client of `zemberek.normalization.NormalizationService`.
#[derive(Debug, Clone)]
pub struct NormalizationClient {
  inner: Grpc<Channel>,
  config: CumleConfig,
}

impl NormalizationClient {
  /// Builds the client over a shared channel with an immutable configuration
  #[must_use]
  pub fn new(channel: Channel, config: CumleConfig) -> Self {
    Self { inner: Grpc::new(channel), config }
  }

  /// Normalizes noisy `input` into a canonical form.
  ///
  /// Resolves to `Ok(text)` on success (an empty `text` is a legitimate
  /// neutral result), or to a remote error carrying the service's detail
  /// string when the input could not be normalized.
  pub async fn normalize(&self, input: &str) -> Outcome<String> {
    let request = NormalizationRequest { input: input.to_owned() };
    let response: NormalizationResponse = unary_call(
      &self.inner,
      self.config.deadline(),
      normalization::NORMALIZE_PATH,
      request,
    )
    .await?;

    outcome_from_proto(response)
  }
}

/// Folds the two-field wire convention into exactly one branch.
fn outcome_from_proto(response: NormalizationResponse) -> Outcome<String> {
  if !response.error.is_empty() {
    if !response.normalized_input.is_empty() {
      return Err(ServiceError::malformed(
        "normalization response populates both normalized_input and error",
      ));
    }
    return Err(ServiceError::remote(response.error));
  }
  Ok(response.normalized_input)
}
