// crates/cumle/src/clients/language_id.rs

//! Language identification client.

use tonic::client::Grpc;
use tonic::transport::Channel;

use crate::clients::unary_call;
use crate::config::CumleConfig;
use crate::errors::Outcome;
use crate::proto::langid::{self, LanguageIdRequest, LanguageIdResponse};

/// Client of `zemberek.langid.LanguageIdService`.
///
/// Returns the detected ISO-like language tag. An empty tag is a valid
/// terminal value meaning "the service could not tell", not an error.
#[derive(Debug, Clone)]
pub struct LanguageIdClient {
  inner: Grpc<Channel>,
  config: CumleConfig,
}

impl LanguageIdClient {
  /// Builds the client over a shared channel with an immutable configuration
  #[must_use]
  pub fn new(channel: Channel, config: CumleConfig) -> Self {
    Self { inner: Grpc::new(channel), config }
  }

  /// Identifies the language of `input`.
  ///
  /// Empty input is forwarded as-is; the service may legitimately answer
  /// with an empty tag for it.
  pub async fn detect(&self, input: &str) -> Outcome<String> {
    self.call(langid::DETECT_PATH, input).await
  }

  /// Identifies the language of `input` with the service's fast model
  pub async fn detect_fast(&self, input: &str) -> Outcome<String> {
    self.call(langid::DETECT_FAST_PATH, input).await
  }

  async fn call(&self, path: &'static str, input: &str) -> Outcome<String> {
    let request = LanguageIdRequest {
      input: input.to_owned(),
      max_sample_count: self.config.max_sample_count,
    };
    let response: LanguageIdResponse =
      unary_call(&self.inner, self.config.deadline(), path, request).await?;
    Ok(response.lang_id)
  }
}
