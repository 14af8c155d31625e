// crates/cumle/src/clients/preprocessing.rs

//! Tokenization / sentence extraction client.

use tonic::client::Grpc;
use tonic::transport::Channel;

use crate::clients::unary_call;
use crate::config::CumleConfig;
use crate::errors::{Outcome, ServiceError};
use crate::models::{Token, TokenKind, TokenSpan};
use crate::proto::preprocess::{
  self, SentenceExtractionRequest, SentenceExtractionResponse, TokenProto, TokenizationRequest,
  TokenizationResponse,
};

/// Client of `zemberek.preprocessor.PreprocessingService`.
#[derive(Debug, Clone)]
pub struct PreprocessingClient {
  inner: Grpc<Channel>,
  config: CumleConfig,
}

impl PreprocessingClient {
  /// Builds the client over a shared channel with an immutable configuration
  #[must_use]
  pub fn new(channel: Channel, config: CumleConfig) -> Self {
    Self { inner: Grpc::new(channel), config }
  }

  /// Splits `input` into tokens.
  ///
  /// The returned sequence preserves the original left-to-right input
  /// order. A token whose category name is outside the closed
  /// [`TokenKind`] set makes the whole call a malformed response.
  pub async fn tokenize(&self, input: &str) -> Outcome<Vec<Token>> {
    let request = TokenizationRequest {
      input: input.to_owned(),
      include_token_boundaries: self.config.include_token_boundaries,
    };
    let response: TokenizationResponse =
      unary_call(&self.inner, self.config.deadline(), preprocess::TOKENIZE_PATH, request).await?;

    tokens_from_proto(response.tokens, self.config.include_token_boundaries)
  }

  /// Splits `document` into sentences, in document order
  pub async fn extract_sentences(&self, document: &str) -> Outcome<Vec<String>> {
    let request = SentenceExtractionRequest { document: document.to_owned() };
    let response: SentenceExtractionResponse = unary_call(
      &self.inner,
      self.config.deadline(),
      preprocess::EXTRACT_SENTENCES_PATH,
      request,
    )
    .await?;
    Ok(response.sentences)
  }
}

/// Maps the wire token list into domain tokens, preserving order.
fn tokens_from_proto(protos: Vec<TokenProto>, with_spans: bool) -> Outcome<Vec<Token>> {
  protos.into_iter().map(|proto| token_from_proto(proto, with_spans)).collect()
}

fn token_from_proto(proto: TokenProto, with_spans: bool) -> Outcome<Token> {
  let kind = TokenKind::from_wire(&proto.r#type).ok_or_else(|| {
    ServiceError::malformed(format!("unrecognized token category: {:?}", proto.r#type))
  })?;

  // Boundaries are only meaningful when the request asked for them; the
  // wire carries zeroes otherwise.
  let span = with_spans.then_some(TokenSpan { start: proto.start, end: proto.end });

  Ok(Token { text: proto.token, kind, span })
}
