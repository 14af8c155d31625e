// crates/cumle/src/proto/preprocess.rs

//! Messages of `zemberek.preprocessor.PreprocessingService`.

/// Full method path of `PreprocessingService/Tokenize`
pub const TOKENIZE_PATH: &str = "/zemberek.preprocessor.PreprocessingService/Tokenize";

/// Full method path of `PreprocessingService/ExtractSentences`
pub const EXTRACT_SENTENCES_PATH: &str =
  "/zemberek.preprocessor.PreprocessingService/ExtractSentences";

/// Request for `Tokenize`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenizationRequest {
  /// Text to split into tokens
  #[prost(string, tag = "1")]
  pub input: ::prost::alloc::string::String,

  /// Whether the response should carry byte boundaries per token
  #[prost(bool, tag = "2")]
  pub include_token_boundaries: bool,
}

/// Response of `Tokenize`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenizationResponse {
  /// Tokens in original left-to-right input order
  #[prost(message, repeated, tag = "1")]
  pub tokens: ::prost::alloc::vec::Vec<TokenProto>,
}

/// One token on the wire
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TokenProto {
  /// Surface text of the token
  #[prost(string, tag = "1")]
  pub token: ::prost::alloc::string::String,

  /// Category name as emitted by the remote lexer (e.g. `"Word"`)
  #[prost(string, tag = "2")]
  pub r#type: ::prost::alloc::string::String,

  /// Start byte index in the input, meaningful only when boundaries were requested
  #[prost(int32, tag = "3")]
  pub start: i32,

  /// End byte index in the input, meaningful only when boundaries were requested
  #[prost(int32, tag = "4")]
  pub end: i32,
}

/// Request for `ExtractSentences`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SentenceExtractionRequest {
  /// Document to split into sentences
  #[prost(string, tag = "1")]
  pub document: ::prost::alloc::string::String,
}

/// Response of `ExtractSentences`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SentenceExtractionResponse {
  /// Sentences in original document order
  #[prost(string, repeated, tag = "1")]
  pub sentences: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
