// crates/cumle/src/proto/normalization.rs

//! Messages of `zemberek.normalization.NormalizationService`.

/// Full method path of `NormalizationService/Normalize`
pub const NORMALIZE_PATH: &str = "/zemberek.normalization.NormalizationService/Normalize";

/// Request for `Normalize`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NormalizationRequest {
  /// Noisy text to normalize
  #[prost(string, tag = "1")]
  pub input: ::prost::alloc::string::String,
}

/// Response of `Normalize`.
///
/// The service populates exactly one of the two fields; a response with
/// both set violates the contract. The client maps this into a tagged
/// variant instead of testing field truthiness.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NormalizationResponse {
  /// Normalized text on success; may legitimately be empty
  #[prost(string, tag = "1")]
  pub normalized_input: ::prost::alloc::string::String,

  /// Human-readable failure detail when normalization was not possible
  #[prost(string, tag = "2")]
  pub error: ::prost::alloc::string::String,
}
