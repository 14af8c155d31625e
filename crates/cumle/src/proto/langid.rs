// crates/cumle/src/proto/langid.rs

//! Messages of `zemberek.langid.LanguageIdService`.

/// Full method path of `LanguageIdService/Detect`
pub const DETECT_PATH: &str = "/zemberek.langid.LanguageIdService/Detect";

/// Full method path of `LanguageIdService/DetectFast`
pub const DETECT_FAST_PATH: &str = "/zemberek.langid.LanguageIdService/DetectFast";

/// Request for `Detect` and `DetectFast`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LanguageIdRequest {
  /// Text whose language is to be identified
  #[prost(string, tag = "1")]
  pub input: ::prost::alloc::string::String,

  /// Upper bound on sampled fragments; 0 leaves sampling to the service
  #[prost(int32, tag = "2")]
  pub max_sample_count: i32,
}

/// Response of `Detect` and `DetectFast`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LanguageIdResponse {
  /// Detected ISO-like language tag; empty means the service could not tell
  #[prost(string, tag = "1")]
  pub lang_id: ::prost::alloc::string::String,
}
