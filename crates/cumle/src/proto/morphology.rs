// crates/cumle/src/proto/morphology.rs

//! Messages of `zemberek.morphology.MorphologyService`.

/// Full method path of `MorphologyService/AnalyzeSentence`
pub const ANALYZE_SENTENCE_PATH: &str = "/zemberek.morphology.MorphologyService/AnalyzeSentence";

/// Full method path of `MorphologyService/AnalyzeWord`
pub const ANALYZE_WORD_PATH: &str = "/zemberek.morphology.MorphologyService/AnalyzeWord";

/// Request for `AnalyzeSentence`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SentenceAnalysisRequest {
  /// Sentence to analyze and disambiguate
  #[prost(string, tag = "1")]
  pub input: ::prost::alloc::string::String,

  /// Whether every word should also carry all of its analyses, not only the best
  #[prost(bool, tag = "2")]
  pub contain_all_analyses: bool,
}

/// Response of `AnalyzeSentence`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SentenceAnalysisProto {
  /// The sentence as the service saw it
  #[prost(string, tag = "1")]
  pub input: ::prost::alloc::string::String,

  /// Per-word results in sentence order
  #[prost(message, repeated, tag = "2")]
  pub results: ::prost::alloc::vec::Vec<SentenceWordAnalysisProto>,
}

/// Analysis of one word within a sentence
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SentenceWordAnalysisProto {
  /// Surface token the analysis belongs to
  #[prost(string, tag = "1")]
  pub token: ::prost::alloc::string::String,

  /// Disambiguated best analysis; absent when no valid parse was found
  #[prost(message, optional, tag = "2")]
  pub best: ::core::option::Option<SingleAnalysisProto>,

  /// All analyses of the word; only populated on request
  #[prost(message, optional, tag = "3")]
  pub all: ::core::option::Option<WordAnalysisProto>,
}

/// Request for `AnalyzeWord`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WordAnalysisRequest {
  /// Single word form to analyze
  #[prost(string, tag = "1")]
  pub input: ::prost::alloc::string::String,
}

/// All analyses of one word form
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct WordAnalysisProto {
  /// Candidate analyses; empty when the word has no valid parse
  #[prost(message, repeated, tag = "1")]
  pub analyses: ::prost::alloc::vec::Vec<SingleAnalysisProto>,
}

/// One morphological parse of a word form
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SingleAnalysisProto {
  /// Long-format analysis string
  #[prost(string, tag = "1")]
  pub analysis: ::prost::alloc::string::String,

  /// Part-of-speech short form
  #[prost(string, tag = "2")]
  pub pos: ::prost::alloc::string::String,

  /// Whether the parse contains an informal morpheme
  #[prost(bool, tag = "3")]
  pub informal: bool,

  /// Whether the parse was produced at runtime rather than from the lexicon
  #[prost(bool, tag = "4")]
  pub runtime: bool,

  /// Lexicon entry the parse is rooted in
  #[prost(message, optional, tag = "5")]
  pub dictionary_item: ::core::option::Option<DictionaryItemProto>,

  /// Lemmas in composition order
  #[prost(string, repeated, tag = "6")]
  pub lemmas: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,

  /// Morpheme surface data in order
  #[prost(message, repeated, tag = "7")]
  pub morphemes: ::prost::alloc::vec::Vec<MorphemeDataProto>,
}

/// Lexicon entry of a parse
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DictionaryItemProto {
  /// Lemma of the entry
  #[prost(string, tag = "1")]
  pub lemma: ::prost::alloc::string::String,

  /// Primary part-of-speech short form
  #[prost(string, tag = "2")]
  pub primary_pos: ::prost::alloc::string::String,

  /// Secondary part-of-speech short form; empty when the entry has none
  #[prost(string, tag = "3")]
  pub secondary_pos: ::prost::alloc::string::String,
}

/// One morpheme and its surface within a parse
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MorphemeDataProto {
  /// Morpheme identifier
  #[prost(string, tag = "1")]
  pub morpheme: ::prost::alloc::string::String,

  /// Surface string the morpheme produced
  #[prost(string, tag = "2")]
  pub surface: ::prost::alloc::string::String,
}
