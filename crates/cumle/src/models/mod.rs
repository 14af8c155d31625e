//! models module
pub mod model_definition;

/// Re-export major model types
pub use model_definition::{
  AnalysisReport, DictionaryItem, MorphemeData, SentenceAnalysis, SingleAnalysis, Token,
  TokenKind, TokenSpan, WordAnalysis,
};
