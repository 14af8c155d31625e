// crates/cumle/src/models/model_definition.rs

//! Data Model Definition
//!
//! Domain-side view of the four service responses. Every entity here is
//! created fresh per request, immutable once constructed and discarded after
//! the caller consumes the [`AnalysisReport`]; there is no cache and no
//! shared mutable state.

use serde::{Deserialize, Serialize};

use crate::errors::{Outcome, ServiceError};

/// Category of a token.
///
/// A fixed closed set mirroring the remote lexer's categories. Wire values
/// arrive as strings; parsing is strict so that a typo on the wire surfaces
/// as a malformed response instead of silently creating a new category.
/// `Unknown` is itself a legitimate lexer category, not a parse-failure
/// sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
  /// Plain word
  Word,
  /// Word containing digits
  WordAlphanumerical,
  /// Word containing symbol characters
  WordWithSymbol,
  /// Abbreviation ("Dr")
  Abbreviation,
  /// Dotted abbreviation ("T.C.")
  AbbreviationWithDots,
  /// Number literal
  Number,
  /// Percent numeral ("%12")
  PercentNumeral,
  /// Roman numeral
  RomanNumeral,
  /// Date expression
  Date,
  /// Time expression
  Time,
  /// URL
  Url,
  /// E-mail address
  Email,
  /// Hashtag
  HashTag,
  /// @-mention
  Mention,
  /// Markup-like meta tag
  MetaTag,
  /// Emoticon
  Emoticon,
  /// Punctuation
  Punctuation,
  /// Run of spaces or tabs
  SpaceTab,
  /// Newline
  NewLine,
  /// Word-shaped but unknown to the lexer
  UnknownWord,
  /// Anything the lexer could not categorize
  Unknown,
}

impl TokenKind {
  /// Parses the category name used on the wire.
  ///
  /// Returns `None` for names outside the closed set; the caller reports
  /// that as a malformed response.
  #[must_use]
  pub fn from_wire(name: &str) -> Option<Self> {
    let kind = match name {
      "Word" => Self::Word,
      "WordAlphanumerical" => Self::WordAlphanumerical,
      "WordWithSymbol" => Self::WordWithSymbol,
      "Abbreviation" => Self::Abbreviation,
      "AbbreviationWithDots" => Self::AbbreviationWithDots,
      "Number" => Self::Number,
      "PercentNumeral" => Self::PercentNumeral,
      "RomanNumeral" => Self::RomanNumeral,
      "Date" => Self::Date,
      "Time" => Self::Time,
      "URL" => Self::Url,
      "Email" => Self::Email,
      "HashTag" => Self::HashTag,
      "Mention" => Self::Mention,
      "MetaTag" => Self::MetaTag,
      "Emoticon" => Self::Emoticon,
      "Punctuation" => Self::Punctuation,
      "SpaceTab" => Self::SpaceTab,
      "NewLine" => Self::NewLine,
      "UnknownWord" => Self::UnknownWord,
      "Unknown" => Self::Unknown,
      _ => return None,
    };
    Some(kind)
  }

  /// Category name as used on the wire
  #[must_use]
  pub fn as_wire_str(&self) -> &'static str {
    match self {
      Self::Word => "Word",
      Self::WordAlphanumerical => "WordAlphanumerical",
      Self::WordWithSymbol => "WordWithSymbol",
      Self::Abbreviation => "Abbreviation",
      Self::AbbreviationWithDots => "AbbreviationWithDots",
      Self::Number => "Number",
      Self::PercentNumeral => "PercentNumeral",
      Self::RomanNumeral => "RomanNumeral",
      Self::Date => "Date",
      Self::Time => "Time",
      Self::Url => "URL",
      Self::Email => "Email",
      Self::HashTag => "HashTag",
      Self::Mention => "Mention",
      Self::MetaTag => "MetaTag",
      Self::Emoticon => "Emoticon",
      Self::Punctuation => "Punctuation",
      Self::SpaceTab => "SpaceTab",
      Self::NewLine => "NewLine",
      Self::UnknownWord => "UnknownWord",
      Self::Unknown => "Unknown",
    }
  }
}

/// Byte boundaries of a token within the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpan {
  /// Start byte index
  pub start: i32,
  /// End byte index
  pub end: i32,
}

/// One tokenized unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
  /// Surface text
  pub text: String,

  /// Category from the closed set
  pub kind: TokenKind,

  /// Byte boundaries; present only when the request asked for them
  #[serde(skip_serializing_if = "Option::is_none")]
  pub span: Option<TokenSpan>,
}

/// One morpheme and its surface within a parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MorphemeData {
  /// Morpheme identifier
  pub morpheme: String,
  /// Surface string the morpheme produced
  pub surface: String,
}

/// Lexicon entry a parse is rooted in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryItem {
  /// Lemma of the entry
  pub lemma: String,

  /// Primary part-of-speech short form
  pub primary_pos: String,

  /// Secondary part-of-speech short form, when the entry has one
  #[serde(skip_serializing_if = "Option::is_none")]
  pub secondary_pos: Option<String>,
}

/// One morphological parse of a word form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SingleAnalysis {
  /// Long-format analysis string
  pub analysis: String,

  /// Part-of-speech short form
  pub pos: String,

  /// Whether the parse contains an informal morpheme
  pub informal: bool,

  /// Whether the parse was produced at runtime rather than from the lexicon
  pub runtime: bool,

  /// Lexicon entry of the parse
  #[serde(skip_serializing_if = "Option::is_none")]
  pub dictionary_item: Option<DictionaryItem>,

  /// Lemmas in composition order. Composition order matters for
  /// agglutinative morphology and is preserved; joining happens only at the
  /// presentation boundary via [`lemma_string`](Self::lemma_string).
  pub lemmas: Vec<String>,

  /// Morpheme surface data in order
  pub morphemes: Vec<MorphemeData>,
}

impl SingleAnalysis {
  /// Space-joined lemma rendering for presentation.
  ///
  /// The internal representation stays an ordered list; this is the only
  /// place the list collapses into a display string.
  #[must_use]
  pub fn lemma_string(&self) -> String {
    self.lemmas.join(" ")
  }
}

/// Morphological analysis of one surface token.
///
/// `best == None` means the analyzer found no valid parse. That is a normal
/// terminal state, distinct from an RPC failure of the whole call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
  /// Surface token the analysis belongs to
  pub token: String,

  /// Disambiguated best analysis, absent when no valid parse exists
  #[serde(skip_serializing_if = "Option::is_none")]
  pub best: Option<SingleAnalysis>,

  /// All candidate analyses; populated only when the request asked for them
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub alternatives: Vec<SingleAnalysis>,
}

/// Aggregate analysis of one sentence.
///
/// The word sequence is in sentence order. Its length need not equal the
/// tokenizer's token count: the analyzer may merge or split tokens, so
/// callers must not assume a 1:1 correspondence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
  /// The sentence as the service saw it
  pub input: String,

  /// Per-word analyses in sentence order
  pub words: Vec<WordAnalysis>,
}

/// Caller-facing union of the four service calls.
///
/// Always exactly four slots, each an independent [`Outcome`]: one slot may
/// be a transport failure while the other three carry values. The aggregator
/// copies each client outcome in untouched, so no failure kind or detail is
/// lost on the way to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
  /// Detected language tag; empty means "unknown", which is a success
  pub language: Outcome<String>,

  /// Tokens in original left-to-right input order
  pub tokens: Outcome<Vec<Token>>,

  /// Normalized rendering of the input
  pub normalized: Outcome<String>,

  /// Morphological analysis of the input as one sentence
  pub morphology: Outcome<SentenceAnalysis>,
}

impl AnalysisReport {
  /// Whether all four services produced a value
  #[must_use]
  pub fn is_fully_ok(&self) -> bool {
    self.errors().is_empty()
  }

  /// The failures present in the report, in slot order
  #[must_use]
  pub fn errors(&self) -> Vec<&ServiceError> {
    [
      self.language.as_ref().err(),
      self.tokens.as_ref().err(),
      self.normalized.as_ref().err(),
      self.morphology.as_ref().err(),
    ]
    .into_iter()
    .flatten()
    .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn token_kind_wire_round_trip() {
    for name in ["Word", "Punctuation", "URL", "SpaceTab", "UnknownWord"] {
      let kind = TokenKind::from_wire(name).expect("known category");
      assert_eq!(kind.as_wire_str(), name);
    }
  }

  #[test]
  fn token_kind_rejects_unlisted_names() {
    assert_eq!(TokenKind::from_wire("Wrod"), None);
    assert_eq!(TokenKind::from_wire(""), None);
    // case matters on the wire
    assert_eq!(TokenKind::from_wire("word"), None);
  }

  #[test]
  fn lemma_string_preserves_order() {
    let analysis = SingleAnalysis {
      analysis: "[açmak:Verb] aç:Verb+ama:Unable+dı:Past+m:A1sg".to_string(),
      pos: "Verb".to_string(),
      informal: false,
      runtime: false,
      dictionary_item: None,
      lemmas: vec!["aç".to_string(), "açama".to_string()],
      morphemes: vec![],
    };
    assert_eq!(analysis.lemma_string(), "aç açama");
  }

  #[test]
  fn report_errors_in_slot_order() {
    let report = AnalysisReport {
      language: Ok("tr".to_string()),
      tokens: Err(ServiceError::malformed("unrecognized token category")),
      normalized: Ok(String::new()),
      morphology: Err(ServiceError::transport("connection refused")),
    };
    assert!(!report.is_fully_ok());
    let errors = report.errors();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].code(), "malformed_response");
    assert_eq!(errors[1].code(), "transport_failure");
  }

  #[test]
  fn fully_ok_report_has_no_errors() {
    let report = AnalysisReport {
      language: Ok("tr".to_string()),
      tokens: Ok(vec![]),
      normalized: Ok("merhaba".to_string()),
      morphology: Ok(SentenceAnalysis { input: "merhaba".to_string(), words: vec![] }),
    };
    assert!(report.is_fully_ok());
    assert!(report.errors().is_empty());
  }
}
