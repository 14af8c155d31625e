//! crates/cumle/tests/report_tests.rs
//!
//! Composition-level tests of the analysis report: slot independence,
//! well-formedness and the serialized shape callers consume.

use cumle::errors::ServiceError;
use cumle::models::{
  AnalysisReport, SentenceAnalysis, SingleAnalysis, Token, TokenKind, WordAnalysis,
};

fn word(token: &str, best: Option<SingleAnalysis>) -> WordAnalysis {
  WordAnalysis { token: token.to_string(), best, alternatives: vec![] }
}

fn parse(analysis: &str, pos: &str, lemmas: &[&str]) -> SingleAnalysis {
  SingleAnalysis {
    analysis: analysis.to_string(),
    pos: pos.to_string(),
    informal: false,
    runtime: false,
    dictionary_item: None,
    lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
    morphemes: vec![],
  }
}

// ============================================================================
// Slot independence
// ============================================================================

#[test]
fn one_failed_slot_does_not_invalidate_the_others() {
  // The morphology transport is down; the other three services answered.
  let report = AnalysisReport {
    language: Ok("tr".to_string()),
    tokens: Ok(vec![Token { text: "Merhaba".to_string(), kind: TokenKind::Word, span: None }]),
    normalized: Ok("merhaba".to_string()),
    morphology: Err(ServiceError::transport("Unavailable: connection refused")),
  };

  assert!(report.language.is_ok());
  assert!(report.tokens.is_ok());
  assert!(report.normalized.is_ok());

  let errors = report.errors();
  assert_eq!(errors.len(), 1);
  assert_eq!(errors[0].code(), "transport_failure");
}

#[test]
fn empty_language_tag_is_a_success_not_an_error() {
  let report = AnalysisReport {
    language: Ok(String::new()),
    tokens: Ok(vec![]),
    normalized: Ok(String::new()),
    morphology: Ok(SentenceAnalysis { input: String::new(), words: vec![] }),
  };

  // "unknown language" and "empty normalized text" are terminal values,
  // distinguishable from every failure kind.
  assert!(report.is_fully_ok());
}

#[test]
fn remote_and_transport_failures_stay_distinguishable() {
  let report = AnalysisReport {
    language: Ok("tr".to_string()),
    tokens: Ok(vec![]),
    normalized: Err(ServiceError::remote("cannot normalize input")),
    morphology: Err(ServiceError::transport("Unavailable: connection refused")),
  };

  let errors = report.errors();
  assert_eq!(errors.len(), 2);
  assert_eq!(errors[0].code(), "remote_error");
  assert_eq!(errors[1].code(), "transport_failure");
}

// ============================================================================
// Order contracts
// ============================================================================

#[test]
fn token_sequence_reconstructs_input_order() {
  let tokens = vec![
    Token { text: "Merhaba".to_string(), kind: TokenKind::Word, span: None },
    Token { text: "dünya".to_string(), kind: TokenKind::Word, span: None },
    Token { text: "!".to_string(), kind: TokenKind::Punctuation, span: None },
  ];

  let surface: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
  assert_eq!(surface.join(" "), "Merhaba dünya !");
}

#[test]
fn sentence_analysis_keeps_word_order_and_absent_parses() {
  // "Kavanozun kapağını açamadım." with one unparseable word injected:
  // each recognized word carries a non-empty best POS, the unparseable one
  // carries an explicitly absent best.
  let sentence = SentenceAnalysis {
    input: "Kavanozun kapağını qqq açamadım.".to_string(),
    words: vec![
      word("Kavanozun", Some(parse("[kavanoz:Noun] kavanoz:Noun+un:Gen", "Noun", &["kavanoz"]))),
      word("kapağını", Some(parse("[kapak:Noun] kapağ:Noun+ın:P2sg+ı:Acc", "Noun", &["kapak"]))),
      word("qqq", None),
      word("açamadım", Some(parse("[açmak:Verb] aç:Verb+ama:Unable+dı:Past+m:A1sg", "Verb", &[
        "aç",
      ]))),
      word(".", Some(parse("[.:Punc] .:Punc", "Punc", &["."]))),
    ],
  };

  let surface: Vec<&str> = sentence.words.iter().map(|w| w.token.as_str()).collect();
  assert_eq!(surface, ["Kavanozun", "kapağını", "qqq", "açamadım", "."]);

  for word in &sentence.words {
    match &word.best {
      Some(best) => assert!(!best.pos.is_empty(), "parsed word must carry a POS"),
      None => assert_eq!(word.token, "qqq"),
    }
  }
}

// ============================================================================
// Serialized shape
// ============================================================================

#[test]
fn report_serializes_with_tagged_slots() {
  let report = AnalysisReport {
    language: Ok("tr".to_string()),
    tokens: Err(ServiceError::transport("Unavailable: connection refused")),
    normalized: Err(ServiceError::remote("cannot normalize input")),
    morphology: Ok(SentenceAnalysis { input: "Merhaba".to_string(), words: vec![] }),
  };

  let json = serde_json::to_value(&report).expect("report serializes");

  assert_eq!(json["language"]["Ok"], "tr");
  assert_eq!(
    json["tokens"]["Err"]["Transport"]["message"],
    "Unavailable: connection refused"
  );
  assert_eq!(json["normalized"]["Err"]["Remote"]["message"], "cannot normalize input");
  assert_eq!(json["morphology"]["Ok"]["input"], "Merhaba");
}

#[test]
fn byte_exact_turkish_text_through_the_model_layer() {
  // Dotted/dotless i, ğ and ç must survive construction and serialization
  // byte-identically.
  let input = "Kavanozun kapağını açamadım.";
  let sentence = SentenceAnalysis { input: input.to_string(), words: vec![] };

  let json = serde_json::to_value(&sentence).expect("serializes");
  assert_eq!(json["input"].as_str().unwrap().as_bytes(), input.as_bytes());
}
