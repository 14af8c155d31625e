// crates/cumle/src/clients/morphology.rs

//! Morphological analysis client.

use tonic::client::Grpc;
use tonic::transport::Channel;

use crate::clients::unary_call;
use crate::config::CumleConfig;
use crate::errors::Outcome;
use crate::models::{DictionaryItem, MorphemeData, SentenceAnalysis, SingleAnalysis, WordAnalysis};
use crate::proto::morphology::{
  self, DictionaryItemProto, SentenceAnalysisProto, SentenceAnalysisRequest,
  SentenceWordAnalysisProto, SingleAnalysisProto, WordAnalysisProto, WordAnalysisRequest,
};

/// Client of `zemberek.morphology.MorphologyService`.
#[derive(Debug, Clone)]
pub struct MorphologyClient {
  inner: Grpc<Channel>,
  config: CumleConfig,
}

impl MorphologyClient {
  /// Builds the client over a shared channel with an immutable configuration
  #[must_use]
  pub fn new(channel: Channel, config: CumleConfig) -> Self {
    Self { inner: Grpc::new(channel), config }
  }

  /// Analyzes and disambiguates `input` as one sentence.
  ///
  /// A word the analyzer could not parse comes back with `best == None`;
  /// that is a valid per-word state, not a failure of the call. The word
  /// sequence follows sentence order but may not map 1:1 onto tokenizer
  /// output.
  pub async fn analyze_sentence(&self, input: &str) -> Outcome<SentenceAnalysis> {
    let request = SentenceAnalysisRequest {
      input: input.to_owned(),
      contain_all_analyses: self.config.contain_all_analyses,
    };
    let response: SentenceAnalysisProto = unary_call(
      &self.inner,
      self.config.deadline(),
      morphology::ANALYZE_SENTENCE_PATH,
      request,
    )
    .await?;

    Ok(sentence_from_proto(response))
  }

  /// Analyzes one word form without sentence context, returning every
  /// candidate parse
  pub async fn analyze_word(&self, input: &str) -> Outcome<Vec<SingleAnalysis>> {
    let request = WordAnalysisRequest { input: input.to_owned() };
    let response: WordAnalysisProto = unary_call(
      &self.inner,
      self.config.deadline(),
      morphology::ANALYZE_WORD_PATH,
      request,
    )
    .await?;

    Ok(response.analyses.into_iter().map(single_from_proto).collect())
  }
}

fn sentence_from_proto(proto: SentenceAnalysisProto) -> SentenceAnalysis {
  SentenceAnalysis {
    input: proto.input,
    words: proto.results.into_iter().map(word_from_proto).collect(),
  }
}

fn word_from_proto(proto: SentenceWordAnalysisProto) -> WordAnalysis {
  WordAnalysis {
    token: proto.token,
    best: proto.best.map(single_from_proto),
    alternatives: proto
      .all
      .map(|all| all.analyses.into_iter().map(single_from_proto).collect())
      .unwrap_or_default(),
  }
}

fn single_from_proto(proto: SingleAnalysisProto) -> SingleAnalysis {
  SingleAnalysis {
    analysis: proto.analysis,
    pos: proto.pos,
    informal: proto.informal,
    runtime: proto.runtime,
    dictionary_item: proto.dictionary_item.map(dictionary_item_from_proto),
    lemmas: proto.lemmas,
    morphemes: proto
      .morphemes
      .into_iter()
      .map(|m| MorphemeData { morpheme: m.morpheme, surface: m.surface })
      .collect(),
  }
}

fn dictionary_item_from_proto(proto: DictionaryItemProto) -> DictionaryItem {
  DictionaryItem {
    lemma: proto.lemma,
    primary_pos: proto.primary_pos,
    // The wire sends an empty string when the lexicon entry has no
    // secondary POS; domain-side that is an absent value, not "".
    secondary_pos: (!proto.secondary_pos.is_empty()).then_some(proto.secondary_pos),
  }
}
