// crates/cumle/src/service.rs

//! CumleClient: the aggregating facade over the four service clients.
//!
//! - Language identification (LanguageIdClient)
//! - Tokenization / sentence extraction (PreprocessingClient)
//! - Text normalization (NormalizationClient)
//! - Morphological analysis (MorphologyClient)
//!
//! Callers that want "everything about this text" only need this struct;
//! the individual clients stay reachable through accessors for callers
//! that need one service alone.

use tonic::transport::Channel;
use tracing::{debug, info};

use crate::clients::{
  LanguageIdClient, MorphologyClient, NormalizationClient, PreprocessingClient,
};
use crate::config::CumleConfig;
use crate::errors::CumleResult;
use crate::models::AnalysisReport;

/// Aggregating facade over the four remote NLP services.
///
/// Holds one client per service, all sharing one channel. The channel is
/// safe for concurrent use, the clients are stateless, and nothing here
/// mutates shared state, so one `CumleClient` serves concurrent callers.
#[derive(Debug, Clone)]
pub struct CumleClient {
  /// Language identification
  language_id: LanguageIdClient,

  /// Tokenization and sentence extraction
  preprocessing: PreprocessingClient,

  /// Text normalization
  normalization: NormalizationClient,

  /// Morphological analysis
  morphology: MorphologyClient,
}

impl CumleClient {
  /// Builds the client set over a shared channel.
  ///
  /// The configuration is validated once here, before any call can be
  /// attempted, then handed to each client as an immutable value.
  ///
  /// # Errors
  /// - Configuration is invalid (zero deadline, negative sample count)
  pub fn new(channel: Channel, config: CumleConfig) -> CumleResult<Self> {
    config.validate()?;

    info!(deadline_ms = config.deadline_ms, "NLP client set constructed");

    Ok(Self {
      language_id: LanguageIdClient::new(channel.clone(), config.clone()),
      preprocessing: PreprocessingClient::new(channel.clone(), config.clone()),
      normalization: NormalizationClient::new(channel.clone(), config.clone()),
      morphology: MorphologyClient::new(channel, config),
    })
  }

  /// Runs all four services against `text` and composes one report.
  ///
  /// The four calls are mutually independent and issued concurrently; the
  /// composition waits for all of them (a join, not a race) and never
  /// short-circuits on a single failure. Each outcome lands in its report
  /// slot untouched, so one unreachable service still leaves three filled
  /// slots. For identical input and identical remote responses the report
  /// is identical regardless of how the four calls interleave.
  ///
  /// No retries happen here; every outcome is cleanly retryable by the
  /// caller instead.
  pub async fn analyze(&self, text: &str) -> AnalysisReport {
    let (language, tokens, normalized, morphology) = tokio::join!(
      self.language_id.detect(text),
      self.preprocessing.tokenize(text),
      self.normalization.normalize(text),
      self.morphology.analyze_sentence(text),
    );

    let report = AnalysisReport { language, tokens, normalized, morphology };
    debug!(failed_slots = report.errors().len(), "composed analysis report");
    report
  }

  /// The language identification client
  #[must_use]
  pub fn language_id(&self) -> &LanguageIdClient {
    &self.language_id
  }

  /// The tokenization / sentence extraction client
  #[must_use]
  pub fn preprocessing(&self) -> &PreprocessingClient {
    &self.preprocessing
  }

  /// The normalization client
  #[must_use]
  pub fn normalization(&self) -> &NormalizationClient {
    &self.normalization
  }

  /// The morphological analysis client
  #[must_use]
  pub fn morphology(&self) -> &MorphologyClient {
    &self.morphology
  }
}
