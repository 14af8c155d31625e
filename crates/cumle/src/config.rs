// crates/cumle/src/config.rs

//! Client configuration.
//!
//! One small immutable value carries every per-call knob. It is handed to
//! each service client at construction time; there are no module-level
//! globals and nothing is mutated after [`CumleConfig::validate`] has
//! accepted it.

use std::time::Duration;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Default per-call deadline in milliseconds
pub const DEFAULT_DEADLINE_MS: u64 = 10_000;

/// Client configuration for the four NLP service clients.
///
/// Deserializable from TOML/JSON with every field optional; [`Default`]
/// gives a configuration that is always valid.
#[derive(Debug, Clone, Deserialize)]
pub struct CumleConfig {
  /// Per-call deadline in milliseconds. On expiry the call resolves to a
  /// transport failure instead of hanging. Must be at least 1.
  #[serde(default = "default_deadline_ms")]
  pub deadline_ms: u64,

  /// Sample count forwarded to language identification. `0` leaves the
  /// sampling policy to the service. Must not be negative.
  #[serde(default)]
  pub max_sample_count: i32,

  /// Ask the tokenizer for byte boundaries of each token
  #[serde(default)]
  pub include_token_boundaries: bool,

  /// Ask the morphology service for all analyses of each word, not only the
  /// disambiguated best one
  #[serde(default)]
  pub contain_all_analyses: bool,
}

fn default_deadline_ms() -> u64 {
  DEFAULT_DEADLINE_MS
}

impl Default for CumleConfig {
  fn default() -> Self {
    Self {
      deadline_ms: DEFAULT_DEADLINE_MS,
      max_sample_count: 0,
      include_token_boundaries: false,
      contain_all_analyses: false,
    }
  }
}

impl CumleConfig {
  /// Checks the configuration for rejected preconditions.
  ///
  /// # Errors
  /// - [`ConfigError::ZeroDeadline`] if `deadline_ms` is 0
  /// - [`ConfigError::NegativeMaxSampleCount`] if `max_sample_count` < 0
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.deadline_ms == 0 {
      return Err(ConfigError::ZeroDeadline);
    }
    if self.max_sample_count < 0 {
      return Err(ConfigError::NegativeMaxSampleCount { actual: self.max_sample_count });
    }
    Ok(())
  }

  /// Per-call deadline as a [`Duration`]
  #[must_use]
  pub fn deadline(&self) -> Duration {
    Duration::from_millis(self.deadline_ms)
  }
}
