// crates/cumle/src/errors/error_definition.rs

//! Error definitions.
//!
//! Every remote call resolves to an [`Outcome`]: either the decoded value or
//! one of three failure kinds. The kinds are a closed taxonomy so that the
//! caller can always tell "the service succeeded with an empty result" apart
//! from "the service failed and here is why":
//!
//! - [`ServiceError::Transport`]: the call never completed at the transport
//!   layer (connection refused, deadline exceeded). Retryable by the caller.
//! - [`ServiceError::Remote`]: the service responded but signaled a
//!   domain-level problem. An expected outcome, carried as data, not retried.
//! - [`ServiceError::Malformed`]: the response violates the wire contract.
//!   Surfaced as a defect, never guessed around.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration (CumleConfig) related errors.
///
/// These are rejected preconditions: detected before any remote call is
/// attempted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  /// deadline_ms is zero; every call must carry a finite, non-zero deadline
  #[error("deadline_ms must be at least 1")]
  ZeroDeadline,

  /// max_sample_count is negative
  #[error("max_sample_count must not be negative: actual={actual}")]
  NegativeMaxSampleCount {
    /// The value that was supplied
    actual: i32,
  },
}

/// Kind of a per-call failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceErrorKind {
  /// Infrastructure-level failure, candidate for caller-driven retry
  Transport,
  /// Domain-level negative result signaled by the service
  Remote,
  /// Contract violation in the remote response
  Malformed,
}

impl ServiceErrorKind {
  /// Returns a stable machine-readable code for the kind
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Transport => "transport_failure",
      Self::Remote => "remote_error",
      Self::Malformed => "malformed_response",
    }
  }
}

/// Failure of one remote service call.
///
/// Cloneable and serde-serializable so that it can travel inside an
/// [`AnalysisReport`](crate::models::AnalysisReport) slot.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ServiceError {
  /// The call could not reach or complete at the transport layer
  #[error("transport failure: {message}")]
  Transport {
    /// Human-readable detail (connection error, expired deadline, ...)
    message: String,
  },

  /// The service responded but signaled a domain-level problem
  #[error("remote error: {message}")]
  Remote {
    /// Detail string supplied by the service
    message: String,
  },

  /// The remote response violates the expected contract
  #[error("malformed response: {message}")]
  Malformed {
    /// What was missing or unrecognizable
    message: String,
  },
}

impl ServiceError {
  /// Transport-level failure with the given detail
  pub fn transport(message: impl Into<String>) -> Self {
    Self::Transport { message: message.into() }
  }

  /// Transport-level failure for a locally expired deadline
  #[must_use]
  pub fn deadline_exceeded(deadline: Duration) -> Self {
    Self::Transport { message: format!("deadline of {}ms exceeded", deadline.as_millis()) }
  }

  /// Domain-level failure signaled by the service
  pub fn remote(message: impl Into<String>) -> Self {
    Self::Remote { message: message.into() }
  }

  /// Contract violation in the remote response
  pub fn malformed(message: impl Into<String>) -> Self {
    Self::Malformed { message: message.into() }
  }

  /// Returns the kind of this failure
  #[must_use]
  pub fn kind(&self) -> ServiceErrorKind {
    match self {
      Self::Transport { .. } => ServiceErrorKind::Transport,
      Self::Remote { .. } => ServiceErrorKind::Remote,
      Self::Malformed { .. } => ServiceErrorKind::Malformed,
    }
  }

  /// Returns the stable machine-readable code of this failure
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the human-readable detail string
  #[must_use]
  pub fn message(&self) -> &str {
    match self {
      Self::Transport { message } | Self::Remote { message } | Self::Malformed { message } => {
        message
      }
    }
  }
}

/// Unified error.
/// Public APIs outside the per-call path return this error.
/// Used as `CumleResult<T>` = `Result<T, CumleError>`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CumleError {
  /// Configuration error
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// Service call error
  #[error(transparent)]
  Service(#[from] ServiceError),
}

/// Standard Result alias of the cumle crate
pub type CumleResult<T> = Result<T, CumleError>;

/// Outcome of one remote service call.
///
/// The tagged variant the whole crate is built around: a slot in the
/// composite report is exactly `Ok(value)` or `Err(kind + detail)`, never a
/// value whose emptiness has to be interpreted.
pub type Outcome<T> = Result<T, ServiceError>;
