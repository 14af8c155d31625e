//! cumle: Türkçe NLP servisleri için istemci katmanı
//!
//! Typed gRPC client orchestration for four remote Turkish NLP services:
//! language identification, tokenization, text normalization and
//! morphological analysis. The remote engine is an external collaborator;
//! this crate owns the request/response contracts, the per-call outcome
//! taxonomy and the composition of the four results into one report.

/// Configuration module - defines CumleConfig, the immutable per-client settings
pub mod config;

/// Service client module - one thin typed wrapper per remote NLP service
pub mod clients;

/// Error module - defines ServiceError, CumleError, CumleResult and the Outcome alias
pub mod errors;

/// Data model module - defines Token, WordAnalysis, AnalysisReport and friends
pub mod models;

/// Wire contract module - prost messages and method paths for the four services
pub mod proto;

/// Service module - CumleClient, the aggregating facade over the four clients
pub mod service;

/// Re-exports
pub use config::CumleConfig;
pub use errors::{CumleError, CumleResult, Outcome, ServiceError};
pub use models::AnalysisReport;
pub use service::CumleClient;
