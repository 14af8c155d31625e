// crates/cumle/src/proto/mod.rs

//! Wire contract of the four remote NLP services.
//!
//! The messages are modeled by hand with `prost` derives instead of a
//! protoc build step; the derive output is wire-compatible with the
//! upstream protobuf definitions as long as field tags match, and the tags
//! here are the pinned contract (see DESIGN.md). One module per protobuf
//! package:
//!
//! - `langid`: `zemberek.langid.LanguageIdService`
//! - `preprocess`: `zemberek.preprocessor.PreprocessingService`
//! - `normalization`: `zemberek.normalization.NormalizationService`
//! - `morphology`: `zemberek.morphology.MorphologyService`
//!
//! Each module also carries the full gRPC method paths of its service as
//! `&'static str` constants, the exact strings a generated client would put
//! on the wire.

pub mod langid;
pub mod morphology;
pub mod normalization;
pub mod preprocess;
