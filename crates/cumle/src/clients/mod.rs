// crates/cumle/src/clients/mod.rs

//! clients module
//!
//! One thin typed wrapper per remote NLP service. Every client is stateless
//! apart from its channel handle and configuration: it can be cloned freely,
//! called concurrently, and re-invoking it with the same input is idempotent
//! from the client's perspective. The shared plumbing lives here; each
//! client file owns the proto-to-domain mapping for its service.

pub mod language_id;
pub mod morphology;
pub mod normalization;
pub mod preprocessing;

/// Re-export the four service clients
pub use language_id::LanguageIdClient;
pub use morphology::MorphologyClient;
pub use normalization::NormalizationClient;
pub use preprocessing::PreprocessingClient;

use std::time::Duration;

use http::uri::PathAndQuery;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::transport::Channel;
use tonic::{Code, Request, Status};
use tracing::debug;

use crate::errors::{Outcome, ServiceError};

/// Maps a gRPC status into the per-call failure taxonomy.
///
/// `Unavailable`, `DeadlineExceeded` and `Cancelled` are infrastructure
/// conditions; tonic additionally surfaces raw connection faults as
/// `Unknown`. Everything else reached the service and came back as a
/// server-signaled error, so it classifies as a remote outcome.
pub(crate) fn classify_status(status: &Status) -> ServiceError {
  match status.code() {
    Code::Unavailable | Code::DeadlineExceeded | Code::Cancelled | Code::Unknown => {
      ServiceError::transport(format!("{:?}: {}", status.code(), status.message()))
    }
    _ => ServiceError::remote(format!("{:?}: {}", status.code(), status.message())),
  }
}

/// Issues one unary call over a cloned handle of the shared channel.
///
/// The deadline is enforced locally: on expiry the call resolves to a
/// transport failure instead of hanging on a stalled connection. The call
/// shape (`ready` + `ProstCodec` + static method path) is exactly what
/// tonic's generated clients emit.
pub(crate) async fn unary_call<Req, Resp>(
  grpc: &Grpc<Channel>,
  deadline: Duration,
  path: &'static str,
  request: Req,
) -> Outcome<Resp>
where
  Req: prost::Message + 'static,
  Resp: prost::Message + Default + 'static,
{
  debug!(path, "dispatching unary call");

  let mut grpc = grpc.clone();
  let call = async move {
    grpc
      .ready()
      .await
      .map_err(|e| ServiceError::transport(format!("service not ready: {e}")))?;

    let codec: ProstCodec<Req, Resp> = ProstCodec::default();
    let response = grpc
      .unary(Request::new(request), PathAndQuery::from_static(path), codec)
      .await
      .map_err(|status| classify_status(&status))?;

    Ok(response.into_inner())
  };

  match tokio::time::timeout(deadline, call).await {
    Ok(outcome) => outcome,
    Err(_) => Err(ServiceError::deadline_exceeded(deadline)),
  }
}
