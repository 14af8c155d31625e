//! cumle crate example
//!
//! Connects to a running NLP gRPC server (set `CUMLE_ENDPOINT`, default
//! `http://127.0.0.1:6789`) and analyzes one sentence with all four
//! services, printing the composed report.

use tracing_subscriber::EnvFilter;

use cumle::{CumleClient, CumleConfig};
use tonic::transport::Endpoint;

/// Application common result type
type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> AppResult<()> {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  let endpoint =
    std::env::var("CUMLE_ENDPOINT").unwrap_or_else(|_| "http://127.0.0.1:6789".to_string());

  // Lazy connection: the channel is established on first use, so a dead
  // endpoint shows up as a transport failure in the report rather than an
  // error here.
  let channel = Endpoint::from_shared(endpoint)?.connect_lazy();
  let client = CumleClient::new(channel, CumleConfig::default())?;

  let text = "Kavanozun kapağını açamadım.";
  let report = client.analyze(text).await;

  match &report.language {
    Ok(tag) if tag.is_empty() => println!("language: (unknown)"),
    Ok(tag) => println!("language: {tag}"),
    Err(err) => println!("language: FAILED ({err})"),
  }

  match &report.tokens {
    Ok(tokens) => {
      for token in tokens {
        println!("token: {:<12} {:?}", token.text, token.kind);
      }
    }
    Err(err) => println!("tokens: FAILED ({err})"),
  }

  match &report.normalized {
    Ok(normalized) => println!("normalized: {normalized}"),
    Err(err) => println!("normalized: FAILED ({err})"),
  }

  match &report.morphology {
    Ok(sentence) => {
      for word in &sentence.words {
        match &word.best {
          Some(best) => {
            println!("word: {:<12} pos={:<6} lemmas={}", word.token, best.pos, best.lemma_string());
          }
          None => println!("word: {:<12} (no valid parse)", word.token),
        }
      }
    }
    Err(err) => println!("morphology: FAILED ({err})"),
  }

  // Full machine-readable form
  println!("{}", serde_json::to_string_pretty(&report)?);

  Ok(())
}
