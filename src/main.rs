//! Courier - command line demo
//!
//! Issues a single request and prints how it settled.
//!
//! ```text
//! courier <verb> <base-address> <path> [json-body]
//! courier fetch http://localhost:3000 /api/chats
//! courier create http://localhost:3000 /api/chats '{"title":"general"}'
//! ```

use courier::prelude::*;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: courier <fetch|create|replace|remove> <base-address> <path> [json-body]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (verb, base, path) = match args.as_slice() {
        [verb, base, path, ..] => (verb.parse::<Verb>()?, base.clone(), path.clone()),
        _ => return Err(USAGE.into()),
    };

    let mut options = Options::new();
    if let Some(raw) = args.get(3) {
        let body: serde_json::Value = serde_json::from_str(raw)?;
        options = options.body(body);
    }

    let client = RequestClient::with_base(base);
    let spec = client.build(verb, &path, options);
    tracing::info!("{} {}{}", spec.verb, client.config().base_address, spec.path);

    match client.execute(spec).await {
        Ok(Payload::Json(value)) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Ok(Payload::Raw(response)) => {
            tracing::info!("Non-JSON response ({} {})", response.status, response.status_text);
            println!("{}", response.text());
        }
        Err(e) => {
            tracing::error!("Request failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
