//! Sends one GET request through a stubbing transport.
//!
//! Run with `cargo run --example basic`. Pass `--real` to leave the context
//! unmarked and hit the network instead.

use anyhow::{Context as _, Result};
use pouch::observability::{init_tracing, TracingConfig};
use pouch::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing(&TracingConfig::new().with_filter("info,pouch=debug"))?;

    // Any transport works here; this one talks to the network.
    let transport = configure_for_stubbing(ReqwestTransport::new()?);
    let client = Client::new(transport);

    // Only requests issued under a marked context are stubbed.
    let real = std::env::args().any(|arg| arg == "--real");
    let ctx = if real {
        Context::background()
    } else {
        new_stubbed_context()
    };

    let response = client
        .get("http://localhost/pouch/00/basic")
        .context(ctx)
        .send()
        .await
        .context("Unable to send request")?;

    let body = response.text().context("Unable to read response")?;

    println!(
        "HTTP {}: {}",
        response.status().as_u16(),
        response.reason().unwrap_or_default()
    );
    println!("{body}");
    Ok(())
}
