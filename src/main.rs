// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Result};
use kube::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use management_ingress::config::Config;
use management_ingress::inspector::inspect;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, the report to stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: watch_namespace={}, fail_on_invalid={}",
        config.namespace().unwrap_or("<all>"),
        config.fail_on_invalid
    );

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let reports = inspect(&client, &config).await?;
    println!("{}", serde_json::to_string_pretty(&reports)?);

    let invalid = reports.iter().filter(|r| !r.is_valid()).count();
    info!("Inspected {} ingresses, {} invalid", reports.len(), invalid);

    if config.fail_on_invalid && invalid > 0 {
        bail!("{} ingresses have invalid annotations", invalid);
    }
    Ok(())
}
