//! Reads one profit center, as named by the input descriptor, and logs the
//! header, company-code assignments and texts the service returns.

use anyhow::{Context, Result};
use clap::Parser;
use odata_client::HttpRequestClient;
use profit_center_reads::caller::ProfitCenterCaller;
use profit_center_reads::runtime::{read_descriptor, setup_tracing, Config};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    setup_tracing(config.log_json);

    let descriptor = read_descriptor(&config.input)?;
    let key = descriptor.key();
    let text_key = descriptor.text_key();
    let requested = descriptor.requested();
    if requested.is_empty() {
        warn!(accepter = ?descriptor.accepter, "No known resources requested");
    }

    let client =
        HttpRequestClient::new(config.client_config()).context("failed to build HTTP client")?;
    let caller = ProfitCenterCaller::new(&config.base_url, client)
        .with_sap_client(config.sap_client.clone());

    info!(
        base_url = %config.base_url,
        resources = ?requested.iter().collect::<Vec<_>>(),
        "Starting profit center reads"
    );
    let report = caller.fetch_all(&key, &text_key, &requested).await;
    info!(
        calls = report.outcomes.len(),
        succeeded = report.is_success(),
        "Profit center reads finished"
    );

    Ok(())
}
