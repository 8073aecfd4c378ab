use clap::Parser;
use odata_client::{ClientConfig, Credentials};
use std::path::PathBuf;
use std::time::Duration;

/// OData root of the SAP API Business Hub sandbox.
pub const DEFAULT_BASE_URL: &str = "https://sandbox.api.sap.com/s4hanacloud/sap/opu/odata/sap";

/// Descriptor read when `--input` is not given.
pub const DEFAULT_INPUT: &str = "inputs/sdc_profit_center_sample.json";

/// Settings for one run, from the command line or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "profit-center-reads", version, about = "Read profit center master data")]
pub struct Config {
    /// OData root the service path is appended to.
    #[arg(long, env = "SAP_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Logical SAP client sent as `sap-client` on entity-set queries.
    #[arg(long, env = "SAP_CLIENT")]
    pub sap_client: Option<String>,

    #[arg(long, env = "SAP_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "SAP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// API key for the API Business Hub sandbox.
    #[arg(long, env = "SAP_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-request timeout.
    #[arg(long, env = "SAP_API_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Input descriptor naming the profit center to read.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub log_json: bool,
}

impl Config {
    /// Settings for the HTTP request client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            credentials: self.username.clone().map(|username| Credentials {
                username,
                password: self.password.clone(),
            }),
            api_key: self.api_key.clone(),
        }
    }
}
