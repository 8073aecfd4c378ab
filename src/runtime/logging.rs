use tracing_subscriber::EnvFilter;

/// Initializes the tracing/logging infrastructure for the application.
///
/// Verbosity comes from `RUST_LOG` and defaults to `info`, which is the level
/// fetched records are logged at:
/// - `RUST_LOG=debug` - also show each outgoing request
/// - `RUST_LOG=profit_center_reads=debug,odata_client=debug` - per crate
///
/// With `json` set, every line is emitted as a JSON object.
pub fn setup_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
