// File: helpbot-core/src/logging.rs

use tracing_subscriber::{fmt, EnvFilter};
use crate::Error;

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`, defaulting
/// to `helpbot=info`. Fails if the host already installed one.
pub fn init_tracing() -> Result<(), Error> {
    let filter = EnvFilter::from_default_env()
        .add_directive("helpbot=info".parse().unwrap_or_default());
    let sub = fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(sub)
        .map_err(|e| Error::Config(format!("failed to set global subscriber: {}", e)))
}
