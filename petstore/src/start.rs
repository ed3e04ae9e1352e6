use std::io;

use tracing_subscriber::{EnvFilter, Layer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Initializes the application environment: loads `.env` and sets up console tracing, filtered
/// by the `MAIN_LOG` environment variable.
pub fn init() {
  let _ = dotenvy::dotenv(); // Ignore error ok: .env file is not required.

  tracing_subscriber::registry()
    .with(
      tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("MAIN_LOG"))
    )
    .init();
}
