use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/*
 * Logs go to stderr so that stdout only carries the demonstration output.
 * Filter comes from RUST_LOG, warnings only by default.
 */
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("list_reversal=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
