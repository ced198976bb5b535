use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// Re-export tracing macros for convenience
pub use tracing::{debug, error, info, trace, warn, Level};

/// Filter used when `RUST_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing system
///
/// Honours `RUST_LOG`, defaulting to `info`, and writes compact lines to
/// stderr. Fails if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Install a subscriber that writes through the test harness's capture
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_for_tests() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(fmt::layer().with_test_writer().compact())
        .try_init();
}

fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}
