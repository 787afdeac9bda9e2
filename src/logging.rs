use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Safe to call more than once; later calls are ignored.
pub fn init_subscriber() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_ansi(false))
        .with(filter)
        .try_init()
        .ok();
}
