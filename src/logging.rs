use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter, e.g. `DISKCHECK_LOG=debug`.
pub const LOG_ENV: &str = "DISKCHECK_LOG";

/// Send diagnostics to stderr; stdout is reserved for the status line.
pub fn init() {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
