use tracing::warn;
use tracing_subscriber::EnvFilter;
use menu_calc::config::{Config, DEFAULT_LOG_FILTER};
use menu_calc::repl;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_logging(&config);
    for problem in &config.problems {
        warn!(%problem, "ignoring configuration value");
    }
    repl::start_repl(&config)
}

// Logs go to stderr so stdout carries only the dialogue.
fn init_logging(config: &Config) {
    let (filter, rejected) = match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(err)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    if let Some(err) = rejected {
        warn!(filter = %config.log_filter, error = %err, "invalid log filter, using default");
    }
}
