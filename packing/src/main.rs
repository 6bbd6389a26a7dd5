//! Terminal front end for the packing list.
//!
//! Configuration comes from the environment (and `.env`); logs go to stderr
//! so they never mix with the screen on stdout.

use anyhow::Context;
use far_away::{shell, Config, LogFormat, PackingReducer, PackingStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| far_away::config::DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    far_away_runtime::metrics::register_metrics();

    let mut store = PackingStore::new(config.initial_state(), PackingReducer::new(), config.environment());

    tracing::info!(
        sort = %config.sort,
        seed_sample = config.seed_sample,
        allow_blank = store.environment().allow_blank_descriptions,
        max_feedback = store.config().max_feedback_actions,
        "Starting Far Away"
    );

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    shell::run(&mut store, stdin.lock(), &mut stdout).context("terminal shell failed")?;

    tracing::info!(items = store.state(|s| s.list.len()), "Goodbye");
    Ok(())
}
