//! Atelier Engine - Main entry point.
//!
//! Builds the stores, optionally seeds demo data, and prints the dashboard
//! summary as JSON.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atelier_engine::infrastructure::{clock::SystemClock, config::AppConfig, ports::ClockPort};
use atelier_engine::App;

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atelier_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Atelier Engine");

    let config = AppConfig::from_env();
    tracing::info!(
        utc_offset_minutes = config.utc_offset_minutes,
        seed_demo = config.seed_demo,
        "Configuration loaded"
    );

    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::with_offset(config.utc_offset()));
    let seed_demo = config.seed_demo;
    let mut app = App::new(clock, config);

    app.clients.subscribe(|clients| {
        tracing::debug!(count = clients.len(), "Client snapshot");
    });
    app.meetings.subscribe(|meetings| {
        tracing::debug!(count = meetings.len(), "Meeting snapshot");
    });

    if seed_demo {
        app.seed_demo()?;
    }

    println!("{}", serde_json::to_string_pretty(&app.dashboard())?);
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
