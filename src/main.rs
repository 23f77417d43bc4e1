use std::fs;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tickit_editor::{config::Config, services::EventDraft, EditorSession};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Tickit editor ({})", config.app.environment);

    // Путь к черновику: аргумент командной строки или app.draft_path
    let path = std::env::args()
        .nth(1)
        .or_else(|| config.app.draft_path.clone())
        .context("Usage: tickit_editor <draft.json> (or set TICKIT__APP__DRAFT_PATH)")?;

    let raw = fs::read_to_string(&path).with_context(|| format!("Failed to read draft {}", path))?;
    let draft: EventDraft = serde_json::from_str(&raw).with_context(|| format!("Failed to parse draft {}", path))?;
    info!("Draft loaded: {} tiers, {} seats", draft.tiers.len(), draft.seats.len());

    let session = EditorSession::from_draft(config, draft)?;
    let stats = session.seat_map.stats();
    info!("Seat map: {} seats, {} with a tier", stats.total, stats.assigned);

    let payload = session.payload()?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    Ok(())
}
