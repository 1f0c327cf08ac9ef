//! TourCast - Location-Triggered Audio Guide Engine
//!
//! Main entry point. Loads a POI audio-guide catalog (local JSON file or
//! backend POI id), replays a GPX trace as the position stream, and runs
//! a guide session against it.

use anyhow::{bail, Context};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tourcast::audio::{LogNotifier, Notifier, NullPlayer, Player, RodioPlayer, TtsNotifier};
use tourcast::config;
use tourcast::guide::catalog::{self, CatalogClient};
use tourcast::position::{GpxReplaySource, PositionSource};
use tourcast::session::GuideSession;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TourCast v{}", env!("CARGO_PKG_VERSION"));

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        bail!("usage: tourcast <catalog.json | poi-id> <trace.gpx>");
    }
    let catalog_arg = &args[1];
    let gpx_path = &args[2];

    let config = config::load_config().context("loading configuration")?;

    let tracks = if catalog_arg.ends_with(".json") {
        catalog::load_from_file(Path::new(catalog_arg)).context("loading local catalog")?
    } else {
        CatalogClient::new(&config.api.base_url)
            .fetch_tracks(catalog_arg, Some(&config.api.language))
            .await
            .context("fetching catalog")?
    };
    tracing::info!(tracks = tracks.len(), "Catalog loaded");

    let player: Arc<dyn Player> = if config.audio.enabled {
        Arc::new(RodioPlayer::new(config.audio.volume))
    } else {
        Arc::new(NullPlayer)
    };

    let notifier: Arc<dyn Notifier> = if config.audio.voice_enabled {
        match TtsNotifier::new(config.audio.speech_rate) {
            Ok(tts) => Arc::new(tts),
            Err(error) => {
                tracing::warn!(%error, "TTS unavailable, logging notifications instead");
                Arc::new(LogNotifier)
            }
        }
    } else {
        Arc::new(LogNotifier)
    };

    let mut source = GpxReplaySource::from_file(
        gpx_path,
        Duration::from_millis(config.position.replay_interval_ms),
    )
    .context("loading GPX trace")?;

    let watch = source
        .watch(&config.position.watch)
        .context("starting position watch")?;

    let mut session = GuideSession::new(tracks, player, notifier);
    session.run(watch.updates).await;

    Ok(())
}
