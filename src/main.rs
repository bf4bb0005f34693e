// Main entry point - Dependency injection and server setup
mod domain;
mod application;
mod error;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::command_service::CommandService;
use crate::application::fetch_service::StandingsFetchService;
use crate::application::fetch_tracker::PendingFetches;
use crate::application::logo_service::LogoService;
use crate::application::notifier::Notifier;
use crate::application::timer_service::DataTimerService;
use crate::application::url_generator::UrlGenerator;
use crate::infrastructure::config::load_service_config;
use crate::infrastructure::http_source::HttpStandingsSource;
use crate::infrastructure::logo_directory::DirectoryLogoCatalog;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = load_service_config()?;

    // Upstream client (infrastructure layer)
    let source = Arc::new(HttpStandingsSource::new(&config.upstream)?);
    let notifier = Notifier::new(config.notifications.channel_capacity);

    // Create services (application layer)
    let fetcher = StandingsFetchService::new(
        source,
        UrlGenerator::new(&config.upstream),
        PendingFetches::new(),
        notifier.clone(),
        config.upstream.snet_year_floor,
    );
    let timers = DataTimerService::new(fetcher.clone());
    let logos = LogoService::new(
        Arc::new(DirectoryLogoCatalog::new()),
        config.logos.logos_dir.clone(),
        config.logos.custom_logos_dir.clone(),
    );
    let command_service = CommandService::new(timers, fetcher, logos, notifier.clone());

    // Create application state
    let state = Arc::new(AppState {
        command_service,
        notifier,
    });

    // Build router (presentation layer)
    // Compression is applied per response, so no CompressionLayer here
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind_addr))?;
    tracing::info!("Starting standings-fetcher service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
