//! Paysheet API Server
//!
//! Main entry point for the payroll report service.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paysheet_api::{AppState, create_router};
use paysheet_core::reports::{PayrollReportService, ReportSettings};
use paysheet_db::{PayslipRepository, connect_with_pool};
use paysheet_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paysheet=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;
    let settings = ReportSettings::from_config(&config.reports)
        .context("Invalid report configuration")?;
    info!(
        company = %settings.company_name,
        paye_rows = ?settings.paye_rows,
        classified_pins = config.reports.classifications.len(),
        "Report settings loaded"
    );

    let db = connect_with_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Connected to database");

    let state = AppState {
        source: Arc::new(PayslipRepository::new(db)),
        service: Arc::new(PayrollReportService::new(settings)),
    };

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
