use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use vitals_api::config::ApiConfig;
use vitals_api::state::AppState;
use vitals_sheets::client::SheetsClient;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    let problems = vitals_dashboard::verify_registry();
    if !problems.is_empty() {
        for problem in &problems {
            tracing::error!(problem = %problem, "schema registry defect");
        }
        return Err(eyre::eyre!("{} schema registry defect(s)", problems.len()));
    }

    tracing::info!(
        spreadsheet = %config.sheets.spreadsheet_id,
        range = %config.sheets.range,
        schema = ?config.schema,
        "starting vitals-api"
    );

    let source = SheetsClient::new(config.sheets.clone());
    let state = AppState::new(Arc::new(source), config.schema.clone());
    let app = vitals_api::build_app(state, &config.allowed_origins);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
