use portfolio_site::config::AppConfig;
use portfolio_site::contact::application::services::SubmitContactService;
use portfolio_site::content::adapter::outgoing::json_file_content_source::JsonFileContentSource;
use portfolio_site::content::application::services::ContentRegistry;
use portfolio_site::navigation::application::SmoothScrollNavigator;
use portfolio_site::shared::api::custom_json_config;
use portfolio_site::{build_delivery, init_routes, AppState};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;

    let content = ContentRegistry::load(&JsonFileContentSource::new(&config.content_path))
        .with_context(|| format!("Failed to load content from {}", config.content_path))?;

    let delivery = build_delivery(&config.delivery).context("Failed to build email delivery")?;
    info!(backend = delivery.backend(), "Email delivery ready");

    let submit_contact = SubmitContactService::new(delivery, config.identifiers.clone());

    let state = AppState {
        content: Arc::new(content),
        navigator: Arc::new(SmoothScrollNavigator::new()),
        submit_contact: Arc::new(submit_contact),
    };

    let server_url = config.server_url();
    info!(url = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    start()
}
