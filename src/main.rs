mod config;
mod integrations;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use crate::services::scheduling::FixtureScheduler;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let app_config = config::AppConfig::from_env();
    let port = app_config.port;
    let collaborators = integrations::Collaborators::from_config(&app_config);
    let state = state::AppState::new(app_config, collaborators, Arc::new(FixtureScheduler));

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "salon server listening");
    axum::serve(listener, app).await.expect("server failed");
}
