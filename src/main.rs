use std::sync::Arc;

use novelquest::{
    api::{create_router, AppState},
    config::Config,
    services::providers::GroqProvider,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "novelquest=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let provider = GroqProvider::new(
        config.groq_api_key.clone(),
        config.groq_api_url.clone(),
        config.groq_model.clone(),
    );
    let state = AppState::new(Arc::new(provider));
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, model = %config.groq_model, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
