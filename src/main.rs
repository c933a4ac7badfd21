use anyhow::Result;
use cv_analyzer::{start_web_server, EnvironmentConfig};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("cv_analyzer=info,cvscope=info,rocket::server=off")),
        )
        .init();

    let port = match std::env::var("ROCKET_PORT") {
        Ok(raw) => raw
            .parse::<u16>()
            .map_err(|_| anyhow::anyhow!("ROCKET_PORT must be a valid port number"))?,
        Err(_) => 8000,
    };

    let config = EnvironmentConfig::load()?;

    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );
    info!("Server: http://0.0.0.0:{}", port);

    start_web_server(config, port).await
}
