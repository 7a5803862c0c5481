use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vidscribe::ai::OpenAiVisionClient;
use vidscribe::api::{self, AppState};
use vidscribe::models::Config;
use vidscribe::service::VideoAnalysisService;

#[derive(Debug, Parser)]
#[command(name = "vidscribe")]
#[command(about = "Video analysis API over a hosted vision-language model")]
struct CliArgs {
    /// Override the listen port from the environment.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidscribe=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let vision =
        OpenAiVisionClient::new(config.api_key.clone(), config.model.clone(), config.timeout)
            .with_base_url(config.base_url.clone());
    let service = VideoAnalysisService::new(Box::new(vision), config.video_dir.clone());
    let state = Arc::new(AppState { service });

    let port = args.port.unwrap_or(config.port);
    let addr = format!("{}:{}", config.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    info!("Video directory: {}", config.video_dir.display());
    info!("Model: {} via {}", config.model, config.base_url);

    axum::serve(listener, api::router(state)).await?;
    Ok(())
}
