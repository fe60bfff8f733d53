use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use cinematic_generator::{ai::OpenAiImageClient, build_router, models::Config};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "cinematic-generator")]
#[command(about = "Serve the vertical image generator")]
struct CliArgs {
    /// Listen address, overriding SERVER_ADDR.
    #[arg(long, value_name = "HOST:PORT", value_parser = parse_addr_arg)]
    addr: Option<SocketAddr>,
}

fn parse_addr_arg(input: &str) -> std::result::Result<SocketAddr, String> {
    cinematic_generator::models::parse_listen_addr(input).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinematic_generator=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();
    let mut config = Config::from_env()?;
    if let Some(addr) = args.addr {
        config.listen_addr = addr;
    }

    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; generation requests will fail");
    }

    let image_gen = Arc::new(OpenAiImageClient::new(config.openai_base_url.clone()));
    let config = Arc::new(config);
    let router = build_router(config.clone(), image_gen);

    let listener = TcpListener::bind(config.listen_addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_addr_arg;

    #[test]
    fn test_parse_addr_arg_valid() {
        let parsed = parse_addr_arg("127.0.0.1:8080").unwrap();
        assert_eq!(parsed.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_addr_arg_invalid() {
        let err = parse_addr_arg("8080").unwrap_err();
        assert!(err.contains("HOST:PORT"));
    }
}
