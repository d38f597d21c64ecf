use std::sync::Arc;

use meal_maker::config::Settings;
use meal_maker::server::MealMakerMcpServer;
use rmcp::transport::sse_server::{SseServer, SseServerConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".to_string().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_env();

    match &settings.catalog_path {
        Some(path) => tracing::info!("Using recipe catalog at {}", path.display()),
        None => tracing::info!("Using built-in recipe catalog"),
    }

    let matcher = match settings.build_matcher() {
        Ok(matcher) => Arc::new(matcher),
        Err(e) => {
            tracing::error!("Failed to build recipe matcher: {}", e);
            tracing::error!("Please verify:");
            tracing::error!("  - MEAL_MAKER_CATALOG points to a readable JSON file");
            tracing::error!("  - The file holds a non-empty array of recipes");
            std::process::exit(1);
        }
    };

    let config = SseServerConfig {
        bind: settings.bind_addr.parse()?,
        sse_path: "/sse".to_string(),
        post_path: "/message".to_string(),
        ct: tokio_util::sync::CancellationToken::new(),
        sse_keep_alive: None,
    };

    tracing::info!("Meal Maker MCP Server listening on {}", config.bind);

    let sse_server = SseServer::serve_with_config(config).await?;

    let default_top_k = settings.default_top_k;
    let ct = sse_server
        .with_service(move || MealMakerMcpServer::new(Arc::clone(&matcher), default_top_k));

    tracing::info!("Meal Maker MCP Server started successfully");

    // Wait for Ctrl+C
    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutting down...");
    ct.cancel();

    Ok(())
}
