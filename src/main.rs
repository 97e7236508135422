use std::sync::Arc;

use anyhow::Context;
use sales_trainer::api::training_routes;
use sales_trainer::catalog::ScenarioCatalog;
use sales_trainer::config::{GatewayConfig, TrainerConfig};
use sales_trainer::gateway::{HttpReplyGateway, OfflineGateway, ReplyGateway};
use sales_trainer::scoring::TurnScorer;
use sales_trainer::session::{SessionDeps, SessionRouter, SessionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = TrainerConfig::from_env()?;

    eprintln!("📞 Sales Trainer v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Bind: http://{}", config.bind_addr);
    eprintln!("   Catalog API: http://{}/api/catalog/quizzes", config.bind_addr);
    eprintln!("   Training API: http://{}/api/training/start", config.bind_addr);

    let gateway: Arc<dyn ReplyGateway> = match GatewayConfig::from_env() {
        Some(gateway_config) => {
            eprintln!("   Reply gateway: {}", gateway_config.base_url);
            Arc::new(HttpReplyGateway::new(gateway_config))
        }
        None => {
            eprintln!("   Reply gateway: not configured (dialogue modules run degraded)");
            tracing::warn!("REPLY_GATEWAY_URL not set; client replies will be empty");
            Arc::new(OfflineGateway)
        }
    };

    let catalog = Arc::new(ScenarioCatalog::new());
    let scorer = Arc::new(TurnScorer::new());
    let store = SessionStore::new();
    let router = SessionRouter::new(
        store,
        SessionDeps {
            scorer: Arc::clone(&scorer),
            gateway,
            gateway_timeout: config.gateway_timeout,
        },
    );

    let app = training_routes(catalog, router, scorer);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "Training server started");
    axum::serve(listener, app).await?;

    Ok(())
}
