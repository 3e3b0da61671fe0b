use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use car_catalog::config::{DatabaseConfig, EnvironmentConfig};
use car_catalog::{create_app, database, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env when present
    dotenv().ok();

    let config = EnvironmentConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Car Catalog");
    info!("=============");
    info!("Environment: {}", config.environment);

    let db_config = DatabaseConfig::from_env()?;
    let pool = match database::create_pool(&db_config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Could not connect to the database: {}", e);
            return Err(e);
        }
    };
    database::run_migrations(&pool).await?;

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(pool, config));

    info!("🌐 Server listening on http://{}", addr);
    info!("📄 Pages:");
    info!("   GET       /                  - Catalog (?manufacturer=&car_model=)");
    info!("   GET/POST  /add_manufacturer  - Add manufacturer");
    info!("   GET/POST  /add_model         - Add car model");
    info!("   GET/POST  /add_car           - Add car");
    info!("🔌 API:");
    info!("   GET/POST         /api/manufacturer");
    info!("   GET/PUT/DELETE   /api/manufacturer/:id");
    info!("   GET/POST         /api/model");
    info!("   GET/PUT/DELETE   /api/model/:id");
    info!("   GET/POST         /api/car");
    info!("   GET/PUT/DELETE   /api/car/:id");
    info!("   GET              /health");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Server error: {}", e);
        return Err(e.into());
    }

    info!("👋 Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C received, shutting down...");
        },
        _ = terminate => {
            info!("🛑 Termination signal received, shutting down...");
        },
    }
}
