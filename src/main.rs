use filmography::db::seed_from_file;
use filmography::{api, config::Config, db::init_db, AppError, Repository};
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let pool = init_db(&config.database_path).await?;
    let repo = Arc::new(Repository::new(pool));

    if let Some(seed_file) = &config.seed_file {
        seed_from_file(&repo, seed_file).await?;
    }
    tracing::info!(films = repo.count_films().await?, "catalog loaded");

    let app = api::create_router(api::AppState::new(repo));

    let addr = SocketAddr::new(config.bind_addr, config.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
