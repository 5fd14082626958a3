use blog_api::{AppConfig, AppState, app, config::StorageBackend};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,blog_api=debug")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::from_env();

    match &config.storage {
        StorageBackend::File(path) => info!("Storing posts in {}", path.display()),
        StorageBackend::Memory => info!("Storing posts in memory"),
    }

    let state = AppState::from_config(&config);
    let app = app(state, &config);

    // Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET    /health             - Health check");
    info!("  GET    /posts              - List posts");
    info!("  POST   /posts              - Create post");
    info!("  GET    /posts/{{id}}         - Get specific post");
    info!("  DELETE /posts/{{id}}         - Delete post");
    info!("  POST   /posts/{{id}}/likes   - Like post");
    info!("  DELETE /posts/{{id}}/likes   - Unlike post");

    axum::serve(listener, app).await
}
