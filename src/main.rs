use std::sync::Arc;

use axum::{Router, routing::get};
use moviedb::{AppState, config::Config, db, repository::MovieRepository, routes};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,moviedb=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let repo = MovieRepository::new(db);

    repo.seed_if_empty().await?;

    let state = Arc::new(AppState { repo });

    let app = Router::new()
        .route("/", get(routes::index))
        .route("/movies/{id}", get(routes::movie))
        .route("/movies/{id}/reviews", axum::routing::post(routes::add_review))
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
