mod config;
mod db;
mod entities;
mod error;
mod models;
mod routes;
mod store;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, store::MovieStore};

#[derive(Clone)]
pub struct AppState {
    pub store: MovieStore,
}

fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/movies", get(routes::list_movies).post(routes::create_movie))
        .route("/movies/{id}", put(routes::update_movie).delete(routes::delete_movie))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movielog=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = MovieStore::new(db);

    let state = Arc::new(AppState { store });

    let app = app(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
