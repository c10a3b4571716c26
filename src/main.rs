use axum::{Router, Server, middleware::from_fn};
use devflow_backend::db::DbPool;
use devflow_backend::{AppState, config::Config};
use diesel::{PgConnection, r2d2::{self, ConnectionManager as DbConnectionManager}};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() {
    let config = Config::from_env().expect("Failed to load configuration");
    devflow_backend::init_tracing(&config);

    // Initialize database
    let manager = DbConnectionManager::<PgConnection>::new(&config.database_url);
    let db: DbPool = r2d2::Pool::builder()
        .max_size(config.database_max_connections)
        .build(manager)
        .expect("Failed to create database connection pool");

    let addr = config
        .server_address()
        .parse()
        .expect("Invalid server address");

    // Application state
    let state = Arc::new(AppState::new(db, config));

    // CORS configuration: every origin is allowed, matching the frontend's
    // expectations. Narrow this before exposing the service publicly.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api", devflow_backend::routes::create_router(state))
        .layer(cors)
        .layer(from_fn(devflow_backend::middleware::logger::logger));

    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}
