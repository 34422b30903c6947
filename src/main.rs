use axum::{Server, middleware::from_fn};
use noteboard::{AppState, config::Config, db, middleware, routes};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {}", err);
            std::process::exit(1);
        }
    };
    noteboard::init_tracing(&config);

    // Initialize database
    let db = db::create_pool(&config.database())
        .expect("Failed to create database connection pool");

    let static_dir = config.static_dir.clone();
    let addr: SocketAddr = config
        .server_address()
        .parse()
        .expect("Invalid SERVER_HOST/SERVER_PORT");

    // Application state
    let state = Arc::new(AppState::new(db, config));

    let app = routes::create_router(state)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(from_fn(middleware::logger::logger));

    tracing::info!("Server running at http://{}", addr);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("Server error");
}
