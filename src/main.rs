use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use webhook_audit_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    routes,
    store::PgStore,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool(&config.database_url).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let state = AppState::new(Arc::new(PgStore::new(pool)));

    let app = Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/masterWebhookServer",
            get(routes::master::get_master_webhook_server),
        )
        .route("/producer", post(routes::producer::register_producer))
        .route(
            "/request",
            post(routes::request::log_request).get(routes::request::list_requests),
        )
        .route(
            "/request/:id/headers",
            get(routes::request::get_request_headers),
        )
        .route("/purge", delete(routes::request::purge_request_records))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
