/*!
 * HTTP surface for the translation service.
 *
 * Five endpoints expose create (translate, add), read (list, CSV export),
 * and delete operations over the store, plus a per-language stats endpoint.
 * All translate-and-persist work is delegated to the Translator.
 */

use axum::{
    routing::{delete, get, post},
    Router,
};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::store::TranslationStore;
use crate::translator::Translator;

pub mod csv_export;
pub mod routes;

/// Server state shared by all handlers
pub struct AppState {
    /// Orchestrator for translate requests
    pub translator: Translator,
    /// Store for the CRUD and export endpoints
    pub store: TranslationStore,
}

/// Build the application router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/translate", post(routes::handle_translate))
        .route("/add", post(routes::handle_add))
        .route("/translations/{language}", get(routes::handle_list))
        .route(
            "/translations/{language}/{id}",
            delete(routes::handle_delete),
        )
        .route("/export/{language}", get(routes::handle_export))
        .route("/stats", get(routes::handle_stats))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until shutdown
pub async fn serve(host: &str, port: u16, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
