use crate::signaling::{SignalingService, ws_handler};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use meshcall_core::IceServerConfig;

pub fn router(service: SignalingService) -> Router {
    Router::new()
        .route("/ws/{room}/{client_id}", get(ws_handler))
        .route("/api/ice-servers", get(ice_servers))
        .route("/health", get(health))
        .with_state(service)
}

async fn ice_servers(State(service): State<SignalingService>) -> Json<Vec<IceServerConfig>> {
    Json(service.get_ice_servers())
}

async fn health() -> &'static str {
    "ok"
}
