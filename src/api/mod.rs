//! API handlers for the trips REST endpoints

pub mod clients;
pub mod health;
pub mod openapi;
pub mod trips;

use axum::{
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::ToSchema;

use crate::AppState;

/// Confirmation body for operations without another payload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Clients
        .route("/clients", post(clients::create_client))
        .route("/clients/:id/trips", get(clients::get_client_trips))
        .route(
            "/clients/:id/trips/:trip_id",
            put(clients::register_client_for_trip).delete(clients::delete_client_trip),
        )
        // Trips
        .route("/trips", get(trips::list_trips))
        .with_state(state);

    Router::new()
        .nest("/api", api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
