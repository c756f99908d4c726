//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{clients, health, trips};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trips API",
        version = "1.0.0",
        description = "Clients, trips and trip registrations"
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Clients
        clients::get_client_trips,
        clients::create_client,
        clients::register_client_for_trip,
        clients::delete_client_trip,
        // Trips
        trips::list_trips,
    ),
    components(
        schemas(
            crate::models::client::CreateClient,
            crate::models::client::CreatedClient,
            crate::models::registration::ClientTrip,
            crate::models::trip::TripWithCountries,
            crate::api::MessageResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "clients", description = "Clients and their trip registrations"),
        (name = "trips", description = "Trip catalog")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
