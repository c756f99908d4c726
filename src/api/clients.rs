//! Client endpoints: creation, trip listing and registrations

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{ClientTrip, CreateClient, CreatedClient},
};

use super::MessageResponse;

/// Get the trips a client is registered for
#[utoipa::path(
    get,
    path = "/clients/{id}/trips",
    tag = "clients",
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Client's trips", body = Vec<ClientTrip>),
        (status = 404, description = "Client not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_client_trips(
    State(state): State<crate::AppState>,
    Path(client_id): Path<i32>,
) -> AppResult<Json<Vec<ClientTrip>>> {
    let trips = state.services.clients.trips(client_id).await?;
    Ok(Json(trips))
}

/// Create a new client
#[utoipa::path(
    post,
    path = "/clients",
    tag = "clients",
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client created", body = CreatedClient),
        (status = 400, description = "Missing field, malformed pesel or malformed body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_client(
    State(state): State<crate::AppState>,
    payload: Result<Json<CreateClient>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CreatedClient>)> {
    let Json(client) = payload?;
    let created = state.services.clients.create(&client).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Register a client for a trip
#[utoipa::path(
    put,
    path = "/clients/{id}/trips/{trip_id}",
    tag = "clients",
    params(
        ("id" = i32, Path, description = "Client ID"),
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Client registered", body = MessageResponse),
        (status = 400, description = "Trip full or client already registered", body = crate::error::ErrorResponse),
        (status = 404, description = "Client or trip not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn register_client_for_trip(
    State(state): State<crate::AppState>,
    Path((client_id, trip_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    state.services.clients.register(client_id, trip_id).await?;
    Ok(Json(MessageResponse::new("Client registered for the trip")))
}

/// Remove a client's registration for a trip
#[utoipa::path(
    delete,
    path = "/clients/{id}/trips/{trip_id}",
    tag = "clients",
    params(
        ("id" = i32, Path, description = "Client ID"),
        ("trip_id" = i32, Path, description = "Trip ID")
    ),
    responses(
        (status = 200, description = "Registration deleted", body = MessageResponse),
        (status = 404, description = "Client not registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_client_trip(
    State(state): State<crate::AppState>,
    Path((client_id, trip_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    state.services.clients.unregister(client_id, trip_id).await?;
    Ok(Json(MessageResponse::new("Registration deleted")))
}
