//! Trip endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, models::TripWithCountries};

/// List all trips with their countries
#[utoipa::path(
    get,
    path = "/trips",
    tag = "trips",
    responses(
        (status = 200, description = "All trips, ordered by id", body = Vec<TripWithCountries>)
    )
)]
pub async fn list_trips(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<TripWithCountries>>> {
    let trips = state.services.trips.list().await?;
    Ok(Json(trips))
}
