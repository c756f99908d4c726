//! Trip listing service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{trip::group_trip_rows, TripWithCountries},
    repository::TravelStore,
};

#[derive(Clone)]
pub struct TripsService {
    store: Arc<dyn TravelStore>,
}

impl TripsService {
    pub fn new(store: Arc<dyn TravelStore>) -> Self {
        Self { store }
    }

    /// List all trips with their countries, ordered by trip id
    pub async fn list(&self) -> AppResult<Vec<TripWithCountries>> {
        let rows = self.store.trip_country_rows().await?;
        Ok(group_trip_rows(rows))
    }
}
