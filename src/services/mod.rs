//! Business logic services

pub mod clients;
pub mod trips;

use std::sync::Arc;

use crate::{error::AppResult, repository::TravelStore};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub clients: clients::ClientsService,
    pub trips: trips::TripsService,
    store: Arc<dyn TravelStore>,
}

impl Services {
    /// Create all services on top of the given store
    pub fn new(store: Arc<dyn TravelStore>) -> Self {
        Self {
            clients: clients::ClientsService::new(store.clone()),
            trips: trips::TripsService::new(store.clone()),
            store,
        }
    }

    /// Check that the backing store answers
    pub async fn ready(&self) -> AppResult<()> {
        self.store.ping().await
    }
}
