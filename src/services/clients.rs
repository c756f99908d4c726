//! Client management service: creation, trip listing and registrations

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{ClientTrip, CreateClient, CreatedClient, RegistrationOutcome},
    repository::TravelStore,
};

#[derive(Clone)]
pub struct ClientsService {
    store: Arc<dyn TravelStore>,
}

impl ClientsService {
    pub fn new(store: Arc<dyn TravelStore>) -> Self {
        Self { store }
    }

    /// Validate and create a client
    pub async fn create(&self, client: &CreateClient) -> AppResult<CreatedClient> {
        client.check()?;
        let id = self.store.create_client(client).await?;
        tracing::info!(client_id = id, "Client created");
        Ok(CreatedClient { id })
    }

    /// Get the trips a client is registered for
    pub async fn trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>> {
        if !self.store.client_exists(client_id).await? {
            return Err(AppError::NotFound("Client not found".to_string()));
        }
        self.store.client_trips(client_id).await
    }

    /// Register a client for a trip
    pub async fn register(&self, client_id: i32, trip_id: i32) -> AppResult<()> {
        let outcome = self.store.register(client_id, trip_id).await?;

        let error = match outcome {
            RegistrationOutcome::Registered => {
                tracing::info!(client_id, trip_id, "Client registered for trip");
                return Ok(());
            }
            RegistrationOutcome::ClientNotFound => AppError::NotFound("Client not found".to_string()),
            RegistrationOutcome::TripNotFound => AppError::NotFound("Trip not found".to_string()),
            RegistrationOutcome::TripFull { max_people } => {
                tracing::warn!(client_id, trip_id, max_people, "Trip is full");
                AppError::Validation("Maximum people reached".to_string())
            }
            RegistrationOutcome::AlreadyRegistered => {
                AppError::Validation("Client is already registered for this trip".to_string())
            }
        };

        Err(error)
    }

    /// Remove a client's registration for a trip
    pub async fn unregister(&self, client_id: i32, trip_id: i32) -> AppResult<()> {
        if !self.store.unregister(client_id, trip_id).await? {
            return Err(AppError::NotFound("Client not registered".to_string()));
        }
        tracing::info!(client_id, trip_id, "Registration deleted");
        Ok(())
    }
}
