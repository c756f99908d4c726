//! Repository layer for database operations

pub mod clients;
pub mod registrations;
pub mod trips;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use crate::{
    config::DatabaseConfig,
    error::AppResult,
    models::{ClientTrip, CreateClient, RegistrationDateFormat, RegistrationOutcome, TripCountryRow},
};

/// Storage operations the services depend on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TravelStore: Send + Sync {
    async fn client_exists(&self, client_id: i32) -> AppResult<bool>;

    /// Insert a client and return its new id
    async fn create_client(&self, client: &CreateClient) -> AppResult<i32>;

    async fn client_trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>>;

    /// Check and insert a registration as one atomic unit
    async fn register(&self, client_id: i32, trip_id: i32) -> AppResult<RegistrationOutcome>;

    /// Delete a registration; `false` if there was none
    async fn unregister(&self, client_id: i32, trip_id: i32) -> AppResult<bool>;

    /// Trip / country left join rows, ordered by trip id
    async fn trip_country_rows(&self) -> AppResult<Vec<TripCountryRow>>;

    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub clients: clients::ClientsRepository,
    pub registrations: registrations::RegistrationsRepository,
    pub trips: trips::TripsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>, date_format: RegistrationDateFormat) -> Self {
        Self {
            clients: clients::ClientsRepository::new(pool.clone(), date_format),
            registrations: registrations::RegistrationsRepository::new(pool.clone(), date_format),
            trips: trips::TripsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Open the connection pool described by `config` and apply migrations if enabled
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.url)
            .await?;

        tracing::info!("Connected to database");

        if config.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Database migrations completed");
        }

        Ok(Self::new(pool, config.registration_dates))
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl TravelStore for Repository {
    async fn client_exists(&self, client_id: i32) -> AppResult<bool> {
        self.clients.exists(client_id).await
    }

    async fn create_client(&self, client: &CreateClient) -> AppResult<i32> {
        self.clients.create(client).await
    }

    async fn client_trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>> {
        self.clients.trips(client_id).await
    }

    async fn register(&self, client_id: i32, trip_id: i32) -> AppResult<RegistrationOutcome> {
        self.registrations.register(client_id, trip_id).await
    }

    async fn unregister(&self, client_id: i32, trip_id: i32) -> AppResult<bool> {
        self.registrations.unregister(client_id, trip_id).await
    }

    async fn trip_country_rows(&self) -> AppResult<Vec<TripCountryRow>> {
        self.trips.with_country_rows().await
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
