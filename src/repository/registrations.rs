//! Registrations (client_trip) repository

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{LegacyDate, RegistrationDateFormat, RegistrationOutcome},
};

#[derive(Clone)]
pub struct RegistrationsRepository {
    pool: Pool<Postgres>,
    date_format: RegistrationDateFormat,
}

impl RegistrationsRepository {
    pub fn new(pool: Pool<Postgres>, date_format: RegistrationDateFormat) -> Self {
        Self { pool, date_format }
    }

    /// Register a client for a trip.
    ///
    /// Runs in one transaction holding a row lock on the trip, so concurrent
    /// registrations for the same trip are serialized and cannot exceed
    /// `max_people`. Every early return drops the transaction, rolling it back.
    pub async fn register(&self, client_id: i32, trip_id: i32) -> AppResult<RegistrationOutcome> {
        let mut tx = self.pool.begin().await?;

        let client_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM client WHERE id_client = $1)")
                .bind(client_id)
                .fetch_one(&mut *tx)
                .await?;
        if !client_exists {
            return Ok(RegistrationOutcome::ClientNotFound);
        }

        let max_people: Option<i32> =
            sqlx::query_scalar("SELECT max_people FROM trip WHERE id_trip = $1 FOR UPDATE")
                .bind(trip_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(max_people) = max_people else {
            return Ok(RegistrationOutcome::TripNotFound);
        };

        let registered: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM client_trip WHERE id_trip = $1")
            .bind(trip_id)
            .fetch_one(&mut *tx)
            .await?;
        if registered >= max_people as i64 {
            return Ok(RegistrationOutcome::TripFull { max_people });
        }

        let already_registered: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM client_trip WHERE id_client = $1 AND id_trip = $2)",
        )
        .bind(client_id)
        .bind(trip_id)
        .fetch_one(&mut *tx)
        .await?;
        if already_registered {
            return Ok(RegistrationOutcome::AlreadyRegistered);
        }

        let insert = sqlx::query(
            "INSERT INTO client_trip (id_client, id_trip, registered_at) VALUES ($1, $2, $3)",
        )
        .bind(client_id)
        .bind(trip_id);

        let now = Utc::now();
        let insert = match self.date_format {
            RegistrationDateFormat::Timestamp => insert.bind(now),
            RegistrationDateFormat::LegacyInteger => insert.bind(LegacyDate::encode(now.date_naive())),
        };
        insert.execute(&mut *tx).await?;

        tx.commit().await?;

        Ok(RegistrationOutcome::Registered)
    }

    /// Remove a registration
    pub async fn unregister(&self, client_id: i32, trip_id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM client_trip WHERE id_client = $1 AND id_trip = $2")
            .bind(client_id)
            .bind(trip_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of clients registered for a trip
    pub async fn count_for_trip(&self, trip_id: i32) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM client_trip WHERE id_trip = $1")
            .bind(trip_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
