//! Clients repository for database operations

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use crate::{
    error::AppResult,
    models::{legacy_registration_dates, ClientTrip, CreateClient, RegistrationDateFormat},
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: Pool<Postgres>,
    date_format: RegistrationDateFormat,
}

impl ClientsRepository {
    pub fn new(pool: Pool<Postgres>, date_format: RegistrationDateFormat) -> Self {
        Self { pool, date_format }
    }

    /// Check whether a client exists
    pub async fn exists(&self, client_id: i32) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM client WHERE id_client = $1)")
                .bind(client_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Create a new client
    pub async fn create(&self, client: &CreateClient) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO client (first_name, last_name, email, telephone, pesel)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id_client
            "#,
        )
        .bind(&client.first_name)
        .bind(&client.last_name)
        .bind(&client.email)
        .bind(&client.telephone)
        .bind(&client.pesel)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    /// Get the trips a client is registered for
    pub async fn trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>> {
        let rows = sqlx::query(
            r#"
            SELECT t.id_trip, t.name, t.description, t.date_from, t.date_to,
                   ct.registered_at, ct.payment_date
            FROM client_trip ct
            JOIN trip t ON t.id_trip = ct.id_trip
            WHERE ct.id_client = $1
            ORDER BY ct.registered_at, t.id_trip
            "#,
        )
        .bind(client_id)
        .fetch_all(&self.pool)
        .await?;

        let trips = rows
            .iter()
            .map(|row| self.client_trip_from_row(row))
            .collect::<Result<Vec<_>, sqlx::Error>>()?;

        Ok(trips)
    }

    fn client_trip_from_row(&self, row: &PgRow) -> Result<ClientTrip, sqlx::Error> {
        let (registered_at, payment_date) = match self.date_format {
            RegistrationDateFormat::Timestamp => (
                Some(row.try_get::<DateTime<Utc>, _>("registered_at")?),
                row.try_get::<Option<NaiveDate>, _>("payment_date")?,
            ),
            RegistrationDateFormat::LegacyInteger => legacy_registration_dates(
                row.try_get("registered_at")?,
                row.try_get("payment_date")?,
            ),
        };

        Ok(ClientTrip {
            id_trip: row.try_get("id_trip")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            date_from: row.try_get("date_from")?,
            date_to: row.try_get("date_to")?,
            registered_at,
            payment_date,
        })
    }
}
