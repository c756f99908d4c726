//! Trips repository for database operations

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::TripCountryRow};

#[derive(Clone)]
pub struct TripsRepository {
    pool: Pool<Postgres>,
}

impl TripsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Every trip joined with its countries; trips without countries yield one row
    pub async fn with_country_rows(&self) -> AppResult<Vec<TripCountryRow>> {
        let rows = sqlx::query_as::<_, TripCountryRow>(
            r#"
            SELECT t.id_trip, t.name, t.description, t.date_from, t.date_to, t.max_people,
                   c.name AS country_name
            FROM trip t
            LEFT JOIN country_trip ct ON ct.id_trip = t.id_trip
            LEFT JOIN country c ON c.id_country = ct.id_country
            ORDER BY t.id_trip, c.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
