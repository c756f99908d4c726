//! Client registrations (client_trip rows) and their date handling

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// How `client_trip.registered_at` and `client_trip.payment_date` are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationDateFormat {
    /// TIMESTAMPTZ / DATE columns
    #[default]
    Timestamp,
    /// INTEGER columns holding YYYYMMDD. Compatibility with older databases only.
    LegacyInteger,
}

/// A date decoded from a legacy YYYYMMDD integer column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegacyDate {
    Date(NaiveDate),
    /// The stored value is not an eight-digit calendar date
    Unparseable(i32),
}

impl LegacyDate {
    pub fn decode(raw: i32) -> Self {
        if !(10_000_000..=99_999_999).contains(&raw) {
            return LegacyDate::Unparseable(raw);
        }

        let (year, month, day) = (raw / 10_000, (raw / 100 % 100) as u32, (raw % 100) as u32);
        NaiveDate::from_ymd_opt(year, month, day)
            .map(LegacyDate::Date)
            .unwrap_or(LegacyDate::Unparseable(raw))
    }

    pub fn encode(date: NaiveDate) -> i32 {
        date.year() * 10_000 + date.month() as i32 * 100 + date.day() as i32
    }

    /// The decoded date, or `None` (with a warning) when unparseable
    pub fn into_date(self, column: &str) -> Option<NaiveDate> {
        match self {
            LegacyDate::Date(date) => Some(date),
            LegacyDate::Unparseable(raw) => {
                tracing::warn!("Unparseable legacy {} value: {}", column, raw);
                None
            }
        }
    }
}

/// Decode the legacy integer pair of a `client_trip` row.
///
/// `registered_at` becomes midnight UTC of its date. Unparseable values and a
/// NULL `payment_date` come back as `None`.
pub fn legacy_registration_dates(
    registered_at: i32,
    payment_date: Option<i32>,
) -> (Option<DateTime<Utc>>, Option<NaiveDate>) {
    let registered_at = LegacyDate::decode(registered_at)
        .into_date("registered_at")
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc());
    let payment_date =
        payment_date.and_then(|raw| LegacyDate::decode(raw).into_date("payment_date"));
    (registered_at, payment_date)
}

/// A trip the client is registered for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientTrip {
    pub id_trip: i32,
    pub name: String,
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    /// Null only for legacy rows whose stored value could not be decoded
    pub registered_at: Option<DateTime<Utc>>,
    /// Null when unpaid, or for undecodable legacy rows
    pub payment_date: Option<NaiveDate>,
}

/// Result of an attempt to register a client for a trip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationOutcome {
    Registered,
    ClientNotFound,
    TripNotFound,
    TripFull { max_people: i32 },
    AlreadyRegistered,
}
