//! Trip model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One row of the trip / country left join
#[derive(Debug, Clone, FromRow)]
pub struct TripCountryRow {
    pub id_trip: i32,
    pub name: String,
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub max_people: i32,
    /// Null for trips without any country
    pub country_name: Option<String>,
}

/// Trip with the names of the countries it visits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripWithCountries {
    pub id_trip: i32,
    pub name: String,
    pub description: String,
    pub date_from: DateTime<Utc>,
    pub date_to: DateTime<Utc>,
    pub max_people: i32,
    pub countries: Vec<String>,
}

impl From<TripCountryRow> for TripWithCountries {
    fn from(row: TripCountryRow) -> Self {
        TripWithCountries {
            id_trip: row.id_trip,
            name: row.name,
            description: row.description,
            date_from: row.date_from,
            date_to: row.date_to,
            max_people: row.max_people,
            countries: row.country_name.into_iter().collect(),
        }
    }
}

/// Fold join rows ordered by trip id into one record per trip.
///
/// Rows of the same trip must be adjacent; the first row of a trip supplies
/// the trip-level fields.
pub fn group_trip_rows(rows: impl IntoIterator<Item = TripCountryRow>) -> Vec<TripWithCountries> {
    let mut trips: Vec<TripWithCountries> = Vec::new();

    for row in rows {
        match trips.last_mut() {
            Some(trip) if trip.id_trip == row.id_trip => {
                trip.countries.extend(row.country_name);
            }
            _ => trips.push(row.into()),
        }
    }

    trips
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn row(id_trip: i32, country: Option<&str>) -> TripCountryRow {
        TripCountryRow {
            id_trip,
            name: format!("Trip {}", id_trip),
            description: "Sightseeing".to_string(),
            date_from: Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
            date_to: Utc.with_ymd_and_hms(2025, 5, 10, 0, 0, 0).unwrap(),
            max_people: 20,
            country_name: country.map(str::to_string),
        }
    }

    #[test]
    fn test_trip_without_countries_appears_once() {
        let trips = group_trip_rows(vec![row(1, None)]);
        assert_eq!(trips.len(), 1);
        assert!(trips[0].countries.is_empty());
    }

    #[test]
    fn test_countries_are_merged_into_one_record() {
        let trips = group_trip_rows(vec![
            row(1, Some("Poland")),
            row(1, Some("Germany")),
            row(2, None),
            row(3, Some("Italy")),
        ]);

        assert_eq!(trips.len(), 3);
        assert_eq!(trips[0].countries, vec!["Poland", "Germany"]);
        assert!(trips[1].countries.is_empty());
        assert_eq!(trips[2].countries, vec!["Italy"]);
        assert_eq!(
            trips.iter().map(|t| t.id_trip).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(group_trip_rows(Vec::new()).is_empty());
    }

    #[test]
    fn test_serialized_field_names() {
        let trip: TripWithCountries = row(7, Some("Spain")).into();
        let json = serde_json::to_value(&trip).unwrap();
        assert_eq!(json["idTrip"], 7);
        assert_eq!(json["maxPeople"], 20);
        assert_eq!(json["countries"][0], "Spain");
    }
}
