//! In-memory `TravelStore` used to drive the router without a database

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use trips_server::{
    error::AppResult,
    models::{ClientTrip, CreateClient, RegistrationOutcome, TripCountryRow},
    repository::TravelStore,
};

#[derive(Clone)]
struct Trip {
    id: i32,
    name: String,
    max_people: i32,
    countries: Vec<String>,
}

#[derive(Clone)]
struct Registration {
    client_id: i32,
    trip_id: i32,
    registered_at: DateTime<Utc>,
    payment_date: Option<NaiveDate>,
}

#[derive(Default)]
struct Data {
    clients: Vec<(i32, CreateClient)>,
    trips: Vec<Trip>,
    registrations: Vec<Registration>,
}

#[derive(Default)]
pub struct MemoryStore {
    data: Mutex<Data>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trip(&self, id: i32, name: &str, max_people: i32, countries: &[&str]) {
        self.data.lock().unwrap().trips.push(Trip {
            id,
            name: name.to_string(),
            max_people,
            countries: countries.iter().map(|c| c.to_string()).collect(),
        });
    }

    pub fn registration_count(&self, trip_id: i32) -> usize {
        self.data
            .lock()
            .unwrap()
            .registrations
            .iter()
            .filter(|r| r.trip_id == trip_id)
            .count()
    }

    pub fn is_registered(&self, client_id: i32, trip_id: i32) -> bool {
        self.data
            .lock()
            .unwrap()
            .registrations
            .iter()
            .any(|r| r.client_id == client_id && r.trip_id == trip_id)
    }

    fn trip_dates() -> (DateTime<Utc>, DateTime<Utc>) {
        (
            Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 15, 0, 0, 0).unwrap(),
        )
    }
}

#[async_trait]
impl TravelStore for MemoryStore {
    async fn client_exists(&self, client_id: i32) -> AppResult<bool> {
        Ok(self.data.lock().unwrap().clients.iter().any(|(id, _)| *id == client_id))
    }

    async fn create_client(&self, client: &CreateClient) -> AppResult<i32> {
        let mut data = self.data.lock().unwrap();
        let id = data.clients.len() as i32 + 1;
        data.clients.push((id, client.clone()));
        Ok(id)
    }

    async fn client_trips(&self, client_id: i32) -> AppResult<Vec<ClientTrip>> {
        let data = self.data.lock().unwrap();
        let (date_from, date_to) = Self::trip_dates();

        let trips = data
            .registrations
            .iter()
            .filter(|r| r.client_id == client_id)
            .filter_map(|r| {
                let trip = data.trips.iter().find(|t| t.id == r.trip_id)?;
                Some(ClientTrip {
                    id_trip: trip.id,
                    name: trip.name.clone(),
                    description: format!("{} description", trip.name),
                    date_from,
                    date_to,
                    registered_at: Some(r.registered_at),
                    payment_date: r.payment_date,
                })
            })
            .collect();

        Ok(trips)
    }

    async fn register(&self, client_id: i32, trip_id: i32) -> AppResult<RegistrationOutcome> {
        let mut data = self.data.lock().unwrap();

        if !data.clients.iter().any(|(id, _)| *id == client_id) {
            return Ok(RegistrationOutcome::ClientNotFound);
        }
        let Some(max_people) = data.trips.iter().find(|t| t.id == trip_id).map(|t| t.max_people) else {
            return Ok(RegistrationOutcome::TripNotFound);
        };
        let registered = data.registrations.iter().filter(|r| r.trip_id == trip_id).count();
        if registered as i32 >= max_people {
            return Ok(RegistrationOutcome::TripFull { max_people });
        }
        if data
            .registrations
            .iter()
            .any(|r| r.client_id == client_id && r.trip_id == trip_id)
        {
            return Ok(RegistrationOutcome::AlreadyRegistered);
        }

        data.registrations.push(Registration {
            client_id,
            trip_id,
            registered_at: Utc::now(),
            payment_date: None,
        });
        Ok(RegistrationOutcome::Registered)
    }

    async fn unregister(&self, client_id: i32, trip_id: i32) -> AppResult<bool> {
        let mut data = self.data.lock().unwrap();
        let before = data.registrations.len();
        data.registrations
            .retain(|r| !(r.client_id == client_id && r.trip_id == trip_id));
        Ok(data.registrations.len() < before)
    }

    async fn trip_country_rows(&self) -> AppResult<Vec<TripCountryRow>> {
        let data = self.data.lock().unwrap();
        let (date_from, date_to) = Self::trip_dates();

        let mut trips = data.trips.clone();
        trips.sort_by_key(|t| t.id);

        let mut rows = Vec::new();
        for trip in trips {
            let row = |country_name: Option<String>| TripCountryRow {
                id_trip: trip.id,
                name: trip.name.clone(),
                description: format!("{} description", trip.name),
                date_from,
                date_to,
                max_people: trip.max_people,
                country_name,
            };
            if trip.countries.is_empty() {
                rows.push(row(None));
            } else {
                rows.extend(trip.countries.iter().cloned().map(|c| row(Some(c))));
            }
        }
        Ok(rows)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
