//! Data models for the trips server

pub mod client;
pub mod registration;
pub mod trip;

// Re-export commonly used types
pub use client::{CreateClient, CreatedClient};
pub use registration::{
    legacy_registration_dates, ClientTrip, LegacyDate, RegistrationDateFormat, RegistrationOutcome,
};
pub use trip::{TripCountryRow, TripWithCountries};
