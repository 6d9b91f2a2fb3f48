// File: ./src/model/seed.rs
// The static trip document bundled with the application.
use crate::model::item::Coordinates;
use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUNDLED_SEED: &str = include_str!("../../data/itinerary.json");

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayInput {
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripDates {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripInfo {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub travelers: Vec<String>,
    #[serde(default)]
    pub dates: TripDates,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub check_in: String,
    #[serde(default)]
    pub check_out: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub coords: Option<Coordinates>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlightLeg {
    pub flight_number: String,
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub depart_local: String,
    #[serde(default)]
    pub arrive_local: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Flights {
    #[serde(default)]
    pub confirmation_code: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub outbound: Vec<FlightLeg>,
    #[serde(default, rename = "return")]
    pub return_legs: Vec<FlightLeg>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reservation {
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub restaurant: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub party_size: u32,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub confirmation_number: String,
    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_name: String,
    #[serde(default)]
    pub purchase_date: String,
    #[serde(default)]
    pub total_paid_usd: Option<f64>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub valid_days: u32,
    #[serde(default)]
    pub confirmation_number: String,
    #[serde(default)]
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlaceOfInterest {
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub reservation_link: Option<String>,
    pub instagram: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image_url: Option<String>,
}

impl PlaceOfInterest {
    pub fn coords(&self) -> Option<Coordinates> {
        Some(Coordinates {
            lat: self.latitude?,
            lng: self.longitude?,
            label: Some(self.name.clone()),
        })
    }
}

/// Full seed document. Every section except `itinerary` is informational.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripData {
    #[serde(default)]
    pub trip: TripInfo,
    #[serde(default)]
    pub hotel: Hotel,
    #[serde(default)]
    pub flights: Option<Flights>,
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub places_of_interest: Vec<PlaceOfInterest>,
    #[serde(default)]
    pub itinerary: IndexMap<String, DayInput>,
}

impl TripData {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse trip seed document")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file '{}'", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid seed file '{}'", path.display()))
    }

    /// The trip compiled into the binary.
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_SEED)
    }
}
