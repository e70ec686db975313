use crate::ids::{CatchReportId, ContactId, FuelReportId, RouteId, SpotId};
use crate::time::EpochMillis;
use serde::{Deserialize, Serialize};

/// A fishing spot the user has saved on the map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSpot {
    pub id: SpotId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub species_caught: Vec<String>,
    pub created_at_ms: EpochMillis,
    pub updated_at_ms: EpochMillis,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    pub waypoints: Vec<Waypoint>,
    pub created_at_ms: EpochMillis,
    pub updated_at_ms: EpochMillis,
}

/// Derived trip estimate for a route; never stored, recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteSummary {
    pub route_id: RouteId,
    pub leg_count: usize,
    pub distance_km: f64,
    pub duration_hours: f64,
    pub fuel_litres: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatchReport {
    pub id: CatchReportId,
    pub reported_at_ms: EpochMillis,
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: String,
    pub species: Vec<String>,
    pub quantity_kg: f64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub weather: Option<String>,
    #[serde(default)]
    pub bait: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelReport {
    pub id: FuelReportId,
    pub reported_at_ms: EpochMillis,
    pub litres: f64,
    pub cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
}

/// An active distress beacon. At most one is live at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SosBeacon {
    pub latitude: f64,
    pub longitude: f64,
    pub started_at_ms: EpochMillis,
}
