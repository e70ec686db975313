//! Repository traits for the records the device owns: saved spots,
//! routes, catch/fuel reports, and emergency contacts. Listing is
//! insertion-ordered; upsert replaces in place; delete is idempotent.

use async_trait::async_trait;
use kadal_core::{
    CatchReport, CatchReportId, ContactId, EmergencyContact, FuelReport, FuelReportId, Route,
    RouteId, SavedSpot, SpotId,
};
use std::fmt;

#[derive(Debug, Clone)]
pub struct StorageError {
    pub message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StorageError {}

#[async_trait]
pub trait SpotRepository: Send + Sync {
    async fn get(&self, id: SpotId) -> Result<Option<SavedSpot>, StorageError>;
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<SavedSpot>, StorageError>;
    async fn upsert(&self, spot: SavedSpot) -> Result<(), StorageError>;
    async fn delete(&self, id: SpotId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait RouteRepository: Send + Sync {
    async fn get(&self, id: RouteId) -> Result<Option<Route>, StorageError>;
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<Route>, StorageError>;
    async fn upsert(&self, route: Route) -> Result<(), StorageError>;
    async fn delete(&self, id: RouteId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait CatchReportRepository: Send + Sync {
    async fn get(&self, id: CatchReportId) -> Result<Option<CatchReport>, StorageError>;
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<CatchReport>, StorageError>;
    async fn upsert(&self, report: CatchReport) -> Result<(), StorageError>;
    async fn delete(&self, id: CatchReportId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait FuelReportRepository: Send + Sync {
    async fn get(&self, id: FuelReportId) -> Result<Option<FuelReport>, StorageError>;
    async fn list(&self, limit: usize, offset: usize) -> Result<Vec<FuelReport>, StorageError>;
    async fn upsert(&self, report: FuelReport) -> Result<(), StorageError>;
    async fn delete(&self, id: FuelReportId) -> Result<(), StorageError>;
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn get(&self, id: ContactId) -> Result<Option<EmergencyContact>, StorageError>;
    async fn list(&self, limit: usize, offset: usize)
        -> Result<Vec<EmergencyContact>, StorageError>;
    async fn upsert(&self, contact: EmergencyContact) -> Result<(), StorageError>;
    async fn delete(&self, id: ContactId) -> Result<(), StorageError>;
}
