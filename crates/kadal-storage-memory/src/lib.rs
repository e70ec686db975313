//! In-memory record store. The durable copy of these records lives on
//! the device; the service keeps only a working set, so nothing here
//! survives a restart.

use async_trait::async_trait;
use kadal_core::{
    CatchReport, CatchReportId, ContactId, EmergencyContact, FuelReport, FuelReportId, Route,
    RouteId, SavedSpot, SpotId,
};
use kadal_storage::{
    CatchReportRepository, ContactRepository, FuelReportRepository, RouteRepository,
    SpotRepository, StorageError,
};
use std::sync::{Mutex, PoisonError};

const DEFAULT_CONTACTS: [(&str, &str); 3] = [
    ("Coast Guard", "1554"),
    ("Marine Rescue", "1093"),
    ("Medical Emergency", "108"),
];

#[derive(Debug, Default)]
pub struct MemoryStore {
    spots: Mutex<Vec<SavedSpot>>,
    routes: Mutex<Vec<Route>>,
    catch_reports: Mutex<Vec<CatchReport>>,
    fuel_reports: Mutex<Vec<FuelReport>>,
    contacts: Mutex<Vec<EmergencyContact>>,
}

impl MemoryStore {
    /// Fresh store seeded with the standard emergency numbers.
    pub fn new() -> Self {
        let store = Self::default();
        {
            let mut contacts = store
                .contacts
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            for (name, phone) in DEFAULT_CONTACTS {
                contacts.push(EmergencyContact {
                    id: ContactId::new(),
                    name: name.to_string(),
                    phone: phone.to_string(),
                });
            }
        }
        store
    }
}

fn poisoned<T>(_: PoisonError<T>) -> StorageError {
    StorageError::new("store mutex poisoned")
}

fn page<T: Clone>(records: &[T], limit: usize, offset: usize) -> Vec<T> {
    records.iter().skip(offset).take(limit).cloned().collect()
}

macro_rules! memory_repository {
    ($trait_name:ident, $record:ty, $id:ty, $field:ident) => {
        #[async_trait]
        impl $trait_name for MemoryStore {
            async fn get(&self, id: $id) -> Result<Option<$record>, StorageError> {
                let records = self.$field.lock().map_err(poisoned)?;
                Ok(records.iter().find(|record| record.id == id).cloned())
            }

            async fn list(
                &self,
                limit: usize,
                offset: usize,
            ) -> Result<Vec<$record>, StorageError> {
                let records = self.$field.lock().map_err(poisoned)?;
                Ok(page(&records, limit, offset))
            }

            async fn upsert(&self, record: $record) -> Result<(), StorageError> {
                let mut records = self.$field.lock().map_err(poisoned)?;
                if let Some(existing) =
                    records.iter_mut().find(|existing| existing.id == record.id)
                {
                    *existing = record;
                } else {
                    records.push(record);
                }
                Ok(())
            }

            async fn delete(&self, id: $id) -> Result<(), StorageError> {
                let mut records = self.$field.lock().map_err(poisoned)?;
                records.retain(|record| record.id != id);
                Ok(())
            }
        }
    };
}

memory_repository!(SpotRepository, SavedSpot, SpotId, spots);
memory_repository!(RouteRepository, Route, RouteId, routes);
memory_repository!(CatchReportRepository, CatchReport, CatchReportId, catch_reports);
memory_repository!(FuelReportRepository, FuelReport, FuelReportId, fuel_reports);
memory_repository!(ContactRepository, EmergencyContact, ContactId, contacts);

#[cfg(test)]
mod tests {
    use super::*;
    use kadal_core::now_epoch_millis;

    fn spot(name: &str) -> SavedSpot {
        SavedSpot {
            id: SpotId::new(),
            name: name.to_string(),
            latitude: 8.1,
            longitude: 77.5,
            notes: String::new(),
            species_caught: Vec::new(),
            created_at_ms: now_epoch_millis(),
            updated_at_ms: now_epoch_millis(),
        }
    }

    #[tokio::test]
    async fn upsert_then_get_round_trips() {
        let store = MemoryStore::new();
        let reef = spot("Reef ledge");
        SpotRepository::upsert(&store, reef.clone()).await.unwrap();
        let fetched = SpotRepository::get(&store, reef.id).await.unwrap();
        assert_eq!(fetched.unwrap().name, "Reef ledge");
    }

    #[tokio::test]
    async fn listing_preserves_insertion_order_and_pages() {
        let store = MemoryStore::new();
        for name in ["A", "B", "C"] {
            SpotRepository::upsert(&store, spot(name)).await.unwrap();
        }
        let all = SpotRepository::list(&store, 100, 0).await.unwrap();
        assert_eq!(
            all.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        let tail = SpotRepository::list(&store, 100, 1).await.unwrap();
        assert_eq!(tail.len(), 2);
        assert_eq!(tail[0].name, "B");
    }

    #[tokio::test]
    async fn upsert_replaces_in_place() {
        let store = MemoryStore::new();
        let mut reef = spot("Reef ledge");
        SpotRepository::upsert(&store, reef.clone()).await.unwrap();
        SpotRepository::upsert(&store, spot("Sandbar")).await.unwrap();
        reef.name = "Reef ledge (deep)".to_string();
        SpotRepository::upsert(&store, reef.clone()).await.unwrap();
        let all = SpotRepository::list(&store, 100, 0).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Reef ledge (deep)");
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        let reef = spot("Reef ledge");
        SpotRepository::upsert(&store, reef.clone()).await.unwrap();
        SpotRepository::delete(&store, reef.id).await.unwrap();
        SpotRepository::delete(&store, reef.id).await.unwrap();
        assert!(SpotRepository::get(&store, reef.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn standard_emergency_numbers_are_seeded() {
        let store = MemoryStore::new();
        let contacts = ContactRepository::list(&store, 100, 0).await.unwrap();
        let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Coast Guard", "Marine Rescue", "Medical Emergency"]);
        let coast_guard = contacts.iter().find(|c| c.name == "Coast Guard").unwrap();
        assert_eq!(coast_guard.phone, "1554");
    }
}
