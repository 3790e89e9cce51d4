//! Integration tests for the admin-panel region repository.

use aqscore::adapters::mem_storage::MemStorage;
use aqscore::adapters::region_store::RegionStore;
use aqscore::app::ports::{Region, RegionRepository, StorageError, StoragePort};

fn region(id: &str, lat: f64, lng: f64) -> Region {
    Region {
        id: id.to_string(),
        name: id.replace('_', " "),
        latitude: lat,
        longitude: lng,
    }
}

#[test]
fn add_and_delete_locations() {
    let mut repo = RegionStore::new(MemStorage::new());
    repo.save(&region("dharwad", 15.4589, 75.0078)).unwrap();
    repo.save(&region("hubli_central", 15.3647, 75.124)).unwrap();

    let ids: Vec<String> = repo.list().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["dharwad", "hubli_central"]);

    assert!(repo.delete("dharwad").unwrap());
    let ids: Vec<String> = repo.list().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["hubli_central"]);
}

#[test]
fn regions_do_not_leak_into_other_namespaces() {
    let mut repo = RegionStore::new(MemStorage::new());
    repo.save(&region("belgaum", 15.8497, 74.4977)).unwrap();
    let storage = repo.into_inner();
    assert!(storage.keys("settings").is_empty());
    assert_eq!(storage.keys("regions"), vec!["belgaum".to_string()]);
}

#[test]
fn oversized_id_rejected() {
    let mut repo = RegionStore::new(MemStorage::new());
    let long_id = "x".repeat(65);
    assert!(matches!(
        repo.save(&region(&long_id, 0.0, 0.0)),
        Err(StorageError::Invalid(_))
    ));
}
