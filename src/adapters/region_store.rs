//! Region repository over any [`StoragePort`].
//!
//! Each region is one postcard-encoded record keyed by its id under the
//! `regions` namespace.  Replaces the dashboard's ad-hoc local region
//! cache with an explicit repository the admin panel owns.

use log::{info, warn};

use crate::app::ports::{Region, RegionRepository, StorageError, StoragePort};

const REGION_NAMESPACE: &str = "regions";
const MAX_REGION_BLOB: usize = 512;
const MAX_ID_LEN: usize = 64;

pub struct RegionStore<S: StoragePort> {
    storage: S,
}

impl<S: StoragePort> RegionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Give the backing storage back (e.g. to inspect it in tests).
    pub fn into_inner(self) -> S {
        self.storage
    }

    fn validate(region: &Region) -> Result<(), StorageError> {
        if region.id.is_empty() || region.id.len() > MAX_ID_LEN {
            return Err(StorageError::Invalid("region id must be 1-64 bytes"));
        }
        if !(-90.0..=90.0).contains(&region.latitude) {
            return Err(StorageError::Invalid("latitude out of range"));
        }
        if !(-180.0..=180.0).contains(&region.longitude) {
            return Err(StorageError::Invalid("longitude out of range"));
        }
        Ok(())
    }
}

impl<S: StoragePort> RegionRepository for RegionStore<S> {
    fn list(&self) -> Result<Vec<Region>, StorageError> {
        let mut regions = Vec::new();
        for id in self.storage.keys(REGION_NAMESPACE) {
            match self.get(&id) {
                Ok(Some(region)) => regions.push(region),
                Ok(None) => {}
                Err(StorageError::Corrupted) => warn!("Skipping corrupted region record {id}"),
                Err(StorageError::Full) => warn!("Skipping oversized region record {id}"),
                Err(e) => return Err(e),
            }
        }
        Ok(regions)
    }

    fn get(&self, id: &str) -> Result<Option<Region>, StorageError> {
        let mut buf = [0u8; MAX_REGION_BLOB];
        let len = match self.storage.read(REGION_NAMESPACE, id, &mut buf) {
            Ok(len) => len,
            Err(StorageError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        postcard::from_bytes(&buf[..len])
            .map(Some)
            .map_err(|_| StorageError::Corrupted)
    }

    fn save(&mut self, region: &Region) -> Result<(), StorageError> {
        Self::validate(region)?;
        let bytes = postcard::to_allocvec(region).map_err(|_| StorageError::IoError)?;
        if bytes.len() > MAX_REGION_BLOB {
            return Err(StorageError::Full);
        }
        self.storage.write(REGION_NAMESPACE, &region.id, &bytes)?;
        info!("Region saved: {} ({})", region.id, region.name);
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        if !self.storage.exists(REGION_NAMESPACE, id) {
            return Ok(false);
        }
        self.storage.delete(REGION_NAMESPACE, id)?;
        info!("Region deleted: {id}");
        Ok(true)
    }
}
