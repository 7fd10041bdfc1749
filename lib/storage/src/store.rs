use listx_core::{Error, Listing, Result};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, info};

use crate::snapshot::read_snapshot;

/// Parsed snapshot plus the file state it was read from
struct CachedSnapshot {
    modified: SystemTime,
    len: u64,
    listings: Arc<Vec<Listing>>,
}

/// Serves the current snapshot to query handlers.
///
/// Every [`load`](SnapshotStore::load) reflects the file on disk. With caching
/// enabled the parsed dataset is reused until the file's modification time or
/// size changes; without it every call re-reads and re-parses the file.
pub struct SnapshotStore {
    path: PathBuf,
    cache_enabled: bool,
    cached: RwLock<Option<CachedSnapshot>>,
}

impl SnapshotStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            cache_enabled: true,
            cached: RwLock::new(None),
        }
    }

    /// A store that re-reads the snapshot on every load
    pub fn uncached<P: AsRef<Path>>(path: P) -> Self {
        Self {
            cache_enabled: false,
            ..Self::new(path)
        }
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn cache_enabled(&self) -> bool {
        self.cache_enabled
    }

    pub fn load(&self) -> Result<Arc<Vec<Listing>>> {
        if !self.cache_enabled {
            let listings = read_snapshot(&self.path)?;
            debug!("Loaded {} listings from {:?}", listings.len(), self.path);
            return Ok(Arc::new(listings));
        }

        let metadata = fs::metadata(&self.path)
            .map_err(|e| Error::Parse(format!("Failed to read {}: {}", self.path.display(), e)))?;
        let modified = metadata.modified()?;
        let len = metadata.len();

        if let Some(cached) = self.cached.read().as_ref() {
            if cached.modified == modified && cached.len == len {
                debug!("Snapshot cache hit: {} listings", cached.listings.len());
                return Ok(cached.listings.clone());
            }
        }

        let listings = Arc::new(read_snapshot(&self.path)?);
        info!("Loaded {} listings from {:?}", listings.len(), self.path);

        *self.cached.write() = Some(CachedSnapshot {
            modified,
            len,
            listings: listings.clone(),
        });
        Ok(listings)
    }

    #[cfg(test)]
    fn invalidate(&self) {
        *self.cached.write() = None;
    }
}
