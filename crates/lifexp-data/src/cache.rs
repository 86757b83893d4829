//! Process-lifetime dataset cache.
//!
//! The file is parsed on the first `get()` and never again; every later call
//! hands out the same `Arc<Dataset>`. Concurrent first calls wait on one
//! parse instead of each reading the file. There is no eviction.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Instant;

use chrono::{DateTime, Utc};
use lifexp_common::Result;
use tracing::info;

use crate::loader::load_csv;
use crate::record::Dataset;

#[derive(Debug)]
struct Loaded {
    dataset: Arc<Dataset>,
    loaded_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct DatasetCache {
    path: PathBuf,
    cell: OnceLock<Loaded>,
    /// Held while parsing so only one caller reads the file.
    load_lock: Mutex<()>,
    #[cfg(test)]
    reads: std::sync::atomic::AtomicUsize,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceLock::new(),
            load_lock: Mutex::new(()),
            #[cfg(test)]
            reads: Default::default(),
        }
    }

    /// Build a cache that is already populated. Nothing is read from disk.
    pub fn preloaded(dataset: Dataset) -> Self {
        let cache = Self::new(PathBuf::new());
        let _ = cache.cell.set(Loaded {
            dataset: Arc::new(dataset),
            loaded_at: Utc::now(),
        });
        cache
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the dataset, reading the file only on the first call.
    pub fn get(&self) -> Result<Arc<Dataset>> {
        if let Some(loaded) = self.cell.get() {
            return Ok(Arc::clone(&loaded.dataset));
        }

        // A panic while loading leaves the cell empty, so a poisoned lock is safe to reuse.
        let _guard = self.load_lock.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(loaded) = self.cell.get() {
            return Ok(Arc::clone(&loaded.dataset));
        }

        let started = Instant::now();
        #[cfg(test)]
        self.reads.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let dataset = load_csv(&self.path)?;
        info!(
            "Loaded {} records ({} continents) from {:?} in {:?}",
            dataset.len(),
            dataset.continents().len(),
            self.path,
            started.elapsed()
        );

        let loaded = self.cell.get_or_init(|| Loaded {
            dataset: Arc::new(dataset),
            loaded_at: Utc::now(),
        });
        Ok(Arc::clone(&loaded.dataset))
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.cell.get().map(|l| l.loaded_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifexp_test_utils::fixtures::{write_csv, SAMPLE_CSV};

    #[test]
    fn test_second_get_is_a_cache_hit() {
        let file = write_csv(SAMPLE_CSV);
        let cache = DatasetCache::new(file.path());
        assert!(cache.loaded_at().is_none());

        let first = cache.get().unwrap();
        let loaded_at = cache.loaded_at().unwrap();

        // The file is gone; a re-read would fail.
        let path = file.path().to_path_buf();
        drop(file);
        assert!(!path.exists());

        let second = cache.get().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(cache.loaded_at(), Some(loaded_at));
    }

    #[test]
    fn test_failed_load_is_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wdi.csv");
        let cache = DatasetCache::new(&path);
        assert!(cache.get().is_err());
        assert!(cache.loaded_at().is_none());

        std::fs::write(&path, SAMPLE_CSV).unwrap();
        assert_eq!(cache.get().unwrap().len(), 12);
    }

    #[test]
    fn test_preloaded() {
        let cache = DatasetCache::preloaded(Dataset::default());
        assert!(cache.loaded_at().is_some());
        assert!(cache.get().unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_first_calls_share_one_load() {
        let file = write_csv(SAMPLE_CSV);
        let cache = DatasetCache::new(file.path());
        let barrier = std::sync::Barrier::new(8);

        let datasets: Vec<Arc<Dataset>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        barrier.wait();
                        cache.get().unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(cache.reads.load(std::sync::atomic::Ordering::SeqCst), 1);
        for dataset in &datasets {
            assert!(Arc::ptr_eq(dataset, &datasets[0]));
        }
    }
}
