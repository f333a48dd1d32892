//! Version/deployment gate
//!
//! Runs before the document loads. Stored data survives only when both the
//! schema version and the build id match the running build.

use super::{Storage, StorageError};
use crate::config::{BuildInfo, StorageKeys};

/// Result of running the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Stale or missing markers: every slot was wiped and the markers rewritten
    Cleared,
    /// Markers matched, storage untouched
    Kept,
}

impl GateOutcome {
    pub fn was_cleared(&self) -> bool {
        matches!(self, GateOutcome::Cleared)
    }
}

/// Markers the running build expects to find in storage
#[derive(Debug, Clone, Copy)]
pub struct VersionGate<'a> {
    keys: &'a StorageKeys,
    build: &'a BuildInfo,
}

impl<'a> VersionGate<'a> {
    pub fn new(keys: &'a StorageKeys, build: &'a BuildInfo) -> Self {
        Self { keys, build }
    }

    /// Compare the stored markers with the build, wiping and reseeding on
    /// mismatch. An absent marker counts as a mismatch.
    pub fn check<S: Storage>(&self, storage: &mut S) -> Result<GateOutcome, StorageError> {
        let (keys, build) = (self.keys, self.build);
        let stored_version = storage.get(&keys.version)?;
        let stored_build = storage.get(&keys.build)?;

        let version_matches = stored_version.as_deref() == Some(build.data_version.as_str());
        let build_matches = stored_build.as_deref() == Some(build.build_id.as_str());
        if version_matches && build_matches {
            return Ok(GateOutcome::Kept);
        }

        log::info!(
            "Stored data is stale (version {:?} -> {}, build {:?} -> {}), clearing",
            stored_version,
            build.data_version,
            stored_build,
            build.build_id
        );
        clear_slots(storage, keys)?;
        storage.set(&keys.version, &build.data_version)?;
        storage.set(&keys.build, &build.build_id)?;
        Ok(GateOutcome::Cleared)
    }
}

/// Remove every slot the showcase owns
pub fn clear_slots<S: Storage>(storage: &mut S, keys: &StorageKeys) -> Result<(), StorageError> {
    for key in keys.all() {
        storage.remove(key)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStorage;

    fn build() -> BuildInfo {
        BuildInfo::fixed("sha-1", "1.0.4")
    }

    fn check(storage: &mut MemoryStorage, keys: &StorageKeys, build: &BuildInfo) -> Result<GateOutcome, StorageError> {
        VersionGate::new(keys, build).check(storage)
    }

    fn seeded(version: Option<&str>, build_id: Option<&str>) -> MemoryStorage {
        let keys = StorageKeys::default();
        let mut storage = MemoryStorage::new();
        storage.insert(&keys.sections, "[]");
        storage.insert(&keys.sidebar, "true");
        if let Some(v) = version {
            storage.insert(&keys.version, v);
        }
        if let Some(b) = build_id {
            storage.insert(&keys.build, b);
        }
        storage
    }

    #[test]
    fn test_matching_markers_keep_storage_untouched() {
        let keys = StorageKeys::default();
        let mut storage = seeded(Some("1.0.4"), Some("sha-1"));
        let outcome = check(&mut storage, &keys, &build()).unwrap();
        assert_eq!(outcome, GateOutcome::Kept);
        assert_eq!(storage.writes(), 0);
        assert!(storage.contains(&keys.sections));
    }

    #[test]
    fn test_mismatch_clears_and_reseeds() {
        let keys = StorageKeys::default();
        let cases = [
            (Some("1.0.3"), Some("sha-1")),
            (Some("1.0.4"), Some("sha-0")),
            (None, Some("sha-1")),
            (Some("1.0.4"), None),
            (None, None),
        ];
        for (version, build_id) in cases {
            let mut storage = seeded(version, build_id);
            let outcome = check(&mut storage, &keys, &build()).unwrap();
            assert_eq!(outcome, GateOutcome::Cleared, "case {:?}/{:?}", version, build_id);
            assert!(!storage.contains(&keys.sections));
            assert!(!storage.contains(&keys.sidebar));
            assert_eq!(storage.get(&keys.version).unwrap().as_deref(), Some("1.0.4"));
            assert_eq!(storage.get(&keys.build).unwrap().as_deref(), Some("sha-1"));
        }
    }

    #[test]
    fn test_second_run_is_noop() {
        let keys = StorageKeys::default();
        let mut storage = seeded(None, None);
        assert!(check(&mut storage, &keys, &build()).unwrap().was_cleared());
        let writes = storage.writes();
        assert_eq!(check(&mut storage, &keys, &build()).unwrap(), GateOutcome::Kept);
        assert_eq!(storage.writes(), writes);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let keys = StorageKeys::default();
        let mut storage = MemoryStorage::failing(StorageError::Backend("denied".into()));
        assert!(check(&mut storage, &keys, &build()).is_err());

        let mut storage = MemoryStorage::failing(StorageError::Unavailable);
        assert_eq!(
            check(&mut storage, &keys, &build()),
            Err(StorageError::Unavailable)
        );
    }
}
