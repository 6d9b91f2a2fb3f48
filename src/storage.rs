// Persists the edited itinerary to a local JSON file.
//
// ⚠️ VERSION BUMP REQUIRED:
// Changes to DayRecord or Activity serialization require incrementing
// LOCAL_STORAGE_VERSION below and adding a step to `migrate_to_current`.
use crate::context::AppContext;
use crate::model::DayRecord;
use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Version history:
// - v1: Bare JSON array of days (what the browser build kept in localStorage)
// - v2: Versioned envelope
const LOCAL_STORAGE_VERSION: u32 = 2;

#[derive(Serialize, Deserialize)]
struct LocalStorageData {
    #[serde(default)]
    version: u32,
    days: Vec<DayRecord>,
}

pub struct LocalStorage;

impl LocalStorage {
    /// Sidecar lock file next to the data file.
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file {:?}", lock_path))?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Decodes either storage format.
    fn decode(json: &str) -> Result<Vec<DayRecord>> {
        if let Ok(data) = serde_json::from_str::<LocalStorageData>(json) {
            return Self::migrate_to_current(data.version, json);
        }
        // No envelope: the v1 bare array.
        serde_json::from_str::<Vec<DayRecord>>(json)
            .map_err(|e| anyhow::anyhow!("Unreadable itinerary data: {}", e))
    }

    fn migrate_to_current(old_version: u32, json: &str) -> Result<Vec<DayRecord>> {
        if old_version > LOCAL_STORAGE_VERSION {
            return Err(anyhow::anyhow!(
                "Itinerary data version {} is newer than supported version {}. Please upgrade tripdeck.",
                old_version,
                LOCAL_STORAGE_VERSION
            ));
        }
        if old_version != LOCAL_STORAGE_VERSION {
            log::info!(
                "Migrating itinerary data from v{} to v{}",
                old_version,
                LOCAL_STORAGE_VERSION
            );
        }
        let data: LocalStorageData = serde_json::from_str(json)?;
        Ok(data.days)
    }

    /// Loads persisted days from an explicit path.
    ///
    /// `Ok(None)` when nothing has been saved yet. An `Err` means the file
    /// exists but could not be read or decoded; callers decide how to recover.
    pub fn load_from_path(path: &Path) -> Result<Option<Vec<DayRecord>>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::with_lock(path, || {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            Ok(Some(Self::decode(&json)?))
        })
    }

    pub fn save_to_path(path: &Path, days: &[DayRecord]) -> Result<()> {
        Self::with_lock(path, || {
            let data = LocalStorageData {
                version: LOCAL_STORAGE_VERSION,
                days: days.to_vec(),
            };
            let json = serde_json::to_string_pretty(&data)?;
            Self::atomic_write(path, json)?;
            Ok(())
        })
    }

    pub fn load_days(ctx: &dyn AppContext) -> Result<Option<Vec<DayRecord>>> {
        match ctx.get_days_path() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(None),
        }
    }

    pub fn save_days(ctx: &dyn AppContext, days: &[DayRecord]) -> Result<()> {
        let path = ctx
            .get_days_path()
            .ok_or_else(|| anyhow::anyhow!("No data directory available"))?;
        Self::save_to_path(&path, days)
    }

    /// Copies an unreadable data file aside so the next save cannot destroy it.
    pub fn backup_unreadable(ctx: &dyn AppContext) -> Result<Option<PathBuf>> {
        let Some(path) = ctx.get_days_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        let backup = path.with_extension("json.bak");
        fs::copy(&path, &backup)
            .with_context(|| format!("Failed to back up {:?} to {:?}", path, backup))?;
        Ok(Some(backup))
    }
}
