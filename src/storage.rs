use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Primary slot holding the serialized task collection.
pub const TASKS_KEY: &str = "tasks";
/// Snapshot slot written by "save to cloud".
pub const CLOUD_KEY: &str = "cloud";
/// Slot holding the timestamp of the last cloud save.
pub const LAST_SYNC_KEY: &str = "last_sync";

/// The persistent key-value collaborator: string-keyed slots holding
/// opaque strings. Write failures surface as `io::Error`; a missing
/// slot reads as `None`.
pub trait Storage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> std::io::Result<()>;
}

/// File-backed storage: each slot is a `<key>.json` file in the data
/// directory.
///
/// The directory is determined in the following order:
/// 1. `TAREA_DIR` environment variable.
/// 2. `~/.local/share/tarea` (on Linux).
/// 3. `.` (fallback).
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new() -> Self {
        let dir = std::env::var("TAREA_DIR").map(PathBuf::from).unwrap_or_else(|_| {
            let mut p = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
            p.push("tarea");
            p
        });
        if !dir.exists() {
            let _ = fs::create_dir_all(&dir);
        }
        FileStorage { dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.slot_path(key);
        if !path.exists() {
            return None;
        }
        fs::read_to_string(&path).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        let mut f = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(self.slot_path(key))?;
        f.write_all(value.as_bytes())?;
        Ok(())
    }
}

/// In-memory storage implementing the same contract, for tests.
#[derive(Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> std::io::Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
