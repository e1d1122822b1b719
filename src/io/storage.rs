use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

use crate::model::task::Task;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Boundary the task store persists through.
///
/// `save` always receives the complete collection (full overwrite, not an
/// incremental patch). `load` re-derives every task's status against `now`,
/// since the stored status reflects the clock at save time.
pub trait TaskStorage {
    fn load(&self, now: DateTime<Utc>) -> Result<Vec<Task>, StorageError>;
    fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// Production storage: a single JSON file holding the serialized task array.
///
/// No schema version field exists; content that does not parse as a task
/// array is treated as no prior data.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStorage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStorage for JsonFileStorage {
    fn load(&self, now: DateTime<Utc>) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        // Malformed content never takes the store down: drop and start empty.
        let mut tasks: Vec<Task> = match serde_json::from_str(&content) {
            Ok(tasks) => tasks,
            Err(_) => return Ok(Vec::new()),
        };
        for task in &mut tasks {
            task.refresh_status(now);
        }
        Ok(tasks)
    }

    fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(tasks)?;
        atomic_write(&self.path, content.as_bytes()).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Priority, Status, derive_status};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use uuid::Uuid;

    fn sample_task(title: &str, due: &str, completed: bool) -> Task {
        let due_date = NaiveDate::parse_from_str(due, "%Y-%m-%d").unwrap();
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "details".to_string(),
            due_date,
            priority: Priority::Medium,
            completed,
            status: derive_status(completed, due_date, Utc::now()),
        }
    }

    #[test]
    fn load_missing_file_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(tmp.path().join("tasks.json"));
        assert!(storage.load(Utc::now()).unwrap().is_empty());
    }

    #[test]
    fn load_malformed_content_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.json");
        fs::write(&path, "not json {{{").unwrap();
        let storage = JsonFileStorage::new(&path);
        assert!(storage.load(Utc::now()).unwrap().is_empty());
    }

    #[test]
    fn load_wrong_shape_returns_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.json");
        fs::write(&path, r#"{"tasks": "nope"}"#).unwrap();
        let storage = JsonFileStorage::new(&path);
        assert!(storage.load(Utc::now()).unwrap().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(tmp.path().join("tasks.json"));
        let tasks = vec![
            sample_task("First", "2020-01-01", false),
            sample_task("Second", "2099-01-01", false),
        ];
        storage.save(&tasks).unwrap();
        let loaded = storage.load(Utc::now()).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn load_rederives_stale_status() {
        let tmp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(tmp.path().join("tasks.json"));

        // Saved while the due date was still in the future, status upcoming.
        // By load time the date has passed.
        let mut task = sample_task("Old", "2020-06-01", false);
        task.status = Status::Upcoming;
        storage.save(&[task]).unwrap();

        let loaded = storage.load(Utc::now()).unwrap();
        assert_eq!(loaded[0].status, Status::Overdue);
    }

    #[test]
    fn save_overwrites_previous_collection() {
        let tmp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(tmp.path().join("tasks.json"));
        storage
            .save(&[sample_task("A", "2099-01-01", false), sample_task("B", "2099-01-01", false)])
            .unwrap();
        storage.save(&[sample_task("C", "2099-01-01", false)]).unwrap();

        let loaded = storage.load(Utc::now()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "C");
    }

    #[test]
    fn save_to_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(tmp.path().join("nope/tasks.json"));
        assert!(storage.save(&[sample_task("A", "2099-01-01", false)]).is_err());
    }
}
