use crate::libs::data_storage::DataStorage;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::secret::{self, Cipher};
use crate::libs::task::{Task, TaskId};
use crate::msg_warning;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORE_FILE: &str = "tasks.json";
const CORRUPT_SUFFIX: &str = "corrupt";

/// Whose tasks a store holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Owner {
    /// The implicit single user.
    #[default]
    Default,
    Named(String),
}

impl Owner {
    /// Owner names end up in file names, so only `[A-Za-z0-9_-]` is allowed.
    pub fn parse(name: Option<&str>) -> Result<Self, TaskError> {
        let name = match name.map(str::trim) {
            None | Some("") => return Ok(Owner::Default),
            Some(name) => name,
        };
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(TaskError::Validation(format!(
                "Invalid user name '{}': use letters, digits, '-' or '_'",
                name
            )));
        }
        Ok(Owner::Named(name.to_string()))
    }

    pub fn file_name(&self) -> String {
        match self {
            Owner::Default => DEFAULT_STORE_FILE.to_string(),
            Owner::Named(name) => format!("tasks_{}.json", name),
        }
    }
}

/// Result of [`TaskStore::load`]. Loading never fails outright: an unreadable
/// store yields an empty list together with the recovered error.
///
/// Records that cannot be read as a task are returned untouched in
/// `unreadable` so that a later [`TaskStore::save_keeping`] writes them back.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub tasks: Vec<Task>,
    pub unreadable: Vec<Value>,
    pub error: Option<TaskError>,
}

/// One owner's encrypted task list on disk.
///
/// Every operation reads or rewrites the whole document.
pub struct TaskStore {
    path: PathBuf,
    cipher: Cipher,
}

impl TaskStore {
    /// Opens the owner's store in the default data directory with the
    /// process-wide key.
    pub fn new(owner: &Owner) -> Result<TaskStore, TaskError> {
        let cipher = secret::global()?.clone();
        Self::open(&DataStorage::new(), owner, cipher)
    }

    pub fn open(storage: &DataStorage, owner: &Owner, cipher: Cipher) -> Result<TaskStore, TaskError> {
        let path = storage.get_path(&owner.file_name())?;
        Ok(TaskStore { path, cipher })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> LoadOutcome {
        let token = match fs::read(&self.path) {
            Ok(token) => token,
            Err(e) if e.kind() == ErrorKind::NotFound => return LoadOutcome::default(),
            Err(e) => return self.recover(e.to_string()),
        };
        if token.iter().all(u8::is_ascii_whitespace) {
            return LoadOutcome::default();
        }

        let records = self
            .cipher
            .decrypt(&token)
            .and_then(|plain| serde_json::from_slice::<Vec<Value>>(&plain).map_err(TaskError::from));
        let records = match records {
            Ok(records) => records,
            Err(e) => return self.recover(e.to_string()),
        };

        let mut tasks = Vec::with_capacity(records.len());
        let mut unreadable = Vec::new();
        let mut reasons = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            match Task::deserialize(&record) {
                Ok(task) => tasks.push(task),
                Err(e) => {
                    msg_warning!(Message::StoreRecordSkipped {
                        position: index + 1,
                        reason: e.to_string(),
                    });
                    reasons.push(format!("record #{}: {}", index + 1, e));
                    unreadable.push(record);
                }
            }
        }
        assign_missing_ids(&mut tasks);

        let error = (!reasons.is_empty()).then(|| TaskError::Load {
            path: self.path.clone(),
            reason: reasons.join("; "),
        });
        LoadOutcome { tasks, unreadable, error }
    }

    /// Serializes, encrypts and replaces the store file.
    ///
    /// The document is written to a sibling temp file and renamed over the
    /// store, so a crash mid-write leaves the previous version in place.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TaskError> {
        self.save_keeping(tasks, &[])
    }

    /// Like [`TaskStore::save`], with `unreadable` records from the last load
    /// written back after the tasks.
    pub fn save_keeping(&self, tasks: &[Task], unreadable: &[Value]) -> Result<(), TaskError> {
        let mut records = tasks.iter().map(serde_json::to_value).collect::<Result<Vec<_>, _>>()?;
        records.extend(unreadable.iter().cloned());
        let json = serde_json::to_vec(&records)?;
        let token = self.cipher.encrypt(&json)?;

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, token).map_err(|source| TaskError::Save {
            path: temp_path.clone(),
            source,
        })?;
        fs::rename(&temp_path, &self.path).map_err(|source| TaskError::Save {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    /// Keeps a copy of an unreadable store before it can be overwritten by
    /// the next save, and reports the failure.
    fn recover(&self, reason: String) -> LoadOutcome {
        let backup = self.path.with_extension(CORRUPT_SUFFIX);
        if let Err(e) = fs::copy(&self.path, &backup) {
            tracing::warn!(path = %backup.display(), error = %e, "could not back up unreadable store");
        }
        LoadOutcome {
            tasks: Vec::new(),
            unreadable: Vec::new(),
            error: Some(TaskError::Load {
                path: self.path.clone(),
                reason,
            }),
        }
    }
}

/// Gives records from older files (which carry no id) fresh ids after the
/// highest existing one.
pub fn assign_missing_ids(tasks: &mut [Task]) {
    let mut next = next_id(tasks);
    for task in tasks.iter_mut().filter(|t| t.id == 0) {
        task.id = next;
        next += 1;
    }
}

pub fn next_id(tasks: &[Task]) -> TaskId {
    tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_file_names() {
        assert_eq!(Owner::parse(None).unwrap().file_name(), "tasks.json");
        assert_eq!(Owner::parse(Some("  ")).unwrap(), Owner::Default);
        assert_eq!(Owner::parse(Some("alice")).unwrap().file_name(), "tasks_alice.json");
    }

    #[test]
    fn owner_rejects_path_characters() {
        assert!(matches!(Owner::parse(Some("../bob")), Err(TaskError::Validation(_))));
    }

    #[test]
    fn missing_ids_follow_highest_id() {
        let mut tasks = vec![Task::new("a", "General"), Task::new("b", "General"), Task::new("c", "General")];
        tasks[1].id = 7;
        assign_missing_ids(&mut tasks);
        assert_eq!(tasks.iter().map(|t| t.id).collect::<Vec<_>>(), vec![8, 7, 9]);
    }
}
