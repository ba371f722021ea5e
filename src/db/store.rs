//! Plain-text record store for users and tasks.
//!
//! Each backing file holds one record per line with fields joined by `", "`:
//!
//! ```text
//! user.txt   username, credential, role          (role may be absent)
//! task.txt   id, owner, title, description, due, created, Yes|No
//! ```
//!
//! Loads are tolerant: a missing file is an empty set, and malformed lines
//! are skipped and reported in [`Loaded::skipped`] instead of failing the
//! load. Saves always replace the whole file. Destructive rewrites are
//! preceded by a best-effort timestamped [`RecordStore::backup`].
//!
//! The store assumes a single writer; concurrent processes race and the last
//! save wins.

use crate::libs::config::Config;
use crate::libs::error::Result;
use crate::libs::task::{RecordDate, Task, TaskStatus};
use crate::libs::user::UserRecord;
use crate::libs::validation::FIELD_SEPARATOR;
use chrono::Local;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const BACKUP_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Users,
    Tasks,
}

/// Why a line was left out of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    FieldCount(usize),
    InvalidId(String),
    InvalidStatus(String),
    Encoding,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::FieldCount(n) => write!(f, "unexpected field count {}", n),
            SkipReason::InvalidId(id) => write!(f, "invalid task id '{}'", id),
            SkipReason::InvalidStatus(status) => write!(f, "invalid status '{}'", status),
            SkipReason::Encoding => write!(f, "invalid UTF-8"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the backing file.
    pub line: usize,
    pub reason: SkipReason,
}

/// Records parsed from a backing file plus the lines that were dropped.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedLine>,
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordStore {
    users_path: PathBuf,
    tasks_path: PathBuf,
}

impl RecordStore {
    pub fn new(users_path: impl Into<PathBuf>, tasks_path: impl Into<PathBuf>) -> Self {
        Self {
            users_path: users_path.into(),
            tasks_path: tasks_path.into(),
        }
    }

    /// Store rooted at `dir` with the default file names.
    pub fn in_dir(dir: &Path) -> Self {
        let storage = crate::libs::config::StorageConfig::default();
        Self::new(dir.join(storage.users_file), dir.join(storage.tasks_file))
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let dir = config.data_dir()?;
        Ok(Self::new(
            dir.join(&config.storage.users_file),
            dir.join(&config.storage.tasks_file),
        ))
    }

    pub fn path(&self, kind: RecordKind) -> &Path {
        match kind {
            RecordKind::Users => &self.users_path,
            RecordKind::Tasks => &self.tasks_path,
        }
    }

    pub fn load_users(&self) -> Result<Loaded<UserRecord>> {
        self.load(RecordKind::Users, parse_user)
    }

    pub fn load_tasks(&self) -> Result<Loaded<Task>> {
        self.load(RecordKind::Tasks, parse_task)
    }

    pub fn save_users(&self, users: &[UserRecord]) -> Result<()> {
        let lines = users.iter().map(format_user).collect::<Vec<_>>();
        self.save(RecordKind::Users, &lines)
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<()> {
        let lines = tasks.iter().map(format_task).collect::<Vec<_>>();
        self.save(RecordKind::Tasks, &lines)
    }

    /// Copies the backing file to `<file>.backup_<timestamp>`.
    ///
    /// Best-effort: failures are logged and reported as `None`.
    pub fn backup(&self, kind: RecordKind) -> Option<PathBuf> {
        let source = self.path(kind);
        let mut name = source.as_os_str().to_owned();
        name.push(format!(".backup_{}", Local::now().format(BACKUP_TIMESTAMP)));
        let target = PathBuf::from(name);

        match fs::copy(source, &target) {
            Ok(_) => {
                tracing::info!(backup = %target.display(), "backup created");
                Some(target)
            }
            Err(e) => {
                tracing::warn!(file = %source.display(), error = %e, "backup failed");
                None
            }
        }
    }

    fn load<T>(&self, kind: RecordKind, parse: fn(&[&str]) -> std::result::Result<T, SkipReason>) -> Result<Loaded<T>> {
        let path = self.path(kind);
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Loaded::default()),
            Err(e) => return Err(e.into()),
        };

        // Lines are decoded one at a time so a bad byte only costs its own line.
        let mut loaded = Loaded::default();
        for (index, bytes) in content.split(|&b| b == b'\n').enumerate() {
            let parsed = match std::str::from_utf8(bytes) {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
                    parse(&fields)
                }
                Err(_) => Err(SkipReason::Encoding),
            };
            match parsed {
                Ok(record) => loaded.records.push(record),
                Err(reason) => {
                    tracing::warn!(file = %path.display(), line = index + 1, %reason, "skipping malformed record");
                    loaded.skipped.push(SkippedLine { line: index + 1, reason });
                }
            }
        }

        tracing::debug!(file = %path.display(), records = loaded.records.len(), skipped = loaded.skipped.len(), "records loaded");
        Ok(loaded)
    }

    fn save(&self, kind: RecordKind, lines: &[String]) -> Result<()> {
        let path = self.path(kind);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut content = String::new();
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(path, content)?;

        tracing::debug!(file = %path.display(), records = lines.len(), "records saved");
        Ok(())
    }
}

fn parse_user(fields: &[&str]) -> std::result::Result<UserRecord, SkipReason> {
    match fields {
        [username, credential, role] => Ok(UserRecord {
            username: username.to_string(),
            credential: credential.to_string(),
            // Unrecognised roles are treated as missing so back-fill repairs them.
            role: role.parse().ok(),
        }),
        [username, credential] => Ok(UserRecord {
            username: username.to_string(),
            credential: credential.to_string(),
            role: None,
        }),
        _ => Err(SkipReason::FieldCount(fields.len())),
    }
}

fn format_user(user: &UserRecord) -> String {
    match user.role {
        Some(role) => [user.username.as_str(), user.credential.as_str(), role.as_str()].join(FIELD_SEPARATOR),
        None => [user.username.as_str(), user.credential.as_str()].join(FIELD_SEPARATOR),
    }
}

fn parse_task(fields: &[&str]) -> std::result::Result<Task, SkipReason> {
    let [id, owner, title, description, due, created, status] = fields else {
        return Err(SkipReason::FieldCount(fields.len()));
    };

    let id = id
        .parse::<u32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| SkipReason::InvalidId(id.to_string()))?;
    let status = TaskStatus::from_token(status).ok_or_else(|| SkipReason::InvalidStatus(status.to_string()))?;

    Ok(Task {
        id,
        owner: owner.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        due_date: RecordDate::from_text(due),
        created_date: RecordDate::from_text(created),
        status,
    })
}

fn format_task(task: &Task) -> String {
    [
        task.id.to_string().as_str(),
        task.owner.as_str(),
        task.title.as_str(),
        task.description.as_str(),
        task.due_date.as_str(),
        task.created_date.as_str(),
        task.status.as_token(),
    ]
    .join(FIELD_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_user_line_has_no_role() {
        let record = parse_user(&["bob", "secret1"]).unwrap();
        assert_eq!(record.role, None);
        assert_eq!(format_user(&record), "bob, secret1");
    }

    #[test]
    fn task_line_rejects_zero_id() {
        let fields = ["0", "alice", "T", "D", "2030-01-01", "2029-01-01", "No"];
        assert_eq!(parse_task(&fields), Err(SkipReason::InvalidId("0".to_string())));
    }
}
