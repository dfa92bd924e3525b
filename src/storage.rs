use crate::model::{Task, TaskList};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DATA_FILE_NAME: &str = "tasque.txt";

/// Overrides every other storage location, mainly for test isolation.
pub const DATA_FILE_ENV: &str = "TASQUE_DATA_FILE";

/// The flat-file storage target for the task list.
///
/// Writes always rewrite the whole file; there is no append path. A
/// single process with a single writer is assumed, so no locking.
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolution order: the `TASQUE_DATA_FILE` environment variable,
    /// the config override, the platform data directory.
    pub fn locate(config_override: Option<&Path>) -> Option<PathBuf> {
        if let Ok(path) = env::var(DATA_FILE_ENV) {
            return Some(PathBuf::from(path));
        }
        if let Some(path) = config_override {
            return Some(path.to_path_buf());
        }
        let proj = ProjectDirs::from("com", "tasque", "tasque")?;
        Some(proj.data_dir().join(DATA_FILE_NAME))
    }

    /// Atomic write: Write to .tmp file then rename
    fn atomic_write<C: AsRef<[u8]>>(path: &Path, contents: C) -> Result<()> {
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Serializes the entire list and rewrites the data file, creating
    /// intermediate directories on the first write.
    pub fn save(&self, tasks: &TaskList) -> Result<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let mut contents = String::new();
        for task in tasks.iter() {
            contents.push_str(&task.to_record());
            contents.push('\n');
        }
        Self::atomic_write(&self.path, contents)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        log::debug!("wrote {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Loads the task list; a missing file is an empty list, a record
    /// the codec rejects fails the whole load.
    pub fn load(&self) -> Result<TaskList> {
        if !self.path.exists() {
            return Ok(TaskList::default());
        }
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        let mut tasks = Vec::new();
        for line in contents.lines().filter(|l| !l.is_empty()) {
            let task = Task::from_record(line)
                .with_context(|| format!("corrupt data file {}", self.path.display()))?;
            tasks.push(task);
        }
        log::debug!("loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(TaskList::new(tasks))
    }
}
