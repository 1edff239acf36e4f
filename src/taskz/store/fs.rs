use super::DataStore;
use crate::error::{Result, TaskzError};
use crate::model::TaskMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Fixed storage path, relative to the working directory.
pub const TASKS_FILE: &str = "tasks.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn write_document(&self, tasks: &TaskMap) -> Result<()> {
        let content = serde_json::to_string_pretty(tasks).map_err(TaskzError::Serialization)?;
        // Write to a sibling temp file and rename over the target so a crash
        // mid-write cannot leave a half-written document behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).map_err(TaskzError::Io)?;
        fs::rename(&tmp, &self.path).map_err(TaskzError::Io)?;
        Ok(())
    }
}

impl Default for FileStore {
    fn default() -> Self {
        Self::new(PathBuf::from(TASKS_FILE))
    }
}

impl DataStore for FileStore {
    fn load(&mut self) -> Result<TaskMap> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // First run: materialize an empty, well-formed document.
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let tasks = TaskMap::new();
                self.save(&tasks)?;
                return Ok(tasks);
            }
            Err(e) => return Err(TaskzError::Io(e)),
        };

        match serde_json::from_str(&content) {
            Ok(tasks) => Ok(tasks),
            // Unparsable document: self-heal to an empty collection rather
            // than leaving the user stuck behind a parse error.
            Err(_) => {
                let tasks = TaskMap::new();
                self.save(&tasks)?;
                Ok(tasks)
            }
        }
    }

    fn save(&mut self, tasks: &TaskMap) -> Result<()> {
        self.write_document(tasks)
    }
}
