use super::DataStore;
use crate::error::Result;
use crate::model::TaskMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    tasks: TaskMap,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times `save` has been called, for asserting that every
    /// mutating operation persists exactly once.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&mut self) -> Result<TaskMap> {
        Ok(self.tasks.clone())
    }

    fn save(&mut self, tasks: &TaskMap) -> Result<()> {
        self.tasks = tasks.clone();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Status, Task};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_tasks(mut self, count: usize) -> Self {
            let mut tasks = self.store.load().unwrap();
            for _ in 0..count {
                let id = crate::model::next_id(&tasks);
                let task = Task::new(id, format!("Test task {}", id));
                tasks.insert(id, task);
            }
            self.store.save(&tasks).unwrap();
            self
        }

        pub fn with_task(mut self, description: &str, status: Status) -> Self {
            let mut tasks = self.store.load().unwrap();
            let id = crate::model::next_id(&tasks);
            let mut task = Task::new(id, description.to_string());
            task.status = status;
            tasks.insert(id, task);
            self.store.save(&tasks).unwrap();
            self
        }
    }
}
