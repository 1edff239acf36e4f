//! # API Facade
//!
//! Thin facade over the command layer, the single entry point for all taskz
//! operations regardless of the UI driving them.
//!
//! `TaskzApi<S: DataStore>` is generic over the storage backend:
//! - Production: `TaskzApi<FileStore>`
//! - Testing: `TaskzApi<InMemoryStore>`
//!
//! No business logic, no I/O, no presentation lives here; it dispatches and
//! returns structured `Result<CmdResult>` values.

use crate::commands;
use crate::error::Result;
use crate::model::Status;
use crate::store::DataStore;

pub struct TaskzApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> TaskzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_task(&mut self, description: String) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, description)
    }

    pub fn update_task(&mut self, id: u64, description: String) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, description)
    }

    pub fn delete_task(&mut self, id: u64) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn mark_task(&mut self, id: u64, status: Status) -> Result<commands::CmdResult> {
        commands::mark::run(&mut self.store, id, status)
    }

    pub fn list_tasks(&mut self, filter: Option<Status>) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn dispatches_through_the_full_cycle() {
        let mut api = TaskzApi::new(InMemoryStore::new());
        api.add_task("Buy milk".into()).unwrap();
        api.mark_task(1, Status::Done).unwrap();

        let result = api.list_tasks(Some(Status::Done)).unwrap();
        assert_eq!(result.listed_tasks.len(), 1);
        assert_eq!(result.listed_tasks[0].description, "Buy milk");
    }
}
