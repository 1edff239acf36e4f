use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskzError};
use crate::model::{next_id, Task};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, description: String) -> Result<CmdResult> {
    if description.trim().is_empty() {
        return Err(TaskzError::InvalidDescription);
    }

    let mut tasks = store.load()?;
    let id = next_id(&tasks);
    let task = Task::new(id, description);
    tasks.insert(id, task.clone());
    store.save(&tasks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task added successfully (ID: {})",
        id
    )));
    result.affected_tasks.push(task);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Status;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn adds_task_with_todo_status() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "Buy milk".into()).unwrap();

        assert_eq!(result.affected_tasks.len(), 1);
        let task = &result.affected_tasks[0];
        assert_eq!(task.id, 1);
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.created_at, task.updated_at);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn ids_increase_sequentially() {
        let mut store = InMemoryStore::new();
        for (i, desc) in ["a", "b", "c"].iter().enumerate() {
            let result = run(&mut store, desc.to_string()).unwrap();
            assert_eq!(result.affected_tasks[0].id, i as u64 + 1);
        }
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut store = InMemoryStore::new();
        run(&mut store, "Buy milk".into()).unwrap();
        run(&mut store, "Walk dog".into()).unwrap();
        crate::commands::delete::run(&mut store, 1).unwrap();

        let result = run(&mut store, "Read book".into()).unwrap();
        assert_eq!(result.affected_tasks[0].id, 3);
    }

    #[test]
    fn rejects_empty_description() {
        let mut store = InMemoryStore::new();
        assert!(matches!(
            run(&mut store, "   ".into()),
            Err(TaskzError::InvalidDescription)
        ));
        assert_eq!(store.save_count(), 0);
    }
}
