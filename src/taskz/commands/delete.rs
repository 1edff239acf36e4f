use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskzError};
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: u64) -> Result<CmdResult> {
    let mut tasks = store.load()?;
    let removed = tasks.remove(&id).ok_or(TaskzError::TaskNotFound(id))?;
    store.save(&tasks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task {} deleted successfully.",
        id
    )));
    result.affected_tasks.push(removed);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, list};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn removes_the_task() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Buy milk".into()).unwrap();
        run(&mut store, 1).unwrap();

        let listed = list::run(&mut store, None).unwrap().listed_tasks;
        assert!(listed.is_empty());
    }

    #[test]
    fn missing_id_leaves_collection_unchanged() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "Buy milk".into()).unwrap();
        let saves_before = store.save_count();

        assert!(matches!(
            run(&mut store, 99),
            Err(TaskzError::TaskNotFound(99))
        ));
        assert_eq!(store.save_count(), saves_before);
        assert_eq!(list::run(&mut store, None).unwrap().listed_tasks.len(), 1);
    }
}
