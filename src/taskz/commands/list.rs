use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Status;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, filter: Option<Status>) -> Result<CmdResult> {
    let tasks = store.load()?;

    // BTreeMap iteration is already ascending by numeric ID.
    let listed: Vec<_> = tasks
        .into_values()
        .filter(|task| filter.map_or(true, |f| task.status == f))
        .collect();

    if listed.is_empty() {
        let message = match filter {
            Some(f) => format!("No tasks found with status '{}'.", f),
            None => "No tasks found.".to_string(),
        };
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(message));
        return Ok(result);
    }

    Ok(CmdResult::default().with_listed_tasks(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, mark};
    use crate::store::memory::InMemoryStore;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn lists_all_tasks_in_id_order() {
        let mut store = StoreFixture::new().with_tasks(3).store;
        let listed = run(&mut store, None).unwrap().listed_tasks;
        let ids: Vec<_> = listed.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn added_task_shows_up_as_todo() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "x".into()).unwrap();

        let listed = run(&mut store, None).unwrap().listed_tasks;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description, "x");
        assert_eq!(listed[0].status, Status::Todo);
    }

    #[test]
    fn filter_matches_normalized_status() {
        let mut store = StoreFixture::new()
            .with_task("pending", Status::Todo)
            .with_task("working", Status::InProgress)
            .store;

        let listed = run(&mut store, Some(Status::InProgress))
            .unwrap()
            .listed_tasks;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].description, "working");
    }

    #[test]
    fn empty_collection_message_has_no_filter() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, None).unwrap();
        assert_eq!(result.messages[0].content, "No tasks found.");
    }

    #[test]
    fn filtered_empty_message_names_the_filter() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, "still open".into()).unwrap();
        mark::run(&mut store, 1, Status::InProgress).unwrap();

        let result = run(&mut store, Some(Status::Done)).unwrap();
        assert!(result.listed_tasks.is_empty());
        assert_eq!(
            result.messages[0].content,
            "No tasks found with status 'done'."
        );
    }
}
