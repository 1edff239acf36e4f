use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskzError};
use crate::store::DataStore;
use chrono::Utc;

pub fn run<S: DataStore>(store: &mut S, id: u64, description: String) -> Result<CmdResult> {
    if description.trim().is_empty() {
        return Err(TaskzError::InvalidDescription);
    }

    let mut tasks = store.load()?;
    let task = tasks.get_mut(&id).ok_or(TaskzError::TaskNotFound(id))?;
    task.description = description;
    task.updated_at = Utc::now();
    let updated = task.clone();
    store.save(&tasks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task {} updated successfully.",
        id
    )));
    result.affected_tasks.push(updated);
    Ok(result)
}
