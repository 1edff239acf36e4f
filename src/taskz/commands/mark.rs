use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, TaskzError};
use crate::model::Status;
use crate::store::DataStore;
use chrono::Utc;

pub fn run<S: DataStore>(store: &mut S, id: u64, status: Status) -> Result<CmdResult> {
    let mut tasks = store.load()?;
    let task = tasks.get_mut(&id).ok_or(TaskzError::TaskNotFound(id))?;
    task.status = status;
    task.updated_at = Utc::now();
    let marked = task.clone();
    store.save(&tasks)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Task {} marked as {}.",
        id, status
    )));
    result.affected_tasks.push(marked);
    Ok(result)
}
