use crate::model::Task;

pub mod add;
pub mod delete;
pub mod list;
pub mod mark;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_tasks: Vec<Task>,
    pub listed_tasks: Vec<Task>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.listed_tasks = tasks;
        self
    }
}
