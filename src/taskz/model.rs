use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical task status. Always serialized as the string labels; older
/// storage files may carry the integer codes 0/1/2 instead, which are
/// normalized here at deserialization time and never survive a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }

    /// Checkbox-style marker used in list output.
    pub fn symbol(&self) -> &'static str {
        match self {
            Status::Todo => "[ ]",
            Status::InProgress => "[~]",
            Status::Done => "[✓]",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Code(i64),
            Label(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            // Legacy integer encoding; unknown codes fall back to Todo.
            Raw::Code(1) => Status::InProgress,
            Raw::Code(2) => Status::Done,
            Raw::Code(_) => Status::Todo,
            Raw::Label(s) => match s.as_str() {
                "in-progress" => Status::InProgress,
                "done" => Status::Done,
                _ => Status::Todo,
            },
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub description: String,
    pub status: Status,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(id: u64, description: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            description,
            status: Status::Todo,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The whole persisted collection. serde_json writes the integer keys as
/// decimal strings (JSON object keys), matching the on-disk document, and the
/// BTreeMap keeps iteration in ascending numeric ID order.
pub type TaskMap = BTreeMap<u64, Task>;

/// IDs are never reused: the next ID is one past the highest ever assigned
/// among the surviving tasks, or 1 for an empty collection.
pub fn next_id(tasks: &TaskMap) -> u64 {
    tasks.keys().next_back().map_or(1, |max| max + 1)
}
