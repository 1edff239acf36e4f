use clap::{Parser, Subcommand};
use taskz::model::Status;

#[derive(Parser, Debug)]
#[command(name = "taskz")]
#[command(about = "Track short tasks from the command line", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new task
    #[command(alias = "a")]
    Add {
        /// Description of the task
        description: String,
    },

    /// Update a task's description
    Update {
        /// ID of the task
        id: u64,

        /// New description
        description: String,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// ID of the task
        id: u64,
    },

    /// Mark a task as in progress
    MarkInProgress {
        /// ID of the task
        id: u64,
    },

    /// Mark a task as done
    MarkDone {
        /// ID of the task
        id: u64,
    },

    /// List tasks, optionally filtered by status
    #[command(alias = "ls")]
    List {
        /// Only show tasks with this status
        #[arg(value_enum)]
        status: Option<Status>,
    },
}
