use clap::Parser;
use colored::*;
use taskz::api::TaskzApi;
use taskz::commands::{CmdMessage, MessageLevel};
use taskz::error::Result;
use taskz::model::{Status, Task};
use taskz::store::fs::FileStore;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version requests are not failures; everything else
            // (missing args, unknown commands, bad filter values, bare
            // invocation) prints usage and exits 1.
            let code = match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // The store is constructed here and passed down; there is no ambient
    // singleton. Storage lives at a fixed relative path (see store::fs).
    let mut api = TaskzApi::new(FileStore::default());

    match cli.command {
        Commands::Add { description } => {
            let result = api.add_task(description)?;
            print_messages(&result.messages);
        }
        Commands::Update { id, description } => {
            let result = api.update_task(id, description)?;
            print_messages(&result.messages);
        }
        Commands::Delete { id } => {
            let result = api.delete_task(id)?;
            print_messages(&result.messages);
        }
        Commands::MarkInProgress { id } => {
            let result = api.mark_task(id, Status::InProgress)?;
            print_messages(&result.messages);
        }
        Commands::MarkDone { id } => {
            let result = api.mark_task(id, Status::Done)?;
            print_messages(&result.messages);
        }
        Commands::List { status } => {
            let result = api.list_tasks(status)?;
            print_tasks(&result.listed_tasks, status);
            print_messages(&result.messages);
        }
    }

    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const RULE_WIDTH: usize = 50;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn print_tasks(tasks: &[Task], filter: Option<Status>) {
    if tasks.is_empty() {
        return;
    }

    match filter {
        Some(f) => println!("Tasks ({}):", f),
        None => println!("Tasks:"),
    }
    println!("{}", "-".repeat(RULE_WIDTH));

    for task in tasks {
        println!(
            "{} {}. {}",
            task.status.symbol(),
            task.id,
            task.description.bold()
        );
        println!("    Status: {}", task.status);
        println!(
            "    Created: {}",
            task.created_at.format(TIME_FORMAT).to_string().dimmed()
        );
        println!(
            "    Updated: {}",
            task.updated_at.format(TIME_FORMAT).to_string().dimmed()
        );
        println!();
    }
}
