use super::Session;
use crate::{
    db::actor::StoreHandle,
    libs::{
        messages::Message,
        task::{NewTask, Task},
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title; prompts for all fields when omitted
    title: Option<String>,

    #[arg(short, long)]
    category: Option<String>,

    /// Due date, e.g. 2025-08-05 or 05/08/2025
    #[arg(short, long)]
    due: Option<String>,

    /// Due time, e.g. "09:00 AM" or 21:30
    #[arg(short, long)]
    time: Option<String>,

    /// daily, weekly or monthly
    #[arg(short, long)]
    recurring: Option<String>,

    /// High, Medium or Low
    #[arg(short, long)]
    priority: Option<String>,
}

pub async fn cmd(args: AddArgs, user: Option<&str>) -> Result<()> {
    let new_task = match args.title {
        Some(title) => NewTask {
            title,
            category: args.category,
            due: args.due,
            time: args.time,
            recurring: args.recurring,
            priority: args.priority,
        },
        None => prompt_new_task()?,
    };

    let session = Session::open(user)?;
    create(&session.store, new_task).await?;
    Ok(())
}

/// Validates and stores a new task. Nothing is saved when validation fails.
pub async fn create(store: &StoreHandle, new_task: NewTask) -> Result<Task> {
    let task = match new_task.validate() {
        Ok(task) => task,
        Err(e) => msg_bail_anyhow!(Message::TaskRejected(e.to_string())),
    };

    let task = store.add(task).await?;
    msg_success!(Message::TaskCreated(task.title.clone()));
    Ok(task)
}

pub fn prompt_new_task() -> Result<NewTask> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?;

    Ok(NewTask {
        title,
        category: prompt_optional(Message::PromptCategory)?,
        due: prompt_optional(Message::PromptDueDate)?,
        time: prompt_optional(Message::PromptDueTime)?,
        recurring: prompt_optional(Message::PromptRecurring)?,
        priority: prompt_optional(Message::PromptPriority)?,
    })
}

fn prompt_optional(prompt: Message) -> Result<Option<String>> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(Some(value).filter(|v| !v.trim().is_empty()))
}
