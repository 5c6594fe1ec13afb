use super::Session;
use crate::{
    db::actor::StoreHandle,
    libs::{
        messages::Message,
        task::{filter_tasks, sort_for_display, StatusFilter, TaskFilter},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks in this category (case-insensitive)
    #[arg(short, long)]
    category: Option<String>,

    #[arg(short, long, value_enum, default_value = "all")]
    status: StatusFilter,

    /// Pending first, then by priority and due date
    #[arg(long)]
    sort: bool,
}

pub async fn cmd(args: ListArgs, user: Option<&str>) -> Result<()> {
    let session = Session::open(user)?;
    let filter = TaskFilter {
        category: args.category,
        status: args.status,
    };
    show(&session.store, &filter, args.sort).await
}

/// Prints the tasks matching `filter`. Numbers shown are positions in the
/// unsorted list, so they stay valid for `complete` and `delete`.
pub async fn show(store: &StoreHandle, filter: &TaskFilter, sort: bool) -> Result<()> {
    let tasks = store.snapshot().await?;
    let mut entries = filter_tasks(&tasks, filter);

    if entries.is_empty() {
        match &filter.category {
            Some(category) => msg_info!(Message::NoTasksInCategory(category.clone())),
            None => msg_info!(Message::NoTasksFound),
        }
        return Ok(());
    }

    if sort {
        sort_for_display(&mut entries);
    }

    match &filter.category {
        Some(category) => msg_print!(Message::TasksCategoryHeader(category.clone()), true),
        None => msg_print!(Message::TasksHeader, true),
    }
    View::tasks(&entries)
}
