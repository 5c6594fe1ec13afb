//! Interactive menu.
//!
//! On start the menu rolls over completed recurring tasks, shows what is
//! due soon and starts the alarm scanner in the background for as long as
//! the menu is open. Errors from a single action are reported and the menu
//! keeps running.

use super::{add, complete, delete, list, report, upcoming, Session};
use crate::{
    libs::{
        alarm::AlarmScanner,
        messages::Message,
        notifier::ConsoleNotifier,
        report::ReportPeriod,
        task::TaskFilter,
    },
    msg_error, msg_info, msg_print,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::sync::Arc;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    ViewTasks,
    AddTask,
    CompleteTask,
    DeleteTask,
    CategoryView,
    Report,
    Upcoming,
    Exit,
}

impl MenuItem {
    const ALL: [MenuItem; 8] = [
        MenuItem::ViewTasks,
        MenuItem::AddTask,
        MenuItem::CompleteTask,
        MenuItem::DeleteTask,
        MenuItem::CategoryView,
        MenuItem::Report,
        MenuItem::Upcoming,
        MenuItem::Exit,
    ];

    fn label(&self) -> Message {
        match self {
            MenuItem::ViewTasks => Message::MenuViewTasks,
            MenuItem::AddTask => Message::MenuAddTask,
            MenuItem::CompleteTask => Message::MenuCompleteTask,
            MenuItem::DeleteTask => Message::MenuDeleteTask,
            MenuItem::CategoryView => Message::MenuCategoryView,
            MenuItem::Report => Message::MenuReport,
            MenuItem::Upcoming => Message::MenuUpcoming,
            MenuItem::Exit => Message::MenuExit,
        }
    }
}

pub async fn cmd(user: Option<&str>) -> Result<()> {
    let session = Session::open(user)?;
    let alarm_config = session.config.alarm_or_default();

    msg_print!(Message::MenuWelcome, true);
    match session.store.roll_over().await {
        Ok(0) => {}
        Ok(count) => msg_info!(Message::TasksRolledOver(count)),
        Err(e) => msg_error!(Message::StoreUnavailable(e.to_string())),
    }
    if let Err(e) = upcoming::show(&session.store, alarm_config.upcoming_window).await {
        msg_error!(e);
    }

    let scanner = AlarmScanner::new(session.store.clone(), Arc::new(ConsoleNotifier), alarm_config);
    let scanner_handle = tokio::spawn(scanner.run());

    let labels: Vec<String> = MenuItem::ALL.iter().map(|item| item.label().to_string()).collect();
    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::MenuPrompt.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        let item = MenuItem::ALL[selection];
        if let MenuItem::Exit = item {
            break;
        }
        if let Err(e) = run_item(&session, item).await {
            msg_error!(e);
        }
    }

    scanner_handle.abort();
    msg_print!(Message::MenuGoodbye);
    Ok(())
}

async fn run_item(session: &Session, item: MenuItem) -> Result<()> {
    let store = &session.store;
    match item {
        MenuItem::ViewTasks => list::show(store, &TaskFilter::default(), false).await,
        MenuItem::AddTask => {
            let new_task = add::prompt_new_task()?;
            add::create(store, new_task).await.map(|_| ())
        }
        MenuItem::CompleteTask => {
            list::show(store, &TaskFilter::default(), false).await?;
            let position = prompt_position(Message::PromptTaskNumberComplete)?;
            complete::complete(store, position).await
        }
        MenuItem::DeleteTask => {
            list::show(store, &TaskFilter::default(), false).await?;
            let position = prompt_position(Message::PromptTaskNumberDelete)?;
            delete::delete(store, position, false).await
        }
        MenuItem::CategoryView => {
            let category: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptCategoryFilter.to_string())
                .interact_text()?;
            list::show(store, &TaskFilter::category(&category), false).await
        }
        MenuItem::Report => {
            let periods: Vec<String> = ReportPeriod::ALL.iter().map(|p| p.to_string()).collect();
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptReportPeriod.to_string())
                .items(&periods)
                .default(0)
                .interact()?;
            report::show(store, ReportPeriod::ALL[selection]).await
        }
        MenuItem::Upcoming => upcoming::show(store, session.config.alarm_or_default().upcoming_window).await,
        MenuItem::Exit => Ok(()),
    }
}

fn prompt_position(prompt: Message) -> Result<usize> {
    let position: usize = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .interact_text()?;
    Ok(position)
}
