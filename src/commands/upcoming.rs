use super::Session;
use crate::{
    db::actor::StoreHandle,
    libs::{alarm, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpcomingArgs {
    /// Look-ahead window in minutes (defaults to the configured window)
    #[arg(short, long)]
    minutes: Option<i64>,
}

pub async fn cmd(args: UpcomingArgs, user: Option<&str>) -> Result<()> {
    let session = Session::open(user)?;
    let minutes = args.minutes.unwrap_or(session.config.alarm_or_default().upcoming_window);
    show(&session.store, minutes).await
}

pub async fn show(store: &StoreHandle, minutes: i64) -> Result<()> {
    let tasks = store.snapshot().await?;
    let upcoming = alarm::upcoming(&tasks, Local::now().naive_local(), alarm::window_minutes(minutes));

    if upcoming.is_empty() {
        msg_info!(Message::NoUpcomingTasks(minutes));
        return Ok(());
    }

    msg_print!(Message::UpcomingHeader(minutes), true);
    View::upcoming(&upcoming)
}
