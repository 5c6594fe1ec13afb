use super::Session;
use crate::{
    db::actor::StoreHandle,
    libs::{
        messages::Message,
        report::{productivity_report, task_stats, ReportPeriod},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// daily, weekly or monthly
    #[arg(default_value = "daily")]
    period: String,
}

pub async fn cmd(args: ReportArgs, user: Option<&str>) -> Result<()> {
    let period: ReportPeriod = args.period.parse()?;
    let session = Session::open(user)?;
    show(&session.store, period).await
}

pub async fn show(store: &StoreHandle, period: ReportPeriod) -> Result<()> {
    let tasks = store.snapshot().await?;
    let report = productivity_report(&tasks, period, Local::now().date_naive());

    msg_print!(Message::ReportHeader(period.to_string()), true);
    if report.total == 0 {
        msg_info!(Message::ReportNoTasksInPeriod);
    } else {
        View::report(&report)?;
        msg_print!(Message::ReportCompletion {
            completed: report.completed,
            total: report.total,
            rate: report.completion_rate(),
        });
    }

    msg_print!(Message::StatsHeader, true);
    View::stats(&task_stats(&tasks))
}
