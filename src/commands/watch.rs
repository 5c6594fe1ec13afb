use super::Session;
use crate::{
    db::tasks::Owner,
    libs::{alarm::AlarmScanner, config::Config, daemon, data_storage::DataStorage, messages::Message, notifier::ConsoleNotifier, secret},
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Run the watcher in the background
    #[arg(short, long, conflicts_with = "stop")]
    daemon: bool,

    /// Stop the background watcher
    #[arg(short, long)]
    stop: bool,
}

pub async fn cmd(args: WatchArgs, user: Option<&str>) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }

    if args.daemon {
        let storage = DataStorage::new();
        secret::init(&storage)?;
        let config = Config::read_from(&storage)?;
        let owner = Owner::parse(user.or(config.owner.as_deref()))?;
        return daemon::spawn(&owner);
    }

    run_foreground(user).await
}

/// Runs the scanner in this process until SIGINT/SIGTERM or Ctrl-C.
pub async fn run_foreground(user: Option<&str>) -> Result<()> {
    let session = Session::open(user)?;
    let alarm_config = session.config.alarm_or_default();
    msg_info!(Message::AlarmScannerStarted(alarm_config.poll_interval_secs()));

    let scanner = AlarmScanner::new(session.store, Arc::new(ConsoleNotifier), alarm_config);
    daemon::run_with_signal_handling(scanner).await
}
