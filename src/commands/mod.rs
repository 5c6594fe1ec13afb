pub mod add;
pub mod complete;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod menu;
pub mod report;
pub mod upcoming;
pub mod watch;

use crate::db::actor::{self, StoreHandle};
use crate::db::tasks::{Owner, TaskStore};
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::secret;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task (prompts for details when no title is given)")]
    Add(add::AddArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Mark a task as done", arg_required_else_help = true)]
    Complete(complete::CompleteArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Show a productivity report")]
    Report(report::ReportArgs),
    #[command(about = "Show tasks that are due soon")]
    Upcoming(upcoming::UpcomingArgs),
    #[command(about = "Export tasks as JSON or CSV")]
    Export(export::ExportArgs),
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Interactive menu (default)")]
    Menu,
    #[command(about = "Watch for due tasks and raise alarms")]
    Watch(watch::WatchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Open this user's task list instead of the default one
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[arg(long, hide = true)]
    daemon_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let user = cli.user.as_deref();

        if cli.daemon_run {
            return watch::run_foreground(user).await;
        }

        match cli.command {
            None | Some(Commands::Menu) => menu::cmd(user).await,
            Some(Commands::Add(args)) => add::cmd(args, user).await,
            Some(Commands::List(args)) => list::cmd(args, user).await,
            Some(Commands::Complete(args)) => complete::cmd(args, user).await,
            Some(Commands::Delete(args)) => delete::cmd(args, user).await,
            Some(Commands::Report(args)) => report::cmd(args, user).await,
            Some(Commands::Upcoming(args)) => upcoming::cmd(args, user).await,
            Some(Commands::Export(args)) => export::cmd(args, user).await,
            Some(Commands::Init(args)) => init::cmd(args),
            Some(Commands::Watch(args)) => watch::cmd(args, user).await,
        }
    }
}

/// Everything a command needs to work on one owner's tasks.
pub struct Session {
    pub store: StoreHandle,
    pub config: Config,
    pub owner: Owner,
}

impl Session {
    /// Loads the key, reads the configuration and starts the store actor for
    /// `user`, or for the configured default owner when `user` is `None`.
    pub fn open(user: Option<&str>) -> Result<Session> {
        let storage = DataStorage::new();
        let cipher = secret::init(&storage)?.clone();
        let config = Config::read_from(&storage)?;
        let owner = Owner::parse(user.or(config.owner.as_deref()))?;
        let store = actor::spawn(TaskStore::open(&storage, &owner, cipher)?);

        Ok(Session { store, config, owner })
    }
}
