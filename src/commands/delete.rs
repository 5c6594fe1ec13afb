use super::Session;
use crate::{db::actor::StoreHandle, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task number as shown by `list`
    #[arg(required = true)]
    position: usize,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs, user: Option<&str>) -> Result<()> {
    let session = Session::open(user)?;
    delete(&session.store, args.position, args.yes).await
}

pub async fn delete(store: &StoreHandle, position: usize, skip_confirm: bool) -> Result<()> {
    let task = store.resolve(position).await?;

    if !skip_confirm {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::TaskDeleteCancelled);
            return Ok(());
        }
    }

    let removed = store.delete(task.id).await?;
    msg_success!(Message::TaskDeleted(removed.title));
    Ok(())
}
