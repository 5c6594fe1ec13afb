use super::Session;
use crate::{db::actor::StoreHandle, libs::messages::Message, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task number as shown by `list`
    #[arg(required = true)]
    position: usize,
}

pub async fn cmd(args: CompleteArgs, user: Option<&str>) -> Result<()> {
    let session = Session::open(user)?;
    complete(&session.store, args.position).await
}

pub async fn complete(store: &StoreHandle, position: usize) -> Result<()> {
    let task = store.resolve(position).await?;
    if task.completed {
        msg_info!(Message::TaskAlreadyCompleted(task.title));
        return Ok(());
    }

    let task = store.complete(task.id).await?;
    msg_success!(Message::TaskCompleted(task.title));
    Ok(())
}
