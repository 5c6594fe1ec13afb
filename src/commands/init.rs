//! Configuration initialization command.
//!
//! Creates the encryption key if there is none yet, then runs the
//! configuration wizard. `--delete` removes the configuration file instead;
//! the key and the task stores are never touched.

use crate::{
    libs::{config::Config, data_storage::DataStorage, messages::Message, secret},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove the existing configuration instead of creating a new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    secret::init(&DataStorage::new())?;

    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    Config::init()?.save()?;
    msg_success!(Message::ConfigSaved);
    Ok(())
}
