use super::Session;
use crate::libs::export::{ExportFormat, Exporter};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "json")]
    format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs, user: Option<&str>) -> Result<()> {
    let session = Session::open(user)?;
    let tasks = session.store.snapshot().await?;

    Exporter::new(args.format, args.output).export(&tasks)
}
