use crate::{
    db::habits::Habits,
    libs::export::{ExportData, ExportFormat, Exporter},
    libs::messages::Message,
    msg_info, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Which data set to export
    #[arg(long, value_enum, default_value = "habits")]
    data: ExportData,
    /// Output format
    #[arg(long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output file (defaults to habitctl_<data>_<date>.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let habits = Habits::new()?.get_all()?;
    if habits.is_empty() {
        msg_info!(Message::NoDataToExport);
        return Ok(());
    }

    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(args.data, &habits, Local::now().naive_local())?;

    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
