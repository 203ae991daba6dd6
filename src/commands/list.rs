use crate::{
    db::habits::Habits,
    libs::analytics,
    libs::habit::Periodicity,
    libs::messages::Message,
    libs::view::View,
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only habits with this periodicity
    #[arg(long, value_enum)]
    periodicity: Option<Periodicity>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let all = Habits::new()?.get_all()?;
    let now = Local::now().naive_local();

    let habits = match args.periodicity {
        Some(periodicity) => analytics::list_by_periodicity(&all, periodicity),
        None => analytics::list_all(&all),
    };

    if habits.is_empty() {
        match args.periodicity {
            Some(periodicity) => msg_info!(Message::NoHabitsForPeriodicity(periodicity.to_string())),
            None => msg_info!(Message::NoHabitsFound),
        }
        return Ok(());
    }

    msg_print!(Message::HabitListHeader, true);
    View::habits(&habits, now)?;
    Ok(())
}
