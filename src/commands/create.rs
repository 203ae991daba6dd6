use crate::{
    db::habits::Habits,
    libs::habit::{Habit, Periodicity},
    libs::messages::Message,
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Descriptive task, e.g. "Exercise"
    task: String,
    /// How often the habit should be checked off
    #[arg(value_enum)]
    periodicity: Periodicity,
}

pub fn cmd(args: CreateArgs) -> Result<()> {
    let habit = match Habit::new(&args.task, args.periodicity) {
        Ok(habit) => habit,
        Err(err) => {
            msg_error!(Message::HabitRejected(err.to_string()));
            return Ok(());
        }
    };

    Habits::new()?.insert(&habit)?;

    msg_success!(Message::HabitCreated {
        task: habit.task,
        id: habit.id,
    });
    Ok(())
}
