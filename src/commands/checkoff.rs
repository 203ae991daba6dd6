use crate::{
    db::habits::Habits,
    libs::habit::HabitError,
    libs::messages::Message,
    msg_error, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use clap::Args;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Args)]
pub struct CheckoffArgs {
    /// Id of the habit to check off
    habit_id: String,
    /// Check-off time "YYYY-MM-DD HH:MM:SS" (defaults to now)
    #[arg(long)]
    time: Option<String>,
}

pub fn cmd(args: CheckoffArgs) -> Result<()> {
    let timestamp = match args.time {
        Some(input) => match NaiveDateTime::parse_from_str(&input, TIME_FORMAT) {
            Ok(timestamp) => timestamp,
            Err(_) => {
                msg_error!(Message::InvalidTimeFormat(input));
                return Ok(());
            }
        },
        None => Local::now().naive_local(),
    };

    let mut habits = Habits::new()?;
    let habit = match habits.get(&args.habit_id)? {
        Some(habit) => habit,
        None => {
            msg_error!(Message::HabitNotFound(args.habit_id));
            return Ok(());
        }
    };

    match habits.add_check_off(&habit.id, timestamp) {
        Ok(true) => {
            msg_success!(Message::CheckOffRecorded {
                task: habit.task,
                time: timestamp.format(TIME_FORMAT).to_string(),
            });
        }
        Ok(false) => {
            msg_warning!(Message::CheckOffDuplicate(habit.task));
        }
        // Validation failures are user errors, reported without state change;
        // anything else (I/O, database) propagates.
        Err(err) => match err.downcast_ref::<HabitError>() {
            Some(validation) => {
                msg_error!(Message::CheckOffRejected(validation.to_string()));
            }
            None => return Err(err),
        },
    }
    Ok(())
}
