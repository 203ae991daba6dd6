use crate::{
    db::habits::Habits,
    libs::messages::Message,
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Id of the habit to delete
    habit_id: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    force: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut habits = Habits::new()?;
    let habit = match habits.get(&args.habit_id)? {
        Some(habit) => habit,
        None => {
            msg_error!(Message::HabitNotFound(args.habit_id));
            return Ok(());
        }
    };

    if !args.force {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteHabit(habit.task.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    habits.delete(&habit.id)?;
    msg_success!(Message::HabitDeleted(habit.task));
    Ok(())
}
