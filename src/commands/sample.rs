use crate::{
    db::habits::Habits,
    libs::messages::Message,
    libs::sample,
    msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;

pub fn cmd() -> Result<()> {
    let mut habits_db = Habits::new()?;
    if !habits_db.get_all()?.is_empty() {
        msg_warning!(Message::SampleDataSkipped);
        return Ok(());
    }

    let samples = sample::sample_habits(Local::now().date_naive())?;
    for habit in &samples {
        habits_db.insert(habit)?;
    }

    msg_success!(Message::SampleDataPopulated(samples.len()));
    for habit in &samples {
        msg_print!(Message::SampleHabitLine {
            task: habit.task.clone(),
            periodicity: habit.periodicity.to_string(),
            check_offs: habit.check_off_count(),
        });
    }
    Ok(())
}
