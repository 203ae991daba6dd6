use crate::{
    db::habits::Habits,
    libs::analytics,
    libs::messages::Message,
    libs::view::View,
    msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use chrono::Local;

const INACTIVITY_DAYS: i64 = 7;

pub fn cmd() -> Result<()> {
    let habits = Habits::new()?.get_all()?;
    if habits.is_empty() {
        msg_info!(Message::NoHabitsFound);
        return Ok(());
    }

    let now = Local::now().naive_local();

    msg_print!(Message::AnalyticsHeader, true);
    View::streaks(&analytics::list_all(&habits), now)?;

    match analytics::longest_streak_overall(&habits, now) {
        Some((habit, periods)) => msg_print!(
            Message::LongestStreakOverall {
                task: habit.task.clone(),
                periods,
            },
            true
        ),
        None => msg_info!(Message::NoStreaksYet, true),
    }

    msg_print!(Message::StatisticsHeader);
    View::statistics(&analytics::statistics(&habits, now))?;

    msg_print!(Message::CompletionHeader);
    View::completion(&analytics::completion_rate_by_periodicity(&habits, now))?;

    let inactive = analytics::habits_without_recent_activity(&habits, INACTIVITY_DAYS, now);
    if !inactive.is_empty() {
        msg_warning!(Message::InactiveHabits {
            count: inactive.len(),
            days: INACTIVITY_DAYS,
        });
    }
    Ok(())
}
