//! Predefined sample habits with four weeks of history.
//!
//! The fixture produces five habits (three daily, two weekly) with a
//! deterministic check-off pattern: realistic enough to exercise the streak
//! analytics (gaps, broken and live streaks) while staying reproducible for
//! a given day.

use crate::libs::habit::{Habit, HabitError, Periodicity};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

const DAILY_TASKS: [&str; 3] = ["Brush teeth", "Exercise", "Read"];
const WEEKLY_TASKS: [&str; 2] = ["Grocery shop", "Clean house"];

/// Builds the five predefined habits with history ending at `today`.
///
/// Daily habits are checked off at 08:00, weekly habits on Mondays at 10:00.
pub fn sample_habits(today: NaiveDate) -> Result<Vec<Habit>, HabitError> {
    let start = today - Duration::weeks(4);
    let created_at = start.and_time(NaiveTime::MIN);
    let mut habits = Vec::new();

    for task in DAILY_TASKS {
        let mut habit = Habit::with_created_at(task, Periodicity::Daily, created_at)?;
        let mut date = start;
        while date <= today {
            if should_check_off_daily(date) {
                habit.add_check_off(date.and_hms_opt(8, 0, 0).unwrap())?;
            }
            date += Duration::days(1);
        }
        habits.push(habit);
    }

    for task in WEEKLY_TASKS {
        let mut habit = Habit::with_created_at(task, Periodicity::Weekly, created_at)?;
        let mut date = start;
        while date <= today {
            if date.weekday().num_days_from_monday() == 0 && should_check_off_weekly(date) {
                habit.add_check_off(date.and_hms_opt(10, 0, 0).unwrap())?;
            }
            date += Duration::days(1);
        }
        habits.push(habit);
    }

    Ok(habits)
}

// Weekends miss roughly a third of days, weekdays a fifth.
fn should_check_off_daily(date: NaiveDate) -> bool {
    if date.weekday().num_days_from_monday() >= 5 {
        date.day() % 3 != 0
    } else {
        date.day() % 5 != 0
    }
}

// Roughly one missed week in seven.
fn should_check_off_weekly(monday: NaiveDate) -> bool {
    monday.day() % 7 != 0
}
