//! Pure analytics queries over a collection of habits.
//!
//! Every function here is referentially transparent: no mutation, no I/O, no
//! shared state between calls. Callers pass an immutable snapshot of habits
//! for the duration of one call; results are stably ordered (by creation
//! time, then id) so repeated queries over the same snapshot are identical.

use crate::libs::habit::{Habit, Periodicity};
use crate::libs::period::{date_index, period_index};
use crate::libs::streak::{habit_report, streak_report};
use chrono::{Duration, NaiveDateTime};
use std::collections::BTreeSet;

/// Aggregate statistics across a habit collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub total_habits: usize,
    pub daily_habits: usize,
    pub weekly_habits: usize,
    pub total_check_offs: usize,
    pub average_check_offs: f64,
    pub longest_streak_overall: usize,
    pub habits_with_current_streak: usize,
    pub daily_completion_rate: f64,
    pub weekly_completion_rate: f64,
}

/// All habits, sorted by creation time then id.
pub fn list_all(habits: &[Habit]) -> Vec<&Habit> {
    let mut sorted: Vec<&Habit> = habits.iter().collect();
    sorted.sort_by(|a, b| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)));
    sorted
}

/// Habits matching a periodicity, sorted by creation time then id.
pub fn list_by_periodicity(habits: &[Habit], periodicity: Periodicity) -> Vec<&Habit> {
    list_all(habits).into_iter().filter(|h| h.periodicity == periodicity).collect()
}

/// Longest streak of a single habit.
pub fn longest_streak_for(habit: &Habit, now: NaiveDateTime) -> usize {
    habit_report(habit, now).longest
}

/// The habit with the longest streak across the whole collection.
///
/// Ties are broken by earliest creation time, then by id. Returns `None`
/// when the collection is empty or no habit has any streak yet.
pub fn longest_streak_overall(habits: &[Habit], now: NaiveDateTime) -> Option<(&Habit, usize)> {
    list_all(habits)
        .into_iter()
        .map(|h| (h, longest_streak_for(h, now)))
        .filter(|(_, len)| *len > 0)
        .max_by(|(a, a_len), (b, b_len)| {
            // list_all order already encodes the tie-break, so on equal
            // lengths the earlier habit must win the max.
            a_len.cmp(b_len).then_with(|| (b.created_at, &b.id).cmp(&(a.created_at, &a.id)))
        })
}

/// Current streak per habit, in stable collection order.
pub fn current_streaks(habits: &[Habit], now: NaiveDateTime) -> Vec<(&Habit, usize)> {
    list_all(habits).into_iter().map(|h| (h, habit_report(h, now).current)).collect()
}

/// Habits with no check-off within the last `days` days.
///
/// Habits without any check-off at all are always included.
pub fn habits_without_recent_activity(habits: &[Habit], days: i64, now: NaiveDateTime) -> Vec<&Habit> {
    let cutoff = now.date() - Duration::days(days);
    list_all(habits)
        .into_iter()
        .filter(|h| match h.last_check_off() {
            Some(last) => last.date() < cutoff,
            None => true,
        })
        .collect()
}

/// Ratio of checked-off periods to expected periods since creation, per
/// periodicity, clamped to 1.0. Periodicities with no habits rate 0.0.
pub fn completion_rate_by_periodicity(habits: &[Habit], now: NaiveDateTime) -> Vec<(Periodicity, f64)> {
    [Periodicity::Daily, Periodicity::Weekly]
        .into_iter()
        .map(|periodicity| (periodicity, completion_rate(habits, periodicity, now)))
        .collect()
}

fn completion_rate(habits: &[Habit], periodicity: Periodicity, now: NaiveDateTime) -> f64 {
    let mut expected: i64 = 0;
    let mut completed: i64 = 0;
    for habit in habits.iter().filter(|h| h.periodicity == periodicity) {
        // Periods from creation up to and including the current one.
        expected += date_index(periodicity, now.date()) - date_index(periodicity, habit.created_at.date()) + 1;
        let periods: BTreeSet<i64> = habit.check_offs.iter().map(|t| period_index(periodicity, *t)).collect();
        completed += periods.len() as i64;
    }
    if expected > 0 {
        (completed as f64 / expected as f64).min(1.0)
    } else {
        0.0
    }
}

/// Habits ranked by check-off count, descending, capped at `limit`.
pub fn most_active(habits: &[Habit], limit: usize) -> Vec<(&Habit, usize)> {
    let mut ranked: Vec<(&Habit, usize)> = list_all(habits).into_iter().map(|h| (h, h.check_off_count())).collect();
    ranked.sort_by(|(a, a_count), (b, b_count)| {
        b_count.cmp(a_count).then_with(|| (a.created_at, &a.id).cmp(&(b.created_at, &b.id)))
    });
    ranked.truncate(limit);
    ranked
}

/// Aggregate statistics for the whole collection.
pub fn statistics(habits: &[Habit], now: NaiveDateTime) -> Statistics {
    let total_habits = habits.len();
    let total_check_offs: usize = habits.iter().map(|h| h.check_off_count()).sum();
    let reports: Vec<_> = habits.iter().map(|h| streak_report(h.periodicity, &h.check_offs, now)).collect();

    Statistics {
        total_habits,
        daily_habits: habits.iter().filter(|h| h.periodicity == Periodicity::Daily).count(),
        weekly_habits: habits.iter().filter(|h| h.periodicity == Periodicity::Weekly).count(),
        total_check_offs,
        average_check_offs: if total_habits > 0 {
            total_check_offs as f64 / total_habits as f64
        } else {
            0.0
        },
        longest_streak_overall: reports.iter().map(|r| r.longest).max().unwrap_or(0),
        habits_with_current_streak: reports.iter().filter(|r| r.current > 0).count(),
        daily_completion_rate: completion_rate(habits, Periodicity::Daily, now),
        weekly_completion_rate: completion_rate(habits, Periodicity::Weekly, now),
    }
}
