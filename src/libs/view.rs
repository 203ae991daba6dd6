//! Terminal table rendering for habits and analytics.

use crate::libs::analytics::Statistics;
use crate::libs::habit::{Habit, Periodicity};
use crate::libs::streak::habit_report;
use anyhow::Result;
use chrono::NaiveDateTime;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Habit listing with check-off counts.
    pub fn habits(habits: &[&Habit], now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "PERIODICITY", "CREATED", "CHECK-OFFS", "CURRENT", "LONGEST"]);
        for habit in habits {
            let report = habit_report(habit, now);
            table.add_row(row![
                habit.id,
                habit.task,
                habit.periodicity,
                habit.created_at.format("%Y-%m-%d"),
                habit.check_off_count(),
                report.current,
                report.longest
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Quick status overview with a per-habit activity marker.
    pub fn status(habits: &[&Habit], now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASK", "TYPE", "STREAK", "STATUS"]);
        for habit in habits {
            let current = habit_report(habit, now).current;
            let status = match current {
                0 => "🎯 READY",
                1..=6 => "⭐ ACTIVE",
                _ => "🔥 ON FIRE",
            };
            table.add_row(row![habit.task, habit.periodicity, current, status]);
        }
        table.printstd();

        Ok(())
    }

    /// Per-habit streak breakdown for the analytics dashboard.
    pub fn streaks(habits: &[&Habit], now: NaiveDateTime) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TASK", "PERIODICITY", "CURRENT", "LONGEST", "RUNS"]);
        for habit in habits {
            let report = habit_report(habit, now);
            table.add_row(row![habit.task, habit.periodicity, report.current, report.longest, report.runs.len()]);
        }
        table.printstd();

        Ok(())
    }

    /// Aggregate collection statistics.
    pub fn statistics(stats: &Statistics) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Total habits", stats.total_habits]);
        table.add_row(row!["Daily habits", stats.daily_habits]);
        table.add_row(row!["Weekly habits", stats.weekly_habits]);
        table.add_row(row!["Total check-offs", stats.total_check_offs]);
        table.add_row(row!["Avg check-offs per habit", format!("{:.1}", stats.average_check_offs)]);
        table.add_row(row!["Longest streak overall", stats.longest_streak_overall]);
        table.add_row(row!["Habits with live streak", stats.habits_with_current_streak]);
        table.printstd();

        Ok(())
    }

    /// Completion rates per periodicity.
    pub fn completion(rates: &[(Periodicity, f64)]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PERIODICITY", "COMPLETION"]);
        for (periodicity, rate) in rates {
            table.add_row(row![periodicity, format!("{:.0}%", rate * 100.0)]);
        }
        table.printstd();

        Ok(())
    }
}
