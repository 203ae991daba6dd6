//! Streak computation over a habit's check-off history.
//!
//! Check-offs are bucketed into period indices, deduplicated, and partitioned
//! into maximal runs of consecutive periods. The longest run is the habit's
//! longest streak; the trailing run is the current streak, but only while it
//! is still alive (it reaches the current period or the one immediately
//! before it, i.e. the current period's deadline has not been missed yet).
//!
//! This module never errors: empty or degenerate input produces zero-valued
//! reports.

use crate::libs::habit::{Habit, Periodicity};
use crate::libs::period::period_index;
use chrono::NaiveDateTime;
use std::collections::{BTreeSet, HashMap};

/// A maximal sequence of consecutive checked-off periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// Period index of the first check-off in the run.
    pub start: i64,
    /// Number of consecutive periods covered by the run.
    pub len: usize,
}

impl Run {
    /// Period index of the last check-off in the run.
    pub fn end(&self) -> i64 {
        self.start + self.len as i64 - 1
    }
}

/// Streak statistics for a single habit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreakReport {
    /// Length of the longest run, 0 with no check-offs.
    pub longest: usize,
    /// Length of the trailing run while it is still alive, otherwise 0.
    pub current: usize,
    /// All runs, ordered by start period.
    pub runs: Vec<Run>,
}

/// Computes streak statistics for one set of check-offs.
///
/// `now` anchors the liveness test for the current streak. Raw duplicate
/// timestamps within one period collapse to a single logical check-off.
pub fn streak_report(periodicity: Periodicity, check_offs: &[NaiveDateTime], now: NaiveDateTime) -> StreakReport {
    let indices: BTreeSet<i64> = check_offs.iter().map(|t| period_index(periodicity, *t)).collect();

    let mut runs: Vec<Run> = Vec::new();
    for index in indices {
        match runs.last_mut() {
            Some(run) if run.end() + 1 == index => run.len += 1,
            _ => runs.push(Run { start: index, len: 1 }),
        }
    }

    let longest = runs.iter().map(|r| r.len).max().unwrap_or(0);
    let today = period_index(periodicity, now);
    let current = match runs.last() {
        Some(run) if run.end() >= today - 1 => run.len,
        _ => 0,
    };

    StreakReport { longest, current, runs }
}

/// Streak statistics for a habit.
pub fn habit_report(habit: &Habit, now: NaiveDateTime) -> StreakReport {
    streak_report(habit.periodicity, &habit.check_offs, now)
}

/// Collection-level analysis: one report per habit plus the overall winner.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    /// Habit id to streak report.
    pub per_habit: HashMap<String, StreakReport>,
    /// Habit id and streak length of the longest streak across the
    /// collection. `None` when no habit has any streak at all.
    pub overall_longest: Option<(String, usize)>,
}

/// Analyzes a snapshot of habits.
///
/// Pure over its input: the same snapshot always yields the same analysis.
/// The overall winner is the habit with the maximum longest streak; ties are
/// broken by earliest creation time, then by id, for determinism.
pub fn analyze(habits: &[Habit], now: NaiveDateTime) -> Analysis {
    let per_habit: HashMap<String, StreakReport> = habits.iter().map(|h| (h.id.clone(), habit_report(h, now))).collect();

    let mut overall_longest: Option<(&Habit, usize)> = None;
    for habit in habits {
        let longest = per_habit[&habit.id].longest;
        if longest == 0 {
            continue;
        }
        let wins = match overall_longest {
            None => true,
            Some((best, best_len)) => {
                longest > best_len
                    || (longest == best_len && (habit.created_at, &habit.id) < (best.created_at, &best.id))
            }
        };
        if wins {
            overall_longest = Some((habit, longest));
        }
    }

    Analysis {
        per_habit,
        overall_longest: overall_longest.map(|(h, len)| (h.id.clone(), len)),
    }
}
