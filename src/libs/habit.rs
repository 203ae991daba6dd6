//! Habit entity and construction-time validation.
//!
//! A habit is an immutable-identity record: once created, only its check-off
//! history grows. Everything else (task, periodicity, creation time) is fixed
//! for the habit's lifetime, because changing the periodicity would invalidate
//! the semantics of the recorded streak history.

use crate::libs::period::period_index;
use chrono::{Local, NaiveDateTime};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Validation errors raised at the habit construction/append boundary.
///
/// The analytics core itself never errors; degenerate input there yields
/// zero-valued results. These errors exist so invalid data is rejected
/// before it ever reaches storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HabitError {
    #[error("invalid periodicity '{0}', expected 'daily' or 'weekly'")]
    InvalidPeriodicity(String),
    #[error("habit task must not be empty")]
    EmptyTask,
    #[error("check-off at {check_off} precedes habit creation at {created_at}")]
    CheckOffBeforeCreation {
        check_off: NaiveDateTime,
        created_at: NaiveDateTime,
    },
}

/// Cadence at which a habit is expected to be checked off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Periodicity {
    /// One check-off expected per calendar day.
    Daily,
    /// One check-off expected per calendar week (Monday start).
    Weekly,
}

impl Periodicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
        }
    }
}

impl fmt::Display for Periodicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Periodicity {
    type Err = HabitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Periodicity::Daily),
            "weekly" => Ok(Periodicity::Weekly),
            other => Err(HabitError::InvalidPeriodicity(other.to_string())),
        }
    }
}

/// A tracked habit with its full check-off history.
///
/// `check_offs` is kept sorted ascending and never shrinks; a habit is only
/// ever removed as a whole, together with its history.
#[derive(Debug, Clone)]
pub struct Habit {
    pub id: String,
    pub task: String,
    pub periodicity: Periodicity,
    pub created_at: NaiveDateTime,
    pub check_offs: Vec<NaiveDateTime>,
}

impl Habit {
    /// Creates a habit with the current local time as creation time.
    pub fn new(task: &str, periodicity: Periodicity) -> Result<Self, HabitError> {
        Self::with_created_at(task, periodicity, Local::now().naive_local())
    }

    /// Creates a habit with an explicit creation time.
    pub fn with_created_at(task: &str, periodicity: Periodicity, created_at: NaiveDateTime) -> Result<Self, HabitError> {
        let task = task.trim();
        if task.is_empty() {
            return Err(HabitError::EmptyTask);
        }
        Ok(Habit {
            id: generate_id(),
            task: task.to_string(),
            periodicity,
            created_at,
            check_offs: Vec::new(),
        })
    }

    /// Appends a check-off, keeping the history sorted.
    ///
    /// Returns `Ok(false)` when a check-off for the same period already
    /// exists (the new timestamp is discarded), and an error when the
    /// timestamp precedes the habit's creation time.
    pub fn add_check_off(&mut self, timestamp: NaiveDateTime) -> Result<bool, HabitError> {
        if timestamp < self.created_at {
            return Err(HabitError::CheckOffBeforeCreation {
                check_off: timestamp,
                created_at: self.created_at,
            });
        }
        let index = period_index(self.periodicity, timestamp);
        if self.check_offs.iter().any(|c| period_index(self.periodicity, *c) == index) {
            return Ok(false);
        }
        self.check_offs.push(timestamp);
        self.check_offs.sort();
        Ok(true)
    }

    pub fn check_off_count(&self) -> usize {
        self.check_offs.len()
    }

    pub fn last_check_off(&self) -> Option<NaiveDateTime> {
        self.check_offs.last().copied()
    }
}

fn generate_id() -> String {
    format!("habit_{}", Uuid::new_v4().simple())
}
