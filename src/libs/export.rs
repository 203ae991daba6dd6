//! Data export to CSV and JSON.
//!
//! Exports operate on an in-memory snapshot of habits so the produced file
//! always reflects one consistent state. Habit rows carry their streak
//! figures alongside the raw fields; check-off rows are the flat
//! `habit_id, task, timestamp` relation.

use crate::libs::habit::Habit;
use crate::libs::streak::habit_report;
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Pretty-printed JSON.
    Json,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportData {
    /// One row per habit with streak figures.
    Habits,
    /// One row per check-off.
    CheckOffs,
}

impl ExportData {
    fn label(&self) -> &'static str {
        match self {
            ExportData::Habits => "habits",
            ExportData::CheckOffs => "check_offs",
        }
    }
}

#[derive(Debug, Serialize)]
struct HabitRow {
    id: String,
    task: String,
    periodicity: String,
    created_at: String,
    check_offs: usize,
    current_streak: usize,
    longest_streak: usize,
}

#[derive(Debug, Serialize)]
struct CheckOffRow {
    habit_id: String,
    task: String,
    timestamp: String,
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    /// Writes the selected data set and returns the path written to.
    pub fn export(&self, data: ExportData, habits: &[Habit], now: NaiveDateTime) -> Result<PathBuf> {
        let path = self.output.clone().unwrap_or_else(|| self.default_file_name(data));
        match data {
            ExportData::Habits => self.write_rows(&path, &habit_rows(habits, now))?,
            ExportData::CheckOffs => self.write_rows(&path, &check_off_rows(habits))?,
        }
        Ok(path)
    }

    fn write_rows<T: Serialize>(&self, path: &PathBuf, rows: &[T]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => {
                let mut writer = csv::Writer::from_path(path)?;
                for row in rows {
                    writer.serialize(row)?;
                }
                writer.flush()?;
            }
            ExportFormat::Json => {
                fs::write(path, serde_json::to_string_pretty(rows)?)?;
            }
        }
        Ok(())
    }

    fn default_file_name(&self, data: ExportData) -> PathBuf {
        PathBuf::from(format!(
            "habitctl_{}_{}.{}",
            data.label(),
            Local::now().format("%Y-%m-%d"),
            self.format.extension()
        ))
    }
}

fn habit_rows(habits: &[Habit], now: NaiveDateTime) -> Vec<HabitRow> {
    habits
        .iter()
        .map(|habit| {
            let report = habit_report(habit, now);
            HabitRow {
                id: habit.id.clone(),
                task: habit.task.clone(),
                periodicity: habit.periodicity.to_string(),
                created_at: habit.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                check_offs: habit.check_off_count(),
                current_streak: report.current,
                longest_streak: report.longest,
            }
        })
        .collect()
}

fn check_off_rows(habits: &[Habit]) -> Vec<CheckOffRow> {
    habits
        .iter()
        .flat_map(|habit| {
            habit.check_offs.iter().map(|timestamp| CheckOffRow {
                habit_id: habit.id.clone(),
                task: habit.task.clone(),
                timestamp: timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            })
        })
        .collect()
}
