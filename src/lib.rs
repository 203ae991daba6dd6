//! # Habitctl - Habit tracking from the command line
//!
//! A command-line utility for tracking daily and weekly habits and analyzing
//! streaks over their check-off history.
//!
//! ## Features
//!
//! - **Habit Management**: Create, check off, and delete daily/weekly habits
//! - **Streak Analytics**: Current and longest streaks from period-bucketed
//!   check-off history, with gap detection
//! - **Analytics Dashboard**: Per-habit streaks, completion rates, and
//!   collection-wide statistics
//! - **Sample Data**: Predefined habits with four weeks of demo history
//! - **Data Export**: Export habits and check-offs to CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use habitctl::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
