//! Core library modules for the habitctl application.
//!
//! The analytics core (`habit`, `period`, `streak`, `analytics`) is pure and
//! side-effect free; everything touching the terminal, filesystem, or
//! configuration lives in the surrounding modules.

/// Pure analytics queries over habit collections.
pub mod analytics;

/// Application configuration management.
pub mod config;

/// Platform data directory resolution.
pub mod data_storage;

/// CSV/JSON export of habits and check-offs.
pub mod export;

/// Habit entity, periodicity, and construction validation.
pub mod habit;

/// Centralized user-facing messages and output macros.
pub mod messages;

/// Calendar period bucketing (day/week indices).
pub mod period;

/// Deterministic sample-data fixtures.
pub mod sample;

/// Streak computation over check-off histories.
pub mod streak;

/// Terminal table rendering.
pub mod view;
