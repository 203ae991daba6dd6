//! Database layer for the habitctl application.
//!
//! SQLite-backed persistence for habits and their check-off histories, with
//! a versioned migration system for schema evolution. Storage is a detail of
//! this layer; the analytics core only ever sees in-memory `Habit` snapshots
//! loaded here.

/// Core database connection and initialization.
pub mod db;

/// Habit and check-off persistence operations.
pub mod habits;

/// Versioned schema migrations.
pub mod migrations;
