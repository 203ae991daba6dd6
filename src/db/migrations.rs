//! Database schema migration management.
//!
//! Versioned schema changes applied automatically during database
//! initialization. Each applied migration is recorded in a tracking table,
//! and pending migrations run inside a transaction so a failure never leaves
//! the schema half-updated.

use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// Tracking table recording every applied migration.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

const SCHEMA_HABITS: &str = "
CREATE TABLE IF NOT EXISTS habits (
    id TEXT PRIMARY KEY,
    task TEXT NOT NULL,
    periodicity TEXT NOT NULL,
    created_at TIMESTAMP NOT NULL
)";

const SCHEMA_CHECK_OFFS: &str = "
CREATE TABLE IF NOT EXISTS check_offs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    habit_id TEXT NOT NULL,
    timestamp TIMESTAMP NOT NULL,
    FOREIGN KEY (habit_id) REFERENCES habits(id) ON DELETE CASCADE
)";

const INDEX_CHECK_OFFS_HABIT_ID: &str = "CREATE INDEX IF NOT EXISTS idx_check_offs_habit_id ON check_offs (habit_id)";

/// A single schema change with version tracking.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = MigrationManager { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.add_migration(1, "create_habits_and_check_offs", |tx| {
            tx.execute(SCHEMA_HABITS, [])?;
            tx.execute(SCHEMA_CHECK_OFFS, [])?;
            tx.execute(INDEX_CHECK_OFFS_HABIT_ID, [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies all pending migrations inside one transaction.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!("Database is up to date");
            return Ok(());
        }

        let tx = conn.transaction()?;
        for migration in pending {
            msg_debug!(format!("Applying migration {} ({})", migration.version, migration.name));
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0)).unwrap_or(Some(0));

        Ok(version.unwrap_or(0))
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings a freshly opened connection up to the latest schema version.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

/// Current schema version, 0 when no migration has been applied.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let table_exists: bool = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'migrations'",
            [],
            |row| row.get::<_, i32>(0),
        )
        .map(|count| count > 0)?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}
