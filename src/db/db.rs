use crate::db::migrations;
use crate::libs::config::Config;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "habits.db";

/// SQLite connection bootstrap.
///
/// Opens the database at the configured location, enables foreign keys, and
/// brings the schema up to date through the migration system.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = Config::read()?.db_file()?;
        let mut conn = Connection::open(db_file_path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
