use crate::db::db::Db;
use crate::libs::habit::{Habit, Periodicity};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use std::str::FromStr;

const INSERT_HABIT: &str = "INSERT INTO habits (id, task, periodicity, created_at) VALUES (?1, ?2, ?3, ?4)";
const INSERT_CHECK_OFF: &str = "INSERT INTO check_offs (habit_id, timestamp) VALUES (?1, ?2)";
const SELECT_HABIT_BY_ID: &str = "SELECT id, task, periodicity, created_at FROM habits WHERE id = ?1";
const SELECT_ALL_HABITS: &str = "SELECT id, task, periodicity, created_at FROM habits ORDER BY created_at, id";
const SELECT_CHECK_OFFS: &str = "SELECT timestamp FROM check_offs WHERE habit_id = ?1 ORDER BY timestamp";
const DELETE_CHECK_OFFS: &str = "DELETE FROM check_offs WHERE habit_id = ?1";
const DELETE_HABIT: &str = "DELETE FROM habits WHERE id = ?1";

/// Habit repository over SQLite.
///
/// Habits are written together with their check-off history; check-offs are
/// append-only and a habit is only ever deleted as a whole, in one
/// transaction with its history.
pub struct Habits {
    conn: Connection,
}

impl Habits {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Habits { conn: db.conn })
    }

    /// Persists a habit and any check-offs it already carries.
    pub fn insert(&mut self, habit: &Habit) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            INSERT_HABIT,
            params![habit.id, habit.task, habit.periodicity.as_str(), habit.created_at],
        )?;
        for check_off in &habit.check_offs {
            tx.execute(INSERT_CHECK_OFF, params![habit.id, check_off])?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Loads a habit with its full check-off history.
    pub fn get(&mut self, id: &str) -> Result<Option<Habit>> {
        let habit = self
            .conn
            .query_row(SELECT_HABIT_BY_ID, params![id], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, NaiveDateTime>(3)?,
                ))
            })
            .optional()?;

        match habit {
            Some((id, task, periodicity, created_at)) => {
                let check_offs = self.fetch_check_offs(&id)?;
                Ok(Some(Habit {
                    id,
                    task,
                    periodicity: Periodicity::from_str(&periodicity)?,
                    created_at,
                    check_offs,
                }))
            }
            None => Ok(None),
        }
    }

    /// Loads all habits ordered by creation time.
    pub fn get_all(&mut self) -> Result<Vec<Habit>> {
        let rows: Vec<(String, String, String, NaiveDateTime)> = {
            let mut stmt = self.conn.prepare(SELECT_ALL_HABITS)?;
            let habit_iter = stmt.query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, NaiveDateTime>(3)?,
                ))
            })?;
            habit_iter.collect::<rusqlite::Result<_>>()?
        };

        let mut habits = Vec::new();
        for (id, task, periodicity, created_at) in rows {
            let check_offs = self.fetch_check_offs(&id)?;
            habits.push(Habit {
                id,
                task,
                periodicity: Periodicity::from_str(&periodicity)?,
                created_at,
                check_offs,
            });
        }
        Ok(habits)
    }

    /// Deletes a habit and all its check-offs atomically.
    ///
    /// Returns `true` when a habit was removed, `false` when the id was
    /// unknown.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_CHECK_OFFS, params![id])?;
        let deleted = tx.execute(DELETE_HABIT, params![id])?;
        tx.commit()?;
        Ok(deleted > 0)
    }

    /// Appends a check-off to an existing habit.
    ///
    /// Validates the timestamp against the habit's creation time and
    /// deduplicates per period. Returns `false` when the period is already
    /// checked off (nothing is written).
    pub fn add_check_off(&mut self, id: &str, timestamp: NaiveDateTime) -> Result<bool> {
        let mut habit = self
            .get(id)?
            .ok_or_else(|| msg_error_anyhow!(Message::HabitNotFound(id.to_string())))?;

        if !habit.add_check_off(timestamp)? {
            return Ok(false);
        }
        self.conn.execute(INSERT_CHECK_OFF, params![id, timestamp])?;
        Ok(true)
    }

    fn fetch_check_offs(&self, habit_id: &str) -> Result<Vec<NaiveDateTime>> {
        let mut stmt = self.conn.prepare(SELECT_CHECK_OFFS)?;
        let check_off_iter = stmt.query_map(params![habit_id], |row| row.get::<_, NaiveDateTime>(0))?;

        let mut check_offs = Vec::new();
        for check_off in check_off_iter {
            check_offs.push(check_off?);
        }
        Ok(check_offs)
    }
}
