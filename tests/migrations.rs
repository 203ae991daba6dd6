#[cfg(test)]
mod tests {
    use habitctl::db::db::DB_FILE_NAME;
    use habitctl::db::habits::Habits;
    use habitctl::db::migrations::get_db_version;
    use habitctl::libs::data_storage::DataStorage;
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_created_on_first_open(_ctx: &mut MigrationTestContext) {
        // Opening the repository applies all pending migrations.
        let _ = Habits::new().unwrap();

        let db_path = DataStorage::new().get_path(DB_FILE_NAME).unwrap();
        let conn = Connection::open(db_path).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 1);

        for table in ["habits", "check_offs", "migrations"] {
            let count: i32 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table '{}'", table);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_is_idempotent(_ctx: &mut MigrationTestContext) {
        let _ = Habits::new().unwrap();
        let _ = Habits::new().unwrap();

        let db_path = DataStorage::new().get_path(DB_FILE_NAME).unwrap();
        let conn = Connection::open(db_path).unwrap();
        let applied: i32 = conn.query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0)).unwrap();
        assert_eq!(applied, 1);
    }
}
