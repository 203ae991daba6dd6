#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use habitctl::db::habits::Habits;
    use habitctl::libs::habit::{Habit, HabitError, Periodicity};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct HabitTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for HabitTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            HabitTestContext { _temp_dir: temp_dir }
        }
    }

    fn created_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap().and_hms_opt(8, 0, 0).unwrap()
    }

    fn day(offset: i64) -> NaiveDateTime {
        created_at() + Duration::days(offset)
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_insert_and_get_roundtrip(_ctx: &mut HabitTestContext) {
        let mut habits = Habits::new().unwrap();

        let mut habit = Habit::with_created_at("Exercise", Periodicity::Daily, created_at()).unwrap();
        habit.add_check_off(day(0)).unwrap();
        habit.add_check_off(day(1)).unwrap();
        habits.insert(&habit).unwrap();

        let loaded = habits.get(&habit.id).unwrap().unwrap();
        assert_eq!(loaded.id, habit.id);
        assert_eq!(loaded.task, "Exercise");
        assert_eq!(loaded.periodicity, Periodicity::Daily);
        assert_eq!(loaded.created_at, created_at());
        assert_eq!(loaded.check_offs, vec![day(0), day(1)]);
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_get_unknown_id_returns_none(_ctx: &mut HabitTestContext) {
        let mut habits = Habits::new().unwrap();
        assert!(habits.get("habit_missing").unwrap().is_none());
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_get_all_ordered_by_creation(_ctx: &mut HabitTestContext) {
        let mut habits = Habits::new().unwrap();

        let second = Habit::with_created_at("Read", Periodicity::Daily, day(1)).unwrap();
        let first = Habit::with_created_at("Exercise", Periodicity::Daily, created_at()).unwrap();
        habits.insert(&second).unwrap();
        habits.insert(&first).unwrap();

        let all = habits.get_all().unwrap();
        let tasks: Vec<_> = all.iter().map(|h| h.task.as_str()).collect();
        assert_eq!(tasks, vec!["Exercise", "Read"]);
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_add_check_off_persists_sorted(_ctx: &mut HabitTestContext) {
        let mut habits = Habits::new().unwrap();
        let habit = Habit::with_created_at("Exercise", Periodicity::Daily, created_at()).unwrap();
        habits.insert(&habit).unwrap();

        assert!(habits.add_check_off(&habit.id, day(2)).unwrap());
        assert!(habits.add_check_off(&habit.id, day(0)).unwrap());

        let loaded = habits.get(&habit.id).unwrap().unwrap();
        assert_eq!(loaded.check_offs, vec![day(0), day(2)]);
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_duplicate_check_off_rejected(_ctx: &mut HabitTestContext) {
        let mut habits = Habits::new().unwrap();
        let habit = Habit::with_created_at("Exercise", Periodicity::Daily, created_at()).unwrap();
        habits.insert(&habit).unwrap();

        assert!(habits.add_check_off(&habit.id, day(0)).unwrap());
        // Same calendar day, later time: rejected, nothing written.
        let later_same_day = day(0) + Duration::hours(10);
        assert!(!habits.add_check_off(&habit.id, later_same_day).unwrap());

        let loaded = habits.get(&habit.id).unwrap().unwrap();
        assert_eq!(loaded.check_off_count(), 1);
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_weekly_duplicate_in_same_week_rejected(_ctx: &mut HabitTestContext) {
        let mut habits = Habits::new().unwrap();
        let habit = Habit::with_created_at("Grocery shop", Periodicity::Weekly, created_at()).unwrap();
        habits.insert(&habit).unwrap();

        // created_at() falls on a Monday; Thursday is the same week.
        assert!(habits.add_check_off(&habit.id, day(0)).unwrap());
        assert!(!habits.add_check_off(&habit.id, day(3)).unwrap());
        assert!(habits.add_check_off(&habit.id, day(7)).unwrap());

        let loaded = habits.get(&habit.id).unwrap().unwrap();
        assert_eq!(loaded.check_off_count(), 2);
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_check_off_before_creation_rejected(_ctx: &mut HabitTestContext) {
        let mut habits = Habits::new().unwrap();
        let habit = Habit::with_created_at("Exercise", Periodicity::Daily, created_at()).unwrap();
        habits.insert(&habit).unwrap();

        let err = habits.add_check_off(&habit.id, day(-1)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<HabitError>(),
            Some(HabitError::CheckOffBeforeCreation { .. })
        ));

        let loaded = habits.get(&habit.id).unwrap().unwrap();
        assert_eq!(loaded.check_off_count(), 0);
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_check_off_unknown_habit_fails(_ctx: &mut HabitTestContext) {
        let mut habits = Habits::new().unwrap();
        assert!(habits.add_check_off("habit_missing", day(0)).is_err());
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_delete_removes_habit_and_history(_ctx: &mut HabitTestContext) {
        let mut habits = Habits::new().unwrap();
        let mut habit = Habit::with_created_at("Exercise", Periodicity::Daily, created_at()).unwrap();
        habit.add_check_off(day(0)).unwrap();
        habits.insert(&habit).unwrap();

        assert!(habits.delete(&habit.id).unwrap());
        assert!(habits.get(&habit.id).unwrap().is_none());
        // Second delete finds nothing.
        assert!(!habits.delete(&habit.id).unwrap());

        // Re-inserting under the same id works, proving the check-off
        // history was removed along with the habit.
        habits.insert(&habit).unwrap();
        let loaded = habits.get(&habit.id).unwrap().unwrap();
        assert_eq!(loaded.check_off_count(), 1);
    }

    #[test_context(HabitTestContext)]
    #[test]
    fn test_empty_task_rejected_at_construction(_ctx: &mut HabitTestContext) {
        assert_eq!(
            Habit::with_created_at("   ", Periodicity::Daily, created_at()).unwrap_err(),
            HabitError::EmptyTask
        );
    }
}
