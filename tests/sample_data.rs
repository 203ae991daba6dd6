#[cfg(test)]
mod tests {
    use chrono::{Datelike, NaiveDate};
    use habitctl::libs::habit::Periodicity;
    use habitctl::libs::period::period_index;
    use habitctl::libs::sample::sample_habits;
    use std::collections::BTreeSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    }

    #[test]
    fn test_five_predefined_habits() {
        let habits = sample_habits(today()).unwrap();
        assert_eq!(habits.len(), 5);

        let daily = habits.iter().filter(|h| h.periodicity == Periodicity::Daily).count();
        let weekly = habits.iter().filter(|h| h.periodicity == Periodicity::Weekly).count();
        assert_eq!(daily, 3);
        assert_eq!(weekly, 2);

        let tasks: Vec<_> = habits.iter().map(|h| h.task.as_str()).collect();
        assert_eq!(tasks, vec!["Brush teeth", "Exercise", "Read", "Grocery shop", "Clean house"]);
    }

    #[test]
    fn test_every_habit_has_history() {
        for habit in sample_habits(today()).unwrap() {
            assert!(!habit.check_offs.is_empty(), "habit '{}' has no check-offs", habit.task);
        }
    }

    #[test]
    fn test_check_offs_respect_creation_time() {
        for habit in sample_habits(today()).unwrap() {
            for check_off in &habit.check_offs {
                assert!(*check_off >= habit.created_at);
                assert!(check_off.date() <= today());
            }
        }
    }

    #[test]
    fn test_check_offs_unique_per_period() {
        for habit in sample_habits(today()).unwrap() {
            let periods: BTreeSet<i64> = habit
                .check_offs
                .iter()
                .map(|t| period_index(habit.periodicity, *t))
                .collect();
            assert_eq!(periods.len(), habit.check_off_count());
        }
    }

    #[test]
    fn test_weekly_check_offs_fall_on_mondays() {
        for habit in sample_habits(today()).unwrap() {
            if habit.periodicity != Periodicity::Weekly {
                continue;
            }
            for check_off in &habit.check_offs {
                assert_eq!(check_off.date().weekday().num_days_from_monday(), 0);
            }
        }
    }

    #[test]
    fn test_fixture_is_deterministic() {
        let first = sample_habits(today()).unwrap();
        let second = sample_habits(today()).unwrap();
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.task, b.task);
            assert_eq!(a.check_offs, b.check_offs);
        }
    }
}
