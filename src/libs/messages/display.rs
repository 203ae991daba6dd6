//! Display implementation for habitctl application messages.
//!
//! All user-facing text lives here, behind the `Message` enum: one place to
//! keep wording consistent and parameters type-checked.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === HABIT MESSAGES ===
            Message::HabitCreated { task, id } => format!("Habit '{}' created (id: {})", task, id),
            Message::HabitRejected(reason) => format!("Habit rejected: {}", reason),
            Message::HabitDeleted(task) => format!("Habit '{}' and its check-off history deleted", task),
            Message::HabitNotFound(id) => format!("No habit found with id '{}'", id),
            Message::ConfirmDeleteHabit(task) => format!("Delete habit '{}' and all its check-offs?", task),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),
            Message::NoHabitsFound => "No habits found. Create one with 'habitctl create' or seed demo data with 'habitctl sample'".to_string(),
            Message::NoHabitsForPeriodicity(periodicity) => format!("No {} habits found", periodicity),
            Message::HabitListHeader => "📋 Habits".to_string(),

            // === CHECK-OFF MESSAGES ===
            Message::CheckOffRecorded { task, time } => format!("Checked off '{}' at {}", task, time),
            Message::CheckOffDuplicate(task) => format!("'{}' is already checked off for this period", task),
            Message::CheckOffRejected(reason) => format!("Check-off rejected: {}", reason),
            Message::InvalidTimeFormat(input) => format!("Invalid time '{}'. Use YYYY-MM-DD HH:MM:SS", input),

            // === ANALYTICS MESSAGES ===
            Message::StatusHeader => "📊 Quick Status".to_string(),
            Message::AnalyticsHeader => "📈 Habit Analytics".to_string(),
            Message::StatisticsHeader => "Σ Statistics".to_string(),
            Message::CompletionHeader => "Completion rates".to_string(),
            Message::LongestStreakOverall { task, periods } => {
                format!("🏆 Longest streak overall: '{}' with {} periods", task, periods)
            }
            Message::NoStreaksYet => "No streaks yet. Check off a habit to get started!".to_string(),
            Message::InactiveHabits { count, days } => {
                format!("{} habit(s) without a check-off in the last {} days", count, days)
            }

            // === SAMPLE DATA MESSAGES ===
            Message::SampleDataPopulated(count) => format!("Populated database with {} sample habits", count),
            Message::SampleDataSkipped => "Database already contains habits, skipping sample data".to_string(),
            Message::SampleHabitLine { task, periodicity, check_offs } => {
                format!("  • {} ({}) - {} check-offs", task, periodicity, check_offs)
            }

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Data exported to: {}", path),
            Message::NoDataToExport => "Nothing to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptDbPath => "Database file path (empty for default)".to_string(),
        };
        write!(f, "{}", text)
    }
}
