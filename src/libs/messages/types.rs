#[derive(Debug, Clone)]
pub enum Message {
    // === HABIT MESSAGES ===
    HabitCreated { task: String, id: String },
    HabitRejected(String),
    HabitDeleted(String),
    HabitNotFound(String),
    ConfirmDeleteHabit(String),
    DeleteCancelled,
    NoHabitsFound,
    NoHabitsForPeriodicity(String),
    HabitListHeader,

    // === CHECK-OFF MESSAGES ===
    CheckOffRecorded { task: String, time: String },
    CheckOffDuplicate(String),
    CheckOffRejected(String),
    InvalidTimeFormat(String),

    // === ANALYTICS MESSAGES ===
    StatusHeader,
    AnalyticsHeader,
    StatisticsHeader,
    CompletionHeader,
    LongestStreakOverall { task: String, periods: usize },
    NoStreaksYet,
    InactiveHabits { count: usize, days: i64 },

    // === SAMPLE DATA MESSAGES ===
    SampleDataPopulated(usize),
    SampleDataSkipped,
    SampleHabitLine { task: String, periodicity: String, check_offs: usize },

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NoDataToExport,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptDbPath,
}
