//! Calendar period bucketing for streak comparisons.
//!
//! Maps timestamps to integer period indices so that consecutive check-offs
//! can be compared by simple integer adjacency: two periods are adjacent iff
//! their indices differ by exactly 1. All computation uses naive local
//! datetimes; a single consistent time reference must be used throughout one
//! analysis to avoid boundary drift.

use crate::libs::habit::Periodicity;
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};

/// Returns the integer period bucket for a timestamp.
///
/// Daily habits bucket by calendar day (days since the Common Era epoch).
/// Weekly habits bucket by Monday-start calendar week. The index is
/// monotonically non-decreasing with the timestamp.
pub fn period_index(periodicity: Periodicity, timestamp: NaiveDateTime) -> i64 {
    date_index(periodicity, timestamp.date())
}

/// Period bucket for a plain calendar date.
pub fn date_index(periodicity: Periodicity, date: NaiveDate) -> i64 {
    match periodicity {
        Periodicity::Daily => date.num_days_from_ce() as i64,
        Periodicity::Weekly => {
            // All Mondays share the same residue mod 7, so euclidean
            // division yields consecutive indices for consecutive weeks.
            let monday = date - Duration::days(date.weekday().num_days_from_monday() as i64);
            (monday.num_days_from_ce() as i64).div_euclid(7)
        }
    }
}
