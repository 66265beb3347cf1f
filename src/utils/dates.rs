use chrono::NaiveDate;

/// Number of calendar days in the closed interval `[start, end]`, counting
/// both endpoints. Callers must ensure `end >= start` first.
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Whether two closed date intervals share at least one day.
pub fn dates_overlap(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    !(a_end < b_start || b_end < a_start)
}
