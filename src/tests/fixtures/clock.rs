use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// The moment every handler test runs at. Entries default to two days earlier.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 22, 12, 0, 0).unwrap()
}

pub fn fixed_today() -> NaiveDate {
    fixed_now().date_naive()
}
