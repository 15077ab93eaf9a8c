/// Earliest year shown in year-over-year statistics.
pub const MIN_STATISTICS_YEAR: i32 = 2020;

/// Virtual assets ending within this many days count as "expiring".
pub const EXPIRING_SOON_DAYS: i64 = 30;

/// Months in a statistics year.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Rent-due urgency breakpoints, in days until the due date.
/// At or below the first value the rent is due today, within the second it
/// is urgent, within the third it is due soon; beyond that it is routine.
pub const RENT_DUE_TODAY_DAYS: i64 = 0;
pub const RENT_DUE_URGENT_DAYS: i64 = 3;
pub const RENT_DUE_SOON_DAYS: i64 = 7;

/// Largest day-of-month accepted for a rent due day. Capped at 28 so the
/// due day exists in every calendar month.
pub const RENT_DUE_DAY_MAX: u32 = 28;

/// Interval between QR-code login status polls.
pub const QR_POLL_INTERVAL_SECS: u64 = 2;

/// Hard expiry for a QR-code login session.
pub const QR_LOGIN_EXPIRY_SECS: u64 = 300;
