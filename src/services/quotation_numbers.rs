use chrono::{Local, NaiveDateTime, Timelike};
use rand::Rng;

/// Generates a quotation number for the current local time.
///
/// The format is `YYMMDD-SSSSSR`: two-digit year, month and day, a
/// dash, the number of seconds since local midnight zero-padded to
/// five digits, and one random digit. Two calls within the same second
/// can still collide on the random digit; callers that need hard
/// uniqueness enforce it at the storage layer.
pub fn generate_quotation_number() -> String {
    quotation_number_for(Local::now().naive_local(), &mut rand::thread_rng())
}

/// Deterministic core of [`generate_quotation_number`], split out so
/// the clock and randomness can be injected.
pub fn quotation_number_for(instant: NaiveDateTime, rng: &mut impl Rng) -> String {
    let seconds_since_midnight = instant.num_seconds_from_midnight();
    let random_digit: u32 = rng.gen_range(0..=9);

    format!(
        "{}-{:05}{}",
        instant.format("%y%m%d"),
        seconds_since_midnight,
        random_digit
    )
}
