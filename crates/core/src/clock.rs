//! Wall-clock access.

use chrono::{DateTime, Datelike, Local, Utc};

/// Source of "now" for stamping records.
///
/// Kept as a trait so tests can pin time; production code uses [`SystemClock`].
pub trait Clock {
    /// Current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar year in local time.
    fn current_year(&self) -> i32;
}

/// Stateless wrapper over the system clock.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }

    #[test]
    fn current_year_is_plausible() {
        let year = SystemClock.current_year();
        assert!(year >= 2024, "unexpected year {year}");
    }
}
