//! Test utilities for the streakboard crate.
//!
//! Shared by unit tests (in `src/`) and integration tests (in `tests/`).
//! Only compiled for tests or with the `test-support` feature.

pub mod clock {
    //! Controllable clocks for scoring scenarios that span several days.

    use std::sync::{Mutex, MutexGuard};

    use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
    use mockable::Clock;

    /// Clock whose current instant is set and advanced by the test.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mockable::Clock;
    /// use streakboard::test_support::clock::{MutableClock, utc};
    ///
    /// let clock = MutableClock::new(utc(2026, 3, 1, 9));
    /// clock.advance_days(1);
    /// assert_eq!(clock.utc(), utc(2026, 3, 2, 9));
    /// ```
    pub struct MutableClock(Mutex<DateTime<Utc>>);

    impl MutableClock {
        pub fn new(now: DateTime<Utc>) -> Self {
            Self(Mutex::new(now))
        }

        pub fn set(&self, now: DateTime<Utc>) {
            *self.lock_clock() = now;
        }

        pub fn advance(&self, delta: TimeDelta) {
            *self.lock_clock() += delta;
        }

        pub fn advance_days(&self, days: i64) {
            self.advance(TimeDelta::days(days));
        }

        fn lock_clock(&self) -> MutexGuard<'_, DateTime<Utc>> {
            match self.0.lock() {
                Ok(guard) => guard,
                Err(_) => panic!("clock mutex"),
            }
        }
    }

    impl Clock for MutableClock {
        fn local(&self) -> DateTime<Local> {
            self.utc().with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            *self.lock_clock()
        }
    }

    /// Build a whole-hour UTC timestamp, panicking on invalid input.
    pub fn utc(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
        match Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).single() {
            Some(at) => at,
            None => panic!("invalid fixture timestamp {year}-{month}-{day} {hour}:00"),
        }
    }
}
