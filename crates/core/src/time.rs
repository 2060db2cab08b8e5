use chrono::{DateTime, Utc};

/// Source of "now" for stamping quiz results.
///
/// `System` reads the wall clock. `Fixed` pins every reading to one instant,
/// which keeps persisted timestamps deterministic in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(at) => *at,
        }
    }
}

/// Seconds since the epoch for 2023-11-14T22:13:20Z.
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0).unwrap_or_default()
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_pins_every_reading() {
        let clock = fixed_clock();
        assert_eq!(clock.now(), fixed_now());
        assert_eq!(clock.now(), clock.now());
        assert_eq!(fixed_now().timestamp(), FIXED_TEST_TIMESTAMP);
    }

    #[test]
    fn default_clock_reads_the_wall_clock() {
        let before = Utc::now();
        let now = Clock::default().now();
        assert!(now >= before);
    }
}
