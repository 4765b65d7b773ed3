use chrono::{DateTime, Local, NaiveDate};

/// Time source for the store. Creation timestamps, fallback ids and the
/// "today" used by overdue checks all come from here, so tests can pin
/// the clock instead of depending on real time.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// The current local date, with time of day dropped.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall-clock implementation used by the CLI.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at a fixed instant, for tests.
pub struct FixedClock(pub DateTime<Local>);

impl FixedClock {
    /// Builds a clock frozen at midnight local time on the given date.
    pub fn at(date: &str) -> Self {
        let naive = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .expect("invalid fixed clock date")
            .and_hms_opt(0, 0, 0)
            .unwrap();
        FixedClock(naive.and_local_timezone(Local).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
