//! Clock abstraction for time-dependent card state
//!
//! The greeting and points cards never read the wall clock directly;
//! callers inject a clock so tests can pin the hour.

use chrono::{Datelike, Local, Timelike};

/// Source of the current local time facts the dashboard needs
pub trait Clock: Send + Sync + 'static {
    /// Current hour, 0-23
    fn current_hour(&self) -> u32;

    /// Month-and-year label for the points card header, e.g. "March 2026"
    fn month_label(&self) -> String;
}

/// Wall-clock backed implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_hour(&self) -> u32 {
        Local::now().hour()
    }

    fn month_label(&self) -> String {
        let now = Local::now();
        format!("{} {}", month_name(now.month()), now.year())
    }
}

/// Fixed clock for tests and previews
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub hour: u32,
    pub month: u32,
    pub year: i32,
}

impl Clock for FixedClock {
    fn current_hour(&self) -> u32 {
        self.hour
    }

    fn month_label(&self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
