//! Time of day for the agent's greetings.

use chrono::{Local, Timelike};

/// Source of the current hour (0-23).
pub trait Clock {
    /// Returns the current hour.
    fn hour(&self) -> u32;
}

/// The machine's local clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// A clock stuck at one hour.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.0
    }
}
