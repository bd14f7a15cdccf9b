//! Wall-clock stopwatch for benchmarking a run.
//!
//! A measurement is one `start` followed by one `stop`. Starting twice or
//! stopping an idle stopwatch is an error, and so is reading an interval
//! that is not strictly positive.

use crate::error::{Error, Result};

/// Source of wall-clock timestamps in microseconds.
pub trait Clock {
    fn now_micros(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl Clock for WallClock {
    #[inline]
    fn now_micros(&self) -> i64 {
        chrono::Utc::now().timestamp_micros()
    }
}

#[derive(Debug)]
pub struct Stopwatch<C: Clock = WallClock> {
    clock: C,
    begin: i64,
    end: i64,
    started: bool,
}

impl Stopwatch<WallClock> {
    pub fn new() -> Self {
        Self::with_clock(WallClock)
    }
}

impl Default for Stopwatch<WallClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        let now = clock.now_micros();
        Stopwatch {
            clock,
            begin: now,
            end: now,
            started: false,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.started
    }

    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(Error::AlreadyStarted);
        }
        self.begin = self.clock.now_micros();
        self.started = true;
        Ok(())
    }

    pub fn stop(&mut self) -> Result<()> {
        if !self.started {
            return Err(Error::NotStarted);
        }
        self.end = self.clock.now_micros();
        self.started = false;
        Ok(())
    }

    /// Seconds between the last start and stop.
    pub fn elapsed(&self) -> Result<f64> {
        let micros = self.end - self.begin;
        if micros <= 0 {
            return Err(Error::InvalidInterval { micros });
        }
        Ok(micros as f64 / 1_000_000.0)
    }
}
