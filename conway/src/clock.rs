// clock.rs - Logical tick clock, independent of how often the window repaints

use std::time::{Duration, Instant};

use crate::error::{LifeError, Result};

pub const DEFAULT_TICK_RATE: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    last_tick: Instant,
}

impl Ticker {
    /// `rate` is in generations per second.
    pub fn new(rate: f32, now: Instant) -> Result<Self> {
        Ok(Self { interval: interval_for(rate)?, last_tick: now })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn rate(&self) -> f32 {
        (1.0 / self.interval.as_secs_f64()) as f32
    }

    pub fn set_rate(&mut self, rate: f32) -> Result<()> {
        self.interval = interval_for(rate)?;
        Ok(())
    }

    /// Restart the interval, e.g. when the simulation is resumed.
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// Consumes one tick if a full interval has passed. Missed ticks are
    /// dropped rather than replayed.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.interval {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    pub fn until_next(&self, now: Instant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}

fn interval_for(rate: f32) -> Result<Duration> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(LifeError::InvalidTickRate(rate));
    }
    Duration::try_from_secs_f64(1.0 / f64::from(rate)).map_err(|_| LifeError::InvalidTickRate(rate))
}
