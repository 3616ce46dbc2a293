//! Clock abstraction and the fixed-rate tick scheduler

use std::thread;
use std::time::{Duration, Instant};

/// Abstract environment (time, sleeping)
pub trait Environment {
    /// Milliseconds since an arbitrary fixed origin
    fn now_ms(&self) -> f64;
    fn sleep_ms(&self, ms: f64);
}

/// Real wall clock
pub struct SystemEnv {
    origin: Instant,
}

impl SystemEnv {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment for SystemEnv {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    fn sleep_ms(&self, ms: f64) {
        if ms > 0.0 {
            thread::sleep(Duration::from_secs_f64(ms / 1000.0));
        }
    }
}

/// Keeps ticks on a steady cadence
#[derive(Debug, Clone)]
pub struct FixedRate {
    period_ms: f64,
    next_deadline: Option<f64>,
}

impl FixedRate {
    /// Give up catching up after falling this many periods behind
    const MAX_LAG_PERIODS: f64 = 5.0;

    pub fn new(tick_rate: u32) -> Self {
        Self {
            period_ms: 1000.0 / f64::from(tick_rate.max(1)),
            next_deadline: None,
        }
    }

    pub fn period_ms(&self) -> f64 {
        self.period_ms
    }

    /// Block until the next tick is due
    pub fn wait(&mut self, env: &dyn Environment) {
        let now = env.now_ms();
        let deadline = self.next_deadline.unwrap_or(now + self.period_ms);

        if deadline > now {
            env.sleep_ms(deadline - now);
        }

        // Far behind (e.g. suspended): start a fresh cadence instead of bursting
        self.next_deadline = if now - deadline > self.period_ms * Self::MAX_LAG_PERIODS {
            log::debug!("tick scheduler fell {:.0} ms behind, resetting", now - deadline);
            Some(now + self.period_ms)
        } else {
            Some(deadline + self.period_ms)
        };
    }
}
