use std::time::Duration;

use crate::surface::Scheduler;

/// Interval timer driven by frame time instead of the wall clock.
///
/// The render loop feeds it each frame's `dt`; every full period that elapses
/// yields one tick. Unarmed tickers never fire.
#[derive(Debug, Default)]
pub struct FrameTicker {
    period: Option<Duration>,
    elapsed: Duration,
}

impl FrameTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.period.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Accumulate `dt` and return how many ticks fired.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let Some(period) = self.period else {
            return 0;
        };

        self.elapsed += dt;
        let mut ticks = 0;
        while self.elapsed >= period {
            self.elapsed -= period;
            ticks += 1;
        }
        ticks
    }
}

impl Scheduler for FrameTicker {
    fn set_interval(&mut self, period: Duration) {
        // A zero period would spin forever in `advance`.
        if period.is_zero() {
            return;
        }
        self.period = Some(period);
        self.elapsed = Duration::ZERO;
    }
}
