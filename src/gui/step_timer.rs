use std::time::{Duration, Instant};

/// Paces automaton steps to a fixed delay without blocking the UI thread.
pub struct StepTimer {
    delay: Duration,
    step_timer: Instant,
    steptime_smoothed: f64,
}

impl StepTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            step_timer: Instant::now(),
            steptime_smoothed: 0.,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Smoothed rate of the steps recorded with [`Self::mark`].
    pub fn steps_per_second(&self) -> f64 {
        if self.steptime_smoothed > 0. {
            1. / self.steptime_smoothed
        } else {
            0.
        }
    }

    /// Time left until the next step is due.
    pub fn remaining(&self) -> Duration {
        self.delay.saturating_sub(self.step_timer.elapsed())
    }

    pub fn is_due(&self) -> bool {
        self.remaining().is_zero()
    }

    /// Record that a step happened now.
    pub fn mark(&mut self) {
        let steptime = self.step_timer.elapsed().as_secs_f64();
        self.steptime_smoothed += (steptime - self.steptime_smoothed) * 0.1;
        self.step_timer = Instant::now();
    }
}
