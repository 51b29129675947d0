use std::time::{Duration, Instant};

/// Stopwatch that can be paused. Paused time is not counted.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timer {
    started_at: Option<Instant>,
    paused_ticks: Option<Duration>,
}

impl Timer {
    pub fn new() -> Self {
        Timer::default()
    }

    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
        self.paused_ticks = None;
    }

    pub fn stop(&mut self) {
        self.started_at = None;
        self.paused_ticks = None;
    }

    pub fn pause(&mut self) {
        if let (Some(started_at), None) = (self.started_at, self.paused_ticks) {
            self.paused_ticks = Some(started_at.elapsed());
        }
    }

    pub fn unpause(&mut self) {
        if let Some(paused_ticks) = self.paused_ticks.take() {
            // Shift the start so the time spent paused drops out
            let now = Instant::now();
            self.started_at = Some(now.checked_sub(paused_ticks).unwrap_or(now));
        }
    }

    pub fn ticks(&self) -> Duration {
        match (self.started_at, self.paused_ticks) {
            (_, Some(paused_ticks)) => paused_ticks,
            (Some(started_at), None) => started_at.elapsed(),
            (None, None) => Duration::ZERO,
        }
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_paused(&self) -> bool {
        self.paused_ticks.is_some()
    }

    /// Seconds since the last `start`, restarting the timer. Used as the step
    /// for frame independent movement.
    pub fn lap_seconds(&mut self) -> f32 {
        let seconds = self.ticks().as_secs_f32();
        self.start();
        seconds
    }
}
