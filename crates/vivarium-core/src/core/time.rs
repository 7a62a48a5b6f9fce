/// Variable-timestep frame clock.
/// The browser drives ticks from requestAnimationFrame, so deltas vary;
/// a backgrounded tab can hand us a multi-second delta on resume.
pub struct FrameClock {
    elapsed: f32,
    last_dt: f32,
    /// Largest delta accepted per frame (seconds).
    max_dt: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            last_dt: 0.0,
            max_dt: 0.1,
        }
    }

    /// Advance the clock by a frame delta. Returns the clamped delta.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let dt = dt.clamp(0.0, self.max_dt);
        self.elapsed += dt;
        self.last_dt = dt;
        dt
    }

    /// Total elapsed time in seconds since startup.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The delta applied by the most recent `advance`.
    pub fn dt(&self) -> f32 {
        self.last_dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot countdown timer, ticked with frame deltas.
///
/// Restarting a running countdown replaces the deadline, so only the most
/// recent `start` can fire. Used for the status-message auto-hide.
pub struct Countdown {
    remaining: f32,
    running: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self {
            remaining: 0.0,
            running: false,
        }
    }

    /// Start (or restart) the countdown with the given duration in seconds.
    pub fn start(&mut self, secs: f32) {
        self.remaining = secs.max(0.0);
        self.running = true;
    }

    /// Stop the countdown without firing.
    pub fn cancel(&mut self) {
        self.running = false;
        self.remaining = 0.0;
    }

    /// Advance by dt seconds. Returns true exactly on the tick it expires.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.running {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.running = false;
            self.remaining = 0.0;
            return true;
        }
        false
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left before expiry (0 when idle).
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_accumulates() {
        let mut clock = FrameClock::new();
        clock.advance(0.016);
        clock.advance(0.016);
        assert!((clock.elapsed() - 0.032).abs() < 1e-6);
        assert!((clock.dt() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn clock_clamps_huge_delta() {
        let mut clock = FrameClock::new();
        let dt = clock.advance(5.0); // tab came back from background
        assert!(dt <= 0.1 + 1e-6);
        assert!(clock.elapsed() <= 0.1 + 1e-6);
    }

    #[test]
    fn countdown_fires_once() {
        let mut timer = Countdown::new();
        timer.start(0.05);
        assert!(!timer.tick(0.03));
        assert!(timer.tick(0.03));
        assert!(!timer.tick(0.03)); // already expired
        assert!(!timer.is_running());
    }

    #[test]
    fn restart_replaces_deadline() {
        let mut timer = Countdown::new();
        timer.start(0.10);
        timer.tick(0.08);
        timer.start(0.10); // restarted with 0.02s left on the old deadline
        assert!(!timer.tick(0.05)); // old deadline would have fired here
        assert!(timer.tick(0.06));
    }

    #[test]
    fn cancel_stops_timer() {
        let mut timer = Countdown::new();
        timer.start(0.05);
        timer.cancel();
        assert!(!timer.tick(1.0));
        assert_eq!(timer.remaining(), 0.0);
    }
}
