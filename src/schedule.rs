// schedule.rs - Play/pause state and frame-rate throttling
//
// A single re-armable cycle drives the animation. Each armed cycle carries
// the epoch it was armed in; pausing or restarting bumps past it, so a
// callback that fires late sees it is stale and does nothing. Nothing is
// ever retracted from the host's timer.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Paused,
    Running,
}

impl Phase {
    /// Text for the play/pause control: the action it would perform.
    pub fn action_label(self) -> &'static str {
        match self {
            Phase::Paused => "Play",
            Phase::Running => "Pause",
        }
    }
}

/// One armed interval of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    epoch: u64,
    delay: Duration,
}

impl Cycle {
    pub fn epoch(&self) -> u64 { self.epoch }

    /// Wall-clock wait before the cycle fires.
    pub fn delay(&self) -> Duration { self.delay }

    /// Delay rounded to whole milliseconds for timer APIs, capped at
    /// `i32::MAX`.
    pub fn delay_ms(&self) -> i32 {
        (self.delay.as_secs_f64() * 1000.0).round().min(i32::MAX as f64) as i32
    }
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    phase: Phase,
    target_fps: f64,
    epoch: u64,
}

impl Scheduler {
    pub fn new(target_fps: f64) -> Self {
        assert_valid_fps(target_fps);
        Self { phase: Phase::Paused, target_fps, epoch: 0 }
    }

    pub fn phase(&self) -> Phase { self.phase }
    pub fn is_running(&self) -> bool { self.phase == Phase::Running }
    pub fn target_fps(&self) -> f64 { self.target_fps }

    /// New rate for cycles armed from now on.
    pub fn set_target_fps(&mut self, fps: f64) {
        assert_valid_fps(fps);
        self.target_fps = fps;
    }

    /// Wait between cycles. Rates too slow for `Duration` saturate.
    pub fn frame_delay(&self) -> Duration {
        Duration::try_from_secs_f64(1.0 / self.target_fps).unwrap_or(Duration::MAX)
    }

    /// Start a new chain. Returns the first cycle to arm, or `None` if a
    /// chain is already running.
    pub fn play(&mut self) -> Option<Cycle> {
        if self.is_running() {
            return None;
        }
        self.phase = Phase::Running;
        self.epoch += 1;
        Some(self.arm())
    }

    /// Stop the chain. Returns whether the phase changed.
    pub fn pause(&mut self) -> bool {
        let was_running = self.is_running();
        self.phase = Phase::Paused;
        was_running
    }

    /// Next cycle of the current chain.
    pub fn arm(&self) -> Cycle {
        Cycle { epoch: self.epoch, delay: self.frame_delay() }
    }

    /// Whether a fired cycle should step and redraw.
    pub fn admit(&self, cycle: Cycle) -> bool {
        self.is_running() && cycle.epoch == self.epoch
    }
}

#[inline]
fn assert_valid_fps(fps: f64) {
    assert!(fps.is_finite() && fps > 0.0, "target fps must be positive, got {fps}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_paused() {
        let s = Scheduler::new(30.0);
        assert_eq!(s.phase(), Phase::Paused);
        assert_eq!(s.phase().action_label(), "Play");
    }

    #[test]
    fn two_fps_is_half_a_second() {
        let mut s = Scheduler::new(2.0);
        let cycle = s.play().unwrap();
        assert_eq!(cycle.delay(), Duration::from_millis(500));
        assert_eq!(cycle.delay_ms(), 500);
    }

    #[test]
    fn tiny_fps_saturates_instead_of_panicking() {
        let mut s = Scheduler::new(1e-20);
        let cycle = s.play().unwrap();
        assert_eq!(cycle.delay(), Duration::MAX);
        assert_eq!(cycle.delay_ms(), i32::MAX);

        // Slow but representable rates still cap at the timer limit
        s.set_target_fps(1e-9);
        assert_eq!(s.arm().delay_ms(), i32::MAX);
    }

    #[test]
    fn sixty_fps_rounds_to_whole_ms() {
        assert_eq!(Scheduler::new(60.0).arm().delay_ms(), 17);
    }

    #[test]
    fn armed_cycle_is_neutralised_by_pause() {
        let mut s = Scheduler::new(10.0);
        let armed = s.play().unwrap();
        assert!(s.admit(armed));
        assert!(s.pause());
        assert!(!s.admit(armed));
        assert_eq!(s.phase().action_label(), "Play");
    }

    #[test]
    fn restart_leaves_one_live_chain() {
        let mut s = Scheduler::new(10.0);
        let old = s.play().unwrap();
        s.pause();
        let new = s.play().unwrap();
        assert!(!s.admit(old));
        assert!(s.admit(new));
    }

    #[test]
    fn play_while_running_does_not_fork() {
        let mut s = Scheduler::new(10.0);
        let first = s.play().unwrap();
        assert_eq!(s.play(), None);
        assert!(s.admit(first));
    }

    #[test]
    fn rate_change_applies_to_next_arm_only() {
        let mut s = Scheduler::new(2.0);
        let armed = s.play().unwrap();
        s.set_target_fps(4.0);
        assert_eq!(armed.delay(), Duration::from_millis(500));
        assert!(s.admit(armed));
        assert_eq!(s.arm().delay(), Duration::from_millis(250));
    }

    #[test]
    fn pause_when_paused_is_a_no_op() {
        let mut s = Scheduler::new(10.0);
        assert!(!s.pause());
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn zero_fps_is_rejected() {
        Scheduler::new(0.0);
    }
}
