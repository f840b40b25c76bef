//! Shared vehicle state, split into two independently locked domains.
//!
//! The input domain holds what the driver commands (switches and pedal
//! commands), the motion domain holds what the model produces (speed,
//! history window, average, odometry). Tasks that need both must take the
//! input lock before the motion lock, everywhere, so the two mutexes can
//! never deadlock against each other.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use heapless::Deque;

/// Depth of the rolling speed window: the three previous samples plus the
/// newest one.
pub const HISTORY_DEPTH: usize = 4;

/// Switch and pedal state. Pedal commands are written by the input sampler
/// while cruise mode is off, and by the cruise controller while it is on;
/// the handoff is the `cruise` flag itself.
#[derive(Clone, Copy, Default)]
pub struct InputState {
    /// Ignition switch, as last sampled.
    pub ignition: bool,
    /// Raw cruise-control switch, as last sampled. Stored even while the
    /// ignition is off; the controller just refuses to act on it.
    pub cruise: bool,
    /// Accelerator command. 0/1 from the pedal switch, or the proportional
    /// controller output in cruise mode (deliberately unclamped upward).
    pub accel: f32,
    /// Brake command, same ownership as `accel`.
    pub brake: f32,
}

/// Model outputs. Written by the physics integrator and the speed averager,
/// read by everyone else.
#[derive(Default)]
pub struct MotionState {
    /// Instantaneous simulated speed, clamped to the configured bounds.
    pub speed: f32,
    /// Rolling window of the most recent speed samples.
    pub history: SpeedHistory,
    /// Mean of `history` as of the last averager cycle.
    pub average_speed: f32,
    /// Cumulative distance. Never decreases.
    pub odometry: f32,
}

/// Bounded FIFO of recent speed samples, evict-oldest at capacity.
#[derive(Default)]
pub struct SpeedHistory {
    samples: Deque<f32, HISTORY_DEPTH>,
}

impl SpeedHistory {
    pub const fn new() -> Self {
        Self {
            samples: Deque::new(),
        }
    }

    /// Append a sample, dropping the oldest one once the window is full.
    pub fn record(&mut self, speed: f32) {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // Cannot fail: a slot was just freed if the deque was full.
        let _ = self.samples.push_back(speed);
    }

    /// Arithmetic mean of the window, or 0.0 before the first sample
    /// arrives (the averager may run before the integrator at startup).
    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.samples.iter().sum();
        sum / self.samples.len() as f32
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.samples.iter()
    }
}

/// The process-wide shared state: one mutex per domain.
///
/// `const`-constructible so the firmware can keep it in a `static` and hand
/// each task a `&'static` reference.
pub struct SharedState {
    pub input: Mutex<CriticalSectionRawMutex, InputState>,
    pub motion: Mutex<CriticalSectionRawMutex, MotionState>,
}

impl SharedState {
    pub const fn new() -> Self {
        Self {
            input: Mutex::new(InputState {
                ignition: false,
                cruise: false,
                accel: 0.0,
                brake: 0.0,
            }),
            motion: Mutex::new(MotionState {
                speed: 0.0,
                history: SpeedHistory::new(),
                average_speed: 0.0,
                odometry: 0.0,
            }),
        }
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_never_exceeds_four_samples() {
        let mut history = SpeedHistory::new();
        for i in 0..20 {
            history.record(i as f32);
            assert!(history.len() <= HISTORY_DEPTH);
        }
        assert_eq!(history.len(), HISTORY_DEPTH);
    }

    #[test]
    fn history_keeps_most_recent_samples_in_order() {
        let mut history = SpeedHistory::new();
        for i in 0..7 {
            history.record(i as f32);
        }
        let window: Vec<f32> = history.iter().copied().collect();
        assert_eq!(window, vec![3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn average_of_empty_history_is_zero() {
        let history = SpeedHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.average(), 0.0);
    }

    #[test]
    fn average_of_partial_window() {
        let mut history = SpeedHistory::new();
        history.record(100.0);
        history.record(50.0);
        assert!((history.average() - 75.0).abs() < 1e-6);
    }

    #[test]
    fn average_matches_worked_example() {
        let mut history = SpeedHistory::new();
        for s in [100.0, 150.0, 150.0, 150.0] {
            history.record(s);
        }
        assert!((history.average() - 137.5).abs() < 1e-4);
    }

    #[test]
    fn averages_straddle_the_legal_speed_threshold() {
        use crate::config::SimConfig;
        let legal = SimConfig::DEFAULT.legal_speed;

        let mut history = SpeedHistory::new();
        for s in [100.0, 150.0, 150.0, 150.0] {
            history.record(s);
        }
        // 137.5 is under the limit; a full window at 150 is over it.
        assert!(history.average() <= legal);
        for _ in 0..4 {
            history.record(150.0);
        }
        assert!(history.average() > legal);
    }
}
