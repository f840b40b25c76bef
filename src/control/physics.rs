use crate::config::SimConfig;
use crate::state::MotionState;

/// One-dimensional vehicle model: pedal delta, linear drag, clamp.
///
/// Each step also records the resulting speed into the history window and
/// advances the odometer by `speed * dt`.
pub struct Integrator {
    friction: f32,
    min_speed: f32,
    max_speed: f32,
    dt_s: f32,
}

impl Integrator {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            friction: config.friction,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            dt_s: config.physics_dt_s(),
        }
    }

    /// Advance the motion state by one cycle.
    ///
    /// With the ignition off the accelerator is dead and the brakes fall
    /// back to half effectiveness (no assist), which still lets a coasting
    /// vehicle be braked to a stop.
    pub fn step(&self, motion: &mut MotionState, ignition: bool, accel: f32, brake: f32) {
        let delta = if ignition {
            accel - brake
        } else {
            -0.5 * brake
        };

        let mut speed = motion.speed + delta;
        speed -= self.friction * speed;

        motion.speed = speed.clamp(self.min_speed, self.max_speed);
        motion.history.record(motion.speed);
        motion.odometry += motion.speed * self.dt_s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::cruise::CruiseController;

    fn integrator() -> Integrator {
        Integrator::new(&SimConfig::DEFAULT)
    }

    #[test]
    fn accelerates_and_applies_drag_with_ignition_on() {
        let mut motion = MotionState {
            speed: 100.0,
            ..Default::default()
        };
        integrator().step(&mut motion, true, 1.0, 0.0);
        // (100 + 1) * (1 - 0.001)
        assert!((motion.speed - 100.899).abs() < 1e-3);
    }

    #[test]
    fn speed_never_leaves_the_configured_bounds() {
        let it = integrator();
        let mut motion = MotionState::default();

        // Hammer the accelerator far beyond any sane command.
        for _ in 0..100 {
            it.step(&mut motion, true, 50.0, 0.0);
            assert!(motion.speed >= 0.0 && motion.speed <= 300.0);
        }
        assert_eq!(motion.speed, 300.0);

        // Then stand on the brakes.
        for _ in 0..100 {
            it.step(&mut motion, true, 0.0, 50.0);
            assert!(motion.speed >= 0.0 && motion.speed <= 300.0);
        }
        assert_eq!(motion.speed, 0.0);
    }

    #[test]
    fn ignition_off_disables_accelerator_and_halves_braking() {
        let it = integrator();
        let mut motion = MotionState {
            speed: 100.0,
            ..Default::default()
        };
        // Accelerator floored, but the engine is off: only half the brake
        // command may act.
        it.step(&mut motion, false, 1.0, 1.0);
        // (100 - 0.5) * (1 - 0.001)
        assert!((motion.speed - 99.4005).abs() < 1e-3);
    }

    #[test]
    fn vehicle_at_rest_stays_at_rest_without_input() {
        let it = integrator();
        let mut motion = MotionState::default();
        for _ in 0..1000 {
            it.step(&mut motion, false, 0.0, 0.0);
        }
        assert_eq!(motion.speed, 0.0);
        assert_eq!(motion.odometry, 0.0);
    }

    #[test]
    fn odometry_is_monotonic_and_tracks_speed_over_the_period() {
        let it = integrator();
        let mut motion = MotionState {
            speed: 100.0,
            ..Default::default()
        };
        let mut previous = motion.odometry;
        for _ in 0..50 {
            it.step(&mut motion, true, 0.5, 0.0);
            let gained = motion.odometry - previous;
            // Exactly one 40 ms period worth of the new speed.
            assert!((gained - motion.speed * 0.04).abs() < 1e-4);
            assert!(motion.odometry >= previous);
            previous = motion.odometry;
        }
    }

    #[test]
    fn each_step_lands_in_the_history_window() {
        let it = integrator();
        let mut motion = MotionState::default();
        for _ in 0..6 {
            it.step(&mut motion, true, 1.0, 0.0);
        }
        assert_eq!(motion.history.len(), 4);
        let newest = *motion.history.iter().last().unwrap();
        assert_eq!(newest, motion.speed);
    }

    /// Convergence of the full cruise loop: controller and integrator
    /// stepped together from rest must settle inside the friction-bias band
    /// around the cruise speed and stay there.
    #[test]
    fn cruise_control_converges_from_rest_without_sustained_overshoot() {
        let config = SimConfig::DEFAULT;
        let controller = CruiseController::new(&config);
        let it = Integrator::new(&config);
        let mut motion = MotionState::default();

        for _ in 0..2000 {
            let cmd = controller.command(motion.speed);
            it.step(&mut motion, true, cmd.accel, cmd.brake);
        }
        let band = config.friction_bias + 0.05;
        assert!(
            (motion.speed - config.cruise_speed).abs() <= band,
            "did not settle: {}",
            motion.speed
        );

        // Once settled, the speed must not wander back out of the band.
        for _ in 0..500 {
            let cmd = controller.command(motion.speed);
            it.step(&mut motion, true, cmd.accel, cmd.brake);
            assert!((motion.speed - config.cruise_speed).abs() <= band);
        }
    }
}
