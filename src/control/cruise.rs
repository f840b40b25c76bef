use crate::config::SimConfig;

/// Pedal commands produced by one controller cycle.
#[derive(Clone, Copy, Default, PartialEq, Debug)]
pub struct PedalCommand {
    pub accel: f32,
    pub brake: f32,
}

/// Proportional controller holding the vehicle at the cruise speed.
///
/// The hold point sits `friction_bias` above the target: that offset is
/// what the accelerator must keep supplying against drag once the vehicle
/// has settled. `cruise_bias` pads the proportional term so convergence
/// from far away is not glacial. Outputs are intentionally not clamped;
/// only the resulting speed is bounded, by the integrator.
pub struct CruiseController {
    target: f32,
    bias: f32,
    friction_bias: f32,
}

impl CruiseController {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            target: config.cruise_speed,
            bias: config.cruise_bias,
            friction_bias: config.friction_bias,
        }
    }

    /// One proportional step toward the target, given the current speed.
    pub fn command(&self, speed: f32) -> PedalCommand {
        let hold_point = self.target + self.friction_bias;
        if speed > hold_point {
            PedalCommand {
                accel: 0.0,
                brake: (speed - self.target) / self.target + self.bias,
            }
        } else if speed < hold_point {
            PedalCommand {
                accel: (self.target - speed) / self.target + self.bias,
                brake: 0.0,
            }
        } else {
            // Exact float equality with the hold point. Practically
            // unreachable, but the coast branch keeps it well defined.
            PedalCommand::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> CruiseController {
        CruiseController::new(&SimConfig::DEFAULT)
    }

    #[test]
    fn accelerates_below_the_hold_point() {
        let cmd = controller().command(0.0);
        // (80 - 0) / 80 + 0.1
        assert!((cmd.accel - 1.1).abs() < 1e-6);
        assert_eq!(cmd.brake, 0.0);
    }

    #[test]
    fn still_accelerates_just_above_target_inside_the_bias_band() {
        // 80.5 is above the target but below the 80.8 hold point, so the
        // controller keeps feeding a (now small) accelerator command.
        let cmd = controller().command(80.5);
        assert!(cmd.accel > 0.0);
        assert!(cmd.accel < 0.11);
        assert_eq!(cmd.brake, 0.0);
    }

    #[test]
    fn brakes_above_the_hold_point() {
        let cmd = controller().command(120.0);
        assert_eq!(cmd.accel, 0.0);
        // (120 - 80) / 80 + 0.1
        assert!((cmd.brake - 0.6).abs() < 1e-6);
    }

    #[test]
    fn coasts_exactly_at_the_hold_point() {
        let cmd = controller().command(80.8);
        assert_eq!(cmd, PedalCommand::default());
    }

    #[test]
    fn output_is_unclamped_for_large_errors() {
        // Top speed against an 80 target: the proportional brake term
        // exceeds a unit pedal. Bounding this was left to the speed clamp.
        let cmd = controller().command(300.0);
        assert!(cmd.brake > 1.0);
    }
}
