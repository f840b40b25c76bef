use embassy_time::{Duration, Ticker};

use crate::config::SimConfig;
use crate::control::CruiseController;
use crate::io::{Indicator, InputBank, InputChannel};
use crate::state::SharedState;

/// Cruise controller — 20 Hz.
///
/// Samples the cruise switch and drives the cruise indicator, which is lit
/// only while the ignition is also on. When both are on, one proportional
/// step replaces the pedal commands with its own output.
///
/// This is the one loop that holds both domain locks at once; it takes
/// input before motion, matching the global acquisition order.
pub async fn cruise_controller(
    shared: &'static SharedState,
    config: SimConfig,
    mut bank: impl InputBank,
    mut cruise_indicator: impl Indicator,
) {
    let controller = CruiseController::new(&config);
    let mut ticker = Ticker::every(Duration::from_millis(config.cruise_period_ms));
    loop {
        ticker.next().await;

        let mut input = shared.input.lock().await;
        input.cruise = bank.read_bit(InputChannel::Cruise);
        cruise_indicator.set(input.ignition && input.cruise);

        if input.cruise && input.ignition {
            let speed = {
                let motion = shared.motion.lock().await;
                motion.speed
            };
            let cmd = controller.command(speed);
            input.accel = cmd.accel;
            input.brake = cmd.brake;
        }
    }
}
