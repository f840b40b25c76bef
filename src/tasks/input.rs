use embassy_time::{Duration, Ticker};

use crate::config::SimConfig;
use crate::io::{Indicator, InputBank, InputChannel};
use crate::state::SharedState;

/// Input sampler — 25 Hz.
///
/// Samples the ignition switch and mirrors it onto the ignition indicator.
/// The pedal switches are only sampled while cruise mode is off; while it
/// is on, the cruise controller owns the pedal commands and the raw switch
/// positions are ignored.
pub async fn input_sampler(
    shared: &'static SharedState,
    config: SimConfig,
    mut bank: impl InputBank,
    mut ignition_indicator: impl Indicator,
) {
    let mut ticker = Ticker::every(Duration::from_millis(config.input_period_ms));
    loop {
        ticker.next().await;

        let mut input = shared.input.lock().await;
        input.ignition = bank.read_bit(InputChannel::Engine);
        ignition_indicator.set(input.ignition);

        if !input.cruise {
            input.accel = if bank.read_bit(InputChannel::Accel) { 1.0 } else { 0.0 };
            input.brake = if bank.read_bit(InputChannel::Brakes) { 1.0 } else { 0.0 };
        }
    }
}
