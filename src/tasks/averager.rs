use embassy_time::{Duration, Ticker};

use crate::config::SimConfig;
use crate::io::Indicator;
use crate::state::SharedState;

/// Speed averager — 5 Hz.
///
/// Publishes the mean of the speed-history window and drives the speeding
/// indicator from it. Before the integrator has produced a first sample the
/// window is empty and the average reads 0, so the indicator stays off.
pub async fn speed_averager(
    shared: &'static SharedState,
    config: SimConfig,
    mut speeding_indicator: impl Indicator,
) {
    let mut ticker = Ticker::every(Duration::from_millis(config.averager_period_ms));
    loop {
        ticker.next().await;

        let mut motion = shared.motion.lock().await;
        motion.average_speed = motion.history.average();
        speeding_indicator.set(motion.average_speed > config.legal_speed);
    }
}
