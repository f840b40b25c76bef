use embassy_time::{Duration, Ticker};

use crate::config::SimConfig;
use crate::display::{odometry_line, speed_line, ODOMETRY_ROW, SPEED_ROW};
use crate::io::TextDisplay;
use crate::state::SharedState;

/// Display publisher — 2 Hz.
///
/// Renders the average speed and the odometer to the two display rows. Only
/// the motion domain is read, so the input lock is never taken here and the
/// display refresh cannot stall the sampler or the controller. Formatting
/// happens after the lock is dropped.
pub async fn display_publisher(
    shared: &'static SharedState,
    config: SimConfig,
    mut display: impl TextDisplay,
) {
    let mut ticker = Ticker::every(Duration::from_millis(config.display_period_ms));
    loop {
        ticker.next().await;

        let (average_speed, odometry) = {
            let motion = shared.motion.lock().await;
            (motion.average_speed, motion.odometry)
        };

        display.write_line(SPEED_ROW, &speed_line(average_speed));
        display.write_line(ODOMETRY_ROW, &odometry_line(odometry));
    }
}
