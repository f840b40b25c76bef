use embassy_time::{Duration, Ticker};

use crate::config::SimConfig;
use crate::control::Integrator;
use crate::state::SharedState;

/// Physics integrator — 25 Hz.
///
/// Snapshots the input domain, then advances the motion domain by one model
/// step. The two locks are never held together: the input lock is released
/// before the motion lock is taken, which trivially satisfies the global
/// input-before-motion ordering.
pub async fn physics_integrator(shared: &'static SharedState, config: SimConfig) {
    let integrator = Integrator::new(&config);
    let mut ticker = Ticker::every(Duration::from_millis(config.physics_period_ms));
    loop {
        ticker.next().await;

        let (ignition, accel, brake) = {
            let mut input = shared.input.lock().await;
            if !input.ignition {
                // Dead pedal with the engine off; also keeps a stale cruise
                // command from firing on the next ignition-on cycle.
                input.accel = 0.0;
            }
            (input.ignition, input.accel, input.brake)
        };

        let mut motion = shared.motion.lock().await;
        integrator.step(&mut motion, ignition, accel, brake);
    }
}
