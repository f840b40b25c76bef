/// Simulation constants and task periods.
///
/// One instance is handed to every task at spawn time; nothing reads these
/// through globals. Speeds are in km/h-equivalent units, periods in
/// milliseconds.
#[derive(Clone, Copy)]
pub struct SimConfig {
    /// Lower clamp on the simulated speed.
    pub min_speed: f32,
    /// Upper clamp on the simulated speed.
    pub max_speed: f32,
    /// Average speed above which the speeding indicator turns on (88 mph).
    pub legal_speed: f32,
    /// Target speed held by the cruise controller (50 mph).
    pub cruise_speed: f32,
    /// Extra proportional output so the controller converges briskly.
    pub cruise_bias: f32,
    /// Linear drag coefficient, applied once per physics cycle.
    pub friction: f32,
    /// Steady-state drag compensation; roughly `cruise_speed * friction`.
    pub friction_bias: f32,

    /// Input sampler period (25 Hz).
    pub input_period_ms: u64,
    /// Cruise controller period (20 Hz).
    pub cruise_period_ms: u64,
    /// Physics integrator period (25 Hz).
    pub physics_period_ms: u64,
    /// Speed averager period (5 Hz).
    pub averager_period_ms: u64,
    /// Display publisher period (2 Hz).
    pub display_period_ms: u64,
}

impl SimConfig {
    pub const DEFAULT: Self = Self {
        min_speed: 0.0,
        max_speed: 300.0,
        legal_speed: 142.0,
        cruise_speed: 80.0,
        cruise_bias: 0.1,
        friction: 0.001,
        friction_bias: 0.8,
        input_period_ms: 40,
        cruise_period_ms: 50,
        physics_period_ms: 40,
        averager_period_ms: 200,
        display_period_ms: 500,
    };

    /// Physics integration step in seconds, derived from the task period so
    /// odometry stays consistent if the period is retuned.
    pub fn physics_dt_s(&self) -> f32 {
        self.physics_period_ms as f32 / 1000.0
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
