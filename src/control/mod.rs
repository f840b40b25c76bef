pub mod cruise;
pub mod physics;

pub use cruise::{CruiseController, PedalCommand};
pub use physics::Integrator;
