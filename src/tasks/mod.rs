//! The five periodic task loops.
//!
//! Each loop is a plain generic `async fn` over the collaborator traits so
//! the firmware binary can wrap it in an `#[embassy_executor::task]` at
//! concrete types. Every iteration does the bounded work described on the
//! loop, then sleeps on its `Ticker`; no loop ever blocks on anything but
//! the two domain mutexes and its own period.

pub mod averager;
pub mod cruise;
pub mod display;
pub mod input;
pub mod physics;

pub use averager::speed_averager;
pub use cruise::cruise_controller;
pub use display::display_publisher;
pub use input::input_sampler;
pub use physics::physics_integrator;
