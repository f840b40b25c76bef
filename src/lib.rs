//! Soft real-time vehicle-dynamics simulator.
//!
//! Five periodic tasks cooperate through two mutex-guarded shared-state
//! domains: an input sampler and a cruise controller own the switch/pedal
//! side, a physics integrator advances the speed model, and a speed
//! averager and display publisher consume the results. Hardware sits behind
//! the small traits in [`io`], so everything here runs and tests on the
//! host; the firmware binary supplies the STM32 adapters.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod control;
pub mod display;
pub mod io;
pub mod state;
pub mod tasks;
