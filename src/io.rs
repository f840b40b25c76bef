//! Collaborator traits for the hardware the simulator talks to.
//!
//! All three are assumed always available and non-blocking; there is no
//! error path for a collaborator that stops responding. The firmware binary
//! implements them over GPIO and UART, tests implement them in memory.

/// Logical channels of the digital input bank.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputChannel {
    /// Ignition switch.
    Engine,
    /// Accelerator pedal switch.
    Accel,
    /// Brake pedal switch.
    Brakes,
    /// Cruise-control enable switch.
    Cruise,
}

/// Bank of digital input switches, one bit per channel.
pub trait InputBank {
    fn read_bit(&mut self, channel: InputChannel) -> bool;
}

/// Single on/off indicator lamp. No read-back.
pub trait Indicator {
    fn set(&mut self, on: bool);
}

/// Two-row text display. Rows are 0 and 1; the caller formats the text to
/// fixed width before handing it over.
pub trait TextDisplay {
    fn write_line(&mut self, row: u8, text: &str);
}
