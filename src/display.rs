//! Fixed-width formatting for the two display rows.
//!
//! The display collaborator takes pre-formatted text, so the exact layout
//! lives here: a label, then the value right-aligned in a 9-character field
//! with one decimal place, filling a 16-character row.

use core::fmt::Write;

use heapless::String;

pub const SPEED_ROW: u8 = 0;
pub const ODOMETRY_ROW: u8 = 1;

/// Generous headroom over the 16-character row so a wide odometer value
/// widens the field instead of truncating mid-number.
pub const LINE_CAPACITY: usize = 32;

pub fn speed_line(average_speed: f32) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    let _ = write!(line, "speed: {average_speed:9.1}");
    line
}

pub fn odometry_line(odometry: f32) -> String<LINE_CAPACITY> {
    let mut line = String::new();
    let _ = write!(line, "odom : {odometry:9.1}");
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_line_is_right_aligned_to_nine_characters() {
        assert_eq!(speed_line(137.5).as_str(), "speed:     137.5");
        assert_eq!(speed_line(0.0).as_str(), "speed:       0.0");
    }

    #[test]
    fn odometry_line_matches_the_speed_layout() {
        assert_eq!(odometry_line(0.0).as_str(), "odom :       0.0");
        assert_eq!(odometry_line(12345.6).as_str(), "odom :   12345.6");
    }

    #[test]
    fn lines_fill_a_sixteen_character_row() {
        assert_eq!(speed_line(299.9).len(), 16);
        assert_eq!(odometry_line(42.0).len(), 16);
    }
}
