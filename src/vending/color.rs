//! 24-bit terminal colors for console prompts.

use colored::{ColoredString, Colorize};

const BLUE: (u8, u8, u8) = (30, 100, 180);
const RED: (u8, u8, u8) = (220, 45, 35);
const GREEN: (u8, u8, u8) = (45, 145, 30);

/// Commands, product names and prices.
pub fn highlight(msg: &str) -> ColoredString {
    msg.truecolor(BLUE.0, BLUE.1, BLUE.2)
}

/// Failures and out-of-stock notices.
pub fn alert(msg: &str) -> ColoredString {
    msg.truecolor(RED.0, RED.1, RED.2)
}

pub fn success(msg: &str) -> ColoredString {
    msg.truecolor(GREEN.0, GREEN.1, GREEN.2)
}

/// Force colors on or off for the whole process.
pub fn set_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}
