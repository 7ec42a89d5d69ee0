//! Application-wide constants and compile-time configuration.
//!
//! USB identity, endpoint layout and typing defaults live here so they can
//! be tuned in one place.

use embassy_time::Duration;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0001;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "kbdemu";
pub const USB_PRODUCT: &str = "Non-suspicious Keyboard";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// Interrupt IN endpoint the host polls for keyboard reports.
pub const KEYBOARD_ENDPOINT: u8 = 3;

/// USB HID polling interval (ms).
pub const USB_HID_POLL_MS: u8 = 10;

// Typing

/// How long `type_*` holds each key unless the caller asks otherwise.
pub const DEFAULT_HOLD_MS: u64 = 100;

pub const DEFAULT_HOLD: Duration = Duration::from_millis(DEFAULT_HOLD_MS);

// Demo firmware

/// Text the firmware types after enumeration.
pub const DEMO_TEXT: &str = "hello from kbdemu\n";

/// Pause between repetitions of the demo text (seconds).
pub const DEMO_REPEAT_SECS: u64 = 30;
