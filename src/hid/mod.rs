//! HID boot keyboard report, keycode table and static descriptors.

pub mod descriptor;
pub mod keyboard;
pub mod keycodes;


pub use keyboard::{encode, KeyboardReport, KEYBOARD_REPORT_SIZE, MAX_KEYS, NO_KEY};
pub use keycodes::KeyStroke;
