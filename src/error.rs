//! Unified error type for kbdemu.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` (feature `defmt`) for efficient on-target
//! logging and `Display` for host logging.

use core::fmt;

/// Errors surfaced by key-state mutation and the typing helpers.
///
/// All of these are caller mistakes rather than transient faults; none are
/// retried internally.  Report generation itself never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// `key_up` for a scancode that is not currently held.
    NotPressed(u8),

    /// A seventh distinct key was pressed while six were already held.
    CapacityExceeded(u8),

    /// The character has no entry in the HID keycode table.
    UnsupportedCharacter(char),

    /// Scancode 0 is the report's "no key" filler and cannot be pressed.
    ReservedScancode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotPressed(key) => write!(f, "key {key:#04x} is not pressed"),
            Error::CapacityExceeded(key) => {
                write!(f, "cannot press key {key:#04x}: six keys already held")
            }
            Error::UnsupportedCharacter(c) => write!(f, "no scancode for character {c:?}"),
            Error::ReservedScancode => f.write_str("scancode 0 is reserved"),
        }
    }
}

impl core::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
