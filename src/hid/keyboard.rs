//! USB HID keyboard report (boot protocol compatible).
//!
//! Layout (8 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Reserved (0x00)
//! Byte 2-7: Up to 6 simultaneous key codes (USB HID usage codes)
//! ```

use crate::keyboard::KeyboardState;

/// Keyboard report size in bytes.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

/// Number of scancode slots in a boot report.
pub const MAX_KEYS: usize = 6;

/// Slot value meaning "no key".
pub const NO_KEY: u8 = 0x00;

/// Standard USB HID boot-protocol keyboard report.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Reserved byte (always 0x00 per HID spec).
    pub reserved: u8,
    /// Up to 6 simultaneously pressed key codes.
    pub keycodes: [u8; MAX_KEYS],
}

impl KeyboardReport {
    /// Create an empty (all-keys-released) report.
    pub const fn empty() -> Self {
        Self {
            modifier: 0,
            reserved: 0,
            keycodes: [NO_KEY; MAX_KEYS],
        }
    }

    /// Encode the current keyboard state.
    ///
    /// Keys fill the slots in the order they were pressed; unused slots
    /// hold [`NO_KEY`].  At most [`MAX_KEYS`] keys are copied, so the report
    /// stays 8 bytes whatever the state holds.
    pub fn from_state(state: &KeyboardState) -> Self {
        let mut report = Self {
            modifier: state.modifiers(),
            ..Self::empty()
        };
        for (slot, &key) in report.keycodes.iter_mut().zip(state.pressed_keys()) {
            *slot = key;
        }
        report
    }

    /// Parse a raw 8-byte boot report, e.g. one captured from a sink.
    pub fn from_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < KEYBOARD_REPORT_SIZE {
            return None;
        }
        Some(Self {
            modifier: data[0],
            reserved: data[1],
            keycodes: [data[2], data[3], data[4], data[5], data[6], data[7]],
        })
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (8, or 0 if `buf` is too short).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < KEYBOARD_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.modifier;
        buf[1] = self.reserved;
        buf[2..8].copy_from_slice(&self.keycodes);
        KEYBOARD_REPORT_SIZE
    }

    pub fn to_bytes(&self) -> [u8; KEYBOARD_REPORT_SIZE] {
        let mut buf = [0u8; KEYBOARD_REPORT_SIZE];
        self.serialize(&mut buf);
        buf
    }

    /// Returns `true` if no keys and no modifiers are down.
    pub fn is_empty(&self) -> bool {
        self.modifier == 0 && self.keycodes.iter().all(|&k| k == NO_KEY)
    }

    /// Whether `key` occupies one of the six slots.
    pub fn contains(&self, key: u8) -> bool {
        key != NO_KEY && self.keycodes.contains(&key)
    }
}

/// Encode a state snapshot into a boot report. Pure; never fails.
pub fn encode(state: &KeyboardState) -> KeyboardReport {
    KeyboardReport::from_state(state)
}
