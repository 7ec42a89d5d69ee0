//! Keyboard state tracking

use crate::error::{Error, Result};
use crate::hid::{MAX_KEYS, NO_KEY};
use heapless::Vec;

/// Keys and modifiers currently held down.
///
/// Keys are kept in press order, which is also the order they occupy the
/// report slots.  Capacity is the boot report's six slots: a seventh
/// distinct press is rejected rather than silently dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyboardState {
    keys: Vec<u8, MAX_KEYS>,
    modifiers: u8,
}

impl KeyboardState {
    pub const fn new() -> Self {
        Self {
            keys: Vec::new(),
            modifiers: 0,
        }
    }

    /// Mark `key` as held. Pressing a held key again is a no-op.
    pub fn press(&mut self, key: u8) -> Result<()> {
        if key == NO_KEY {
            return Err(Error::ReservedScancode);
        }
        if self.keys.contains(&key) {
            return Ok(());
        }
        self.keys.push(key).map_err(Error::CapacityExceeded)
    }

    /// Mark `key` as released. Fails if it was not held.
    pub fn release(&mut self, key: u8) -> Result<()> {
        let pos = self
            .keys
            .iter()
            .position(|&k| k == key)
            .ok_or(Error::NotPressed(key))?;
        // `remove` keeps the remaining keys in press order.
        self.keys.remove(pos);
        Ok(())
    }

    pub fn set_modifiers(&mut self, mask: u8) {
        self.modifiers = mask;
    }

    pub fn modifiers(&self) -> u8 {
        self.modifiers
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys.contains(&key)
    }

    /// Held keys, oldest press first.
    pub fn pressed_keys(&self) -> &[u8] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.modifiers == 0
    }

    /// Release every key and clear the modifier mask.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.modifiers = 0;
    }
}
