//! The emulated keyboard device: shared key state plus the press/release
//! API that application code and the USB poll path both go through.
//!
//! State lives behind an `embassy-sync` blocking mutex.  Every operation
//! holds the lock for a single short closure, so neither key mutation nor
//! report generation ever suspends.  Pick the raw mutex for the setting:
//! `CriticalSectionRawMutex` when typing and polling run in different
//! threads or interrupt priorities, `NoopRawMutex` when they share one
//! executor.

mod sequencer;
mod state;

pub use state::KeyboardState;

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use crate::error::Result;
use crate::hid::KeyboardReport;

pub struct Keyboard<M: RawMutex> {
    state: Mutex<M, RefCell<KeyboardState>>,
}

impl<M: RawMutex> Keyboard<M> {
    /// A keyboard with nothing pressed. `const` so firmware can keep it in
    /// a `static`.
    pub const fn new() -> Self {
        Self {
            state: Mutex::new(RefCell::new(KeyboardState::new())),
        }
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut KeyboardState) -> R) -> R {
        self.state.lock(|state| f(&mut state.borrow_mut()))
    }

    pub fn key_down(&self, key: u8) -> Result<()> {
        self.with_state(|s| s.press(key))?;
        debug!("key down: {}", key);
        Ok(())
    }

    pub fn key_up(&self, key: u8) -> Result<()> {
        self.with_state(|s| s.release(key))?;
        debug!("key up: {}", key);
        Ok(())
    }

    pub fn set_modifiers(&self, mask: u8) {
        self.with_state(|s| s.set_modifiers(mask));
    }

    pub fn modifiers(&self) -> u8 {
        self.with_state(|s| s.modifiers())
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.with_state(|s| s.is_pressed(key))
    }

    /// Release all keys and modifiers.
    pub fn release_all(&self) {
        self.with_state(KeyboardState::clear);
        debug!("all keys released");
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> KeyboardState {
        self.with_state(|s| s.clone())
    }

    /// Encode the current state as a boot report.
    pub fn report(&self) -> KeyboardReport {
        self.state
            .lock(|state| KeyboardReport::from_state(&state.borrow()))
    }

    /// Press `key` together with modifier bits `mods`.
    ///
    /// Returns the bits of `mods` that were not already set, i.e. the ones
    /// the matching [`Self::release_chord`] must clear again.
    fn press_chord(&self, key: u8, mods: u8) -> Result<u8> {
        let added = self.with_state(|s| {
            s.press(key)?;
            let added = mods & !s.modifiers();
            s.set_modifiers(s.modifiers() | added);
            Ok(added)
        })?;
        debug!("key down: {} (modifiers +{})", key, added);
        Ok(added)
    }

    fn release_chord(&self, key: u8, added: u8) -> Result<()> {
        self.with_state(|s| {
            s.set_modifiers(s.modifiers() & !added);
            s.release(key)
        })?;
        debug!("key up: {} (modifiers -{})", key, added);
        Ok(())
    }
}

impl<M: RawMutex> Default for Keyboard<M> {
    fn default() -> Self {
        Self::new()
    }
}
