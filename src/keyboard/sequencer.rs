//! Timed typing: press, hold, release, one key after another.
//!
//! Each press is owned by a [`HeldKey`] guard.  Dropping a typing future
//! (for example when it loses an `embassy_futures::select`) drops the guard,
//! which releases the key, so a cancelled call never leaves a key stuck
//! down and never moves on to the next key.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Duration, Timer};

use super::Keyboard;
use crate::error::{Error, Result};
use crate::hid::keycodes::{self, KeyStroke};

/// A key (and the modifier bits it added) pressed on behalf of one
/// `type_*` step.
struct HeldKey<'a, M: RawMutex> {
    keyboard: &'a Keyboard<M>,
    key: u8,
    added_modifiers: u8,
    armed: bool,
}

impl<'a, M: RawMutex> HeldKey<'a, M> {
    fn press(keyboard: &'a Keyboard<M>, stroke: KeyStroke) -> Result<Self> {
        let added_modifiers = keyboard.press_chord(stroke.scancode, stroke.modifiers)?;
        Ok(Self {
            keyboard,
            key: stroke.scancode,
            added_modifiers,
            armed: true,
        })
    }

    fn release(mut self) -> Result<()> {
        self.armed = false;
        self.keyboard.release_chord(self.key, self.added_modifiers)
    }
}

impl<M: RawMutex> Drop for HeldKey<'_, M> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        warn!("typing cancelled with key {} held, releasing", self.key);
        if let Err(e) = self.keyboard.release_chord(self.key, self.added_modifiers) {
            warn!("release after cancel failed: {:?}", e);
        }
    }
}

impl<M: RawMutex> Keyboard<M> {
    async fn type_stroke(&self, stroke: KeyStroke, hold: Duration) -> Result<()> {
        let held = HeldKey::press(self, stroke)?;
        Timer::after(hold).await;
        held.release()
    }

    /// Press `key`, hold it for `hold`, then release it.
    pub async fn type_scancode(&self, key: u8, hold: Duration) -> Result<()> {
        self.type_stroke(
            KeyStroke {
                scancode: key,
                modifiers: 0,
            },
            hold,
        )
        .await
    }

    /// Type each scancode in turn; a key is released before the next one
    /// goes down.
    pub async fn type_scancodes(&self, keys: &[u8], hold: Duration) -> Result<()> {
        for &key in keys {
            self.type_scancode(key, hold).await?;
        }
        Ok(())
    }

    /// Type one character, holding Shift with it when the character needs it.
    ///
    /// Modifier bits are keyboard-wide. While this call holds Shift, any key
    /// another typer presses in the same window is reported shifted too.
    pub async fn type_letter(&self, letter: char, hold: Duration) -> Result<()> {
        let stroke = keycodes::keystroke(letter).ok_or(Error::UnsupportedCharacter(letter))?;
        self.type_stroke(stroke, hold).await
    }

    /// Type characters in order.
    ///
    /// Every character is looked up before anything is pressed, so an
    /// unsupported character fails the call without typing a prefix.
    pub async fn type_letters<I>(&self, letters: I, hold: Duration) -> Result<()>
    where
        I: IntoIterator<Item = char>,
        I::IntoIter: Clone,
    {
        let letters = letters.into_iter();
        if let Some(bad) = letters.clone().find(|&c| keycodes::keystroke(c).is_none()) {
            return Err(Error::UnsupportedCharacter(bad));
        }
        for letter in letters {
            self.type_letter(letter, hold).await?;
        }
        Ok(())
    }

    pub async fn type_string(&self, text: &str, hold: Duration) -> Result<()> {
        debug!("typing {} characters", text.chars().count());
        self.type_letters(text.chars(), hold).await
    }
}
