//! kbdemu - an emulated USB HID boot keyboard.
//!
//! The crate keeps track of which keys are held, encodes that state as the
//! fixed 8-byte boot-protocol report whenever the host polls, and types
//! scancodes, characters and strings with controlled hold times.
//!
//! Everything except `usb::hid_device` is `no_std`, allocation-free and
//! runs on the host, which is how the tests exercise it (`cargo test`).
//! The firmware binary in `main.rs` needs the `embedded` feature.
//!
//! ```no_run
//! use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
//! use kbdemu::config::DEFAULT_HOLD;
//! use kbdemu::Keyboard;
//!
//! static KEYBOARD: Keyboard<CriticalSectionRawMutex> = Keyboard::new();
//!
//! async fn greet() -> kbdemu::Result<()> {
//!     KEYBOARD.type_string("hi", DEFAULT_HOLD).await
//! }
//! ```

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod error;
pub mod hid;
pub mod keyboard;
pub mod usb;

pub use error::{Error, Result};
pub use hid::{encode, KeyboardReport};
pub use keyboard::{Keyboard, KeyboardState};
pub use usb::ReportSink;
