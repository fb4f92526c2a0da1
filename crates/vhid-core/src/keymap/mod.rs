//! Keysym to scancode translation for the virtual input device.
//!
//! The canonical inbound representation is the X11-style keysym delivered by
//! the remote-display protocol; the outbound representation is a Linux input
//! scancode plus synthesized Shift/Alt modifier flags.
//!
//! The translation is a fixed, locale-sensitive table aimed at a handset-style
//! key layout: escape and delete become the "back" action, page-up/page-down
//! become menu/call, and accented Latin letters are reached by holding Alt on
//! a base key.  It is many-to-one and deliberately not invertible.

pub mod codes;
pub mod keysym;

pub use keysym::{keysym_to_stroke, KeyStroke};
