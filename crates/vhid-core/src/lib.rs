//! # vhid-core
//!
//! Shared library for the vhid virtual input injector containing the keysym
//! translation tables and the pointer button latch state machine.
//!
//! This crate is pure computation: it has zero dependencies on OS APIs, device
//! files, or I/O of any kind.  The kernel-facing half of the system lives in
//! the `vhid-device` crate and consumes the types defined here.
//!
//! # Architecture overview (for beginners)
//!
//! A remote-display server (VNC-style) hands us two kinds of decoded client
//! input:
//!
//! - **Key events** as *keysyms* — symbolic codes for "the key the user meant"
//!   (a letter, a punctuation mark, an arrow key), independent of any physical
//!   keyboard layout.
//! - **Pointer events** as a button-mask snapshot plus absolute x/y
//!   coordinates.  The mask says which buttons are down *right now*; the
//!   protocol carries no press/release edges.
//!
//! This crate defines:
//!
//! - **`keymap`** – The keysym → scancode translator.  A scancode is the
//!   kernel-level numeric code for a physical key; some keysyms additionally
//!   require a synthesized Shift or Alt modifier to reach the glyph on the
//!   target layout.
//!
//! - **`domain`** – The button latch tracker.  Given only the current mask
//!   snapshot and the previously latched state, it derives the ordered list
//!   of press/release/drag/scroll actions to emit.

// Each top-level module lives in a subdirectory with the same name
// (e.g., src/keymap/mod.rs).
pub mod domain;
pub mod keymap;

// Re-export the most-used types at the crate root so callers can write
// `vhid_core::KeyStroke` instead of `vhid_core::keymap::keysym::KeyStroke`.
pub use domain::buttons::{
    transitions, ButtonMask, LatchState, PointerAction, PointerButton, ScrollDirection,
};
pub use keymap::keysym::{keysym_to_stroke, KeyStroke};
