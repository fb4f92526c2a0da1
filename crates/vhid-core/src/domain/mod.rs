//! Pure domain logic with no OS dependencies.
//!
//! Holds the pointer button latch state machine: the piece of the injector
//! that reconstructs press/release edges from the protocol's stateless
//! button-mask snapshots.

pub mod buttons;
