//! Infrastructure layer: concrete uinput backends.

pub mod uinput;
