//! Application layer: the virtual device lifecycle and event expansion.

pub mod virtual_device;
