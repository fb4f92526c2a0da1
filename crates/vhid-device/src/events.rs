//! Linux input event-type and code constants.
//!
//! Values are from `linux/input-event-codes.h` and `linux/input.h`.  Only the
//! constants the virtual device actually declares or emits are defined here;
//! key codes live in `vhid_core::keymap::codes`.

/// Synchronization event type.
pub const EV_SYN: u16 = 0x00;
/// Key/button event type.
pub const EV_KEY: u16 = 0x01;
/// Relative axis event type (pointer motion, wheel).
pub const EV_REL: u16 = 0x02;
/// Absolute axis event type (bounded pointer position).
pub const EV_ABS: u16 = 0x03;
/// Key-repeat capability event type (declared, never emitted).
pub const EV_REP: u16 = 0x14;

/// "Batch complete" synchronization code; follows every logical action.
pub const SYN_REPORT: u16 = 0;

/// Relative X motion.
pub const REL_X: u16 = 0x00;
/// Relative Y motion.
pub const REL_Y: u16 = 0x01;
/// Wheel tick axis: +1 scrolls up, -1 scrolls down.
pub const REL_WHEEL: u16 = 0x08;

/// Absolute X position.
pub const ABS_X: u16 = 0x00;
/// Absolute Y position.
pub const ABS_Y: u16 = 0x01;

/// Direct-touch input property: tells the input stack the absolute
/// coordinates map 1:1 onto the display, as on a touchscreen.
pub const INPUT_PROP_DIRECT: u16 = 0x05;

/// Bus type reported in the device identity: a virtual device.
pub const BUS_VIRTUAL: u16 = 0x06;
