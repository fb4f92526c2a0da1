//! Named Linux input key codes used by the translation tables and the
//! device layer.
//!
//! Values are from `linux/input-event-codes.h`.  The handset action keys
//! (search, call, focus, camera, …) use the codes the Android input stack
//! expects; a few of them differ from the mainline desktop assignments, which
//! is intentional — the virtual device targets a handset-style consumer.

/// Backspace.
pub const KEY_BACKSPACE: u16 = 14;
/// Tab.
pub const KEY_TAB: u16 = 15;
/// Enter / Return.
pub const KEY_ENTER: u16 = 28;
/// Left Shift, pressed around shifted strokes.
pub const KEY_LEFTSHIFT: u16 = 42;
/// Left Alt, pressed around accented strokes.
pub const KEY_LEFTALT: u16 = 56;
/// "Call" action (mapped from Page Down).
pub const KEY_CALL: u16 = 61;
/// Home.
pub const KEY_HOME: u16 = 102;
/// D-pad up.
pub const KEY_DPAD_UP: u16 = 103;
/// D-pad left.
pub const KEY_DPAD_LEFT: u16 = 105;
/// D-pad right.
pub const KEY_DPAD_RIGHT: u16 = 106;
/// "End call" action (mapped from End and the middle pointer button).
pub const KEY_ENDCALL: u16 = 107;
/// D-pad down.
pub const KEY_DPAD_DOWN: u16 = 108;
/// "Search" action (mapped from F2 and Left Ctrl).
pub const KEY_SEARCH: u16 = 127;
/// File browser action (mapped from F7).
pub const KEY_EXPLORER: u16 = 150;
/// Mail action (mapped from F8).
pub const KEY_ENVELOPE: u16 = 155;
/// "Back" action (mapped from Escape, Delete, and the right pointer button).
pub const KEY_BACK: u16 = 158;
/// Camera focus action (mapped from F5).
pub const KEY_FOCUS: u16 = 211;
/// Camera shutter action (mapped from F6).
pub const KEY_CAMERA: u16 = 212;
/// "Menu" action (mapped from Page Up).
pub const KEY_MENU: u16 = 229;

/// Touch-contact button emitted around absolute pointer positions while the
/// left button is latched.
pub const BTN_TOUCH: u16 = 0x14a;

/// Highest key code the virtual device declares capability for.
pub const KEY_MAX: u16 = 0x2ff;
