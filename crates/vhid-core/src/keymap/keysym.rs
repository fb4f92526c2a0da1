//! Keysym → scancode translation tables.
//!
//! # What is a keysym? (for beginners)
//!
//! The remote-display protocol identifies keys by *keysym*: a symbolic code
//! for the character or action the client keyboard produced, independent of
//! physical key positions.  Printable ASCII characters are their own keysym
//! (`'a'` = 0x61), while function and editing keys live in the 0xFFxx range
//! (`Enter` = 0xFF0D, `Left` = 0xFF51).
//!
//! The kernel input subsystem, on the other hand, speaks *scancodes*: numeric
//! codes for physical keys.  There is no scancode for `'A'` — only a scancode
//! for the A key, which produces `'A'` when Shift is held.  Translation
//! therefore yields a [`KeyStroke`]: a scancode plus the Shift/Alt modifiers
//! the device layer must synthesize around it.
//!
//! # Table structure
//!
//! The mapping is a priority chain of contiguous integer ranges, checked in
//! order:
//!
//! 1. ASCII letters through one 26-entry physical-key table (uppercase adds
//!    Shift).
//! 2. ASCII digits: `1`–`9` are a contiguous scancode run; `0` has its own
//!    code outside the run.
//! 3. Four punctuation bands, each through a parallel `(scancode, shift)`
//!    table pair indexed by offset from the band's lower bound.  Every access
//!    is bounds-checked against the individual table — the tables are not
//!    guaranteed to be uniformly sized, and a missing shift entry means
//!    "unshifted".
//! 4. An enumerated set of editing, navigation, and handset action keys.
//! 5. Accented Latin letters, reachable from both their Latin-1 codepoint and
//!    the dead-key-composed codepoint some input methods deliver.  These map
//!    to a base key with Alt held (plus Shift for uppercase).
//!
//! Anything unmatched translates to `None` and is dropped by the caller.
//! The mapping is many-to-one; callers must not assume invertibility.

use super::codes::{
    KEY_BACK, KEY_BACKSPACE, KEY_CALL, KEY_CAMERA, KEY_DPAD_DOWN, KEY_DPAD_LEFT, KEY_DPAD_RIGHT,
    KEY_DPAD_UP, KEY_ENDCALL, KEY_ENTER, KEY_ENVELOPE, KEY_EXPLORER, KEY_FOCUS, KEY_HOME,
    KEY_MENU, KEY_SEARCH, KEY_TAB,
};

/// The result of translating one keysym: the scancode to inject plus the
/// modifier keys the device layer must hold around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    /// Kernel scancode of the physical key.
    pub scancode: u16,
    /// Hold Left Shift around the stroke.
    pub shift: bool,
    /// Hold Left Alt around the stroke.
    pub alt: bool,
}

const fn plain(scancode: u16) -> KeyStroke {
    KeyStroke { scancode, shift: false, alt: false }
}

const fn shifted(scancode: u16) -> KeyStroke {
    KeyStroke { scancode, shift: true, alt: false }
}

const fn alted(scancode: u16) -> KeyStroke {
    KeyStroke { scancode, shift: false, alt: true }
}

const fn shift_alted(scancode: u16) -> KeyStroke {
    KeyStroke { scancode, shift: true, alt: true }
}

// ── Fixed tables ──────────────────────────────────────────────────────────────

/// Scancodes for the letters a–z, indexed by alphabetical offset.  The values
/// follow the physical key positions of the target layout (KEY_A = 30,
/// KEY_B = 48, …), so the sequence is row-major keyboard order, not numeric.
const LETTER_SCANCODES: [u16; 26] = [
    30, 48, 46, 32, 18, 33, 34, 35, 23, 36, 37, 38, 50, 49, 24, 25, 16, 19, 31, 20, 22, 47, 17,
    45, 21, 44,
];

// Band 32–47: space ! " # $ % & ' ( ) * + , - . /
const PUNCT_SPACE_SCANCODES: [u16; 16] = [57, 2, 40, 4, 5, 6, 8, 40, 10, 11, 9, 13, 51, 12, 52, 52];
const PUNCT_SPACE_SHIFT: [bool; 16] = [
    false, true, true, true, true, true, true, false, true, true, true, true, false, false, false,
    true,
];

// Band 58–64: : ; < = > ? @
const PUNCT_COLON_SCANCODES: [u16; 7] = [39, 39, 227, 13, 228, 53, 3];
const PUNCT_COLON_SHIFT: [bool; 7] = [true, false, true, true, true, true, true];

// Band 91–96: [ \ ] ^ _ `
const PUNCT_BRACKET_SCANCODES: [u16; 6] = [26, 43, 27, 7, 12, 399];
const PUNCT_BRACKET_SHIFT: [bool; 6] = [false, false, false, true, true, false];

// Band 123–127: { | } ~ DEL
const PUNCT_BRACE_SCANCODES: [u16; 5] = [26, 43, 27, 215, 14];
const PUNCT_BRACE_SHIFT: [bool; 5] = [true, true, true, true, false];

/// Looks up one punctuation band: `keysym` is translated through the parallel
/// table pair at its offset from `base`.
///
/// The scancode table bounds the band; the shift table may legitimately be
/// narrower, in which case missing entries read as unshifted.  Neither table
/// is ever indexed unchecked.
fn band_lookup(keysym: u32, base: u32, scancodes: &[u16], shifts: &[bool]) -> Option<KeyStroke> {
    let offset = keysym.checked_sub(base)? as usize;
    let scancode = *scancodes.get(offset)?;
    let shift = shifts.get(offset).copied().unwrap_or(false);
    Some(KeyStroke { scancode, shift, alt: false })
}

// ── Translation ───────────────────────────────────────────────────────────────

/// Translates a protocol keysym to the [`KeyStroke`] to inject.
///
/// Returns `None` for any keysym without a mapping; the caller drops the
/// event.  Total over the full `u32` domain — no input panics or reads out of
/// range.
pub fn keysym_to_stroke(keysym: u32) -> Option<KeyStroke> {
    // Lowercase and uppercase ASCII letters share one physical-key table.
    if (0x61..=0x7a).contains(&keysym) {
        return LETTER_SCANCODES
            .get((keysym - 0x61) as usize)
            .map(|&code| plain(code));
    }
    if (0x41..=0x5a).contains(&keysym) {
        return LETTER_SCANCODES
            .get((keysym - 0x41) as usize)
            .map(|&code| shifted(code));
    }

    // Digits: 1–9 are a contiguous scancode run starting at 2; 0 sits at the
    // end of the physical row with its own code.
    if (0x31..=0x39).contains(&keysym) {
        return Some(plain((keysym - 0x31) as u16 + 2));
    }
    if keysym == 0x30 {
        return Some(plain(11));
    }

    // Punctuation bands.
    if (32..=47).contains(&keysym) {
        return band_lookup(keysym, 32, &PUNCT_SPACE_SCANCODES, &PUNCT_SPACE_SHIFT);
    }
    if (58..=64).contains(&keysym) {
        return band_lookup(keysym, 58, &PUNCT_COLON_SCANCODES, &PUNCT_COLON_SHIFT);
    }
    if (91..=96).contains(&keysym) {
        return band_lookup(keysym, 91, &PUNCT_BRACKET_SCANCODES, &PUNCT_BRACKET_SHIFT);
    }
    if (123..=127).contains(&keysym) {
        return band_lookup(keysym, 123, &PUNCT_BRACE_SCANCODES, &PUNCT_BRACE_SHIFT);
    }

    special_or_accented(keysym)
}

/// Enumerated editing/navigation/action keys and the accented-Latin set.
///
/// The literal control characters (Ctrl-A/C/D/R as delivered by some clients)
/// are emitted as Alt plus the base key: the target layout has no Ctrl
/// synthesis, and Alt is the stand-in modifier the consumer expects.  This
/// conflation is deliberate and must not be "fixed" here.
fn special_or_accented(keysym: u32) -> Option<KeyStroke> {
    let stroke = match keysym {
        0xff08 => plain(KEY_BACKSPACE),
        0xff09 => plain(KEY_TAB),
        0x01 => alted(34),   // Ctrl-A
        0x03 => alted(46),   // Ctrl-C
        0x04 => alted(32),   // Ctrl-D
        0x12 => alted(31),   // Ctrl-R
        0xff0d => plain(KEY_ENTER),
        0xff1b => plain(KEY_BACK), // Escape -> back
        0xff51 => plain(KEY_DPAD_LEFT),
        0xff53 => plain(KEY_DPAD_RIGHT),
        0xff54 => plain(KEY_DPAD_DOWN),
        0xff52 => plain(KEY_DPAD_UP),
        0xff50 => plain(KEY_HOME),
        0xffff => plain(KEY_BACK), // Delete -> back
        0xff55 => plain(KEY_MENU), // Page Up -> menu
        0xffcf => plain(KEY_SEARCH), // F2 -> search
        0xffe3 => plain(KEY_SEARCH), // Left Ctrl -> search
        0xff56 => plain(KEY_CALL), // Page Down -> call
        0xff57 => plain(KEY_ENDCALL), // End -> end call
        0xffc2 => plain(KEY_FOCUS), // F5 -> focus
        0xffc3 => plain(KEY_CAMERA), // F6 -> camera
        0xffc4 => plain(KEY_EXPLORER), // F7 -> file browser
        0xffc5 => plain(KEY_ENVELOPE), // F8 -> mail

        // Accented Latin letters.  Each arm accepts both the dead-key-composed
        // codepoint (5xxxx) and the Latin-1 codepoint.  The base keys follow
        // the target layout's Alt plane, which is why several differ from the
        // unaccented letter's own key.
        50081 | 225 => alted(48),       // a with acute
        50049 | 193 => shift_alted(48), // A with acute
        50089 | 233 => alted(18),       // e with acute
        50057 | 201 => shift_alted(18), // E with acute
        50093 | 0xffbf => alted(36),    // i with acute
        50061 | 205 => shift_alted(36), // I with acute
        50099 | 243 => alted(16),       // o with acute
        50067 | 211 => shift_alted(16), // O with acute
        50102 | 246 => alted(25),       // o with diaeresis
        50070 | 214 => shift_alted(25), // O with diaeresis
        // Hungarian o/O with double acute sit on a different base key than
        // the diaeresis pair above — a layout choice, not a typo.
        50577 | 245 => alted(19),
        50576 | 213 => shift_alted(19),
        // Lowercase u with acute shares the uppercase arm (and its Shift
        // flag); the layout has no unshifted slot for it.
        50106 | 50074 | 218 => shift_alted(17),
        50108 | 252 => alted(47),       // u with diaeresis
        50076 | 220 => shift_alted(47), // U with diaeresis
        // Hungarian u/U with double acute, again on their own base key.
        50609 | 251 => alted(45),
        50608 | 219 => shift_alted(45),

        _ => return None,
    };
    Some(stroke)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
