//! Pointer button latch tracking.
//!
//! # Why a latch tracker? (for beginners)
//!
//! The remote-display protocol does not send "button pressed" or "button
//! released" messages.  Every pointer update carries a *snapshot* bitmask of
//! the buttons currently held, and nothing else.  To drive a kernel input
//! device we must reconstruct the edges ourselves: a bit that was clear last
//! time and is set now is a press; the reverse is a release.
//!
//! The previously observed state is the *latch*.  It is passed in and the
//! updated value returned — the transition function never mutates shared
//! state, which keeps every transition independently testable.
//!
//! # Button semantics
//!
//! | Button      | Behavior |
//! |-------------|----------|
//! | Left        | Level-sensitive: every call while held re-emits the position (drag); the down edge adds a touch-down first, the up edge a touch-up after a final position |
//! | Middle/Right| Edge-sensitive: one press action on the down edge, one release on the up edge |
//! | Wheel up/down | Instantaneous: one scroll tick per call with the bit set, never latched |
//!
//! When several bits change in one snapshot the actions are emitted in fixed
//! order: left, right, middle, wheel-up, wheel-down.  The device layer
//! terminates each action with its own synchronization marker.

/// Snapshot bitmask of the pointer buttons currently held, as delivered by
/// the protocol layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonMask(u8);

impl ButtonMask {
    /// Left button bit.
    pub const LEFT: u8 = 1 << 0;
    /// Middle button bit.
    pub const MIDDLE: u8 = 1 << 1;
    /// Right button bit.
    pub const RIGHT: u8 = 1 << 2;
    /// Wheel-up bit (instantaneous).
    pub const WHEEL_UP: u8 = 1 << 3;
    /// Wheel-down bit (instantaneous).
    pub const WHEEL_DOWN: u8 = 1 << 4;

    /// Wraps a raw protocol mask.
    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    /// The raw protocol byte.
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Left button held in this snapshot.
    pub const fn left(self) -> bool {
        self.0 & Self::LEFT != 0
    }

    /// Middle button held in this snapshot.
    pub const fn middle(self) -> bool {
        self.0 & Self::MIDDLE != 0
    }

    /// Right button held in this snapshot.
    pub const fn right(self) -> bool {
        self.0 & Self::RIGHT != 0
    }

    /// Wheel-up tick requested by this snapshot.
    pub const fn wheel_up(self) -> bool {
        self.0 & Self::WHEEL_UP != 0
    }

    /// Wheel-down tick requested by this snapshot.
    pub const fn wheel_down(self) -> bool {
        self.0 & Self::WHEEL_DOWN != 0
    }
}

impl From<u8> for ButtonMask {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}

/// Last-observed held state of the latched buttons.
///
/// Wheel bits are deliberately absent: they are instantaneous and never latch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LatchState {
    /// Left button was held at the previous snapshot.
    pub left: bool,
    /// Middle button was held at the previous snapshot.
    pub middle: bool,
    /// Right button was held at the previous snapshot.
    pub right: bool,
}

/// The two edge-sensitive buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Middle,
    Right,
}

/// Scroll wheel direction for an instantaneous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// One device-level action derived from a mask transition.
///
/// Position-carrying actions (`TouchDown`, `Drag`, `TouchUp`) use the x/y
/// coordinates of the pointer update they were derived from; the tracker
/// itself is coordinate-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Left down edge: absolute position followed by touch-contact press.
    TouchDown,
    /// Left held: absolute position re-emitted for drag semantics.
    Drag,
    /// Left up edge: final absolute position followed by touch-contact release.
    TouchUp,
    /// Down edge of an edge-sensitive button.
    ButtonDown(PointerButton),
    /// Up edge of an edge-sensitive button.
    ButtonUp(PointerButton),
    /// One scroll wheel tick.
    ScrollTick(ScrollDirection),
}

/// Derives the ordered action list for one mask snapshot and returns the
/// updated latch state.
///
/// The input state is taken by value and never mutated; callers replace their
/// stored latch with the returned one.
pub fn transitions(mask: ButtonMask, prev: LatchState) -> (Vec<PointerAction>, LatchState) {
    let mut actions = Vec::new();
    let mut next = prev;

    // Left button: drag while held, touch edges otherwise.
    if mask.left() && prev.left {
        actions.push(PointerAction::Drag);
    } else if mask.left() {
        next.left = true;
        actions.push(PointerAction::TouchDown);
    } else if prev.left {
        next.left = false;
        actions.push(PointerAction::TouchUp);
    }

    // Right before middle, per the fixed emission order.
    if mask.right() && !prev.right {
        next.right = true;
        actions.push(PointerAction::ButtonDown(PointerButton::Right));
    } else if !mask.right() && prev.right {
        next.right = false;
        actions.push(PointerAction::ButtonUp(PointerButton::Right));
    }

    if mask.middle() && !prev.middle {
        next.middle = true;
        actions.push(PointerAction::ButtonDown(PointerButton::Middle));
    } else if !mask.middle() && prev.middle {
        next.middle = false;
        actions.push(PointerAction::ButtonUp(PointerButton::Middle));
    }

    // Wheel ticks fire on every snapshot with the bit set.
    if mask.wheel_up() {
        actions.push(PointerAction::ScrollTick(ScrollDirection::Up));
    }
    if mask.wheel_down() {
        actions.push(PointerAction::ScrollTick(ScrollDirection::Down));
    }

    (actions, next)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_press_emits_touch_down_once_then_drags() {
        let (first, state) = transitions(ButtonMask::new(0b00001), LatchState::default());
        assert_eq!(first, vec![PointerAction::TouchDown]);
        assert!(state.left);

        let (second, state) = transitions(ButtonMask::new(0b00001), state);
        assert_eq!(second, vec![PointerAction::Drag]);
        assert!(state.left);
    }

    #[test]
    fn test_left_release_emits_touch_up() {
        let held = LatchState { left: true, ..LatchState::default() };
        let (actions, state) = transitions(ButtonMask::new(0), held);
        assert_eq!(actions, vec![PointerAction::TouchUp]);
        assert!(!state.left);
    }

    #[test]
    fn test_right_release_emits_exactly_one_release_and_no_position() {
        let held = LatchState { right: true, ..LatchState::default() };
        let (actions, state) = transitions(ButtonMask::new(0), held);
        assert_eq!(actions, vec![PointerAction::ButtonUp(PointerButton::Right)]);
        assert!(!state.right);
    }

    #[test]
    fn test_middle_and_right_do_not_repeat_while_held() {
        let (first, state) = transitions(ButtonMask::new(0b00110), LatchState::default());
        assert_eq!(
            first,
            vec![
                PointerAction::ButtonDown(PointerButton::Right),
                PointerAction::ButtonDown(PointerButton::Middle),
            ]
        );

        let (second, _) = transitions(ButtonMask::new(0b00110), state);
        assert!(second.is_empty(), "held edge-sensitive buttons emit nothing");
    }

    #[test]
    fn test_simultaneous_edges_follow_fixed_order() {
        let (actions, state) = transitions(ButtonMask::new(0b11111), LatchState::default());
        assert_eq!(
            actions,
            vec![
                PointerAction::TouchDown,
                PointerAction::ButtonDown(PointerButton::Right),
                PointerAction::ButtonDown(PointerButton::Middle),
                PointerAction::ScrollTick(ScrollDirection::Up),
                PointerAction::ScrollTick(ScrollDirection::Down),
            ]
        );
        assert_eq!(state, LatchState { left: true, middle: true, right: true });
    }

    #[test]
    fn test_wheel_ticks_are_not_latched() {
        let (first, state) = transitions(ButtonMask::new(0b01000), LatchState::default());
        assert_eq!(first, vec![PointerAction::ScrollTick(ScrollDirection::Up)]);
        assert_eq!(state, LatchState::default());

        // Same snapshot again still ticks; there is no release concept.
        let (second, _) = transitions(ButtonMask::new(0b01000), state);
        assert_eq!(second, vec![PointerAction::ScrollTick(ScrollDirection::Up)]);
    }

    #[test]
    fn test_drag_combined_with_scroll() {
        let held = LatchState { left: true, ..LatchState::default() };
        let (actions, _) = transitions(ButtonMask::new(0b10001), held);
        assert_eq!(
            actions,
            vec![
                PointerAction::Drag,
                PointerAction::ScrollTick(ScrollDirection::Down),
            ]
        );
    }

    #[test]
    fn test_empty_snapshot_with_empty_latch_is_a_no_op() {
        let (actions, state) = transitions(ButtonMask::new(0), LatchState::default());
        assert!(actions.is_empty());
        assert_eq!(state, LatchState::default());
    }

    #[test]
    fn test_input_state_is_not_mutated() {
        let prev = LatchState { left: true, middle: false, right: true };
        let copy = prev;
        let _ = transitions(ButtonMask::new(0), prev);
        assert_eq!(prev, copy);
    }

    #[test]
    fn test_mask_bit_accessors() {
        let mask = ButtonMask::from(0b10101u8);
        assert!(mask.left());
        assert!(!mask.middle());
        assert!(mask.right());
        assert!(!mask.wheel_up());
        assert!(mask.wheel_down());
        assert_eq!(mask.raw(), 0b10101);
    }
}
