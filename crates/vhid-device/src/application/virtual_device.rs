//! The virtual input device: uinput lifecycle and event emission.
//!
//! # Lifecycle
//!
//! ```text
//! start(w, h)        -- open, declare capabilities, write identity, create
//! start_async(w, h)  -- the same, on a background blocking task
//! reconfigure(w, h)  -- stop() + start_async(); bounds change asynchronously
//! stop()             -- destroy and close; idempotent
//! ```
//!
//! Creation declares the capability bit for *every* key code up to
//! [`KEY_MAX`](vhid_core::keymap::codes::KEY_MAX), so any scancode the
//! translator produces is always a declared key.  Any failure while
//! configuring rolls back to fully closed: a device either finishes `start`
//! open and usable or is exactly as it was before the call.
//!
//! # Event semantics
//!
//! `key_event` only acts on the down edge and synthesizes its own release:
//! the emitted sequence is optional Shift/Alt press, sync, key press, sync,
//! key release, sync, optional Alt/Shift release, sync.  The caller's up-edge
//! notification is intentionally ignored — the device does not attempt to
//! reproduce real key-hold timing.
//!
//! `pointer_event` feeds the snapshot mask through the button latch tracker
//! and expands each resulting action into its event group, each terminated by
//! its own synchronization marker.
//!
//! Multi-step sequences are best-effort: an individual failed write is logged
//! and reported to no one further — the remaining steps are still attempted.
//! There is no retry anywhere in this layer.
//!
//! # Concurrency
//!
//! All state lives behind one mutex; every operation on a device instance is
//! serialized.  The only off-thread work is the background `start`, whose
//! completion is observable through the returned join handle but unordered
//! relative to the caller's next statements.  A `pointer_event` racing a
//! `reconfigure` simply no-ops until the new device is ready — an accepted
//! property, documented rather than hidden behind blocking.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, trace, warn};

use vhid_core::keymap::codes::{
    BTN_TOUCH, KEY_BACK, KEY_ENDCALL, KEY_LEFTALT, KEY_LEFTSHIFT, KEY_MAX,
};
use vhid_core::{
    keysym_to_stroke, transitions, ButtonMask, LatchState, PointerAction, PointerButton,
    ScrollDirection,
};

use crate::events::{
    ABS_X, ABS_Y, BUS_VIRTUAL, EV_ABS, EV_KEY, EV_REL, EV_REP, EV_SYN, INPUT_PROP_DIRECT,
    REL_WHEEL, REL_X, REL_Y, SYN_REPORT,
};

/// Name the virtual device registers with the kernel.
pub const DEVICE_NAME: &str = "vhid-remote-input";

/// Errors surfaced by device lifecycle and emission primitives.
#[derive(Debug, Error)]
pub enum DeviceError {
    /// `start` was called while a device handle already exists.
    #[error("virtual input device is already open")]
    AlreadyOpen,

    /// Opening, capability declaration, identity write, or finalization
    /// failed; the partially opened handle has been closed.
    #[error("virtual input device initialisation failed: {0}")]
    Init(#[source] io::Error),

    /// A single event record did not transfer in full.  Non-fatal to
    /// in-flight multi-step sequences.
    #[error("device event write failed: {0}")]
    WriteFailed(#[source] io::Error),
}

/// One capability declaration issued before the device is finalized.
///
/// Each variant names one event-type/code-bit pair and corresponds to one
/// `UI_SET_*` configuration call on the kernel interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Enable an event type (`UI_SET_EVBIT`).
    EventType(u16),
    /// Enable one key/button code (`UI_SET_KEYBIT`).
    Key(u16),
    /// Enable one relative axis (`UI_SET_RELBIT`).
    RelativeAxis(u16),
    /// Enable one absolute axis (`UI_SET_ABSBIT`).
    AbsoluteAxis(u16),
    /// Set one input property bit (`UI_SET_PROPBIT`).
    Property(u16),
}

/// The fixed capability list declared at creation, in declaration order.
///
/// Key capability bits are declared separately for every code up to
/// `KEY_MAX` and are not part of this list.
pub const CAPABILITIES: &[Capability] = &[
    Capability::EventType(EV_KEY),
    Capability::EventType(EV_REP),
    Capability::EventType(EV_REL),
    Capability::RelativeAxis(REL_X),
    Capability::RelativeAxis(REL_Y),
    Capability::RelativeAxis(REL_WHEEL),
    Capability::EventType(EV_ABS),
    Capability::AbsoluteAxis(ABS_X),
    Capability::AbsoluteAxis(ABS_Y),
    Capability::EventType(EV_SYN),
    Capability::Property(INPUT_PROP_DIRECT),
];

/// Device identity and absolute-axis bounds written before finalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceSetup {
    /// Device name registered with the kernel.
    pub name: &'static str,
    /// Bus type in the identity record.
    pub bus_type: u16,
    /// Vendor id in the identity record.
    pub vendor: u16,
    /// Product id in the identity record.
    pub product: u16,
    /// Version in the identity record.
    pub version: u16,
    /// Inclusive upper bound of the absolute X axis.
    pub abs_x_max: i32,
    /// Inclusive upper bound of the absolute Y axis.
    pub abs_y_max: i32,
}

impl DeviceSetup {
    /// Builds the identity record for a device bounded by `width` × `height`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            name: DEVICE_NAME,
            bus_type: BUS_VIRTUAL,
            vendor: 1,
            product: 1,
            version: 4,
            abs_x_max: width as i32,
            abs_y_max: height as i32,
        }
    }
}

/// An open (not yet necessarily finalized) kernel device handle.
///
/// The real implementation wraps a `/dev/uinput` file descriptor; tests use
/// a recording mock.  `destroy` is infallible by design — at teardown there
/// is nobody left to report to.
pub trait UinputChannel: Send {
    /// Declares one capability bit.
    fn set_capability(&mut self, capability: Capability) -> io::Result<()>;

    /// Writes the device identity and axis bounds.
    fn write_setup(&mut self, setup: &DeviceSetup) -> io::Result<()>;

    /// Finalizes creation; after this the device is visible to the system.
    fn create(&mut self) -> io::Result<()>;

    /// Writes one timestamped event record.  A short write is an error.
    fn write_event(&mut self, event_type: u16, code: u16, value: i32) -> io::Result<()>;

    /// Destroys the device and releases the handle.
    fn destroy(&mut self);
}

/// Factory for [`UinputChannel`]s; the injection point for the backend.
pub trait UinputOpener: Send + Sync {
    /// Opens a fresh kernel device handle.
    fn open(&self) -> io::Result<Box<dyn UinputChannel>>;
}

// ── Device ────────────────────────────────────────────────────────────────────

struct Inner {
    channel: Option<Box<dyn UinputChannel>>,
    latch: LatchState,
}

/// The virtual keyboard/pointer device.
///
/// Cloning is cheap and shares the underlying device state; the clone is what
/// `start_async` moves onto its background task.
#[derive(Clone)]
pub struct VirtualInputDevice {
    opener: Arc<dyn UinputOpener>,
    inner: Arc<Mutex<Inner>>,
}

impl VirtualInputDevice {
    /// Creates a closed device that will open handles through `opener`.
    pub fn new(opener: Arc<dyn UinputOpener>) -> Self {
        Self {
            opener,
            inner: Arc::new(Mutex::new(Inner {
                channel: None,
                latch: LatchState::default(),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock means a panic mid-emission; the device state itself
        // (an optional handle and three booleans) is still coherent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether a kernel device currently exists.
    pub fn is_open(&self) -> bool {
        self.lock().channel.is_some()
    }

    /// Creates the kernel device with an absolute pointer range of
    /// `width` × `height`.
    ///
    /// # Errors
    ///
    /// [`DeviceError::AlreadyOpen`] if a device exists (the existing device
    /// is left untouched); [`DeviceError::Init`] if any configuration step
    /// fails, in which case the partial handle is closed and the device
    /// remains fully closed.
    pub fn start(&self, width: u32, height: u32) -> Result<(), DeviceError> {
        let mut inner = self.lock();

        if inner.channel.is_some() {
            error!("start requested but the input device is already open");
            return Err(DeviceError::AlreadyOpen);
        }

        inner.latch = LatchState::default();

        let mut channel = self.opener.open().map_err(DeviceError::Init)?;
        if let Err(e) = configure(channel.as_mut(), width, height) {
            // Dropping the unfinalized channel closes the handle.
            error!("device configuration failed: {e}");
            return Err(DeviceError::Init(e));
        }

        inner.channel = Some(channel);
        info!(width, height, "virtual input device created");
        Ok(())
    }

    /// Schedules [`start`](Self::start) on a background blocking task and
    /// returns immediately.
    ///
    /// Creation can take noticeable time (hundreds of capability ioctls), so
    /// callers on a latency-sensitive path fire and forget.  The returned
    /// handle makes completion observable for callers that do care; dropping
    /// it detaches the task.  Until the task finishes, event calls no-op.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start_async(&self, width: u32, height: u32) -> JoinHandle<Result<(), DeviceError>> {
        let device = self.clone();
        tokio::task::spawn_blocking(move || device.start(width, height))
    }

    /// Destroys the device with [`stop`](Self::stop) and recreates it with
    /// the new bounds via [`start_async`](Self::start_async).
    ///
    /// The new bounds take effect asynchronously: a pointer event issued
    /// immediately after `reconfigure` may be silently dropped until the
    /// background start completes.
    pub fn reconfigure(&self, width: u32, height: u32) -> JoinHandle<Result<(), DeviceError>> {
        if let Err(e) = self.stop() {
            warn!("stop before reconfigure failed: {e}");
        }
        self.start_async(width, height)
    }

    /// Destroys the kernel device.  Idempotent: succeeds trivially when the
    /// device is closed or was never opened.
    pub fn stop(&self) -> Result<(), DeviceError> {
        let mut inner = self.lock();
        if let Some(mut channel) = inner.channel.take() {
            channel.destroy();
            info!("virtual input device destroyed");
        }
        Ok(())
    }

    /// Injects one remote key event.
    ///
    /// No-op when the device is closed, when `down` is false (the release is
    /// synthesized below, so the up edge carries no information), and when
    /// the keysym has no mapping.  Individual write failures within the
    /// sequence are logged and the remaining steps still attempted.
    pub fn key_event(&self, down: bool, keysym: u32) {
        let mut inner = self.lock();
        if inner.channel.is_none() {
            return;
        }
        if !down {
            return;
        }
        let Some(stroke) = keysym_to_stroke(keysym) else {
            debug!(keysym, "keysym has no scancode mapping; dropping");
            return;
        };

        if stroke.shift {
            best_effort(inner.press(KEY_LEFTSHIFT));
        }
        if stroke.alt {
            best_effort(inner.press(KEY_LEFTALT));
        }
        best_effort(inner.inject(EV_SYN, SYN_REPORT, 0));

        best_effort(inner.press(stroke.scancode));
        best_effort(inner.inject(EV_SYN, SYN_REPORT, 0));
        best_effort(inner.release(stroke.scancode));
        best_effort(inner.inject(EV_SYN, SYN_REPORT, 0));

        if stroke.alt {
            best_effort(inner.release(KEY_LEFTALT));
        }
        if stroke.shift {
            best_effort(inner.release(KEY_LEFTSHIFT));
        }
        best_effort(inner.inject(EV_SYN, SYN_REPORT, 0));
    }

    /// Injects one remote pointer update.
    ///
    /// No-op when the device is closed.  The snapshot mask runs through the
    /// button latch tracker; each derived action is emitted with its own
    /// synchronization marker, best-effort.
    pub fn pointer_event(&self, mask: ButtonMask, x: i32, y: i32) {
        let mut inner = self.lock();
        if inner.channel.is_none() {
            return;
        }
        trace!(mask = mask.raw(), x, y, "pointer event");

        let (actions, next) = transitions(mask, inner.latch);
        inner.latch = next;
        for action in actions {
            inner.apply_pointer_action(action, x, y);
        }
    }

    // ── Low-level primitives ──────────────────────────────────────────────────
    //
    // Single-record operations for callers composing their own sequences.
    // Only the `*_syn`-suffixed call appends a synchronization marker; press,
    // release, and click do not, so composed sequences control their own
    // batching.  All of them no-op on a closed device.

    /// Writes one raw event record.
    pub fn inject(&self, event_type: u16, code: u16, value: i32) -> Result<(), DeviceError> {
        self.lock().inject(event_type, code, value)
    }

    /// Writes one raw event record followed by a synchronization marker.
    pub fn inject_syn(&self, event_type: u16, code: u16, value: i32) -> Result<(), DeviceError> {
        self.lock().inject_syn(event_type, code, value)
    }

    /// Moves the pointer by a relative delta and synchronizes.
    pub fn move_relative(&self, x: i32, y: i32) -> Result<(), DeviceError> {
        let mut inner = self.lock();
        inner.inject(EV_REL, REL_X, x)?;
        inner.inject_syn(EV_REL, REL_Y, y)
    }

    /// Places the pointer at an absolute position and synchronizes.
    pub fn set_absolute(&self, x: i32, y: i32) -> Result<(), DeviceError> {
        let mut inner = self.lock();
        inner.inject(EV_ABS, ABS_X, x)?;
        inner.inject_syn(EV_ABS, ABS_Y, y)
    }

    /// Presses one key, without a synchronization marker.
    pub fn press(&self, code: u16) -> Result<(), DeviceError> {
        self.lock().press(code)
    }

    /// Releases one key, without a synchronization marker.
    pub fn release(&self, code: u16) -> Result<(), DeviceError> {
        self.lock().release(code)
    }

    /// Presses and immediately releases one key, with no marker in between.
    pub fn click(&self, code: u16) -> Result<(), DeviceError> {
        let mut inner = self.lock();
        inner.press(code)?;
        inner.release(code)
    }
}

impl Inner {
    fn inject(&mut self, event_type: u16, code: u16, value: i32) -> Result<(), DeviceError> {
        match self.channel.as_mut() {
            Some(channel) => channel
                .write_event(event_type, code, value)
                .map_err(DeviceError::WriteFailed),
            None => Ok(()),
        }
    }

    fn inject_syn(&mut self, event_type: u16, code: u16, value: i32) -> Result<(), DeviceError> {
        self.inject(event_type, code, value)?;
        self.inject(EV_SYN, SYN_REPORT, 0)
    }

    fn press(&mut self, code: u16) -> Result<(), DeviceError> {
        self.inject(EV_KEY, code, 1)
    }

    fn release(&mut self, code: u16) -> Result<(), DeviceError> {
        self.inject(EV_KEY, code, 0)
    }

    fn apply_pointer_action(&mut self, action: PointerAction, x: i32, y: i32) {
        match action {
            PointerAction::TouchDown => {
                best_effort(self.inject(EV_ABS, ABS_X, x));
                best_effort(self.inject(EV_ABS, ABS_Y, y));
                best_effort(self.inject(EV_KEY, BTN_TOUCH, 1));
            }
            PointerAction::Drag => {
                best_effort(self.inject(EV_ABS, ABS_X, x));
                best_effort(self.inject(EV_ABS, ABS_Y, y));
            }
            PointerAction::TouchUp => {
                best_effort(self.inject(EV_ABS, ABS_X, x));
                best_effort(self.inject(EV_ABS, ABS_Y, y));
                best_effort(self.inject(EV_KEY, BTN_TOUCH, 0));
            }
            PointerAction::ButtonDown(button) => {
                best_effort(self.press(button_code(button)));
            }
            PointerAction::ButtonUp(button) => {
                best_effort(self.release(button_code(button)));
            }
            PointerAction::ScrollTick(direction) => {
                let value = match direction {
                    ScrollDirection::Up => 1,
                    ScrollDirection::Down => -1,
                };
                best_effort(self.inject(EV_REL, REL_WHEEL, value));
            }
        }
        // Each action is its own kernel batch.
        best_effort(self.inject(EV_SYN, SYN_REPORT, 0));
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(mut channel) = self.channel.take() {
            channel.destroy();
        }
    }
}

/// The edge-sensitive pointer buttons map to handset actions rather than
/// mouse buttons: right is "back", middle is "end call".
fn button_code(button: PointerButton) -> u16 {
    match button {
        PointerButton::Right => KEY_BACK,
        PointerButton::Middle => KEY_ENDCALL,
    }
}

fn configure(channel: &mut dyn UinputChannel, width: u32, height: u32) -> io::Result<()> {
    for capability in CAPABILITIES {
        channel.set_capability(*capability)?;
    }
    for code in 0..KEY_MAX {
        channel.set_capability(Capability::Key(code))?;
    }
    channel.write_setup(&DeviceSetup::new(width, height))?;
    channel.create()
}

fn best_effort(result: Result<(), DeviceError>) {
    if let Err(e) = result {
        error!("event write failed mid-sequence: {e}");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::uinput::mock::{ChannelOp, MockUinputOpener};

    fn make_device() -> (VirtualInputDevice, Arc<MockUinputOpener>) {
        let opener = Arc::new(MockUinputOpener::new());
        let device = VirtualInputDevice::new(Arc::clone(&opener) as Arc<dyn UinputOpener>);
        (device, opener)
    }

    #[test]
    fn test_start_declares_capabilities_identity_and_create_in_order() {
        // Arrange
        let (device, opener) = make_device();

        // Act
        device.start(1280, 720).unwrap();

        // Assert – fixed capability list first, then one keybit per code,
        // then identity, then finalize.
        let ops = opener.ops();
        let fixed = CAPABILITIES.len();
        for (i, capability) in CAPABILITIES.iter().enumerate() {
            assert_eq!(ops[i], ChannelOp::Capability(*capability));
        }
        for code in 0..KEY_MAX {
            assert_eq!(
                ops[fixed + code as usize],
                ChannelOp::Capability(Capability::Key(code))
            );
        }
        let tail = &ops[fixed + KEY_MAX as usize..];
        assert_eq!(
            tail,
            [
                ChannelOp::Setup(DeviceSetup::new(1280, 720)),
                ChannelOp::Create,
            ]
        );
        assert!(device.is_open());
    }

    #[test]
    fn test_start_twice_fails_with_already_open_and_keeps_first_device() {
        // Arrange
        let (device, opener) = make_device();
        device.start(800, 600).unwrap();
        opener.clear();

        // Act
        let second = device.start(1024, 768);

        // Assert
        assert!(matches!(second, Err(DeviceError::AlreadyOpen)));
        assert!(device.is_open());
        assert!(opener.ops().is_empty(), "no configuration may be re-issued");

        // The first device still works.
        device.key_event(true, 'x' as u32);
        assert!(!opener.written_events().is_empty());
    }

    #[test]
    fn test_stop_is_idempotent_on_a_never_opened_device() {
        let (device, opener) = make_device();
        device.stop().unwrap();
        device.stop().unwrap();
        assert!(!device.is_open());
        assert!(opener.ops().is_empty());
    }

    #[test]
    fn test_stop_destroys_exactly_once() {
        let (device, opener) = make_device();
        device.start(640, 480).unwrap();

        device.stop().unwrap();
        device.stop().unwrap();

        let destroys = opener
            .ops()
            .iter()
            .filter(|op| **op == ChannelOp::Destroy)
            .count();
        assert_eq!(destroys, 1);
        assert!(!device.is_open());
    }

    #[test]
    fn test_failed_start_rolls_back_to_closed_and_can_retry() {
        // Arrange – fail during the keybit declaration loop.
        let (device, opener) = make_device();
        opener.fail_after(CAPABILITIES.len() + 3);

        // Act
        let result = device.start(800, 600);

        // Assert
        assert!(matches!(result, Err(DeviceError::Init(_))));
        assert!(!device.is_open());

        // A later start with a healthy backend succeeds.
        opener.clear_failures();
        opener.clear();
        device.start(800, 600).unwrap();
        assert!(device.is_open());
    }

    #[test]
    fn test_open_failure_is_init_error() {
        let (device, opener) = make_device();
        opener.set_fail_open(true);
        assert!(matches!(device.start(1, 1), Err(DeviceError::Init(_))));
        assert!(!device.is_open());
    }

    #[test]
    fn test_key_event_for_uppercase_letter_wraps_stroke_in_shift() {
        use vhid_core::keysym_to_stroke;

        // Arrange
        let (device, opener) = make_device();
        device.start(800, 600).unwrap();
        opener.clear();
        let code = keysym_to_stroke('a' as u32).unwrap().scancode;

        // Act
        device.key_event(true, 'A' as u32);

        // Assert – exactly the 8-record auto-release sequence, no Alt.
        assert_eq!(
            opener.written_events(),
            vec![
                (EV_KEY, KEY_LEFTSHIFT, 1),
                (EV_SYN, SYN_REPORT, 0),
                (EV_KEY, code, 1),
                (EV_SYN, SYN_REPORT, 0),
                (EV_KEY, code, 0),
                (EV_SYN, SYN_REPORT, 0),
                (EV_KEY, KEY_LEFTSHIFT, 0),
                (EV_SYN, SYN_REPORT, 0),
            ]
        );
    }

    #[test]
    fn test_key_event_plain_letter_has_no_modifier_records() {
        let (device, opener) = make_device();
        device.start(800, 600).unwrap();
        opener.clear();
        let code = vhid_core::keysym_to_stroke('q' as u32).unwrap().scancode;

        device.key_event(true, 'q' as u32);

        assert_eq!(
            opener.written_events(),
            vec![
                (EV_SYN, SYN_REPORT, 0),
                (EV_KEY, code, 1),
                (EV_SYN, SYN_REPORT, 0),
                (EV_KEY, code, 0),
                (EV_SYN, SYN_REPORT, 0),
                (EV_SYN, SYN_REPORT, 0),
            ]
        );
    }

    #[test]
    fn test_key_event_accented_letter_wraps_stroke_in_alt() {
        let (device, opener) = make_device();
        device.start(800, 600).unwrap();
        opener.clear();

        // e with acute: alt + the base key, no shift.
        let stroke = vhid_core::keysym_to_stroke(233).unwrap();
        device.key_event(true, 233);

        let events = opener.written_events();
        assert_eq!(events.first(), Some(&(EV_KEY, KEY_LEFTALT, 1)));
        assert_eq!(events[events.len() - 2], (EV_KEY, KEY_LEFTALT, 0));
        assert!(events.contains(&(EV_KEY, stroke.scancode, 1)));
    }

    #[test]
    fn test_key_event_ignores_up_edge_unmapped_and_closed() {
        let (device, opener) = make_device();

        // Closed device: nothing happens.
        device.key_event(true, 'a' as u32);
        assert!(opener.written_events().is_empty());

        device.start(800, 600).unwrap();
        opener.clear();

        // Up edge: the release is synthesized on the down edge instead.
        device.key_event(false, 'a' as u32);
        // Unmapped keysym: dropped.
        device.key_event(true, 0x20ac);
        assert!(opener.written_events().is_empty());
    }

    #[test]
    fn test_key_event_continues_best_effort_after_a_failed_write() {
        let (device, opener) = make_device();
        device.start(320, 240).unwrap();
        let configured = opener.ops().len();
        // Let two more records through, then fail every write.
        opener.fail_after(configured + 2);

        device.key_event(true, 'A' as u32);

        // The first two records landed; the rest failed but the device stays
        // open and usable state-wise.
        assert_eq!(opener.written_events().len(), 2);
        assert!(device.is_open());
    }

    #[test]
    fn test_start_async_result_arrives_through_the_handle() {
        let (device, opener) = make_device();

        tokio_test::block_on(async {
            device.start_async(640, 480).await.unwrap().unwrap();
        });

        assert!(device.is_open());
        assert!(opener
            .ops()
            .contains(&ChannelOp::Setup(DeviceSetup::new(640, 480))));
    }

    #[test]
    fn test_start_async_surfaces_already_open() {
        let (device, _opener) = make_device();
        device.start(320, 240).unwrap();

        // spawn_blocking needs an ambient runtime, so the spawn happens
        // inside the block too.
        let result = tokio_test::block_on(async { device.start_async(320, 240).await });
        assert!(matches!(result, Ok(Err(DeviceError::AlreadyOpen))));
    }

    #[test]
    fn test_pointer_event_on_closed_device_is_a_silent_no_op() {
        let (device, opener) = make_device();
        device.pointer_event(ButtonMask::new(0b1), 10, 10);
        assert!(opener.ops().is_empty());
    }

    #[test]
    fn test_click_emits_press_then_release_without_marker() {
        let (device, opener) = make_device();
        device.start(100, 100).unwrap();
        opener.clear();

        device.click(KEY_BACK).unwrap();

        assert_eq!(
            opener.written_events(),
            vec![(EV_KEY, KEY_BACK, 1), (EV_KEY, KEY_BACK, 0)]
        );
    }

    #[test]
    fn test_primitives_no_op_when_closed() {
        let (device, opener) = make_device();
        device.move_relative(5, 5).unwrap();
        device.set_absolute(10, 10).unwrap();
        device.click(KEY_BACK).unwrap();
        assert!(opener.ops().is_empty());
    }

    #[test]
    fn test_move_relative_and_set_absolute_append_one_marker() {
        let (device, opener) = make_device();
        device.start(100, 100).unwrap();
        opener.clear();

        device.move_relative(3, -2).unwrap();
        device.set_absolute(42, 17).unwrap();

        assert_eq!(
            opener.written_events(),
            vec![
                (EV_REL, REL_X, 3),
                (EV_REL, REL_Y, -2),
                (EV_SYN, SYN_REPORT, 0),
                (EV_ABS, ABS_X, 42),
                (EV_ABS, ABS_Y, 17),
                (EV_SYN, SYN_REPORT, 0),
            ]
        );
    }
}
