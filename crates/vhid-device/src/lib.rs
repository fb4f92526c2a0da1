//! # vhid-device
//!
//! Kernel-facing half of the vhid virtual input injector: owns the uinput
//! device handle and turns the abstract key/pointer events produced by a
//! remote-display protocol layer into the kernel's device event stream.
//!
//! # What does this crate do? (for beginners)
//!
//! Linux exposes `/dev/uinput`, a kernel interface through which a userspace
//! process can create a *virtual* input device.  Once created, events written
//! to it are indistinguishable from a physical keyboard or touchscreen: the
//! window system, applications, and the rest of the input stack all see a
//! real device.
//!
//! The flow for one remote keystroke:
//!
//! 1. The protocol layer decodes a client message into a keysym and calls
//!    [`VirtualInputDevice::key_event`].
//! 2. `vhid-core` translates the keysym into a scancode plus Shift/Alt flags.
//! 3. The device expands that into a sequence of raw event records —
//!    modifier presses, the key press/release pair, and the synchronization
//!    markers that tell the kernel each batch is complete — and writes them
//!    to the device file.
//!
//! Pointer updates follow the same shape through the button latch tracker.
//!
//! # Layering
//!
//! - **`application`** – [`VirtualInputDevice`] lifecycle and event
//!   expansion, plus the [`UinputChannel`]/[`UinputOpener`] traits that form
//!   the seam to the kernel.
//! - **`infrastructure`** – the real `/dev/uinput` backend (Linux only) and a
//!   recording mock backend for tests.
//! - **`events`** – the Linux input event-type and code constants shared by
//!   both layers.

pub mod application;
pub mod events;
pub mod infrastructure;

pub use application::virtual_device::{
    Capability, DeviceError, DeviceSetup, UinputChannel, UinputOpener, VirtualInputDevice,
    CAPABILITIES, DEVICE_NAME,
};

/// Builds a [`VirtualInputDevice`] backed by the system `/dev/uinput` node.
///
/// The device is returned closed; call [`VirtualInputDevice::start`] (or
/// `start_async`) to create the kernel device.
#[cfg(target_os = "linux")]
pub fn system_device() -> VirtualInputDevice {
    use std::sync::Arc;

    VirtualInputDevice::new(Arc::new(
        infrastructure::uinput::linux::LinuxUinputOpener::default(),
    ))
}
