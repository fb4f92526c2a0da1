//! Backends implementing the `UinputChannel`/`UinputOpener` seam.
//!
//! `linux` talks to the real `/dev/uinput` node; `mock` records every call
//! for assertion in tests and is available on all platforms.

#[cfg(target_os = "linux")]
pub mod linux;
pub mod mock;
