//! Recording mock backend for tests.
//!
//! # Why a mock backend? (for beginners)
//!
//! The real backend needs root and a Linux kernel with uinput; neither is
//! available in CI, and even locally a test that creates system-visible input
//! devices would inject keystrokes into the developer's session.  The mock
//! records every call instead, so tests assert on the *exact* sequence of
//! capability declarations and event records a scenario produces.
//!
//! Failure injection is supported two ways:
//!
//! - `set_fail_open(true)` makes the next `open()` fail, simulating a missing
//!   or permission-restricted device node.
//! - `fail_after(n)` lets `n` channel operations succeed and fails every one
//!   after that, simulating a device that dies mid-sequence.
//!
//! All recorded state lives behind plain mutexes shared between the opener
//! and the channels it hands out, so a test keeps its `Arc<MockUinputOpener>`
//! and inspects the log after exercising the device.

use std::io;
use std::sync::{Arc, Mutex};

use crate::application::virtual_device::{Capability, DeviceSetup, UinputChannel, UinputOpener};
use crate::events::{EV_SYN, SYN_REPORT};

/// One recorded channel operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelOp {
    /// A capability declaration.
    Capability(Capability),
    /// The identity/bounds record.
    Setup(DeviceSetup),
    /// Device finalization.
    Create,
    /// One event record.
    Event { event_type: u16, code: u16, value: i32 },
    /// Device teardown.
    Destroy,
}

/// Opener that hands out recording channels sharing one operation log.
#[derive(Default)]
pub struct MockUinputOpener {
    /// Every operation performed on every channel this opener produced.
    pub log: Arc<Mutex<Vec<ChannelOp>>>,
    fail_open: Mutex<bool>,
    fail_after_ops: Arc<Mutex<Option<usize>>>,
}

impl MockUinputOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the full operation log.
    pub fn ops(&self) -> Vec<ChannelOp> {
        self.log.lock().unwrap().clone()
    }

    /// The event records written so far, as `(type, code, value)` triples,
    /// with non-event operations filtered out.
    pub fn written_events(&self) -> Vec<(u16, u16, i32)> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|op| match op {
                ChannelOp::Event { event_type, code, value } => {
                    Some((*event_type, *code, *value))
                }
                _ => None,
            })
            .collect()
    }

    /// Count of synchronization markers written so far.
    pub fn syn_count(&self) -> usize {
        self.written_events()
            .iter()
            .filter(|(t, c, _)| *t == EV_SYN && *c == SYN_REPORT)
            .count()
    }

    /// Empties the operation log, typically right after a successful start so
    /// assertions see only the events of the scenario under test.
    pub fn clear(&self) {
        self.log.lock().unwrap().clear();
    }

    /// Makes subsequent `open()` calls fail.
    pub fn set_fail_open(&self, fail: bool) {
        *self.fail_open.lock().unwrap() = fail;
    }

    /// Lets the first `ops` channel operations succeed, then fails every
    /// later one.  The limit is shared live with already-open channels, so a
    /// test can count the operations a successful start performed and fail
    /// the channel partway through the next sequence.
    pub fn fail_after(&self, ops: usize) {
        *self.fail_after_ops.lock().unwrap() = Some(ops);
    }

    /// Removes all injected failures.
    pub fn clear_failures(&self) {
        *self.fail_open.lock().unwrap() = false;
        *self.fail_after_ops.lock().unwrap() = None;
    }
}

impl UinputOpener for MockUinputOpener {
    fn open(&self) -> io::Result<Box<dyn UinputChannel>> {
        if *self.fail_open.lock().unwrap() {
            return Err(io::Error::new(io::ErrorKind::NotFound, "mock open failure"));
        }
        Ok(Box::new(MockUinputChannel {
            log: Arc::clone(&self.log),
            fail_after_ops: Arc::clone(&self.fail_after_ops),
            ops_performed: 0,
        }))
    }
}

/// Channel that appends every operation to the shared log.
pub struct MockUinputChannel {
    log: Arc<Mutex<Vec<ChannelOp>>>,
    fail_after_ops: Arc<Mutex<Option<usize>>>,
    ops_performed: usize,
}

impl MockUinputChannel {
    fn record(&mut self, op: ChannelOp) -> io::Result<()> {
        if let Some(limit) = *self.fail_after_ops.lock().unwrap() {
            if self.ops_performed >= limit {
                return Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "mock channel failure",
                ));
            }
        }
        self.ops_performed += 1;
        self.log.lock().unwrap().push(op);
        Ok(())
    }
}

impl UinputChannel for MockUinputChannel {
    fn set_capability(&mut self, capability: Capability) -> io::Result<()> {
        self.record(ChannelOp::Capability(capability))
    }

    fn write_setup(&mut self, setup: &DeviceSetup) -> io::Result<()> {
        self.record(ChannelOp::Setup(setup.clone()))
    }

    fn create(&mut self) -> io::Result<()> {
        self.record(ChannelOp::Create)
    }

    fn write_event(&mut self, event_type: u16, code: u16, value: i32) -> io::Result<()> {
        self.record(ChannelOp::Event { event_type, code, value })
    }

    fn destroy(&mut self) {
        // Teardown is always recorded, even on a failing channel.
        self.log.lock().unwrap().push(ChannelOp::Destroy);
    }
}
