//! Real `/dev/uinput` backend.
//!
//! # How uinput device creation works (for beginners)
//!
//! 1. Open `/dev/uinput` write-only and non-blocking.
//! 2. Issue one `UI_SET_*` ioctl per capability bit the device will expose.
//! 3. Write a `uinput_user_dev` record carrying the device name, identity,
//!    and absolute-axis ranges.
//! 4. Issue `UI_DEV_CREATE`; the kernel registers the device and the rest of
//!    the system sees a new input node.
//!
//! From then on, every `input_event` record written to the same descriptor is
//! delivered as if a physical device produced it.  `UI_DEV_DESTROY` plus
//! closing the descriptor removes the device again.
//!
//! Requires the `uinput` kernel module and write access to the node, which in
//! practice means root or a udev rule.

use std::ffi::CStr;
use std::io;
use std::mem;

use libc::{c_char, c_int, c_ulong, timeval};

use crate::application::virtual_device::{Capability, DeviceSetup, UinputChannel, UinputOpener};
use crate::events::{ABS_X, ABS_Y};

// _IOW('U', nr, int) request numbers from linux/uinput.h.
const UI_DEV_CREATE: c_ulong = 0x5501;
const UI_DEV_DESTROY: c_ulong = 0x5502;
const UI_SET_EVBIT: c_ulong = 0x4004_5564;
const UI_SET_KEYBIT: c_ulong = 0x4004_5565;
const UI_SET_RELBIT: c_ulong = 0x4004_5566;
const UI_SET_ABSBIT: c_ulong = 0x4004_5567;
const UI_SET_PROPBIT: c_ulong = 0x4004_556e;

const UINPUT_MAX_NAME_SIZE: usize = 80;
const ABS_CNT: usize = 0x40;

/// `struct input_id` from linux/input.h.
#[repr(C)]
struct InputId {
    bustype: u16,
    vendor: u16,
    product: u16,
    version: u16,
}

/// `struct uinput_user_dev` from linux/uinput.h.
#[repr(C)]
struct UinputUserDev {
    name: [c_char; UINPUT_MAX_NAME_SIZE],
    id: InputId,
    ff_effects_max: u32,
    absmax: [i32; ABS_CNT],
    absmin: [i32; ABS_CNT],
    absfuzz: [i32; ABS_CNT],
    absflat: [i32; ABS_CNT],
}

/// `struct input_event` from linux/input.h (64-bit layout).
#[repr(C)]
struct InputEvent {
    time: timeval,
    kind: u16,
    code: u16,
    value: i32,
}

const DEVICE_PATH: &CStr = unsafe { CStr::from_bytes_with_nul_unchecked(b"/dev/uinput\0") };

/// Opener backed by the system `/dev/uinput` node.
#[derive(Default)]
pub struct LinuxUinputOpener;

impl UinputOpener for LinuxUinputOpener {
    fn open(&self) -> io::Result<Box<dyn UinputChannel>> {
        // Non-blocking so event writes never stall the caller if the kernel
        // queue fills up.
        let fd = unsafe { libc::open(DEVICE_PATH.as_ptr(), libc::O_WRONLY | libc::O_NONBLOCK) };
        if fd < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(Box::new(LinuxUinputChannel { fd }))
    }
}

/// Channel wrapping an open uinput file descriptor.
pub struct LinuxUinputChannel {
    fd: c_int,
}

impl LinuxUinputChannel {
    fn ioctl_bit(&self, request: c_ulong, bit: u16) -> io::Result<()> {
        let rc = unsafe { libc::ioctl(self.fd, request, bit as c_int) };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    fn ioctl_plain(&self, request: c_ulong) -> io::Result<()> {
        let rc = unsafe { libc::ioctl(self.fd, request) };
        if rc < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    fn write_all(&self, bytes: &[u8]) -> io::Result<()> {
        let written = unsafe { libc::write(self.fd, bytes.as_ptr().cast(), bytes.len()) };
        if written < 0 {
            return Err(io::Error::last_os_error());
        }
        if written as usize != bytes.len() {
            // The kernel accepts these records whole or not at all; a short
            // write means the record was dropped.
            return Err(io::Error::new(
                io::ErrorKind::WriteZero,
                "short write to uinput device",
            ));
        }
        Ok(())
    }
}

impl UinputChannel for LinuxUinputChannel {
    fn set_capability(&mut self, capability: Capability) -> io::Result<()> {
        match capability {
            Capability::EventType(bit) => self.ioctl_bit(UI_SET_EVBIT, bit),
            Capability::Key(bit) => self.ioctl_bit(UI_SET_KEYBIT, bit),
            Capability::RelativeAxis(bit) => self.ioctl_bit(UI_SET_RELBIT, bit),
            Capability::AbsoluteAxis(bit) => self.ioctl_bit(UI_SET_ABSBIT, bit),
            Capability::Property(bit) => self.ioctl_bit(UI_SET_PROPBIT, bit),
        }
    }

    fn write_setup(&mut self, setup: &DeviceSetup) -> io::Result<()> {
        // All-zero is the valid "unset" value for every field of the record.
        let mut dev: UinputUserDev = unsafe { mem::zeroed() };
        for (dst, src) in dev
            .name
            .iter_mut()
            .zip(setup.name.bytes().take(UINPUT_MAX_NAME_SIZE - 1))
        {
            *dst = src as c_char;
        }
        dev.id = InputId {
            bustype: setup.bus_type,
            vendor: setup.vendor,
            product: setup.product,
            version: setup.version,
        };
        dev.absmin[ABS_X as usize] = 0;
        dev.absmax[ABS_X as usize] = setup.abs_x_max;
        dev.absmin[ABS_Y as usize] = 0;
        dev.absmax[ABS_Y as usize] = setup.abs_y_max;

        let bytes = unsafe {
            std::slice::from_raw_parts(
                (&dev as *const UinputUserDev).cast::<u8>(),
                mem::size_of::<UinputUserDev>(),
            )
        };
        self.write_all(bytes)
    }

    fn create(&mut self) -> io::Result<()> {
        self.ioctl_plain(UI_DEV_CREATE)
    }

    fn write_event(&mut self, event_type: u16, code: u16, value: i32) -> io::Result<()> {
        let mut event = InputEvent {
            time: timeval { tv_sec: 0, tv_usec: 0 },
            kind: event_type,
            code,
            value,
        };
        unsafe { libc::gettimeofday(&mut event.time, std::ptr::null_mut()) };

        let bytes = unsafe {
            std::slice::from_raw_parts(
                (&event as *const InputEvent).cast::<u8>(),
                mem::size_of::<InputEvent>(),
            )
        };
        self.write_all(bytes)
    }

    fn destroy(&mut self) {
        // Teardown has nowhere useful to report failure; the descriptor is
        // closed regardless.
        let _ = self.ioctl_plain(UI_DEV_DESTROY);
        unsafe { libc::close(self.fd) };
        self.fd = -1;
    }
}

impl Drop for LinuxUinputChannel {
    fn drop(&mut self) {
        if self.fd >= 0 {
            unsafe { libc::close(self.fd) };
            self.fd = -1;
        }
    }
}
