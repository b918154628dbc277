//! Infrastructure layer: adapters over the host HID subsystem.

pub mod hid;
