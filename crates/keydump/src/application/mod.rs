//! Application layer: use cases and the event dispatch loop.

pub mod dispatch;
pub mod dump_keys;
pub mod select_device;
pub mod session;
