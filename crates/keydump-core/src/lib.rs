//! # keydump-core
//!
//! Pure decoding and matching logic for keydump.  It has zero dependencies on
//! OS APIs or HID libraries, so everything here can be unit tested on any host.
//!
//! # Architecture overview (for beginners)
//!
//! keydump seizes one specific USB keyboard and prints the name of every key
//! it reports.  The work splits into three small pieces:
//!
//! - **`keymap`** – A static 256-entry table from USB HID Usage ID (Keyboard/
//!   Keypad page 0x07) to a human-readable name such as
//!   `"Keyboard a and A"`.
//!
//! - **`report`** – The 8-byte *boot keyboard* input report: one modifier
//!   byte, one reserved byte, and six key slots.  [`BootKeyboardReport`]
//!   validates the length and expands a report into [`KeyPress`]es.
//!
//! - **`domain`** – The [`DeviceIdentity`] tuple (vendor ID, product ID, usage
//!   page, usage) used to pick the keyboard out of every HID device on the host.

pub mod domain;
pub mod keymap;
pub mod report;

pub use domain::identity::{DeviceIdentity, DeviceProperties, TRULY_ERGONOMIC};
pub use keymap::usage_names::{key_name, UNKNOWN_KEY_NAME};
pub use report::boot_keyboard::{
    BootKeyboardReport, KeyPress, ModifierFlags, ReportError, BOOT_REPORT_LEN,
};
