//! HID input report decoding.

pub mod boot_keyboard;

pub use boot_keyboard::{BootKeyboardReport, KeyPress, ModifierFlags, ReportError, BOOT_REPORT_LEN};
