//! Key name tables.
//!
//! Keys are identified by their USB HID Usage ID on the Keyboard/Keypad page
//! (0x07), which is exactly what a boot keyboard puts in its report slots.

pub mod usage_names;

pub use usage_names::{key_name, KEYBOARD_USAGE_NAMES, UNKNOWN_KEY_NAME};
