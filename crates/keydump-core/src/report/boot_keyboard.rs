//! The 8-byte boot-keyboard input report.
//!
//! ```text
//! byte 0     modifier bitmask (see ModifierFlags)
//! byte 1     reserved
//! bytes 2–7  up to six pressed non-modifier keycodes, 0x00 = empty slot
//! ```
//!
//! Decoding is stateless: every report is expanded on its own, so a key held
//! across several reports is reported once per report.

use std::fmt;

use thiserror::Error;

use crate::keymap::usage_names::key_name;

/// Length in bytes of a boot-keyboard input report.
pub const BOOT_REPORT_LEN: usize = 8;

/// HID usage ID of the modifier at bit 0 (Left Control).
const FIRST_MODIFIER_USAGE: u8 = 0xE0;

/// Index of the first key slot within the report.
const FIRST_KEY_SLOT: usize = 2;

/// Error returned when a buffer is not a valid boot-keyboard report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("Bad report length ({len})")]
    BadLength { len: usize },
}

/// Modifier byte of a boot-keyboard report.
///
/// Bit `n` corresponds to the modifier with HID usage `0xE0 + n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierFlags(pub u8);

impl ModifierFlags {
    pub const LEFT_CTRL: u8 = 1 << 0;
    pub const LEFT_SHIFT: u8 = 1 << 1;
    pub const LEFT_ALT: u8 = 1 << 2;
    pub const LEFT_GUI: u8 = 1 << 3;
    pub const RIGHT_CTRL: u8 = 1 << 4;
    pub const RIGHT_SHIFT: u8 = 1 << 5;
    pub const RIGHT_ALT: u8 = 1 << 6;
    pub const RIGHT_GUI: u8 = 1 << 7;

    /// Returns the HID usage IDs of all set modifiers, least-significant bit first.
    pub fn usages(self) -> impl Iterator<Item = u8> {
        (0..8u8)
            .filter(move |&bit| self.0 & (1 << bit) != 0)
            .map(|bit| FIRST_MODIFIER_USAGE + bit)
    }

    /// Returns `true` if no modifier is held.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A single pressed key and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// HID usage ID on the Keyboard/Keypad page.
    pub code: u8,
    /// Name from the usage table, or `"Unknown"`.
    pub name: &'static str,
}

impl KeyPress {
    pub fn new(code: u8) -> Self {
        Self {
            code,
            name: key_name(code),
        }
    }
}

impl fmt::Display for KeyPress {
    /// Formats as `Key 0x04 Keyboard a and A`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key 0x{:02x} {}", self.code, self.name)
    }
}

/// A length-validated boot-keyboard input report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootKeyboardReport {
    bytes: [u8; BOOT_REPORT_LEN],
}

impl BootKeyboardReport {
    /// Validates `data` as a boot-keyboard report.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::BadLength`] unless `data` is exactly
    /// [`BOOT_REPORT_LEN`] bytes long.
    pub fn parse(data: &[u8]) -> Result<Self, ReportError> {
        let bytes: [u8; BOOT_REPORT_LEN] = data
            .try_into()
            .map_err(|_| ReportError::BadLength { len: data.len() })?;
        Ok(Self { bytes })
    }

    /// The modifier byte.
    pub fn modifiers(&self) -> ModifierFlags {
        ModifierFlags(self.bytes[0])
    }

    /// The six key slots, including empty (0x00) ones.
    pub fn key_slots(&self) -> &[u8] {
        &self.bytes[FIRST_KEY_SLOT..]
    }

    /// Every key this report says is down: modifiers in bit order, then the
    /// non-empty slots in slot order.
    pub fn pressed_keys(&self) -> impl Iterator<Item = KeyPress> + '_ {
        let slots = self.key_slots().iter().copied().filter(|&code| code != 0);
        self.modifiers().usages().chain(slots).map(KeyPress::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(report: &BootKeyboardReport) -> Vec<u8> {
        report.pressed_keys().map(|k| k.code).collect()
    }

    #[test]
    fn test_parse_rejects_short_report() {
        // Arrange
        let data = [0u8; 7];

        // Act
        let result = BootKeyboardReport::parse(&data);

        // Assert
        assert_eq!(result, Err(ReportError::BadLength { len: 7 }));
    }

    #[test]
    fn test_parse_rejects_long_and_empty_reports() {
        assert_eq!(
            BootKeyboardReport::parse(&[0u8; 9]),
            Err(ReportError::BadLength { len: 9 })
        );
        assert_eq!(
            BootKeyboardReport::parse(&[]),
            Err(ReportError::BadLength { len: 0 })
        );
    }

    #[test]
    fn test_bad_length_error_message() {
        let err = ReportError::BadLength { len: 3 };
        assert_eq!(err.to_string(), "Bad report length (3)");
    }

    #[test]
    fn test_left_ctrl_only_yields_single_modifier_key() {
        // Arrange
        let report = BootKeyboardReport::parse(&[0x01, 0, 0, 0, 0, 0, 0, 0]).unwrap();

        // Act
        let keys: Vec<KeyPress> = report.pressed_keys().collect();

        // Assert
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].code, 0xE0);
        assert_eq!(keys[0].name, "Keyboard LeftControl");
    }

    #[test]
    fn test_single_slot_key_yields_its_name() {
        let report = BootKeyboardReport::parse(&[0, 0, 0x04, 0, 0, 0, 0, 0]).unwrap();

        let keys: Vec<KeyPress> = report.pressed_keys().collect();

        assert_eq!(keys, vec![KeyPress::new(0x04)]);
        assert_eq!(keys[0].name, "Keyboard a and A");
    }

    #[test]
    fn test_all_modifiers_decode_least_significant_bit_first() {
        let report = BootKeyboardReport::parse(&[0xFF, 0, 0, 0, 0, 0, 0, 0]).unwrap();

        assert_eq!(
            codes(&report),
            vec![0xE0, 0xE1, 0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7]
        );
    }

    #[test]
    fn test_modifiers_precede_slots_and_empty_slots_are_skipped() {
        // Right Shift + 'b', empty, 'c', empty, empty, '1'
        let report =
            BootKeyboardReport::parse(&[0x20, 0x00, 0x05, 0x00, 0x06, 0x00, 0x00, 0x1E]).unwrap();

        assert_eq!(codes(&report), vec![0xE5, 0x05, 0x06, 0x1E]);
    }

    #[test]
    fn test_reserved_byte_is_ignored() {
        let report = BootKeyboardReport::parse(&[0, 0xAB, 0, 0, 0, 0, 0, 0]).unwrap();

        assert_eq!(report.pressed_keys().count(), 0);
    }

    #[test]
    fn test_duplicate_slot_codes_are_not_deduplicated() {
        let report = BootKeyboardReport::parse(&[0, 0, 0x04, 0x04, 0, 0, 0, 0]).unwrap();

        assert_eq!(codes(&report), vec![0x04, 0x04]);
    }

    #[test]
    fn test_unassigned_slot_code_is_named_unknown() {
        let report = BootKeyboardReport::parse(&[0, 0, 0xF0, 0, 0, 0, 0, 0]).unwrap();

        let keys: Vec<KeyPress> = report.pressed_keys().collect();

        assert_eq!(keys, vec![KeyPress { code: 0xF0, name: "Unknown" }]);
    }

    #[test]
    fn test_key_press_display_uses_lowercase_two_digit_hex() {
        assert_eq!(KeyPress::new(0x04).to_string(), "Key 0x04 Keyboard a and A");
        assert_eq!(
            KeyPress::new(0xE3).to_string(),
            "Key 0xe3 Keyboard Left GUI"
        );
        assert_eq!(KeyPress::new(0xFF).to_string(), "Key 0xff Unknown");
    }

    #[test]
    fn test_modifier_flag_constants_follow_usage_order() {
        let flags = [
            (ModifierFlags::LEFT_CTRL, 0xE0),
            (ModifierFlags::LEFT_SHIFT, 0xE1),
            (ModifierFlags::LEFT_ALT, 0xE2),
            (ModifierFlags::LEFT_GUI, 0xE3),
            (ModifierFlags::RIGHT_CTRL, 0xE4),
            (ModifierFlags::RIGHT_SHIFT, 0xE5),
            (ModifierFlags::RIGHT_ALT, 0xE6),
            (ModifierFlags::RIGHT_GUI, 0xE7),
        ];
        for (bit, usage) in flags {
            let usages: Vec<u8> = ModifierFlags(bit).usages().collect();
            assert_eq!(usages, vec![usage]);
        }
        assert!(ModifierFlags::default().is_empty());
    }
}
