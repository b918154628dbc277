//! Human-readable names for USB HID Usage IDs on the Keyboard/Keypad page (0x07).
//!
//! Reference: USB HID Usage Tables 1.12, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # Table layout
//!
//! [`KEYBOARD_USAGE_NAMES`] has exactly 256 slots, one for every value a
//! boot-keyboard report byte can take.  Slots the usage tables leave
//! unassigned (0x00, 0xA5–0xAF, 0xDE–0xDF, 0xE8–0xFF) hold `None` and are
//! printed as [`UNKNOWN_KEY_NAME`].
//!
//! | Range       | Contents                              |
//! |-------------|---------------------------------------|
//! | 0x01–0x03   | Error indications (rollover, POST)    |
//! | 0x04–0x1D   | Letters a–z                           |
//! | 0x1E–0x27   | Digits 1–0                            |
//! | 0x28–0x65   | Main block, F1–F12, navigation, keypad|
//! | 0x66–0xA4   | Extended keys (F13–F24, edit, i18n)   |
//! | 0xB0–0xDD   | Extended keypad                       |
//! | 0xE0–0xE7   | Modifiers                             |

/// Name returned for any keycode without an assigned usage.
pub const UNKNOWN_KEY_NAME: &str = "Unknown";

/// Process-lifetime name table indexed by HID Usage ID.
pub static KEYBOARD_USAGE_NAMES: [Option<&str>; 256] = build_usage_names();

/// Returns the display name for a Keyboard/Keypad page usage ID.
///
/// Returns [`UNKNOWN_KEY_NAME`] when `code` lies outside the table or names an
/// unassigned usage.
///
/// # Examples
///
/// ```
/// use keydump_core::key_name;
///
/// assert_eq!(key_name(0x04), "Keyboard a and A");
/// assert_eq!(key_name(0xE0), "Keyboard LeftControl");
/// assert_eq!(key_name(0xFF), "Unknown");
/// ```
pub fn key_name(code: u8) -> &'static str {
    KEYBOARD_USAGE_NAMES
        .get(usize::from(code))
        .copied()
        .flatten()
        .unwrap_or(UNKNOWN_KEY_NAME)
}

const fn build_usage_names() -> [Option<&'static str>; 256] {
    let mut t: [Option<&'static str>; 256] = [None; 256];

    // Error indications
    t[0x01] = Some("Keyboard ErrorRollOver");
    t[0x02] = Some("Keyboard POSTFail");
    t[0x03] = Some("Keyboard ErrorUndefined");

    // Letters
    t[0x04] = Some("Keyboard a and A");
    t[0x05] = Some("Keyboard b and B");
    t[0x06] = Some("Keyboard c and C");
    t[0x07] = Some("Keyboard d and D");
    t[0x08] = Some("Keyboard e and E");
    t[0x09] = Some("Keyboard f and F");
    t[0x0A] = Some("Keyboard g and G");
    t[0x0B] = Some("Keyboard h and H");
    t[0x0C] = Some("Keyboard i and I");
    t[0x0D] = Some("Keyboard j and J");
    t[0x0E] = Some("Keyboard k and K");
    t[0x0F] = Some("Keyboard l and L");
    t[0x10] = Some("Keyboard m and M");
    t[0x11] = Some("Keyboard n and N");
    t[0x12] = Some("Keyboard o and O");
    t[0x13] = Some("Keyboard p and P");
    t[0x14] = Some("Keyboard q and Q");
    t[0x15] = Some("Keyboard r and R");
    t[0x16] = Some("Keyboard s and S");
    t[0x17] = Some("Keyboard t and T");
    t[0x18] = Some("Keyboard u and U");
    t[0x19] = Some("Keyboard v and V");
    t[0x1A] = Some("Keyboard w and W");
    t[0x1B] = Some("Keyboard x and X");
    t[0x1C] = Some("Keyboard y and Y");
    t[0x1D] = Some("Keyboard z and Z");

    // Digits
    t[0x1E] = Some("Keyboard 1 and !");
    t[0x1F] = Some("Keyboard 2 and @");
    t[0x20] = Some("Keyboard 3 and #");
    t[0x21] = Some("Keyboard 4 and $");
    t[0x22] = Some("Keyboard 5 and %");
    t[0x23] = Some("Keyboard 6 and ^");
    t[0x24] = Some("Keyboard 7 and &");
    t[0x25] = Some("Keyboard 8 and *");
    t[0x26] = Some("Keyboard 9 and (");
    t[0x27] = Some("Keyboard 0 and )");

    // Main block
    t[0x28] = Some("Keyboard Return (ENTER)");
    t[0x29] = Some("Keyboard ESCAPE");
    t[0x2A] = Some("Keyboard DELETE (Backspace)");
    t[0x2B] = Some("Keyboard Tab");
    t[0x2C] = Some("Keyboard Spacebar");
    t[0x2D] = Some("Keyboard - and (underscore)");
    t[0x2E] = Some("Keyboard = and +");
    t[0x2F] = Some("Keyboard [ and {");
    t[0x30] = Some("Keyboard ] and }");
    t[0x31] = Some("Keyboard \\ and |");
    t[0x32] = Some("Keyboard Non-US # and ~");
    t[0x33] = Some("Keyboard ; and :");
    t[0x34] = Some("Keyboard ' and \"");
    t[0x35] = Some("Keyboard Grave Accent and Tilde");
    t[0x36] = Some("Keyboard , and <");
    t[0x37] = Some("Keyboard . and >");
    t[0x38] = Some("Keyboard / and ?");
    t[0x39] = Some("Keyboard Caps Lock");

    // Function keys
    t[0x3A] = Some("Keyboard F1");
    t[0x3B] = Some("Keyboard F2");
    t[0x3C] = Some("Keyboard F3");
    t[0x3D] = Some("Keyboard F4");
    t[0x3E] = Some("Keyboard F5");
    t[0x3F] = Some("Keyboard F6");
    t[0x40] = Some("Keyboard F7");
    t[0x41] = Some("Keyboard F8");
    t[0x42] = Some("Keyboard F9");
    t[0x43] = Some("Keyboard F10");
    t[0x44] = Some("Keyboard F11");
    t[0x45] = Some("Keyboard F12");

    // Navigation cluster
    t[0x46] = Some("Keyboard PrintScreen");
    t[0x47] = Some("Keyboard Scroll Lock");
    t[0x48] = Some("Keyboard Pause");
    t[0x49] = Some("Keyboard Insert");
    t[0x4A] = Some("Keyboard Home");
    t[0x4B] = Some("Keyboard PageUp");
    t[0x4C] = Some("Keyboard Delete Forward");
    t[0x4D] = Some("Keyboard End");
    t[0x4E] = Some("Keyboard PageDown");
    t[0x4F] = Some("Keyboard RightArrow");
    t[0x50] = Some("Keyboard LeftArrow");
    t[0x51] = Some("Keyboard DownArrow");
    t[0x52] = Some("Keyboard UpArrow");

    // Keypad
    t[0x53] = Some("Keypad Num Lock and Clear");
    t[0x54] = Some("Keypad /");
    t[0x55] = Some("Keypad *");
    t[0x56] = Some("Keypad -");
    t[0x57] = Some("Keypad +");
    t[0x58] = Some("Keypad ENTER");
    t[0x59] = Some("Keypad 1 and End");
    t[0x5A] = Some("Keypad 2 and Down Arrow");
    t[0x5B] = Some("Keypad 3 and PageDn");
    t[0x5C] = Some("Keypad 4 and Left Arrow");
    t[0x5D] = Some("Keypad 5");
    t[0x5E] = Some("Keypad 6 and Right Arrow");
    t[0x5F] = Some("Keypad 7 and Home");
    t[0x60] = Some("Keypad 8 and Up Arrow");
    t[0x61] = Some("Keypad 9 and PageUp");
    t[0x62] = Some("Keypad 0 and Insert");
    t[0x63] = Some("Keypad . and Delete");
    t[0x64] = Some("Keyboard Non-US \\ and |");
    t[0x65] = Some("Keyboard Application");
    t[0x66] = Some("Keyboard Power");
    t[0x67] = Some("Keypad =");

    // F13–F24
    t[0x68] = Some("Keyboard F13");
    t[0x69] = Some("Keyboard F14");
    t[0x6A] = Some("Keyboard F15");
    t[0x6B] = Some("Keyboard F16");
    t[0x6C] = Some("Keyboard F17");
    t[0x6D] = Some("Keyboard F18");
    t[0x6E] = Some("Keyboard F19");
    t[0x6F] = Some("Keyboard F20");
    t[0x70] = Some("Keyboard F21");
    t[0x71] = Some("Keyboard F22");
    t[0x72] = Some("Keyboard F23");
    t[0x73] = Some("Keyboard F24");

    // Editing and system keys
    t[0x74] = Some("Keyboard Execute");
    t[0x75] = Some("Keyboard Help");
    t[0x76] = Some("Keyboard Menu");
    t[0x77] = Some("Keyboard Select");
    t[0x78] = Some("Keyboard Stop");
    t[0x79] = Some("Keyboard Again");
    t[0x7A] = Some("Keyboard Undo");
    t[0x7B] = Some("Keyboard Cut");
    t[0x7C] = Some("Keyboard Copy");
    t[0x7D] = Some("Keyboard Paste");
    t[0x7E] = Some("Keyboard Find");
    t[0x7F] = Some("Keyboard Mute");
    t[0x80] = Some("Keyboard Volume Up");
    t[0x81] = Some("Keyboard Volume Down");
    t[0x82] = Some("Keyboard Locking Caps Lock");
    t[0x83] = Some("Keyboard Locking Num Lock");
    t[0x84] = Some("Keyboard Locking Scroll Lock");
    t[0x85] = Some("Keypad Comma");
    t[0x86] = Some("Keypad Equal Sign");

    // International and language keys
    t[0x87] = Some("Keyboard International1");
    t[0x88] = Some("Keyboard International2");
    t[0x89] = Some("Keyboard International3");
    t[0x8A] = Some("Keyboard International4");
    t[0x8B] = Some("Keyboard International5");
    t[0x8C] = Some("Keyboard International6");
    t[0x8D] = Some("Keyboard International7");
    t[0x8E] = Some("Keyboard International8");
    t[0x8F] = Some("Keyboard International9");
    t[0x90] = Some("Keyboard LANG1");
    t[0x91] = Some("Keyboard LANG2");
    t[0x92] = Some("Keyboard LANG3");
    t[0x93] = Some("Keyboard LANG4");
    t[0x94] = Some("Keyboard LANG5");
    t[0x95] = Some("Keyboard LANG6");
    t[0x96] = Some("Keyboard LANG7");
    t[0x97] = Some("Keyboard LANG8");
    t[0x98] = Some("Keyboard LANG9");
    t[0x99] = Some("Keyboard Alternate Erase");
    t[0x9A] = Some("Keyboard SysReq/Attention");
    t[0x9B] = Some("Keyboard Cancel");
    t[0x9C] = Some("Keyboard Clear");
    t[0x9D] = Some("Keyboard Prior");
    t[0x9E] = Some("Keyboard Return");
    t[0x9F] = Some("Keyboard Separator");
    t[0xA0] = Some("Keyboard Out");
    t[0xA1] = Some("Keyboard Oper");
    t[0xA2] = Some("Keyboard Clear/Again");
    t[0xA3] = Some("Keyboard CrSel/Props");
    t[0xA4] = Some("Keyboard ExSel");

    // Extended keypad
    t[0xB0] = Some("Keypad 00");
    t[0xB1] = Some("Keypad 000");
    t[0xB2] = Some("Thousands Separator");
    t[0xB3] = Some("Decimal Separator");
    t[0xB4] = Some("Currency Unit");
    t[0xB5] = Some("Currency Sub-unit");
    t[0xB6] = Some("Keypad (");
    t[0xB7] = Some("Keypad )");
    t[0xB8] = Some("Keypad {");
    t[0xB9] = Some("Keypad }");
    t[0xBA] = Some("Keypad Tab");
    t[0xBB] = Some("Keypad Backspace");
    t[0xBC] = Some("Keypad A");
    t[0xBD] = Some("Keypad B");
    t[0xBE] = Some("Keypad C");
    t[0xBF] = Some("Keypad D");
    t[0xC0] = Some("Keypad E");
    t[0xC1] = Some("Keypad F");
    t[0xC2] = Some("Keypad XOR");
    t[0xC3] = Some("Keypad ^");
    t[0xC4] = Some("Keypad %");
    t[0xC5] = Some("Keypad <");
    t[0xC6] = Some("Keypad >");
    t[0xC7] = Some("Keypad &");
    t[0xC8] = Some("Keypad &&");
    t[0xC9] = Some("Keypad |");
    t[0xCA] = Some("Keypad ||");
    t[0xCB] = Some("Keypad :");
    t[0xCC] = Some("Keypad #");
    t[0xCD] = Some("Keypad Space");
    t[0xCE] = Some("Keypad @");
    t[0xCF] = Some("Keypad !");
    t[0xD0] = Some("Keypad Memory Store");
    t[0xD1] = Some("Keypad Memory Recall");
    t[0xD2] = Some("Keypad Memory Clear");
    t[0xD3] = Some("Keypad Memory Add");
    t[0xD4] = Some("Keypad Memory Subtract");
    t[0xD5] = Some("Keypad Memory Multiply");
    t[0xD6] = Some("Keypad Memory Divide");
    t[0xD7] = Some("Keypad +/-");
    t[0xD8] = Some("Keypad Clear");
    t[0xD9] = Some("Keypad Clear Entry");
    t[0xDA] = Some("Keypad Binary");
    t[0xDB] = Some("Keypad Octal");
    t[0xDC] = Some("Keypad Decimal");
    t[0xDD] = Some("Keypad Hexadecimal");

    // Modifiers, in report bit order
    t[0xE0] = Some("Keyboard LeftControl");
    t[0xE1] = Some("Keyboard LeftShift");
    t[0xE2] = Some("Keyboard LeftAlt");
    t[0xE3] = Some("Keyboard Left GUI");
    t[0xE4] = Some("Keyboard RightControl");
    t[0xE5] = Some("Keyboard RightShift");
    t[0xE6] = Some("Keyboard RightAlt");
    t[0xE7] = Some("Keyboard Right GUI");

    t
}
