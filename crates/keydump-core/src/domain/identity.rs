//! Identity tuple used to pick one keyboard out of every attached HID device.
//!
//! # How matching works (for beginners)
//!
//! Every HID device advertises a handful of integer properties.  Four of them
//! are enough to recognise a particular keyboard:
//!
//! | Property    | Meaning                                   | TrulyErgonomic |
//! |-------------|-------------------------------------------|----------------|
//! | vendor ID   | USB-IF assigned manufacturer number       | `0x0e6a`       |
//! | product ID  | Manufacturer assigned model number        | `0x030c`       |
//! | usage page  | HID category (0x01 = Generic Desktop)     | `0x0001`       |
//! | usage       | Function within the page (0x06 = Keyboard)| `0x0006`       |
//!
//! The usage pair matters because one physical keyboard usually exposes
//! several HID interfaces (keyboard, consumer control, vendor config).  Only
//! the Generic Desktop / Keyboard interface sends boot-keyboard reports.
//!
//! Properties the platform cannot read, or reads as a non-number, become 0.
//! No real device has vendor ID 0, so such a device never matches.

use std::fmt;

use tracing::trace;

/// HID usage page for Generic Desktop controls.
pub const USAGE_PAGE_GENERIC_DESKTOP: u32 = 0x01;

/// HID usage for a keyboard on the Generic Desktop page.
pub const USAGE_KEYBOARD: u32 = 0x06;

/// The TrulyErgonomic keyboard's keyboard interface.
pub const TRULY_ERGONOMIC: DeviceIdentity = DeviceIdentity {
    vendor_id: 0x0e6a,
    product_id: 0x030c,
    usage_page: USAGE_PAGE_GENERIC_DESKTOP,
    usage: USAGE_KEYBOARD,
};

/// Raw identification properties as read from the HID subsystem.
///
/// Each field is `None` when the property is missing or not numeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeviceProperties {
    pub vendor_id: Option<u32>,
    pub product_id: Option<u32>,
    pub usage_page: Option<u32>,
    pub usage: Option<u32>,
}

/// The `(vendor, product, usage page, usage)` tuple that identifies a device
/// interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DeviceIdentity {
    pub vendor_id: u32,
    pub product_id: u32,
    pub usage_page: u32,
    pub usage: u32,
}

impl DeviceIdentity {
    /// Builds an identity, substituting 0 for every unreadable property.
    pub fn from_properties(props: &DeviceProperties) -> Self {
        Self {
            vendor_id: props.vendor_id.unwrap_or(0),
            product_id: props.product_id.unwrap_or(0),
            usage_page: props.usage_page.unwrap_or(0),
            usage: props.usage.unwrap_or(0),
        }
    }

    /// Returns `true` only when all four fields are equal.
    pub fn matches(&self, candidate: &DeviceIdentity) -> bool {
        let matched = self == candidate;
        trace!(target_identity = %self, candidate = %candidate, matched, "identity check");
        matched
    }
}

impl fmt::Display for DeviceIdentity {
    /// Formats as `VID.PID : Usage: 0e6a.030c : 00001.0006`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VID.PID : Usage: {:04x}.{:04x} : {:05x}.{:04x}",
            self.vendor_id, self.product_id, self.usage_page, self.usage
        )
    }
}
