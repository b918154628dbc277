//! Runtime configuration.
//!
//! keydump takes no flags and reads no config file, so [`KeydumpConfig`] is
//! only ever built from [`Default`].  Keeping the settings in one plain struct
//! (rather than scattering constants through the backend) lets tests build a
//! config with a different target keyboard or shorter intervals.

use std::time::Duration;

use keydump_core::{DeviceIdentity, BOOT_REPORT_LEN, TRULY_ERGONOMIC};

/// All runtime settings for keydump.
///
/// # Example
///
/// ```rust
/// use keydump::domain::KeydumpConfig;
///
/// let cfg = KeydumpConfig::default();
/// assert_eq!(cfg.report_len, 8);
/// assert_eq!(cfg.target.vendor_id, 0x0e6a);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeydumpConfig {
    /// The keyboard interface to seize.
    pub target: DeviceIdentity,

    /// Size of the input report buffer registered for the seized device.
    pub report_len: usize,

    /// How often the backend re-enumerates HID devices to notice new arrivals.
    pub poll_interval: Duration,

    /// Upper bound on a single blocking report read.  Reader threads check for
    /// release between reads, so this also bounds how long a release takes.
    pub read_timeout: Duration,
}

impl Default for KeydumpConfig {
    /// | Field          | Default                         |
    /// |----------------|---------------------------------|
    /// | target         | TrulyErgonomic keyboard (0e6a:030c, 01/06) |
    /// | report_len     | 8 (boot keyboard)               |
    /// | poll_interval  | 1 second                        |
    /// | read_timeout   | 100 ms                          |
    fn default() -> Self {
        Self {
            target: TRULY_ERGONOMIC,
            report_len: BOOT_REPORT_LEN,
            poll_interval: Duration::from_secs(1),
            read_timeout: Duration::from_millis(100),
        }
    }
}
