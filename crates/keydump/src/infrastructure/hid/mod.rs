//! HID subsystem access.
//!
//! The host HID subsystem is treated as an opaque service offering four
//! operations: device enumeration (delivered as attach events), property
//! query (carried inside each attach event), exclusive open, and input-report
//! subscription.  [`HidSubsystem`] captures exactly those operations so the
//! application layer never touches a platform API.
//!
//! # Event delivery
//!
//! Everything the subsystem reports arrives as a [`HidEvent`] on the single
//! channel returned by [`HidSubsystem::open_manager`].  Backends may use
//! helper threads to produce events, but handlers only ever run on the one
//! task that drains the channel, one event at a time.
//!
//! # Testability
//!
//! [`mock::MockHidSubsystem`] lets tests inject attach and report events and
//! force open failures without any hardware.
//!
//! # Platform selection
//!
//! [`platform_subsystem`] picks the backend at compile time: `hidapi` on
//! macOS, where IOKit gives real seize semantics, and
//! [`unsupported::UnsupportedSubsystem`] everywhere else, whose manager never
//! opens.

use std::fmt;
use std::sync::Arc;

use keydump_core::DeviceProperties;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::domain::KeydumpConfig;

pub mod hotplug;
pub mod mock;

#[cfg(target_os = "macos")]
pub mod hidapi_backend;

#[cfg(not(target_os = "macos"))]
pub mod unsupported;

/// Backend-assigned handle for one HID device interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeviceId(pub u64);

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hid#{}", self.0)
    }
}

/// A device that has just appeared, with whatever properties could be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceCandidate {
    pub id: DeviceId,
    pub properties: DeviceProperties,
}

/// An event produced by the HID subsystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HidEvent {
    /// A device was found (at startup or on hot-plug).
    Attached(DeviceCandidate),
    /// A subscribed device delivered an input report.
    Report {
        device: DeviceId,
        /// The bytes actually received; may be shorter than the buffer.
        data: Vec<u8>,
    },
}

/// Error type for HID subsystem operations.
#[derive(Debug, thiserror::Error)]
pub enum SubsystemError {
    #[error("failed to open HID manager: {0}")]
    ManagerOpen(String),
    #[error("unknown device {0}")]
    UnknownDevice(DeviceId),
    #[error("failed to open {device} exclusively: {reason}")]
    OpenFailed { device: DeviceId, reason: String },
    #[error("failed to subscribe to reports from {device}: {reason}")]
    Subscribe { device: DeviceId, reason: String },
    #[error("HID backend error: {0}")]
    Backend(String),
}

/// Trait abstracting the host HID subsystem.
///
/// The production implementation uses `hidapi`; tests use
/// [`mock::MockHidSubsystem`].
pub trait HidSubsystem: Send + Sync {
    /// Starts device matching and returns the receiver for all events.
    ///
    /// Every device present now or attached later is announced once as
    /// [`HidEvent::Attached`].
    fn open_manager(&self) -> Result<UnboundedReceiver<HidEvent>, SubsystemError>;

    /// Opens `device` with seize semantics.  Fails if another process already
    /// holds it.
    fn open_exclusive(&self, device: DeviceId) -> Result<(), SubsystemError>;

    /// Starts delivering `device`'s input reports through a fixed buffer of
    /// `report_len` bytes.  The device must have been opened first.
    fn subscribe_reports(&self, device: DeviceId, report_len: usize)
        -> Result<(), SubsystemError>;

    /// Closes every opened device so the OS regains normal routing.
    fn release_all(&self);
}

/// Returns the HID backend for the compilation target.
#[cfg(target_os = "macos")]
pub fn platform_subsystem(config: &KeydumpConfig) -> Arc<dyn HidSubsystem> {
    Arc::new(hidapi_backend::HidapiSubsystem::new(config.clone()))
}

/// Returns the HID backend for the compilation target.
#[cfg(not(target_os = "macos"))]
pub fn platform_subsystem(_config: &KeydumpConfig) -> Arc<dyn HidSubsystem> {
    Arc::new(unsupported::UnsupportedSubsystem)
}
