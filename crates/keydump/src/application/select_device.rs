//! SelectDeviceUseCase: decides which attached HID devices to seize.
//!
//! Policy:
//! 1. Build the candidate's identity, with 0 for unreadable properties.
//! 2. Ignore it unless all four fields equal the configured target.
//! 3. Open it exclusively; on failure report and skip (no retry).
//! 4. Subscribe its input reports through a fixed-size buffer.

use std::sync::Arc;

use keydump_core::DeviceIdentity;
use thiserror::Error;
use tracing::info;

use crate::infrastructure::hid::{DeviceCandidate, DeviceId, HidSubsystem, SubsystemError};

/// Error type for device selection.
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("Error opening HID device: {0}")]
    Open(#[source] SubsystemError),
    #[error("Error subscribing to HID device reports: {0}")]
    Subscribe(#[source] SubsystemError),
}

/// Outcome of handling one attach event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The device is not the target keyboard.
    Ignored,
    /// The device was seized and its reports are now delivered.
    Seized(DeviceId),
}

/// The Select Device use case.
pub struct SelectDeviceUseCase {
    hid: Arc<dyn HidSubsystem>,
    target: DeviceIdentity,
    report_len: usize,
}

impl SelectDeviceUseCase {
    /// Creates a selector for `target`, subscribing matches with a
    /// `report_len`-byte buffer.
    pub fn new(hid: Arc<dyn HidSubsystem>, target: DeviceIdentity, report_len: usize) -> Self {
        Self {
            hid,
            target,
            report_len,
        }
    }

    /// Handles one attach event.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError`] if the matching device cannot be opened or
    /// subscribed.  The caller should log it and keep going.
    pub fn handle_attach(&self, candidate: &DeviceCandidate) -> Result<Selection, SelectError> {
        let identity = DeviceIdentity::from_properties(&candidate.properties);
        info!("{identity}");

        if !self.target.matches(&identity) {
            return Ok(Selection::Ignored);
        }

        self.hid
            .open_exclusive(candidate.id)
            .map_err(SelectError::Open)?;
        self.hid
            .subscribe_reports(candidate.id, self.report_len)
            .map_err(SelectError::Subscribe)?;

        info!("seized {} ({identity})", candidate.id);
        Ok(Selection::Seized(candidate.id))
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
