//! Mock HID subsystem for unit and integration testing.
//!
//! Records every open/subscribe/release call in `Mutex<Vec<...>>` fields so
//! assertions can check exactly which devices were touched, and lets tests
//! inject synthetic attach and report events as if they came from hardware.
//!
//! # Usage in tests
//!
//! ```ignore
//! let hid = Arc::new(MockHidSubsystem::new());
//! let rx = hid.open_manager().unwrap();
//!
//! hid.inject_attach(DeviceId(1), truly_ergonomic_props());
//! hid.inject_report(DeviceId(1), vec![0, 0, 0x04, 0, 0, 0, 0, 0]);
//! hid.close();
//! ```
//!
//! # Failure injection
//!
//! - `fail_manager = true` makes `open_manager` fail.
//! - [`MockHidSubsystem::mark_busy`] makes `open_exclusive` fail for one
//!   device, as if another process had already seized it.

use std::collections::HashSet;
use std::sync::Mutex;

use keydump_core::DeviceProperties;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{DeviceCandidate, DeviceId, HidEvent, HidSubsystem, SubsystemError};

/// A mock [`HidSubsystem`] that records calls and lets tests inject events.
#[derive(Default)]
pub struct MockHidSubsystem {
    sender: Mutex<Option<UnboundedSender<HidEvent>>>,
    busy: Mutex<HashSet<DeviceId>>,
    /// Devices passed to a successful `open_exclusive`, in call order.
    pub opened: Mutex<Vec<DeviceId>>,
    /// `(device, report_len)` pairs passed to `subscribe_reports`.
    pub subscribed: Mutex<Vec<(DeviceId, usize)>>,
    /// Number of `release_all` calls.
    pub releases: Mutex<u32>,
    /// When `true`, `open_manager` returns [`SubsystemError::ManagerOpen`].
    pub fail_manager: bool,
}

impl MockHidSubsystem {
    /// Creates a mock with no recorded calls and no injected failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock whose `open_manager` always fails.
    pub fn failing_manager() -> Self {
        Self {
            fail_manager: true,
            ..Self::default()
        }
    }

    /// Makes `open_exclusive(device)` fail as if the device were held elsewhere.
    pub fn mark_busy(&self, device: DeviceId) {
        self.busy.lock().expect("lock poisoned").insert(device);
    }

    /// Injects an attach event.
    ///
    /// Panics if `open_manager()` has not been called or the mock was closed.
    pub fn inject_attach(&self, id: DeviceId, properties: DeviceProperties) {
        self.send(HidEvent::Attached(DeviceCandidate { id, properties }));
    }

    /// Injects an input report from `device`.
    ///
    /// Panics if `open_manager()` has not been called or the mock was closed.
    pub fn inject_report(&self, device: DeviceId, data: Vec<u8>) {
        self.send(HidEvent::Report { device, data });
    }

    /// Drops the event sender so the dispatch loop sees the channel close.
    pub fn close(&self) {
        *self.sender.lock().expect("lock poisoned") = None;
    }

    /// Returns `true` if `device` was opened exclusively.
    pub fn was_opened(&self, device: DeviceId) -> bool {
        self.opened.lock().expect("lock poisoned").contains(&device)
    }

    /// Returns `true` if `device` was subscribed for reports.
    pub fn was_subscribed(&self, device: DeviceId) -> bool {
        self.subscribed
            .lock()
            .expect("lock poisoned")
            .iter()
            .any(|(d, _)| *d == device)
    }

    fn send(&self, event: HidEvent) {
        let guard = self.sender.lock().expect("lock poisoned");
        match guard.as_ref() {
            Some(sender) => sender
                .send(event)
                .expect("receiver has been dropped; keep the open_manager() receiver alive"),
            None => panic!("MockHidSubsystem event injected before open_manager() or after close()"),
        }
    }
}

impl HidSubsystem for MockHidSubsystem {
    fn open_manager(&self) -> Result<UnboundedReceiver<HidEvent>, SubsystemError> {
        if self.fail_manager {
            return Err(SubsystemError::ManagerOpen("mock failure".into()));
        }
        let (tx, rx) = mpsc::unbounded_channel();
        *self.sender.lock().expect("lock poisoned") = Some(tx);
        Ok(rx)
    }

    fn open_exclusive(&self, device: DeviceId) -> Result<(), SubsystemError> {
        if self.busy.lock().expect("lock poisoned").contains(&device) {
            return Err(SubsystemError::OpenFailed {
                device,
                reason: "exclusive access denied".into(),
            });
        }
        self.opened.lock().expect("lock poisoned").push(device);
        Ok(())
    }

    fn subscribe_reports(&self, device: DeviceId, report_len: usize) -> Result<(), SubsystemError> {
        if !self.was_opened(device) {
            return Err(SubsystemError::UnknownDevice(device));
        }
        self.subscribed
            .lock()
            .expect("lock poisoned")
            .push((device, report_len));
        Ok(())
    }

    fn release_all(&self) {
        *self.releases.lock().expect("lock poisoned") += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_delivers_injected_events_in_order() {
        // Arrange
        let hid = MockHidSubsystem::new();
        let mut rx = hid.open_manager().expect("open_manager should succeed");

        // Act
        hid.inject_attach(DeviceId(1), DeviceProperties::default());
        hid.inject_report(DeviceId(1), vec![0; 8]);

        // Assert
        assert!(matches!(
            rx.try_recv().unwrap(),
            HidEvent::Attached(DeviceCandidate { id: DeviceId(1), .. })
        ));
        assert_eq!(
            rx.try_recv().unwrap(),
            HidEvent::Report { device: DeviceId(1), data: vec![0; 8] }
        );
    }

    #[test]
    fn test_close_disconnects_channel() {
        let hid = MockHidSubsystem::new();
        let mut rx = hid.open_manager().unwrap();

        hid.close();

        assert!(rx.try_recv().is_err());
        assert!(rx.blocking_recv().is_none(), "channel should be closed after close()");
    }

    #[test]
    fn test_failing_manager_returns_error() {
        let hid = MockHidSubsystem::failing_manager();

        let result = hid.open_manager();

        assert!(matches!(result, Err(SubsystemError::ManagerOpen(_))));
    }

    #[test]
    fn test_busy_device_cannot_be_opened() {
        let hid = MockHidSubsystem::new();
        hid.mark_busy(DeviceId(7));

        let result = hid.open_exclusive(DeviceId(7));

        assert!(matches!(result, Err(SubsystemError::OpenFailed { .. })));
        assert!(!hid.was_opened(DeviceId(7)));
    }

    #[test]
    fn test_subscribe_requires_prior_open() {
        let hid = MockHidSubsystem::new();

        assert!(matches!(
            hid.subscribe_reports(DeviceId(3), 8),
            Err(SubsystemError::UnknownDevice(DeviceId(3)))
        ));

        hid.open_exclusive(DeviceId(3)).unwrap();
        hid.subscribe_reports(DeviceId(3), 8).unwrap();
        assert_eq!(*hid.subscribed.lock().unwrap(), vec![(DeviceId(3), 8)]);
    }

    #[test]
    fn test_release_all_is_counted() {
        let hid = MockHidSubsystem::new();

        hid.release_all();
        hid.release_all();

        assert_eq!(*hid.releases.lock().unwrap(), 2);
    }
}
