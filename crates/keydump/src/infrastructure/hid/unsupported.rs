//! Placeholder backend for targets without a seize-capable HID API.

use tokio::sync::mpsc::UnboundedReceiver;

use super::{DeviceId, HidEvent, HidSubsystem, SubsystemError};

/// A [`HidSubsystem`] whose manager never opens.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedSubsystem;

impl HidSubsystem for UnsupportedSubsystem {
    fn open_manager(&self) -> Result<UnboundedReceiver<HidEvent>, SubsystemError> {
        Err(SubsystemError::ManagerOpen(format!(
            "no HID backend for {}",
            std::env::consts::OS
        )))
    }

    fn open_exclusive(&self, device: DeviceId) -> Result<(), SubsystemError> {
        Err(SubsystemError::UnknownDevice(device))
    }

    fn subscribe_reports(&self, device: DeviceId, _report_len: usize) -> Result<(), SubsystemError> {
        Err(SubsystemError::UnknownDevice(device))
    }

    fn release_all(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::KeydumpConfig;
    use crate::infrastructure::hid::platform_subsystem;

    #[test]
    fn test_manager_open_fails_with_platform_name() {
        let err = UnsupportedSubsystem.open_manager().unwrap_err();

        assert!(matches!(err, SubsystemError::ManagerOpen(_)));
        assert!(err.to_string().contains(std::env::consts::OS));
    }

    #[test]
    fn test_platform_subsystem_is_unsupported_off_macos() {
        let hid = platform_subsystem(&KeydumpConfig::default());

        assert!(hid.open_manager().is_err());
        assert!(matches!(
            hid.open_exclusive(DeviceId(1)),
            Err(SubsystemError::UnknownDevice(DeviceId(1)))
        ));
    }
}
