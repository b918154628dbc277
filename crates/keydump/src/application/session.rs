//! One keydump run from manager open to release.

use std::future::Future;
use std::io::Write;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use super::dispatch::{run_dispatch_loop, DispatchStats, EventDispatcher, LoopExit};
use super::dump_keys::DumpKeysUseCase;
use super::select_device::SelectDeviceUseCase;
use crate::domain::KeydumpConfig;
use crate::infrastructure::hid::{HidSubsystem, SubsystemError};

/// Error that ends a session before any event is processed.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Error opening HID manager")]
    ManagerOpen(#[source] SubsystemError),
}

/// Outcome of a completed session.
#[derive(Debug)]
pub struct SessionSummary<W> {
    pub exit: LoopExit,
    pub stats: DispatchStats,
    /// The key output writer, handed back to the caller.
    pub output: W,
}

/// Opens the HID manager, dispatches events into `out` until the channel
/// closes or `shutdown` completes, then releases every seized device.
///
/// # Errors
///
/// Returns [`SessionError::ManagerOpen`] if the manager cannot be opened.
/// Nothing is released in that case since nothing was opened.
pub async fn run_session<W, F>(
    config: &KeydumpConfig,
    hid: Arc<dyn HidSubsystem>,
    out: W,
    shutdown: F,
) -> Result<SessionSummary<W>, SessionError>
where
    W: Write,
    F: Future<Output = ()>,
{
    let mut events = hid.open_manager().map_err(SessionError::ManagerOpen)?;

    let selector = SelectDeviceUseCase::new(Arc::clone(&hid), config.target, config.report_len);
    let mut dispatcher = EventDispatcher::new(selector, DumpKeysUseCase::new(out));
    let exit = run_dispatch_loop(&mut dispatcher, &mut events, shutdown).await;

    hid.release_all();
    let stats = dispatcher.stats();
    info!("session ended ({exit:?}, {stats:?})");
    Ok(SessionSummary {
        exit,
        stats,
        output: dispatcher.into_output(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::hid::{mock::MockHidSubsystem, DeviceId};
    use keydump_core::DeviceProperties;

    type Outcome = Result<SessionSummary<Vec<u8>>, SessionError>;

    fn start(hid: &Arc<MockHidSubsystem>) -> impl Future<Output = Outcome> {
        let hid = Arc::clone(hid) as Arc<dyn HidSubsystem>;
        async move {
            run_session(&KeydumpConfig::default(), hid, Vec::new(), std::future::pending()).await
        }
    }

    #[test]
    fn test_manager_failure_ends_session_with_error() {
        // Arrange
        let hid = Arc::new(MockHidSubsystem::failing_manager());

        // Act
        let mut task = tokio_test::task::spawn(start(&hid));
        let result = match task.poll() {
            std::task::Poll::Ready(result) => result,
            std::task::Poll::Pending => panic!("session must fail without waiting"),
        };

        // Assert
        let err = result.expect_err("manager open must fail");
        assert_eq!(err.to_string(), "Error opening HID manager");
        assert!(matches!(
            err,
            SessionError::ManagerOpen(SubsystemError::ManagerOpen(_))
        ));
        assert_eq!(*hid.releases.lock().unwrap(), 0);
    }

    #[test]
    fn test_session_dumps_keys_then_releases() {
        let hid = Arc::new(MockHidSubsystem::new());
        let mut task = tokio_test::task::spawn(start(&hid));
        tokio_test::assert_pending!(task.poll());

        hid.inject_attach(
            DeviceId(1),
            DeviceProperties {
                vendor_id: Some(0x0e6a),
                product_id: Some(0x030c),
                usage_page: Some(0x01),
                usage: Some(0x06),
            },
        );
        hid.inject_report(DeviceId(1), vec![0, 0, 0x04, 0, 0, 0, 0, 0]);
        hid.close();

        let summary = match task.poll() {
            std::task::Poll::Ready(result) => result.expect("session succeeds"),
            std::task::Poll::Pending => panic!("session must end once the channel closes"),
        };
        assert_eq!(summary.exit, LoopExit::ChannelClosed);
        assert_eq!(summary.stats.seized, 1);
        assert_eq!(
            String::from_utf8(summary.output).unwrap(),
            "Key 0x04 Keyboard a and A\n"
        );
        assert_eq!(*hid.releases.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_shutdown_releases_seized_devices() {
        let hid = Arc::new(MockHidSubsystem::new());

        let summary = run_session(
            &KeydumpConfig::default(),
            Arc::clone(&hid) as Arc<dyn HidSubsystem>,
            Vec::new(),
            async {},
        )
        .await
        .expect("session succeeds");

        assert_eq!(summary.exit, LoopExit::Shutdown);
        assert_eq!(*hid.releases.lock().unwrap(), 1);
    }
}
