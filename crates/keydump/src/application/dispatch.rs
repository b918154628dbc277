//! The single sequential event loop.
//!
//! ```text
//! HidSubsystem ──HidEvent──► run_dispatch_loop ──► EventDispatcher
//!                                                   ├─ Attached → SelectDeviceUseCase
//!                                                   └─ Report   → DumpKeysUseCase
//! ```
//!
//! Events are handled strictly one at a time on the task that drains the
//! channel, so neither use case needs any locking.  Every failure is logged
//! here and processing continues with the next event.

use std::future::Future;
use std::io::Write;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, info};

use super::dump_keys::DumpKeysUseCase;
use super::select_device::{SelectDeviceUseCase, Selection};
use crate::infrastructure::hid::HidEvent;

/// Why [`run_dispatch_loop`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// Every event sender was dropped.
    ChannelClosed,
    /// The shutdown future completed.
    Shutdown,
}

/// Counters for one dispatch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchStats {
    pub attached: u64,
    pub seized: u64,
    pub open_failures: u64,
    pub reports: u64,
    pub bad_reports: u64,
    pub keys_printed: u64,
}

/// Routes each [`HidEvent`] to the matching use case.
pub struct EventDispatcher<W: Write> {
    selector: SelectDeviceUseCase,
    dumper: DumpKeysUseCase<W>,
    stats: DispatchStats,
}

impl<W: Write> EventDispatcher<W> {
    pub fn new(selector: SelectDeviceUseCase, dumper: DumpKeysUseCase<W>) -> Self {
        Self {
            selector,
            dumper,
            stats: DispatchStats::default(),
        }
    }

    /// Handles one event.  Never fails; errors are logged.
    pub fn dispatch(&mut self, event: HidEvent) {
        match event {
            HidEvent::Attached(candidate) => {
                self.stats.attached += 1;
                match self.selector.handle_attach(&candidate) {
                    Ok(Selection::Seized(_)) => self.stats.seized += 1,
                    Ok(Selection::Ignored) => {}
                    Err(e) => {
                        self.stats.open_failures += 1;
                        error!("{e}");
                    }
                }
            }
            HidEvent::Report { device, data } => {
                self.stats.reports += 1;
                debug!("report from {device}");
                match self.dumper.handle_report(&data) {
                    Ok(printed) => self.stats.keys_printed += printed as u64,
                    Err(e) => {
                        self.stats.bad_reports += 1;
                        error!("{e}");
                    }
                }
            }
        }
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Consumes the dispatcher and returns the key output writer.
    pub fn into_output(self) -> W {
        self.dumper.into_inner()
    }
}

/// Drains `events` into `dispatcher` until the channel closes or `shutdown`
/// completes, whichever comes first.
pub async fn run_dispatch_loop<W, F>(
    dispatcher: &mut EventDispatcher<W>,
    events: &mut UnboundedReceiver<HidEvent>,
    shutdown: F,
) -> LoopExit
where
    W: Write,
    F: Future<Output = ()>,
{
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!("shutdown signal received");
                return LoopExit::Shutdown;
            }
            event = events.recv() => match event {
                Some(event) => dispatcher.dispatch(event),
                None => {
                    info!("HID event channel closed");
                    return LoopExit::ChannelClosed;
                }
            },
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
