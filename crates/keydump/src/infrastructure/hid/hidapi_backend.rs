//! `hidapi`-backed implementation of [`HidSubsystem`] for macOS.
//!
//! `hidapi` has no hot-plug callback, so a dedicated enumeration thread
//! refreshes the device list every `poll_interval` and announces each device
//! path when it first appears, including after an unplug and re-plug.  A
//! seized device gets its own reader thread that blocks in `read_timeout` and
//! forwards each report into the event channel.  Neither thread runs
//! application code; they only produce events.
//!
//! # Seize semantics
//!
//! The IOKit backend honours `set_open_exclusive(true)`
//! (`kIOHIDOptionsTypeSeizeDevice`), so a keyboard held by another process
//! fails to open and the OS stops receiving its keystrokes while keydump
//! holds it.
use std::collections::HashMap;
use std::ffi::CString;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use hidapi::{HidApi, HidDevice};
use keydump_core::DeviceProperties;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

use super::hotplug::PathTracker;
use super::{DeviceCandidate, DeviceId, HidEvent, HidSubsystem, SubsystemError};
use crate::domain::KeydumpConfig;

/// Device paths seen so far, keyed by the id they were announced under.
type PathTable = HashMap<DeviceId, CString>;

/// HID subsystem backed by the `hidapi` crate.
pub struct HidapiSubsystem {
    config: KeydumpConfig,
    api: Arc<Mutex<Option<HidApi>>>,
    paths: Arc<Mutex<PathTable>>,
    /// Opened but not yet subscribed devices.
    pending: Mutex<HashMap<DeviceId, HidDevice>>,
    sender: Mutex<Option<UnboundedSender<HidEvent>>>,
    running: Arc<AtomicBool>,
    threads: Mutex<Vec<JoinHandle<()>>>,
}

impl HidapiSubsystem {
    /// Creates an unstarted subsystem; nothing touches the OS until
    /// [`HidSubsystem::open_manager`].
    pub fn new(config: KeydumpConfig) -> Self {
        Self {
            config,
            api: Arc::new(Mutex::new(None)),
            paths: Arc::new(Mutex::new(HashMap::new())),
            pending: Mutex::new(HashMap::new()),
            sender: Mutex::new(None),
            running: Arc::new(AtomicBool::new(true)),
            threads: Mutex::new(Vec::new()),
        }
    }

    fn backend_error(what: &str) -> SubsystemError {
        SubsystemError::Backend(format!("{what} lock poisoned"))
    }
}

impl HidSubsystem for HidapiSubsystem {
    fn open_manager(&self) -> Result<UnboundedReceiver<HidEvent>, SubsystemError> {
        let api = HidApi::new().map_err(|e| SubsystemError::ManagerOpen(e.to_string()))?;
        api.set_open_exclusive(true);

        *self.api.lock().map_err(|_| Self::backend_error("api"))? = Some(api);

        let (tx, rx) = mpsc::unbounded_channel();
        *self.sender.lock().map_err(|_| Self::backend_error("sender"))? = Some(tx.clone());

        let api = Arc::clone(&self.api);
        let paths = Arc::clone(&self.paths);
        let running = Arc::clone(&self.running);
        let interval = self.config.poll_interval;
        let handle = thread::Builder::new()
            .name("keydump-enumerate".to_string())
            .spawn(move || {
                let mut next_id = 0u64;
                let mut tracker = PathTracker::new();
                while running.load(Ordering::Relaxed) {
                    if !enumerate_once(&api, &paths, &mut tracker, &mut next_id, &tx) {
                        break;
                    }
                    thread::sleep(interval);
                }
                debug!("enumeration thread exiting");
            })
            .map_err(|e| SubsystemError::ManagerOpen(e.to_string()))?;
        self.threads
            .lock()
            .map_err(|_| Self::backend_error("threads"))?
            .push(handle);

        Ok(rx)
    }

    fn open_exclusive(&self, device: DeviceId) -> Result<(), SubsystemError> {
        let path = self
            .paths
            .lock()
            .map_err(|_| Self::backend_error("paths"))?
            .get(&device)
            .cloned()
            .ok_or(SubsystemError::UnknownDevice(device))?;

        let api_guard = self.api.lock().map_err(|_| Self::backend_error("api"))?;
        let api = api_guard
            .as_ref()
            .ok_or_else(|| SubsystemError::Backend("manager not open".into()))?;
        let handle = api
            .open_path(&path)
            .map_err(|e| SubsystemError::OpenFailed {
                device,
                reason: e.to_string(),
            })?;
        drop(api_guard);

        info!("opened {device} at {path:?}");
        self.pending
            .lock()
            .map_err(|_| Self::backend_error("pending"))?
            .insert(device, handle);
        Ok(())
    }

    fn subscribe_reports(&self, device: DeviceId, report_len: usize) -> Result<(), SubsystemError> {
        let handle = self
            .pending
            .lock()
            .map_err(|_| Self::backend_error("pending"))?
            .remove(&device)
            .ok_or(SubsystemError::UnknownDevice(device))?;
        let tx = self
            .sender
            .lock()
            .map_err(|_| Self::backend_error("sender"))?
            .clone()
            .ok_or_else(|| SubsystemError::Backend("manager not open".into()))?;

        let running = Arc::clone(&self.running);
        let timeout_ms = i32::try_from(self.config.read_timeout.as_millis()).unwrap_or(i32::MAX);
        let reader = thread::Builder::new()
            .name(format!("keydump-read-{}", device.0))
            .spawn(move || read_reports(device, handle, report_len, timeout_ms, &running, &tx))
            .map_err(|e| SubsystemError::Subscribe {
                device,
                reason: e.to_string(),
            })?;
        if let Ok(mut threads) = self.threads.lock() {
            threads.push(reader);
        }
        Ok(())
    }

    fn release_all(&self) {
        self.running.store(false, Ordering::SeqCst);
        if let Ok(mut pending) = self.pending.lock() {
            pending.clear();
        }
        if let Ok(mut sender) = self.sender.lock() {
            *sender = None;
        }
        let handles = match self.threads.lock() {
            Ok(mut threads) => std::mem::take(&mut *threads),
            Err(_) => Vec::new(),
        };
        for handle in handles {
            if handle.join().is_err() {
                warn!("HID helper thread panicked during release");
            }
        }
        info!("released all HID devices");
    }
}

/// Refreshes the device list, forgets departed paths and announces new ones.
///
/// Returns `false` once the event receiver is gone.
fn enumerate_once(
    api: &Mutex<Option<HidApi>>,
    paths: &Mutex<PathTable>,
    tracker: &mut PathTracker,
    next_id: &mut u64,
    tx: &UnboundedSender<HidEvent>,
) -> bool {
    let mut api_guard = match api.lock() {
        Ok(guard) => guard,
        Err(_) => return false,
    };
    let Some(api) = api_guard.as_mut() else {
        return false;
    };
    if let Err(e) = api.refresh_devices() {
        warn!("HID device refresh failed: {e}");
        return true;
    }

    let snapshot: Vec<(CString, DeviceProperties)> = api
        .device_list()
        .map(|info| {
            let properties = DeviceProperties {
                vendor_id: Some(u32::from(info.vendor_id())),
                product_id: Some(u32::from(info.product_id())),
                usage_page: Some(u32::from(info.usage_page())),
                usage: Some(u32::from(info.usage())),
            };
            (info.path().to_owned(), properties)
        })
        .collect();
    drop(api_guard);

    let fresh: Vec<(DeviceId, CString, DeviceProperties)> = tracker
        .refresh(snapshot)
        .into_iter()
        .map(|(path, properties)| {
            *next_id += 1;
            (DeviceId(*next_id), path, properties)
        })
        .collect();

    match paths.lock() {
        Ok(mut table) => {
            tracker.prune(&mut table);
            table.extend(fresh.iter().map(|(id, path, _)| (*id, path.clone())));
        }
        Err(_) => return false,
    }

    for (id, path, properties) in fresh {
        debug!("{id} attached at {path:?}");
        if tx
            .send(HidEvent::Attached(DeviceCandidate { id, properties }))
            .is_err()
        {
            return false;
        }
    }
    true
}

/// Reader thread body: forwards reports until release, read failure, or the
/// receiver going away.  Dropping `handle` closes the device.
fn read_reports(
    device: DeviceId,
    handle: HidDevice,
    report_len: usize,
    timeout_ms: i32,
    running: &AtomicBool,
    tx: &UnboundedSender<HidEvent>,
) {
    let mut buf = vec![0u8; report_len];
    while running.load(Ordering::Relaxed) {
        match handle.read_timeout(&mut buf, timeout_ms) {
            Ok(0) => continue,
            Ok(n) => {
                let data = buf[..n].to_vec();
                if tx.send(HidEvent::Report { device, data }).is_err() {
                    break;
                }
            }
            Err(e) => {
                warn!("read from {device} failed, stopping reader: {e}");
                break;
            }
        }
    }
    debug!("reader for {device} exiting");
}
