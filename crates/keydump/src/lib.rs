//! keydump library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does keydump do? (for beginners)
//!
//! keydump asks the host HID subsystem for every device it knows about,
//! picks out one specific keyboard by its identity tuple, opens that keyboard
//! *exclusively* (so the OS stops treating it as a normal keyboard), and then
//! prints one line per key held down in every input report it sends:
//!
//! ```text
//! Key 0xe1 Keyboard LeftShift
//! Key 0x04 Keyboard a and A
//! ```
//!
//! The pieces:
//!
//! 1. `domain::config` – the fixed runtime settings (which keyboard, buffer
//!    size, polling intervals).
//! 2. `application::select_device` – decides which attached devices to seize.
//! 3. `application::dump_keys` – decodes reports and prints key lines.
//! 4. `application::dispatch` – the single sequential event loop tying the two
//!    together.
//! 5. `application::session` – one run: open the manager, loop, release.
//! 6. `infrastructure::hid` – the [`HidSubsystem`] trait plus an in-memory mock
//!    and the platform backend (`hidapi` on macOS).
//!
//! [`HidSubsystem`]: infrastructure::hid::HidSubsystem

/// Domain layer: runtime configuration.
pub mod domain;

/// Application layer: use cases and the dispatch loop.
pub mod application;

/// Infrastructure layer: HID subsystem adapters.
pub mod infrastructure;
