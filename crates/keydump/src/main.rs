//! keydump entry point.
//!
//! Wires the platform HID subsystem into one session on a current-thread
//! Tokio runtime.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ run_session()
//!       ├─ HidSubsystem::open_manager()   -- exit 1 on failure
//!       ├─ run_dispatch_loop
//!       │    ├─ Attached  -> SelectDeviceUseCase (match, seize, subscribe)
//!       │    └─ Report    -> DumpKeysUseCase     (stdout: "Key 0x.. name")
//!       └─ Ctrl-C -> HidSubsystem::release_all()
//! ```
//!
//! Key lines go to stdout; every diagnostic goes to stderr.  A session error
//! is returned from `main` and reported once by `anyhow` with exit status 1.

use tracing::info;
use tracing_subscriber::EnvFilter;

use keydump::application::session::run_session;
use keydump::domain::KeydumpConfig;
use keydump::infrastructure::hid::platform_subsystem;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging on stderr.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = KeydumpConfig::default();
    info!("keydump starting, target {}", config.target);

    let hid = platform_subsystem(&config);
    let shutdown = async {
        if tokio::signal::ctrl_c().await.is_err() {
            // No signal handler available: run until killed.
            std::future::pending::<()>().await;
        }
    };
    let summary = run_session(&config, hid, std::io::stdout(), shutdown).await?;

    info!("keydump stopped ({:?}, {:?})", summary.exit, summary.stats);
    Ok(())
}
