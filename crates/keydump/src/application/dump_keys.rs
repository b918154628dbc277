//! DumpKeysUseCase: turns raw input reports into printed key lines.
//!
//! Each report is decoded on its own.  There is no key-up detection and no
//! deduplication: a key held across two reports is printed twice.

use std::io::Write;

use keydump_core::{BootKeyboardReport, ReportError};
use tracing::{debug, warn};

/// The Dump Keys use case.
///
/// Writes one `Key 0x.. <name>` line per pressed key to `out` (stdout in the
/// binary, a `Vec<u8>` in tests).
pub struct DumpKeysUseCase<W: Write> {
    out: W,
}

impl<W: Write> DumpKeysUseCase<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Decodes one report and prints its pressed keys.
    ///
    /// Returns the number of key lines printed.  Write failures are logged
    /// and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::BadLength`] if `data` is not a boot-keyboard
    /// report; nothing is printed in that case.
    pub fn handle_report(&mut self, data: &[u8]) -> Result<usize, ReportError> {
        debug!("report: {}", hex_bytes(data));

        let report = BootKeyboardReport::parse(data)?;
        let mut printed = 0;
        for key in report.pressed_keys() {
            if let Err(e) = writeln!(self.out, "{key}") {
                warn!("failed to write key line: {e}");
            }
            printed += 1;
        }
        if let Err(e) = self.out.flush() {
            warn!("failed to flush key output: {e}");
        }
        Ok(printed)
    }

    /// Consumes the use case and returns the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `0x00 0x00 0x04 ...`
fn hex_bytes(data: &[u8]) -> String {
    data.iter()
        .map(|b| format!("0x{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
