//! Progress reporting for active transfers.
//!
//! The download client only needs something to push byte counts into, so
//! the console bar sits behind a minimal sink capability and tests (and
//! quiet runs) substitute an inert implementation.

use indicatif::{ProgressBar, ProgressStyle};

/// Receives byte counts for one active transfer.
pub trait TransferSink: Send + Sync {
    /// Advances the indicator by `bytes` just written.
    fn advance(&self, bytes: u64);

    /// Marks the transfer as done.
    fn finish(&self);
}

/// Creates one [`TransferSink`] per transfer.
pub trait Progress: Send + Sync {
    /// Starts reporting a transfer of `total` expected bytes (0 when the
    /// size is unknown).
    fn begin(&self, name: &str, total: u64) -> Box<dyn TransferSink>;
}

/// Console progress: one byte-scaled bar per transfer, showing the file
/// name, bytes transferred, and rate.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&self, name: &str, total: u64) -> Box<dyn TransferSink> {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template(
                "{msg} [{bar:40}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar.set_message(name.to_string());
        Box::new(BarSink { bar })
    }
}

struct BarSink {
    bar: ProgressBar,
}

impl TransferSink for BarSink {
    fn advance(&self, bytes: u64) {
        self.bar.inc(bytes);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Inert progress for tests and quiet runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn begin(&self, _name: &str, _total: u64) -> Box<dyn TransferSink> {
        Box::new(NoSink)
    }
}

struct NoSink;

impl TransferSink for NoSink {
    fn advance(&self, _bytes: u64) {}

    fn finish(&self) {}
}
