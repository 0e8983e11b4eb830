//! Append-only daily error log files.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use database::ApiError;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::warn;

/// Destination for error records.
///
/// Implementations must never fail the caller: a record that cannot be
/// written is dropped, and the response still goes out.
#[async_trait]
pub trait ErrorSink: Send + Sync {
    async fn log(&self, err: &ApiError);
}

/// Writes one file per calendar day under `dir`, named `YYYY-MM-DD.log`,
/// one error per line: `HH:MM:SS.sss;<message>;<trace>`.
///
/// The message prefers the wrapped cause over the client-facing text (the
/// log wants the richer diagnostic, the sanitized text stays in the
/// response); the trace renders the cause for diagnosis.
pub struct FileErrorLogger {
    dir: PathBuf,
    // Serializes appends so concurrent requests cannot interleave lines.
    write_lock: Mutex<()>,
}

impl FileErrorLogger {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Target file for an error that occurred at the given moment.
    fn log_path(&self, occurred_at: DateTime<Utc>) -> PathBuf {
        self.dir
            .join(format!("{}.log", occurred_at.format("%Y-%m-%d")))
    }

    fn format_line(err: &ApiError) -> String {
        let time = err.occurred_at().format("%H:%M:%S%.3f");
        let (message, trace) = match err.cause() {
            Some(cause) => (cause.to_string(), format!("{cause:?}")),
            None => (err.message().to_string(), format!("{err:?}")),
        };
        format!("{time};{message};{trace}\r\n")
    }

    async fn append(&self, err: &ApiError) -> std::io::Result<()> {
        let path = self.log_path(err.occurred_at());
        let line = Self::format_line(err);

        let _guard = self.write_lock.lock().await;
        tokio::fs::create_dir_all(&self.dir).await?;
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl ErrorSink for FileErrorLogger {
    async fn log(&self, err: &ApiError) {
        if let Err(io_err) = self.append(err).await {
            // The requesting flow must not notice a logging failure.
            warn!(error = %io_err, "failed to append to error log");
        }
    }
}
