// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture session errors.

use nix::errno::Errno;
use thiserror::Error;

/// Errors raised while opening or closing a capture session
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("capture session already active")]
    AlreadyCapturing,

    #[error("no capture session active")]
    NotCapturing,

    #[error("failed to flush stdout: {0}")]
    Flush(#[source] std::io::Error),

    #[error("failed to duplicate stdout descriptor: {0}")]
    Duplicate(#[source] std::io::Error),

    #[error("failed to create capture pipe: {0}")]
    Pipe(#[source] Errno),

    #[error("failed to redirect stdout into capture pipe: {0}")]
    Redirect(#[source] Errno),

    #[error("failed to write end-of-capture marker: {0}")]
    Marker(#[source] Errno),

    #[error("failed to restore original stdout: {0}")]
    Restore(#[source] Errno),

    #[error("failed to drain capture pipe: {0}")]
    Drain(#[source] Errno),
}

impl CaptureError {
    /// Whether the process can no longer make progress after this error.
    ///
    /// Only a failed restore qualifies: stdout stays pointed at a pipe nobody
    /// reads, so every later write would be lost or block.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CaptureError::Restore(_))
    }

    /// Whether the error is a misuse of the session state machine.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CaptureError::AlreadyCapturing | CaptureError::NotCapturing
        )
    }
}
