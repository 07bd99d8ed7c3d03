// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Standard output capture for the utest harness.
//!
//! A capture session swaps the process's stdout descriptor for the write end
//! of a pipe, lets the caller produce output, then restores stdout and drains
//! everything written in between into an owned buffer.
//!
//! ```no_run
//! let (_, output) = utest_capture::capture(|| println!("hello"))?;
//! assert_eq!(output.as_bytes(), b"hello\n");
//! # Ok::<(), utest_capture::CaptureError>(())
//! ```
//!
//! Output is held in the pipe until the session ends, so a single session
//! that writes more than the pipe capacity (grown to 1 MiB on Linux) blocks
//! the writer forever.
//!
//! Only one session may be active per process. The state is a process-wide
//! singleton, so sessions must not be opened from concurrent threads.

mod error;
mod output;
mod session;

pub use error::CaptureError;
pub use output::CapturedOutput;
pub use session::{begin, capture, end, is_capturing, CaptureSession, DRAIN_CHUNK};
