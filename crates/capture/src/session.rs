// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture session state machine.
//!
//! `Idle --begin()--> Capturing --end()--> Idle`. Any other transition is
//! rejected with a usage error.

use std::io::{self, Write};
use std::os::fd::{AsFd, AsRawFd, OwnedFd, RawFd};

use nix::errno::Errno;
use nix::unistd::{dup2, pipe};
use parking_lot::{const_mutex, Mutex};

use crate::error::CaptureError;
use crate::output::CapturedOutput;

/// Size of each read when draining the pipe.
pub const DRAIN_CHUNK: usize = 4096;

/// Written after the captured output so the drain always sees a final byte
/// produced by the session itself.
const END_MARKER: u8 = 0;

/// Requested pipe capacity. Output beyond the capacity blocks the writer
/// until `end()` drains, so ask for more than the 64 KiB default.
#[cfg(target_os = "linux")]
const PIPE_CAPACITY: i32 = 1 << 20;

static SESSION: Mutex<State> = const_mutex(State::Idle);

/// Descriptors held while stdout is redirected.
struct Active {
    saved_stdout: OwnedFd,
    read_end: OwnedFd,
    write_end: OwnedFd,
}

enum State {
    Idle,
    Capturing(Active),
}

/// Whether a capture session is currently active.
pub fn is_capturing() -> bool {
    matches!(*SESSION.lock(), State::Capturing(_))
}

/// Start redirecting stdout into a capture pipe.
///
/// Pending buffered stdout is flushed to the original stream first. Fails
/// with [`CaptureError::AlreadyCapturing`] if a session is already open.
pub fn begin() -> Result<(), CaptureError> {
    let mut state = SESSION.lock();
    if matches!(*state, State::Capturing(_)) {
        return Err(CaptureError::AlreadyCapturing);
    }

    io::stdout().flush().map_err(CaptureError::Flush)?;

    let saved_stdout = io::stdout()
        .as_fd()
        .try_clone_to_owned()
        .map_err(CaptureError::Duplicate)?;
    let (read_end, write_end) = pipe().map_err(CaptureError::Pipe)?;
    grow_pipe(&write_end);

    dup2(write_end.as_raw_fd(), stdout_fd()).map_err(CaptureError::Redirect)?;

    *state = State::Capturing(Active {
        saved_stdout,
        read_end,
        write_end,
    });
    tracing::debug!("stdout capture started");
    Ok(())
}

/// Stop redirecting stdout and return everything written since [`begin`].
///
/// Fails with [`CaptureError::NotCapturing`] if no session is open. The
/// session is closed even when draining fails.
pub fn end() -> Result<CapturedOutput, CaptureError> {
    let active = {
        let mut state = SESSION.lock();
        match std::mem::replace(&mut *state, State::Idle) {
            State::Capturing(active) => active,
            State::Idle => return Err(CaptureError::NotCapturing),
        }
    };

    let output = active.finish()?;
    tracing::debug!(bytes = output.len(), "stdout capture finished");
    Ok(output)
}

/// Run `f` with stdout captured and return its result with the output.
///
/// The session is closed when `f` returns or unwinds.
pub fn capture<F, R>(f: F) -> Result<(R, CapturedOutput), CaptureError>
where
    F: FnOnce() -> R,
{
    let session = CaptureSession::begin()?;
    let value = f();
    let output = session.end()?;
    Ok((value, output))
}

/// Guard for an open capture session.
///
/// Dropping the guard without calling [`CaptureSession::end`] still restores
/// stdout and discards the captured bytes.
#[must_use = "dropping the session immediately discards the capture"]
pub struct CaptureSession {
    open: bool,
}

impl CaptureSession {
    /// Open a session, see [`begin`]
    pub fn begin() -> Result<Self, CaptureError> {
        begin()?;
        Ok(Self { open: true })
    }

    /// Close the session, see [`end`]
    pub fn end(mut self) -> Result<CapturedOutput, CaptureError> {
        self.open = false;
        end()
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        if self.open {
            if let Err(e) = end() {
                tracing::warn!(error = %e, "failed to close abandoned capture session");
            }
        }
    }
}

impl Active {
    fn finish(self) -> Result<CapturedOutput, CaptureError> {
        let Active {
            saved_stdout,
            read_end,
            write_end,
        } = self;

        // Flush failures must not skip the restore below.
        let flushed = io::stdout().flush();
        let marked = write_all(&write_end, &[END_MARKER]);

        dup2(saved_stdout.as_raw_fd(), stdout_fd()).map_err(CaptureError::Restore)?;
        drop(write_end);
        drop(saved_stdout);

        flushed.map_err(CaptureError::Flush)?;
        marked.map_err(CaptureError::Marker)?;

        let mut bytes = drain(&read_end)?;
        if bytes.last() == Some(&END_MARKER) {
            bytes.pop();
        }
        Ok(CapturedOutput::new(bytes))
    }
}

fn stdout_fd() -> RawFd {
    io::stdout().as_raw_fd()
}

/// Read the pipe until every write end is closed.
fn drain<F: AsRawFd>(fd: &F) -> Result<Vec<u8>, CaptureError> {
    let mut bytes = Vec::new();
    let mut chunk = [0u8; DRAIN_CHUNK];
    loop {
        match nix::unistd::read(fd.as_raw_fd(), &mut chunk) {
            Ok(0) => return Ok(bytes),
            Ok(n) => bytes.extend_from_slice(&chunk[..n]),
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(CaptureError::Drain(e)),
        }
    }
}

fn write_all<F: AsFd>(fd: &F, mut buf: &[u8]) -> nix::Result<()> {
    while !buf.is_empty() {
        match nix::unistd::write(fd, buf) {
            Ok(n) => buf = &buf[n..],
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn grow_pipe<F: AsRawFd>(fd: &F) {
    use nix::fcntl::{fcntl, FcntlArg};

    if let Err(e) = fcntl(fd.as_raw_fd(), FcntlArg::F_SETPIPE_SZ(PIPE_CAPACITY)) {
        tracing::debug!(error = %e, "could not grow capture pipe");
    }
}

#[cfg(not(target_os = "linux"))]
fn grow_pipe<F: AsRawFd>(_fd: &F) {}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
