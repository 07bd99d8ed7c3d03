// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Helpers shared by unit tests.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::{const_mutex, Mutex};

use crate::diagnostics::Reporter;

/// Held by unit tests that redirect stdout; only one capture session can be
/// open per process.
pub static CAPTURE_LOCK: Mutex<()> = const_mutex(());

/// Cloneable in-memory writer
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Reporter writing to in-memory buffers, returned as `(reporter, out, diag)`
pub fn buffered_reporter() -> (Reporter, SharedBuffer, SharedBuffer) {
    let out = SharedBuffer::new();
    let diag = SharedBuffer::new();
    let reporter = Reporter::new(out.clone(), diag.clone(), false);
    (reporter, out, diag)
}
