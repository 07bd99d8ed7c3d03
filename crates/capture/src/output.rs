// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Captured output buffer.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Bytes written to stdout during one capture session.
///
/// The length is tracked explicitly; the buffer may contain NUL bytes and is
/// not terminated. Clones share the same allocation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    bytes: Arc<[u8]>,
}

impl CapturedOutput {
    /// Wrap drained bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }

    /// Raw captured bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of captured bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if nothing was captured
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Captured bytes as text, if they are valid UTF-8
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.bytes).ok()
    }

    /// Captured bytes as text, replacing invalid sequences
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl AsRef<[u8]> for CapturedOutput {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for CapturedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedOutput")
            .field("len", &self.len())
            .field("text", &self.to_string_lossy())
            .finish()
    }
}

impl PartialEq<[u8]> for CapturedOutput {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl PartialEq<str> for CapturedOutput {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for CapturedOutput {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}
