//! # Canonical Serialization — Record Byte Production
//!
//! This module defines `CanonicalJson`, the sole construction path for the
//! bytes of a record file. Every writer in the toolchain — the auditor's
//! auto-fix pass and the ingestion tool alike — produces file contents
//! through `CanonicalJson::new()`, so a record written by one tool is never
//! rewritten by another.
//!
//! ## Canonical Form
//!
//! - Object keys in authored order (`serde_json` with `preserve_order`;
//!   keys are NOT sorted — the hand-curated field order of the records is
//!   part of the format).
//! - 2-space indentation with `": "` / `","` separators (the `serde_json`
//!   pretty printer).
//! - UTF-8 encoding, POSIX `\n` line endings, exactly one trailing newline.
//!
//! ## Invariants
//!
//! - The only constructor is `CanonicalJson::new()`; the inner string is
//!   private.
//! - Canonicalization is idempotent: parsing canonical output and
//!   re-canonicalizing it yields byte-identical output.

use serde::Serialize;

use crate::error::CanonicalError;

/// The canonical serialization of a record, produced exclusively by
/// [`CanonicalJson::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalJson(String);

impl CanonicalJson {
    /// Serialize any value into canonical record form.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalError::SerializationFailed` if the value cannot be
    /// serialized as JSON.
    pub fn new(value: &impl Serialize) -> Result<Self, CanonicalError> {
        let mut text = serde_json::to_string_pretty(value)?;
        text.push('\n');
        Ok(Self(text))
    }

    /// The canonical text, including the trailing newline.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical bytes, as written to disk.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Consume self and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the given raw file contents already match canonical form.
    pub fn matches(&self, raw: &str) -> bool {
        self.0 == raw
    }
}

impl AsRef<str> for CanonicalJson {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
