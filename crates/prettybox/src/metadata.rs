#![forbid(unsafe_code)]

//! Metadata kinds and their string producers.
//!
//! Header and footer rows are generated from a closed set of
//! [`MetadataKind`]s. Time-based kinds read the system clock; type- and
//! identity-based kinds describe the source value the content came from,
//! captured as a [`SourceInfo`] at the generic formatting entry points.

use chrono::{Local, Utc};

/// One kind of generated metadata row.
///
/// The set is closed: producers dispatch with an exhaustive `match`, so a
/// new kind fails to compile until every call site handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataKind {
    /// Local wall-clock time, `HH:MM:SS`.
    CurrentTime,
    /// Unix timestamp in seconds.
    TimestampSeconds,
    /// Unix timestamp in milliseconds.
    TimestampMillis,
    /// Full type path of the source value.
    FullTypeName,
    /// Final path segment of the source value's type.
    ShortTypeName,
    /// Hex token identifying the source value for the duration of the call.
    IdentityToken,
}

impl MetadataKind {
    /// Whether producing this kind requires a source value.
    pub fn requires_source(self) -> bool {
        match self {
            Self::CurrentTime | Self::TimestampSeconds | Self::TimestampMillis => false,
            Self::FullTypeName | Self::ShortTypeName | Self::IdentityToken => true,
        }
    }
}

/// Type and identity of a source value, captured once per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SourceInfo {
    full_type_name: &'static str,
    identity: usize,
}

impl SourceInfo {
    /// Capture the type path and address-based identity of `source`.
    pub(crate) fn of<S>(source: &S) -> Self {
        Self {
            full_type_name: std::any::type_name::<S>(),
            identity: source as *const S as usize,
        }
    }

    fn short_type_name(&self) -> &'static str {
        self.full_type_name
            .rsplit("::")
            .next()
            .unwrap_or(self.full_type_name)
    }

    fn identity_token(&self) -> String {
        format!("{:x}", self.identity)
    }
}

/// Produce the metadata string for one kind.
///
/// # Panics
///
/// Panics if `kind` describes the source value (type or identity kinds) and
/// no source was supplied; formatting plain lines with such metadata
/// configured is a caller contract violation.
pub(crate) fn metadata_line(kind: MetadataKind, source: Option<&SourceInfo>) -> String {
    match kind {
        MetadataKind::CurrentTime => Local::now().format("%H:%M:%S").to_string(),
        MetadataKind::TimestampSeconds => Utc::now().timestamp().to_string(),
        MetadataKind::TimestampMillis => Utc::now().timestamp_millis().to_string(),
        MetadataKind::FullTypeName => require_source(source, kind).full_type_name.to_string(),
        MetadataKind::ShortTypeName => require_source(source, kind).short_type_name().to_string(),
        MetadataKind::IdentityToken => require_source(source, kind).identity_token(),
    }
}

fn require_source(source: Option<&SourceInfo>, kind: MetadataKind) -> &SourceInfo {
    match source {
        Some(info) => info,
        None => panic!(
            "metadata kind {kind:?} requires a source value; \
             use format_source or format_source_with"
        ),
    }
}
