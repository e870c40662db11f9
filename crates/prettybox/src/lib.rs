#![forbid(unsafe_code)]

//! Box-drawing text formatter for console and log output.
//!
//! Wraps arbitrary text content in a box of Unicode line-drawing characters,
//! with configurable borders, padding, margins, and generated header/footer
//! metadata. Settings are layered: compiled defaults, then the formatter's
//! instance configuration, then an optional per-call override; each layer
//! overrides the one below field by field.
//!
//! - [`BoxFormatter`] - the formatting entry point
//! - [`BoxConfig`] / [`BoxConfigBuilder`] - one layer of settings
//! - [`MetadataKind`] - generated header/footer rows
//! - [`BoxSource`] - anything that can supply content lines
//!
//! # Example
//! ```
//! use prettybox::{BoxConfig, BoxFormatter};
//!
//! let formatter = BoxFormatter::new();
//! let out = formatter.format(["status: ok", "", "3 checks passed"]);
//! assert_eq!(out, "\
//! ┌─────────────────┐
//! │ status: ok      │
//! ├┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┄┤
//! │ 3 checks passed │
//! └─────────────────┘");
//!
//! // Fixed-width box, no bottom border, for this call only.
//! let out = formatter.format_with(
//!     ["status: ok"],
//!     &BoxConfig::builder()
//!         .chars_per_line(24)
//!         .wrap_content(false)
//!         .border_bottom(false)
//!         .build(),
//! );
//! assert_eq!(out, "\
//! ┌──────────────────────┐
//! │ status: ok           │");
//! ```

pub mod borders;
pub mod config;
pub mod layout;
pub mod metadata;

mod content;
mod formatter;
mod render;

pub use borders::{Borders, GlyphSet};
pub use config::{BoxConfig, BoxConfigBuilder};
pub use formatter::{BoxFormatter, CALL_FALLBACK_WARNING, INSTANCE_FALLBACK_WARNING};
pub use layout::{Layout, LayoutError, Sides};
pub use metadata::MetadataKind;

/// A value that can supply content lines to format.
///
/// Implement this to pass domain objects straight to
/// [`BoxFormatter::format_source`]; the source value also backs the type-
/// and identity-based [`MetadataKind`]s.
///
/// # Example
/// ```
/// use prettybox::{BoxFormatter, BoxSource};
///
/// struct Report {
///     passed: usize,
///     failed: usize,
/// }
///
/// impl BoxSource for Report {
///     fn to_lines(&self) -> Vec<String> {
///         vec![
///             format!("passed: {}", self.passed),
///             format!("failed: {}", self.failed),
///         ]
///     }
/// }
///
/// let report = Report { passed: 12, failed: 0 };
/// let out = BoxFormatter::new().format_source(&report);
/// assert!(out.contains("passed: 12"));
/// ```
pub trait BoxSource {
    /// Produce the ordered content lines for this value.
    fn to_lines(&self) -> Vec<String>;
}
