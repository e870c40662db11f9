#![forbid(unsafe_code)]

//! Width arithmetic for a resolved configuration.
//!
//! Two derived widths drive rendering:
//! - [`Layout::max_content_width`] - columns available for text only.
//! - [`Layout::max_line_width`] - the border-to-border span, i.e. padding
//!   plus content. Padding is deliberately not subtracted here; the
//!   fixed-width rendering path fills this whole span.
//!
//! A configuration whose usable content width is not positive is
//! geometrically impossible and is rejected with [`LayoutError`].

use std::fmt;

use crate::config::{BoxConfig, ResolvedConfig};

/// Per-side spacing, in columns (left/right) or rows (top/bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl Sides {
    /// Equal spacing on all four sides.
    pub const fn all(val: usize) -> Self {
        Self {
            left: val,
            right: val,
            top: val,
            bottom: val,
        }
    }

    /// Total horizontal spacing (left + right).
    pub const fn horizontal_total(&self) -> usize {
        self.left + self.right
    }
}

/// Derived widths for one resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Columns available for text between padding.
    pub max_content_width: usize,
    /// Columns between the vertical borders (padding + content).
    pub max_line_width: usize,
}

impl Layout {
    /// Derive the layout for a configuration resolved over the compiled
    /// defaults.
    pub fn for_config(cfg: &BoxConfig) -> Result<Self, LayoutError> {
        let layered = BoxConfig::compiled_defaults().merge(cfg);
        Self::of(&ResolvedConfig::from_layered(&layered))
    }

    /// Derive the layout for a resolved configuration, rejecting
    /// configurations that leave no room for content.
    pub(crate) fn of(cfg: &ResolvedConfig) -> Result<Self, LayoutError> {
        let content = signed_content_width(cfg);
        if content <= 0 {
            return Err(LayoutError::NoUsableWidth {
                content_width: content,
            });
        }
        // line width = content + padding, so it is positive whenever the
        // content width is.
        let line = content + cfg.padding.horizontal_total() as i64;
        Ok(Self {
            max_content_width: content as usize,
            max_line_width: line as usize,
        })
    }
}

/// Text columns left once padding, margin, and vertical borders are taken
/// out of the total width budget. May be zero or negative.
fn signed_content_width(cfg: &ResolvedConfig) -> i64 {
    cfg.chars_per_line as i64
        - cfg.padding.horizontal_total() as i64
        - cfg.margin.horizontal_total() as i64
        - cfg.borders.vertical_count() as i64
}

/// A geometrically impossible configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// Padding, margin, and borders consume the entire width budget.
    NoUsableWidth {
        /// The computed content width (zero or negative).
        content_width: i64,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoUsableWidth { content_width } => write!(
                f,
                "no usable content width: padding, margin, and borders leave \
                 {content_width} columns"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
