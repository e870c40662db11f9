#![forbid(unsafe_code)]

//! Layered box configuration.
//!
//! A [`BoxConfig`] is a partially-specified settings record: every field is
//! tri-state (`None` = "inherit from the next layer down", `Some(_)` = an
//! explicit value, including explicit `false` and `0`). Effective settings
//! are produced by layering compiled defaults, the formatter's instance
//! configuration, and an optional per-call override with [`BoxConfig::merge`];
//! later layers win field by field, never object by object.
//!
//! # Example
//! ```
//! use prettybox::BoxConfig;
//!
//! let instance = BoxConfig::builder().chars_per_line(60).build();
//! let per_call = BoxConfig::builder().border_bottom(false).build();
//!
//! let merged = instance.merge(&per_call);
//! assert_eq!(merged.chars_per_line(), Some(60));
//! assert_eq!(merged.border_bottom(), Some(false));
//! assert_eq!(merged.wrap_content(), None);
//! ```

use crate::borders::Borders;
use crate::layout::Sides;
use crate::metadata::MetadataKind;

const DEFAULT_PREFIX_WITH_NEWLINE: bool = false;
const DEFAULT_CHARS_PER_LINE: usize = 80;
const DEFAULT_WRAP_CONTENT: bool = true;
const DEFAULT_BORDER: bool = true;
const DEFAULT_HORIZONTAL_PADDING: usize = 1;
const DEFAULT_VERTICAL_PADDING: usize = 0;
const DEFAULT_MARGIN: usize = 0;

/// A partially-specified box configuration; one layer of the stack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoxConfig {
    prefix_with_newline: Option<bool>,
    chars_per_line: Option<usize>,
    wrap_content: Option<bool>,
    border_left: Option<bool>,
    border_right: Option<bool>,
    border_top: Option<bool>,
    border_bottom: Option<bool>,
    padding_left: Option<usize>,
    padding_right: Option<usize>,
    padding_top: Option<usize>,
    padding_bottom: Option<usize>,
    margin_left: Option<usize>,
    margin_right: Option<usize>,
    margin_top: Option<usize>,
    margin_bottom: Option<usize>,
    header_metadata: Option<Vec<MetadataKind>>,
    footer_metadata: Option<Vec<MetadataKind>>,
}

impl BoxConfig {
    /// Start building a configuration with every field unset.
    #[must_use]
    pub fn builder() -> BoxConfigBuilder {
        BoxConfigBuilder::default()
    }

    /// The compiled defaults; every field is populated, so any stack that
    /// starts from this layer resolves to concrete values.
    #[must_use]
    pub fn compiled_defaults() -> Self {
        Self::builder()
            .prefix_with_newline(DEFAULT_PREFIX_WITH_NEWLINE)
            .chars_per_line(DEFAULT_CHARS_PER_LINE)
            .wrap_content(DEFAULT_WRAP_CONTENT)
            .borders(DEFAULT_BORDER)
            .vertical_padding(DEFAULT_VERTICAL_PADDING)
            .horizontal_padding(DEFAULT_HORIZONTAL_PADDING)
            .margin(DEFAULT_MARGIN)
            .header_metadata([])
            .footer_metadata([])
            .build()
    }

    /// Layer `overlay` on top of `self`: for each field the overlay defines,
    /// take its value; otherwise keep this layer's.
    #[must_use]
    pub fn merge(&self, overlay: &BoxConfig) -> BoxConfig {
        BoxConfig {
            prefix_with_newline: overlay.prefix_with_newline.or(self.prefix_with_newline),
            chars_per_line: overlay.chars_per_line.or(self.chars_per_line),
            wrap_content: overlay.wrap_content.or(self.wrap_content),
            border_left: overlay.border_left.or(self.border_left),
            border_right: overlay.border_right.or(self.border_right),
            border_top: overlay.border_top.or(self.border_top),
            border_bottom: overlay.border_bottom.or(self.border_bottom),
            padding_left: overlay.padding_left.or(self.padding_left),
            padding_right: overlay.padding_right.or(self.padding_right),
            padding_top: overlay.padding_top.or(self.padding_top),
            padding_bottom: overlay.padding_bottom.or(self.padding_bottom),
            margin_left: overlay.margin_left.or(self.margin_left),
            margin_right: overlay.margin_right.or(self.margin_right),
            margin_top: overlay.margin_top.or(self.margin_top),
            margin_bottom: overlay.margin_bottom.or(self.margin_bottom),
            header_metadata: overlay
                .header_metadata
                .clone()
                .or_else(|| self.header_metadata.clone()),
            footer_metadata: overlay
                .footer_metadata
                .clone()
                .or_else(|| self.footer_metadata.clone()),
        }
    }

    /// Fold a stack of layers left to right, earliest layer first.
    #[must_use]
    pub fn merge_layers<'a>(layers: impl IntoIterator<Item = &'a BoxConfig>) -> BoxConfig {
        layers
            .into_iter()
            .fold(BoxConfig::default(), |base, layer| base.merge(layer))
    }

    /// Whether this configuration, resolved over the compiled defaults,
    /// leaves room for content.
    pub fn is_valid(&self) -> bool {
        crate::layout::Layout::for_config(self).is_ok()
    }

    pub fn prefix_with_newline(&self) -> Option<bool> {
        self.prefix_with_newline
    }
    pub fn chars_per_line(&self) -> Option<usize> {
        self.chars_per_line
    }
    pub fn wrap_content(&self) -> Option<bool> {
        self.wrap_content
    }
    pub fn border_left(&self) -> Option<bool> {
        self.border_left
    }
    pub fn border_right(&self) -> Option<bool> {
        self.border_right
    }
    pub fn border_top(&self) -> Option<bool> {
        self.border_top
    }
    pub fn border_bottom(&self) -> Option<bool> {
        self.border_bottom
    }
    pub fn padding_left(&self) -> Option<usize> {
        self.padding_left
    }
    pub fn padding_right(&self) -> Option<usize> {
        self.padding_right
    }
    pub fn padding_top(&self) -> Option<usize> {
        self.padding_top
    }
    pub fn padding_bottom(&self) -> Option<usize> {
        self.padding_bottom
    }
    pub fn margin_left(&self) -> Option<usize> {
        self.margin_left
    }
    pub fn margin_right(&self) -> Option<usize> {
        self.margin_right
    }
    pub fn margin_top(&self) -> Option<usize> {
        self.margin_top
    }
    pub fn margin_bottom(&self) -> Option<usize> {
        self.margin_bottom
    }
    pub fn header_metadata(&self) -> Option<&[MetadataKind]> {
        self.header_metadata.as_deref()
    }
    pub fn footer_metadata(&self) -> Option<&[MetadataKind]> {
        self.footer_metadata.as_deref()
    }
}

/// Consuming builder for [`BoxConfig`].
///
/// A field left untouched stays unset and inherits from the layer below
/// when merged. The grouped setters (`borders`, `padding`, `margin`, and
/// their horizontal/vertical variants) fan out to the individual per-side
/// setters, so partial overrides compose predictably.
#[derive(Debug, Clone, Default)]
pub struct BoxConfigBuilder {
    cfg: BoxConfig,
}

impl BoxConfigBuilder {
    /// Copy every field, set or unset, from an existing configuration.
    #[must_use]
    pub fn from_config(cfg: &BoxConfig) -> Self {
        Self { cfg: cfg.clone() }
    }

    /// Layer another configuration's set fields over the draft.
    #[must_use]
    pub fn apply(mut self, overlay: &BoxConfig) -> Self {
        self.cfg = self.cfg.merge(overlay);
        self
    }

    /// Emit a blank line before the box. Keeps loggers that prepend tags to
    /// the first line of a printout from splitting the top border.
    #[must_use]
    pub fn prefix_with_newline(mut self, prefix: bool) -> Self {
        self.cfg.prefix_with_newline = Some(prefix);
        self
    }

    /// Total outer width budget in columns. Horizontal padding, margin, and
    /// vertical borders are all counted inside this value.
    #[must_use]
    pub fn chars_per_line(mut self, chars: usize) -> Self {
        self.cfg.chars_per_line = Some(chars);
        self
    }

    /// `true`: shrink the box to the widest content line, capped at
    /// `chars_per_line`. `false`: fixed width of `chars_per_line`.
    #[must_use]
    pub fn wrap_content(mut self, wrap: bool) -> Self {
        self.cfg.wrap_content = Some(wrap);
        self
    }

    #[must_use]
    pub fn border_left(mut self, enabled: bool) -> Self {
        self.cfg.border_left = Some(enabled);
        self
    }

    #[must_use]
    pub fn border_right(mut self, enabled: bool) -> Self {
        self.cfg.border_right = Some(enabled);
        self
    }

    #[must_use]
    pub fn border_top(mut self, enabled: bool) -> Self {
        self.cfg.border_top = Some(enabled);
        self
    }

    #[must_use]
    pub fn border_bottom(mut self, enabled: bool) -> Self {
        self.cfg.border_bottom = Some(enabled);
        self
    }

    /// Left and right borders together.
    #[must_use]
    pub fn vertical_borders(self, enabled: bool) -> Self {
        self.border_left(enabled).border_right(enabled)
    }

    /// Top and bottom borders together.
    #[must_use]
    pub fn horizontal_borders(self, enabled: bool) -> Self {
        self.border_top(enabled).border_bottom(enabled)
    }

    /// All four borders.
    #[must_use]
    pub fn borders(self, enabled: bool) -> Self {
        self.vertical_borders(enabled).horizontal_borders(enabled)
    }

    /// Spaces between text and the left border, counted inside
    /// `chars_per_line`.
    #[must_use]
    pub fn padding_left(mut self, padding: usize) -> Self {
        self.cfg.padding_left = Some(padding);
        self
    }

    #[must_use]
    pub fn padding_right(mut self, padding: usize) -> Self {
        self.cfg.padding_right = Some(padding);
        self
    }

    /// Blank rows between the top border and the first content row.
    #[must_use]
    pub fn padding_top(mut self, padding: usize) -> Self {
        self.cfg.padding_top = Some(padding);
        self
    }

    #[must_use]
    pub fn padding_bottom(mut self, padding: usize) -> Self {
        self.cfg.padding_bottom = Some(padding);
        self
    }

    /// Left and right padding together.
    #[must_use]
    pub fn horizontal_padding(self, padding: usize) -> Self {
        self.padding_left(padding).padding_right(padding)
    }

    /// Top and bottom padding together.
    #[must_use]
    pub fn vertical_padding(self, padding: usize) -> Self {
        self.padding_top(padding).padding_bottom(padding)
    }

    /// All four paddings.
    #[must_use]
    pub fn padding(self, padding: usize) -> Self {
        self.vertical_padding(padding).horizontal_padding(padding)
    }

    /// Spaces outside the left border, counted inside `chars_per_line`.
    #[must_use]
    pub fn margin_left(mut self, margin: usize) -> Self {
        self.cfg.margin_left = Some(margin);
        self
    }

    #[must_use]
    pub fn margin_right(mut self, margin: usize) -> Self {
        self.cfg.margin_right = Some(margin);
        self
    }

    /// Blank output lines before the box.
    #[must_use]
    pub fn margin_top(mut self, margin: usize) -> Self {
        self.cfg.margin_top = Some(margin);
        self
    }

    #[must_use]
    pub fn margin_bottom(mut self, margin: usize) -> Self {
        self.cfg.margin_bottom = Some(margin);
        self
    }

    /// Left and right margin together.
    #[must_use]
    pub fn horizontal_margin(self, margin: usize) -> Self {
        self.margin_left(margin).margin_right(margin)
    }

    /// Top and bottom margin together.
    #[must_use]
    pub fn vertical_margin(self, margin: usize) -> Self {
        self.margin_top(margin).margin_bottom(margin)
    }

    /// All four margins.
    #[must_use]
    pub fn margin(self, margin: usize) -> Self {
        self.vertical_margin(margin).horizontal_margin(margin)
    }

    /// Metadata rows generated above the content, in order.
    #[must_use]
    pub fn header_metadata(mut self, kinds: impl IntoIterator<Item = MetadataKind>) -> Self {
        self.cfg.header_metadata = Some(kinds.into_iter().collect());
        self
    }

    /// Metadata rows generated below the content, in order.
    #[must_use]
    pub fn footer_metadata(mut self, kinds: impl IntoIterator<Item = MetadataKind>) -> Self {
        self.cfg.footer_metadata = Some(kinds.into_iter().collect());
        self
    }

    /// Freeze the draft.
    #[must_use]
    pub fn build(self) -> BoxConfig {
        self.cfg
    }
}

/// A fully-layered configuration condensed to concrete values.
///
/// Built from a configuration that has the compiled defaults at the bottom
/// of its stack; any field still unset falls back to the compiled default,
/// so construction is total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedConfig {
    pub prefix_with_newline: bool,
    pub chars_per_line: usize,
    pub wrap_content: bool,
    pub borders: Borders,
    pub padding: Sides,
    pub margin: Sides,
    pub header_metadata: Vec<MetadataKind>,
    pub footer_metadata: Vec<MetadataKind>,
}

impl ResolvedConfig {
    pub(crate) fn from_layered(cfg: &BoxConfig) -> Self {
        let mut borders = Borders::empty();
        borders.set(
            Borders::LEFT,
            cfg.border_left.unwrap_or(DEFAULT_BORDER),
        );
        borders.set(
            Borders::RIGHT,
            cfg.border_right.unwrap_or(DEFAULT_BORDER),
        );
        borders.set(Borders::TOP, cfg.border_top.unwrap_or(DEFAULT_BORDER));
        borders.set(
            Borders::BOTTOM,
            cfg.border_bottom.unwrap_or(DEFAULT_BORDER),
        );
        Self {
            prefix_with_newline: cfg
                .prefix_with_newline
                .unwrap_or(DEFAULT_PREFIX_WITH_NEWLINE),
            chars_per_line: cfg.chars_per_line.unwrap_or(DEFAULT_CHARS_PER_LINE),
            wrap_content: cfg.wrap_content.unwrap_or(DEFAULT_WRAP_CONTENT),
            borders,
            padding: Sides {
                left: cfg.padding_left.unwrap_or(DEFAULT_HORIZONTAL_PADDING),
                right: cfg.padding_right.unwrap_or(DEFAULT_HORIZONTAL_PADDING),
                top: cfg.padding_top.unwrap_or(DEFAULT_VERTICAL_PADDING),
                bottom: cfg.padding_bottom.unwrap_or(DEFAULT_VERTICAL_PADDING),
            },
            margin: Sides {
                left: cfg.margin_left.unwrap_or(DEFAULT_MARGIN),
                right: cfg.margin_right.unwrap_or(DEFAULT_MARGIN),
                top: cfg.margin_top.unwrap_or(DEFAULT_MARGIN),
                bottom: cfg.margin_bottom.unwrap_or(DEFAULT_MARGIN),
            },
            header_metadata: cfg.header_metadata.clone().unwrap_or_default(),
            footer_metadata: cfg.footer_metadata.clone().unwrap_or_default(),
        }
    }
}
