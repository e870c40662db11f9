#![forbid(unsafe_code)]

//! The formatter instance: cached resolved configuration, derived layout,
//! and the public formatting surface.

use crate::BoxSource;
use crate::config::{BoxConfig, ResolvedConfig};
use crate::content;
use crate::layout::Layout;
use crate::metadata::SourceInfo;
use crate::render;

/// Leading warning when the instance-level configuration was invalid and
/// the compiled defaults are in effect.
pub const INSTANCE_FALLBACK_WARNING: &str =
    "WARNING: invalid instance-level configuration, using library defaults";

/// Leading warning when a per-call override was invalid and the instance
/// configuration was used for that call.
pub const CALL_FALLBACK_WARNING: &str =
    "WARNING: invalid per-call configuration, using instance configuration";

/// Draws boxes around text content.
///
/// The formatter caches its instance-level configuration together with the
/// layout derived from it; [`BoxFormatter::set_configuration`] replaces both
/// in one step, so a reader never observes a configuration paired with stale
/// widths. Mutation requires `&mut self`, which is the exclusion guarantee;
/// to share one formatter across threads, wrap it in a lock.
///
/// # Example
/// ```
/// use prettybox::{BoxConfig, BoxFormatter};
///
/// let formatter = BoxFormatter::new();
/// let boxed = formatter.format(["hello"]);
/// assert_eq!(boxed, "┌───────┐\n│ hello │\n└───────┘");
///
/// let mut formatter = BoxFormatter::new();
/// formatter.set_configuration(&BoxConfig::builder().border_bottom(false).build());
/// assert!(!formatter.format(["hello"]).contains('└'));
/// ```
#[derive(Debug, Clone)]
pub struct BoxFormatter {
    /// Instance-level configuration, fully resolved over compiled defaults.
    config: BoxConfig,
    resolved: ResolvedConfig,
    layout: Layout,
    /// The last `set_configuration` supplied a geometrically impossible
    /// configuration; `config`/`layout` hold the compiled defaults until it
    /// is corrected.
    instance_fallback: bool,
}

impl BoxFormatter {
    /// A formatter using the compiled defaults.
    #[must_use]
    pub fn new() -> Self {
        let (config, resolved, layout) = default_state();
        Self {
            config,
            resolved,
            layout,
            instance_fallback: false,
        }
    }

    /// Replace the instance-level configuration.
    ///
    /// `cfg` is merged over the compiled defaults field by field, then
    /// validated. An invalid result does not error: the formatter falls back
    /// to the compiled defaults for all subsequent calls, and every
    /// [`format`](Self::format) emits a leading warning line until a valid
    /// configuration is set.
    pub fn set_configuration(&mut self, cfg: &BoxConfig) {
        let merged = BoxConfig::compiled_defaults().merge(cfg);
        let resolved = ResolvedConfig::from_layered(&merged);
        match Layout::of(&resolved) {
            Ok(layout) => {
                self.config = merged;
                self.resolved = resolved;
                self.layout = layout;
                self.instance_fallback = false;
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    "invalid instance-level configuration, falling back to defaults"
                );
                let (config, resolved, layout) = default_state();
                self.config = config;
                self.resolved = resolved;
                self.layout = layout;
                self.instance_fallback = true;
            }
        }
    }

    /// The currently effective, fully resolved instance-level configuration.
    pub fn configuration(&self) -> &BoxConfig {
        &self.config
    }

    /// Draw a box around `lines` using the instance configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration requests type- or identity-based
    /// metadata; those require [`format_source`](Self::format_source).
    pub fn format<I, S>(&self, lines: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.format_inner(collect_lines(lines), None, None)
    }

    /// Draw a box around `lines`, layering `overrides` over the instance
    /// configuration for this call only.
    ///
    /// An invalid override does not error and does not touch instance
    /// state: the call falls back to the instance configuration and the
    /// output leads with a warning line.
    ///
    /// # Panics
    ///
    /// Panics if the effective configuration requests type- or
    /// identity-based metadata; those require
    /// [`format_source_with`](Self::format_source_with).
    pub fn format_with<I, S>(&self, lines: I, overrides: &BoxConfig) -> String
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.format_inner(collect_lines(lines), Some(overrides), None)
    }

    /// Draw a box around the lines produced by `source`. The source value
    /// also backs type- and identity-based metadata.
    pub fn format_source<S: BoxSource>(&self, source: &S) -> String {
        self.format_inner(source.to_lines(), None, Some(SourceInfo::of(source)))
    }

    /// [`format_source`](Self::format_source) with a per-call override.
    pub fn format_source_with<S: BoxSource>(&self, source: &S, overrides: &BoxConfig) -> String {
        self.format_inner(
            source.to_lines(),
            Some(overrides),
            Some(SourceInfo::of(source)),
        )
    }

    fn format_inner(
        &self,
        lines: Vec<String>,
        overrides: Option<&BoxConfig>,
        source: Option<SourceInfo>,
    ) -> String {
        tracing::debug!(lines = lines.len(), "formatting box");

        let mut warnings: Vec<&str> = Vec::new();
        if self.instance_fallback {
            warnings.push(INSTANCE_FALLBACK_WARNING);
        }

        let call_state;
        let (resolved, layout) = match overrides {
            None => (&self.resolved, self.layout),
            Some(overlay) => {
                let merged = self.config.merge(overlay);
                let resolved = ResolvedConfig::from_layered(&merged);
                match Layout::of(&resolved) {
                    Ok(layout) => {
                        call_state = resolved;
                        (&call_state, layout)
                    }
                    Err(err) => {
                        tracing::warn!(
                            error = %err,
                            "invalid per-call configuration, using instance configuration"
                        );
                        warnings.push(CALL_FALLBACK_WARNING);
                        (&self.resolved, self.layout)
                    }
                }
            }
        };

        let prepared = content::prepare(lines, resolved, &layout, source.as_ref());
        render::render(&prepared, resolved, &warnings)
    }
}

impl Default for BoxFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn default_state() -> (BoxConfig, ResolvedConfig, Layout) {
    let config = BoxConfig::compiled_defaults();
    let resolved = ResolvedConfig::from_layered(&config);
    // The compiled defaults leave 76 usable columns; this cannot fail.
    let layout = match Layout::of(&resolved) {
        Ok(layout) => layout,
        Err(_) => unreachable!("compiled defaults form a valid layout"),
    };
    (config, resolved, layout)
}

fn collect_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    lines.into_iter().map(Into::into).collect()
}
