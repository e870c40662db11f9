#![forbid(unsafe_code)]

//! Content preparation: metadata expansion, reflow, and per-call width
//! selection.
//!
//! All measurement is in display cells, so CJK and emoji content lays out
//! correctly, and reflow never splits inside a grapheme cluster.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::config::ResolvedConfig;
use crate::layout::Layout;
use crate::metadata::{SourceInfo, metadata_line};

/// The formatting task state for one call: augmented lines plus the widths
/// chosen for this box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PreparedContent {
    pub lines: Vec<String>,
    /// Columns the widest content line may occupy in this box.
    pub content_width: usize,
    /// Columns between the vertical borders in this box.
    pub line_width: usize,
}

/// Expand metadata rows, reflow over-wide lines, and pick the box widths.
///
/// Order matters: header and footer metadata join the line set first so
/// they are subject to the same reflow and width accounting as the content.
pub(crate) fn prepare(
    lines: Vec<String>,
    cfg: &ResolvedConfig,
    layout: &Layout,
    source: Option<&SourceInfo>,
) -> PreparedContent {
    let mut lines = lines;

    if !cfg.header_metadata.is_empty() {
        let mut augmented: Vec<String> = cfg
            .header_metadata
            .iter()
            .map(|&kind| metadata_line(kind, source))
            .collect();
        augmented.push(String::new());
        augmented.append(&mut lines);
        lines = augmented;
    }
    if !cfg.footer_metadata.is_empty() {
        lines.push(String::new());
        lines.extend(
            cfg.footer_metadata
                .iter()
                .map(|&kind| metadata_line(kind, source)),
        );
    }

    let mut max_width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    if max_width > layout.max_content_width {
        lines = reflow(lines, layout.max_content_width);
        max_width = layout.max_content_width;
    }

    let (content_width, line_width) = if cfg.wrap_content {
        // The box hugs the content; the precomputed line width is ignored.
        (max_width, max_width + cfg.padding.horizontal_total())
    } else {
        (layout.max_content_width, layout.max_line_width)
    };

    PreparedContent {
        lines,
        content_width,
        line_width,
    }
}

/// Split every over-wide line into chunks of at most `max_width` cells;
/// lines at or under the limit pass through unchanged.
fn reflow(lines: Vec<String>, max_width: usize) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    for line in lines {
        if line.width() <= max_width {
            out.push(line);
        } else {
            split_into_chunks(&line, max_width, &mut out);
        }
    }
    out
}

/// Chunk a line at grapheme boundaries, filling each chunk up to
/// `max_width` cells.
fn split_into_chunks(line: &str, max_width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;

    for grapheme in line.graphemes(true) {
        let grapheme_width = grapheme.width();
        if current_width + grapheme_width > max_width && !current.is_empty() {
            out.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push_str(grapheme);
        current_width += grapheme_width;
    }

    if !current.is_empty() {
        out.push(current);
    }
}
