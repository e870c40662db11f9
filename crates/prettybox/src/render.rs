#![forbid(unsafe_code)]

//! Line emission: turns prepared content and a resolved configuration into
//! the final multi-line string.
//!
//! Rendering performs no validation; it trusts the widths chosen upstream
//! and is never reached with an invalid configuration.

use unicode_width::UnicodeWidthStr;

use crate::borders::{Borders, GlyphSet};
use crate::config::ResolvedConfig;
use crate::content::PreparedContent;

/// Platform line separator; lines are joined with no trailing separator.
pub(crate) const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

const GLYPHS: GlyphSet = GlyphSet::SQUARE;

/// Emit the output lines in order: warnings, prefix, top margin, top
/// border, top padding, content rows, bottom padding, bottom border,
/// bottom margin.
pub(crate) fn render(
    prepared: &PreparedContent,
    cfg: &ResolvedConfig,
    warnings: &[&str],
) -> String {
    let mut out: Vec<String> = Vec::new();

    for warning in warnings {
        out.push((*warning).to_string());
    }
    if cfg.prefix_with_newline {
        out.push(String::new());
    }
    for _ in 0..cfg.margin.top {
        out.push(String::new());
    }
    if cfg.borders.contains(Borders::TOP) {
        out.push(rule_row(
            cfg,
            prepared.line_width,
            GLYPHS.top_left,
            GLYPHS.top_right,
            GLYPHS.horizontal,
        ));
    }
    for _ in 0..cfg.padding.top {
        out.push(blank_interior_row(cfg, prepared.line_width));
    }
    for line in &prepared.lines {
        if line.is_empty() {
            // An empty input line is a section break, not a blank row.
            out.push(rule_row(
                cfg,
                prepared.line_width,
                GLYPHS.middle_left,
                GLYPHS.middle_right,
                GLYPHS.section_break,
            ));
        } else {
            out.push(content_row(cfg, prepared.content_width, line));
        }
    }
    for _ in 0..cfg.padding.bottom {
        out.push(blank_interior_row(cfg, prepared.line_width));
    }
    if cfg.borders.contains(Borders::BOTTOM) {
        out.push(rule_row(
            cfg,
            prepared.line_width,
            GLYPHS.bottom_left,
            GLYPHS.bottom_right,
            GLYPHS.horizontal,
        ));
    }
    for _ in 0..cfg.margin.bottom {
        out.push(String::new());
    }

    out.join(LINE_SEPARATOR)
}

/// A border or section-break row: margin, corner, `line_width` fill
/// glyphs, corner, margin.
fn rule_row(cfg: &ResolvedConfig, line_width: usize, left: char, right: char, fill: char) -> String {
    let mut row = String::new();
    push_spaces(&mut row, cfg.margin.left);
    if cfg.borders.contains(Borders::LEFT) {
        row.push(left);
    }
    for _ in 0..line_width {
        row.push(fill);
    }
    if cfg.borders.contains(Borders::RIGHT) {
        row.push(right);
    }
    push_spaces(&mut row, cfg.margin.right);
    row
}

/// A vertical-padding row: shaped like a border row but filled with
/// spaces between the vertical edges.
fn blank_interior_row(cfg: &ResolvedConfig, line_width: usize) -> String {
    let mut row = String::new();
    push_spaces(&mut row, cfg.margin.left);
    if cfg.borders.contains(Borders::LEFT) {
        row.push(GLYPHS.vertical);
    }
    push_spaces(&mut row, line_width);
    if cfg.borders.contains(Borders::RIGHT) {
        row.push(GLYPHS.vertical);
    }
    push_spaces(&mut row, cfg.margin.right);
    row
}

/// A content row: margin, edge, left padding, text, right fill up to the
/// content width plus right padding, edge, margin.
fn content_row(cfg: &ResolvedConfig, content_width: usize, line: &str) -> String {
    let mut row = String::new();
    push_spaces(&mut row, cfg.margin.left);
    if cfg.borders.contains(Borders::LEFT) {
        row.push(GLYPHS.vertical);
    }
    push_spaces(&mut row, cfg.padding.left);
    row.push_str(line);
    // content_width >= line.width() by construction in content preparation.
    push_spaces(
        &mut row,
        cfg.padding.right + content_width.saturating_sub(line.width()),
    );
    if cfg.borders.contains(Borders::RIGHT) {
        row.push(GLYPHS.vertical);
    }
    push_spaces(&mut row, cfg.margin.right);
    row
}

fn push_spaces(row: &mut String, count: usize) {
    for _ in 0..count {
        row.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoxConfig;

    fn resolve(cfg: &BoxConfig) -> ResolvedConfig {
        ResolvedConfig::from_layered(&BoxConfig::compiled_defaults().merge(cfg))
    }

    fn prepared(lines: &[&str], content_width: usize, line_width: usize) -> PreparedContent {
        PreparedContent {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            content_width,
            line_width,
        }
    }

    fn rendered_lines(text: &str) -> Vec<&str> {
        text.split(LINE_SEPARATOR).collect()
    }

    #[test]
    fn minimal_box_shape() {
        let cfg = resolve(&BoxConfig::default());
        let out = render(&prepared(&["hello"], 5, 7), &cfg, &[]);
        let lines = rendered_lines(&out);
        assert_eq!(
            lines,
            vec!["┌───────┐", "│ hello │", "└───────┘"]
        );
    }

    #[test]
    fn content_rows_fill_to_the_content_width() {
        let cfg = resolve(&BoxConfig::default());
        let out = render(&prepared(&["ab", "abcdefgh"], 8, 10), &cfg, &[]);
        let lines = rendered_lines(&out);
        assert_eq!(lines[1], "│ ab       │");
        assert_eq!(lines[2], "│ abcdefgh │");
    }

    #[test]
    fn empty_line_renders_as_a_section_break() {
        let cfg = resolve(&BoxConfig::default());
        let out = render(&prepared(&["a", "", "b"], 1, 3), &cfg, &[]);
        let lines = rendered_lines(&out);
        assert_eq!(lines[2], "├┄┄┄┤");
        assert_ne!(lines[2], "│   │");
    }

    #[test]
    fn disabled_vertical_borders_drop_edge_glyphs() {
        let cfg = resolve(&BoxConfig::builder().vertical_borders(false).build());
        let out = render(&prepared(&["hi"], 2, 4), &cfg, &[]);
        let lines = rendered_lines(&out);
        assert_eq!(lines[0], "────");
        assert_eq!(lines[1], " hi ");
        assert_eq!(lines[2], "────");
    }

    #[test]
    fn disabled_horizontal_borders_emit_no_rows() {
        let cfg = resolve(&BoxConfig::builder().horizontal_borders(false).build());
        let out = render(&prepared(&["hi"], 2, 4), &cfg, &[]);
        assert_eq!(rendered_lines(&out), vec!["│ hi │"]);
    }

    #[test]
    fn one_sided_border_keeps_its_corner_only() {
        let cfg = resolve(&BoxConfig::builder().border_right(false).build());
        let out = render(&prepared(&["hi"], 2, 4), &cfg, &[]);
        let lines = rendered_lines(&out);
        assert_eq!(lines[0], "┌────");
        assert_eq!(lines[1], "│ hi ");
        assert_eq!(lines[2], "└────");
    }

    #[test]
    fn vertical_padding_rows_flank_the_content() {
        let cfg = resolve(&BoxConfig::builder().padding_top(2).padding_bottom(1).build());
        let out = render(&prepared(&["hi"], 2, 4), &cfg, &[]);
        let lines = rendered_lines(&out);
        assert_eq!(
            lines,
            vec!["┌────┐", "│    │", "│    │", "│ hi │", "│    │", "└────┘"]
        );
    }

    #[test]
    fn horizontal_margin_pads_outside_the_border() {
        let cfg = resolve(&BoxConfig::builder().horizontal_margin(2).build());
        let out = render(&prepared(&["hi"], 2, 4), &cfg, &[]);
        let lines = rendered_lines(&out);
        assert_eq!(lines[0], "  ┌────┐  ");
        assert_eq!(lines[1], "  │ hi │  ");
    }

    #[test]
    fn vertical_margin_adds_blank_lines() {
        let cfg = resolve(&BoxConfig::builder().margin_top(1).margin_bottom(2).build());
        let out = render(&prepared(&["hi"], 2, 4), &cfg, &[]);
        let lines = rendered_lines(&out);
        assert_eq!(lines.len(), 6);
        assert!(lines[0].is_empty());
        assert!(lines[4].is_empty());
        assert!(lines[5].is_empty());
    }

    #[test]
    fn prefix_newline_leads_the_box() {
        let cfg = resolve(&BoxConfig::builder().prefix_with_newline(true).build());
        let out = render(&prepared(&["hi"], 2, 4), &cfg, &[]);
        let lines = rendered_lines(&out);
        assert!(lines[0].is_empty());
        assert_eq!(lines[1], "┌────┐");
    }

    #[test]
    fn warnings_come_before_everything() {
        let cfg = resolve(
            &BoxConfig::builder()
                .prefix_with_newline(true)
                .margin_top(1)
                .build(),
        );
        let out = render(&prepared(&["hi"], 2, 4), &cfg, &["WARNING: test"]);
        let lines = rendered_lines(&out);
        assert_eq!(lines[0], "WARNING: test");
        assert!(lines[1].is_empty());
    }

    #[test]
    fn no_trailing_separator() {
        let cfg = resolve(&BoxConfig::default());
        let out = render(&prepared(&["hi"], 2, 4), &cfg, &[]);
        assert!(!out.ends_with(LINE_SEPARATOR));
    }

    #[test]
    fn wide_content_fills_by_cells_not_bytes() {
        let cfg = resolve(&BoxConfig::default());
        let out = render(&prepared(&["你好", "ab"], 4, 6), &cfg, &[]);
        let lines = rendered_lines(&out);
        assert_eq!(lines[1], "│ 你好 │");
        assert_eq!(lines[2], "│ ab   │");
    }
}
