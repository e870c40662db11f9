//! End-to-end formatting scenarios through the public API.

use prettybox::{
    BoxConfig, BoxFormatter, BoxSource, CALL_FALLBACK_WARNING, INSTANCE_FALLBACK_WARNING,
    MetadataKind,
};

const SEP: &str = if cfg!(windows) { "\r\n" } else { "\n" };

fn lines_of(text: &str) -> Vec<&str> {
    text.split(SEP).collect()
}

struct DeployReport {
    service: &'static str,
    healthy: bool,
}

impl BoxSource for DeployReport {
    fn to_lines(&self) -> Vec<String> {
        vec![
            format!("service: {}", self.service),
            format!("healthy: {}", self.healthy),
        ]
    }
}

#[test]
fn wrapped_box_hugs_the_longest_line() {
    let formatter = BoxFormatter::new();
    let out = formatter.format(["ab", "abcdefgh"]);
    assert_eq!(
        lines_of(&out),
        vec![
            "┌──────────┐",
            "│ ab       │",
            "│ abcdefgh │",
            "└──────────┘",
        ]
    );
}

#[test]
fn fixed_width_box_spans_eighty_columns() {
    let formatter = BoxFormatter::new();
    let out = formatter.format_with(
        ["hello"],
        &BoxConfig::builder().wrap_content(false).build(),
    );
    let lines = lines_of(&out);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], format!("┌{}┐", "─".repeat(78)));
    assert_eq!(lines[1], format!("│ hello{}│", " ".repeat(72)));
    assert_eq!(lines[2], format!("└{}┘", "─".repeat(78)));
    for line in lines {
        assert_eq!(line.chars().count(), 80);
    }
}

#[test]
fn over_wide_line_reflows_into_chunks() {
    let formatter = BoxFormatter::new();
    let out = formatter.format(["x".repeat(77)]);
    let lines = lines_of(&out);
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[1], format!("│ {} │", "x".repeat(76)));
    assert_eq!(lines[2], format!("│ x{}│", " ".repeat(76)));
}

#[test]
fn empty_lines_become_section_breaks() {
    let formatter = BoxFormatter::new();
    let out = formatter.format(["before", "", "after"]);
    let lines = lines_of(&out);
    assert_eq!(lines[2], format!("├{}┤", "┄".repeat(8)));
}

#[test]
fn spacing_composes_around_the_border() {
    let mut formatter = BoxFormatter::new();
    formatter.set_configuration(
        &BoxConfig::builder()
            .horizontal_margin(2)
            .margin_top(1)
            .padding_top(1)
            .build(),
    );
    let out = formatter.format(["hi"]);
    assert_eq!(
        lines_of(&out),
        vec![
            "",
            "  ┌────┐  ",
            "  │    │  ",
            "  │ hi │  ",
            "  └────┘  ",
        ]
    );
}

#[test]
fn source_metadata_header_and_footer() {
    let report = DeployReport {
        service: "ingest",
        healthy: true,
    };
    let mut formatter = BoxFormatter::new();
    formatter.set_configuration(
        &BoxConfig::builder()
            .header_metadata([MetadataKind::ShortTypeName, MetadataKind::IdentityToken])
            .footer_metadata([MetadataKind::TimestampSeconds])
            .build(),
    );
    let out = formatter.format_source(&report);
    let lines = lines_of(&out);

    // Header rows in configured order, then a section break.
    assert!(lines[1].contains("DeployReport"));
    let identity = lines[2].trim_matches(['│', ' ']);
    assert!(!identity.is_empty());
    assert!(identity.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(lines[3].starts_with('├'));

    assert!(lines[4].contains("service: ingest"));
    assert!(lines[5].contains("healthy: true"));

    // Footer: section break, then the timestamp row.
    assert!(lines[6].starts_with('├'));
    let stamp = lines[7].trim_matches(['│', ' ']);
    assert!(stamp.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn full_type_name_row_carries_the_module_path() {
    let report = DeployReport {
        service: "ingest",
        healthy: false,
    };
    let formatter = BoxFormatter::new();
    let out = formatter.format_source_with(
        &report,
        &BoxConfig::builder()
            .header_metadata([MetadataKind::FullTypeName])
            .build(),
    );
    assert!(out.contains("::DeployReport"));
}

#[test]
#[should_panic(expected = "requires a source value")]
fn identity_metadata_without_a_source_panics() {
    let formatter = BoxFormatter::new();
    formatter.format_with(
        ["hi"],
        &BoxConfig::builder()
            .header_metadata([MetadataKind::IdentityToken])
            .build(),
    );
}

#[test]
fn instance_fallback_warns_on_every_call_until_corrected() {
    let mut formatter = BoxFormatter::new();
    formatter.set_configuration(
        &BoxConfig::builder()
            .chars_per_line(2)
            .horizontal_padding(1)
            .build(),
    );

    for _ in 0..2 {
        let out = formatter.format(["hi"]);
        assert_eq!(lines_of(&out)[0], INSTANCE_FALLBACK_WARNING);
        assert!(out.contains("│ hi │"));
    }

    formatter.set_configuration(&BoxConfig::default());
    assert!(!formatter.format(["hi"]).contains("WARNING"));
}

#[test]
fn per_call_fallback_keeps_the_instance_configuration() {
    let mut formatter = BoxFormatter::new();
    formatter.set_configuration(&BoxConfig::builder().chars_per_line(20).build());

    let out = formatter.format_with(
        ["hi"],
        &BoxConfig::builder().chars_per_line(3).build(),
    );
    assert_eq!(lines_of(&out)[0], CALL_FALLBACK_WARNING);

    // The instance configuration survives and the next call is clean.
    assert_eq!(formatter.configuration().chars_per_line(), Some(20));
    assert!(!formatter.format(["hi"]).contains("WARNING"));
}

#[test]
fn prefix_newline_sits_between_warnings_and_the_box() {
    let formatter = BoxFormatter::new();
    let out = formatter.format_with(
        ["hi"],
        &BoxConfig::builder()
            .prefix_with_newline(true)
            .chars_per_line(2)
            .build(),
    );
    let lines = lines_of(&out);
    assert_eq!(lines[0], CALL_FALLBACK_WARNING);
    // Fallback config has no prefix newline, so the border follows directly.
    assert!(lines[1].starts_with('┌'));
}

#[test]
fn open_sided_log_box() {
    let mut formatter = BoxFormatter::new();
    formatter.set_configuration(
        &BoxConfig::builder()
            .border_right(false)
            .wrap_content(false)
            .chars_per_line(30)
            .build(),
    );
    let out = formatter.format(["request accepted", "id=42"]);
    let lines = lines_of(&out);
    // 30 - 1 border = 29 interior columns.
    assert_eq!(lines[0], format!("┌{}", "─".repeat(29)));
    assert_eq!(lines[1], format!("│ request accepted{}", " ".repeat(12)));
    assert_eq!(lines[2], format!("│ id=42{}", " ".repeat(23)));
    assert_eq!(lines[3], format!("└{}", "─".repeat(29)));
}
