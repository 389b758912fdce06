use super::*;

#[test]
fn plain_text_is_one_regular_run() {
    let c = parse_content("Hello world").unwrap();
    assert_eq!(c.runs.len(), 1);
    assert_eq!(c.runs[0].variant, FontVariant::REGULAR);
    assert_eq!(c.visible_len(), 11);
}

#[test]
fn span_styles_set_weight_and_italic() {
    let c = parse_content(
        r#"Plain <span style="font-weight: 700">bold</span> <span style="font-style: italic">it</span>"#,
    )
    .unwrap();
    assert_eq!(
        c.requested_variants(),
        vec![
            FontVariant::REGULAR,
            FontVariant::new(false, 700),
            FontVariant::new(true, 400),
        ]
    );
    assert_eq!(c.plain_text(), "Plain bold it");
}

#[test]
fn nested_tags_inherit_styles() {
    let c = parse_content(r#"<strong><em>both</em></strong>"#).unwrap();
    assert_eq!(c.requested_variants(), vec![FontVariant::new(true, 700)]);
}

#[test]
fn whitespace_only_runs_request_nothing() {
    let c = parse_content(r#"<span style="font-weight:900"> </span>Body"#).unwrap();
    assert_eq!(c.requested_variants(), vec![FontVariant::REGULAR]);
}

#[test]
fn entities_and_unclosed_breaks_are_accepted() {
    let c = parse_content("Tom &amp; Jerry<br>&#233;t&eacute;").unwrap_err();
    assert!(matches!(c, StoryError::Validation(_)));
    let c = parse_content("Tom &amp; Jerry<br>&#233;&nbsp;!").unwrap();
    assert_eq!(c.plain_text(), "Tom & Jerry\n\u{e9}\u{a0}!");
}

#[test]
fn empty_content_has_no_runs() {
    let c = parse_content("").unwrap();
    assert!(c.runs.is_empty());
    assert_eq!(c.visible_len(), 0);
    assert!(c.requested_variants().is_empty());
}

#[test]
fn unterminated_comment_fails() {
    assert!(parse_content("text <!-- never closed").is_err());
}

#[test]
fn common_named_entities_decode() {
    let content = parse_content("Wait&hellip; it&rsquo;s &mdash; here").unwrap();
    assert_eq!(content.plain_text(), "Wait\u{2026} it\u{2019}s \u{2014} here");
}

#[test]
fn bare_ampersand_is_text() {
    let content = parse_content("Tom & Jerry").unwrap();
    assert_eq!(content.plain_text(), "Tom & Jerry");
    assert_eq!(content.visible_len(), 11);
}

#[test]
fn unknown_named_entity_counts_as_one_char() {
    let content = parse_content("&frac34;").unwrap();
    assert_eq!(content.visible_len(), 1);
    assert_eq!(content.requested_variants(), vec![FontVariant::REGULAR]);
}
