//! End-to-end tests for decoration tags

use weft_loom::{parse, serialize, ParseError};
use weft_text::{Component, Decoration};

#[test]
fn test_each_decoration_round_trips() {
    for (markup, decoration) in [
        ("<bold>x</bold>", Decoration::Bold),
        ("<italic>x</italic>", Decoration::Italic),
        ("<underlined>x</underlined>", Decoration::Underlined),
        ("<strikethrough>x</strikethrough>", Decoration::Strikethrough),
    ] {
        let doc = parse(markup).unwrap();
        assert_eq!(
            doc,
            Component::styled(decoration, vec![Component::text("x")])
        );
        assert_eq!(serialize(&doc), markup);
    }
}

#[test]
fn test_aliases_collapse_to_canonical_names() {
    for (alias, canonical) in [
        ("<b>x</b>", "<bold>x</bold>"),
        ("<i>x</i>", "<italic>x</italic>"),
        ("<em>x</em>", "<italic>x</italic>"),
        ("<u>x</u>", "<underlined>x</underlined>"),
        ("<st>x</st>", "<strikethrough>x</strikethrough>"),
    ] {
        assert_eq!(serialize(&parse(alias).unwrap()), canonical);
    }
}

#[test]
fn test_nested_decorations() {
    let doc = parse("<bold>a<italic>b</italic>c</bold>").unwrap();
    assert_eq!(
        doc,
        Component::styled(
            Decoration::Bold,
            vec![
                Component::text("a"),
                Component::styled(Decoration::Italic, vec![Component::text("b")]),
                Component::text("c"),
            ]
        )
    );
    assert_eq!(serialize(&doc), "<bold>a<italic>b</italic>c</bold>");
}

#[test]
fn test_decoration_rejects_arguments() {
    match parse("<bold:nope>x</bold>").unwrap_err() {
        ParseError::UnexpectedArgument { tag } => assert_eq!(tag, "bold"),
        other => panic!("Expected UnexpectedArgument, got {other:?}"),
    }
}

#[test]
fn test_empty_body_round_trips() {
    let doc = parse("<bold></bold>").unwrap();
    assert_eq!(doc, Component::styled(Decoration::Bold, vec![]));
    assert_eq!(serialize(&doc), "<bold></bold>");
}
