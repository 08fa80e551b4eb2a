//! End-to-end tests for the translatable tag families (markup → tree → markup)

use weft_loom::{parse, serialize, ParseError};
use weft_text::{Component, Decoration};

#[test]
fn test_parse_fallback_tag() {
    let doc = parse("<lang_or:menu.title:'Main Menu':'<bold>Extra</bold>'>").unwrap();

    assert_eq!(
        doc,
        Component::translatable_with_fallback(
            "menu.title",
            "Main Menu",
            vec![Component::styled(
                Decoration::Bold,
                vec![Component::text("Extra")]
            )]
        )
    );
}

#[test]
fn test_serialize_fallback_tag() {
    let doc = parse("<lang_or:menu.title:'Main Menu':'<bold>Extra</bold>'>").unwrap();
    assert_eq!(
        serialize(&doc),
        "<lang_or:menu.title:Main Menu:'<bold>Extra</bold>'>"
    );
}

#[test]
fn test_missing_key_fails() {
    match parse("<tr_or>").unwrap_err() {
        ParseError::MissingArgument { tag, reason } => {
            assert_eq!(tag, "tr_or");
            assert_eq!(reason, "A translation key is required");
        }
        other => panic!("Expected MissingArgument, got {other:?}"),
    }
}

#[test]
fn test_missing_fallback_fails() {
    match parse("<tr_or:only.key>").unwrap_err() {
        ParseError::MissingArgument { tag, reason } => {
            assert_eq!(tag, "tr_or");
            assert_eq!(reason, "A fallback messages is required");
        }
        other => panic!("Expected MissingArgument, got {other:?}"),
    }
}

#[test]
fn test_two_arguments_give_empty_args() {
    let doc = parse("<lang_or:menu.title:'Main Menu'>").unwrap();
    match doc {
        Component::Translatable(tr) => {
            assert_eq!(tr.key, "menu.title");
            assert_eq!(tr.fallback.as_deref(), Some("Main Menu"));
            assert!(tr.args.is_empty());
        }
        other => panic!("Expected translatable, got {other:?}"),
    }
}

#[test]
fn test_many_arguments_each_become_one_child() {
    let doc = parse("<lang_or:k:f:one:'<italic>two</italic>':three>").unwrap();
    match doc {
        Component::Translatable(tr) => {
            assert_eq!(tr.args.len(), 3);
            assert_eq!(tr.args[0], Component::text("one"));
            assert_eq!(
                tr.args[1],
                Component::styled(Decoration::Italic, vec![Component::text("two")])
            );
            assert_eq!(tr.args[2], Component::text("three"));
        }
        other => panic!("Expected translatable, got {other:?}"),
    }
}

#[test]
fn test_with_argument_may_hold_multiple_roots() {
    let doc = parse("<lang:k:'a<bold>b</bold>'>").unwrap();
    match doc {
        Component::Translatable(tr) => {
            assert_eq!(
                tr.args[0],
                Component::group(vec![
                    Component::text("a"),
                    Component::styled(Decoration::Bold, vec![Component::text("b")]),
                ])
            );
        }
        other => panic!("Expected translatable, got {other:?}"),
    }
}

#[test]
fn test_plain_tag_has_no_fallback() {
    let doc = parse("<lang:menu.title>").unwrap();
    assert_eq!(doc, Component::translatable("menu.title", vec![]));
    assert_eq!(serialize(&doc), "<lang:menu.title>");
}

#[test]
fn test_nested_translatable_inside_with_argument() {
    let doc = parse("<lang_or:outer.key:Outer:'<lang:inner.key>'>").unwrap();
    match &doc {
        Component::Translatable(tr) => {
            assert_eq!(tr.args[0], Component::translatable("inner.key", vec![]));
        }
        other => panic!("Expected translatable, got {other:?}"),
    }
    assert_eq!(
        serialize(&doc),
        "<lang_or:outer.key:Outer:'<lang:inner.key>'>"
    );
}

#[test]
fn test_fallback_tag_inside_running_text() {
    let doc = parse("Welcome to <lang_or:menu.title:'Main Menu'>!").unwrap();
    assert_eq!(
        doc,
        Component::group(vec![
            Component::text("Welcome to "),
            Component::translatable_with_fallback("menu.title", "Main Menu", vec![]),
            Component::text("!"),
        ])
    );
}
