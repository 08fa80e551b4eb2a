//! Round-trip and canonicalization tests for the whole codec
//!
//! These cover the cross-cutting guarantees: every alias serializes back to
//! canonical names, and one parse/serialize pass is a fixed point for any
//! input that parses at all.

use once_cell::sync::Lazy;
use proptest::prelude::*;

use weft_loom::{parse_with, serialize_with, ParseOptions, TagRegistry};
use weft_text::{Component, Decoration};

static REGISTRY: Lazy<TagRegistry> = Lazy::new(TagRegistry::standard);

fn canonicalize(input: &str) -> String {
    let doc = parse_with(input, &REGISTRY, ParseOptions::default())
        .unwrap_or_else(|e| panic!("Failed to parse {input:?}: {e}"));
    serialize_with(&doc, &REGISTRY)
}

#[test]
fn test_every_alias_canonicalizes_identically() {
    let canonical = "<lang_or:menu.title:Main Menu:'<bold>Extra</bold>'>";

    for alias in ["lang_or", "translate_or", "tr_or", "LANG_OR", "Tr_Or"] {
        let input = format!("<{alias}:menu.title:'Main Menu':'<bold>Extra</bold>'>");
        assert_eq!(canonicalize(&input), canonical, "via alias {alias}");
    }
}

#[test]
fn test_canonicalization_normalizes_quoting() {
    // Unnecessary quotes are dropped, necessary ones are single quotes.
    assert_eq!(canonicalize("<lang_or:k:\"f\">"), "<lang_or:k:f>");
    assert_eq!(canonicalize("<lang_or:k:\"a: b\">"), "<lang_or:k:'a: b'>");
}

#[test]
fn test_canonicalization_is_idempotent_on_samples() {
    let samples = [
        "",
        "plain text",
        "a < b and 2<3",
        "<b>bold</b> outside <i>italic</i>",
        "<bold>never closed",
        "<tr_or:menu.title:'Main Menu'>",
        "<lang_or:k:f:'<st>deep</st>':plain>",
        "text with 'quotes' and \"double\" and \\ slash",
    ];

    for sample in samples {
        let once = canonicalize(sample);
        let twice = canonicalize(&once);
        assert_eq!(once, twice, "for input {sample:?}");
    }
}

#[test]
fn test_kitchen_sink_canonical_form() {
    let input = "Hello <b>big</b> <tr_or:menu.title:'Main Menu':'<i>Extra</i>'> and 2<3";
    insta::assert_snapshot!(
        canonicalize(input),
        @r"Hello <bold>big</bold> <lang_or:menu.title:Main Menu:'<italic>Extra</italic>'> and 2\<3"
    );
}

fn with_arg() -> impl Strategy<Value = Component> {
    prop_oneof![
        "[ -~]{0,12}".prop_map(Component::text),
        "[a-z ]{1,8}".prop_map(|s| Component::styled(
            Decoration::Bold,
            vec![Component::text(s)]
        )),
        "[a-z][a-z0-9._]{0,11}".prop_map(|key| Component::translatable(key, vec![])),
    ]
}

proptest! {
    // Any translatable-with-fallback tree built from keys, fallbacks and
    // nested argument components survives markup and back unchanged.
    #[test]
    fn prop_component_round_trips(
        key in "[a-z][a-z0-9._]{0,11}",
        fallback in "[ -~]{0,16}",
        args in proptest::collection::vec(with_arg(), 0..4),
    ) {
        let component = Component::translatable_with_fallback(key, fallback, args);
        let markup = serialize_with(&component, &REGISTRY);

        let parsed = parse_with(&markup, &REGISTRY, ParseOptions::default()).unwrap();
        prop_assert_eq!(&parsed, &component);
        prop_assert_eq!(serialize_with(&parsed, &REGISTRY), markup);
    }

    // serialize(parse(_)) is a fixed point for anything that parses.
    #[test]
    fn prop_canonicalization_is_idempotent(text in "[ -~]{0,40}") {
        if let Ok(doc) = parse_with(&text, &REGISTRY, ParseOptions::default()) {
            let once = serialize_with(&doc, &REGISTRY);
            let twice = canonicalize(&once);
            prop_assert_eq!(once, twice);
        }
    }
}
