//! Translatable message tags
//!
//! Two tag families over the same component shape, discriminated by
//! fallback presence: `<lang:key:with...>` inserts a bare translation
//! reference, `<lang_or:key:fallback:with...>` additionally carries the
//! literal text to show when the key cannot be resolved downstream.
//!
//! With-arguments are markup substrings in their own right: each one
//! re-enters the full parser, so placeholders can be styled or themselves
//! translatable.

use crate::error::ParseError;
use crate::parse::ParseContext;
use crate::queue::ArgumentQueue;
use crate::resolver::{Emitable, TagResolver};
use crate::tag::Tag;
use weft_text::Component;

/// `<lang:key:with...>` — translation reference without a fallback.
pub struct TranslatableTag;

impl TagResolver for TranslatableTag {
    fn name(&self) -> &str {
        "lang"
    }

    fn aliases(&self) -> &[&str] {
        &["translate", "tr"]
    }

    fn description(&self) -> &str {
        "Translatable message, resolved by key downstream"
    }

    fn create(
        &self,
        args: &mut ArgumentQueue,
        ctx: &mut ParseContext<'_>,
    ) -> Result<Tag, ParseError> {
        let key = args.pop_or("A translation key is required")?;
        let mut with = Vec::new();
        while let Some(raw) = args.pop() {
            with.push(ctx.deserialize(&raw)?);
        }

        Ok(Tag::inserting(Component::translatable(key, with)))
    }

    fn claim<'a>(&self, component: &'a Component) -> Option<Emitable<'a>> {
        let Component::Translatable(tr) = component else {
            return None;
        };
        if tr.fallback.is_some() {
            return None;
        }

        Some(Box::new(move |emit| {
            emit.tag("lang");
            emit.argument(&tr.key);
            for with in &tr.args {
                emit.component(with);
            }
        }))
    }
}

/// `<lang_or:key:fallback:with...>` — translation reference with a
/// fallback message.
pub struct TranslatableFallbackTag;

impl TagResolver for TranslatableFallbackTag {
    fn name(&self) -> &str {
        "lang_or"
    }

    fn aliases(&self) -> &[&str] {
        &["translate_or", "tr_or"]
    }

    fn description(&self) -> &str {
        "Translatable message with a literal fallback"
    }

    fn create(
        &self,
        args: &mut ArgumentQueue,
        ctx: &mut ParseContext<'_>,
    ) -> Result<Tag, ParseError> {
        let key = args.pop_or("A translation key is required")?;
        let fallback = args.pop_or("A fallback messages is required")?;
        let mut with = Vec::new();
        while let Some(raw) = args.pop() {
            with.push(ctx.deserialize(&raw)?);
        }

        Ok(Tag::inserting(Component::translatable_with_fallback(
            key, fallback, with,
        )))
    }

    fn claim<'a>(&self, component: &'a Component) -> Option<Emitable<'a>> {
        let Component::Translatable(tr) = component else {
            return None;
        };
        let fallback = tr.fallback.as_deref()?;

        Some(Box::new(move |emit| {
            emit.tag("lang_or");
            emit.argument(&tr.key);
            emit.argument(fallback);
            for with in &tr.args {
                emit.component(with);
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::ParseOptions;
    use crate::registry::TagRegistry;
    use weft_text::Decoration;

    fn queue(tag: &str, args: &[&str]) -> ArgumentQueue {
        ArgumentQueue::new(tag, args.iter().map(|a| a.to_string()).collect())
    }

    fn create_fallback(args: &[&str]) -> Result<Tag, ParseError> {
        let registry = TagRegistry::standard();
        let mut ctx = ParseContext::new(&registry, ParseOptions::default());
        TranslatableFallbackTag.create(&mut queue("lang_or", args), &mut ctx)
    }

    #[test]
    fn test_create_without_arguments_fails() {
        let err = create_fallback(&[]).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingArgument {
                tag: "lang_or".to_string(),
                reason: "A translation key is required".to_string(),
            }
        );
    }

    #[test]
    fn test_create_without_fallback_fails() {
        let err = create_fallback(&["only.key"]).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingArgument {
                tag: "lang_or".to_string(),
                reason: "A fallback messages is required".to_string(),
            }
        );
    }

    #[test]
    fn test_create_with_two_arguments_has_empty_args() {
        let tag = create_fallback(&["menu.title", "Main Menu"]).unwrap();
        match tag {
            Tag::Inserting(c) => assert_eq!(
                c,
                Component::translatable_with_fallback("menu.title", "Main Menu", vec![])
            ),
            Tag::Wrapping(_) => panic!("Expected inserting tag"),
        }
    }

    #[test]
    fn test_create_parses_with_arguments_recursively() {
        let tag = create_fallback(&["k", "f", "<bold>Extra</bold>", "plain"]).unwrap();
        match tag {
            Tag::Inserting(c) => assert_eq!(
                c,
                Component::translatable_with_fallback(
                    "k",
                    "f",
                    vec![
                        Component::styled(Decoration::Bold, vec![Component::text("Extra")]),
                        Component::text("plain"),
                    ]
                )
            ),
            Tag::Wrapping(_) => panic!("Expected inserting tag"),
        }
    }

    #[test]
    fn test_create_arity_independence() {
        for extra in [0usize, 1, 8] {
            let mut args = vec!["k".to_string(), "f".to_string()];
            args.extend((0..extra).map(|i| format!("w{i}")));
            let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

            match create_fallback(&arg_refs).unwrap() {
                Tag::Inserting(Component::Translatable(tr)) => {
                    assert_eq!(tr.args.len(), extra);
                }
                other => panic!("Expected translatable insert, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_plain_create_requires_key() {
        let registry = TagRegistry::standard();
        let mut ctx = ParseContext::new(&registry, ParseOptions::default());
        let err = TranslatableTag
            .create(&mut queue("lang", &[]), &mut ctx)
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingArgument {
                tag: "lang".to_string(),
                reason: "A translation key is required".to_string(),
            }
        );
    }

    #[test]
    fn test_fallback_claim_requires_fallback() {
        let with = Component::translatable_with_fallback("k", "f", vec![]);
        let without = Component::translatable("k", vec![]);
        let text = Component::text("k");

        assert!(TranslatableFallbackTag.claim(&with).is_some());
        assert!(TranslatableFallbackTag.claim(&without).is_none());
        assert!(TranslatableFallbackTag.claim(&text).is_none());
    }

    #[test]
    fn test_plain_claim_declines_fallback() {
        let with = Component::translatable_with_fallback("k", "f", vec![]);
        let without = Component::translatable("k", vec![]);

        assert!(TranslatableTag.claim(&with).is_none());
        assert!(TranslatableTag.claim(&without).is_some());
    }
}
