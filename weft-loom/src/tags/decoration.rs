//! Decoration tags
//!
//! `<bold>...</bold>` and friends: wrapping tags that apply one text
//! decoration to their body. One resolver value per decoration, built from
//! the [`STANDARD`] table (canonical name first, then aliases).

use crate::error::ParseError;
use crate::parse::ParseContext;
use crate::queue::ArgumentQueue;
use crate::resolver::{Emitable, TagResolver};
use crate::tag::Tag;
use weft_text::{Component, Decoration};

/// Wrapping tag applying one decoration to its body.
#[derive(Debug, Clone, Copy)]
pub struct DecorationTag {
    decoration: Decoration,
    name: &'static str,
    aliases: &'static [&'static str],
}

impl DecorationTag {
    pub const fn new(
        decoration: Decoration,
        name: &'static str,
        aliases: &'static [&'static str],
    ) -> Self {
        DecorationTag {
            decoration,
            name,
            aliases,
        }
    }
}

/// The standard decoration tags.
pub const STANDARD: [DecorationTag; 4] = [
    DecorationTag::new(Decoration::Bold, "bold", &["b"]),
    DecorationTag::new(Decoration::Italic, "italic", &["i", "em"]),
    DecorationTag::new(Decoration::Underlined, "underlined", &["u"]),
    DecorationTag::new(Decoration::Strikethrough, "strikethrough", &["st"]),
];

impl TagResolver for DecorationTag {
    fn name(&self) -> &str {
        self.name
    }

    fn aliases(&self) -> &[&str] {
        self.aliases
    }

    fn description(&self) -> &str {
        "Applies a text decoration to its body"
    }

    fn create(
        &self,
        args: &mut ArgumentQueue,
        _ctx: &mut ParseContext<'_>,
    ) -> Result<Tag, ParseError> {
        if args.has_next() {
            return Err(ParseError::UnexpectedArgument {
                tag: args.tag().to_string(),
            });
        }

        let decoration = self.decoration;
        Ok(Tag::wrapping(move |children| {
            Component::styled(decoration, children)
        }))
    }

    fn claim<'a>(&self, component: &'a Component) -> Option<Emitable<'a>> {
        let Component::Styled(styled) = component else {
            return None;
        };
        if styled.decoration != self.decoration {
            return None;
        }

        let name = self.name;
        Some(Box::new(move |emit| {
            emit.tag(name);
            emit.body(&styled.children);
        }))
    }
}
