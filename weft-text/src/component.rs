//! Core data structures for the weft component tree.

use serde::{Deserialize, Serialize};

/// A node in a rich-text component tree.
///
/// The hierarchy is closed: every kind a weft document can contain is a
/// variant here, so codecs can dispatch with plain pattern matches. The
/// serde representation is internally tagged with a `type` discriminator
/// field (`text`, `styled`, `translatable`, `group`), which is the shape
/// the JSON binding in [`crate::json`] persists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Component {
    Text(TextComponent),
    Styled(StyledComponent),
    Translatable(TranslatableComponent),
    Group(GroupComponent),
}

/// A literal run of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextComponent {
    pub content: String,
}

/// One decoration applied to a sequence of children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyledComponent {
    pub decoration: Decoration,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

/// A text decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoration {
    Bold,
    Italic,
    Underlined,
    Strikethrough,
}

/// A reference to a translated message, resolved downstream of the codec.
///
/// `fallback` is the literal replacement shown when the key cannot be
/// resolved. Presence or absence of the fallback is semantically meaningful:
/// the two states belong to different tag families when serialized back to
/// markup. `args` holds substitution placeholders in order; an empty list
/// means "no placeholders", never "unknown".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslatableComponent {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Component>,
}

/// An anonymous ordered sequence of components.
///
/// Produced when a parse yields multiple sibling roots; serializers emit the
/// children in order with no wrapper of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupComponent {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

impl Component {
    /// Create a literal text component.
    pub fn text(content: impl Into<String>) -> Self {
        Component::Text(TextComponent {
            content: content.into(),
        })
    }

    /// Create a decorated component wrapping `children`.
    pub fn styled(decoration: Decoration, children: Vec<Component>) -> Self {
        Component::Styled(StyledComponent {
            decoration,
            children,
        })
    }

    /// Create a translatable component without a fallback.
    pub fn translatable(key: impl Into<String>, args: Vec<Component>) -> Self {
        Component::Translatable(TranslatableComponent {
            key: key.into(),
            fallback: None,
            args,
        })
    }

    /// Create a translatable component carrying a fallback message.
    pub fn translatable_with_fallback(
        key: impl Into<String>,
        fallback: impl Into<String>,
        args: Vec<Component>,
    ) -> Self {
        Component::Translatable(TranslatableComponent {
            key: key.into(),
            fallback: Some(fallback.into()),
            args,
        })
    }

    /// Create an anonymous sequence of components.
    pub fn group(children: Vec<Component>) -> Self {
        Component::Group(GroupComponent { children })
    }

    /// Flatten this subtree to undecorated text.
    ///
    /// Translatable nodes contribute their fallback when present, otherwise
    /// the bare key. This is the generic textual representation used when no
    /// richer rendering is available.
    pub fn plain_text(&self) -> String {
        match self {
            Component::Text(t) => t.content.clone(),
            Component::Styled(s) => s.children.iter().map(Component::plain_text).collect(),
            Component::Translatable(t) => t
                .fallback
                .clone()
                .unwrap_or_else(|| t.key.clone()),
            Component::Group(g) => g.children.iter().map(Component::plain_text).collect(),
        }
    }
}
