//! Parse-time tag instructions

use std::fmt;

use weft_text::Component;

/// Deferred constructor applied to a wrapping tag's parsed body.
pub type WrapFn = Box<dyn FnOnce(Vec<Component>) -> Component>;

/// What a resolved tag invocation does to the tree being built.
///
/// Owned exclusively by the parser driver between resolution and splicing.
pub enum Tag {
    /// Splice one fully-built component at the invocation point. The
    /// invocation is self-contained: it has no body and no close tag.
    Inserting(Component),
    /// Collect body content until the matching close tag, then wrap it into
    /// a single component.
    Wrapping(WrapFn),
}

impl Tag {
    /// An instruction inserting `component` at the invocation point.
    pub fn inserting(component: Component) -> Self {
        Tag::Inserting(component)
    }

    /// An instruction wrapping the tag's body with `wrap`.
    pub fn wrapping(wrap: impl FnOnce(Vec<Component>) -> Component + 'static) -> Self {
        Tag::Wrapping(Box::new(wrap))
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Inserting(component) => f.debug_tuple("Inserting").field(component).finish(),
            Tag::Wrapping(_) => f.write_str("Wrapping(..)"),
        }
    }
}
