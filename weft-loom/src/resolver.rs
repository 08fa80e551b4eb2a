//! Tag resolver trait definition
//!
//! This module defines the bidirectional contract every tag implementation
//! provides: a set of names usable to invoke it while parsing, a create
//! function building a [`Tag`] from an invocation's arguments, and a claim
//! function deciding whether the resolver owns serializing a given component
//! back to markup.

use crate::emit::TagSink;
use crate::error::ParseError;
use crate::parse::ParseContext;
use crate::queue::ArgumentQueue;
use crate::tag::Tag;
use weft_text::Component;

/// Deferred, single-use action that writes the canonical markup for a
/// claimed component.
///
/// Constructed during a claim call, invoked exactly once by the serializer
/// driver, and discarded afterwards. The borrow ties it to the component it
/// was claimed from.
pub type Emitable<'a> = Box<dyn FnOnce(&mut TagSink<'_>) + 'a>;

/// A named, stateless, bidirectional tag binding.
///
/// One resolver value is registered once and reused across unboundedly many
/// parse and serialize calls, possibly from several threads at once, so
/// implementations must carry no per-call mutable state.
///
/// # Examples
///
/// ```ignore
/// struct ShoutTag;
///
/// impl TagResolver for ShoutTag {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn create(&self, args: &mut ArgumentQueue, _ctx: &mut ParseContext<'_>)
///         -> Result<Tag, ParseError>
///     {
///         let text = args.pop_or("A message is required")?;
///         Ok(Tag::inserting(Component::text(text.to_uppercase())))
///     }
///
///     fn claim<'a>(&self, _component: &'a Component) -> Option<Emitable<'a>> {
///         None
///     }
/// }
/// ```
pub trait TagResolver: Send + Sync {
    /// Canonical name of this tag. Emission always uses this spelling, no
    /// matter which alias the markup used when parsing.
    fn name(&self) -> &str;

    /// Alternate spellings accepted while parsing.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Optional description of this tag
    fn description(&self) -> &str {
        ""
    }

    /// Build a [`Tag`] from the invocation's arguments (parse direction).
    ///
    /// `args` holds the invocation's raw tokens; `ctx` offers re-entrant
    /// deserialization for arguments that are themselves markup. Failures
    /// abort the enclosing parse.
    fn create(
        &self,
        args: &mut ArgumentQueue,
        ctx: &mut ParseContext<'_>,
    ) -> Result<Tag, ParseError>;

    /// Decide whether this resolver owns serializing `component` back to
    /// markup (serialize direction).
    ///
    /// Must be a pure predicate over the component's variant and fields:
    /// no mutation, and `None` (decline) for every unrecognized shape so the
    /// driver can try further resolvers. Declining is not an error.
    fn claim<'a>(&self, component: &'a Component) -> Option<Emitable<'a>>;
}
