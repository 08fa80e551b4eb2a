//! Markup parsing driver
//!
//! Consumes the scanner's token stream and drives tag resolution: each open
//! tag is looked up in the registry, its arguments are handed to the
//! resolver's create function as an [`ArgumentQueue`], and the resulting
//! [`Tag`] instruction is applied to the tree being built. Wrapping tags
//! push a frame onto an open-tag stack that the matching close tag (or the
//! end of input) pops.
//!
//! All of this is synchronous recursive descent: with-arguments re-enter
//! the full parser through [`ParseContext::deserialize`], forming a call
//! stack bounded by [`ParseOptions::max_depth`].

pub mod lexer;

use crate::error::ParseError;
use crate::queue::ArgumentQueue;
use crate::registry::TagRegistry;
use crate::tag::{Tag, WrapFn};
use lexer::{tokenize, Token};
use weft_text::Component;

/// Knobs governing a parse call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParseOptions {
    /// Combined budget for open-tag frames and re-entrant argument parses.
    pub max_depth: usize,
    /// Fail on tags left open at end of input instead of auto-closing them.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_depth: 64,
            strict: false,
        }
    }
}

/// Per-document parsing state handed to tag resolvers.
///
/// Owns the recursion budget and exposes re-entrant deserialization of
/// markup substrings, which is what lets tag arguments contain arbitrarily
/// nested markup of their own. One context belongs to exactly one parse
/// call; it is never shared.
pub struct ParseContext<'r> {
    registry: &'r TagRegistry,
    options: ParseOptions,
    depth: usize,
}

impl<'r> ParseContext<'r> {
    /// Create a context over `registry` for one document parse.
    pub fn new(registry: &'r TagRegistry, options: ParseOptions) -> Self {
        ParseContext {
            registry,
            options,
            depth: 0,
        }
    }

    /// The registry this parse resolves tags against.
    pub fn registry(&self) -> &'r TagRegistry {
        self.registry
    }

    /// The options this parse runs under.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse a markup substring into one component.
    ///
    /// Multiple sibling roots collapse into a group, an empty substring
    /// yields empty text. Failures propagate unchanged to the enclosing
    /// parse.
    pub fn deserialize(&mut self, input: &str) -> Result<Component, ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(ParseError::DepthExceeded {
                limit: self.options.max_depth,
            });
        }
        self.depth += 1;
        let result = parse_tokens(tokenize(input), self);
        self.depth -= 1;
        Ok(collapse(result?))
    }
}

/// Parse markup with the standard tags and default options.
pub fn parse(input: &str) -> Result<Component, ParseError> {
    parse_with(input, &TagRegistry::standard(), ParseOptions::default())
}

/// Parse markup against a specific registry and options.
pub fn parse_with(
    input: &str,
    registry: &TagRegistry,
    options: ParseOptions,
) -> Result<Component, ParseError> {
    let mut ctx = ParseContext::new(registry, options);
    let roots = parse_tokens(tokenize(input), &mut ctx)?;
    Ok(collapse(roots))
}

/// An open wrapping tag awaiting its close tag.
struct Frame {
    /// Name the markup opened this frame with, for diagnostics.
    opened_as: String,
    /// Lowercased name set of the resolver, for close-tag matching.
    names: Vec<String>,
    wrap: WrapFn,
    children: Vec<Component>,
}

fn place(component: Component, stack: &mut Vec<Frame>, roots: &mut Vec<Component>) {
    match stack.last_mut() {
        Some(frame) => frame.children.push(component),
        None => roots.push(component),
    }
}

fn collapse(mut roots: Vec<Component>) -> Component {
    match roots.len() {
        0 => Component::text(""),
        1 => roots.remove(0),
        _ => Component::group(roots),
    }
}

fn parse_tokens(
    tokens: Vec<Token>,
    ctx: &mut ParseContext<'_>,
) -> Result<Vec<Component>, ParseError> {
    let mut roots: Vec<Component> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for token in tokens {
        match token {
            Token::Text(text) => place(Component::text(text), &mut stack, &mut roots),

            Token::Open { name, args } => {
                let resolver = ctx.registry().get(&name)?;
                if ctx.depth + stack.len() >= ctx.options.max_depth {
                    return Err(ParseError::DepthExceeded {
                        limit: ctx.options.max_depth,
                    });
                }

                let mut queue = ArgumentQueue::new(name.to_ascii_lowercase(), args);
                match resolver.create(&mut queue, ctx)? {
                    Tag::Inserting(component) => place(component, &mut stack, &mut roots),
                    Tag::Wrapping(wrap) => {
                        let mut names = vec![resolver.name().to_ascii_lowercase()];
                        names.extend(resolver.aliases().iter().map(|a| a.to_ascii_lowercase()));
                        stack.push(Frame {
                            opened_as: name,
                            names,
                            wrap,
                            children: Vec::new(),
                        });
                    }
                }
            }

            Token::Close { name } => {
                let lowered = name.to_ascii_lowercase();
                let position = stack
                    .iter()
                    .rposition(|frame| frame.names.iter().any(|n| *n == lowered))
                    .ok_or(ParseError::UnexpectedCloseTag(name))?;

                // Auto-close anything opened inside the matched frame.
                while stack.len() > position {
                    let frame = stack.pop().expect("stack is non-empty");
                    place((frame.wrap)(frame.children), &mut stack, &mut roots);
                }
            }
        }
    }

    if ctx.options.strict {
        if let Some(frame) = stack.last() {
            return Err(ParseError::UnclosedTag(frame.opened_as.clone()));
        }
    }
    while let Some(frame) = stack.pop() {
        place((frame.wrap)(frame.children), &mut stack, &mut roots);
    }

    Ok(roots)
}
