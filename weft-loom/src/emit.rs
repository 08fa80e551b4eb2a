//! Canonical markup emission
//!
//! The reverse direction of the codec: walks an existing component tree,
//! offers each node to the registry's resolvers in priority order, and the
//! first non-declining claim writes the node back as markup through a
//! [`TagSink`]. Emission always uses canonical tag names and canonical
//! escaping/quoting, so `serialize(parse(text))` is stable regardless of
//! which aliases or quoting style `text` used.

use crate::registry::TagRegistry;
use weft_text::Component;

/// Serialize a component tree with the standard tags.
pub fn serialize(component: &Component) -> String {
    serialize_with(component, &TagRegistry::standard())
}

/// Serialize a component tree against a specific registry.
///
/// Serialization never fails: a node no resolver claims falls back to its
/// escaped plain-text flattening.
pub fn serialize_with(component: &Component, registry: &TagRegistry) -> String {
    let mut out = String::new();
    emit_component(component, registry, &mut out);
    out
}

fn emit_component(component: &Component, registry: &TagRegistry, out: &mut String) {
    if let Some(emitable) = registry.claim(component) {
        let mut sink = TagSink::new(out, registry);
        emitable(&mut sink);
        sink.finish();
        return;
    }

    match component {
        Component::Text(text) => push_escaped_text(out, &text.content),
        Component::Group(group) => {
            for child in &group.children {
                emit_component(child, registry, out);
            }
        }
        other => push_escaped_text(out, &other.plain_text()),
    }
}

/// Emit sink for one claimed tag invocation.
///
/// A resolver's [`Emitable`](crate::resolver::Emitable) drives this in
/// order: [`tag`](TagSink::tag) first, then any number of arguments, then
/// optionally a [`body`](TagSink::body). If no body is written the
/// invocation is emitted self-contained, with no close tag.
pub struct TagSink<'a> {
    out: &'a mut String,
    registry: &'a TagRegistry,
    tag: Option<String>,
    head_open: bool,
}

impl<'a> TagSink<'a> {
    fn new(out: &'a mut String, registry: &'a TagRegistry) -> Self {
        TagSink {
            out,
            registry,
            tag: None,
            head_open: false,
        }
    }

    /// Open the invocation, writing `<name`. The name is recorded for the
    /// close tag and must be the canonical spelling.
    pub fn tag(&mut self, name: &str) {
        debug_assert!(self.tag.is_none(), "tag() called twice for one invocation");
        self.out.push('<');
        self.out.push_str(name);
        self.tag = Some(name.to_string());
        self.head_open = true;
    }

    /// Append one literal argument, quoted canonically when needed.
    pub fn argument(&mut self, value: &str) {
        debug_assert!(self.head_open, "argument() outside an open invocation");
        self.out.push(':');
        push_argument(self.out, value);
    }

    /// Serialize `child` through the full codec and append the resulting
    /// markup as one argument.
    ///
    /// The child gets its own claim search over all registered resolvers,
    /// never a shortcut through the resolver currently emitting.
    pub fn component(&mut self, child: &Component) {
        let mut nested = String::new();
        emit_component(child, self.registry, &mut nested);
        self.argument(&nested);
    }

    /// Close the invocation head, serialize `children` as the tag body, and
    /// write the close tag.
    pub fn body(&mut self, children: &[Component]) {
        debug_assert!(self.head_open, "body() outside an open invocation");
        self.out.push('>');
        self.head_open = false;
        for child in children {
            emit_component(child, self.registry, self.out);
        }
        if let Some(name) = &self.tag {
            self.out.push_str("</");
            self.out.push_str(name);
            self.out.push('>');
        }
    }

    /// Finish the invocation; self-contained tags get their closing `>`.
    fn finish(self) {
        if self.head_open {
            self.out.push('>');
        }
    }
}

fn push_escaped_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("\\<"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
}

fn needs_quoting(value: &str) -> bool {
    value.is_empty()
        || value.starts_with(' ')
        || value.ends_with(' ')
        || value
            .chars()
            .any(|c| matches!(c, ':' | '<' | '>' | '\'' | '"' | '\\'))
}

fn push_argument(out: &mut String, value: &str) {
    if !needs_quoting(value) {
        out.push_str(value);
        return;
    }
    out.push('\'');
    for c in value.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('\'');
}
