//! Tag registry for resolver discovery and claim search
//!
//! This module provides the centralized registry of tag resolvers. Parsing
//! looks resolvers up by invocation name (case-insensitive, canonical names
//! and aliases alike); serialization searches resolvers in registration
//! order and the first one whose claim does not decline wins.

use std::collections::HashMap;

use crate::error::ParseError;
use crate::resolver::{Emitable, TagResolver};
use crate::tags;
use weft_text::Component;

/// Registry of tag resolvers
///
/// Immutable after construction and safe for unsynchronized concurrent
/// reads: many parse/serialize calls may share one registry across threads.
///
/// # Examples
///
/// ```ignore
/// let mut registry = TagRegistry::new();
/// registry.register(MyTag);
///
/// let resolver = registry.get("my-tag")?;
/// ```
pub struct TagRegistry {
    resolvers: Vec<Box<dyn TagResolver>>,
    by_name: HashMap<String, usize>,
}

impl TagRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        TagRegistry {
            resolvers: Vec::new(),
            by_name: HashMap::new(),
        }
    }

    /// Register a resolver under its canonical name and every alias.
    ///
    /// Later registrations win name lookups; the claim search always runs
    /// in registration order.
    pub fn register<R: TagResolver + 'static>(&mut self, resolver: R) {
        let boxed: Box<dyn TagResolver> = Box::new(resolver);
        let mut names = vec![boxed.name().to_ascii_lowercase()];
        names.extend(boxed.aliases().iter().map(|a| a.to_ascii_lowercase()));

        let index = self.resolvers.len();
        self.resolvers.push(boxed);
        for name in names {
            self.by_name.insert(name, index);
        }
    }

    /// Get the resolver registered under `name` (case-insensitive, exact).
    pub fn get(&self, name: &str) -> Result<&dyn TagResolver, ParseError> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|&index| self.resolvers[index].as_ref())
            .ok_or_else(|| ParseError::UnknownTag(name.to_string()))
    }

    /// Check if a name is registered
    pub fn has(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// List all registered canonical tag names (sorted)
    pub fn list_tags(&self) -> Vec<String> {
        let mut names: Vec<_> = self
            .resolvers
            .iter()
            .map(|r| r.name().to_string())
            .collect();
        names.sort();
        names
    }

    /// Offer `component` to every resolver in registration order; the first
    /// non-declining claim wins. `None` means no resolver owns the node,
    /// which is not an error.
    pub fn claim<'a>(&'a self, component: &'a Component) -> Option<Emitable<'a>> {
        self.resolvers.iter().find_map(|r| r.claim(component))
    }

    /// Create a registry with the standard tags
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register(tags::TranslatableTag);
        registry.register(tags::TranslatableFallbackTag);
        for decoration in tags::decoration::STANDARD {
            registry.register(decoration);
        }

        registry
    }
}

impl Default for TagRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
