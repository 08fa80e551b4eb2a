//! Rich-text component tree for the weft toolchain
//!
//! This crate holds the polymorphic node hierarchy that the weft codec
//! (weft-loom) parses markup into and serializes markup from, together with
//! the JSON binding used to persist trees to an external structured format.
//!
//! It is a pure data crate: no parsing, no markup knowledge, no shell
//! assumptions. Codecs consume it through the [`Component`] enum and the
//! [`json`] module's serialize/deserialize contract.

pub mod component;
pub mod json;

pub use component::{
    Component, Decoration, GroupComponent, StyledComponent, TextComponent, TranslatableComponent,
};
