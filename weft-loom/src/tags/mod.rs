//! Standard tag catalog
//!
//! The tags every default registry carries. Anything beyond these is
//! supplied by registering custom [`TagResolver`](crate::TagResolver)
//! implementations.

pub mod decoration;
pub mod translatable;

pub use decoration::DecorationTag;
pub use translatable::{TranslatableFallbackTag, TranslatableTag};
