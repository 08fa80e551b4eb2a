//! Bidirectional tag codec for weft markup
//!
//!     This crate converts weft markup text into weft-text component trees and
//!     back. Both directions go through one pluggable contract: a TagResolver
//!     binds a set of invocation names to a create function (parse direction)
//!     and a claim function (serialize direction), and the registry drives
//!     name lookup on the way in and a priority-ordered claim search on the
//!     way out.
//!
//!     Round-tripping is lossless up to canonicalization: whichever alias or
//!     quoting style the input used, emission always uses canonical names and
//!     canonical escaping, so one parse/serialize pass normalizes a document
//!     and further passes are identity.
//!
//!     This is a pure lib: it powers weft-cli but assumes no shell
//!     environment, no std printing, no env vars.
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # ParseError kinds
//!     ├── queue.rs            # ArgumentQueue, one invocation's tokens
//!     ├── tag.rs              # Tag instructions (insert / wrap)
//!     ├── resolver.rs         # TagResolver trait + Emitable
//!     ├── registry.rs         # TagRegistry: lookup and claim search
//!     ├── parse
//!     │   ├── lexer.rs        # nom token scanner
//!     │   └── mod.rs          # driver, ParseContext, ParseOptions
//!     ├── emit.rs             # TagSink and canonical emission
//!     └── tags                # standard tag catalog
//!
//! Testing
//!
//!     Unit tests live next to what they test; cross-cutting round-trip and
//!     canonicalization coverage (including property tests) lives under
//!     tests/, declared from tests/lib.rs because rust does not discover
//!     test files in subdirectories by default.

pub mod emit;
pub mod error;
pub mod parse;
pub mod queue;
pub mod registry;
pub mod resolver;
pub mod tag;
pub mod tags;

pub use emit::{serialize, serialize_with, TagSink};
pub use error::ParseError;
pub use parse::{parse, parse_with, ParseContext, ParseOptions};
pub use queue::ArgumentQueue;
pub use registry::TagRegistry;
pub use resolver::{Emitable, TagResolver};
pub use tag::Tag;
