//! Compiler from MongoDB-style query documents to key-value store filter
//! expressions.
//!
//! The pipeline is:
//!
//! 1. **Parsing** (`dynafilter-model`): validate the raw JSON document and
//!    build a typed AST.
//! 2. **Compilation**: walk the AST depth-first, registering one alias per
//!    distinct field name and one value slot per bound operand, and render
//!    the condition string with AND-binds-tighter-than-OR parenthesization.
//!
//! Each compile owns its own registry and allocator, so independent compiles
//! can run concurrently without coordination.

pub mod compiler;
pub mod fragment;
pub mod names;
pub mod values;

pub use compiler::{CompiledFilter, compile, compile_document};
pub use fragment::{Fragment, Join};
pub use names::NameRegistry;
pub use values::ValueAllocator;
