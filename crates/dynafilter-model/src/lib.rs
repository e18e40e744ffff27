//! Query document model for the dynafilter expression compiler.
//!
//! This crate defines the input side of the compiler: the recognized operator
//! and combinator tokens, the typed query document AST, and the parser that
//! turns a raw `serde_json::Value` into that AST. All structural validation
//! happens here, once, at the deserialization boundary; the compiler in
//! `dynafilter-core` consumes an already-validated document and never
//! re-inspects value shapes.

pub mod document;
pub mod error;
pub mod operator;
pub mod parser;

pub use document::{Clause, FieldValue, Predicate, QueryDocument};
pub use error::FilterError;
pub use operator::{Combinator, Comparator, Operator};
pub use parser::parse_document;
