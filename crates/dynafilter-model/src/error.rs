//! Error type shared by document parsing and compilation.

use thiserror::Error;

use crate::operator::Combinator;

/// Errors produced while validating or compiling a query document.
///
/// Every variant identifies the offending key or operator token. An error
/// aborts the whole compile; no partial artifacts are ever returned.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The query document (or a combinator branch) is not a JSON object.
    #[error("query document must be an object, found {found}")]
    DocumentNotObject {
        /// JSON type of the value encountered.
        found: String,
    },
    /// The query document has no keys, so there is nothing to compile.
    #[error("query document must not be empty")]
    EmptyDocument,
    /// A `$and`/`$or` operand is not an array of sub-documents.
    #[error("operand of {combinator} must be an array of documents, found {found}")]
    CombinatorNotArray {
        /// The combinator key.
        combinator: Combinator,
        /// JSON type of the value encountered.
        found: String,
    },
    /// A `$and`/`$or` operand is an empty array.
    #[error("operand of {combinator} must not be empty")]
    EmptyCombinator {
        /// The combinator key.
        combinator: Combinator,
    },
    /// A predicate object key is not a recognized operator token.
    #[error("unknown operator '{token}' on field '{field}'")]
    UnknownOperator {
        /// The unrecognized token.
        token: String,
        /// The field whose predicate object contains the token.
        field: String,
    },
    /// A `$in`/`$nin` operand is not an array.
    #[error("operand of {operator} on field '{field}' must be an array, found {found}")]
    OperandNotArray {
        /// The operator token (`$in` or `$nin`).
        operator: String,
        /// The field being constrained.
        field: String,
        /// JSON type of the value encountered.
        found: String,
    },
    /// A `$in`/`$nin` operand is an empty array, which cannot render a valid
    /// membership list.
    #[error("operand of {operator} on field '{field}' must not be empty")]
    EmptyOperandList {
        /// The operator token (`$in` or `$nin`).
        operator: String,
        /// The field being constrained.
        field: String,
    },
    /// A `$not` operand is not a predicate object.
    #[error("operand of $not on field '{field}' must be a predicate object")]
    NotOperandInvalid {
        /// The field being constrained.
        field: String,
    },
}
