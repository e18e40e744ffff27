//! Operator and combinator tokens recognized in query documents.
//!
//! The operator set is closed: every recognized token maps to an enum variant,
//! and every consumer matches exhaustively. An unrecognized token is rejected
//! during parsing rather than discovered mid-compile.

use std::fmt;

/// Comparison operators that render as infix comparator symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `$eq`, rendered as `=`.
    Eq,
    /// `$ne`, rendered as `<>`.
    Ne,
    /// `$gt`, rendered as `>`.
    Gt,
    /// `$gte`, rendered as `>=`.
    Gte,
    /// `$lt`, rendered as `<`.
    Lt,
    /// `$lte`, rendered as `<=`.
    Lte,
}

impl Comparator {
    /// Resolve a query operator token like `$eq` to its comparator.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "$eq" => Some(Self::Eq),
            "$ne" => Some(Self::Ne),
            "$gt" => Some(Self::Gt),
            "$gte" => Some(Self::Gte),
            "$lt" => Some(Self::Lt),
            "$lte" => Some(Self::Lte),
            _ => None,
        }
    }

    /// The wire-level comparator symbol.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
        }
    }

    /// The logically complementary comparator, used to fold `$not` over a
    /// single comparison into a plain comparison (`$not:{$ne:x}` is `$eq:x`).
    ///
    /// The mapping is an involution: `c.complement().complement() == c`.
    #[must_use]
    pub fn complement(self) -> Self {
        match self {
            Self::Eq => Self::Ne,
            Self::Ne => Self::Eq,
            Self::Gt => Self::Lte,
            Self::Lte => Self::Gt,
            Self::Gte => Self::Lt,
            Self::Lt => Self::Gte,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Boolean grouping keys taking an array of sub-documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// `$and`, joining with `AND`.
    And,
    /// `$or`, joining with `OR`.
    Or,
}

impl Combinator {
    /// Resolve a document key to a combinator, if it is one.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "$and" => Some(Self::And),
            "$or" => Some(Self::Or),
            _ => None,
        }
    }

    /// The keyword used to join compiled branches.
    #[must_use]
    pub fn joiner(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("$and"),
            Self::Or => f.write_str("$or"),
        }
    }
}

/// The full set of operator tokens recognized inside a predicate object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// One of the six infix comparison operators.
    Compare(Comparator),
    /// `$exists`: attribute presence test, no value operand.
    Exists,
    /// `$in`: membership in a list of values.
    In,
    /// `$nin`: negated membership in a list of values.
    Nin,
    /// `$not`: negation of an inner predicate object.
    Not,
}

impl Operator {
    /// Resolve a predicate object key to an operator.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        if let Some(cmp) = Comparator::from_token(token) {
            return Some(Self::Compare(cmp));
        }
        match token {
            "$exists" => Some(Self::Exists),
            "$in" => Some(Self::In),
            "$nin" => Some(Self::Nin),
            "$not" => Some(Self::Not),
            _ => None,
        }
    }
}
