//! The clause compiler: walks a parsed query document depth-first and
//! produces the condition string together with the name and value bindings.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use dynafilter_model::{
    Clause, Combinator, Comparator, FieldValue, FilterError, Predicate, QueryDocument,
    parse_document,
};

use crate::fragment::{Fragment, Join, join_fragments};
use crate::names::NameRegistry;
use crate::values::ValueAllocator;

/// The artifact triple produced by one compile.
///
/// Serializes with the wire member names a DynamoDB-shaped Query/Scan request
/// expects, so callers can splice it into a request body directly.
#[derive(Debug, Clone, Serialize)]
pub struct CompiledFilter {
    /// The condition string in the store's filter-expression grammar.
    #[serde(rename = "FilterExpression")]
    pub condition: String,
    /// Alias token -> original attribute name, one entry per distinct field.
    #[serde(rename = "ExpressionAttributeNames")]
    pub names: HashMap<String, String>,
    /// Value placeholder -> literal value, one entry per bound scalar slot or
    /// per array element.
    #[serde(rename = "ExpressionAttributeValues")]
    pub values: HashMap<String, Value>,
}

/// Compile a raw JSON query document into the artifact triple.
///
/// Every call owns a fresh name registry and value allocator; no state is
/// carried between compiles.
///
/// # Errors
///
/// Returns `FilterError` if the document fails structural validation.
pub fn compile(document: &Value) -> Result<CompiledFilter, FilterError> {
    let document = parse_document(document)?;
    Ok(compile_document(&document))
}

/// Compile an already-parsed query document.
///
/// Infallible: every structural and unknown-operator error is caught while
/// parsing, so a `QueryDocument` always compiles.
#[must_use]
pub fn compile_document(document: &QueryDocument) -> CompiledFilter {
    let mut ctx = Context::default();
    let fragment = ctx.compile_document(document);
    let compiled = CompiledFilter {
        condition: fragment.text,
        names: ctx.names.into_names(),
        values: ctx.bound,
    };
    trace!(
        names = compiled.names.len(),
        values = compiled.values.len(),
        "compiled filter expression"
    );
    compiled
}

/// Mutable per-compile state threaded through the recursion.
#[derive(Debug, Default)]
struct Context {
    names: NameRegistry,
    slots: ValueAllocator,
    bound: HashMap<String, Value>,
}

impl Context {
    fn compile_document(&mut self, document: &QueryDocument) -> Fragment {
        let children: Vec<Fragment> = document
            .clauses
            .iter()
            .map(|clause| self.compile_clause(clause))
            .collect();
        join_fragments(children, Combinator::And)
    }

    fn compile_clause(&mut self, clause: &Clause) -> Fragment {
        match clause {
            Clause::Field { name, value } => self.compile_field(name, value),
            Clause::Group {
                combinator,
                branches,
            } => {
                let children = branches
                    .iter()
                    .map(|branch| self.compile_document(branch))
                    .collect();
                join_fragments(children, *combinator)
            }
        }
    }

    fn compile_field(&mut self, field: &str, value: &FieldValue) -> Fragment {
        match value {
            FieldValue::Literal(literal) => {
                let alias = self.names.alias(field);
                let placeholder = self.bind(field, literal.clone());
                Fragment::leaf(format!("{alias} = {placeholder}"))
            }
            FieldValue::Predicates(predicates) => self.compile_predicates(field, predicates),
        }
    }

    /// Compile the terms of one predicate object, AND-combined on the field.
    fn compile_predicates(&mut self, field: &str, predicates: &[Predicate]) -> Fragment {
        let children: Vec<Fragment> = predicates
            .iter()
            .map(|predicate| self.compile_predicate(field, predicate))
            .collect();
        join_fragments(children, Combinator::And)
    }

    fn compile_predicate(&mut self, field: &str, predicate: &Predicate) -> Fragment {
        match predicate {
            Predicate::Compare { op, operand } => self.compile_compare(field, *op, operand),
            Predicate::In(items) => Fragment::leaf(self.render_membership(field, items)),
            Predicate::NotIn(items) => {
                let inner = self.render_membership(field, items);
                Fragment {
                    text: format!("NOT ( {inner} )"),
                    join: Join::Not,
                }
            }
            Predicate::Exists(true) => {
                Fragment::leaf(format!("attribute_exists({})", self.names.alias(field)))
            }
            Predicate::Exists(false) => Fragment::leaf(format!(
                "attribute_not_exists({})",
                self.names.alias(field)
            )),
            Predicate::Not(inner) => self.compile_negation(field, inner),
        }
    }

    fn compile_compare(&mut self, field: &str, op: Comparator, operand: &Value) -> Fragment {
        let alias = self.names.alias(field);
        let placeholder = self.bind(field, operand.clone());
        Fragment::leaf(format!("{alias} {op} {placeholder}"))
    }

    /// Render `alias IN (p0,p1,...)`, binding one placeholder per element but
    /// consuming a single value slot for the whole list.
    fn render_membership(&mut self, field: &str, items: &[Value]) -> String {
        let alias = self.names.alias(field);
        let index = self.slots.next_index(field);
        let placeholders: Vec<String> = items
            .iter()
            .enumerate()
            .map(|(element, item)| {
                let placeholder = ValueAllocator::array_placeholder(field, index, element);
                self.bound.insert(placeholder.clone(), item.clone());
                placeholder
            })
            .collect();
        format!("{alias} IN ({})", placeholders.join(","))
    }

    /// `$not` over a single comparison folds to the complement comparison;
    /// any other inner shape compiles the inner predicate set and wraps it
    /// as an explicit `NOT ( … )`.
    fn compile_negation(&mut self, field: &str, inner: &[Predicate]) -> Fragment {
        if let [Predicate::Compare { op, operand }] = inner {
            return self.compile_compare(field, op.complement(), operand);
        }
        let compiled = self.compile_predicates(field, inner);
        Fragment {
            text: format!("NOT ( {} )", compiled.text),
            join: Join::Not,
        }
    }

    /// Allocate one scalar slot for `field` and bind `value` to it.
    fn bind(&mut self, field: &str, value: Value) -> String {
        let index = self.slots.next_index(field);
        let placeholder = ValueAllocator::placeholder(field, index);
        self.bound.insert(placeholder.clone(), value);
        placeholder
    }
}
