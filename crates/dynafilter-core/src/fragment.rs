//! Compiled condition fragments and the precedence rule.
//!
//! Every compiled sub-tree carries the join that produced it. The parent uses
//! that classification, not the text, to decide parenthesization, keeping the
//! AND-binds-tighter-than-OR rule in one auditable place.

use dynafilter_model::Combinator;

/// Which join produced a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// An `AND` join of two or more fragments.
    And,
    /// An `OR` join of two or more fragments.
    Or,
    /// A `NOT ( … )` rendering carrying its own parentheses.
    Not,
    /// A single comparator term.
    Leaf,
}

impl From<Combinator> for Join {
    fn from(combinator: Combinator) -> Self {
        match combinator {
            Combinator::And => Self::And,
            Combinator::Or => Self::Or,
        }
    }
}

/// The compiled condition text for one sub-tree, tagged with the join that
/// produced it.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// The condition text.
    pub text: String,
    /// The join classification used by the parent for parenthesization.
    pub join: Join,
}

impl Fragment {
    /// A single-term fragment.
    #[must_use]
    pub fn leaf(text: String) -> Self {
        Self {
            text,
            join: Join::Leaf,
        }
    }

    /// Render this fragment for embedding under `parent`, wrapping it in
    /// parentheses only where the parent join binds tighter.
    #[must_use]
    pub fn embed(&self, parent: Join) -> String {
        if needs_parens(self.join, parent) {
            format!("( {} )", self.text)
        } else {
            self.text.clone()
        }
    }
}

/// AND binds tighter than OR: an OR-joined child embedded under an AND join
/// must be wrapped. The asymmetry is deliberate — AND children under an OR
/// join and leaf children are never wrapped, and NOT fragments already carry
/// their own parentheses.
#[must_use]
pub fn needs_parens(child: Join, parent: Join) -> bool {
    child == Join::Or && parent == Join::And
}

/// Join child fragments with `combinator`'s keyword.
///
/// A single child passes through with its own classification (no join
/// happened); otherwise the result is classified by the combinator.
#[must_use]
pub fn join_fragments(children: Vec<Fragment>, combinator: Combinator) -> Fragment {
    if children.len() == 1 {
        let mut children = children;
        return children.remove(0);
    }
    let join = Join::from(combinator);
    let separator = format!(" {} ", combinator.joiner());
    let text = children
        .iter()
        .map(|child| child.embed(join))
        .collect::<Vec<_>>()
        .join(&separator);
    Fragment { text, join }
}
