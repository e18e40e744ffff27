//! Per-compile registry of attribute name aliases.

use std::collections::HashMap;

/// Assigns and memoizes one `#`-prefixed alias per distinct field name for
/// the lifetime of a single compile.
///
/// The alias for a field is minted exactly once and is stable for every later
/// reference to that field anywhere in the document tree.
#[derive(Debug, Default)]
pub struct NameRegistry {
    /// Field name -> alias token.
    aliases: HashMap<String, String>,
}

impl NameRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the alias for `field`, minting and recording it on first sight.
    pub fn alias(&mut self, field: &str) -> String {
        self.aliases
            .entry(field.to_owned())
            .or_insert_with(|| format!("#{field}"))
            .clone()
    }

    /// Consume the registry into the `names` artifact: alias token ->
    /// original field name, one entry per distinct field.
    #[must_use]
    pub fn into_names(self) -> HashMap<String, String> {
        self.aliases
            .into_iter()
            .map(|(field, alias)| (alias, field))
            .collect()
    }
}
