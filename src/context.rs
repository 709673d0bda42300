//! Global context for semantic enrichment

use crate::symbols::{Classification, SecondaryKind, SymbolTable, create_symbol_table};

/// Global context struct for semantic enrichment
///
/// The SemanticContext carries the symbol registry consulted by the tree
/// builder. It is read-only during a run, so one context can be shared by
/// any number of concurrent enrichments. Callers may register additional
/// symbols before the first run.
#[derive(Debug, Clone)]
pub struct SemanticContext {
    /// Primary and secondary symbol classifications
    pub symbols: SymbolTable,
}

impl SemanticContext {
    /// Creates a context with the built-in symbol registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or overrides the classification of `symbol`
    pub fn define_symbol(&mut self, symbol: &str, classification: Classification) {
        self.symbols.define(symbol, classification);
    }

    /// Registers a secondary fact (bar, tilde, differential) for `symbol`
    pub fn define_secondary(&mut self, kind: SecondaryKind, symbol: &str) {
        self.symbols.define_secondary(kind, symbol);
    }
}

impl Default for SemanticContext {
    fn default() -> Self {
        Self {
            symbols: create_symbol_table(),
        }
    }
}
