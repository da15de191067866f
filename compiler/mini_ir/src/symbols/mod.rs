//! Symbol table: identifier to declared type.

use rustc_hash::FxHashMap;
use tracing::trace;

use mini_diagnostic::{Diagnostic, DiagnosticQueue};

use crate::{Declaration, Ty};

/// Declared variables, in declaration order.
///
/// Lookup goes through a hash index; iteration follows insertion order so
/// storage allocation is emitted deterministically.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    entries: Vec<Declaration>,
    index: FxHashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from a declaration list, reporting duplicates.
    pub fn from_declarations(decls: &[Declaration], diagnostics: &mut DiagnosticQueue) -> Self {
        let mut table = SymbolTable::new();
        for decl in decls {
            table.declare(decl.clone(), diagnostics);
        }
        table
    }

    /// Insert a declaration. A redeclared name is reported as a semantic
    /// error and the first declaration is kept. Returns whether it was
    /// inserted.
    pub fn declare(&mut self, decl: Declaration, diagnostics: &mut DiagnosticQueue) -> bool {
        if self.index.contains_key(&decl.name) {
            diagnostics.report(Diagnostic::semantic(
                decl.line,
                format!("variable {} already declared", decl.name),
            ));
            return false;
        }
        trace!(name = %decl.name, ty = decl.ty.keyword(), "declared");
        self.index.insert(decl.name.clone(), self.entries.len());
        self.entries.push(decl);
        true
    }

    pub fn lookup(&self, name: &str) -> Option<&Declaration> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Declared type of `name`, or the `Undeclared` sentinel.
    pub fn type_of(&self, name: &str) -> Ty {
        self.lookup(name).map_or(Ty::Undeclared, |decl| decl.ty.ty())
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
