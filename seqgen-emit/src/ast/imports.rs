//! Import declaration fragments.

use crate::printer::{Printer, Render};

/// A named import declaration: `import { A, B } from "module";`.
///
/// Symbols render in insertion order and are trusted to be valid
/// identifiers; the module path is embedded verbatim as a quoted literal.
/// An import with no symbols still renders as `import {} from "module";`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedImport {
    module: String,
    symbols: Vec<String>,
}

impl NamedImport {
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbols: Vec::new(),
        }
    }

    /// Import one named symbol.
    pub fn symbol(mut self, name: impl Into<String>) -> Self {
        self.symbols.push(name.into());
        self
    }

    /// Import several named symbols, preserving their order.
    pub fn symbols(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.symbols.extend(names.into_iter().map(Into::into));
        self
    }
}

impl Render for NamedImport {
    fn render(&self, out: &mut Printer) {
        if self.symbols.is_empty() {
            out.raw("import {} from ");
        } else {
            out.raw("import { ")
                .raw(&self.symbols.join(", "))
                .raw(" } from ");
        }
        out.string_literal(&self.module).raw(";");
    }
}
