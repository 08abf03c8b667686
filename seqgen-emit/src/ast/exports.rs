//! Export declaration fragments.

use crate::printer::{Printer, Render};

/// A wildcard re-export of one model file: `export * from "./user.model";`.
///
/// The `./` prefix is always prepended; the stem is embedded verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExport {
    file_stem: String,
}

impl IndexExport {
    pub fn new(file_stem: impl Into<String>) -> Self {
        Self {
            file_stem: file_stem.into(),
        }
    }
}

impl Render for IndexExport {
    fn render(&self, out: &mut Printer) {
        out.raw("export * from ");
        out.string_literal(&format!("./{}", self.file_stem));
        out.raw(";");
    }
}
