//! TypeScript AST fragment builders for generated model files.
//!
//! Fragments are built bottom-up, never mutated after construction, and
//! consumed by the printer.

mod decorators;
mod exports;
mod exprs;
mod imports;
mod values;

pub use decorators::Decorator;
pub use exports::IndexExport;
pub use exprs::{CallExpr, Expr, ObjectLit, Property};
pub use imports::NamedImport;
pub use values::{NAMESPACED_PREFIXES, PropValue, is_namespaced_constant};
