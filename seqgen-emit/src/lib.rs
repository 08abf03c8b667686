//! TypeScript source emission for the Seqgen model generator.
//!
//! This crate turns small declarative descriptions (an import list, an
//! index re-export, a decorator name plus keyword-style properties) into
//! TypeScript syntax fragments and renders them to deterministic source
//! text. The surrounding pipeline (schema introspection, file layout, CLI)
//! lives elsewhere; it hands over already-validated names and property
//! maps and splices the rendered text into model files.
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use seqgen_emit::{Decorator, NamedImport, PropValue, Render};
//!
//! let import = NamedImport::new("sequelize-typescript")
//!     .symbol("Table")
//!     .symbol("Column");
//! assert_eq!(
//!     import.build(),
//!     "import { Table, Column } from \"sequelize-typescript\";"
//! );
//!
//! let props = IndexMap::from([
//!     ("type".to_string(), PropValue::from("DataType.STRING")),
//!     ("allowNull".to_string(), PropValue::from(false)),
//! ]);
//! let column = Decorator::object_literal("Column", &props);
//! assert_eq!(
//!     column.build(),
//!     "@Column({ type: DataType.STRING, allowNull: false })"
//! );
//! ```

pub mod ast;
mod error;
pub mod naming;
mod printer;

pub use ast::{
    CallExpr, Decorator, Expr, IndexExport, NAMESPACED_PREFIXES, NamedImport, ObjectLit, Property,
    PropValue, is_namespaced_constant,
};
pub use error::EmitError;
pub use naming::{is_valid_identifier, validate_identifier};
pub use printer::{Printer, Render};
