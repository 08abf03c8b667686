//! Decorator application fragments.

use indexmap::IndexMap;

use super::exprs::{CallExpr, Expr};
use super::values::{PropValue, classified_object, literal_object};
use crate::printer::{Printer, Render};

/// A decorator application: `@Name(args)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator {
    call: CallExpr,
}

impl Decorator {
    /// Decorator with an explicit argument list, built via [`Decorator::arg`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            call: CallExpr::new(name),
        }
    }

    /// Append an argument expression.
    pub fn arg(mut self, arg: Expr) -> Self {
        self.call = self.call.arg(arg);
        self
    }

    /// Decorator whose single argument is an object literal built from
    /// `props`: `@Table({ tableName: "users", paranoid: true })`.
    ///
    /// Values are classified per [`PropValue::classify`] and properties
    /// render in the map's insertion order. An empty map still produces the
    /// object argument: `@Table({})`.
    pub fn object_literal(name: impl Into<String>, props: &IndexMap<String, PropValue>) -> Self {
        Self::new(name).arg(Expr::Object(classified_object(props)))
    }

    /// Decorator whose arguments are lazy references to other declarations:
    /// `@ForeignKey(() => User)`, `@Index(() => name, { unique: true })`.
    ///
    /// Each target becomes a zero-arity arrow wrapping a bare identifier.
    /// When `props` is supplied and non-empty it is appended as a trailing
    /// object literal whose values are plain literals only; a namespaced
    /// constant string stays quoted on this path.
    pub fn arrow_targets(
        name: impl Into<String>,
        targets: impl IntoIterator<Item = impl Into<String>>,
        props: Option<&IndexMap<String, PropValue>>,
    ) -> Self {
        let decorator = targets
            .into_iter()
            .fold(Self::new(name), |d, target| {
                d.arg(Expr::arrow(Expr::ident(target)))
            });
        match props {
            Some(props) if !props.is_empty() => {
                decorator.arg(Expr::Object(literal_object(props)))
            }
            _ => decorator,
        }
    }
}

impl Render for Decorator {
    fn render(&self, out: &mut Printer) {
        out.raw("@");
        self.call.render(out);
    }
}
