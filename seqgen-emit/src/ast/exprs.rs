//! Expression fragments for generated TypeScript.

use crate::printer::{Printer, Render};

/// An expression in generated source.
///
/// The set of kinds is deliberately closed: model emission only ever
/// produces literals, bare references, zero-arity arrows, object literals,
/// and calls.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal, e.g. `255`.
    Int(i64),
    /// Floating point literal, e.g. `0.5`.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// String literal, double-quoted on render.
    Str(String),
    /// Bare identifier reference, emitted verbatim, e.g. `DataType.STRING`.
    Ident(String),
    /// Zero-arity arrow function wrapping the body, e.g. `() => User`.
    Arrow(Box<Expr>),
    /// Object literal.
    Object(ObjectLit),
    /// Call expression.
    Call(Box<CallExpr>),
}

impl Expr {
    /// Bare reference to an identifier.
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Ident(name.into())
    }

    /// Wrap an expression in a zero-arity arrow function.
    pub fn arrow(body: Expr) -> Self {
        Self::Arrow(Box::new(body))
    }
}

impl Render for Expr {
    fn render(&self, out: &mut Printer) {
        match self {
            Self::Int(v) => {
                out.raw(&v.to_string());
            }
            Self::Float(v) => {
                out.raw(&v.to_string());
            }
            Self::Bool(v) => {
                out.raw(if *v { "true" } else { "false" });
            }
            Self::Str(v) => {
                out.string_literal(v);
            }
            Self::Ident(v) => {
                out.raw(v);
            }
            Self::Arrow(body) => {
                out.raw("() => ");
                body.render(out);
            }
            Self::Object(obj) => obj.render(out),
            Self::Call(call) => call.render(out),
        }
    }
}

/// One `key: value` assignment inside an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Expr,
}

impl Render for Property {
    fn render(&self, out: &mut Printer) {
        out.raw(&self.key).raw(": ");
        self.value.render(out);
    }
}

/// An object literal, rendered inline: `{ key: value, ... }`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectLit {
    properties: Vec<Property>,
}

impl ObjectLit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a property assignment. Insertion order is rendering order.
    pub fn property(mut self, key: impl Into<String>, value: Expr) -> Self {
        self.properties.push(Property {
            key: key.into(),
            value,
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Render for ObjectLit {
    fn render(&self, out: &mut Printer) {
        if self.properties.is_empty() {
            out.raw("{}");
            return;
        }
        out.raw("{ ");
        for (i, prop) in self.properties.iter().enumerate() {
            if i > 0 {
                out.raw(", ");
            }
            prop.render(out);
        }
        out.raw(" }");
    }
}

/// A call of a bare identifier: `callee(arg, ...)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    callee: String,
    args: Vec<Expr>,
}

impl CallExpr {
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument. Insertion order is rendering order.
    pub fn arg(mut self, arg: Expr) -> Self {
        self.args.push(arg);
        self
    }
}

impl Render for CallExpr {
    fn render(&self, out: &mut Printer) {
        out.raw(&self.callee).raw("(");
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.raw(", ");
            }
            arg.render(out);
        }
        out.raw(")");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_rendering() {
        assert_eq!(Expr::Int(255).build(), "255");
        assert_eq!(Expr::Float(0.5).build(), "0.5");
        assert_eq!(Expr::Bool(true).build(), "true");
        assert_eq!(Expr::Str("hello".into()).build(), "\"hello\"");
        assert_eq!(Expr::ident("DataType.STRING").build(), "DataType.STRING");
    }

    #[test]
    fn test_whole_floats_render_without_fraction() {
        assert_eq!(Expr::Float(4.0).build(), "4");
    }

    #[test]
    fn test_arrow_wraps_bare_reference() {
        assert_eq!(Expr::arrow(Expr::ident("User")).build(), "() => User");
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(ObjectLit::new().build(), "{}");
    }

    #[test]
    fn test_object_preserves_insertion_order() {
        let obj = ObjectLit::new()
            .property("b", Expr::Int(2))
            .property("a", Expr::Int(1));
        assert_eq!(obj.build(), "{ b: 2, a: 1 }");
    }

    #[test]
    fn test_nested_object_renders_inline() {
        let obj = ObjectLit::new().property(
            "validate",
            Expr::Object(ObjectLit::new().property("min", Expr::Int(0))),
        );
        assert_eq!(obj.build(), "{ validate: { min: 0 } }");
    }

    #[test]
    fn test_call_with_mixed_args() {
        let call = CallExpr::new("Column")
            .arg(Expr::ident("DataType.TEXT"))
            .arg(Expr::Str("notes".into()));
        assert_eq!(call.build(), "Column(DataType.TEXT, \"notes\")");
    }

    #[test]
    fn test_call_without_args() {
        assert_eq!(CallExpr::new("CreatedAt").build(), "CreatedAt()");
    }

    #[test]
    fn test_call_as_property_value() {
        let call = CallExpr::new("Sequelize.fn").arg(Expr::Str("NOW".into()));
        let obj = ObjectLit::new().property("defaultValue", Expr::Call(Box::new(call)));
        assert_eq!(obj.build(), "{ defaultValue: Sequelize.fn(\"NOW\") }");
    }
}
