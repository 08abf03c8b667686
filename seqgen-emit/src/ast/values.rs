//! Decorator property values and their classification.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::exprs::{Expr, ObjectLit};

/// String values with one of these prefixes refer to constants that are in
/// scope in generated model files and are emitted as bare identifiers
/// instead of string literals.
pub const NAMESPACED_PREFIXES: &[&str] = &["DataType.", "Sequelize."];

/// Whether a string names a namespaced constant such as `DataType.STRING`.
pub fn is_namespaced_constant(value: &str) -> bool {
    NAMESPACED_PREFIXES
        .iter()
        .any(|prefix| value.starts_with(prefix))
}

/// A decorator property value as supplied by the generation pipeline.
///
/// Deserializes untagged, so property maps can come straight out of JSON
/// manifests. Map entries keep their insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Map(IndexMap<String, PropValue>),
}

impl PropValue {
    /// Classify into an expression.
    ///
    /// Total over every variant: numbers become numeric literals, strings
    /// naming a namespaced constant become bare references, nested maps
    /// recurse, and everything else falls through to
    /// [`PropValue::to_literal`].
    pub fn classify(&self) -> Expr {
        match self {
            Self::Int(v) => Expr::Int(*v),
            Self::Float(v) => Expr::Float(*v),
            Self::String(v) if is_namespaced_constant(v) => Expr::Ident(v.clone()),
            Self::Map(map) => Expr::Object(classified_object(map)),
            other => other.to_literal(),
        }
    }

    /// Convert to a plain literal expression, with no constant detection:
    /// strings are always quoted.
    pub fn to_literal(&self) -> Expr {
        match self {
            Self::Bool(v) => Expr::Bool(*v),
            Self::Int(v) => Expr::Int(*v),
            Self::Float(v) => Expr::Float(*v),
            Self::String(v) => Expr::Str(v.clone()),
            Self::Map(map) => Expr::Object(literal_object(map)),
        }
    }

    /// Convert a TOML value.
    ///
    /// Strings, integers, floats and booleans convert; other TOML kinds
    /// are ignored.
    pub fn from_toml(value: &toml::Value) -> Option<Self> {
        match value {
            toml::Value::String(s) => Some(Self::String(s.clone())),
            toml::Value::Integer(i) => Some(Self::Int(*i)),
            toml::Value::Float(f) => Some(Self::Float(*f)),
            toml::Value::Boolean(b) => Some(Self::Bool(*b)),
            _ => None,
        }
    }
}

/// Build an object literal with every value classified.
pub(crate) fn classified_object(props: &IndexMap<String, PropValue>) -> ObjectLit {
    props.iter().fold(ObjectLit::new(), |obj, (key, value)| {
        obj.property(key, value.classify())
    })
}

/// Build an object literal with every value taken as a plain literal.
pub(crate) fn literal_object(props: &IndexMap<String, PropValue>) -> ObjectLit {
    props.iter().fold(ObjectLit::new(), |obj, (key, value)| {
        obj.property(key, value.to_literal())
    })
}

impl From<bool> for PropValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for PropValue {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for PropValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for PropValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for PropValue {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for PropValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<IndexMap<String, PropValue>> for PropValue {
    fn from(v: IndexMap<String, PropValue>) -> Self {
        Self::Map(v)
    }
}
