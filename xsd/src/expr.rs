use std::fmt;

/// A leaf type of the pseudo-schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scalar {
    String,
    Int,
    Bool,
    Date,
    Float,
    /// Marker for the knowledge bases' rich text type, distinct from `string` so that the base
    /// value of an extension can be named `text`/`content` instead of `value`.
    StructuredText,
    /// Literal set of an enumeration facet, in document order and with the source casing.
    Enum(Vec<String>),
}

impl Scalar {
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Int => f.write_str("int"),
            Self::Bool => f.write_str("bool"),
            Self::Date => f.write_str("date"),
            Self::Float => f.write_str("float"),
            Self::StructuredText => f.write_str("structured_text"),
            Self::Enum(values) => {
                f.write_str("enum(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "\"{value}\"")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Type expression: the shape of a resolved XSD type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExpr {
    Scalar(Scalar),
    /// Fields in declaration order. Duplicates are kept.
    Object(Vec<Field>),
    /// Zero or more of the inner expression.
    List(Box<TypeExpr>),
    /// The inner expression may be absent.
    Optional(Box<TypeExpr>),
}

impl TypeExpr {
    pub const STRING: Self = Self::Scalar(Scalar::String);

    pub fn list(inner: TypeExpr) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn optional(inner: TypeExpr) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }
}

impl From<Scalar> for TypeExpr {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    /// Normalized (snake_case) form of the source attribute/element name.
    pub name: String,
    pub expr: TypeExpr,
}

impl Field {
    pub fn new(name: impl Into<String>, expr: TypeExpr) -> Self {
        Self {
            name: name.into(),
            expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_literals_keep_order_and_casing() {
        let scalar = Scalar::Enum(vec!["High".into(), "Medium".into(), "Low".into()]);
        assert_eq!(scalar.to_string(), r#"enum("High", "Medium", "Low")"#);
    }

    #[test]
    fn scalar_keywords() {
        assert_eq!(Scalar::StructuredText.to_string(), "structured_text");
        assert_eq!(Scalar::Bool.to_string(), "bool");
    }
}
