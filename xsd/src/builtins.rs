use std::collections::HashMap;

use lazy_static::lazy_static;

use super::expr::Scalar;
use super::xstypes::TypeName;

/// The XML Schema namespace (pt. 1, §1.3.1)
pub const XS_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// Prefix conventionally bound to [`XS_NAMESPACE`]; any reference carrying it is treated as a
/// builtin, known or not.
pub const XS_PREFIX: &str = "xs";

/// The knowledge bases' rich text type, which maps to [`Scalar::StructuredText`].
pub const STRUCTURED_TEXT_TYPE_NAME: &str = "StructuredTextType";

lazy_static! {
    /// Builtin datatypes recognized by local name, and the scalar each collapses to.
    static ref BUILTIN_SCALARS: HashMap<&'static str, Scalar> = HashMap::from([
        ("string", Scalar::String),
        ("token", Scalar::String),
        ("normalizedString", Scalar::String),
        ("anyURI", Scalar::String),
        ("gYear", Scalar::String),
        ("gMonth", Scalar::String),
        ("gDay", Scalar::String),
        ("integer", Scalar::Int),
        ("int", Scalar::Int),
        ("long", Scalar::Int),
        ("short", Scalar::Int),
        ("nonNegativeInteger", Scalar::Int),
        ("positiveInteger", Scalar::Int),
        ("boolean", Scalar::Bool),
        ("date", Scalar::Date),
        ("decimal", Scalar::Float),
        ("double", Scalar::Float),
        ("float", Scalar::Float),
    ]);
}

/// Whether a type reference names an XSD builtin: either it carries the `xs` prefix (or the
/// namespace itself in Clark notation), or its local name is one of the known builtin keywords.
pub fn is_builtin(name: TypeName) -> bool {
    matches!(name.prefix, Some(XS_PREFIX | XS_NAMESPACE))
        || BUILTIN_SCALARS.contains_key(name.local_name)
}

/// Maps a builtin type reference to its scalar. Unmapped builtins (`xs:dateTime`, `xs:ID`, ...)
/// become `string`.
pub fn builtin_scalar(name: TypeName) -> Scalar {
    match BUILTIN_SCALARS.get(name.local_name) {
        Some(scalar) => scalar.clone(),
        None => {
            tracing::debug!(type_name = %name, "unmapped builtin type, using string");
            Scalar::String
        }
    }
}
