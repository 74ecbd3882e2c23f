use roxmltree::Node;

use super::builtins::builtin_scalar;
use super::expr::{Scalar, TypeExpr};
use super::tags::{children, first_child, XsTag};
use super::xstypes::TypeName;

/// Resolves a `<simpleType>` declaration, named or inline.
///
/// A restriction with enumeration facets becomes an enum of the facet values in document order.
/// Otherwise the restriction base's builtin mapping is used. `list` and `union` derivations, and
/// restrictions without a base, are `string`.
pub fn resolve(simple_type: Node) -> TypeExpr {
    let Some(restriction) = first_child(simple_type, XsTag::Restriction) else {
        tracing::debug!(
            name = simple_type.attribute("name").unwrap_or_default(),
            "simple type without restriction, using string"
        );
        return TypeExpr::STRING;
    };

    let values = children(restriction, XsTag::Enumeration)
        .filter_map(|facet| facet.attribute("value"))
        .map(str::to_owned)
        .collect::<Vec<_>>();
    if !values.is_empty() {
        return Scalar::Enum(values).into();
    }

    match restriction.attribute("base") {
        Some(base) if !base.is_empty() => builtin_scalar(TypeName::parse(base)).into(),
        _ => TypeExpr::STRING,
    }
}
