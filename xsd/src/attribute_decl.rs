use roxmltree::Node;

use super::expr::{Field, TypeExpr};
use super::mapping_context::ResolveContext;
use super::naming::normalize;
use super::simple_type_def;
use super::tags::{first_child, XsTag};
use super::xstypes::TypeName;

const DEFAULT_NAME: &str = "attribute";

/// Maps an `<attribute>` declaration to a field. Only `use="required"` attributes are
/// non-optional.
pub fn resolve(context: &ResolveContext, attribute: Node) -> Field {
    let name = attribute
        .attribute("name")
        .or_else(|| attribute.attribute("ref").map(|r| TypeName::parse(r).local_name))
        .map(normalize)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_owned());

    let expr = if let Some(type_ref) = attribute.attribute("type").filter(|t| !t.is_empty()) {
        context.resolve_type_name(type_ref, &name)
    } else if let Some(simple_type) = first_child(attribute, XsTag::SimpleType) {
        simple_type_def::resolve(simple_type)
    } else {
        TypeExpr::STRING
    };

    let expr = if attribute.attribute("use") == Some("required") {
        expr
    } else {
        TypeExpr::optional(expr)
    };
    Field::new(name, expr)
}
