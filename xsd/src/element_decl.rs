use roxmltree::Node;

use super::complex_type_def;
use super::expr::{Field, TypeExpr};
use super::mapping_context::ResolveContext;
use super::naming::normalize;
use super::particle::Occurs;
use super::simple_type_def;
use super::tags::{first_child, XsTag};
use super::xstypes::TypeName;

const DEFAULT_NAME: &str = "item";

/// Maps an `<element>` declaration to a field, wrapped according to its occurrence range.
pub fn resolve(context: &ResolveContext, element: Node) -> Field {
    let name = field_name(element);
    let expr = Occurs::of(element).wrap(resolve_content(context, element));
    Field::new(name, expr)
}

/// The content type of an `<element>`, without occurrence wrapping.
///
/// The first of the following that applies: the `type` reference, an inline `<simpleType>`, an
/// inline `<complexType>`, the content of the global element named by `ref`, `string`.
pub fn resolve_content(context: &ResolveContext, element: Node) -> TypeExpr {
    let context_name = field_name(element);

    if let Some(type_ref) = element.attribute("type").filter(|t| !t.is_empty()) {
        return context.resolve_type_name(type_ref, &context_name);
    }
    if let Some(simple_type) = first_child(element, XsTag::SimpleType) {
        return simple_type_def::resolve(simple_type);
    }
    if let Some(complex_type) = first_child(element, XsTag::ComplexType) {
        return complex_type_def::resolve(context, complex_type, &context_name);
    }
    if let Some(ref_) = element.attribute("ref") {
        let target = TypeName::parse(ref_);
        return match context.index().global_element(target.local_name) {
            Some(global) => resolve_content(context, global),
            None => {
                tracing::debug!(%target, "unresolved element reference, using string");
                TypeExpr::STRING
            }
        };
    }

    TypeExpr::STRING
}

/// The normalized `name` of the declaration, or the local name of its `ref`.
fn field_name(element: Node) -> String {
    let name = element
        .attribute("name")
        .or_else(|| element.attribute("ref").map(|r| TypeName::parse(r).local_name))
        .map(normalize)
        .unwrap_or_default();
    if name.is_empty() {
        DEFAULT_NAME.to_owned()
    } else {
        name
    }
}
