use std::collections::HashMap;

use lazy_static::lazy_static;

use super::complex_type_def;
use super::element_decl;
use super::error::{Result, XsdError};
use super::expr::TypeExpr;
use super::mapping_context::ResolveContext;
use super::naming::normalize;

lazy_static! {
    /// Logical root names of the two knowledge bases, mapped to their declared names.
    static ref ROOT_ALIASES: HashMap<&'static str, &'static str> = HashMap::from([
        ("attack_pattern", "AttackPatternType"),
        ("weakness", "WeaknessType"),
        ("attack_pattern_catalog", "Attack_Pattern_Catalog"),
        ("weakness_catalog", "Weakness_Catalog"),
    ]);
}

/// The declared name a root identifier is looked up under.
pub fn lookup_name(root: &str) -> &str {
    ROOT_ALIASES.get(root).copied().unwrap_or(root)
}

/// Resolves the root of the pseudo-schema: a global element (its content type) or, failing that,
/// a complex type. Returns the normalized root name along with its type expression.
///
/// This is the only fatal lookup of the compiler; `origin` names the schema in the error.
pub fn compile_root(
    context: &ResolveContext,
    root: &str,
    origin: &str,
) -> Result<(String, TypeExpr)> {
    let lookup = lookup_name(root);
    let name = normalize(root);

    if let Some(element) = context.index().global_element(lookup) {
        tracing::debug!(root, lookup, "root is a global element");
        return Ok((name, element_decl::resolve_content(context, element)));
    }

    if let Some(complex_type) = context.index().complex_type(lookup) {
        tracing::debug!(root, lookup, "root is a complex type");
        return Ok((name, complex_type_def::resolve(context, complex_type, lookup)));
    }

    Err(XsdError::NotFound {
        root: root.to_owned(),
        origin: origin.to_owned(),
    })
}
