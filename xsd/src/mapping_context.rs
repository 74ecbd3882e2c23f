use super::builtins::{self, STRUCTURED_TEXT_TYPE_NAME};
use super::complex_type_def;
use super::expr::{Field, Scalar, TypeExpr};
use super::filter::IgnoreSet;
use super::schema::SchemaIndex;
use super::simple_type_def;
use super::xstypes::TypeName;

/// Element names whose extension base is always called `value`.
const VALUE_CONTEXTS: &[&str] = &["skill"];
/// Element names whose structured text base is called `text` rather than `content`.
const TEXT_CONTEXTS: &[&str] = &["technique"];

/// Read-only state shared by all resolution functions of one compilation.
#[derive(Copy, Clone)]
pub struct ResolveContext<'i, 'a, 'input> {
    index: &'i SchemaIndex<'a, 'input>,
    ignored: &'i IgnoreSet,
}

impl<'i, 'a, 'input: 'a> ResolveContext<'i, 'a, 'input> {
    pub fn new(index: &'i SchemaIndex<'a, 'input>, ignored: &'i IgnoreSet) -> Self {
        Self { index, ignored }
    }

    pub fn index(&self) -> &'i SchemaIndex<'a, 'input> {
        self.index
    }

    /// Builds an object from `fields`, dropping the ignored ones.
    pub fn object(&self, fields: Vec<Field>) -> TypeExpr {
        TypeExpr::Object(self.ignored.filter(fields))
    }

    /// Resolves a named type reference. `context_name` is the normalized name of the field being
    /// resolved; it only influences how the base value of an extension is named.
    ///
    /// Lookup order: builtin datatypes, the structured text marker, simple types, complex types.
    /// References that resolve to nothing become `string`.
    pub fn resolve_type_name(&self, type_ref: &str, context_name: &str) -> TypeExpr {
        let name = TypeName::parse(type_ref);

        if builtins::is_builtin(name) {
            return builtins::builtin_scalar(name).into();
        }
        if name.local_name == STRUCTURED_TEXT_TYPE_NAME {
            return Scalar::StructuredText.into();
        }
        if let Some(simple_type) = self.index.simple_type(name.local_name) {
            return simple_type_def::resolve(simple_type);
        }
        if let Some(complex_type) = self.index.complex_type(name.local_name) {
            return complex_type_def::resolve(self, complex_type, context_name);
        }

        tracing::debug!(type_name = %name, context_name, "unresolved type reference, using string");
        TypeExpr::STRING
    }
}

/// Chooses the field name for the scalar base of a content extension.
pub(crate) fn base_value_name(base: &Scalar, context_name: &str) -> &'static str {
    let context_name = context_name.to_lowercase();
    if context_name.contains("name") && base.is_string() {
        "name"
    } else if VALUE_CONTEXTS.contains(&context_name.as_str()) {
        "value"
    } else if *base == Scalar::StructuredText {
        if TEXT_CONTEXTS.contains(&context_name.as_str()) {
            "text"
        } else {
            "content"
        }
    } else {
        "value"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_value_names() {
        assert_eq!(base_value_name(&Scalar::String, "alternate_name"), "name");
        assert_eq!(base_value_name(&Scalar::Int, "alternate_name"), "value");
        assert_eq!(base_value_name(&Scalar::String, "skill"), "value");
        assert_eq!(base_value_name(&Scalar::StructuredText, "skill"), "value");
        assert_eq!(base_value_name(&Scalar::StructuredText, "technique"), "text");
        assert_eq!(base_value_name(&Scalar::StructuredText, "description"), "content");
        assert_eq!(base_value_name(&Scalar::String, "reference"), "value");
    }

    #[test]
    fn context_is_case_insensitive() {
        assert_eq!(base_value_name(&Scalar::String, "WeaknessNameType"), "name");
        assert_eq!(base_value_name(&Scalar::StructuredText, "Technique"), "text");
    }
}
