use roxmltree::Node;

use super::attribute_decl;
use super::element_decl;
use super::expr::{Field, TypeExpr};
use super::mapping_context::{base_value_name, ResolveContext};
use super::particle::Occurs;
use super::tags::{children, first_child, XsTag};

/// Resolves a `<complexType>` declaration, named or inline. `context_name` is the normalized
/// name of the field whose type this is.
///
/// Content extensions (`complexContent` or `simpleContent` with an `extension`) become an object
/// holding the base value followed by the extension's attributes. Any other complex type is read
/// as a flat `sequence` of elements followed by the type's attributes.
pub fn resolve(context: &ResolveContext, complex_type: Node, context_name: &str) -> TypeExpr {
    for content_tag in [XsTag::ComplexContent, XsTag::SimpleContent] {
        let Some(content) = first_child(complex_type, content_tag) else {
            continue;
        };
        match first_child(content, XsTag::Extension) {
            Some(extension) => return resolve_extension(context, extension, context_name),
            None => tracing::debug!(
                name = complex_type.attribute("name").unwrap_or(context_name),
                content = content.tag_name().name(),
                "content model without extension is not walked"
            ),
        }
    }

    resolve_structure(context, complex_type)
}

fn resolve_extension(context: &ResolveContext, extension: Node, context_name: &str) -> TypeExpr {
    let base = extension
        .attribute("base")
        .filter(|base| !base.is_empty())
        .unwrap_or("xs:string");
    let base_expr = context.resolve_type_name(base, context_name);
    let base_name = match base_expr.scalar() {
        Some(scalar) => base_value_name(scalar, context_name),
        None => "value",
    };

    let mut fields = vec![Field::new(base_name, base_expr)];
    fields.extend(
        children(extension, XsTag::Attribute)
            .map(|attribute| attribute_decl::resolve(context, attribute)),
    );
    context.object(fields)
}

fn resolve_structure(context: &ResolveContext, complex_type: Node) -> TypeExpr {
    report_unsupported(complex_type);

    let attributes = children(complex_type, XsTag::Attribute).collect::<Vec<_>>();
    let mut fields = Vec::new();

    if let Some(sequence) = first_child(complex_type, XsTag::Sequence) {
        report_unsupported(sequence);

        let elements = children(sequence, XsTag::Element).collect::<Vec<_>>();

        // A wrapper type around a single required, repeated child is the list itself.
        if let [element] = elements.as_slice() {
            if attributes.is_empty() && Occurs::of(*element).is_required_list() {
                return TypeExpr::list(element_decl::resolve_content(context, *element));
            }
        }

        fields.extend(
            elements
                .iter()
                .map(|&element| element_decl::resolve(context, element)),
        );
    }

    fields.extend(
        attributes
            .iter()
            .map(|&attribute| attribute_decl::resolve(context, attribute)),
    );
    context.object(fields)
}

fn report_unsupported(node: Node) {
    for child in node.children().filter(|c| XsTag::of(*c) == XsTag::Unsupported) {
        tracing::debug!(
            parent = node.tag_name().name(),
            name = node.attribute("name").unwrap_or_default(),
            group = child.tag_name().name(),
            "group construct is not walked"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::Scalar;
    use crate::filter::IgnoreSet;
    use crate::schema::SchemaIndex;

    fn resolve_named(schema_body: &str, type_name: &str, context_name: &str) -> TypeExpr {
        resolve_named_ignoring(schema_body, type_name, context_name, &IgnoreSet::new())
    }

    fn resolve_named_ignoring(
        schema_body: &str,
        type_name: &str,
        context_name: &str,
        ignored: &IgnoreSet,
    ) -> TypeExpr {
        let xml = format!(
            r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">{schema_body}</xs:schema>"#
        );
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let index = SchemaIndex::build(&doc);
        let context = ResolveContext::new(&index, ignored);
        let complex_type = index.complex_type(type_name).unwrap();
        resolve(&context, complex_type, context_name)
    }

    #[test]
    fn simple_content_extension_with_required_attribute() {
        let expr = resolve_named(
            r#"<xs:complexType name="SkillType">
                <xs:simpleContent>
                    <xs:extension base="xs:string">
                        <xs:attribute name="Level" type="xs:string" use="required"/>
                    </xs:extension>
                </xs:simpleContent>
            </xs:complexType>"#,
            "SkillType",
            "skill",
        );
        assert_eq!(
            expr,
            TypeExpr::Object(vec![
                Field::new("value", TypeExpr::STRING),
                Field::new("level", TypeExpr::STRING),
            ])
        );
    }

    #[test]
    fn duplicate_value_fields_are_kept() {
        let expr = resolve_named(
            r#"<xs:complexType name="SkillType">
                <xs:simpleContent>
                    <xs:extension base="xs:string">
                        <xs:attribute name="Value" type="xs:string" use="required"/>
                    </xs:extension>
                </xs:simpleContent>
            </xs:complexType>"#,
            "SkillType",
            "skill",
        );
        assert_eq!(
            expr,
            TypeExpr::Object(vec![
                Field::new("value", TypeExpr::STRING),
                Field::new("value", TypeExpr::STRING),
            ])
        );
    }

    #[test]
    fn complex_content_extension_of_structured_text() {
        let expr = resolve_named(
            r#"<xs:complexType name="NoteType">
                <xs:complexContent>
                    <xs:extension base="StructuredTextType">
                        <xs:attribute name="Type" type="xs:string"/>
                    </xs:extension>
                </xs:complexContent>
            </xs:complexType>"#,
            "NoteType",
            "note",
        );
        assert_eq!(
            expr,
            TypeExpr::Object(vec![
                Field::new("content", Scalar::StructuredText.into()),
                Field::new("type", TypeExpr::optional(TypeExpr::STRING)),
            ])
        );
    }

    #[test]
    fn non_scalar_base_is_named_value() {
        let expr = resolve_named(
            r#"<xs:complexType name="Base">
                <xs:sequence><xs:element name="A" type="xs:int"/></xs:sequence>
            </xs:complexType>
            <xs:complexType name="Derived">
                <xs:complexContent>
                    <xs:extension base="Base"/>
                </xs:complexContent>
            </xs:complexType>"#,
            "Derived",
            "derived_name",
        );
        assert_eq!(
            expr,
            TypeExpr::Object(vec![Field::new(
                "value",
                TypeExpr::Object(vec![Field::new("a", Scalar::Int.into())])
            )])
        );
    }

    #[test]
    fn single_repeated_child_collapses_to_list() {
        let expr = resolve_named(
            r#"<xs:complexType name="ExampleInstancesType">
                <xs:sequence>
                    <xs:element name="Example_Instance" type="xs:string" maxOccurs="unbounded"/>
                </xs:sequence>
            </xs:complexType>"#,
            "ExampleInstancesType",
            "",
        );
        assert_eq!(expr, TypeExpr::list(TypeExpr::STRING));
    }

    #[test]
    fn single_optional_repeated_child_does_not_collapse() {
        let expr = resolve_named(
            r#"<xs:complexType name="NotesType">
                <xs:sequence>
                    <xs:element name="Note" type="xs:string" minOccurs="0" maxOccurs="unbounded"/>
                </xs:sequence>
            </xs:complexType>"#,
            "NotesType",
            "",
        );
        assert_eq!(
            expr,
            TypeExpr::Object(vec![Field::new(
                "note",
                TypeExpr::optional(TypeExpr::list(TypeExpr::STRING))
            )])
        );
    }

    #[test]
    fn attribute_prevents_collapse() {
        let expr = resolve_named(
            r#"<xs:complexType name="ListType">
                <xs:sequence>
                    <xs:element name="Item" type="xs:string" maxOccurs="unbounded"/>
                </xs:sequence>
                <xs:attribute name="Count" type="xs:int"/>
            </xs:complexType>"#,
            "ListType",
            "",
        );
        assert_eq!(
            expr,
            TypeExpr::Object(vec![
                Field::new("item", TypeExpr::list(TypeExpr::STRING)),
                Field::new("count", TypeExpr::optional(Scalar::Int.into())),
            ])
        );
    }

    #[test]
    fn choice_yields_empty_object() {
        let expr = resolve_named(
            r#"<xs:complexType name="ChoiceType">
                <xs:choice>
                    <xs:element name="A" type="xs:string"/>
                    <xs:element name="B" type="xs:string"/>
                </xs:choice>
            </xs:complexType>"#,
            "ChoiceType",
            "",
        );
        assert_eq!(expr, TypeExpr::Object(vec![]));
    }

    #[test]
    fn ignored_fields_are_dropped() {
        let ignored = IgnoreSet::from_raw(["Content_History"]);
        let expr = resolve_named_ignoring(
            r#"<xs:complexType name="EntryType">
                <xs:sequence>
                    <xs:element name="Description" type="xs:string"/>
                    <xs:element name="Content_History" type="xs:string"/>
                </xs:sequence>
                <xs:attribute name="ID" type="xs:int" use="required"/>
            </xs:complexType>"#,
            "EntryType",
            "",
            &ignored,
        );
        assert_eq!(
            expr,
            TypeExpr::Object(vec![
                Field::new("description", TypeExpr::STRING),
                Field::new("id", Scalar::Int.into()),
            ])
        );
    }
}
