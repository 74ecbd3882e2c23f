use roxmltree::Node;

use super::builtins::XS_NAMESPACE;

/// The XSD element kinds the compiler understands. Everything else in the schema namespace, and
/// every element outside it, is [`XsTag::Other`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum XsTag {
    Schema,
    SimpleType,
    ComplexType,
    Element,
    Attribute,
    Sequence,
    ComplexContent,
    SimpleContent,
    Extension,
    Restriction,
    Enumeration,
    /// `choice`, `all`, `group` and `attributeGroup` are recognized only so that skipping them
    /// can be reported.
    Unsupported,
    Other,
}

impl XsTag {
    pub fn of(node: Node) -> Self {
        if !node.is_element() || node.tag_name().namespace() != Some(XS_NAMESPACE) {
            return Self::Other;
        }
        match node.tag_name().name() {
            "schema" => Self::Schema,
            "simpleType" => Self::SimpleType,
            "complexType" => Self::ComplexType,
            "element" => Self::Element,
            "attribute" => Self::Attribute,
            "sequence" => Self::Sequence,
            "complexContent" => Self::ComplexContent,
            "simpleContent" => Self::SimpleContent,
            "extension" => Self::Extension,
            "restriction" => Self::Restriction,
            "enumeration" => Self::Enumeration,
            "choice" | "all" | "group" | "attributeGroup" => Self::Unsupported,
            _ => Self::Other,
        }
    }
}

/// The direct children of `node` with the given tag, in document order.
pub fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    tag: XsTag,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(move |c| XsTag::of(*c) == tag)
}

/// The first direct child of `node` with the given tag.
pub fn first_child<'a, 'input: 'a>(node: Node<'a, 'input>, tag: XsTag) -> Option<Node<'a, 'input>> {
    children(node, tag).next()
}
