use std::collections::hash_map::Entry;
use std::collections::HashMap;

use roxmltree::{Document, Node};

use super::tags::XsTag;

/// Top-level named declarations of a schema document, bucketed by kind.
///
/// Keys are the raw `name` attributes. The index is built once per document and never changes
/// afterwards; if a name is declared twice in the same bucket, the first declaration is kept.
#[derive(Debug)]
pub struct SchemaIndex<'a, 'input> {
    simple_types: HashMap<&'a str, Node<'a, 'input>>,
    complex_types: HashMap<&'a str, Node<'a, 'input>>,
    global_elements: HashMap<&'a str, Node<'a, 'input>>,
}

impl<'a, 'input: 'a> SchemaIndex<'a, 'input> {
    /// Walks the direct children of the document's root element. Unnamed children and tags other
    /// than `simpleType`, `complexType` and `element` are skipped.
    pub fn build(document: &'a Document<'input>) -> Self {
        let schema = document.root_element();
        if XsTag::of(schema) != XsTag::Schema {
            tracing::warn!(
                tag = schema.tag_name().name(),
                "root element is not an xs:schema, indexing its children anyway"
            );
        }

        let mut index = Self {
            simple_types: HashMap::new(),
            complex_types: HashMap::new(),
            global_elements: HashMap::new(),
        };

        for top_level_element in schema.children().filter(|e| e.is_element()) {
            let Some(name) = top_level_element.attribute("name") else {
                continue;
            };
            let bucket = match XsTag::of(top_level_element) {
                XsTag::SimpleType => &mut index.simple_types,
                XsTag::ComplexType => &mut index.complex_types,
                XsTag::Element => &mut index.global_elements,
                _ => continue,
            };
            match bucket.entry(name) {
                Entry::Vacant(entry) => {
                    entry.insert(top_level_element);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(
                        name,
                        tag = top_level_element.tag_name().name(),
                        "duplicate top-level declaration, keeping the first one"
                    );
                }
            }
        }

        tracing::debug!(
            simple_types = index.simple_types.len(),
            complex_types = index.complex_types.len(),
            global_elements = index.global_elements.len(),
            "indexed schema"
        );
        index
    }

    pub fn simple_type(&self, name: &str) -> Option<Node<'a, 'input>> {
        self.simple_types.get(name).copied()
    }

    pub fn complex_type(&self, name: &str) -> Option<Node<'a, 'input>> {
        self.complex_types.get(name).copied()
    }

    pub fn global_element(&self, name: &str) -> Option<Node<'a, 'input>> {
        self.global_elements.get(name).copied()
    }
}
