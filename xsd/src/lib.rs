//! Compiles an XSD type graph into a compact, indented pseudo-schema describing the shape of one
//! root type: scalars, enums, objects, optionals and lists.
//!
//! ```text
//! attack_pattern:
//!   id: int
//!   abstraction: enum("Meta", "Standard", "Detailed")
//!   description: structured_text
//!   example_instances: optional<
//!     list<structured_text>
//!   >
//! ```
//!
//! Resolution is best-effort: unknown or unsupported schema constructs degrade to `string` or to
//! an empty object (`{}`) instead of failing. The only fatal condition is a root that names
//! neither a global element nor a complex type.

pub mod builtins;
pub mod error;
pub mod expr;
pub mod filter;
pub mod naming;
pub mod particle;
pub mod render;
pub mod root;
pub mod sanitize;
pub mod schema;
pub mod tags;
pub mod xstypes;

mod attribute_decl;
mod complex_type_def;
mod element_decl;
mod mapping_context;
mod simple_type_def;
mod values;

pub use error::{Result, XsdError};
pub use expr::{Field, Scalar, TypeExpr};
pub use filter::IgnoreSet;
pub use mapping_context::ResolveContext;
pub use naming::normalize;
pub use render::render;
pub use root::compile_root;
pub use schema::SchemaIndex;

use roxmltree::{Document, ParsingOptions};

/// What to compile, and how to report it.
#[derive(Clone, Debug)]
pub struct CompileOptions {
    /// Logical root identifier, e.g. `attack_pattern`, or a declared element/type name.
    pub root: String,
    pub ignored: IgnoreSet,
    /// Path or URL of the schema, used in error messages.
    pub origin: String,
}

impl CompileOptions {
    pub fn new(root: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ignored: IgnoreSet::new(),
            origin: origin.into(),
        }
    }

    pub fn with_ignored(mut self, ignored: IgnoreSet) -> Self {
        self.ignored = ignored;
        self
    }
}

/// Compiles the root named in `options` and renders it as pseudo-schema text.
pub fn compile(document: &Document, options: &CompileOptions) -> Result<String> {
    let index = SchemaIndex::build(document);
    let context = ResolveContext::new(&index, &options.ignored);
    let (root_name, expr) = compile_root(&context, &options.root, &options.origin)?;
    Ok(render(&root_name, &expr))
}

/// Parses `text` and compiles it. If the text is not well-formed, broken documentation tags are
/// repaired (see [`sanitize::repair_documentation_tags`]) and parsing is retried once.
pub fn compile_str(
    text: &str,
    options: &CompileOptions,
    parsing: ParsingOptions,
) -> Result<String> {
    match Document::parse_with_options(text, parsing) {
        Ok(document) => compile(&document, options),
        Err(error) => {
            let Some(repaired) = sanitize::repair_documentation_tags(text) else {
                return Err(error.into());
            };
            tracing::debug!(
                %error,
                origin = %options.origin,
                "retrying after repairing documentation tags"
            );
            let document = Document::parse_with_options(&repaired, parsing)?;
            compile(&document, options)
        }
    }
}
