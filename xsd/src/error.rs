use thiserror::Error;

#[derive(Debug, Error)]
pub enum XsdError {
    /// The root identifier names neither a global element nor a complex type.
    #[error("root {root:?} not found in schema {origin}")]
    NotFound { root: String, origin: String },
    #[error("the schema is not well-formed XML")]
    Xml(#[from] roxmltree::Error),
}

pub type Result<T> = std::result::Result<T, XsdError>;
