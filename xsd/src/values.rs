use roxmltree::Node;

/// Conversion of an attribute's lexical value into its typed value. Conversions never fail the
/// compilation: a value that cannot be converted yields `None` and the caller falls back to the
/// attribute's default.
pub trait ActualValue: Sized {
    fn convert(src: &str) -> Option<Self>;
}

impl ActualValue for u64 {
    fn convert(src: &str) -> Option<Self> {
        src.trim().parse().ok()
    }
}

/// Reads and converts the attribute `name` of `node`, or `None` if it is absent. An unparsable
/// value is reported and treated as absent.
pub fn actual_value<T: ActualValue>(node: Node, name: &str) -> Option<T> {
    let src = node.attribute(name)?;
    let value = T::convert(src);
    if value.is_none() {
        tracing::warn!(
            element = node.tag_name().name(),
            attribute = name,
            value = src,
            "ignoring unparsable attribute value"
        );
    }
    value
}
