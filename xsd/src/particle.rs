use roxmltree::Node;

use super::expr::TypeExpr;
use super::values::{actual_value, ActualValue};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MaxOccurs {
    Unbounded,
    Count(u64),
}

impl MaxOccurs {
    /// Anything but exactly one occurrence is rendered as a list, including `maxOccurs="0"`.
    pub fn is_many(self) -> bool {
        !matches!(self, Self::Count(1))
    }
}

impl ActualValue for MaxOccurs {
    fn convert(src: &str) -> Option<Self> {
        if src.trim() == "unbounded" {
            Some(Self::Unbounded)
        } else {
            u64::convert(src).map(Self::Count)
        }
    }
}

/// The occurrence range of an element declaration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Occurs {
    pub min: u64,
    pub max: MaxOccurs,
}

impl Occurs {
    pub fn of(element: Node) -> Self {
        // {min occurs} The actual value of the minOccurs [attribute], if present, otherwise 1.
        let min = actual_value(element, "minOccurs").unwrap_or(1);
        // {max occurs} unbounded, if the maxOccurs [attribute] equals unbounded, otherwise the
        // actual value of the maxOccurs [attribute], if present, otherwise 1.
        // A present but unparsable maxOccurs is anything but exactly one, so it repeats.
        let max = match element.attribute("maxOccurs") {
            Some(_) => actual_value(element, "maxOccurs").unwrap_or(MaxOccurs::Unbounded),
            None => MaxOccurs::Count(1),
        };
        Self { min, max }
    }

    /// A required, repeated element: the shape a wrapper type collapses into a bare list for.
    pub fn is_required_list(self) -> bool {
        self.min == 1 && self.max.is_many()
    }

    /// Wraps `expr` according to this range. `List` is applied first, so an optional repeated
    /// element becomes `Optional(List(expr))`.
    pub fn wrap(self, expr: TypeExpr) -> TypeExpr {
        let expr = if self.max.is_many() {
            TypeExpr::list(expr)
        } else {
            expr
        };
        if self.min == 0 {
            TypeExpr::optional(expr)
        } else {
            expr
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occurs(attributes: &str) -> Occurs {
        let xml = format!("<element {attributes}/>");
        let doc = roxmltree::Document::parse(&xml).unwrap();
        Occurs::of(doc.root_element())
    }

    #[test]
    fn defaults_to_exactly_one() {
        let occurs = occurs("");
        assert_eq!(occurs.min, 1);
        assert_eq!(occurs.max, MaxOccurs::Count(1));
        assert_eq!(occurs.wrap(TypeExpr::STRING), TypeExpr::STRING);
    }

    #[test]
    fn optional_list_nesting_order() {
        for max in ["unbounded", "2", "10"] {
            let occurs = occurs(&format!(r#"minOccurs="0" maxOccurs="{max}""#));
            assert_eq!(
                occurs.wrap(TypeExpr::STRING),
                TypeExpr::optional(TypeExpr::list(TypeExpr::STRING))
            );
        }
    }

    #[test]
    fn single_wrappers() {
        assert_eq!(
            occurs(r#"minOccurs="0""#).wrap(TypeExpr::STRING),
            TypeExpr::optional(TypeExpr::STRING)
        );
        assert_eq!(
            occurs(r#"maxOccurs="unbounded""#).wrap(TypeExpr::STRING),
            TypeExpr::list(TypeExpr::STRING)
        );
    }

    #[test]
    fn required_list_detection() {
        assert!(occurs(r#"maxOccurs="unbounded""#).is_required_list());
        assert!(occurs(r#"minOccurs="1" maxOccurs="5""#).is_required_list());
        assert!(!occurs(r#"minOccurs="0" maxOccurs="unbounded""#).is_required_list());
        assert!(!occurs("").is_required_list());
    }

    #[test]
    fn unparsable_max_repeats() {
        let occurs = occurs(r#"maxOccurs="many""#);
        assert_eq!(occurs.max, MaxOccurs::Unbounded);
        assert_eq!(occurs.wrap(TypeExpr::STRING), TypeExpr::list(TypeExpr::STRING));
    }

    #[test]
    fn unparsable_min_is_required() {
        assert_eq!(occurs(r#"minOccurs="none""#).wrap(TypeExpr::STRING), TypeExpr::STRING);
    }
}
