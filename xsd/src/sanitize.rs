use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BROKEN_DOCUMENTATION_OPEN: Regex =
        Regex::new(r"<x/[^>]*:documentation>").unwrap();
    static ref BROKEN_DOCUMENTATION_CLOSE: Regex =
        Regex::new(r"</x/[^>]*:documentation>").unwrap();
}

/// Repairs documentation tags whose prefix got mangled into a path (`<x/...:documentation>`),
/// as found in some published knowledge base schemas. Returns `None` if there was nothing to
/// repair.
pub fn repair_documentation_tags(text: &str) -> Option<String> {
    if !BROKEN_DOCUMENTATION_OPEN.is_match(text) && !BROKEN_DOCUMENTATION_CLOSE.is_match(text) {
        return None;
    }
    let repaired = BROKEN_DOCUMENTATION_OPEN.replace_all(text, "<xs:documentation>");
    let repaired = BROKEN_DOCUMENTATION_CLOSE.replace_all(&repaired, "</xs:documentation>");
    Some(repaired.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repairs_mangled_prefix() {
        let text = "<xs:annotation><x/s:documentation>text</x/s:documentation></xs:annotation>";
        assert_eq!(
            repair_documentation_tags(text).as_deref(),
            Some("<xs:annotation><xs:documentation>text</xs:documentation></xs:annotation>")
        );
    }

    #[test]
    fn leaves_valid_text_alone() {
        assert_eq!(
            repair_documentation_tags("<xs:documentation>ok</xs:documentation>"),
            None
        );
    }
}
