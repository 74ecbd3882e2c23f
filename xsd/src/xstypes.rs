use std::fmt;

/// A type reference as written in a `type` or `base` attribute, split into its optional prefix
/// and local name. Both `prefix:local` and `{namespace}local` spellings are accepted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TypeName<'a> {
    pub prefix: Option<&'a str>,
    pub local_name: &'a str,
}

impl<'a> TypeName<'a> {
    pub fn parse(source: &'a str) -> Self {
        if let Some((namespace, local)) = source.split_once('}') {
            Self {
                prefix: Some(namespace.trim_start_matches('{')),
                local_name: local,
            }
        } else if let Some((prefix, local)) = source.split_once(':') {
            Self {
                prefix: Some(prefix),
                local_name: local,
            }
        } else {
            Self {
                prefix: None,
                local_name: source,
            }
        }
    }
}

impl fmt::Display for TypeName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{}:{}", prefix, self.local_name)
        } else {
            f.write_str(self.local_name)
        }
    }
}
