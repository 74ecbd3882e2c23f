use std::collections::HashSet;

use super::expr::Field;
use super::naming::normalize;

/// Normalized field names to drop from every object, at any depth.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IgnoreSet(HashSet<String>);

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from raw names, normalizing each one.
    pub fn from_raw<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            names
                .into_iter()
                .map(|name| normalize(name.as_ref()))
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Drops ignored fields, keeping the relative order of the rest.
    pub fn filter(&self, fields: Vec<Field>) -> Vec<Field> {
        if self.0.is_empty() {
            return fields;
        }
        fields
            .into_iter()
            .filter(|field| !self.contains(&field.name))
            .collect()
    }
}
