//! Field-list normalization.

/// An ordered list of field names parsed from a selector argument.
///
/// Selectors arrive either as an explicit sequence of names or as a single
/// string using commas and/or whitespace as separators. Any mix of
/// separators collapses; input order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelector {
    names: Vec<String>,
}

impl FieldSelector {
    /// Build a selector from an explicit sequence of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse a comma and/or whitespace separated name list.
    pub fn parse(spec: &str) -> Self {
        Self {
            names: spec
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// The normalized names, in input order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Whether the selector names any field.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<&str> for FieldSelector {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}
