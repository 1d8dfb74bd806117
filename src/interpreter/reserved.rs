use std::{collections::HashSet, io, path::Path};

use crate::interpreter::evaluator::builtin::BUILTIN_FUNCTIONS;

/// Literal keywords that can never be bound.
pub const LITERAL_KEYWORDS: &[&str] = &["true", "false", "null"];

/// The set of identifiers programs may not bind.
///
/// Every set contains the built-in names and the literal keywords; extra
/// names are usually loaded from a newline-delimited list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedNames {
    names: HashSet<String>,
}

impl Default for ReservedNames {
    fn default() -> Self {
        Self { names: BUILTIN_FUNCTIONS.iter()
                                       .chain(LITERAL_KEYWORDS)
                                       .map(ToString::to_string)
                                       .collect(), }
    }
}

impl ReservedNames {
    /// Builds a set from a newline-delimited list.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    ///
    /// # Example
    /// ```
    /// use eucalyptus::interpreter::reserved::ReservedNames;
    ///
    /// let reserved = ReservedNames::parse("map\n  filter  \n\n");
    ///
    /// assert!(reserved.contains("filter"));
    /// assert!(reserved.contains("print"));
    /// assert!(!reserved.contains("total"));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut reserved = Self::default();
        reserved.extend(text.lines().map(str::trim).filter(|line| !line.is_empty()));
        reserved
    }

    /// Reads a newline-delimited list of names from `path`.
    ///
    /// # Errors
    /// Returns the I/O error if the file cannot be read.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Checks whether `name` is reserved.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of reserved names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always `false`: the built-in names are part of every set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for ReservedNames {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}
