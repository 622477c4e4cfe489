/// Configuration options for [`ZipReader`](super::ZipReader).
///
/// # Examples
///
/// ```rust
/// use ilcd::package::{LookupStrategy, ReaderOptions};
///
/// // Create with defaults
/// let options = ReaderOptions::default();
/// assert_eq!(options.lookup, LookupStrategy::Scan);
///
/// // Or customize
/// let options = ReaderOptions::new().with_lookup(LookupStrategy::Indexed);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReaderOptions {
    /// How entries are located for lookups and enumerations
    pub lookup: LookupStrategy,
}

impl ReaderOptions {
    /// Create a new `ReaderOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookup strategy.
    #[inline]
    pub fn with_lookup(mut self, lookup: LookupStrategy) -> Self {
        self.lookup = lookup;
        self
    }
}

/// How the reader locates the entries of a data set type.
///
/// Both strategies return the same entries in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupStrategy {
    /// Scan the complete directory listing on every call.
    #[default]
    Scan,
    /// Group entry positions by data set type once when the package is
    /// opened; calls only scan the group of the requested type.
    Indexed,
}
