//! Repeatable option values

use core::fmt;
use core::slice;

use clap::ArgMatches;

/// Ordered collection of every occurrence of a repeatable option
///
/// Values keep command-line order; nothing is deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulator<T> {
    values: Vec<T>,
}

/// Identifiers gathered from repeated `--id` options
pub type IdList = Accumulator<String>;

impl<T> Accumulator<T> {
    /// Create an empty accumulator
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Record one more occurrence
    #[inline]
    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    /// Most recent occurrence
    #[must_use]
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.values.last()
    }

    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.values.iter()
    }
}

impl<T: Clone + Send + Sync + 'static> Accumulator<T> {
    /// Collect every occurrence of the option `id` from parsed matches
    ///
    /// The option must be declared with `ArgAction::Append`.
    #[must_use]
    #[inline]
    pub fn from_matches(matches: &ArgMatches, id: &str) -> Self {
        matches
            .get_many::<T>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    }
}

impl<T> Default for Accumulator<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Accumulator<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'acc, T> IntoIterator for &'acc Accumulator<T> {
    type Item = &'acc T;
    type IntoIter = slice::Iter<'acc, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Accumulator<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_duplicates() {
        let mut ids = IdList::new();
        for id in ["c", "a", "c"] {
            ids.push(id.to_owned());
        }
        assert_eq!(ids.as_slice(), ["c", "a", "c"]);
        assert_eq!(ids.last().map(String::as_str), Some("c"));
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn renders_joined_by_comma() {
        let ids: IdList = ["a", "b", "c"].into_iter().map(str::to_owned).collect();
        assert_eq!(ids.to_string(), "a, b, c");
        assert_eq!(IdList::new().to_string(), "");
    }

    #[test]
    fn works_for_other_element_types() {
        let numbers: Accumulator<u32> = [3, 1, 2].into_iter().collect();
        assert_eq!(numbers.to_string(), "3, 1, 2");
        assert_eq!(numbers.iter().sum::<u32>(), 6);
    }
}
