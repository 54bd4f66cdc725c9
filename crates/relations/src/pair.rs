use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use ennea_taxonomy::{Category, TaxonomyError};
use serde::{Deserialize, Serialize};

/// An unordered pair of categories, stored with the lower identifier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryPair {
    low: Category,
    high: Category,
}

impl CategoryPair {
    pub fn new(a: Category, b: Category) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn low(&self) -> Category {
        self.low
    }

    pub fn high(&self) -> Category {
        self.high
    }

    /// Same category on both sides.
    pub fn is_self(&self) -> bool {
        self.low == self.high
    }

}

impl fmt::Display for CategoryPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low, self.high)
    }
}

/// Parses the `"a-b"` keys used by curated tables. Either orientation is accepted.
impl FromStr for CategoryPair {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once('-')
            .ok_or_else(|| TaxonomyError::invalid_category(s.trim()))?;
        Ok(Self::new(a.parse()?, b.parse()?))
    }
}

/// Lookup table keyed by unordered category pairs.
///
/// Every curated pair table goes through this type. Entries are authored once, in either
/// orientation, and `get(a, b)` and `get(b, a)` resolve to the same entry. Authoring one
/// pair in both orientations is refused at insert time, so no lookup ever depends on
/// argument order.
#[derive(Debug, Clone)]
pub struct SymmetricTable<T> {
    entries: HashMap<CategoryPair, T>,
}

/// Returned when a pair is inserted twice (in the same or the opposite orientation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicatePair(pub CategoryPair);

impl fmt::Display for DuplicatePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pair {} is defined more than once", self.0)
    }
}

impl std::error::Error for DuplicatePair {}

impl<T> SymmetricTable<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, a: Category, b: Category, value: T) -> Result<(), DuplicatePair> {
        let key = CategoryPair::new(a, b);
        if self.entries.contains_key(&key) {
            return Err(DuplicatePair(key));
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Entry for `{a, b}` regardless of which orientation was authored.
    pub fn get(&self, a: Category, b: Category) -> Option<&T> {
        self.entries.get(&CategoryPair::new(a, b))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for SymmetricTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pair_is_normalized() {
        let forward = CategoryPair::new(Category::Seven, Category::One);
        assert_eq!(forward, CategoryPair::new(Category::One, Category::Seven));
        assert_eq!(forward.low(), Category::One);
        assert_eq!(forward.to_string(), "1-7");
        assert!(!forward.is_self());
        assert!(CategoryPair::new(Category::Two, Category::Two).is_self());
    }

    #[test]
    fn parses_either_orientation() {
        let a: CategoryPair = "8-2".parse().unwrap();
        let b: CategoryPair = "2-8".parse().unwrap();
        assert_eq!(a, b);
        assert!("2".parse::<CategoryPair>().is_err());
        assert!("0-3".parse::<CategoryPair>().is_err());
    }

    #[test]
    fn lookup_ignores_orientation() {
        let mut table = SymmetricTable::new();
        table.insert(Category::Nine, Category::Three, "entry").unwrap();
        assert_eq!(table.get(Category::Three, Category::Nine), Some(&"entry"));
        assert_eq!(table.get(Category::Nine, Category::Three), Some(&"entry"));
        assert_eq!(table.get(Category::Nine, Category::Four), None);
    }

    #[test]
    fn rejects_both_orientations() {
        let mut table = SymmetricTable::new();
        table.insert(Category::One, Category::Two, 1).unwrap();
        let err = table.insert(Category::Two, Category::One, 2).unwrap_err();
        assert_eq!(err.to_string(), "pair 1-2 is defined more than once");
        assert_eq!(table.get(Category::Two, Category::One), Some(&1));
    }
}
