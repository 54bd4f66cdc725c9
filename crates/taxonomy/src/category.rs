use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaxonomyError};

/// One of the nine fixed personality categories.
///
/// Serialized as its bare number (`1`..=`9`). Every adjacency relation the rest of the
/// workspace relies on (center, wings, growth and stress lines) is answered here and
/// nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Category {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Category {
    /// All categories in numeric order.
    pub const ALL: [Category; 9] = [
        Category::One,
        Category::Two,
        Category::Three,
        Category::Four,
        Category::Five,
        Category::Six,
        Category::Seven,
        Category::Eight,
        Category::Nine,
    ];

    /// Convert a numeric identifier into a category.
    ///
    /// # Errors
    /// `TaxonomyError::InvalidCategory` for anything outside `1..=9`.
    pub fn new(id: u8) -> Result<Self> {
        match id {
            1..=9 => Ok(Self::ALL[usize::from(id - 1)]),
            other => Err(TaxonomyError::invalid_category(other)),
        }
    }

    /// Numeric identifier, `1..=9`.
    #[inline]
    pub fn id(self) -> u8 {
        self as u8 + 1
    }

    /// Zero-based position, handy for fixed-size score arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Conventional short name of the category.
    pub fn name(self) -> &'static str {
        match self {
            Self::One => "Reformer",
            Self::Two => "Helper",
            Self::Three => "Achiever",
            Self::Four => "Individualist",
            Self::Five => "Investigator",
            Self::Six => "Loyalist",
            Self::Seven => "Enthusiast",
            Self::Eight => "Challenger",
            Self::Nine => "Peacemaker",
        }
    }

    /// The center (intelligence triad) this category belongs to.
    pub fn center(self) -> Center {
        match self {
            Self::Eight | Self::Nine | Self::One => Center::Gut,
            Self::Two | Self::Three | Self::Four => Center::Heart,
            Self::Five | Self::Six | Self::Seven => Center::Head,
        }
    }

    /// Both wing neighbors as `(low, high)`.
    ///
    /// `low` is the numeric predecessor and `high` the successor on the circle, so the
    /// wrap-around point reads `One -> (Nine, Two)` and `Nine -> (Eight, One)`.
    pub fn wings(self) -> (Category, Category) {
        let idx = self.index();
        (Self::ALL[(idx + 8) % 9], Self::ALL[(idx + 1) % 9])
    }

    /// True when `other` is one of this category's two wings.
    pub fn is_wing(self, other: Category) -> bool {
        let (low, high) = self.wings();
        other == low || other == high
    }

    /// Direction of growth (the "integration" line).
    pub fn integration_target(self) -> Category {
        match self {
            Self::One => Self::Seven,
            Self::Two => Self::Four,
            Self::Three => Self::Six,
            Self::Four => Self::One,
            Self::Five => Self::Eight,
            Self::Six => Self::Nine,
            Self::Seven => Self::Five,
            Self::Eight => Self::Two,
            Self::Nine => Self::Three,
        }
    }

    /// Direction of stress (the "disintegration" line).
    pub fn disintegration_target(self) -> Category {
        match self {
            Self::One => Self::Four,
            Self::Two => Self::Eight,
            Self::Three => Self::Nine,
            Self::Four => Self::Two,
            Self::Five => Self::Seven,
            Self::Six => Self::Three,
            Self::Seven => Self::One,
            Self::Eight => Self::Five,
            Self::Nine => Self::Six,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl TryFrom<u8> for Category {
    type Error = TaxonomyError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Category> for u8 {
    fn from(value: Category) -> Self {
        value.id()
    }
}

impl FromStr for Category {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .map_err(|_| TaxonomyError::invalid_category(trimmed))
            .and_then(Self::new)
    }
}

/// One of the three centers of intelligence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Center {
    Gut,
    Heart,
    Head,
}

impl Center {
    /// Canonical center order, also the priority order used after a tritype's lead.
    pub const ALL: [Center; 3] = [Center::Gut, Center::Heart, Center::Head];

    /// Categories of this center in numeric order.
    pub fn members(self) -> [Category; 3] {
        match self {
            Self::Gut => [Category::One, Category::Eight, Category::Nine],
            Self::Heart => [Category::Two, Category::Three, Category::Four],
            Self::Head => [Category::Five, Category::Six, Category::Seven],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gut => "gut",
            Self::Heart => "heart",
            Self::Head => "head",
        }
    }
}

impl fmt::Display for Center {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Center {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gut" | "body" | "instinctive" => Ok(Self::Gut),
            "heart" | "feeling" => Ok(Self::Heart),
            "head" | "thinking" => Ok(Self::Head),
            _ => Err(TaxonomyError::invalid_center(s.trim())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rejects_ids_outside_domain() {
        assert!(matches!(Category::new(0), Err(TaxonomyError::InvalidCategory(_))));
        assert!(matches!(Category::new(10), Err(TaxonomyError::InvalidCategory(_))));
        assert!(matches!("x".parse::<Category>(), Err(TaxonomyError::InvalidCategory(_))));
        assert_eq!(" 4 ".parse::<Category>().unwrap(), Category::Four);
    }

    #[test]
    fn ids_round_trip_through_positions() {
        for (pos, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), pos);
            assert_eq!(Category::new(category.id()).unwrap(), *category);
        }
    }

    #[test]
    fn wraparound_wings() {
        assert_eq!(Category::One.wings(), (Category::Nine, Category::Two));
        assert_eq!(Category::Nine.wings(), (Category::Eight, Category::One));
        assert_eq!(Category::Five.wings(), (Category::Four, Category::Six));
    }

    #[test]
    fn high_wing_walk_is_a_single_cycle() {
        let mut seen = Vec::new();
        let mut current = Category::One;
        for _ in 0..9 {
            seen.push(current);
            current = current.wings().1;
        }
        assert_eq!(current, Category::One);
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn neighbors_never_include_self() {
        for category in Category::ALL {
            let (low, high) = category.wings();
            assert_ne!(low, category);
            assert_ne!(high, category);
            assert_ne!(low, high);
            assert!(category.is_wing(low) && category.is_wing(high));
        }
    }

    #[test]
    fn lines_never_point_at_self() {
        for category in Category::ALL {
            assert_ne!(category.integration_target(), category);
            assert_ne!(category.disintegration_target(), category);
        }
        assert_eq!(Category::One.integration_target(), Category::Seven);
        assert_eq!(Category::Seven.disintegration_target(), Category::One);
    }

    #[test]
    fn centers_partition_categories() {
        let mut all: Vec<Category> = Center::ALL.iter().flat_map(|c| c.members()).collect();
        all.sort();
        assert_eq!(all, Category::ALL.to_vec());
        for center in Center::ALL {
            for member in center.members() {
                assert_eq!(member.center(), center);
            }
        }
    }

    #[test]
    fn center_parsing() {
        assert_eq!("Heart".parse::<Center>().unwrap(), Center::Heart);
        assert!(matches!("gutt".parse::<Center>(), Err(TaxonomyError::InvalidCenter(_))));
    }

    #[test]
    fn serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&Category::Eight).unwrap(), "8");
        assert_eq!(serde_json::from_str::<Category>("3").unwrap(), Category::Three);
        assert!(serde_json::from_str::<Category>("12").is_err());
    }
}
