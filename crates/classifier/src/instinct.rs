use std::fmt;

use serde::{Deserialize, Serialize};

/// The secondary axis: three instinctual drives, ranked per person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Instinct {
    #[serde(rename = "sp")]
    SelfPreservation,
    #[serde(rename = "so")]
    Social,
    #[serde(rename = "sx")]
    OneToOne,
}

impl Instinct {
    /// Canonical order; also the tie-break when two drives score the same.
    pub const ALL: [Instinct; 3] = [
        Instinct::SelfPreservation,
        Instinct::Social,
        Instinct::OneToOne,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn abbrev(self) -> &'static str {
        match self {
            Self::SelfPreservation => "sp",
            Self::Social => "so",
            Self::OneToOne => "sx",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SelfPreservation => "Self-Preservation",
            Self::Social => "Social",
            Self::OneToOne => "One-to-One",
        }
    }
}

impl fmt::Display for Instinct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Render a ranked stack the conventional way, e.g. `sp/sx/so`.
pub fn stack_code(stack: &[Instinct; 3]) -> String {
    stack
        .iter()
        .map(|i| i.abbrev())
        .collect::<Vec<_>>()
        .join("/")
}
