use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// The three independent 3-way groupings of the nine categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partition {
    /// How each category copes with disappointment
    Harmonic,
    /// Social style: moving against, toward or away from others
    Hornevian,
    /// Childhood relational pattern
    ObjectRelations,
}

impl Partition {
    pub const ALL: [Partition; 3] = [
        Partition::Harmonic,
        Partition::Hornevian,
        Partition::ObjectRelations,
    ];

    /// The three labels of this partition.
    pub fn groups(self) -> [GroupLabel; 3] {
        match self {
            Self::Harmonic => [
                GroupLabel::PositiveOutlook,
                GroupLabel::Competency,
                GroupLabel::EmotionalRealness,
            ],
            Self::Hornevian => [
                GroupLabel::Assertive,
                GroupLabel::Compliant,
                GroupLabel::Withdrawn,
            ],
            Self::ObjectRelations => [
                GroupLabel::Attachment,
                GroupLabel::Frustration,
                GroupLabel::Rejection,
            ],
        }
    }

    /// Group of `category` within this partition.
    pub fn group_of(self, category: Category) -> GroupLabel {
        use Category::*;
        match self {
            Self::Harmonic => match category {
                Two | Seven | Nine => GroupLabel::PositiveOutlook,
                One | Three | Five => GroupLabel::Competency,
                Four | Six | Eight => GroupLabel::EmotionalRealness,
            },
            Self::Hornevian => match category {
                Three | Seven | Eight => GroupLabel::Assertive,
                One | Two | Six => GroupLabel::Compliant,
                Four | Five | Nine => GroupLabel::Withdrawn,
            },
            Self::ObjectRelations => match category {
                Three | Six | Nine => GroupLabel::Attachment,
                One | Four | Seven => GroupLabel::Frustration,
                Two | Five | Eight => GroupLabel::Rejection,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Harmonic => "harmonic",
            Self::Hornevian => "hornevian",
            Self::ObjectRelations => "object_relations",
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A group label inside one of the partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupLabel {
    PositiveOutlook,
    Competency,
    EmotionalRealness,
    Assertive,
    Compliant,
    Withdrawn,
    Attachment,
    Frustration,
    Rejection,
}

impl GroupLabel {
    pub fn partition(self) -> Partition {
        match self {
            Self::PositiveOutlook | Self::Competency | Self::EmotionalRealness => {
                Partition::Harmonic
            }
            Self::Assertive | Self::Compliant | Self::Withdrawn => Partition::Hornevian,
            Self::Attachment | Self::Frustration | Self::Rejection => Partition::ObjectRelations,
        }
    }

    /// Categories carrying this label, in numeric order.
    pub fn members(self) -> Vec<Category> {
        let partition = self.partition();
        Category::ALL
            .into_iter()
            .filter(|c| partition.group_of(*c) == self)
            .collect()
    }

    /// Human-readable label, e.g. "Positive Outlook".
    pub fn title(self) -> &'static str {
        match self {
            Self::PositiveOutlook => "Positive Outlook",
            Self::Competency => "Competency",
            Self::EmotionalRealness => "Emotional Realness",
            Self::Assertive => "Assertive",
            Self::Compliant => "Compliant",
            Self::Withdrawn => "Withdrawn",
            Self::Attachment => "Attachment",
            Self::Frustration => "Frustration",
            Self::Rejection => "Rejection",
        }
    }

    /// What members of the group have in common, readable after "they".
    pub fn theme(self) -> &'static str {
        match self {
            Self::PositiveOutlook => "look on the bright side when things go wrong",
            Self::Competency => "set feelings aside to solve the problem",
            Self::EmotionalRealness => "need feelings acknowledged before moving on",
            Self::Assertive => "move against obstacles to get what they need",
            Self::Compliant => "move toward what is expected of them",
            Self::Withdrawn => "step back into their own space to cope",
            Self::Attachment => "stay connected to what once felt safe",
            Self::Frustration => "feel that what they get never quite measures up",
            Self::Rejection => "expect to have to earn their place",
        }
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Labels shared by `a` and `b`, one per partition at most, in partition order.
pub fn shared_groups(a: Category, b: Category) -> Vec<GroupLabel> {
    Partition::ALL
        .into_iter()
        .filter_map(|p| {
            let group = p.group_of(a);
            (group == p.group_of(b)).then_some(group)
        })
        .collect()
}
