use ennea_taxonomy::{Category, CategoryProfiles, Center, TaxonomyError};
use serde::{Deserialize, Serialize};

/// One category per center, each checked against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct TritypeSelection {
    gut: Category,
    heart: Category,
    head: Category,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSelection {
    gut: Category,
    heart: Category,
    head: Category,
}

impl TryFrom<RawSelection> for TritypeSelection {
    type Error = TaxonomyError;

    fn try_from(raw: RawSelection) -> Result<Self, Self::Error> {
        Self::new(raw.gut, raw.heart, raw.head)
    }
}

impl TritypeSelection {
    /// # Errors
    /// [`TaxonomyError::CenterMismatch`] for the first category placed under the wrong center.
    pub fn new(gut: Category, heart: Category, head: Category) -> Result<Self, TaxonomyError> {
        let placed = [(Center::Gut, gut), (Center::Heart, heart), (Center::Head, head)];
        for (expected, category) in placed {
            let actual = category.center();
            if actual != expected {
                return Err(TaxonomyError::CenterMismatch {
                    category,
                    expected,
                    actual,
                });
            }
        }
        Ok(Self { gut, heart, head })
    }

    pub fn get(&self, center: Center) -> Category {
        match center {
            Center::Gut => self.gut,
            Center::Heart => self.heart,
            Center::Head => self.head,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TritypeResult {
    /// Lead category first, then the remaining centers in gut, heart, head order
    pub sequence: [Category; 3],
    pub lead: Center,
    /// Digits of `sequence`, e.g. "285"
    pub code: String,
    pub portrait: String,
}

/// Orders a tritype and writes its portrait from the category profiles.
#[derive(Debug, Clone, Copy)]
pub struct TritypeComposer<'a> {
    profiles: &'a CategoryProfiles,
}

impl<'a> TritypeComposer<'a> {
    pub fn new(profiles: &'a CategoryProfiles) -> Self {
        Self { profiles }
    }

    pub fn compose(&self, selection: &TritypeSelection, lead: Center) -> TritypeResult {
        let sequence = canonical_order(selection, lead);
        let code: String = sequence.iter().map(ToString::to_string).collect();

        let [first, second, third] = sequence;
        let lead_profile = self.profiles.get(first);
        let portrait = format!(
            "Leading with the {} ({}): {} At my core I want {}, and what I fear most is {}. \
             Backing that up, the {} ({}): {} Rounding it out, the {} ({}): {}",
            first.name(),
            first,
            lead_profile.descriptor,
            lead_profile.core_desire,
            lead_profile.core_fear,
            second.name(),
            second,
            self.profiles.get(second).descriptor,
            third.name(),
            third,
            self.profiles.get(third).descriptor,
        );

        log::debug!("composed tritype {code} with {lead} lead");
        TritypeResult {
            sequence,
            lead,
            code,
            portrait,
        }
    }
}

fn canonical_order(selection: &TritypeSelection, lead: Center) -> [Category; 3] {
    let mut sequence = [selection.get(lead); 3];
    let rest = Center::ALL.into_iter().filter(|center| *center != lead);
    for (slot, center) in sequence.iter_mut().skip(1).zip(rest) {
        *slot = selection.get(center);
    }
    sequence
}
