use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::category::Category;

const BUILTIN_CATEGORIES: &str = include_str!("../../../data/categories.json");

/// Descriptive reference strings for every category.
///
/// These are content, not structure: the registry in [`Category`] decides adjacency, this
/// table only supplies the words the synthesizers interpolate.
#[derive(Clone, Debug)]
pub struct CategoryProfiles {
    profiles: BTreeMap<Category, CategoryProfile>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryProfile {
    pub core_fear: String,
    pub core_desire: String,
    /// Psychological defense the category leans on, e.g. "reaction formation"
    pub defense_mechanism: String,
    /// Third-person phrase describing how the defense shows up in a relationship
    pub strategy: String,
    /// First-person behavioral sentence used in tritype portraits
    pub descriptor: String,
    pub stress: StressTemplate,
}

/// The three phrases of one category's stress loop, each readable after the category name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StressTemplate {
    pub trigger: String,
    pub response: String,
    pub escalation: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCategories {
    #[serde(default)]
    schema_version: Option<u32>,
    categories: Vec<RawCategoryProfile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCategoryProfile {
    id: Category,
    core_fear: String,
    core_desire: String,
    defense_mechanism: String,
    strategy: String,
    descriptor: String,
    stress: StressTemplate,
}

impl RawCategoryProfile {
    fn into_parts(self) -> (Category, CategoryProfile) {
        (
            self.id,
            CategoryProfile {
                core_fear: self.core_fear,
                core_desire: self.core_desire,
                defense_mechanism: self.defense_mechanism,
                strategy: self.strategy,
                descriptor: self.descriptor,
                stress: self.stress,
            },
        )
    }
}

impl CategoryProfiles {
    /// Profiles compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_bytes(BUILTIN_CATEGORIES.as_bytes())
            .expect("bundled category profiles must parse")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read category profiles {}", path.display()))?;
        Self::from_bytes(&bytes)
            .with_context(|| format!("Invalid category profiles in {}", path.display()))
    }

    /// Parse JSON, falling back to TOML.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: RawCategories = crate::parse_json_or_toml(bytes)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawCategories) -> Result<Self> {
        if let Some(version) = raw.schema_version {
            if version != 1 {
                bail!("categories.schema_version {version} is not supported (expected 1)");
            }
        }

        let mut profiles = BTreeMap::new();
        for entry in raw.categories {
            let (id, profile) = entry.into_parts();
            validate_profile(id, &profile)?;
            if profiles.insert(id, profile).is_some() {
                bail!("category {id} is defined more than once");
            }
        }

        let missing: Vec<String> = Category::ALL
            .iter()
            .filter(|c| !profiles.contains_key(c))
            .map(ToString::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(anyhow!("missing profiles for categories: {}", missing.join(", ")));
        }

        log::debug!("loaded {} category profiles", profiles.len());
        Ok(Self { profiles })
    }

    /// Profile of `category`; total because loading guarantees all nine exist.
    pub fn get(&self, category: Category) -> &CategoryProfile {
        &self.profiles[&category]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryProfile)> {
        self.profiles.iter().map(|(c, p)| (*c, p))
    }
}

impl Default for CategoryProfiles {
    fn default() -> Self {
        Self::bundled()
    }
}

fn validate_profile(id: Category, profile: &CategoryProfile) -> Result<()> {
    let fields = [
        ("core_fear", &profile.core_fear),
        ("core_desire", &profile.core_desire),
        ("defense_mechanism", &profile.defense_mechanism),
        ("strategy", &profile.strategy),
        ("descriptor", &profile.descriptor),
        ("stress.trigger", &profile.stress.trigger),
        ("stress.response", &profile.stress.response),
        ("stress.escalation", &profile.stress.escalation),
    ];
    for (name, value) in fields {
        if value.trim().is_empty() {
            bail!("categories[{id}].{name} must not be empty");
        }
    }
    Ok(())
}
