use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use ennea_taxonomy::parse_json_or_toml;
use serde::{Deserialize, Serialize};

use crate::config::ScoringConfig;
use crate::pair::{CategoryPair, SymmetricTable};

const BUILTIN_PAIRS: &str = include_str!("../../../data/pairs.json");

/// Hand-written archetype for one pair.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CuratedArchetype {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
}

/// Curated pair content plus the scoring weights it was written against.
///
/// Every table is keyed by unordered pair. Entries missing from a table are normal: the
/// synthesizer falls back to generic templates for them.
#[derive(Clone, Debug)]
pub struct PairTables {
    archetypes: SymmetricTable<CuratedArchetype>,
    interactions: SymmetricTable<String>,
    advice: SymmetricTable<String>,
    scoring: ScoringConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPairTables {
    #[serde(default)]
    schema_version: Option<u32>,
    #[serde(default)]
    scoring: Option<ScoringConfig>,
    #[serde(default)]
    archetypes: BTreeMap<String, CuratedArchetype>,
    #[serde(default)]
    interactions: BTreeMap<String, String>,
    #[serde(default)]
    advice: BTreeMap<String, String>,
}

impl PairTables {
    /// Tables compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_bytes(BUILTIN_PAIRS.as_bytes()).expect("bundled pair tables must parse")
    }

    /// No curated content, default scoring.
    pub fn empty() -> Self {
        Self {
            archetypes: SymmetricTable::new(),
            interactions: SymmetricTable::new(),
            advice: SymmetricTable::new(),
            scoring: ScoringConfig::default(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read pair tables {}", path.display()))?;
        Self::from_bytes(&bytes)
            .with_context(|| format!("Invalid pair tables in {}", path.display()))
    }

    /// Parse JSON, falling back to TOML.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: RawPairTables = parse_json_or_toml(bytes)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawPairTables) -> Result<Self> {
        if let Some(version) = raw.schema_version {
            if version != 1 {
                bail!("pairs.schema_version {version} is not supported (expected 1)");
            }
        }

        let scoring = raw.scoring.unwrap_or_default();
        if let Err(err) = scoring.validate() {
            bail!("pairs.scoring: {err}");
        }

        let archetypes = build_table("archetypes", raw.archetypes, |pair, entry| {
            if entry.name.trim().is_empty() {
                bail!("archetypes.{pair}.name must not be empty");
            }
            if entry.tagline.trim().is_empty() {
                bail!("archetypes.{pair}.tagline must not be empty");
            }
            Ok(())
        })?;
        let interactions = build_table("interactions", raw.interactions, |pair, text| {
            if pair.is_self() {
                bail!(
                    "interactions.{pair} is never used: a category paired with itself \
                     always gets the mirrored narrative"
                );
            }
            non_empty("interactions", pair, text)
        })?;
        let advice = build_table("advice", raw.advice, |pair, text| {
            non_empty("advice", pair, text)
        })?;

        log::debug!(
            "loaded pair tables: {} archetypes, {} interactions, {} advice entries",
            archetypes.len(),
            interactions.len(),
            advice.len()
        );

        Ok(Self {
            archetypes,
            interactions,
            advice,
            scoring,
        })
    }

    pub fn archetypes(&self) -> &SymmetricTable<CuratedArchetype> {
        &self.archetypes
    }

    pub fn interactions(&self) -> &SymmetricTable<String> {
        &self.interactions
    }

    pub fn advice(&self) -> &SymmetricTable<String> {
        &self.advice
    }

    /// Scoring weights from the `scoring` section, or the defaults.
    pub fn scoring(&self) -> ScoringConfig {
        self.scoring
    }
}

impl Default for PairTables {
    fn default() -> Self {
        Self::bundled()
    }
}

fn build_table<T>(
    section: &str,
    raw: BTreeMap<String, T>,
    check: impl Fn(CategoryPair, &T) -> Result<()>,
) -> Result<SymmetricTable<T>> {
    let mut table = SymmetricTable::new();
    for (key, value) in raw {
        let pair: CategoryPair = key
            .parse()
            .with_context(|| format!("{section}: key {key:?} is not a pair like \"1-2\""))?;
        check(pair, &value)?;
        table
            .insert(pair.low(), pair.high(), value)
            .with_context(|| format!("{section}: key {key:?}"))?;
    }
    Ok(table)
}

fn non_empty(section: &str, pair: CategoryPair, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("{section}.{pair} must not be empty");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ennea_taxonomy::Category;
    use pretty_assertions::assert_eq;

    #[test]
    fn bundled_tables_load() {
        let tables = PairTables::bundled();
        assert!(!tables.archetypes().is_empty());
        assert!(!tables.interactions().is_empty());
        assert!(!tables.advice().is_empty());
        assert_eq!(tables.scoring(), ScoringConfig::default());
    }

    #[test]
    fn bundled_tables_leave_one_seven_uncurated() {
        let tables = PairTables::bundled();
        assert!(tables.archetypes().get(Category::One, Category::Seven).is_none());
    }

    #[test]
    fn either_orientation_resolves() {
        let tables = PairTables::from_bytes(
            br#"{"archetypes": {"8-2": {"name": "Protector and Giver", "tagline": "t"}}}"#,
        )
        .unwrap();
        let forward = tables.archetypes().get(Category::Two, Category::Eight).unwrap();
        let backward = tables.archetypes().get(Category::Eight, Category::Two).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.name, "Protector and Giver");
        assert!(forward.strengths.is_empty());
    }

    #[test]
    fn rejects_pair_authored_twice() {
        let err = PairTables::from_bytes(br#"{"advice": {"3-9": "a", "9-3": "b"}}"#).unwrap_err();
        let chain = format!("{err:#}");
        assert!(chain.contains("3-9 is defined more than once"), "{chain}");
    }

    #[test]
    fn rejects_bad_keys_and_unknown_fields() {
        let err = PairTables::from_bytes(br#"{"advice": {"3-10": "a"}}"#).unwrap_err();
        assert!(format!("{err:#}").contains("\"3-10\""), "{err:#}");

        let err = PairTables::from_bytes(br#"{"advise": {}}"#).unwrap_err();
        assert!(format!("{err:#}").contains("advise"), "{err:#}");
    }

    #[test]
    fn rejects_self_pair_interaction() {
        let err = PairTables::from_bytes(br#"{"interactions": {"4-4": "x"}}"#).unwrap_err();
        assert!(format!("{err:#}").contains("mirrored"), "{err:#}");
    }

    #[test]
    fn scoring_section_is_validated() {
        let tables =
            PairTables::from_bytes(br#"{"scoring": {"growth_line_bonus": 3}}"#).unwrap();
        assert_eq!(tables.scoring().growth_line_bonus, 3);
        assert_eq!(tables.scoring().base, 3);

        let err = PairTables::from_bytes(br#"{"scoring": {"max_score": 12}}"#).unwrap_err();
        assert!(err.to_string().contains("pairs.scoring"), "{err}");
    }
}
