//! # Ennea Taxonomy
//!
//! The fixed nine-category domain every other crate in the workspace builds on.
//!
//! ## Registry
//!
//! ```text
//! Category (1..=9)
//!     │
//!     ├──> center            Gut {8,9,1} · Heart {2,3,4} · Head {5,6,7}
//!     ├──> wings             numeric predecessor / successor on the circle
//!     ├──> integration       growth line (1→7→5→8→2→4→1, 3→6→9→3)
//!     └──> disintegration    stress line (the same lines walked backwards)
//!
//! Partition (harmonic · hornevian · object relations)
//!     └──> group_of(category) -> GroupLabel
//! ```
//!
//! Structural relations are compiled in and never change. Descriptive strings (core fear,
//! core desire, defense mechanism, stress phrasing) live in [`CategoryProfiles`], loaded
//! from the bundled dataset or a user-supplied JSON/TOML file.
//!
//! ## Example
//!
//! ```rust
//! use ennea_taxonomy::{Category, Center, Partition, GroupLabel};
//!
//! let one = Category::new(1).unwrap();
//! assert_eq!(one.wings(), (Category::Nine, Category::Two));
//! assert_eq!(one.integration_target(), Category::Seven);
//! assert_eq!(one.center(), Center::Gut);
//! assert_eq!(Partition::Hornevian.group_of(one), GroupLabel::Compliant);
//! ```

mod category;
mod error;
mod groups;
mod profile;

pub use category::{Category, Center};
pub use error::{Result, TaxonomyError};
pub use groups::{shared_groups, GroupLabel, Partition};
pub use profile::{CategoryProfile, CategoryProfiles, StressTemplate};

use serde::de::DeserializeOwned;

/// Parse a reference-data document, accepting JSON first and TOML as a fallback.
///
/// Shared by every crate that loads bundled or user-supplied datasets so that all of them
/// accept the same two formats and report errors the same way.
pub fn parse_json_or_toml<T: DeserializeOwned>(bytes: &[u8]) -> anyhow::Result<T> {
    use anyhow::anyhow;

    let value: serde_json::Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(json_err) => {
            let utf8 = std::str::from_utf8(bytes).map_err(|err| anyhow!("{json_err}; {err}"))?;
            let toml_value: toml::Value = toml::from_str(utf8).map_err(|toml_err| {
                anyhow!("Data is not valid JSON or TOML ({json_err}); TOML parse error: {toml_err}")
            })?;
            serde_json::to_value(toml_value)
                .map_err(|err| anyhow!("Failed to convert TOML data to JSON: {err}"))?
        }
    };

    serde_json::from_value(value).map_err(|err| anyhow!("Data parse error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        id: Category,
        center: Center,
    }

    #[test]
    fn parses_json_and_toml() {
        let json: Sample = parse_json_or_toml(br#"{"id": 5, "center": "head"}"#).unwrap();
        let toml: Sample = parse_json_or_toml(b"id = 5\ncenter = \"head\"\n").unwrap();
        assert_eq!(json, toml);
        assert_eq!(json.id, Category::Five);
    }

    #[test]
    fn reports_both_parse_failures() {
        let err = parse_json_or_toml::<Sample>(b"id = = 5").unwrap_err();
        assert!(err.to_string().contains("TOML parse error"), "{err}");
    }
}
