use ennea_taxonomy::{Category, CategoryProfiles};
use serde::{Deserialize, Serialize};

use crate::compat::{CompatibilityBand, CompatibilityResult};
use crate::error::{RelationsError, Result};
use crate::pair::CategoryPair;
use crate::tables::PairTables;

/// Where a piece of the artifact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Hand-written entry from the pair tables
    Curated,
    /// Template filled from the compatibility flags and category profiles
    Generic,
    /// Special narrative for a category paired with itself
    Mirrored,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Curated => "curated",
            Self::Generic => "generic",
            Self::Mirrored => "mirrored",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archetype {
    pub name: String,
    pub tagline: String,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    pub source: Source,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub text: String,
    pub source: Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressPhase {
    Trigger,
    Response,
    Escalation,
    Retrigger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressStep {
    pub actor: Category,
    pub phase: StressPhase,
    pub text: String,
}

/// Everything the presentation layer shows for one pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightArtifact {
    /// The two categories in the order they were requested
    pub subjects: (Category, Category),
    pub pair: CategoryPair,
    pub score: u8,
    pub band: CompatibilityBand,
    pub archetype: Archetype,
    pub interaction: Narrative,
    /// Always four steps: A triggers, B reacts, B escalates, A re-triggers
    pub stress_cycle: Vec<StressStep>,
    pub break_cycle: Narrative,
}

/// Assembles insight artifacts from curated tables, falling back to templates.
#[derive(Debug, Clone, Copy)]
pub struct Synthesizer<'a> {
    profiles: &'a CategoryProfiles,
    tables: &'a PairTables,
}

impl<'a> Synthesizer<'a> {
    pub fn new(profiles: &'a CategoryProfiles, tables: &'a PairTables) -> Self {
        Self { profiles, tables }
    }

    /// Build the artifact for `a` and `b`.
    ///
    /// Curated lookups and generic texts depend only on the unordered pair. The stress
    /// cycle follows argument order, with `a` starting it.
    ///
    /// # Errors
    /// [`RelationsError::PairMismatch`] when `compat` was computed for another pair.
    pub fn synthesize(
        &self,
        a: Category,
        b: Category,
        compat: &CompatibilityResult,
    ) -> Result<InsightArtifact> {
        let pair = CategoryPair::new(a, b);
        if compat.pair != pair {
            return Err(RelationsError::PairMismatch {
                expected: pair,
                actual: compat.pair,
            });
        }

        Ok(InsightArtifact {
            subjects: (a, b),
            pair,
            score: compat.score,
            band: compat.band,
            archetype: self.archetype(compat),
            interaction: self.interaction(pair),
            stress_cycle: self.stress_cycle(a, b),
            break_cycle: self.break_cycle(pair),
        })
    }

    fn archetype(&self, compat: &CompatibilityResult) -> Archetype {
        let pair = compat.pair;
        if let Some(curated) = self.tables.archetypes().get(pair.low(), pair.high()) {
            return Archetype {
                name: curated.name.clone(),
                tagline: curated.tagline.clone(),
                strengths: curated.strengths.clone(),
                challenges: curated.challenges.clone(),
                source: Source::Curated,
            };
        }

        log::debug!("no curated archetype for {pair}, using {} band", compat.band);
        let (low, high) = (pair.low().name(), pair.high().name());
        let tagline = if pair.is_self() {
            format!(
                "A {} match between two {low}s.",
                compat.band.label().to_lowercase()
            )
        } else {
            format!(
                "A {} match between the {low} and the {high}.",
                compat.band.label().to_lowercase()
            )
        };

        Archetype {
            name: compat.band.label().to_string(),
            tagline,
            strengths: generic_strengths(compat),
            challenges: generic_challenges(compat),
            source: Source::Generic,
        }
    }

    fn interaction(&self, pair: CategoryPair) -> Narrative {
        let (low, high) = (pair.low(), pair.high());
        let p_low = self.profiles.get(low);

        // checked before the table so a self pair never reads curated text
        if pair.is_self() {
            return Narrative {
                text: format!(
                    "Two {name}s meet their own pattern in each other. Each {strategy}, so \
                     {defense} on one side feeds {defense} on the other.",
                    name = low.name(),
                    strategy = p_low.strategy,
                    defense = p_low.defense_mechanism,
                ),
                source: Source::Mirrored,
            };
        }

        if let Some(text) = self.tables.interactions().get(low, high) {
            return Narrative {
                text: text.clone(),
                source: Source::Curated,
            };
        }

        log::debug!("no curated interaction for {pair}, using generic template");
        let p_high = self.profiles.get(high);
        Narrative {
            text: format!(
                "The {} {}, while the {} {}. When {} meets {}, each partner's way of coping \
                 can look like a threat to the other's.",
                low.name(),
                p_low.strategy,
                high.name(),
                p_high.strategy,
                p_low.defense_mechanism,
                p_high.defense_mechanism,
            ),
            source: Source::Generic,
        }
    }

    fn stress_cycle(&self, a: Category, b: Category) -> Vec<StressStep> {
        let stress_a = &self.profiles.get(a).stress;
        let stress_b = &self.profiles.get(b).stress;

        vec![
            StressStep {
                actor: a,
                phase: StressPhase::Trigger,
                text: format!("The {} {}.", a.name(), stress_a.trigger),
            },
            StressStep {
                actor: b,
                phase: StressPhase::Response,
                text: format!("The {} {}.", b.name(), stress_b.response),
            },
            StressStep {
                actor: b,
                phase: StressPhase::Escalation,
                text: format!("The {} {}.", b.name(), stress_b.escalation),
            },
            StressStep {
                actor: a,
                phase: StressPhase::Retrigger,
                text: format!(
                    "The {}, now on edge, {} all over again.",
                    a.name(),
                    stress_a.trigger
                ),
            },
        ]
    }

    fn break_cycle(&self, pair: CategoryPair) -> Narrative {
        let (low, high) = (pair.low(), pair.high());
        if let Some(text) = self.tables.advice().get(low, high) {
            return Narrative {
                text: text.clone(),
                source: Source::Curated,
            };
        }

        log::debug!("no curated advice for {pair}, using generic template");
        let defense_low = &self.profiles.get(low).defense_mechanism;
        let text = if pair.is_self() {
            format!(
                "Both partners lean on {defense_low}. Name it out loud when it shows up on \
                 either side, and take turns being the one who steps out of it first."
            )
        } else {
            let defense_high = &self.profiles.get(high).defense_mechanism;
            format!(
                "Notice when the {}'s {} meets the {}'s {}. Name the pattern out loud before \
                 reacting to it, and agree on a pause both of you can call.",
                low.name(),
                defense_low,
                high.name(),
                defense_high,
            )
        };

        Narrative {
            text,
            source: Source::Generic,
        }
    }
}

fn generic_strengths(compat: &CompatibilityResult) -> Vec<String> {
    let mut strengths: Vec<String> = compat
        .shared_groups
        .iter()
        .map(|group| format!("Both {}", group.theme()))
        .collect();

    if let Some(link) = compat.integration_link {
        strengths.push(format!(
            "The {} grows by taking on the {}'s best qualities",
            link.from.name(),
            link.to.name()
        ));
    }
    if compat.wing_neighbors {
        strengths.push("Neighbors on the circle, each can borrow the other's style".to_string());
    }
    if strengths.is_empty() {
        strengths.push("Very different outlooks give each partner a lot to learn".to_string());
    }
    strengths
}

fn generic_challenges(compat: &CompatibilityResult) -> Vec<String> {
    let mut challenges = Vec::new();

    if let Some(link) = compat.disintegration_link {
        challenges.push(format!(
            "Under stress the {} slides toward the {}'s worst habits",
            link.from.name(),
            link.to.name()
        ));
    }
    if compat.pair.is_self() {
        challenges.push("Shared blind spots can go unchallenged".to_string());
    } else if compat.shared_groups.is_empty() {
        challenges.push(
            "Little common ground in how each copes, relates and handles disappointment"
                .to_string(),
        );
    }
    if challenges.is_empty() {
        challenges.push("Comfortable similarities can hide friction until it builds".to_string());
    }
    challenges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::CompatibilityCalculator;
    use pretty_assertions::assert_eq;

    fn artifact(tables: &PairTables, a: Category, b: Category) -> InsightArtifact {
        let profiles = CategoryProfiles::bundled();
        let compat = CompatibilityCalculator::default().compatibility(a, b);
        Synthesizer::new(&profiles, tables)
            .synthesize(a, b, &compat)
            .unwrap()
    }

    #[test]
    fn uncurated_pair_falls_back_to_band() {
        let result = artifact(&PairTables::empty(), Category::One, Category::Seven);
        assert_eq!(result.score, 6);
        assert_eq!(result.archetype.name, "Moderate");
        assert_eq!(result.archetype.source, Source::Generic);
        assert_eq!(
            result.archetype.tagline,
            "A moderate match between the Reformer and the Enthusiast."
        );
        assert_eq!(
            result.archetype.strengths,
            vec![
                "Both feel that what they get never quite measures up".to_string(),
                "The Reformer grows by taking on the Enthusiast's best qualities".to_string(),
            ]
        );
        assert_eq!(
            result.archetype.challenges,
            vec![
                "Under stress the Enthusiast slides toward the Reformer's worst habits".to_string()
            ]
        );
        assert_eq!(result.interaction.source, Source::Generic);
        assert_eq!(result.break_cycle.source, Source::Generic);
        assert!(result.break_cycle.text.contains("reaction formation"));
        assert!(result.break_cycle.text.contains("rationalization"));
    }

    #[test]
    fn curated_entries_win() {
        let tables = PairTables::from_bytes(
            br#"{
                "archetypes": {"9-3": {"name": "Steady Climb", "tagline": "t", "strengths": ["s"]}},
                "interactions": {"9-3": "curated interaction"},
                "advice": {"3-9": "curated advice"}
            }"#,
        )
        .unwrap();
        let forward = artifact(&tables, Category::Three, Category::Nine);
        let backward = artifact(&tables, Category::Nine, Category::Three);

        for result in [&forward, &backward] {
            assert_eq!(result.archetype.name, "Steady Climb");
            assert_eq!(result.archetype.source, Source::Curated);
            assert_eq!(result.interaction.text, "curated interaction");
            assert_eq!(result.break_cycle.text, "curated advice");
        }
        assert_eq!(forward.archetype, backward.archetype);
    }

    #[test]
    fn self_pair_gets_mirrored_narrative() {
        let result = artifact(&PairTables::empty(), Category::Six, Category::Six);
        assert_eq!(result.interaction.source, Source::Mirrored);
        assert!(result.interaction.text.starts_with("Two Loyalists"));
        assert!(result.break_cycle.text.starts_with("Both partners lean on projection"));
        assert_eq!(result.archetype.tagline, "A moderate match between two Loyalists.");
    }

    #[test]
    fn stress_cycle_alternates() {
        let result = artifact(&PairTables::empty(), Category::Eight, Category::Four);
        let shape: Vec<(Category, StressPhase)> = result
            .stress_cycle
            .iter()
            .map(|step| (step.actor, step.phase))
            .collect();
        assert_eq!(
            shape,
            vec![
                (Category::Eight, StressPhase::Trigger),
                (Category::Four, StressPhase::Response),
                (Category::Four, StressPhase::Escalation),
                (Category::Eight, StressPhase::Retrigger),
            ]
        );
        assert!(result.stress_cycle[0].text.starts_with("The Challenger "));
        assert!(result.stress_cycle[3].text.ends_with(" all over again."));
        assert_eq!(result.subjects, (Category::Eight, Category::Four));
    }

    #[test]
    fn mismatched_compat_is_rejected() {
        let profiles = CategoryProfiles::bundled();
        let tables = PairTables::empty();
        let compat = CompatibilityCalculator::default().compatibility(Category::One, Category::Two);
        let err = Synthesizer::new(&profiles, &tables)
            .synthesize(Category::One, Category::Three, &compat)
            .unwrap_err();
        assert_eq!(
            err,
            RelationsError::PairMismatch {
                expected: CategoryPair::new(Category::One, Category::Three),
                actual: CategoryPair::new(Category::One, Category::Two),
            }
        );
    }
}
