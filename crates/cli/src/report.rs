use ennea_classifier::{ClassificationResult, QuestionBank, StageKind};
use ennea_relations::{CompatibilityResult, InsightArtifact, TritypeResult};

pub fn render_classification(result: &ClassificationResult) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Type: {} ({}, {} wing)\n",
        result.wing,
        result.primary.name(),
        result.wing.wing.name()
    ));
    let titles: Vec<&str> = result.secondary_stack.iter().map(|i| i.title()).collect();
    out.push_str(&format!(
        "Stack: {} ({})\n",
        result.stack_code(),
        titles.join(", ")
    ));
    out.push_str(&format!("Confidence: {}%\n\n", result.confidence));

    out.push_str(&format!(
        "Stage 1 scores (out of {}):\n",
        result.scores.total_possible()
    ));
    for (category, score) in result.scores.iter() {
        let marker = if category == result.primary { "*" } else { " " };
        out.push_str(&format!(
            "{marker} {category} {:<14} {score}\n",
            category.name()
        ));
    }
    out
}

pub fn render_compatibility(compat: &CompatibilityResult, insight: &InsightArtifact) -> String {
    let (a, b) = insight.subjects;
    let mut out = String::new();
    out.push_str(&format!(
        "{} & {}: {}/10 ({})\n",
        title(a),
        title(b),
        compat.score,
        compat.band
    ));

    let shared: Vec<&str> = compat.shared_groups.iter().map(|g| g.title()).collect();
    out.push_str(&format!(
        "Shared groups: {}\n",
        if shared.is_empty() {
            "none".to_string()
        } else {
            shared.join(", ")
        }
    ));
    if let Some(link) = compat.integration_link {
        out.push_str(&format!("Growth line: {} -> {}\n", link.from, link.to));
    }
    if let Some(link) = compat.disintegration_link {
        out.push_str(&format!("Stress line: {} -> {}\n", link.from, link.to));
    }
    if compat.wing_neighbors {
        out.push_str("Wing neighbors: yes\n");
    }

    let archetype = &insight.archetype;
    out.push_str(&format!(
        "\nArchetype: {} [{}]\n  {}\n",
        archetype.name,
        archetype.source.as_str(),
        archetype.tagline
    ));
    push_list(&mut out, "Strengths", &archetype.strengths);
    push_list(&mut out, "Challenges", &archetype.challenges);

    out.push_str(&format!(
        "\nInteraction [{}]:\n  {}\n",
        insight.interaction.source.as_str(),
        insight.interaction.text
    ));

    out.push_str("\nStress cycle:\n");
    for (i, step) in insight.stress_cycle.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, step.text));
    }

    out.push_str(&format!(
        "\nBreaking the cycle [{}]:\n  {}\n",
        insight.break_cycle.source.as_str(),
        insight.break_cycle.text
    ));
    out
}

pub fn render_tritype(result: &TritypeResult) -> String {
    let names: Vec<String> = result.sequence.iter().map(|c| title(*c)).collect();
    format!(
        "Tritype {} ({} lead)\n{}\n\n{}\n",
        result.code,
        result.lead,
        names.join(" / "),
        result.portrait
    )
}

pub fn render_questions(bank: &QuestionBank, stage: Option<StageKind>) -> String {
    let wanted = |kind: StageKind| stage.map_or(true, |s| s == kind);
    let mut out = String::new();

    if wanted(StageKind::Primary) {
        out.push_str("# primary\n");
        for q in bank.primary_questions() {
            out.push_str(&format!("{}\t{}\n", q.id, q.text));
        }
    }
    if wanted(StageKind::Wing) {
        out.push_str("# wing\n");
        for q in bank.wing_questions() {
            out.push_str(&format!("{}\t[{}w{}] {}\n", q.id, q.primary, q.wing, q.text));
        }
    }
    if wanted(StageKind::Stack) {
        out.push_str("# stack\n");
        for q in bank.stack_questions() {
            out.push_str(&format!("{}\t[{}] {}\n", q.id, q.instinct, q.text));
        }
    }
    out
}

fn title(category: ennea_taxonomy::Category) -> String {
    format!("{} ({})", category.name(), category)
}

fn push_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("{heading}:\n"));
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}
