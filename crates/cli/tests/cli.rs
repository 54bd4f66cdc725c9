use assert_cmd::Command;
use ennea_classifier::{AnswerSet, Instinct, QuestionBank, StageAnswers};
use ennea_taxonomy::Category;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

#[allow(deprecated)]
fn ennea() -> Command {
    Command::cargo_bin("ennea").expect("binary")
}

fn run_json(args: &[&str]) -> Value {
    let output = ennea().arg("--json").args(args).output().expect("command run");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("valid json")
}

fn write_answers(dir: &Path, primary: Category, skip: Option<&str>) -> std::path::PathBuf {
    let bank = QuestionBank::bundled();
    let primary_answers: AnswerSet = bank
        .primary_questions()
        .iter()
        .filter(|q| Some(q.id.as_str()) != skip)
        .map(|q| (q.id.clone(), if q.category == primary { 5 } else { 2 }))
        .collect();
    let (_, high_wing) = primary.wings();
    let wing_answers: AnswerSet = bank
        .wing_questions_for(primary)
        .map(|q| (q.id.clone(), if q.wing == high_wing { 4 } else { 2 }))
        .collect();
    let stack_answers: AnswerSet = bank
        .stack_questions()
        .iter()
        .map(|q| (q.id.clone(), if q.instinct == Instinct::Social { 5 } else { 3 }))
        .collect();

    let answers = StageAnswers {
        primary: primary_answers,
        wing: wing_answers,
        stack: stack_answers,
    };
    let path = dir.join("answers.json");
    fs::write(&path, serde_json::to_string_pretty(&answers).unwrap()).unwrap();
    path
}

#[test]
fn compat_json_reports_fallback_band() {
    let body = run_json(&["compat", "7", "1"]);
    assert_eq!(body["compatibility"]["score"], 6);
    assert_eq!(body["compatibility"]["band"], "Moderate");
    assert_eq!(body["compatibility"]["integration_link"]["from"], 1);
    assert_eq!(body["compatibility"]["integration_link"]["to"], 7);
    assert_eq!(body["insight"]["archetype"]["name"], "Moderate");
    assert_eq!(body["insight"]["archetype"]["source"], "generic");
    assert_eq!(body["insight"]["stress_cycle"].as_array().unwrap().len(), 4);
}

#[test]
fn compat_text_uses_curated_archetype() {
    ennea()
        .args(["compat", "2", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Protector and Nurturer [curated]"))
        .stdout(predicate::str::contains("Stress line: 2 -> 8"));
}

#[test]
fn compat_rejects_unknown_category() {
    ennea()
        .args(["compat", "0", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category"));
}

#[test]
fn tritype_orders_by_lead() {
    let body = run_json(&[
        "tritype", "--gut", "8", "--heart", "2", "--head", "5", "--lead", "heart",
    ]);
    assert_eq!(body["code"], "285");
    assert_eq!(body["sequence"], serde_json::json!([2, 8, 5]));
    assert_eq!(body["lead"], "heart");
}

#[test]
fn tritype_rejects_wrong_center() {
    ennea()
        .args(["tritype", "--gut", "2", "--heart", "3", "--head", "5", "--lead", "gut"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("belongs to the heart center"));
}

#[test]
fn classify_reads_answers_file() {
    let dir = tempdir().unwrap();
    let path = write_answers(dir.path(), Category::Six, None);

    let body = run_json(&["classify", "--answers", path.to_str().unwrap()]);
    assert_eq!(body["primary"], 6);
    assert_eq!(body["wing"]["wing"], 7);
    assert_eq!(body["secondary_stack"], serde_json::json!(["so", "sp", "sx"]));

    ennea()
        .args(["classify", "--answers", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Type: 6w7"))
        .stdout(predicate::str::contains(
            "Stack: so/sp/sx (Social, Self-Preservation, One-to-One)",
        ));
}

#[test]
fn classify_reports_missing_answers() {
    let dir = tempdir().unwrap();
    let path = write_answers(dir.path(), Category::Three, Some("p5a"));

    ennea()
        .args(["classify", "--answers", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incomplete answers for primary stage: missing p5a"));
}

#[test]
fn questions_can_be_filtered_by_stage() {
    let body = run_json(&["questions", "--stage", "stack"]);
    assert_eq!(body["stack"].as_array().unwrap().len(), 9);
    assert!(body.get("primary").is_none());

    let all = run_json(&["questions"]);
    assert_eq!(all["primary"].as_array().unwrap().len(), 18);
    assert_eq!(all["wing"].as_array().unwrap().len(), 18);
}

#[test]
fn pairs_override_is_applied() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pairs.toml");
    fs::write(
        &path,
        "[archetypes.\"1-7\"]\nname = \"Bright Standard\"\ntagline = \"Play meets principle.\"\n",
    )
    .unwrap();

    let body = run_json(&["compat", "1", "7", "--pairs", path.to_str().unwrap()]);
    assert_eq!(body["insight"]["archetype"]["name"], "Bright Standard");
    assert_eq!(body["insight"]["break_cycle"]["source"], "generic");
}

#[test]
fn bad_pairs_file_fails_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pairs.json");
    fs::write(&path, r#"{"advice": {"4-5": "a", "5-4": "b"}}"#).unwrap();

    ennea()
        .args(["compat", "4", "5", "--pairs", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pairs.json"))
        .stderr(predicate::str::contains("defined more than once"));
}
