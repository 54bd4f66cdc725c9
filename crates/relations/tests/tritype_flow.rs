use ennea_relations::{TritypeComposer, TritypeSelection};
use ennea_taxonomy::{Category, CategoryProfiles, Center};
use pretty_assertions::assert_eq;

#[test]
fn code_ignores_how_the_selection_was_built() {
    let profiles = CategoryProfiles::bundled();
    let composer = TritypeComposer::new(&profiles);

    let direct = TritypeSelection::new(Category::Eight, Category::Two, Category::Five).unwrap();
    let parsed: TritypeSelection =
        serde_json::from_str(r#"{"head": 5, "gut": 8, "heart": 2}"#).unwrap();
    assert_eq!(direct, parsed);

    let result = composer.compose(&parsed, Center::Heart);
    assert_eq!(result.sequence, [Category::Two, Category::Eight, Category::Five]);
    assert_eq!(result.code, "285");
    assert_eq!(result.lead, Center::Heart);
}

#[test]
fn head_lead_keeps_gut_before_heart() {
    let profiles = CategoryProfiles::bundled();
    let selection = TritypeSelection::new(Category::One, Category::Four, Category::Seven).unwrap();
    let result = TritypeComposer::new(&profiles).compose(&selection, Center::Head);
    assert_eq!(result.code, "714");
    assert!(result.portrait.starts_with("Leading with the Enthusiast (7): "));
}
