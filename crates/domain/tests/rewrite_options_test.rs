use pardot_embed_domain::{matches, EntityKind, RewriteOptions};
use std::collections::HashMap;

fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Tests for RewriteOptions
// ============================================================================

#[test]
fn test_options_from_full_arguments() {
    let options = RewriteOptions::from_arguments(&args(&[
        ("title", "Contact Us"),
        ("height", "500"),
        ("width", "100%"),
        ("classes", "blue wide"),
    ]));

    assert_eq!(options.height.as_deref(), Some("500"));
    assert_eq!(options.width.as_deref(), Some("100%"));
    assert_eq!(options.classes.as_deref(), Some("blue wide"));
}

#[test]
fn test_options_ignore_unrelated_arguments() {
    let options = RewriteOptions::from_arguments(&args(&[("title", "x"), ("style", "y")]));
    assert!(options.is_empty());
}

#[test]
fn test_empty_values_still_count_as_present() {
    let options = RewriteOptions::from_arguments(&args(&[("height", "")]));
    assert_eq!(options.height.as_deref(), Some(""));
    assert!(!options.is_empty());
}

#[test]
fn test_builder_matches_parsed_arguments() {
    let built = RewriteOptions::default().with_height("1").with_classes("c");
    let parsed = RewriteOptions::from_arguments(&args(&[("height", "1"), ("classes", "c")]));
    assert_eq!(built, parsed);
}

// ============================================================================
// Tests for identifier arguments and matching
// ============================================================================

#[test]
fn test_identifier_argument_per_kind() {
    assert_eq!(EntityKind::Form.identifier_argument(), "title");
    assert_eq!(EntityKind::DynamicContent.identifier_argument(), "name");
}

#[test]
fn test_hand_typed_identifiers_match_platform_names() {
    assert!(matches("contactus", "Contact Us"));
    assert!(matches("  Webinar Sign-Up ", "webinar sign-up"));
    assert!(!matches("webinar signup", "webinar sign-up"));
}
