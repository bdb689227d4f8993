use crate::{PreferenceLookup, PreferenceView};

#[test]
fn test_created_branch_reports_creation() {
    let lookup = PreferenceLookup::Created(PreferenceView::default());

    assert!(lookup.was_created());
    assert_eq!(lookup.view(), &PreferenceView::default());
}

#[test]
fn test_existing_branch_returns_stored_view() {
    let view = PreferenceView {
        default_city: "Cape Town".to_string(),
        ..Default::default()
    };
    let lookup = PreferenceLookup::Existing(view.clone());

    assert!(!lookup.was_created());
    assert_eq!(lookup.into_view(), view);
}
