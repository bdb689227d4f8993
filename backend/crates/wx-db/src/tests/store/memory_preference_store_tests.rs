use crate::{InMemoryPreferenceStore, PreferenceStore};

use wx_core::{PreferenceView, TemperatureUnit};

use googletest::prelude::*;

fn paris_preferences() -> PreferenceView {
    PreferenceView {
        default_city: "Paris".to_string(),
        temperature_unit: TemperatureUnit::Celsius,
        saved_cities: vec!["Paris".to_string(), "Lyon".to_string(), "Paris".to_string()],
        notifications_enabled: false,
    }
}

#[tokio::test]
async fn when_unknown_user_read_then_created_once() {
    let store = InMemoryPreferenceStore::new();

    let first = store.find_or_default("u1").await.unwrap();
    let second = store.find_or_default("u1").await.unwrap();

    assert_that!(first.was_created(), eq(true));
    assert_that!(second.was_created(), eq(false));
    assert_that!(store.len().await, eq(1));
}

#[tokio::test]
async fn when_saved_then_cities_are_deduplicated() {
    let store = InMemoryPreferenceStore::new();

    store.save("u2", &paris_preferences()).await.unwrap();
    let view = store.find_or_default("u2").await.unwrap().into_view();

    assert_that!(
        view.saved_cities,
        eq(&vec!["Paris".to_string(), "Lyon".to_string()])
    );
}

#[tokio::test]
async fn when_saved_twice_then_last_write_wins() {
    let store = InMemoryPreferenceStore::new();
    store.save("u3", &paris_preferences()).await.unwrap();

    let replacement = PreferenceView {
        default_city: "Nice".to_string(),
        temperature_unit: TemperatureUnit::Fahrenheit,
        saved_cities: vec![],
        notifications_enabled: true,
    };
    store.save("u3", &replacement).await.unwrap();

    let view = store.find_or_default("u3").await.unwrap().into_view();
    assert_that!(view, eq(&replacement));
}

#[tokio::test]
async fn when_empty_then_ping_still_ok() {
    let store = InMemoryPreferenceStore::new();

    assert_that!(store.is_empty().await, eq(true));
    assert_that!(store.ping().await, ok(anything()));
}
