use crate::WeatherCategory;
use crate::insights::{
    activities_for, activity_suggestion, clothing_recommendation, generate_insights, health_tip,
    personalized_message,
};

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_clothing_bands() {
    assert!(clothing_recommendation(-5.0).starts_with("Heavy winter coat"));
    assert!(clothing_recommendation(0.0).starts_with("Winter coat"));
    assert!(clothing_recommendation(15.0).starts_with("Light jacket"));
    assert!(clothing_recommendation(25.0).starts_with("T-shirt"));
    assert!(clothing_recommendation(30.0).starts_with("Light, breathable"));
}

#[test]
fn test_activity_comes_from_category_list() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..20 {
        let activity = activity_suggestion(&mut rng, WeatherCategory::Snow);
        assert!(activities_for(WeatherCategory::Snow).contains(&activity));
    }
}

#[test]
fn test_health_tip_per_category() {
    assert_eq!(
        health_tip(WeatherCategory::Clear),
        "Don't forget sunscreen and stay hydrated!"
    );
    assert_eq!(
        health_tip(WeatherCategory::Thunderstorm),
        "Stay indoors and away from windows during lightning."
    );
}

#[test]
fn test_personalized_message_mentions_city() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let message = personalized_message(&mut rng, "Oslo", 3.25, WeatherCategory::Snow);
        assert!(message.contains("Oslo"), "message = {}", message);
    }
}

#[test]
fn test_same_seed_gives_same_insights() {
    let mut first_rng = StdRng::seed_from_u64(1234);
    let mut second_rng = StdRng::seed_from_u64(1234);

    let first = generate_insights(&mut first_rng, "Cape Town", 25.0, WeatherCategory::Clear);
    let second = generate_insights(&mut second_rng, "Cape Town", 25.0, WeatherCategory::Clear);

    assert_eq!(first, second);
    assert_eq!(
        first.clothing_recommendation,
        "T-shirt with light pants or shorts"
    );
    assert_eq!(first.health_tip, "Don't forget sunscreen and stay hydrated!");
}
