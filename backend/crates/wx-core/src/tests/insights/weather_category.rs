use crate::WeatherCategory;

#[test]
fn test_from_conditions() {
    let cases = [
        ("clear sky", WeatherCategory::Clear),
        ("scattered clouds", WeatherCategory::Clouds),
        ("light rain", WeatherCategory::Rain),
        ("Drizzle", WeatherCategory::Rain),
        ("snow", WeatherCategory::Snow),
        ("thunderstorm", WeatherCategory::Thunderstorm),
        ("fog", WeatherCategory::Mist),
        ("Haze", WeatherCategory::Mist),
        ("unknown", WeatherCategory::Clear),
        ("", WeatherCategory::Clear),
    ];

    for (conditions, expected) in cases {
        assert_eq!(
            WeatherCategory::from_conditions(conditions),
            expected,
            "conditions = {:?}",
            conditions
        );
    }
}

#[test]
fn test_display_matches_as_str() {
    assert_eq!(WeatherCategory::Thunderstorm.to_string(), "Thunderstorm");
    assert_eq!(WeatherCategory::Mist.as_str(), "Mist");
}
