use crate::TemperatureUnit;

use std::str::FromStr;

#[test]
fn test_temperature_unit_as_str() {
    assert_eq!(TemperatureUnit::Celsius.as_str(), "celsius");
    assert_eq!(TemperatureUnit::Fahrenheit.as_str(), "fahrenheit");
}

#[test]
fn test_temperature_unit_from_str() {
    assert_eq!(
        TemperatureUnit::from_str("celsius").unwrap(),
        TemperatureUnit::Celsius
    );
    assert_eq!(
        TemperatureUnit::from_str("Fahrenheit").unwrap(),
        TemperatureUnit::Fahrenheit
    );
    assert!(TemperatureUnit::from_str("kelvin").is_err());
    assert!(TemperatureUnit::from_str("").is_err());
}

#[test]
fn test_temperature_unit_default() {
    assert_eq!(TemperatureUnit::default(), TemperatureUnit::Celsius);
}

#[test]
fn test_temperature_unit_format() {
    assert_eq!(TemperatureUnit::Celsius.format(20.0), "20.0°C");
    assert_eq!(TemperatureUnit::Fahrenheit.format(20.0), "68.0°F");
    assert_eq!(TemperatureUnit::Fahrenheit.format(-40.0), "-40.0°F");
}

#[test]
fn test_temperature_unit_serde_is_lowercase() {
    let json = serde_json::to_string(&TemperatureUnit::Fahrenheit).unwrap();
    assert_eq!(json, "\"fahrenheit\"");

    let parsed: TemperatureUnit = serde_json::from_str("\"celsius\"").unwrap();
    assert_eq!(parsed, TemperatureUnit::Celsius);
}
