use crate::WeatherReading;

use googletest::prelude::*;
use serde_json::json;

fn cape_town_payload() -> serde_json::Value {
    json!({
        "name": "Cape Town",
        "main": {
            "temp": 298.15,
            "feels_like": 299.15,
            "temp_min": 296.15,
            "temp_max": 300.15,
            "humidity": 60,
            "pressure": 1015
        },
        "weather": [{ "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "wind": { "speed": 4.1 },
        "sys": { "country": "ZA", "sunrise": 1700000000, "sunset": 1700050000 }
    })
}

#[test]
fn given_kelvin_payload_when_converted_then_main_temperatures_are_celsius() {
    let reading = WeatherReading::from_kelvin(cape_town_payload());

    assert_that!(reading.temp().unwrap(), near(25.0, 0.01));
    assert_that!(reading.feels_like().unwrap(), near(26.0, 0.01));
    assert_that!(reading.temp_min().unwrap(), near(23.0, 0.01));
    assert_that!(reading.temp_max().unwrap(), near(27.0, 0.01));
}

#[test]
fn given_kelvin_payload_when_converted_then_other_fields_pass_through() {
    let reading = WeatherReading::from_kelvin(cape_town_payload());
    let payload = reading.payload();

    assert_eq!(payload["main"]["humidity"], 60);
    assert_eq!(payload["main"]["pressure"], 1015);
    assert_eq!(payload["wind"]["speed"], 4.1);
    assert_eq!(payload["sys"]["country"], "ZA");
    assert_eq!(payload["sys"]["sunrise"], 1700000000);
    assert_eq!(reading.condition(), Some("Clear"));
    assert_eq!(reading.description(), Some("clear sky"));
    assert_eq!(reading.city_name(), Some("Cape Town"));
}

#[test]
fn given_payload_without_main_when_converted_then_unchanged() {
    let payload = json!({ "weather": [{ "main": "Clouds" }], "name": "Nowhere" });

    let reading = WeatherReading::from_kelvin(payload.clone());

    assert_eq!(reading.into_payload(), payload);
}

#[test]
fn given_partial_main_when_converted_then_only_numeric_fields_change() {
    let payload = json!({ "main": { "temp": 273.15, "feels_like": "n/a", "humidity": 40 } });

    let reading = WeatherReading::from_kelvin(payload);

    assert_that!(reading.temp().unwrap(), near(0.0, 0.01));
    assert_eq!(reading.payload()["main"]["feels_like"], "n/a");
    assert_eq!(reading.payload()["main"]["humidity"], 40);
    assert!(reading.payload()["main"].get("temp_min").is_none());
}

#[test]
fn given_converted_reading_when_serialized_twice_then_temperature_stable() {
    let reading = WeatherReading::from_kelvin(cape_town_payload());

    let first = serde_json::to_value(&reading).unwrap();
    let second = serde_json::to_value(&reading).unwrap();

    assert_eq!(first, second);
    assert_that!(first["main"]["temp"].as_f64().unwrap(), near(25.0, 0.01));
}
