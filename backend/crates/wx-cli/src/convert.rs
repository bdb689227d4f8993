//! Client-side display conversion for weather payloads.

use wx_core::TemperatureUnit;
use wx_core::models::weather_reading::KELVIN_FIELDS;

use serde_json::Value;

/// Rewrite the Celsius temperatures of a `/api/weather` payload into `unit`.
///
/// Celsius is a no-op. Missing or non-numeric fields are left alone.
pub fn weather_in_unit(mut payload: Value, unit: TemperatureUnit) -> Value {
    if unit == TemperatureUnit::Celsius {
        return payload;
    }

    if let Some(main) = payload.get_mut("main").and_then(Value::as_object_mut) {
        for field in KELVIN_FIELDS {
            if let Some(slot) = main.get_mut(field)
                && let Some(celsius) = slot.as_f64()
            {
                *slot = Value::from(unit.convert_celsius(celsius));
            }
        }
    }

    payload
}

/// Same as [`weather_in_unit`] for the `weather` half of a summary payload
pub fn summary_in_unit(mut payload: Value, unit: TemperatureUnit) -> Value {
    if let Some(weather) = payload.get_mut("weather") {
        *weather = weather_in_unit(weather.take(), unit);
    }

    payload
}
