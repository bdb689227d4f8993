//! Normalized upstream weather payload.
//!
//! The provider reports temperatures in Kelvin. A `WeatherReading` can only be
//! built through [`WeatherReading::from_kelvin`], which converts the `main`
//! temperature fields to Celsius. The type has no `Deserialize` impl and no
//! path back into the conversion: a payload is converted exactly once.

use crate::units::kelvin_to_celsius;

use serde::Serialize;
use serde_json::Value;

/// Fields under `main` that arrive in Kelvin
pub const KELVIN_FIELDS: [&str; 4] = ["temp", "feels_like", "temp_min", "temp_max"];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeatherReading(Value);

impl WeatherReading {
    /// Convert a raw provider payload. Everything except the four `main`
    /// temperature fields passes through untouched; non-numeric or missing
    /// temperature fields are left as they are.
    pub fn from_kelvin(mut payload: Value) -> Self {
        if let Some(main) = payload.get_mut("main").and_then(Value::as_object_mut) {
            for field in KELVIN_FIELDS {
                if let Some(slot) = main.get_mut(field)
                    && let Some(kelvin) = slot.as_f64()
                {
                    *slot = Value::from(kelvin_to_celsius(kelvin));
                }
            }
        }

        Self(payload)
    }

    pub fn payload(&self) -> &Value {
        &self.0
    }

    pub fn into_payload(self) -> Value {
        self.0
    }

    /// Current temperature in Celsius
    pub fn temp(&self) -> Option<f64> {
        self.main_f64("temp")
    }

    pub fn feels_like(&self) -> Option<f64> {
        self.main_f64("feels_like")
    }

    pub fn temp_min(&self) -> Option<f64> {
        self.main_f64("temp_min")
    }

    pub fn temp_max(&self) -> Option<f64> {
        self.main_f64("temp_max")
    }

    /// Primary condition group (`weather[0].main`), e.g. "Clear"
    pub fn condition(&self) -> Option<&str> {
        self.0
            .get("weather")
            .and_then(|w| w.get(0))
            .and_then(|w| w.get("main"))
            .and_then(Value::as_str)
    }

    pub fn description(&self) -> Option<&str> {
        self.0
            .get("weather")
            .and_then(|w| w.get(0))
            .and_then(|w| w.get("description"))
            .and_then(Value::as_str)
    }

    /// City name as resolved by the provider
    pub fn city_name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    fn main_f64(&self, field: &str) -> Option<f64> {
        self.0
            .get("main")
            .and_then(|m| m.get(field))
            .and_then(Value::as_f64)
    }
}
