//! Temperature and wind helpers.

/// Offset between Kelvin and Celsius scales
pub const KELVIN_OFFSET: f64 = 273.15;

const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Map a bearing in degrees to an 8-point compass direction
pub fn wind_direction(degrees: f64) -> &'static str {
    let index = (degrees / 45.0).round() as i64;
    COMPASS_POINTS[index.rem_euclid(8) as usize]
}
