//! Rule-based weather insights.
//!
//! Clothing depends on the Celsius temperature; activities, health tips and
//! the greeting depend on the condition category. Random picks go through the
//! caller's `Rng` so results are reproducible under a seeded generator.

pub mod weather_category;

use crate::{Insights, WeatherCategory};

use rand::Rng;
use rand::seq::IndexedRandom;

/// Build the full set of insights for a city
pub fn generate_insights<R: Rng + ?Sized>(
    rng: &mut R,
    city: &str,
    temp_celsius: f64,
    category: WeatherCategory,
) -> Insights {
    Insights {
        personalized_message: personalized_message(rng, city, temp_celsius, category),
        clothing_recommendation: clothing_recommendation(temp_celsius).to_string(),
        activity_suggestion: activity_suggestion(rng, category).to_string(),
        health_tip: health_tip(category).to_string(),
    }
}

pub fn clothing_recommendation(temp_celsius: f64) -> &'static str {
    if temp_celsius < 0.0 {
        "Heavy winter coat, thermal layers, gloves, scarf, and warm hat"
    } else if temp_celsius < 10.0 {
        "Winter coat, sweater, long pants, and a light scarf"
    } else if temp_celsius < 20.0 {
        "Light jacket or sweater with long pants"
    } else if temp_celsius < 30.0 {
        "T-shirt with light pants or shorts"
    } else {
        "Light, breathable clothing, shorts, and consider a hat for sun protection"
    }
}

pub fn activities_for(category: WeatherCategory) -> &'static [&'static str] {
    match category {
        WeatherCategory::Clear => &[
            "Go for a hike",
            "Have a picnic in the park",
            "Visit an outdoor cafe",
        ],
        WeatherCategory::Clouds => &["Visit a museum", "Go shopping", "Take a scenic drive"],
        WeatherCategory::Rain => &["Visit a cozy cafe", "Go to a movie", "Read a book at home"],
        WeatherCategory::Snow => &[
            "Build a snowman",
            "Go sledding",
            "Enjoy hot chocolate by the fire",
        ],
        WeatherCategory::Thunderstorm => &[
            "Watch movies at home",
            "Visit an indoor mall",
            "Cook a nice meal",
        ],
        WeatherCategory::Drizzle => &[
            "Visit an art gallery",
            "Go to a bookstore",
            "Try a new restaurant",
        ],
        WeatherCategory::Mist => &[
            "Take atmospheric photos",
            "Visit a botanical garden",
            "Explore local shops",
        ],
    }
}

pub fn activity_suggestion<R: Rng + ?Sized>(rng: &mut R, category: WeatherCategory) -> &'static str {
    let activities = activities_for(category);
    activities.choose(rng).copied().unwrap_or(activities[0])
}

pub fn health_tip(category: WeatherCategory) -> &'static str {
    match category {
        WeatherCategory::Clear => "Don't forget sunscreen and stay hydrated!",
        WeatherCategory::Clouds => "Moderate UV levels - still consider sun protection.",
        WeatherCategory::Rain => "Stay dry to avoid catching a cold.",
        WeatherCategory::Snow => "Dress in layers and protect your extremities from the cold.",
        WeatherCategory::Thunderstorm => "Stay indoors and away from windows during lightning.",
        WeatherCategory::Drizzle => "Carry an umbrella and wear water-resistant shoes.",
        WeatherCategory::Mist => "Drive carefully if visibility is reduced.",
    }
}

pub fn personalized_message<R: Rng + ?Sized>(
    rng: &mut R,
    city: &str,
    temp_celsius: f64,
    category: WeatherCategory,
) -> String {
    let conditions = category.as_str();
    let lower = conditions.to_lowercase();

    match rng.random_range(0..4) {
        0 => format!("Perfect {lower} weather in {city} at {temp_celsius:.1}°C!"),
        1 => format!("Enjoy your day in {city} with {lower} skies."),
        2 => format!("Current conditions in {city}: {conditions} at {temp_celsius:.1}°C."),
        _ => format!("Welcome to {city}! It's {temp_celsius:.1}°C with {lower} conditions."),
    }
}
