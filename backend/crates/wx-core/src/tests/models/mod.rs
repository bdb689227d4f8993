mod preference_lookup;
mod temperature_unit;
mod weather_reading;
