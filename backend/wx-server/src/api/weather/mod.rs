pub mod weather;
pub mod weather_query;
pub mod weather_summary_response;
