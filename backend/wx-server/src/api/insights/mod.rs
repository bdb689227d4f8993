pub mod insights;
pub mod insights_query;
