pub mod json_body;
pub mod query_params;
