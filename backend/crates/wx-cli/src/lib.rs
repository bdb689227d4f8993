//! wx-cli library
//!
//! Exports the HTTP client for use in tests and other crates.

pub(crate) mod client;
pub mod convert;


pub use client::{CliClientResult, Client, ClientError};
