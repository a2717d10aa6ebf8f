pub mod client;

pub use client::{ApiClient, Endpoint, Query, RawResponse};
