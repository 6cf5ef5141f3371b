//! API Client Module

pub mod client;

pub use client::{ApiClient, VectorizeReply};
