//! Upstream message API integration.

pub mod client;

pub use client::HttpMessageSource;
