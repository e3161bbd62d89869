//! Infrastructure layer module
//!
//! This module contains external integrations:
//! - Upstream message API client (reqwest)
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod logging;
pub mod upstream;
