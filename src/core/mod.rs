// src/core/mod.rs
//! Backend connection: configuration and HTTP client

pub mod config_manager;
pub mod service_client;

pub use config_manager::{ConfigManager, ServiceConfig};
pub use service_client::{RecommendationClient, RecommendationSource};
