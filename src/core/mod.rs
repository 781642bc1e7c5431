// src/core/mod.rs
//! Backend access and configuration

pub mod config_manager;
pub mod service_client;

pub use config_manager::{AppConfig, ConfigManager};
pub use service_client::{ResumeBackend, ServiceClient};
