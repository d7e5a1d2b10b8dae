// src/config/mod.rs
// Configuration loaded once at startup

pub mod env;

pub use env::{ConfigValidation, EnvConfig, GeminiConfig, ServerConfig};
