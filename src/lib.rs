// src/lib.rs
// Research Assistant - HTTP relay from text-processing requests to Gemini

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod config;
pub mod error;
pub mod http;
pub mod llm;
pub mod prompt;
pub mod service;
pub mod web;

pub use error::{ResearchError, Result};
