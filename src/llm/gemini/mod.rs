// src/llm/gemini/mod.rs
// Google Gemini generateContent client

mod client;
mod extraction;
pub mod types;

pub use client::GeminiClient;
