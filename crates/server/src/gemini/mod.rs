//! Gemini API integration for the butcher assistant.
//!
//! A thin client for the `generateContent` REST endpoint. The assistant
//! makes a single non-streaming call per question; no tool use, no
//! conversation state on the server side.

mod client;
mod error;
mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use types::{Candidate, Content, GenerateRequest, GenerateResponse, Part};
