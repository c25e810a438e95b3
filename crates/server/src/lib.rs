//! Jumbo Meats website library.
//!
//! This crate provides the full website service as a library, allowing it
//! to be exercised by the integration tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod defaults;
pub mod error;
pub mod gemini;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
