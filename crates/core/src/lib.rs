//! Jumbo Meats Core - Shared types library.
//!
//! This crate provides the common types used across the Jumbo Meats
//! components:
//! - `server` - The website service (storefront and admin APIs)
//! - `integration-tests` - End-to-end workflow tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP
//! clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, categories, usernames,
//!   excerpts, and image references
//! - [`models`] - Domain entities: products, blog posts, admin accounts,
//!   site settings, cart lines, testimonials

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
