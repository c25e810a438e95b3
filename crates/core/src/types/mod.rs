//! Core types for the Jumbo Meats website.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod excerpt;
pub mod id;
pub mod image;
pub mod username;

pub use category::{Category, CategoryFilter, CategoryParseError};
pub use excerpt::{Excerpt, ExcerptError};
pub use id::*;
pub use image::{ImageKind, ImageRef, ImageRefError};
pub use username::{Username, UsernameError};
