//! Customer testimonial model.

use serde::{Deserialize, Serialize};

/// A customer quote shown on the homepage and about page.
///
/// Testimonials are static content compiled into the server; there is no CRUD
/// surface for them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub content: String,
    pub avatar: String,
}
