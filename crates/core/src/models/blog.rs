//! Blog post model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Excerpt, ImageRef, PostId};

/// A news or blog entry.
///
/// Highlighted posts are promoted to the scrolling ticker on the homepage.
/// The publication date is set once at creation and survives edits.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub excerpt: Excerpt,
    pub content: String,
    pub image: Option<ImageRef>,
    pub date: DateTime<Utc>,
    pub is_highlighted: bool,
}

impl BlogPost {
    /// Create a post with a fresh identifier, dated now.
    #[must_use]
    pub fn new(
        title: String,
        excerpt: Excerpt,
        content: String,
        image: Option<ImageRef>,
        is_highlighted: bool,
    ) -> Self {
        Self {
            id: PostId::generate(),
            title,
            excerpt,
            content,
            image,
            date: Utc::now(),
            is_highlighted,
        }
    }
}
