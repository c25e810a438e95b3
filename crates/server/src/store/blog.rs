//! Blog post store.
//!
//! Backed by the `jumbo_blog_posts` blob. List views sort newest first;
//! highlighted posts feed the homepage ticker. A post's publication date is
//! fixed at creation and survives edits.

use jumbo_meats_core::BlogPost;
use jumbo_meats_core::types::PostId;
use parking_lot::RwLock;

use super::{JsonBlobStore, StoreError, keys};

/// Store for blog posts.
pub struct BlogStore {
    blobs: JsonBlobStore,
    posts: RwLock<Vec<BlogPost>>,
}

impl BlogStore {
    /// Load posts from their blob (or an empty collection).
    #[must_use]
    pub fn load(blobs: JsonBlobStore) -> Self {
        let posts = blobs.load_or(keys::BLOG_POSTS, Vec::new);
        Self {
            blobs,
            posts: RwLock::new(posts),
        }
    }

    /// All posts in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<BlogPost> {
        self.posts.read().clone()
    }

    /// All posts, newest first.
    #[must_use]
    pub fn list_newest_first(&self) -> Vec<BlogPost> {
        let mut posts = self.list();
        posts.sort_by(|a, b| b.date.cmp(&a.date));
        posts
    }

    /// Highlighted posts for the homepage ticker, in insertion order.
    #[must_use]
    pub fn highlighted(&self) -> Vec<BlogPost> {
        self.posts
            .read()
            .iter()
            .filter(|p| p.is_highlighted)
            .cloned()
            .collect()
    }

    /// Look up one post.
    #[must_use]
    pub fn find(&self, id: PostId) -> Option<BlogPost> {
        self.posts.read().iter().find(|p| p.id == id).cloned()
    }

    /// Append a post and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if writing the blob fails.
    pub fn insert(&self, post: BlogPost) -> Result<(), StoreError> {
        let mut posts = self.posts.write();
        posts.push(post);
        self.blobs.save(keys::BLOG_POSTS, &*posts)
    }

    /// Mutate the post with `id` in place and persist the collection.
    ///
    /// The id and original publication date cannot be changed through
    /// `mutate`; both are restored after it runs.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id, or a write error.
    pub fn update<F>(&self, id: PostId, mutate: F) -> Result<BlogPost, StoreError>
    where
        F: FnOnce(&mut BlogPost),
    {
        let mut posts = self.posts.write();
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        let original_date = post.date;
        mutate(post);
        post.id = id;
        post.date = original_date;
        let updated = post.clone();

        self.blobs.save(keys::BLOG_POSTS, &*posts)?;
        Ok(updated)
    }

    /// Remove a post and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] for an unknown id, or a write error.
    pub fn remove(&self, id: PostId) -> Result<(), StoreError> {
        let mut posts = self.posts.write();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(StoreError::NotFound);
        }
        self.blobs.save(keys::BLOG_POSTS, &*posts)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, Utc};
    use jumbo_meats_core::types::Excerpt;

    use super::*;

    fn post(title: &str, highlighted: bool) -> BlogPost {
        BlogPost::new(
            title.to_owned(),
            Excerpt::parse("A short update from the shop.").unwrap(),
            "Full story.".to_owned(),
            None,
            highlighted,
        )
    }

    fn temp_store() -> (tempfile::TempDir, BlogStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = BlogStore::load(JsonBlobStore::open(dir.path()).unwrap());
        (dir, store)
    }

    #[test]
    fn test_list_newest_first() {
        let (_dir, store) = temp_store();

        let mut older = post("Older", false);
        older.date = Utc::now() - Duration::days(3);
        let newer = post("Newer", false);

        store.insert(older).unwrap();
        store.insert(newer).unwrap();

        let sorted = store.list_newest_first();
        assert_eq!(sorted.first().unwrap().title, "Newer");
        assert_eq!(sorted.last().unwrap().title, "Older");
    }

    #[test]
    fn test_highlighted_only_feeds_ticker() {
        let (_dir, store) = temp_store();
        store.insert(post("Plain", false)).unwrap();
        store.insert(post("Promoted", true)).unwrap();

        let ticker = store.highlighted();
        assert_eq!(ticker.len(), 1);
        assert_eq!(ticker.first().unwrap().title, "Promoted");
    }

    #[test]
    fn test_update_preserves_publication_date() {
        let (_dir, store) = temp_store();

        let mut original = post("Launch", false);
        original.date = Utc::now() - Duration::days(30);
        let id = original.id;
        let original_date = original.date;
        store.insert(original).unwrap();

        let updated = store
            .update(id, |p| {
                p.title = "Launch (edited)".to_owned();
                p.date = Utc::now();
            })
            .unwrap();

        assert_eq!(updated.title, "Launch (edited)");
        assert_eq!(updated.date, original_date);
    }

    #[test]
    fn test_remove_unknown_post_is_not_found() {
        let (_dir, store) = temp_store();
        assert!(matches!(
            store.remove(PostId::generate()),
            Err(StoreError::NotFound)
        ));
    }

    #[test]
    fn test_posts_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let blobs = JsonBlobStore::open(dir.path()).unwrap();

        let store = BlogStore::load(blobs.clone());
        store.insert(post("Kept", true)).unwrap();
        let written = store.list();

        let reloaded = BlogStore::load(blobs);
        assert_eq!(reloaded.list(), written);
    }
}
