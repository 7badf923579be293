//! The post feed: images with captions and anonymous comments.
//!
//! Input is staged first (pending image, caption, per-post comment drafts) and
//! committed by an explicit submit. Invalid submits are absorbed: no image
//! means no post, an unknown post id means no comment.
//!
//! # Example
//!
//! ```
//! use sparkfeed::{PostFeed, SelectedImage};
//!
//! let mut feed = PostFeed::new();
//! feed.select_image(SelectedImage::new("sky.png", vec![0u8; 16]));
//! feed.set_caption("hello");
//! let id = feed.submit_post().unwrap();
//!
//! feed.submit_comment(id, "hi");
//! assert_eq!(feed.posts()[0].comments()[0].text(), "hi");
//!
//! // The pending image was consumed.
//! assert_eq!(feed.submit_post(), None);
//! assert_eq!(feed.len(), 1);
//! ```

use crate::image_store::{ImageRef, ImageStore, SelectedImage};
use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

/// Post identifier: creation time in milliseconds since the UNIX epoch,
/// bumped forward when two posts land in the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(u64);

impl PostId {
    pub fn as_millis(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An anonymous comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment(String);

impl Comment {
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Comment {
    fn from(text: String) -> Self {
        Comment(text)
    }
}

impl From<&str> for Comment {
    fn from(text: &str) -> Self {
        Comment(text.to_string())
    }
}

/// A posted image with its caption and comment thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    id: PostId,
    image: ImageRef,
    caption: String,
    comments: Vec<Comment>,
}

impl Post {
    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn image(&self) -> ImageRef {
        self.image
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Comments in the order they were submitted.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }
}

/// Newest-first list of posts plus the staged input for the next ones.
#[derive(Debug, Default)]
pub struct PostFeed {
    posts: Vec<Post>,
    images: ImageStore,
    pending_image: Option<SelectedImage>,
    caption: String,
    drafts: HashMap<PostId, String>,
    last_id: u64,
}

impl PostFeed {
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Staging
    // =========================================================================

    /// Stage an image for the next post, replacing any previous selection.
    pub fn select_image(&mut self, image: SelectedImage) {
        self.pending_image = Some(image);
    }

    pub fn clear_image(&mut self) {
        self.pending_image = None;
    }

    pub fn pending_image(&self) -> Option<&SelectedImage> {
        self.pending_image.as_ref()
    }

    pub fn set_caption(&mut self, text: impl Into<String>) {
        self.caption = text.into();
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Mutable caption buffer for text widgets.
    pub fn caption_mut(&mut self) -> &mut String {
        &mut self.caption
    }

    pub fn set_comment_draft(&mut self, id: PostId, text: impl Into<String>) {
        self.drafts.insert(id, text.into());
    }

    pub fn comment_draft(&self, id: PostId) -> &str {
        self.drafts.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Mutable draft buffer for the given post, created empty on first use.
    pub fn comment_draft_mut(&mut self, id: PostId) -> &mut String {
        self.drafts.entry(id).or_default()
    }

    // =========================================================================
    // Commits
    // =========================================================================

    /// Publish the pending image with the pending caption at the front of the
    /// feed. Returns `None` and changes nothing if no image is pending.
    pub fn submit_post(&mut self) -> Option<PostId> {
        let Some(image) = self.pending_image.take() else {
            warn!("post submitted without an image; ignored");
            return None;
        };

        let id = self.next_id();
        let image = self.images.insert(image);
        let caption = std::mem::take(&mut self.caption);
        info!(%id, %image, caption_len = caption.len(), "post created");

        self.posts.insert(
            0,
            Post {
                id,
                image,
                caption,
                comments: Vec::new(),
            },
        );
        Some(id)
    }

    /// Append `text` verbatim to the post's thread. Returns `false` and
    /// changes nothing if no post has this id.
    pub fn submit_comment(&mut self, id: PostId, text: impl Into<Comment>) -> bool {
        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                post.comments.push(text.into());
                info!(%id, comments = post.comments.len(), "comment added");
                true
            }
            None => {
                warn!(%id, "comment for unknown post; ignored");
                false
            }
        }
    }

    /// Submit the post's staged draft (even if empty) and clear it.
    pub fn submit_comment_draft(&mut self, id: PostId) -> bool {
        let text = self.drafts.remove(&id).unwrap_or_default();
        self.submit_comment(id, text)
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Release every image handle and drop all posts and staged input.
    pub fn close(&mut self) {
        if !self.posts.is_empty() || !self.images.is_empty() {
            info!(posts = self.posts.len(), images = self.images.len(), "feed closed");
        }
        self.images.clear();
        self.posts.clear();
        self.drafts.clear();
        self.pending_image = None;
        self.caption.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Store backing the posts' image handles.
    pub fn images(&self) -> &ImageStore {
        &self.images
    }

    fn next_id(&mut self) -> PostId {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.last_id = now.max(self.last_id + 1);
        PostId(self.last_id)
    }
}

impl Drop for PostFeed {
    fn drop(&mut self) {
        self.close();
    }
}
