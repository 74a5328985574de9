//! In-memory feed store.
//!
//! Owns the post list, the upload draft, the tab selector, and the composer
//! visibility flag. The user profile is read-only input. Every mutation goes
//! through a method here, called from the single UI event loop.

use super::seed::{default_profile, seed_posts};
use super::tags::split_tags;
use super::types::{ImageRef, Post, PostId, Tab, UploadDraft, UserProfile, NOW_LABEL};

pub struct FeedStore {
    profile: UserProfile,
    /// Newest first. Grows by prepend only.
    posts: Vec<Post>,
    draft: UploadDraft,
    tab: Tab,
    composer_open: bool,
    /// Next id to hand out. Independent of `posts.len()`.
    next_id: u64,
}

impl FeedStore {
    /// Create a store from a profile and initial posts.
    pub fn new(profile: UserProfile, posts: Vec<Post>) -> Self {
        let next_id = posts.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        Self {
            profile,
            posts,
            draft: UploadDraft::default(),
            tab: Tab::default(),
            composer_open: false,
            next_id,
        }
    }

    /// Create a store with the default profile and the three starter posts.
    pub fn seeded() -> Self {
        Self::new(default_profile(), seed_posts())
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Posts shown for the current tab. "Following" is always empty.
    pub fn visible_posts(&self) -> &[Post] {
        match self.tab {
            Tab::ForYou => &self.posts,
            Tab::Following => &[],
        }
    }

    pub fn set_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            tracing::debug!(?tab, "Switched tab");
        }
        self.tab = tab;
    }

    /// Flip the liked flag of a post.
    ///
    /// Returns `false` and leaves state untouched when no post has this id.
    pub fn toggle_like(&mut self, id: PostId) -> bool {
        match self.posts.iter_mut().find(|p| p.id == id) {
            Some(post) => {
                let liked = post.toggle_like();
                tracing::debug!(post_id = %id, liked, likes = post.likes(), "Toggled like");
                true
            }
            None => {
                tracing::debug!(post_id = %id, "Like toggle for unknown post ignored");
                false
            }
        }
    }

    // ------------------------------------------------------------------------
    // Composer
    // ------------------------------------------------------------------------

    pub fn draft(&self) -> &UploadDraft {
        &self.draft
    }

    /// Field-by-field access for the composer's text inputs.
    pub fn draft_mut(&mut self) -> &mut UploadDraft {
        &mut self.draft
    }

    pub fn is_composer_open(&self) -> bool {
        self.composer_open
    }

    pub fn open_composer(&mut self) {
        self.composer_open = true;
    }

    /// Close the composer and discard the draft.
    pub fn cancel_composer(&mut self) {
        self.composer_open = false;
        self.draft = UploadDraft::default();
    }

    /// Write a staged image into the draft.
    ///
    /// Applied even if the composer was closed while the image was loading.
    pub fn stage_image(&mut self, image: ImageRef) {
        if !self.composer_open {
            tracing::debug!("Staged image arrived while composer closed");
        }
        self.draft.image = Some(image);
    }

    /// Whether the draft satisfies the publish preconditions.
    pub fn can_submit(&self) -> bool {
        self.draft.is_ready()
    }

    /// Publish the current draft as a new post at the top of the feed.
    ///
    /// Inert when the draft lacks an image or caption: returns `None` and
    /// changes nothing. On success the draft is cleared and the composer closed.
    pub fn submit_post(&mut self) -> Option<PostId> {
        if !self.can_submit() {
            tracing::debug!("Submit ignored: draft needs an image and a caption");
            return None;
        }
        let draft = std::mem::take(&mut self.draft);
        let image = draft.image?;

        let id = PostId(self.next_id);
        self.next_id += 1;

        let post = Post::new(
            id,
            self.profile.as_author(),
            image,
            draft.caption,
            0,
            0,
            false,
            split_tags(&draft.tags),
            NOW_LABEL,
        );
        self.posts.insert(0, post);
        self.composer_open = false;

        tracing::info!(post_id = %id, total = self.posts.len(), "Published post");
        Some(id)
    }
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::seeded()
    }
}
