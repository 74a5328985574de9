//! Integration tests for the feed store: likes, tabs, and the composer
//! lifecycle from open to publish.
//!
//! Each test starts from a fresh seeded store, so ids and counts are
//! predictable.

use imago::feed::{split_tags, FeedStore, ImageRef, PostId, Tab, UploadDraft, NOW_LABEL};
use pretty_assertions::assert_eq;

fn staged_image() -> ImageRef {
    ImageRef::new("data:image/png;base64,iVBORw0KGgo=")
}

fn fill_draft(store: &mut FeedStore, caption: &str, tags: &str) {
    store.stage_image(staged_image());
    let draft = store.draft_mut();
    draft.caption = caption.to_string();
    draft.tags = tags.to_string();
}

// ============================================================================
// Seed Tests
// ============================================================================

#[test]
fn test_seeded_feed_order_and_counts() {
    let store = FeedStore::seeded();
    let summary: Vec<(u64, &str, u32, bool)> = store
        .posts()
        .iter()
        .map(|p| (p.id.0, p.author.name.as_str(), p.likes(), p.is_liked()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (1, "Maria Santos", 42, false),
            (2, "Pedro Costa", 18, true),
            (3, "Ana Lima", 73, false),
        ]
    );
    assert_eq!(store.tab(), Tab::ForYou);
    assert!(!store.is_composer_open());
    assert_eq!(store.draft(), &UploadDraft::default());
}

#[test]
fn test_seeded_profile() {
    let store = FeedStore::seeded();
    let profile = store.profile();
    assert_eq!(profile.name, "Administrador");
    assert_eq!(profile.followers, 234);
    assert_eq!(profile.following, 189);
}

// ============================================================================
// Like Tests
// ============================================================================

#[test]
fn test_like_unliked_post() {
    let mut store = FeedStore::seeded();
    assert!(store.toggle_like(PostId(1)));

    let post = store.post(PostId(1)).unwrap();
    assert!(post.is_liked());
    assert_eq!(post.likes(), 43);
}

#[test]
fn test_unlike_liked_post() {
    let mut store = FeedStore::seeded();
    assert!(store.toggle_like(PostId(2)));

    let post = store.post(PostId(2)).unwrap();
    assert!(!post.is_liked());
    assert_eq!(post.likes(), 17);
}

#[test]
fn test_like_twice_restores_state() {
    let mut store = FeedStore::seeded();
    let before = store.posts().to_vec();

    store.toggle_like(PostId(3));
    store.toggle_like(PostId(3));

    assert_eq!(store.posts(), before.as_slice());
}

#[test]
fn test_like_unknown_id_changes_nothing() {
    let mut store = FeedStore::seeded();
    let before = store.posts().to_vec();

    assert!(!store.toggle_like(PostId(99)));
    assert_eq!(store.posts(), before.as_slice());
}

#[test]
fn test_like_touches_only_target_post() {
    let mut store = FeedStore::seeded();
    store.toggle_like(PostId(1));

    assert_eq!(store.post(PostId(2)).unwrap().likes(), 18);
    assert_eq!(store.post(PostId(3)).unwrap().likes(), 73);
}

// ============================================================================
// Tab Tests
// ============================================================================

#[test]
fn test_following_tab_shows_nothing_and_keeps_posts() {
    let mut store = FeedStore::seeded();
    store.set_tab(Tab::Following);

    assert!(store.visible_posts().is_empty());
    assert_eq!(store.posts().len(), 3);

    store.set_tab(Tab::ForYou);
    assert_eq!(store.visible_posts().len(), 3);
}

#[test]
fn test_set_same_tab_is_noop() {
    let mut store = FeedStore::seeded();
    store.set_tab(Tab::ForYou);
    assert_eq!(store.tab(), Tab::ForYou);
    assert_eq!(store.visible_posts().len(), 3);
}

// ============================================================================
// Composer Lifecycle Tests
// ============================================================================

#[test]
fn test_publish_prepends_post() {
    let mut store = FeedStore::seeded();
    store.open_composer();
    fill_draft(&mut store, "Hello", "x, y");

    let id = store.submit_post().unwrap();

    assert_eq!(store.posts().len(), 4);
    let post = &store.posts()[0];
    assert_eq!(post.id, id);
    assert_eq!(post.author.name, "Administrador");
    assert_eq!(post.caption, "Hello");
    assert_eq!(post.tags, vec!["x", "y"]);
    assert_eq!(post.likes(), 0);
    assert_eq!(post.comments, 0);
    assert!(!post.is_liked());
    assert_eq!(post.timestamp, NOW_LABEL);
    assert_eq!(post.image, staged_image());

    assert!(!store.is_composer_open());
    assert_eq!(store.draft(), &UploadDraft::default());
}

#[test]
fn test_publish_ids_are_unique_and_increasing() {
    let mut store = FeedStore::seeded();

    fill_draft(&mut store, "first", "");
    let first = store.submit_post().unwrap();
    fill_draft(&mut store, "second", "");
    let second = store.submit_post().unwrap();

    assert!(first.0 > 3);
    assert!(second.0 > first.0);

    let mut ids: Vec<u64> = store.posts().iter().map(|p| p.id.0).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 5);
}

#[test]
fn test_publish_without_image_is_inert() {
    let mut store = FeedStore::seeded();
    store.open_composer();
    store.draft_mut().caption = "No picture".to_string();

    assert!(!store.can_submit());
    assert_eq!(store.submit_post(), None);
    assert_eq!(store.posts().len(), 3);
    assert!(store.is_composer_open());
    assert_eq!(store.draft().caption, "No picture");
}

#[test]
fn test_publish_without_caption_is_inert() {
    let mut store = FeedStore::seeded();
    store.open_composer();
    store.stage_image(staged_image());

    assert!(!store.can_submit());
    assert_eq!(store.submit_post(), None);
    assert_eq!(store.posts().len(), 3);
    assert!(store.draft().image.is_some());
}

#[test]
fn test_whitespace_caption_is_accepted() {
    let mut store = FeedStore::seeded();
    fill_draft(&mut store, "   ", "");

    assert!(store.can_submit());
    store.submit_post().unwrap();
    assert_eq!(store.posts()[0].caption, "   ");
}

#[test]
fn test_empty_tags_produce_single_empty_tag() {
    let mut store = FeedStore::seeded();
    fill_draft(&mut store, "tagless", "");

    store.submit_post().unwrap();
    assert_eq!(store.posts()[0].tags, vec![String::new()]);
}

#[test]
fn test_cancel_discards_draft() {
    let mut store = FeedStore::seeded();
    store.open_composer();
    fill_draft(&mut store, "draft", "a");

    store.cancel_composer();

    assert!(!store.is_composer_open());
    assert!(store.draft().is_empty());
    assert_eq!(store.posts().len(), 3);
}

#[test]
fn test_publish_while_on_following_tab() {
    let mut store = FeedStore::seeded();
    store.set_tab(Tab::Following);
    fill_draft(&mut store, "hidden for now", "");

    store.submit_post().unwrap();

    assert_eq!(store.tab(), Tab::Following);
    assert!(store.visible_posts().is_empty());
    store.set_tab(Tab::ForYou);
    assert_eq!(store.visible_posts()[0].caption, "hidden for now");
}

#[test]
fn test_split_tags_matches_published_tags() {
    let mut store = FeedStore::seeded();
    let raw = " a , b,,c ";
    fill_draft(&mut store, "tags", raw);

    store.submit_post().unwrap();
    assert_eq!(store.posts()[0].tags, split_tags(raw));
    assert_eq!(store.posts()[0].tags, vec!["a", "b", "", "c"]);
}
