//! Integration tests for the post feed.

use sparkfeed::{Comment, PostFeed, PostId, SelectedImage};

fn image(tag: &str) -> SelectedImage {
    SelectedImage::new(format!("{tag}.png"), tag.as_bytes().to_vec())
}

fn post(feed: &mut PostFeed, tag: &str) -> PostId {
    feed.select_image(image(tag));
    feed.set_caption(tag);
    feed.submit_post().unwrap()
}

fn comment_texts(feed: &PostFeed, id: PostId) -> Vec<String> {
    feed.post(id)
        .unwrap()
        .comments()
        .iter()
        .map(|c| c.text().to_string())
        .collect()
}

// ============================================================================
// Posts
// ============================================================================

#[test]
fn test_newest_post_first() {
    let mut feed = PostFeed::new();
    let a = post(&mut feed, "a");
    let b = post(&mut feed, "b");
    let c = post(&mut feed, "c");

    let order: Vec<PostId> = feed.posts().iter().map(|p| p.id()).collect();
    assert_eq!(order, vec![c, b, a]);
    assert_eq!(feed.posts()[0].caption(), "c");
}

#[test]
fn test_failed_submit_does_not_disturb_order() {
    let mut feed = PostFeed::new();
    let a = post(&mut feed, "a");
    assert_eq!(feed.submit_post(), None);
    let b = post(&mut feed, "b");
    assert_eq!(feed.submit_post(), None);

    assert_eq!(feed.len(), 2);
    assert_eq!(feed.posts()[0].id(), b);
    assert_eq!(feed.posts()[1].id(), a);
}

#[test]
fn test_empty_caption_allowed() {
    let mut feed = PostFeed::new();
    feed.select_image(image("quiet"));
    let id = feed.submit_post().unwrap();
    assert_eq!(feed.post(id).unwrap().caption(), "");
}

#[test]
fn test_reselecting_replaces_pending_image() {
    let mut feed = PostFeed::new();
    feed.select_image(image("first"));
    feed.select_image(image("second"));
    let id = feed.submit_post().unwrap();

    let handle = feed.post(id).unwrap().image();
    assert_eq!(feed.images().get(handle).unwrap().name(), "second.png");
    assert_eq!(feed.images().len(), 1);
}

#[test]
fn test_clear_image_prevents_post() {
    let mut feed = PostFeed::new();
    feed.select_image(image("oops"));
    feed.clear_image();
    assert_eq!(feed.submit_post(), None);
    assert!(feed.images().is_empty());
}

// ============================================================================
// Comments
// ============================================================================

#[test]
fn test_comment_appends_only_to_target() {
    let mut feed = PostFeed::new();
    let a = post(&mut feed, "a");
    let b = post(&mut feed, "b");

    assert!(feed.submit_comment(a, "one"));
    assert!(feed.submit_comment(a, "two"));
    assert!(feed.submit_comment(b, "other"));

    assert_eq!(comment_texts(&feed, a), vec!["one", "two"]);
    assert_eq!(comment_texts(&feed, b), vec!["other"]);
}

#[test]
fn test_comment_kept_verbatim() {
    let mut feed = PostFeed::new();
    let a = post(&mut feed, "a");
    feed.submit_comment(a, "");
    feed.submit_comment(a, "  spaced  ");
    assert_eq!(comment_texts(&feed, a), vec!["", "  spaced  "]);
    assert_eq!(feed.post(a).unwrap().comments()[1], Comment::from("  spaced  "));
}

#[test]
fn test_unknown_post_id_changes_nothing() {
    let mut feed = PostFeed::new();
    let a = post(&mut feed, "a");
    feed.submit_comment(a, "kept");
    let before = feed.posts().to_vec();

    let mut other = PostFeed::new();
    let _ = post(&mut other, "x");
    let stranger = post(&mut other, "y");

    assert!(feed.post(stranger).is_none());
    assert!(!feed.submit_comment(stranger, "lost"));
    assert!(!feed.submit_comment_draft(stranger));
    assert_eq!(feed.posts(), before.as_slice());
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_post_comment_then_resubmit() {
    let mut feed = PostFeed::new();
    feed.select_image(image("A"));
    feed.set_caption("hello");
    let id = feed.submit_post().unwrap();

    assert_eq!(feed.len(), 1);
    assert_eq!(feed.posts()[0].caption(), "hello");
    assert!(feed.posts()[0].comments().is_empty());

    feed.set_comment_draft(id, "hi");
    feed.submit_comment_draft(id);
    assert_eq!(comment_texts(&feed, id), vec!["hi"]);
    assert_eq!(feed.comment_draft(id), "");

    assert_eq!(feed.submit_post(), None);
    assert_eq!(feed.len(), 1);
}

#[test]
fn test_session_close_releases_every_image() {
    let mut feed = PostFeed::new();
    for tag in ["a", "b", "c"] {
        post(&mut feed, tag);
    }
    assert_eq!(feed.images().len(), 3);

    feed.close();
    assert!(feed.images().is_empty());
    assert!(feed.is_empty());
    feed.close();
}
