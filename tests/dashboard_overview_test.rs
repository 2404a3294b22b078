//! Integration tests for the creator dashboard.
//!
//! Drives [`load_overview`] end to end against the mock store and checks
//! the derived numbers the panels render: stat totals, engagement rate,
//! top-post ranking with previews, and recent-activity ordering.

mod common;

use chrono::Utc;

use connectsphere::adapters::mock::MockRowStore;
use connectsphere::analytics::{
    format_count, load_overview, RECENT_ACTIVITY_LIMIT, TOP_POSTS_LIMIT,
};
use connectsphere::models::{ActivityKind, Post};
use connectsphere::traits::StoreError;

fn dashboard_mock() -> MockRowStore {
    let mock = MockRowStore::new();
    mock.set_profile(common::make_profile(300));

    let mut posts: Vec<Post> = (0..7)
        .map(|i| common::make_post(&format!("p{}", i), i * 10))
        .collect();
    // A heavily-commented post that should outrank purely-liked ones once
    // the like-ordered fetch is re-ranked by total engagement. Its long
    // body also exercises preview truncation.
    posts[2].comment_count = 200;
    posts[2].text = Some("a".repeat(80));
    mock.set_posts(common::AUTHOR_ID, posts);

    mock.set_activity(
        common::AUTHOR_ID,
        vec![
            common::make_activity("n1", ActivityKind::Like, 1),
            common::make_activity("n2", ActivityKind::Comment, 60),
            common::make_activity("n3", ActivityKind::Follow, 60 * 26),
        ],
    );
    mock
}

// ============================================================================
// Test 1: Overview assembly and stat totals
// ============================================================================

#[tokio::test]
async fn test_overview_stat_totals() {
    let mock = dashboard_mock();

    let overview = load_overview(&mock, common::AUTHOR_ID).await.unwrap();

    assert_eq!(overview.stats.followers, 300);
    assert_eq!(overview.stats.total_posts, 7);
    // Likes: 0+10+...+60; comments: 6*2 + 200; shares: 7*1.
    assert_eq!(overview.stats.total_likes, 210);
    assert_eq!(overview.stats.total_comments, 212);
    assert_eq!(overview.stats.total_shares, 7);
    assert_eq!(overview.stats.total_saves, 21);
    // (210 + 212 + 7) / 300 * 100 = 143.0
    assert_eq!(overview.stats.engagement_rate, 143.0);
}

// ============================================================================
// Test 2: Top posts are ranked by total engagement with previews
// ============================================================================

#[tokio::test]
async fn test_overview_top_posts_ranking_and_previews() {
    let mock = dashboard_mock();

    let overview = load_overview(&mock, common::AUTHOR_ID).await.unwrap();

    assert_eq!(overview.top_posts.len(), TOP_POSTS_LIMIT);
    // p2 reaches the like-ordered fetch with 20 likes, then its 200
    // comments move it past p6's 60 likes in the engagement ranking.
    assert_eq!(overview.top_posts[0].id, "p2");
    assert_eq!(overview.top_posts[1].id, "p6");
    for pair in overview.top_posts.windows(2) {
        assert!(pair[0].total_engagement >= pair[1].total_engagement);
    }

    assert_eq!(
        overview.top_posts[0].preview,
        format!("{}...", "a".repeat(50))
    );
}

// ============================================================================
// Test 3: Recent activity is capped, newest first, with display labels
// ============================================================================

#[tokio::test]
async fn test_overview_recent_activity() {
    let mock = dashboard_mock();

    let overview = load_overview(&mock, common::AUTHOR_ID).await.unwrap();

    assert!(overview.recent_activity.len() <= RECENT_ACTIVITY_LIMIT);
    assert_eq!(overview.recent_activity[0].id, "n1");

    let now = Utc::now();
    let ages: Vec<String> = overview
        .recent_activity
        .iter()
        .map(|item| item.age_label(now))
        .collect();
    assert_eq!(ages, vec!["1m", "1h", "1d"]);

    let kinds: Vec<&str> = overview
        .recent_activity
        .iter()
        .map(|item| item.kind.label())
        .collect();
    assert_eq!(kinds, vec!["Like", "Comment", "Follow"]);
}

// ============================================================================
// Test 4: Stat-card numbers format compactly
// ============================================================================

#[tokio::test]
async fn test_stat_totals_format_for_display() {
    let mock = MockRowStore::new();
    mock.set_profile(common::make_profile(2_300_000));
    mock.set_posts(
        common::AUTHOR_ID,
        vec![common::make_post("p0", 15_400)],
    );
    mock.set_activity(common::AUTHOR_ID, Vec::new());

    let overview = load_overview(&mock, common::AUTHOR_ID).await.unwrap();

    assert_eq!(format_count(overview.stats.followers), "2.3M");
    assert_eq!(format_count(overview.stats.total_likes), "15.4K");
    assert_eq!(format_count(overview.stats.total_posts), "1");
}

// ============================================================================
// Test 5: A failed read fails the whole overview
// ============================================================================

#[tokio::test]
async fn test_overview_requires_profile() {
    let mock = MockRowStore::new();
    mock.set_posts(common::AUTHOR_ID, vec![common::make_post("p0", 1)]);

    let result = load_overview(&mock, common::AUTHOR_ID).await;

    assert!(matches!(result, Err(StoreError::Unavailable { .. })));
}
