/// Engagement scoring from post metadata
///
/// A text-independent relevance proxy: recency tier + published bonus +
/// capped like bonus, clamped to [0, 1]. Pure over the snapshot plus an
/// explicit `now` reference, so scores are reproducible in tests. Ignores
/// the user profile entirely.

use chrono::{DateTime, Utc};

use crate::store::PostSnapshot;

/// Engagement score with `now` taken from the wall clock.
pub fn engagement_score(post: &PostSnapshot) -> f64 {
    engagement_score_at(post, Utc::now())
}

/// Engagement score against an explicit reference time.
///
/// Accumulates, then clamps to [0, 1]:
/// - age < 1 day → +0.3; 1–6 days → +0.2; 7–29 days → +0.1; otherwise +0.0
///   (whole-day truncation; a missing created_at counts as brand new)
/// - published → +0.2
/// - likes → min(likes × 0.01, 0.3), capped at 30 likes
pub fn engagement_score_at(post: &PostSnapshot, now: DateTime<Utc>) -> f64 {
    let mut score = 0.0_f64;

    let created_at = post.created_at.unwrap_or(now);
    let days_old = now.signed_duration_since(created_at).num_days();
    if days_old < 1 {
        score += 0.3;
    } else if days_old < 7 {
        score += 0.2;
    } else if days_old < 30 {
        score += 0.1;
    }

    if post.published {
        score += 0.2;
    }

    // Like counts below zero are treated as the safe default of 0
    let likes = post.likes_count.max(0) as f64;
    score += (likes * 0.01).min(0.3);

    score.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn post(age_days: i64, published: bool, likes: i64, now: DateTime<Utc>) -> PostSnapshot {
        PostSnapshot {
            id: "p".to_string(),
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            published,
            likes_count: likes,
            created_at: Some(now - Duration::days(age_days)),
        }
    }

    #[test]
    fn test_recency_tiers_are_mutually_exclusive() {
        let now = Utc::now();
        assert!((engagement_score_at(&post(0, false, 0, now), now) - 0.3).abs() < 1e-12);
        assert!((engagement_score_at(&post(1, false, 0, now), now) - 0.2).abs() < 1e-12);
        assert!((engagement_score_at(&post(6, false, 0, now), now) - 0.2).abs() < 1e-12);
        assert!((engagement_score_at(&post(7, false, 0, now), now) - 0.1).abs() < 1e-12);
        assert!((engagement_score_at(&post(29, false, 0, now), now) - 0.1).abs() < 1e-12);
        assert!(engagement_score_at(&post(30, false, 0, now), now).abs() < 1e-12);
        assert!(engagement_score_at(&post(400, false, 0, now), now).abs() < 1e-12);
    }

    #[test]
    fn test_published_bonus() {
        let now = Utc::now();
        let unpublished = engagement_score_at(&post(60, false, 0, now), now);
        let published = engagement_score_at(&post(60, true, 0, now), now);
        assert!((published - unpublished - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_likes_monotone_and_capped() {
        let now = Utc::now();
        let at = |likes| engagement_score_at(&post(60, false, likes, now), now);
        let s0 = at(0);
        let s29 = at(29);
        let s30 = at(30);
        let s1000 = at(1000);
        assert!(s0 < s29);
        assert!(s29 < s30);
        // Cap reached at 30 likes
        assert!((s30 - 0.3).abs() < 1e-12);
        assert_eq!(s30, s1000);
    }

    #[test]
    fn test_never_exceeds_one() {
        let now = Utc::now();
        // Max of every tier: 0.3 + 0.2 + 0.3 = 0.8, still below the clamp
        let best = engagement_score_at(&post(0, true, 1000, now), now);
        assert!((best - 0.8).abs() < 1e-12);
        assert!(best <= 1.0);
    }

    #[test]
    fn test_missing_created_at_counts_as_new() {
        let now = Utc::now();
        let p = PostSnapshot {
            id: "p".to_string(),
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            published: false,
            likes_count: 0,
            created_at: None,
        };
        assert!((engagement_score_at(&p, now) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_negative_likes_treated_as_zero() {
        let now = Utc::now();
        assert_eq!(
            engagement_score_at(&post(60, false, -5, now), now),
            engagement_score_at(&post(60, false, 0, now), now)
        );
    }
}
