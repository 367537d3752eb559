/// Recommendation ranking: score fusion, ordering, pagination
///
/// Orchestrates the extractor, normalizer, similarity engine, and engagement
/// scorer over a caller-supplied candidate list, then fuses the two
/// sub-scores and sorts. All scoring is pure over (profile, snapshot, now);
/// identical inputs always reproduce identical output.

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::engagement::engagement_score_at;
use crate::errors::FeedrankError;
use crate::extract::extract_text;
use crate::similarity::{weighted_document, PairVectorizer};
use crate::store::{InterestProfile, PostSnapshot};
use crate::text::TextNormalizer;

/// Per-dimension sub-scores (populated only when scoring.debug_scoring).
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    pub similarity: f64,
    pub engagement: f64,
}

/// One ranked output entry.
#[derive(Debug, Clone)]
pub struct RankedRecommendation {
    pub post_id: String,
    /// Fused similarity + engagement score used for ordering
    pub score: f64,
    /// 1-based absolute position in the full ordering (offset included)
    pub rank: usize,
    /// Sub-score breakdown — only populated when scoring.debug_scoring is true
    pub breakdown: Option<ScoreBreakdown>,
}

/// One page of ranked results plus the pre-pagination candidate total.
#[derive(Debug, Clone)]
pub struct RankedPage {
    pub items: Vec<RankedRecommendation>,
    pub total: usize,
}

/// Ranker over a fixed configuration.
///
/// Fusion policy: with a non-empty profile,
/// `score = similarity_weight × sim + engagement_weight × eng`
/// (defaults 0.8 / 0.2); with an empty profile the score is the raw
/// engagement value — the similarity side is identically 0.0 and ordering
/// degenerates to engagement only, which is expected, not an error. Both
/// weights are non-negative, so the fused score is monotonic in each
/// sub-score.
pub struct Ranker<'a> {
    config: &'a Config,
    normalizer: TextNormalizer,
}

impl<'a> Ranker<'a> {
    pub fn new(config: &'a Config) -> Self {
        Ranker {
            config,
            normalizer: TextNormalizer::new(&config.normalizer),
        }
    }

    /// Score, sort, and paginate the candidate set for one profile.
    ///
    /// `limit` and `offset` below zero indicate a caller bug and surface as
    /// `InvalidArgument` — never silently clamped. Ordering is total:
    /// fused score descending, then newer created_at (absent = `now`),
    /// then post id ascending, so pagination is reproducible.
    pub fn rank(
        &self,
        profile: &InterestProfile,
        candidates: &[PostSnapshot],
        limit: i64,
        offset: i64,
        now: DateTime<Utc>,
    ) -> Result<RankedPage, FeedrankError> {
        if limit < 0 {
            return Err(FeedrankError::invalid_argument(
                "limit",
                "limit must not be negative",
            ));
        }
        if offset < 0 {
            return Err(FeedrankError::invalid_argument(
                "offset",
                "offset must not be negative",
            ));
        }

        let profile_clean = self.normalizer.normalize(&profile.as_document());
        let vectorizer = PairVectorizer::new(&self.config.vectorizer);

        struct Scored<'p> {
            post: &'p PostSnapshot,
            similarity: f64,
            engagement: f64,
            score: f64,
        }

        let mut scored: Vec<Scored> = candidates
            .iter()
            .map(|post| {
                let engagement = engagement_score_at(post, now);
                let (similarity, score) = if profile.is_empty() {
                    // Engagement-only ordering; similarity side is 0.0
                    (0.0, engagement)
                } else {
                    let body = extract_text(&post.content);
                    let doc = weighted_document(&post.title, &body, &post.tags);
                    let doc_clean = self.normalizer.normalize(&doc);
                    let similarity = vectorizer.similarity(&profile_clean, &doc_clean);
                    let score = self.config.scoring.similarity_weight * similarity
                        + self.config.scoring.engagement_weight * engagement;
                    (similarity, score)
                };
                Scored {
                    post,
                    similarity,
                    engagement,
                    score,
                }
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    let a_created = a.post.created_at.unwrap_or(now);
                    let b_created = b.post.created_at.unwrap_or(now);
                    b_created.cmp(&a_created)
                })
                .then_with(|| a.post.id.cmp(&b.post.id))
        });

        let total = scored.len();
        tracing::debug!(
            candidates = total,
            profile_terms = profile.interests.len(),
            "Ranked candidate set"
        );

        let debug = self.config.scoring.debug_scoring;
        let items = scored
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .enumerate()
            .map(|(i, s)| RankedRecommendation {
                post_id: s.post.id.clone(),
                score: s.score,
                rank: offset as usize + i + 1,
                breakdown: if debug {
                    Some(ScoreBreakdown {
                        similarity: s.similarity,
                        engagement: s.engagement,
                    })
                } else {
                    None
                },
            })
            .collect();

        Ok(RankedPage { items, total })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn snapshot(
        id: &str,
        title: &str,
        content: &str,
        tags: &[&str],
        published: bool,
        likes: i64,
        age_hours: i64,
        now: DateTime<Utc>,
    ) -> PostSnapshot {
        PostSnapshot {
            id: id.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published,
            likes_count: likes,
            created_at: Some(now - Duration::hours(age_hours)),
        }
    }

    fn profile(terms: &[&str]) -> InterestProfile {
        InterestProfile::new(terms.iter().map(|t| t.to_string()).collect())
    }

    #[test]
    fn test_scenario_recent_relevant_post_beats_popular_stale_one() {
        let now = Utc::now();
        let config = Config::default();
        let ranker = Ranker::new(&config);

        let post_a = snapshot("a", "Cooking tips", "", &["cooking"], true, 5, 2, now);
        let post_b = snapshot("b", "Sports news", "", &["sports"], true, 100, 40 * 24, now);

        let page = ranker
            .rank(&profile(&["cooking", "travel"]), &[post_b, post_a], 10, 0, now)
            .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].post_id, "a");
        assert_eq!(page.items[1].post_id, "b");
        assert_eq!(page.items[0].rank, 1);
        assert_eq!(page.items[1].rank, 2);
        assert!(page.items[0].score > page.items[1].score);
    }

    #[test]
    fn test_empty_profile_degenerates_to_engagement_ordering() {
        let now = Utc::now();
        let config = Config {
            scoring: crate::config::ScoringConfig {
                debug_scoring: true,
                ..crate::config::ScoringConfig::default()
            },
            ..Config::default()
        };
        let ranker = Ranker::new(&config);

        let fresh = snapshot("fresh", "New", "", &[], true, 0, 1, now);
        let stale = snapshot("stale", "Old", "", &[], true, 0, 45 * 24, now);

        let page = ranker
            .rank(&InterestProfile::empty(), &[stale.clone(), fresh.clone()], 10, 0, now)
            .unwrap();

        assert_eq!(page.items[0].post_id, "fresh");
        for item in &page.items {
            let breakdown = item.breakdown.as_ref().unwrap();
            assert_eq!(breakdown.similarity, 0.0);
            // Empty profile: fused score is the raw engagement score
            assert_eq!(item.score, breakdown.engagement);
        }
    }

    #[test]
    fn test_fusion_is_monotonic_in_each_sub_score() {
        let w = crate::config::ScoringConfig::default();
        let fuse = |sim: f64, eng: f64| w.similarity_weight * sim + w.engagement_weight * eng;
        assert!(fuse(0.6, 0.2) >= fuse(0.5, 0.2));
        assert!(fuse(0.5, 0.3) >= fuse(0.5, 0.2));
        assert!(fuse(0.0, 0.0) <= fuse(0.0, 1.0));
    }

    #[test]
    fn test_ties_broken_by_newer_then_id() {
        let now = Utc::now();
        let config = Config::default();
        let ranker = Ranker::new(&config);

        // Identical scores across the board: same metadata, no profile terms
        let older = snapshot("x", "", "", &[], true, 0, 48, now);
        let newer = snapshot("y", "", "", &[], true, 0, 30, now);
        let newer_twin = snapshot("a", "", "", &[], true, 0, 30, now);

        let page = ranker
            .rank(
                &InterestProfile::empty(),
                &[older.clone(), newer.clone(), newer_twin.clone()],
                10,
                0,
                now,
            )
            .unwrap();

        // Newer first; equal timestamps fall back to id ascending
        assert_eq!(page.items[0].post_id, "a");
        assert_eq!(page.items[1].post_id, "y");
        assert_eq!(page.items[2].post_id, "x");
    }

    #[test]
    fn test_pagination_window_and_total() {
        let now = Utc::now();
        let config = Config::default();
        let ranker = Ranker::new(&config);

        let candidates: Vec<PostSnapshot> = (0..5)
            .map(|i| snapshot(&format!("p{}", i), "", "", &[], true, 0, i * 24, now))
            .collect();

        let page = ranker
            .rank(&InterestProfile::empty(), &candidates, 2, 1, now)
            .unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].rank, 2);
        assert_eq!(page.items[1].rank, 3);

        // Offset past the end yields an empty page, not an error
        let past_end = ranker
            .rank(&InterestProfile::empty(), &candidates, 10, 99, now)
            .unwrap();
        assert_eq!(past_end.total, 5);
        assert!(past_end.items.is_empty());
    }

    #[test]
    fn test_negative_pagination_is_invalid_argument() {
        let now = Utc::now();
        let config = Config::default();
        let ranker = Ranker::new(&config);

        let err = ranker
            .rank(&InterestProfile::empty(), &[], -1, 0, now)
            .unwrap_err();
        assert!(matches!(err, FeedrankError::InvalidArgument { .. }));

        let err = ranker
            .rank(&InterestProfile::empty(), &[], 10, -3, now)
            .unwrap_err();
        assert!(matches!(err, FeedrankError::InvalidArgument { .. }));
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let now = Utc::now();
        let config = Config::default();
        let ranker = Ranker::new(&config);

        let candidates = vec![
            snapshot("a", "Cooking tips", "", &["cooking"], true, 5, 2, now),
            snapshot("b", "Sports news", "", &["sports"], true, 100, 40 * 24, now),
        ];
        let profile = profile(&["cooking", "travel"]);

        let first = ranker.rank(&profile, &candidates, 10, 0, now).unwrap();
        let second = ranker.rank(&profile, &candidates, 10, 0, now).unwrap();
        let firsts: Vec<_> = first.items.iter().map(|i| (&i.post_id, i.score)).collect();
        let seconds: Vec<_> = second.items.iter().map(|i| (&i.post_id, i.score)).collect();
        assert_eq!(firsts, seconds);
    }
}
