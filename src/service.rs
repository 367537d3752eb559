/// Store-backed recommendation service
///
/// Composes the external post and interest stores with the pure ranking
/// engine. Each request works against an immutable snapshot of inputs
/// fetched once up front; nothing here mutates shared state, so concurrent
/// requests need no locking. The ranking itself is CPU-bound (text
/// processing plus per-pair vector construction), so it runs on the tokio
/// blocking pool rather than the async executor — one large candidate list
/// must not starve unrelated request handling.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use crate::config::Config;
use crate::errors::FeedrankError;
use crate::rank::{RankedPage, Ranker};
use crate::store::{CandidateFilter, InterestProfile, InterestStore, PostSnapshot, PostStore};

/// Recommendation service over injected store backends.
#[derive(Clone)]
pub struct Recommender {
    posts: Arc<dyn PostStore>,
    interests: Arc<dyn InterestStore>,
    config: Config,
}

impl Recommender {
    pub fn new(
        posts: Arc<dyn PostStore>,
        interests: Arc<dyn InterestStore>,
        config: Config,
    ) -> Self {
        Recommender {
            posts,
            interests,
            config,
        }
    }

    /// Rank a caller-supplied candidate list against a caller-supplied
    /// profile, on the blocking pool.
    ///
    /// This is the raw engine operation for callers that already hold their
    /// inputs; no store access happens here.
    pub async fn recommend(
        &self,
        profile: InterestProfile,
        candidates: Vec<PostSnapshot>,
        limit: i64,
        offset: i64,
    ) -> Result<RankedPage, FeedrankError> {
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || {
            let ranker = Ranker::new(&config);
            ranker.rank(&profile, &candidates, limit, offset, Utc::now())
        })
        .await
        .map_err(|e| FeedrankError::Internal(format!("Ranking task failed: {}", e)))?
    }

    /// Rank the candidate set for one user and return a page of results.
    ///
    /// Fetches the user's interest profile (a user who never set interests
    /// gets the empty profile and engagement-only ordering) and the filtered
    /// candidate list, then ranks on the blocking pool. Pagination arguments
    /// are validated before any store call — a caller bug should not cost a
    /// candidate fetch.
    pub async fn recommend_for_user(
        &self,
        user_id: &str,
        filter: &CandidateFilter,
        limit: i64,
        offset: i64,
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

        let profile = self
            .interests
            .interest_profile(user_id)
            .await?
            .unwrap_or_else(InterestProfile::empty);
        let candidates = self.posts.candidate_posts(filter).await?;

        tracing::debug!(
            user_id = %user_id,
            candidates = candidates.len(),
            profile_terms = profile.interests.len(),
            "Fetched recommendation inputs"
        );

        let config = self.config.clone();
        let started = Instant::now();
        let page = tokio::task::spawn_blocking(move || {
            let ranker = Ranker::new(&config);
            ranker.rank(&profile, &candidates, limit, offset, Utc::now())
        })
        .await
        .map_err(|e| FeedrankError::Internal(format!("Ranking task failed: {}", e)))??;

        tracing::debug!(
            user_id = %user_id,
            total = page.total,
            returned = page.items.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Recommendation request served"
        );

        Ok(page)
    }
}
