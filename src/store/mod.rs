/// Post and interest store abstraction layer
///
/// The recommendation engine does not own persistence. These traits describe
/// the two external collaborators it reads from: a post store supplying
/// immutable `PostSnapshot` views of candidate posts, and an interest store
/// supplying the per-user `InterestProfile`. Both are read-only from the
/// engine's perspective — profile set/update and post CRUD live elsewhere.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::FeedrankError;

pub mod memory;

/// Immutable, read-only view of a post at recommendation time.
///
/// Fetched fresh per request and possibly stale relative to the persistent
/// store — acceptable, since recommendations are best-effort. Fields the
/// engagement scorer needs carry safe defaults: likes 0, published false,
/// created_at treated as "now" when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSnapshot {
    /// Unique post identifier (opaque to the engine)
    pub id: String,
    /// Post title
    #[serde(default)]
    pub title: String,
    /// Raw post body: structured block JSON, or plain text
    #[serde(default)]
    pub content: String,
    /// Tag names attached to the post
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the post is published
    #[serde(default)]
    pub published: bool,
    /// Number of likes
    #[serde(default)]
    pub likes_count: i64,
    /// When the post was created (None = unknown, scored as brand new)
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// A user's accumulated set of free-text interest terms.
///
/// Insertion order is irrelevant for scoring. Mutated only by the external
/// interest store; the engine treats it as read-only input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestProfile {
    pub interests: Vec<String>,
}

impl InterestProfile {
    pub fn new(interests: Vec<String>) -> Self {
        InterestProfile { interests }
    }

    /// A profile with no terms. Similarity degenerates to 0.0 for every
    /// candidate and ranking falls back to engagement-only ordering.
    pub fn empty() -> Self {
        InterestProfile::default()
    }

    pub fn is_empty(&self) -> bool {
        self.interests.is_empty()
    }

    /// All interest terms joined into a single query-side document.
    pub fn as_document(&self) -> String {
        self.interests.join(" ")
    }
}

/// Filter criteria a post store applies when assembling the candidate set.
///
/// Filtering is a store concern — the ranker scores whatever candidates it
/// is given and performs no filtering of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateFilter {
    /// Only include published posts (default: true)
    #[serde(default = "default_published_only")]
    pub published_only: bool,
    /// Only include posts carrying at least one of these tags
    /// (case-insensitive). None = no tag filtering.
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

fn default_published_only() -> bool {
    true
}

impl Default for CandidateFilter {
    fn default() -> Self {
        CandidateFilter {
            published_only: true,
            tags: None,
        }
    }
}

/// Supplies candidate post snapshots for ranking.
///
/// Implementations must be Send + Sync to support concurrent requests.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Fetch the candidate set matching the filter.
    async fn candidate_posts(
        &self,
        filter: &CandidateFilter,
    ) -> Result<Vec<PostSnapshot>, FeedrankError>;
}

/// Supplies the current interest profile for a user.
#[async_trait]
pub trait InterestStore: Send + Sync {
    /// Fetch a user's interest profile. Returns None when the user has never
    /// set interests — callers treat that as an empty profile.
    async fn interest_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<InterestProfile>, FeedrankError>;
}
