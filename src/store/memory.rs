/// In-memory store backend
///
/// Reference implementation of both store traits over a shared RwLock map.
/// Used for embedding the engine in tests and small deployments; production
/// callers supply their own backends over their persistence layer.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::FeedrankError;
use super::{CandidateFilter, InterestProfile, InterestStore, PostSnapshot, PostStore};

#[derive(Default)]
struct Inner {
    posts: Vec<PostSnapshot>,
    profiles: HashMap<String, InterestProfile>,
}

/// In-memory post + interest store.
///
/// Cloning is cheap — clones share the same underlying data.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// Insert or replace a post snapshot (matched by id).
    pub async fn upsert_post(&self, post: PostSnapshot) {
        let mut inner = self.inner.write().await;
        if let Some(existing) = inner.posts.iter_mut().find(|p| p.id == post.id) {
            *existing = post;
        } else {
            inner.posts.push(post);
        }
    }

    /// Set a user's interest profile, replacing any existing one.
    pub async fn set_interests(&self, user_id: &str, profile: InterestProfile) {
        let mut inner = self.inner.write().await;
        inner.profiles.insert(user_id.to_string(), profile);
    }
}

fn matches(post: &PostSnapshot, filter: &CandidateFilter) -> bool {
    if filter.published_only && !post.published {
        return false;
    }
    if let Some(wanted) = &filter.tags {
        let wanted: Vec<String> = wanted
            .iter()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        if !wanted.is_empty() {
            let hit = post
                .tags
                .iter()
                .any(|t| wanted.iter().any(|w| t.to_lowercase() == *w));
            if !hit {
                return false;
            }
        }
    }
    true
}

#[async_trait]
impl PostStore for InMemoryStore {
    async fn candidate_posts(
        &self,
        filter: &CandidateFilter,
    ) -> Result<Vec<PostSnapshot>, FeedrankError> {
        let inner = self.inner.read().await;
        Ok(inner
            .posts
            .iter()
            .filter(|p| matches(p, filter))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl InterestStore for InMemoryStore {
    async fn interest_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<InterestProfile>, FeedrankError> {
        let inner = self.inner.read().await;
        Ok(inner.profiles.get(user_id).cloned())
    }
}
