//! feedrank — content-based post recommendation engine
//!
//! Given a user's accumulated interest profile and a corpus of candidate
//! posts, produces a ranked list of the posts the user is most likely to
//! find relevant by fusing two signals:
//!
//! - **lexical similarity**: TF-IDF cosine similarity computed over an
//!   ad-hoc two-document corpus per candidate (profile vs. weighted post
//!   document), see [`similarity`];
//! - **engagement**: a bounded recency/popularity score from post metadata
//!   alone, see [`engagement`].
//!
//! The engine is an in-process library: it owns no persistence, no
//! transport, and no authentication. Callers either use the pure
//! [`rank::Ranker`] directly with a candidate list they already hold, or
//! the [`service::Recommender`] which pulls inputs from [`store`] trait
//! backends and isolates the CPU-bound ranking on the tokio blocking pool.

pub mod config;
pub mod engagement;
pub mod errors;
pub mod extract;
pub mod logging;
pub mod rank;
pub mod service;
pub mod similarity;
pub mod store;
pub mod text;

pub use config::Config;
pub use errors::FeedrankError;
pub use rank::{RankedPage, RankedRecommendation, Ranker};
pub use service::Recommender;
pub use store::{CandidateFilter, InterestProfile, PostSnapshot};
