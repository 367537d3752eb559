/// TF-IDF vector similarity over two-document corpora
///
/// Each comparison builds its own vector space whose corpus is exactly two
/// documents: the cleaned user profile and one cleaned, weighted candidate
/// document. There is no shared vocabulary across candidates — document
/// frequency filtering behaves very differently at corpus size 2 than at
/// corpus size N, and that difference is part of the contract.
///
/// With the deployed `max_df = 0.8`, a term present in both documents has a
/// document frequency of 1.0 and is excluded from the vocabulary, so only
/// terms unique to one side survive. Surviving vectors therefore have
/// disjoint support and the raw cosine is 0.0 for every pair, identical
/// documents included. This is the literal deployed behavior; do not
/// "correct" it here — raising `max_df` to 1.0 in config is the knob that
/// lets shared vocabulary count, and changing the default is a product
/// decision, not a bug fix.

use std::collections::HashMap;

use crate::config::VectorizerConfig;

/// Number of documents in every comparison corpus.
const PAIR_DOCS: usize = 2;

/// Assemble the weighted candidate document from post fields, before
/// normalization: title twice, body once, each tag twice. The duplication
/// inflates within-document term frequency of title/tag vocabulary relative
/// to body vocabulary.
pub fn weighted_document(title: &str, body: &str, tags: &[String]) -> String {
    let tags_joined = tags.join(" ");
    format!("{} {} {} {} {}", title, title, body, tags_joined, tags_joined)
}

/// Vectorizer for one-profile-vs-one-candidate comparisons.
///
/// Holds only configuration; every call to [`similarity`](Self::similarity)
/// rebuilds the vocabulary from the two documents it is given. Pure and
/// deterministic: the same pair of documents always yields the same score.
pub struct PairVectorizer<'a> {
    config: &'a VectorizerConfig,
}

impl<'a> PairVectorizer<'a> {
    pub fn new(config: &'a VectorizerConfig) -> Self {
        PairVectorizer { config }
    }

    /// Cosine similarity between the profile document and the candidate
    /// document, both already normalized.
    ///
    /// Returns a value in [0, 1]. Degenerate inputs — either document empty,
    /// or no vocabulary surviving the document-frequency filters — score
    /// exactly 0.0, never a division fault.
    pub fn similarity(&self, profile_doc: &str, candidate_doc: &str) -> f64 {
        let profile_tokens: Vec<&str> = profile_doc.split_whitespace().collect();
        let candidate_tokens: Vec<&str> = candidate_doc.split_whitespace().collect();
        if profile_tokens.is_empty() || candidate_tokens.is_empty() {
            return 0.0;
        }

        let profile_counts = self.ngram_counts(&profile_tokens);
        let candidate_counts = self.ngram_counts(&candidate_tokens);

        let vocabulary = self.fit_vocabulary(&profile_counts, &candidate_counts);
        if vocabulary.is_empty() {
            return 0.0;
        }

        let mut dot = 0.0_f64;
        let mut profile_norm_sq = 0.0_f64;
        let mut candidate_norm_sq = 0.0_f64;
        for (term, df) in &vocabulary {
            // Smoothed idf, constant across terms at a given df
            let idf = ((1.0 + PAIR_DOCS as f64) / (1.0 + *df as f64)).ln() + 1.0;
            let pw = profile_counts.get(term).copied().unwrap_or(0) as f64 * idf;
            let cw = candidate_counts.get(term).copied().unwrap_or(0) as f64 * idf;
            dot += pw * cw;
            profile_norm_sq += pw * pw;
            candidate_norm_sq += cw * cw;
        }

        if profile_norm_sq <= 0.0 || candidate_norm_sq <= 0.0 {
            return 0.0;
        }
        dot / (profile_norm_sq.sqrt() * candidate_norm_sq.sqrt())
    }

    /// Count n-gram occurrences (space-joined) for one document's tokens.
    fn ngram_counts(&self, tokens: &[&str]) -> HashMap<String, usize> {
        let min_n = self.config.ngram_min.max(1);
        let max_n = self.config.ngram_max.max(min_n);

        let mut counts: HashMap<String, usize> = HashMap::new();
        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                *counts.entry(window.join(" ")).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Build the vocabulary over the two documents: apply both
    /// document-frequency filters, then cap at max_features ranked by
    /// aggregate count (ties broken by term, for determinism).
    fn fit_vocabulary(
        &self,
        profile_counts: &HashMap<String, usize>,
        candidate_counts: &HashMap<String, usize>,
    ) -> Vec<(String, usize)> {
        let max_df_count = self.config.max_df * PAIR_DOCS as f64;

        let mut terms: Vec<(String, usize, usize)> = Vec::new();
        for (term, &count) in profile_counts {
            let in_candidate = candidate_counts.get(term).copied().unwrap_or(0);
            let df = 1 + usize::from(in_candidate > 0);
            terms.push((term.clone(), count + in_candidate, df));
        }
        for (term, &count) in candidate_counts {
            if !profile_counts.contains_key(term) {
                terms.push((term.clone(), count, 1));
            }
        }

        // No rounding on the max_df comparison: at 2 documents and
        // max_df=0.8 the ceiling is 1.6, so df=2 is excluded.
        terms.retain(|(_, _, df)| *df >= self.config.min_df && (*df as f64) <= max_df_count);

        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        terms.truncate(self.config.max_features);

        terms.into_iter().map(|(term, _, df)| (term, df)).collect()
    }
}
