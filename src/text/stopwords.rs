/// Fixed stop-word list for text normalization
///
/// Static configuration data: articles, conjunctions, common prepositions
/// and pronouns, plus a handful of high-frequency filler words carried over
/// from the deployed tuning. Never mutated at runtime; per-deployment
/// additions go through `NormalizerConfig.extra_stop_words`.

pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am",
    "an", "and", "any", "are", "as", "at", "be", "because", "been", "before",
    "being", "below", "between", "both", "but", "by", "call", "can", "cannot",
    "come", "could", "day", "did", "do", "does", "doing", "down", "during",
    "each", "few", "find", "first", "for", "from", "further", "get", "go",
    "had", "has", "have", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "like", "made", "make", "many", "may", "me", "mine",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off",
    "oil", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "part", "said", "same", "shall", "she", "should",
    "sit", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "time", "to", "too", "two", "under", "until", "up", "upon",
    "very", "was", "way", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "whose", "why", "will", "with", "would", "you",
    "your", "yours", "yourself", "yourselves",
];
