/// Score added once per mood when any of its keywords appears in the input.
pub const KEYWORD_WEIGHT: f64 = 0.6;

/// Score added by a strong sentiment signal (|compound| >= 0.5).
pub const STRONG_SENTIMENT_WEIGHT: f64 = 0.5;

/// Score added by a mild or neutral sentiment signal.
pub const MILD_SENTIMENT_WEIGHT: f64 = 0.2;

/// Compound at or above which sentiment reads as clearly positive.
pub const STRONG_POSITIVE: f64 = 0.5;

/// Compound at or above which sentiment reads as slightly positive.
pub const MILD_POSITIVE: f64 = 0.05;

/// Compound at or below which sentiment reads as clearly negative.
pub const STRONG_NEGATIVE: f64 = -0.5;

/// Compound at or below which sentiment reads as slightly negative.
pub const MILD_NEGATIVE: f64 = -0.05;

/// Adjustment applied to a mood that was recorded inside the recency window.
pub const RECENCY_PENALTY: f64 = -0.2;

/// Recency window in seconds (60 minutes).
pub const RECENCY_WINDOW_SECS: u64 = 60 * 60;

/// Maximum number of mood records kept in memory (oldest evicted first).
pub const MEMORY_CAPACITY: usize = 10;

/// Suggestions returned per reply unless configured otherwise.
pub const DEFAULT_SUGGESTIONS: usize = 3;

