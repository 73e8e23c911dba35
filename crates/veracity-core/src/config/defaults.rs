//! Default values shared by the config structs.

/// Rolling window for the temporal contradiction check (days).
pub const DEFAULT_TEMPORAL_WINDOW_DAYS: i64 = 30;

/// Contradiction ratio above which a narrative shift is reported.
pub const DEFAULT_SHIFT_THRESHOLD: f64 = 0.15;

/// Minimum claims in the window before a shift can be reported.
pub const DEFAULT_MIN_SAMPLE_SIZE: usize = 5;

/// Token-overlap ratio required to confirm a quote against a document.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Image confidence before penalties.
pub const DEFAULT_IMAGE_BASE_CONFIDENCE: f64 = 0.9;

/// Penalty when the image carries no capture timestamp.
pub const DEFAULT_MISSING_METADATA_PENALTY: f64 = 0.2;

/// Penalty when the image comes from a stock-photo host.
pub const DEFAULT_STOCK_PHOTO_PENALTY: f64 = 0.4;

/// Confidence ceiling for an image captured after the article was published.
pub const DEFAULT_FUTURE_DATED_CAP: f64 = 0.2;

/// Fusion weights over the four checks.
pub const DEFAULT_TEMPORAL_WEIGHT: f64 = 0.25;
pub const DEFAULT_CITATION_WEIGHT: f64 = 0.25;
pub const DEFAULT_IMAGE_WEIGHT: f64 = 0.20;
pub const DEFAULT_NETWORK_WEIGHT: f64 = 0.30;

/// Temporal sub-score when a narrative shift is detected.
pub const DEFAULT_SHIFT_PENALTY_SCORE: f64 = 0.3;

/// Network sub-score ceiling when circular reporting is detected.
pub const DEFAULT_CIRCULAR_TRUST_CAP: f64 = 0.3;

/// Verdict thresholds.
pub const DEFAULT_VERIFIED_THRESHOLD: f64 = 0.75;
pub const DEFAULT_REVIEW_THRESHOLD: f64 = 0.5;

/// Overall request deadline (seconds).
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
