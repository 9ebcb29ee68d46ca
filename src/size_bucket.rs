//! @ai:module:intent Recognize object-size-bucketed column and label names
//! @ai:module:layer domain
//! @ai:module:public_api SizeBucketMatcher, SIZE_BUCKET_PATTERN
//! @ai:module:stateless true

use regex::{Regex, RegexBuilder};

/// Any name containing one of these words, in any case, belongs to a size bucket.
pub const SIZE_BUCKET_PATTERN: &str = "small|medium|large";

/// @ai:intent Case-insensitive substring matcher for size-bucket names
#[derive(Debug, Clone)]
pub struct SizeBucketMatcher {
    pattern: Regex,
}

impl SizeBucketMatcher {
    /// @ai:intent Create a matcher for the small/medium/large buckets
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            pattern: RegexBuilder::new(SIZE_BUCKET_PATTERN)
                .case_insensitive(true)
                .build()
                .expect("Invalid regex"),
        }
    }

    /// @ai:intent Check whether a column or label name is size-bucketed
    /// @ai:effects pure
    pub fn is_size_bucketed(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }
}

impl Default for SizeBucketMatcher {
    fn default() -> Self {
        Self::new()
    }
}
