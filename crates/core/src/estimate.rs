//! Word counting and minute estimation.
//!
//! Words are the pieces of the text split on a single space. Runs of spaces
//! produce empty pieces that still count, which matches how stored estimates
//! were computed.

use crate::config::{ReadingConfig, RoundingPolicy};

/// Counts space-delimited words. Empty text has no words.
pub fn count_words(text: &str) -> usize {
    if text.is_empty() { 0 } else { text.split(' ').count() }
}

/// Converts a word count into whole minutes under `config`.
pub fn estimate_minutes(word_count: usize, config: &ReadingConfig) -> u64 {
    let rate = word_count as f64 / config.words_per_minute;
    let whole = rate.trunc();
    let fraction = rate.fract();

    let round_up = match config.rounding {
        RoundingPolicy::Legacy => fraction * config.fraction_scale >= config.round_up_threshold,
        RoundingPolicy::Seconds => fraction * 60.0 >= 30.0,
        RoundingPolicy::Ceil => fraction > 0.0,
    };

    // `as` saturates for rates beyond u64, so the round-up must too.
    let minutes = (whole as u64).saturating_add(u64::from(round_up));
    tracing::debug!(word_count, rate, minutes, rounding = %config.rounding, "estimated reading time");
    minutes
}

/// Estimates the reading time of already extracted text at 200 words per minute.
pub fn estimate(text: &str) -> u64 {
    estimate_with_config(text, &ReadingConfig::default())
}

/// Estimates the reading time of already extracted text.
pub fn estimate_with_config(text: &str, config: &ReadingConfig) -> u64 {
    estimate_minutes(count_words(text), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn words(n: usize) -> String {
        vec!["a"; n].join(" ")
    }

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("one"), 1);
        assert_eq!(count_words("one two three"), 3);
        assert_eq!(count_words("onetwo"), 1);
    }

    #[test]
    fn test_count_words_keeps_empty_pieces() {
        assert_eq!(count_words("one  two"), 3);
        assert_eq!(count_words(" "), 2);
    }

    #[test]
    fn test_count_words_only_splits_on_space() {
        assert_eq!(count_words("one\ttwo\nthree"), 1);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(3, 0)]
    #[case(99, 0)]
    #[case(100, 1)]
    #[case(101, 1)]
    #[case(200, 1)]
    #[case(250, 1)]
    #[case(299, 1)]
    #[case(300, 2)]
    #[case(350, 2)]
    #[case(1000, 5)]
    fn test_legacy_rounding(#[case] word_count: usize, #[case] minutes: u64) {
        assert_eq!(estimate_minutes(word_count, &ReadingConfig::default()), minutes);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(99, 0)]
    #[case(100, 1)]
    #[case(250, 1)]
    #[case(300, 2)]
    fn test_seconds_rounding(#[case] word_count: usize, #[case] minutes: u64) {
        let config = ReadingConfig::builder().rounding(RoundingPolicy::Seconds).build();
        assert_eq!(estimate_minutes(word_count, &config), minutes);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(200, 1)]
    #[case(201, 2)]
    #[case(400, 2)]
    fn test_ceil_rounding(#[case] word_count: usize, #[case] minutes: u64) {
        let config = ReadingConfig::builder().rounding(RoundingPolicy::Ceil).build();
        assert_eq!(estimate_minutes(word_count, &config), minutes);
    }

    #[test]
    fn test_alternate_rate() {
        let config = ReadingConfig::builder().words_per_minute(100.0).build();
        assert_eq!(estimate_minutes(200, &config), 2);
        assert_eq!(estimate_minutes(49, &config), 0);
        assert_eq!(estimate_minutes(50, &config), 1);
    }

    #[test]
    fn test_custom_threshold() {
        let config = ReadingConfig::builder().round_up_threshold(0.0).build();
        assert_eq!(estimate_minutes(1, &config), 1);
        assert_eq!(estimate_minutes(200, &config), 2);
    }

    #[test]
    fn test_tiny_rate_saturates() {
        let config = ReadingConfig::builder().words_per_minute(1e-300).round_up_threshold(0.0).build();
        assert!(config.validate().is_ok());
        assert_eq!(estimate_minutes(1, &config), u64::MAX);
        assert_eq!(estimate_minutes(0, &config), 1);
    }

    #[test]
    fn test_seconds_matches_legacy_with_defaults() {
        let legacy = ReadingConfig::default();
        let seconds = ReadingConfig::builder().rounding(RoundingPolicy::Seconds).build();

        for word_count in [100, 299, 300] {
            assert_eq!(estimate_minutes(word_count, &legacy), estimate_minutes(word_count, &seconds));
        }
    }

    #[test]
    fn test_seconds_ignores_legacy_constants() {
        let scaled = ReadingConfig::builder().fraction_scale(1.0).build();
        let seconds = ReadingConfig::builder().fraction_scale(1.0).rounding(RoundingPolicy::Seconds).build();
        assert_eq!(estimate_minutes(80, &scaled), 1);
        assert_eq!(estimate_minutes(80, &seconds), 0);

        let raised = ReadingConfig::builder().round_up_threshold(0.45).build();
        let seconds = ReadingConfig::builder().round_up_threshold(0.45).rounding(RoundingPolicy::Seconds).build();
        assert_eq!(estimate_minutes(140, &raised), 0);
        assert_eq!(estimate_minutes(140, &seconds), 1);
    }

    #[test]
    fn test_estimate_three_words() {
        assert_eq!(estimate("one two three"), 0);
    }

    #[test]
    fn test_estimate_two_hundred_words() {
        let text = words(200);
        assert_eq!(count_words(&text), 200);
        assert_eq!(estimate(&text), 1);
    }

    #[test]
    fn test_estimate_empty() {
        assert_eq!(estimate(""), 0);
    }

    #[test]
    fn test_estimate_with_config() {
        let config = ReadingConfig::builder().words_per_minute(2.0).build();
        assert_eq!(estimate_with_config("one two three four", &config), 2);
    }
}
