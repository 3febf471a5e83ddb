//! Reading-time entry points.
//!
//! [`time_to_read`] fetches a page through a [`Fetcher`], extracts its
//! visible text and returns whole minutes. [`ReadingTime`] carries the same
//! estimate along with the counts behind it.
//!
//! # Example
//!
//! ```rust
//! use readtime_core::{ReadingConfig, ReadingTime};
//!
//! let html = "<article><p>one two three</p></article>";
//! let report = ReadingTime::from_html(html, &ReadingConfig::default(), None);
//! assert_eq!(report.word_count, 3);
//! assert_eq!(report.minutes, 0);
//! ```

use serde::Serialize;

use crate::Result;
use crate::config::ReadingConfig;
use crate::estimate::{count_words, estimate_minutes};
use crate::extract::extract;
use crate::fetch::Fetcher;

/// Reading-time estimate for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReadingTime {
    /// Estimated reading time in whole minutes.
    pub minutes: u64,

    /// Space-delimited words in the extracted text.
    pub word_count: usize,

    /// Length of the extracted text in characters.
    pub text_length: usize,

    /// Whether the text came from an `<article>` region.
    pub from_article: bool,

    /// Number of text segments kept by the scanner.
    pub segments: usize,

    /// Source URL if known.
    pub source_url: Option<String>,
}

impl ReadingTime {
    /// Extracts and estimates `html`.
    pub fn from_html(html: &str, config: &ReadingConfig, source_url: Option<String>) -> Self {
        let extraction = extract(html);
        let word_count = count_words(&extraction.text);
        let minutes = estimate_minutes(word_count, config);

        Self {
            minutes,
            word_count,
            text_length: extraction.text.chars().count(),
            from_article: extraction.window.article,
            segments: extraction.segments,
            source_url,
        }
    }

    /// Zero-minute report for a page whose markup could not be retrieved.
    pub fn unavailable(source_url: Option<String>) -> Self {
        Self { minutes: 0, word_count: 0, text_length: 0, from_article: false, segments: 0, source_url }
    }
}

/// Estimates `html` with the default configuration.
pub fn reading_time(html: &str) -> ReadingTime {
    ReadingTime::from_html(html, &ReadingConfig::default(), None)
}

/// Fetches `url` and builds the full report.
///
/// Fetch errors are returned untouched and nothing is extracted.
pub async fn fetch_reading_time<F: Fetcher>(url: &str, fetcher: &F, config: &ReadingConfig) -> Result<ReadingTime> {
    let html = fetcher.fetch(url).await?;
    Ok(ReadingTime::from_html(&html, config, Some(url.to_string())))
}

/// Estimated reading time of the page at `url`, at 200 words per minute.
pub async fn time_to_read<F: Fetcher>(url: &str, fetcher: &F) -> Result<u64> {
    time_to_read_with_config(url, fetcher, &ReadingConfig::default()).await
}

/// Estimated reading time of the page at `url`.
pub async fn time_to_read_with_config<F: Fetcher>(url: &str, fetcher: &F, config: &ReadingConfig) -> Result<u64> {
    fetch_reading_time(url, fetcher, config).await.map(|report| report.minutes)
}

/// Like [`time_to_read_with_config`], but logs failures and returns 0.
pub async fn time_to_read_or_default<F: Fetcher>(url: &str, fetcher: &F, config: &ReadingConfig) -> u64 {
    match time_to_read_with_config(url, fetcher, config).await {
        Ok(minutes) => minutes,
        Err(e) => {
            tracing::warn!(url, error = %e, "could not estimate reading time, using 0");
            0
        }
    }
}
