pub mod config;
pub mod error;
pub mod estimate;
pub mod extract;
pub mod fetch;
pub mod reading;

pub use config::{CONFIG_DIR_ENV, ReadingConfig, ReadingConfigBuilder, RoundingPolicy};
pub use error::{ReadTimeError, Result};
pub use estimate::{count_words, estimate, estimate_minutes, estimate_with_config};
pub use extract::{Extraction, ExtractionWindow, extract, extract_text};
pub use fetch::{FetchConfig, Fetcher, fetch_file, fetch_stdin};
#[cfg(feature = "fetch")]
pub use fetch::{HttpFetcher, fetch_url};
pub use reading::{
    ReadingTime, fetch_reading_time, reading_time, time_to_read, time_to_read_or_default, time_to_read_with_config,
};
