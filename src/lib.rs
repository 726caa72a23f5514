

pub mod core;
pub mod export;
pub mod generator;
pub mod sources;
pub mod utils;

pub use crate::core::config::KeywordConfig;
pub use crate::core::error::{KeywordError, Result};
pub use generator::{GenerationRequest, KeywordGenerator, WordLists};
pub use sources::{DataOrigin, KeywordDataSource, KeywordStats, RelatedKeyword, RelatedKind};


pub const DEFAULT_SERPAPI_URL: &str = "https://serpapi.com/search.json";


pub const DEFAULT_TRENDS_URL: &str = "https://trends.google.com";


pub const DEFAULT_CREDENTIALS_PATH: &str = "api_config.json";


pub const DEFAULT_KEYWORD_COUNT: usize = 10;


pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
