

pub mod base;
pub mod factory;
pub mod mock;
pub mod serpapi;
pub mod trends;

pub use base::{DataOrigin, DataSourceError, KeywordDataSource, KeywordStats, RelatedKeyword, RelatedKind};
pub use factory::DataSourceFactory;
pub use mock::MockKeywordData;
pub use serpapi::{ConnectionStatus, SerpApiSource};
pub use trends::GoogleTrendsSource;
