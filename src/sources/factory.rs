

use std::sync::Arc;
use tracing::info;

use super::base::{DataSourceError, KeywordDataSource};
use super::serpapi::SerpApiSource;
use super::trends::GoogleTrendsSource;
use crate::core::{KeywordConfig, RandomSource};


pub struct DataSourceFactory;

impl DataSourceFactory {

    /// Trends first, then SerpApi. The order is the aggregation order used by the generator.
    pub fn from_config(
        config: &KeywordConfig,
        random: Arc<RandomSource>,
    ) -> Result<Vec<Arc<dyn KeywordDataSource>>, DataSourceError> {
        let mut sources: Vec<Arc<dyn KeywordDataSource>> = Vec::new();

        if config.trends_enabled {
            sources.push(Arc::new(GoogleTrendsSource::from_config(config)?));
        }
        sources.push(Arc::new(SerpApiSource::from_config(config, random)?));

        info!(
            "Configured {} keyword data sources: {}",
            sources.len(),
            sources.iter().map(|s| s.source_name()).collect::<Vec<_>>().join(", ")
        );
        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_builds_both_sources() {
        let sources = DataSourceFactory::from_config(&KeywordConfig::default(), Arc::new(RandomSource::seeded(1))).unwrap();
        let names: Vec<_> = sources.iter().map(|s| s.source_name()).collect();
        assert_eq!(names, vec!["google_trends", "serpapi"]);
    }

    #[test]
    fn test_trends_can_be_disabled() {
        let mut config = KeywordConfig::default();
        config.trends_enabled = false;
        let sources = DataSourceFactory::from_config(&config, Arc::new(RandomSource::seeded(1))).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].source_name(), "serpapi");
    }
}
