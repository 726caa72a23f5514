

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::request::GenerationRequest;
use super::templates::WordLists;
use crate::core::RandomSource;
use crate::sources::{KeywordDataSource, KeywordStats, RelatedKeyword};
use crate::utils::{char_len, dedup_first_occurrence};


/// Expands a seed keyword with template phrases and provider suggestions.
pub struct KeywordGenerator {
    word_lists: WordLists,
    sources: Vec<Arc<dyn KeywordDataSource>>,
    random: Arc<RandomSource>,
}

impl KeywordGenerator {
    pub fn new(sources: Vec<Arc<dyn KeywordDataSource>>) -> Self {
        Self::with_word_lists(WordLists::default(), sources, Arc::new(RandomSource::from_entropy()))
    }

    pub fn with_word_lists(
        word_lists: WordLists,
        sources: Vec<Arc<dyn KeywordDataSource>>,
        random: Arc<RandomSource>,
    ) -> Self {
        info!(
            "KeywordGenerator initialized: {} prefixes, {} suffixes, {} question starters, {} sources",
            word_lists.prefixes.len(),
            word_lists.suffixes.len(),
            word_lists.question_starters.len(),
            sources.len()
        );
        Self {
            word_lists,
            sources,
            random,
        }
    }

    pub fn word_lists(&self) -> &WordLists {
        &self.word_lists
    }


    pub fn add_custom_pattern(
        &mut self,
        prefixes: Option<&[String]>,
        suffixes: Option<&[String]>,
        questions: Option<&[String]>,
    ) {
        self.word_lists.extend(prefixes, suffixes, questions);
    }


    pub async fn generate_keywords(&self, request: &GenerationRequest) -> Vec<String> {
        let Some(seed) = request.normalized_seed() else {
            debug!("Blank seed keyword, nothing to generate");
            return Vec::new();
        };

        let count = request.count;
        let per_family = count / 4;
        let mut keywords = vec![seed.clone()];

        if request.include_api_data && !self.sources.is_empty() {
            let related = self.get_related_keywords(&seed, count / 2).await;
            keywords.extend(related.into_iter().map(|item| item.keyword));
        }

        if request.include_prefixes {
            keywords.extend(
                self.random
                    .sample(&self.word_lists.prefixes, per_family)
                    .into_iter()
                    .map(|prefix| format!("{prefix} {seed}")),
            );
        }
        if request.include_suffixes {
            keywords.extend(
                self.random
                    .sample(&self.word_lists.suffixes, per_family)
                    .into_iter()
                    .map(|suffix| format!("{seed} {suffix}")),
            );
        }
        if request.include_questions {
            keywords.extend(
                self.random
                    .sample(&self.word_lists.question_starters, per_family)
                    .into_iter()
                    .map(|starter| format!("{starter} {seed}")),
            );
        }

        let mut keywords = dedup_first_occurrence(keywords, String::clone);
        keywords.truncate(count);
        info!("Generated {} keywords for '{}'", keywords.len(), seed);
        keywords
    }


    /// Sources are polled in registration order until `limit` items are collected.
    /// Duplicate keywords keep the first item seen.
    pub async fn get_related_keywords(&self, seed: &str, limit: usize) -> Vec<RelatedKeyword> {
        let mut collected: Vec<RelatedKeyword> = Vec::new();

        for source in &self.sources {
            match source.get_related_keywords(seed, limit).await {
                Ok(related) => {
                    debug!("{} returned {} related keywords", source.source_name(), related.len());
                    collected.extend(related);
                    if collected.len() >= limit {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Error fetching related keywords from {}: {}", source.source_name(), e);
                }
            }
        }

        let mut unique = dedup_first_occurrence(collected, |item| item.keyword.clone());
        unique.truncate(limit);
        unique
    }


    pub async fn get_keyword_data(&self, seed: &str) -> KeywordStats {
        for source in &self.sources {
            match source.get_keyword_data(seed).await {
                Ok(stats) => return stats,
                Err(e) => {
                    warn!("Error fetching keyword data from {}: {}", source.source_name(), e);
                }
            }
        }
        KeywordStats::bare(seed)
    }


    pub fn filter_keywords(keywords: &[String], min_length: usize) -> Vec<String> {
        keywords
            .iter()
            .filter(|keyword| char_len(keyword) >= min_length)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{DataOrigin, DataSourceError, RelatedKind, SerpApiSource};
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl KeywordDataSource for FailingSource {
        async fn get_keyword_data(&self, _term: &str) -> Result<KeywordStats, DataSourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(DataSourceError::Provider("boom".to_string()))
        }

        async fn get_related_keywords(
            &self,
            _term: &str,
            _limit: usize,
        ) -> Result<Vec<RelatedKeyword>, DataSourceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(DataSourceError::Provider("boom".to_string()))
        }

        fn source_name(&self) -> &str {
            "failing"
        }
    }

    struct StaticSource {
        name: &'static str,
        keywords: Vec<&'static str>,
    }

    #[async_trait]
    impl KeywordDataSource for StaticSource {
        async fn get_keyword_data(&self, term: &str) -> Result<KeywordStats, DataSourceError> {
            Ok(KeywordStats {
                interest: Some(42.0),
                origin: Some(DataOrigin::Live),
                ..KeywordStats::bare(term)
            })
        }

        async fn get_related_keywords(
            &self,
            _term: &str,
            limit: usize,
        ) -> Result<Vec<RelatedKeyword>, DataSourceError> {
            Ok(self
                .keywords
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, kw)| RelatedKeyword::new(*kw, 100 - i as u32, RelatedKind::Top, DataOrigin::Live))
                .collect())
        }

        fn source_name(&self) -> &str {
            self.name
        }
    }

    fn failing() -> Arc<FailingSource> {
        Arc::new(FailingSource { calls: AtomicUsize::new(0) })
    }

    fn as_dyn(source: &Arc<FailingSource>) -> Arc<dyn KeywordDataSource> {
        source.clone()
    }

    fn fixed(name: &'static str, keywords: Vec<&'static str>) -> Arc<dyn KeywordDataSource> {
        Arc::new(StaticSource { name, keywords })
    }

    fn seeded(sources: Vec<Arc<dyn KeywordDataSource>>) -> KeywordGenerator {
        KeywordGenerator::with_word_lists(WordLists::default(), sources, Arc::new(RandomSource::seeded(11)))
    }

    #[tokio::test]
    async fn test_output_bounded_and_unique() {
        let generator = KeywordGenerator::new(vec![fixed("a", vec!["coffee", "coffee beans", "espresso"])]);
        for count in 4..=50 {
            let keywords = generator.generate_keywords(&GenerationRequest::new("Coffee").with_count(count)).await;
            assert!(keywords.len() <= count);
            let unique: HashSet<_> = keywords.iter().collect();
            assert_eq!(unique.len(), keywords.len());
            assert_eq!(keywords[0], "coffee");
        }
    }

    #[tokio::test]
    async fn test_blank_seed_yields_nothing() {
        let source = failing();
        let generator = seeded(vec![as_dyn(&source)]);
        for seed in ["", "   ", "\t\n"] {
            assert!(generator.generate_keywords(&GenerationRequest::new(seed)).await.is_empty());
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_flags_off_returns_seed() {
        let generator = seeded(vec![fixed("a", vec!["x"])]);
        let keywords = generator
            .generate_keywords(&GenerationRequest::seed_only("  Green Tea ").with_count(20))
            .await;
        assert_eq!(keywords, vec!["green tea"]);
    }

    #[tokio::test]
    async fn test_family_contributions() {
        let generator = seeded(Vec::new());
        let request = GenerationRequest::new("tea").with_count(20).with_api_data(false);
        let keywords = generator.generate_keywords(&request).await;

        assert_eq!(keywords.len(), 16);
        let lists = generator.word_lists();
        let prefixed = keywords.iter().filter(|k| lists.prefixes.iter().any(|p| **k == format!("{p} tea"))).count();
        let suffixed = keywords.iter().filter(|k| lists.suffixes.iter().any(|s| **k == format!("tea {s}"))).count();
        assert_eq!(prefixed, 5);
        assert_eq!(suffixed, 5);
    }

    #[tokio::test]
    async fn test_api_items_appended_verbatim() {
        let generator = seeded(vec![fixed("a", vec!["Tea Party", "tea"])]);
        let request = GenerationRequest::seed_only("tea").with_api_data(true).with_count(8);
        let keywords = generator.generate_keywords(&request).await;
        assert_eq!(keywords, vec!["tea", "Tea Party"]);
    }

    #[tokio::test]
    async fn test_api_items_capped_at_half_count() {
        let keywords: Vec<&'static str> = vec!["k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8", "k9", "k10"];
        let generator = seeded(vec![fixed("a", keywords)]);
        let request = GenerationRequest::seed_only("seed").with_api_data(true).with_count(8);

        let generated = generator.generate_keywords(&request).await;
        assert_eq!(generated, vec!["seed", "k1", "k2", "k3", "k4"]);
    }

    #[tokio::test]
    async fn test_count_is_a_ceiling() {
        let generator = seeded(Vec::new());
        let keywords = generator.generate_keywords(&GenerationRequest::new("tea").with_count(3)).await;
        assert_eq!(keywords, vec!["tea"]);
    }

    #[tokio::test]
    async fn test_failing_source_does_not_abort_aggregation() {
        let first = failing();
        let generator = seeded(vec![as_dyn(&first), fixed("b", vec!["one", "two", "three"])]);
        let related = generator.get_related_keywords("seed", 10).await;

        let keywords: Vec<_> = related.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(keywords, vec!["one", "two", "three"]);
        assert_eq!(first.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_related_stops_once_limit_reached() {
        let second = failing();
        let generator = seeded(vec![fixed("a", vec!["one", "two"]), as_dyn(&second)]);
        let related = generator.get_related_keywords("seed", 2).await;
        assert_eq!(related.len(), 2);
        assert_eq!(second.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_related_merge_keeps_first_occurrence() {
        let generator = seeded(vec![
            fixed("a", vec!["shared"]),
            fixed("b", vec!["shared", "other"]),
        ]);
        let related = generator.get_related_keywords("seed", 10).await;
        assert_eq!(related.len(), 2);
        assert_eq!(related[0].keyword, "shared");
        assert_eq!(related[0].score, 100);
        assert_eq!(related[1].keyword, "other");
    }

    #[tokio::test]
    async fn test_keyword_data_first_success_wins() {
        let generator = seeded(vec![as_dyn(&failing()), fixed("b", vec![])]);
        let stats = generator.get_keyword_data("tea").await;
        assert_eq!(stats.interest, Some(42.0));
    }

    #[tokio::test]
    async fn test_keyword_data_without_sources() {
        let generator = seeded(vec![as_dyn(&failing())]);
        assert_eq!(generator.get_keyword_data("tea").await, KeywordStats::bare("tea"));
        assert_eq!(seeded(Vec::new()).get_keyword_data("tea").await, KeywordStats::bare("tea"));
    }

    #[tokio::test]
    async fn test_custom_suffix_can_appear() {
        let mut generator = seeded(Vec::new());
        generator.add_custom_pattern(None, Some(&["x".to_string()]), None);
        let request = GenerationRequest::seed_only("seed").with_suffixes(true).with_count(40);

        let mut seen = false;
        for _ in 0..50 {
            if generator.generate_keywords(&request).await.contains(&"seed x".to_string()) {
                seen = true;
                break;
            }
        }
        assert!(seen);
    }

    #[tokio::test]
    async fn test_unconfigured_serpapi_enriches_generation() {
        let random = Arc::new(RandomSource::seeded(5));
        let serpapi: Arc<dyn KeywordDataSource> = Arc::new(SerpApiSource::unconfigured(random.clone()).unwrap());
        let generator = KeywordGenerator::with_word_lists(WordLists::default(), vec![serpapi], random);

        let request = GenerationRequest::seed_only("rust").with_api_data(true).with_count(8);
        let keywords = generator.generate_keywords(&request).await;
        assert_eq!(keywords.len(), 5);
        assert_eq!(keywords[0], "rust");
    }

    #[test]
    fn test_filter_keywords() {
        let keywords = vec!["a".to_string(), "ab".to_string(), "abcd".to_string()];
        assert_eq!(KeywordGenerator::filter_keywords(&keywords, 3), vec!["abcd"]);
        assert_eq!(KeywordGenerator::filter_keywords(&keywords, 0), keywords);
    }
}
