

use std::sync::Arc;

use super::base::{DataOrigin, KeywordStats, RelatedKeyword, RelatedKind};
use crate::core::RandomSource;

pub const MOCK_SCORE_RANGE: std::ops::RangeInclusive<u32> = 50..=100;
const MOCK_LATENCY_RANGE: std::ops::RangeInclusive<f64> = 0.1..=0.9;


/// Local stand-in for a search provider that is unconfigured or unreachable.
#[derive(Debug, Clone)]
pub struct MockKeywordData {
    random: Arc<RandomSource>,
}

impl MockKeywordData {
    pub fn new(random: Arc<RandomSource>) -> Self {
        Self { random }
    }

    pub fn templates(term: &str) -> [String; 4] {
        [
            format!("best {term}"),
            format!("{term} tutorial"),
            format!("how to use {term}"),
            format!("{term} examples"),
        ]
    }

    pub fn related_keywords(&self, term: &str, limit: usize) -> Vec<RelatedKeyword> {
        let templates = Self::templates(term);
        self.random
            .sample(&templates, limit)
            .into_iter()
            .map(|keyword| {
                RelatedKeyword::new(
                    keyword.clone(),
                    self.random.int_in(MOCK_SCORE_RANGE),
                    RelatedKind::Related,
                    DataOrigin::Mock,
                )
            })
            .collect()
    }

    pub fn keyword_data(&self, term: &str) -> KeywordStats {
        let total_results = format!("{},{}", self.random.int_in(1..=9), self.random.int_in(100..=999));
        KeywordStats {
            keyword: term.to_string(),
            interest: None,
            total_results: Some(total_results),
            time_taken: Some(self.random.float_in(MOCK_LATENCY_RANGE)),
            origin: Some(DataOrigin::Mock),
        }
    }
}
