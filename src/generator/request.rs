

use serde::{Deserialize, Serialize};

use crate::DEFAULT_KEYWORD_COUNT;


#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub seed: String,
    pub count: usize,
    pub include_prefixes: bool,
    pub include_suffixes: bool,
    pub include_questions: bool,
    pub include_api_data: bool,
}

impl GenerationRequest {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: DEFAULT_KEYWORD_COUNT,
            include_prefixes: true,
            include_suffixes: true,
            include_questions: true,
            include_api_data: true,
        }
    }

    /// Seed only: every template family and API enrichment switched off.
    pub fn seed_only(seed: impl Into<String>) -> Self {
        Self {
            include_prefixes: false,
            include_suffixes: false,
            include_questions: false,
            include_api_data: false,
            ..Self::new(seed)
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_prefixes(mut self, enabled: bool) -> Self {
        self.include_prefixes = enabled;
        self
    }

    pub fn with_suffixes(mut self, enabled: bool) -> Self {
        self.include_suffixes = enabled;
        self
    }

    pub fn with_questions(mut self, enabled: bool) -> Self {
        self.include_questions = enabled;
        self
    }

    pub fn with_api_data(mut self, enabled: bool) -> Self {
        self.include_api_data = enabled;
        self
    }


    pub fn normalized_seed(&self) -> Option<String> {
        let seed = self.seed.trim();
        (!seed.is_empty()).then(|| seed.to_lowercase())
    }
}
