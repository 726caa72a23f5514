

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use strum::Display;
use tracing::{debug, info, warn};

use super::base::{DataOrigin, DataSourceError, KeywordDataSource, KeywordStats, RelatedKeyword, RelatedKind};
use super::mock::{MockKeywordData, MOCK_SCORE_RANGE};
use crate::core::{KeywordConfig, RandomSource};
use crate::{DEFAULT_SERPAPI_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Debug, Default, Deserialize)]
struct SerpApiResponse {
    #[serde(default)]
    related_searches: Vec<RelatedSearch>,
    #[serde(default)]
    related_questions: Vec<RelatedQuestion>,
    #[serde(default)]
    search_information: Option<SearchInformation>,
    #[serde(default)]
    search_metadata: Option<SearchMetadata>,
}

#[derive(Debug, Deserialize)]
struct RelatedSearch {
    query: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RelatedQuestion {
    question: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchInformation {
    total_results: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct SearchMetadata {
    processing_time_ms: Option<f64>,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConnectionStatus {
    #[strum(to_string = "Not configured")]
    NotConfigured,
    Configured,
    Connected,
    Failed,
}


/// SerpApi-backed provider. Without an API key every call is served from [`MockKeywordData`].
pub struct SerpApiSource {
    api_key: Option<String>,
    base_url: String,
    client: Client,
    mock: MockKeywordData,
    random: Arc<RandomSource>,
}

impl SerpApiSource {

    pub fn new(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout_secs: u64,
        random: Arc<RandomSource>,
    ) -> Result<Self, DataSourceError> {
        let api_key = api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
        let base_url = base_url.into();
        info!(
            "SerpApi source initialized (url={}, configured={})",
            base_url,
            api_key.is_some()
        );
        Ok(Self {
            api_key,
            base_url,
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()?,
            mock: MockKeywordData::new(Arc::clone(&random)),
            random,
        })
    }


    pub fn unconfigured(random: Arc<RandomSource>) -> Result<Self, DataSourceError> {
        Self::new(None, DEFAULT_SERPAPI_URL, DEFAULT_TIMEOUT_SECS, random)
    }

    pub fn from_config(config: &KeywordConfig, random: Arc<RandomSource>) -> Result<Self, DataSourceError> {
        Self::new(
            config.serpapi_key().map(String::from),
            config.serpapi_url.clone(),
            config.timeout,
            random,
        )
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn status(&self) -> ConnectionStatus {
        if self.is_configured() {
            ConnectionStatus::Configured
        } else {
            ConnectionStatus::NotConfigured
        }
    }


    pub async fn check_connection(&self) -> ConnectionStatus {
        let Some(api_key) = self.api_key.as_deref() else {
            return ConnectionStatus::NotConfigured;
        };

        let result = self
            .client
            .get(&self.base_url)
            .query(&[("q", "test"), ("api_key", api_key)])
            .send()
            .await;

        match result {
            Ok(response) if response.status() == StatusCode::OK => ConnectionStatus::Connected,
            Ok(response) => {
                warn!("SerpApi connection test returned HTTP {}", response.status());
                ConnectionStatus::Failed
            }
            Err(e) => {
                warn!("SerpApi connection test failed: {}", e);
                ConnectionStatus::Failed
            }
        }
    }

    async fn search(&self, api_key: &str, term: &str) -> Result<SerpApiResponse, DataSourceError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", term), ("gl", "us"), ("hl", "en"), ("api_key", api_key)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(DataSourceError::Provider(format!("SerpApi returned HTTP {status}")));
        }

        Ok(response.json::<SerpApiResponse>().await?)
    }

    fn collect_related(&self, response: &SerpApiResponse, limit: usize) -> Vec<RelatedKeyword> {
        let searches = response
            .related_searches
            .iter()
            .take(limit)
            .filter_map(|item| item.query.as_deref())
            .map(|query| (query, RelatedKind::Related));
        let questions = response
            .related_questions
            .iter()
            .take(limit)
            .filter_map(|item| item.question.as_deref())
            .map(|question| (question, RelatedKind::Question));

        searches
            .chain(questions)
            .map(|(keyword, kind)| {
                RelatedKeyword::new(keyword, self.random.int_in(MOCK_SCORE_RANGE), kind, DataOrigin::Live)
            })
            .collect()
    }
}

fn total_results_label(info: Option<&SearchInformation>) -> String {
    match info.and_then(|i| i.total_results.as_ref()) {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        _ => "N/A".to_string(),
    }
}

#[async_trait]
impl KeywordDataSource for SerpApiSource {
    async fn get_keyword_data(&self, term: &str) -> Result<KeywordStats, DataSourceError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(self.mock.keyword_data(term));
        };

        match self.search(api_key, term).await {
            Ok(response) => {
                let processing_ms = response
                    .search_metadata
                    .as_ref()
                    .and_then(|m| m.processing_time_ms)
                    .unwrap_or(0.0);
                Ok(KeywordStats {
                    keyword: term.to_string(),
                    interest: None,
                    total_results: Some(total_results_label(response.search_information.as_ref())),
                    time_taken: Some(processing_ms / 1000.0),
                    origin: Some(DataOrigin::Live),
                })
            }
            Err(e) => {
                warn!("SerpApi keyword data failed, using mock data: {}", e);
                Ok(self.mock.keyword_data(term))
            }
        }
    }

    async fn get_related_keywords(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<RelatedKeyword>, DataSourceError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(self.mock.related_keywords(term, limit));
        };

        let related = match self.search(api_key, term).await {
            Ok(response) => self.collect_related(&response, limit),
            Err(e) => {
                warn!("SerpApi related keywords failed: {}", e);
                Vec::new()
            }
        };

        if related.is_empty() {
            debug!("No SerpApi results for '{}', using mock data", term);
            return Ok(self.mock.related_keywords(term, limit));
        }
        Ok(related)
    }

    fn source_name(&self) -> &str {
        "serpapi"
    }
}
