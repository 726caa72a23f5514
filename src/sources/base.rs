

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::{Display, EnumString, IntoStaticStr};
use thiserror::Error;


#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider error: {0}")]
    Provider(String),
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RelatedKind {
    Top,
    Rising,
    Related,
    Question,
}


/// Whether a record came from the remote service or was synthesized locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DataOrigin {
    Live,
    Mock,
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedKeyword {
    pub keyword: String,
    pub score: u32,
    #[serde(rename = "type")]
    pub kind: RelatedKind,
    pub origin: DataOrigin,
}

impl RelatedKeyword {
    pub fn new(keyword: impl Into<String>, score: u32, kind: RelatedKind, origin: DataOrigin) -> Self {
        Self {
            keyword: keyword.into(),
            score,
            kind,
            origin,
        }
    }
}


/// Only `keyword` is common to every provider; the remaining fields are provider-specific.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordStats {
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_results: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<f64>,
    /// `None` when no source produced usable data for the keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<DataOrigin>,
}

impl KeywordStats {
    pub fn bare(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            interest: None,
            total_results: None,
            time_taken: None,
            origin: None,
        }
    }
}


#[async_trait]
pub trait KeywordDataSource: Send + Sync {

    async fn get_keyword_data(&self, term: &str) -> Result<KeywordStats, DataSourceError>;


    async fn get_related_keywords(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<RelatedKeyword>, DataSourceError>;


    fn source_name(&self) -> &str;
}


#[async_trait]
impl KeywordDataSource for Arc<dyn KeywordDataSource> {
    async fn get_keyword_data(&self, term: &str) -> Result<KeywordStats, DataSourceError> {
        (**self).get_keyword_data(term).await
    }

    async fn get_related_keywords(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<RelatedKeyword>, DataSourceError> {
        (**self).get_related_keywords(term, limit).await
    }

    fn source_name(&self) -> &str {
        (**self).source_name()
    }
}
