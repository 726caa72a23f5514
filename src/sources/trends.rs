

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

use super::base::{DataOrigin, DataSourceError, KeywordDataSource, KeywordStats, RelatedKeyword, RelatedKind};
use crate::core::KeywordConfig;

const EXPLORE_PATH: &str = "/trends/api/explore";
const RELATED_PATH: &str = "/trends/api/widgetdata/relatedsearches";
const TIMELINE_PATH: &str = "/trends/api/widgetdata/multiline";

#[derive(Debug, Deserialize)]
struct ExploreResponse {
    #[serde(default)]
    widgets: Vec<Widget>,
}

#[derive(Debug, Deserialize)]
struct Widget {
    id: String,
    token: String,
    request: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RelatedSearchesResponse {
    default: RankedLists,
}

#[derive(Debug, Deserialize)]
struct RankedLists {
    #[serde(rename = "rankedList", default)]
    ranked_list: Vec<RankedList>,
}

#[derive(Debug, Deserialize)]
struct RankedList {
    #[serde(rename = "rankedKeyword", default)]
    ranked_keyword: Vec<RankedQuery>,
}

#[derive(Debug, Deserialize)]
struct RankedQuery {
    query: String,
    #[serde(default)]
    value: u32,
}

#[derive(Debug, Deserialize)]
struct MultilineResponse {
    default: Timeline,
}

#[derive(Debug, Deserialize)]
struct Timeline {
    #[serde(rename = "timelineData", default)]
    timeline_data: Vec<TimelinePoint>,
}

#[derive(Debug, Deserialize)]
struct TimelinePoint {
    #[serde(default)]
    value: Vec<f64>,
}


/// Google Trends web endpoints, queried through one anonymous cookie session.
pub struct GoogleTrendsSource {
    base_url: String,
    geo: String,
    language: String,
    timezone: i32,
    timeframe: String,
    client: Client,
    session_ready: AtomicBool,
}

impl GoogleTrendsSource {

    pub fn new(
        base_url: impl Into<String>,
        geo: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, DataSourceError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let geo = geo.into();
        info!("Google Trends source initialized (url={}, geo={})", base_url, geo);
        Ok(Self {
            base_url,
            geo,
            language: "en-US".to_string(),
            timezone: 120,
            timeframe: "today 12-m".to_string(),
            client: Client::builder()
                .cookie_store(true)
                .timeout(Duration::from_secs(timeout_secs))
                .build()?,
            session_ready: AtomicBool::new(false),
        })
    }

    pub fn from_config(config: &KeywordConfig) -> Result<Self, DataSourceError> {
        let mut source = Self::new(config.trends_url.clone(), config.trends_geo.clone(), config.timeout)?;
        source.language = config.trends_language.clone();
        source.timezone = config.trends_timezone;
        source.timeframe = config.trends_timeframe.clone();
        Ok(source)
    }

    async fn ensure_session(&self) {
        if self.session_ready.load(Ordering::SeqCst) {
            return;
        }
        let result = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("geo", self.geo.as_str())])
            .send()
            .await;
        match result {
            Ok(_) => self.session_ready.store(true, Ordering::SeqCst),
            Err(e) => debug!("Google Trends session cookie request failed: {}", e),
        }
    }

    async fn get_guarded<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, DataSourceError> {
        let body = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(strip_xssi_guard(&body))?)
    }

    async fn explore(&self, term: &str) -> Result<Vec<Widget>, DataSourceError> {
        self.ensure_session().await;

        let request = json!({
            "comparisonItem": [{"keyword": term, "time": self.timeframe, "geo": self.geo}],
            "category": 0,
            "property": "",
        });
        let explore: ExploreResponse = self
            .get_guarded(
                EXPLORE_PATH,
                &[
                    ("hl", self.language.clone()),
                    ("tz", self.timezone.to_string()),
                    ("req", request.to_string()),
                ],
            )
            .await?;

        debug!("Google Trends explore returned {} widgets for '{}'", explore.widgets.len(), term);
        require_widgets(explore)
    }

    async fn widget_data<T: DeserializeOwned>(&self, path: &str, widget: &Widget) -> Result<T, DataSourceError> {
        self.get_guarded(
            path,
            &[
                ("hl", self.language.clone()),
                ("tz", self.timezone.to_string()),
                ("req", widget.request.to_string()),
                ("token", widget.token.clone()),
            ],
        )
        .await
    }

    async fn fetch_related(&self, term: &str, limit: usize) -> Result<Vec<RelatedKeyword>, DataSourceError> {
        let widgets = self.explore(term).await?;
        let Some(widget) = widgets.iter().find(|w| w.id.contains("RELATED_QUERIES")) else {
            return Ok(Vec::new());
        };

        let related: RelatedSearchesResponse = self.widget_data(RELATED_PATH, widget).await?;
        Ok(split_ranked(related.default, limit))
    }

    async fn fetch_interest(&self, term: &str) -> Result<f64, DataSourceError> {
        let widgets = self.explore(term).await?;
        let Some(widget) = widgets.iter().find(|w| w.id == "TIMESERIES") else {
            return Ok(0.0);
        };

        let timeline: MultilineResponse = self.widget_data(TIMELINE_PATH, widget).await?;
        Ok(mean_interest(&timeline.default))
    }
}

fn require_widgets(explore: ExploreResponse) -> Result<Vec<Widget>, DataSourceError> {
    if explore.widgets.is_empty() {
        return Err(DataSourceError::InvalidResponse("explore returned no widgets".to_string()));
    }
    Ok(explore.widgets)
}

/// Drops the `)]}'` anti-XSSI prefix Google puts in front of JSON bodies.
fn strip_xssi_guard(body: &str) -> &str {
    body.find('{').map_or(body, |start| &body[start..])
}

/// First ranked list is "top", second is "rising"; each contributes at most `limit / 2`.
fn split_ranked(lists: RankedLists, limit: usize) -> Vec<RelatedKeyword> {
    let per_list = limit / 2;
    lists
        .ranked_list
        .into_iter()
        .zip([RelatedKind::Top, RelatedKind::Rising])
        .flat_map(|(list, kind)| {
            list.ranked_keyword
                .into_iter()
                .take(per_list)
                .map(move |q| RelatedKeyword::new(q.query, q.value, kind, DataOrigin::Live))
        })
        .collect()
}

fn mean_interest(timeline: &Timeline) -> f64 {
    let values: Vec<f64> = timeline
        .timeline_data
        .iter()
        .filter_map(|point| point.value.first().copied())
        .collect();
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

#[async_trait]
impl KeywordDataSource for GoogleTrendsSource {
    async fn get_keyword_data(&self, term: &str) -> Result<KeywordStats, DataSourceError> {
        let (interest, origin) = match self.fetch_interest(term).await {
            Ok(interest) => (interest, Some(DataOrigin::Live)),
            Err(e) => {
                warn!("Google Trends data error: {}", e);
                (0.0, None)
            }
        };

        Ok(KeywordStats {
            interest: Some(interest),
            origin,
            ..KeywordStats::bare(term)
        })
    }

    async fn get_related_keywords(
        &self,
        term: &str,
        limit: usize,
    ) -> Result<Vec<RelatedKeyword>, DataSourceError> {
        match self.fetch_related(term, limit).await {
            Ok(related) => Ok(related),
            Err(e) => {
                warn!("Google Trends error: {}", e);
                Ok(Vec::new())
            }
        }
    }

    fn source_name(&self) -> &str {
        "google_trends"
    }
}
