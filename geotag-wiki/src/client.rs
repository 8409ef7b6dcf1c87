use crate::config::WikiConfig;
use crate::error::{Result, WikiError};
use crate::model::{ClaimsResponse, Coordinate, ItemId, PageInfo, QueryBody, QueryResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Wikidata property holding an item's coordinate location
pub const COORDINATE_PROPERTY: &str = "P625";

/// The lookups the resolver needs from an encyclopedia and its structured-data store.
pub trait KnowledgeBase {
    /// Wikidata item linked to the page `title`. Redirect pages are not followed.
    fn item_for_page(&self, title: &str) -> impl Future<Output = Result<ItemId>> + Send;

    /// Title of the page that `title` redirects to.
    fn redirect_target(&self, title: &str) -> impl Future<Output = Result<String>> + Send;

    /// Coordinate claims of `item`, in claim order.
    fn coordinates(&self, item: &ItemId) -> impl Future<Output = Result<Vec<Coordinate>>> + Send;
}

pub struct WikiClient {
    client: Client,
    config: WikiConfig,
}

impl WikiClient {
    pub fn new(config: WikiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.timeout_secs.div_ceil(2)))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &WikiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<T> {
        let mut url = Url::parse(endpoint)?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .extend_pairs(params.iter());

        debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(WikiError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn query(&self, params: &[(&str, &str)]) -> Result<QueryBody> {
        let response: QueryResponse = self.get_json(&self.config.wikipedia_api, params).await?;
        if let Some(error) = response.error {
            return Err(WikiError::Api {
                code: error.code,
                info: error.info,
            });
        }
        Ok(response.query.unwrap_or_default())
    }
}

fn checked_title(title: &str) -> Result<&str> {
    let title = title.trim();
    if title.is_empty() {
        return Err(WikiError::InvalidTitle(title.to_string()));
    }
    Ok(title)
}

fn first_page(body: QueryBody, title: &str) -> Result<PageInfo> {
    let page = body
        .pages
        .into_iter()
        .next()
        .ok_or_else(|| WikiError::PageMissing(title.to_string()))?;
    if page.invalid {
        return Err(WikiError::InvalidTitle(page.title));
    }
    if page.missing {
        return Err(WikiError::PageMissing(page.title));
    }
    Ok(page)
}

impl KnowledgeBase for WikiClient {
    async fn item_for_page(&self, title: &str) -> Result<ItemId> {
        let title = checked_title(title)?;
        let body = self
            .query(&[
                ("action", "query"),
                ("formatversion", "2"),
                ("prop", "pageprops|info"),
                ("ppprop", "wikibase_item"),
                ("titles", title),
            ])
            .await?;

        let page = first_page(body, title)?;
        if page.redirect {
            return Err(WikiError::IsRedirect(page.title));
        }

        page.pageprops
            .and_then(|props| props.wikibase_item)
            .map(ItemId::new)
            .ok_or(WikiError::NoItem(page.title))
    }

    async fn redirect_target(&self, title: &str) -> Result<String> {
        let title = checked_title(title)?;
        let body = self
            .query(&[
                ("action", "query"),
                ("formatversion", "2"),
                ("redirects", "1"),
                ("titles", title),
            ])
            .await?;

        if let Some(redirect) = body.redirects.last() {
            debug!("{} redirects to {}", redirect.from, redirect.to);
            return Ok(redirect.to.clone());
        }

        let page = first_page(body, title)?;
        Err(WikiError::NotRedirect(page.title))
    }

    async fn coordinates(&self, item: &ItemId) -> Result<Vec<Coordinate>> {
        let response: ClaimsResponse = self
            .get_json(
                &self.config.wikidata_api,
                &[
                    ("action", "wbgetclaims"),
                    ("entity", item.as_str()),
                    ("property", COORDINATE_PROPERTY),
                ],
            )
            .await?;

        if let Some(error) = response.error {
            return Err(WikiError::Api {
                code: error.code,
                info: error.info,
            });
        }

        let coordinates: Vec<Coordinate> = response
            .claims
            .get(COORDINATE_PROPERTY)
            .map(|claims| claims.iter().filter_map(|c| c.mainsnak.coordinate()).collect())
            .unwrap_or_default();

        debug!("{} has {} coordinate claim(s)", item, coordinates.len());
        Ok(coordinates)
    }
}
