//! HTTP client for the Raindrop.io REST API

use async_trait::async_trait;
use futures::future::try_join_all;
use raindrop_core::{build_search_query, Bookmark, Collection, FilterOptions};
use reqwest::{header, Client, Response, Url};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::{
    config::ClientConfig,
    error::{ApiError, FetchError, Result},
    types::{CollectionResponse, RaindropItem, RaindropsResponse},
};

/// Collection id that searches across every collection
const ALL_COLLECTIONS: i64 = 0;

/// Anything that can turn a filter into bookmarks
#[async_trait]
pub trait BookmarkSource: Send + Sync {
    /// Fetch the bookmarks matching `options`, in service order
    async fn fetch_bookmarks(
        &self,
        api_key: &str,
        options: &FilterOptions,
    ) -> std::result::Result<Vec<Bookmark>, FetchError>;
}

/// HTTP client for the Raindrop.io REST API
#[derive(Clone)]
pub struct RaindropClient {
    client: Client,
    api_url: String,
}

impl RaindropClient {
    /// Create a client for the public Raindrop.io API
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client for a custom API host
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let config = ClientConfig::builder().base_url(base_url).build();
        Self::with_config(config)
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Url::parse(&config.base_url).map_err(|e| {
            ApiError::InvalidConfig(format!("invalid base URL '{}': {}", config.base_url, e))
        })?;

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url(),
        })
    }

    /// Search bookmarks across all collections
    ///
    /// `query` uses Raindrop search syntax, e.g. `created:2024-06-01 #rust`.
    /// A millisecond timestamp is sent as `_` so intermediate caches never
    /// serve a stale result for a repeated query.
    pub async fn search_raindrops(&self, api_key: &str, query: &str) -> Result<Vec<RaindropItem>> {
        let nonce = chrono::Utc::now().timestamp_millis();
        let url = format!(
            "{}/raindrops/{}?search={}&_={}",
            self.api_url,
            ALL_COLLECTIONS,
            urlencoding::encode(query),
            nonce
        );
        debug!("Searching raindrops: {}", query);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, bearer(api_key))
            .send()
            .await?;
        let body: RaindropsResponse = handle_response(response, "search").await?;
        Ok(body.items)
    }

    /// Look up a collection by id
    ///
    /// Ids of zero or below are system collections and resolve to
    /// `Unsorted` without a request.
    pub async fn get_collection(&self, api_key: &str, id: i64) -> Result<Collection> {
        if !Collection::is_user_collection(id) {
            return Ok(Collection::unsorted(id));
        }

        let url = format!("{}/collection/{}", self.api_url, id);
        debug!("Fetching collection {}", id);

        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, bearer(api_key))
            .send()
            .await?;
        let body: CollectionResponse = handle_response(response, "collection fetch").await?;

        match body.item.title.filter(|t| !t.is_empty()) {
            Some(title) => Ok(Collection {
                id: body.item.id,
                title,
            }),
            None => Ok(Collection::unsorted(body.item.id)),
        }
    }

    /// Resolve titles for collections the search response left unnamed
    ///
    /// Each distinct id is requested once, concurrently.
    async fn resolve_collections(
        &self,
        api_key: &str,
        items: &[RaindropItem],
    ) -> Result<HashMap<i64, Collection>> {
        let mut pending: Vec<i64> = Vec::new();
        for item in items {
            if let Some(id) = unresolved_collection_id(item) {
                if !pending.contains(&id) {
                    pending.push(id);
                }
            }
        }

        if pending.is_empty() {
            return Ok(HashMap::new());
        }
        debug!("Resolving {} collection title(s)", pending.len());

        let collections =
            try_join_all(pending.iter().map(|id| self.get_collection(api_key, *id))).await?;

        Ok(pending.into_iter().zip(collections).collect())
    }
}

#[async_trait]
impl BookmarkSource for RaindropClient {
    async fn fetch_bookmarks(
        &self,
        api_key: &str,
        options: &FilterOptions,
    ) -> std::result::Result<Vec<Bookmark>, FetchError> {
        if api_key.trim().is_empty() {
            return Err(FetchError::MissingApiKey);
        }
        if !options.has_date() {
            debug!("Date filter unresolved, skipping search");
            return Ok(Vec::new());
        }

        let query = build_search_query(options);
        let items = self.search_raindrops(api_key, &query).await?;
        let resolved = self.resolve_collections(api_key, &items).await?;

        Ok(items
            .into_iter()
            .map(|item| to_bookmark(item, &resolved))
            .collect())
    }
}

/// Collection id that needs a lookup: a user collection with no embedded title
fn unresolved_collection_id(item: &RaindropItem) -> Option<i64> {
    let collection = item.collection.as_ref()?;
    let id = collection.id?;
    let has_title = collection.title.as_deref().is_some_and(|t| !t.is_empty());
    (Collection::is_user_collection(id) && !has_title).then_some(id)
}

fn to_bookmark(item: RaindropItem, resolved: &HashMap<i64, Collection>) -> Bookmark {
    let collection = match item.collection {
        Some(ref c) => match (c.id, c.title.as_deref()) {
            (Some(id), Some(title)) if Collection::is_user_collection(id) && !title.is_empty() => {
                Collection {
                    id,
                    title: title.to_string(),
                }
            }
            (Some(id), _) => resolved
                .get(&id)
                .cloned()
                .unwrap_or_else(|| Collection::unsorted(id)),
            (None, _) => Collection::default(),
        },
        None => Collection::default(),
    };

    Bookmark {
        id: item.id.unwrap_or_default(),
        title: item.title.unwrap_or_default(),
        link: item.link.unwrap_or_default(),
        collection,
        tags: item.tags.unwrap_or_default(),
    }
}

fn bearer(api_key: &str) -> String {
    format!("Bearer {}", api_key)
}

/// Check the status and deserialize the JSON body
async fn handle_response<T: DeserializeOwned>(
    response: Response,
    endpoint: &'static str,
) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        warn!("Raindrop {} returned {}", endpoint, status);
        return Err(ApiError::Status {
            status: status.as_u16(),
            endpoint,
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        warn!("Failed to parse {} response JSON: {}", endpoint, e);
        ApiError::InvalidResponse(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CollectionRef;

    fn item(collection: Option<CollectionRef>) -> RaindropItem {
        RaindropItem {
            id: Some(5),
            title: Some("Title".to_string()),
            link: Some("https://example.com".to_string()),
            tags: None,
            collection,
        }
    }

    fn collection_ref(id: i64, title: Option<&str>) -> Option<CollectionRef> {
        Some(CollectionRef {
            id: Some(id),
            title: title.map(str::to_string),
        })
    }

    #[test]
    fn embedded_title_is_used_directly() {
        let item = item(collection_ref(12, Some("Reading")));
        assert_eq!(unresolved_collection_id(&item), None);

        let bookmark = to_bookmark(item, &HashMap::new());
        assert_eq!(bookmark.collection.title, "Reading");
        assert_eq!(bookmark.collection.id, 12);
        assert!(bookmark.tags.is_empty());
    }

    #[test]
    fn untitled_user_collection_needs_lookup() {
        let item = item(collection_ref(12, None));
        assert_eq!(unresolved_collection_id(&item), Some(12));

        let mut resolved = HashMap::new();
        resolved.insert(
            12,
            Collection {
                id: 12,
                title: "Looked Up".to_string(),
            },
        );
        assert_eq!(to_bookmark(item, &resolved).collection.title, "Looked Up");
    }

    #[test]
    fn system_collections_are_unsorted() {
        for id in [-1, 0] {
            let item = item(collection_ref(id, Some("Ignored")));
            assert_eq!(unresolved_collection_id(&item), None);
            let bookmark = to_bookmark(item, &HashMap::new());
            assert_eq!(bookmark.collection, Collection::unsorted(id));
        }
    }

    #[test]
    fn missing_fields_default() {
        let bookmark = to_bookmark(RaindropItem::default(), &HashMap::new());
        assert_eq!(bookmark.id, 0);
        assert_eq!(bookmark.title, "");
        assert_eq!(bookmark.link, "");
        assert_eq!(bookmark.collection, Collection::default());
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = RaindropClient::with_base_url("not a url");
        assert!(matches!(result, Err(ApiError::InvalidConfig(_))));
    }
}
