//! Wire schema of the Raindrop REST API
//!
//! Only the fields raindrop-notes reads are modelled. Every field is
//! optional on the wire; defaults are applied when mapping to
//! [`raindrop_core::Bookmark`].

use serde::Deserialize;

/// Body of `GET /rest/v1/raindrops/{collection}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaindropsResponse {
    /// Matching bookmarks, in result order
    #[serde(default)]
    pub items: Vec<RaindropItem>,
}

/// One bookmark in a search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaindropItem {
    /// Bookmark id
    #[serde(rename = "_id")]
    pub id: Option<i64>,
    /// Bookmark title
    pub title: Option<String>,
    /// Bookmarked URL
    pub link: Option<String>,
    /// Tag names
    pub tags: Option<Vec<String>>,
    /// Owning collection reference
    pub collection: Option<CollectionRef>,
}

/// Collection reference embedded in a bookmark
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionRef {
    /// Collection id; `-1` is Unsorted, `0` is "all"
    #[serde(rename = "$id")]
    pub id: Option<i64>,
    /// Collection title, present only in some response shapes
    pub title: Option<String>,
}

/// Body of `GET /rest/v1/collection/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionResponse {
    /// The collection
    pub item: CollectionItem,
}

/// A collection as returned by the collection endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionItem {
    /// Collection id
    #[serde(rename = "_id")]
    pub id: i64,
    /// Collection title
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_response_tolerates_missing_and_null_fields() {
        let body = r#"{
            "result": true,
            "items": [
                {"_id": 1, "title": "A", "link": "https://a", "tags": ["x"],
                 "collection": {"$ref": "collections", "$id": 12, "oid": 12}},
                {"title": null, "link": "https://b", "tags": null},
                {}
            ]
        }"#;
        let response: RaindropsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.items.len(), 3);
        assert_eq!(response.items[0].collection.as_ref().unwrap().id, Some(12));
        assert!(response.items[1].title.is_none());
        assert!(response.items[2].collection.is_none());
    }

    #[test]
    fn missing_items_is_empty() {
        let response: RaindropsResponse = serde_json::from_str(r#"{"result": true}"#).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn collection_response() {
        let body = r#"{"result": true, "item": {"_id": 12, "title": "Reading", "count": 3}}"#;
        let response: CollectionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.item.id, 12);
        assert_eq!(response.item.title.as_deref(), Some("Reading"));
    }
}
