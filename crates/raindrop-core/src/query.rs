//! Raindrop search query construction

use crate::types::FilterOptions;

/// Build the `search` parameter for the raindrops endpoint
///
/// `created:2024-01-01 #a #b collection:"X"`
pub fn build_search_query(options: &FilterOptions) -> String {
    let mut query = format!("{}:{}", options.date_type, options.date);

    for tag in &options.tags {
        query.push_str(" #");
        query.push_str(tag);
    }

    if options.has_collection() {
        query.push_str(&format!(" collection:\"{}\"", options.collection));
    }

    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DateType;

    #[test]
    fn date_only() {
        let options = FilterOptions {
            date_type: DateType::Modified,
            date: "2024-06-01".to_string(),
            ..Default::default()
        };
        assert_eq!(build_search_query(&options), "modified:2024-06-01");
    }

    #[test]
    fn all_filters() {
        let options = FilterOptions {
            date_type: DateType::Created,
            date: "2024-01-01".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            collection: "X".to_string(),
        };
        assert_eq!(
            build_search_query(&options),
            r#"created:2024-01-01 #a #b collection:"X""#
        );
    }

    #[test]
    fn collection_with_spaces_is_quoted() {
        let options = FilterOptions {
            date: "2024-01-01".to_string(),
            collection: "Dev Reading".to_string(),
            ..Default::default()
        };
        assert_eq!(
            build_search_query(&options),
            r#"created:2024-01-01 collection:"Dev Reading""#
        );
    }

    #[test]
    fn repeated_tags_are_kept() {
        let options = FilterOptions {
            date: "2024-01-01".to_string(),
            tags: vec!["x".to_string(), "x".to_string()],
            ..Default::default()
        };
        assert_eq!(build_search_query(&options), "created:2024-01-01 #x #x");
    }
}
