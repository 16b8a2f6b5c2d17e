//! Filter directive parsing
//!
//! A raindrop block is a list of directive lines:
//!
//! ```text
//! created:{daily}
//! #reading
//! #rust
//! @Articles
//! ```
//!
//! - `created:<date>` / `modified:<date>` pick the timestamp field and date.
//!   `{daily}` takes the date from the note's file name (`2024-06-01.md`).
//! - `#tag` adds a tag filter (order kept, duplicates kept).
//! - `@collection` sets the collection filter (last one wins).
//!
//! Anything else is ignored. Parsing never fails.

use chrono::{Local, NaiveDate};
use std::path::Path;
use tracing::debug;

use crate::types::{DateType, FilterOptions};

/// Date value that is replaced with the note's own date
pub const DAILY_TOKEN: &str = "{daily}";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a raindrop block using today's local date as the default
pub fn parse_options(source: &str, note_path: Option<&Path>) -> FilterOptions {
    parse_options_at(source, note_path, Local::now().date_naive())
}

/// Parse a raindrop block with an explicit "today"
///
/// When no date directive is present the date defaults to `today`. A
/// `{daily}` date that cannot be derived from `note_path` leaves the date
/// empty so that callers report no results instead of guessing.
pub fn parse_options_at(source: &str, note_path: Option<&Path>, today: NaiveDate) -> FilterOptions {
    let mut date_directive: Option<(DateType, String)> = None;
    let mut tags = Vec::new();
    let mut collection = String::new();

    for line in source.lines().map(str::trim) {
        if let Some(tag) = line.strip_prefix('#') {
            let tag = tag.trim();
            if !tag.is_empty() {
                tags.push(tag.to_string());
            }
        } else if let Some(name) = line.strip_prefix('@') {
            collection = name.trim().to_string();
        } else if let Some((date_type, value)) = parse_date_directive(line) {
            date_directive = Some((date_type, value.to_string()));
        }
    }

    let (date_type, date) = match date_directive {
        Some((date_type, value)) if value == DAILY_TOKEN => {
            let date = daily_date(note_path).unwrap_or_default();
            if date.is_empty() {
                debug!("{} could not be resolved from {:?}", DAILY_TOKEN, note_path);
            }
            (date_type, date)
        }
        Some((date_type, value)) => (date_type, value),
        None => (DateType::default(), today.format(DATE_FORMAT).to_string()),
    };

    FilterOptions {
        date_type,
        date,
        tags,
        collection,
    }
}

/// Split `created:<value>` / `modified:<value>` into its parts
fn parse_date_directive(line: &str) -> Option<(DateType, &str)> {
    let (keyword, value) = line.split_once(':')?;
    let date_type = DateType::from_keyword(keyword)?;
    Some((date_type, value.trim()))
}

/// Derive a `YYYY-MM-DD` date from a daily note's file name
fn daily_date(note_path: Option<&Path>) -> Option<String> {
    let file_name = note_path?.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(".md").unwrap_or(file_name);

    // chrono accepts unpadded fields, so pin the width as well
    if stem.len() != 10 || NaiveDate::parse_from_str(stem, DATE_FORMAT).is_err() {
        return None;
    }
    Some(stem.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn empty_block_defaults_to_today() {
        let options = parse_options_at("", None, today());
        assert_eq!(options.date_type, DateType::Created);
        assert_eq!(options.date, "2025-03-14");
        assert!(options.tags.is_empty());
        assert!(options.collection.is_empty());
    }

    #[test]
    fn default_date_uses_local_clock() {
        let options = parse_options("#tag", None);
        let expected = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(options.date, expected);
    }

    #[test]
    fn daily_token_uses_note_file_name() {
        let path = PathBuf::from("vault/journal/2024-06-01.md");
        let options = parse_options_at("created:{daily}", Some(&path), today());
        assert_eq!(options.date_type, DateType::Created);
        assert_eq!(options.date, "2024-06-01");
    }

    #[test]
    fn daily_token_without_path_is_unresolved() {
        let options = parse_options_at("modified:{daily}", None, today());
        assert_eq!(options.date_type, DateType::Modified);
        assert!(!options.has_date());
    }

    #[test]
    fn daily_token_with_non_date_name_is_unresolved() {
        for name in ["Meeting notes.md", "2024-6-1.md", "2024-13-01.md", "2024-06-01-extra.md"] {
            let path = PathBuf::from(name);
            let options = parse_options_at("created:{daily}", Some(&path), today());
            assert_eq!(options.date, "", "{name} should not resolve");
        }
    }

    #[test]
    fn daily_token_accepts_name_without_extension() {
        let path = PathBuf::from("2024-06-01");
        let options = parse_options_at("created:{daily}", Some(&path), today());
        assert_eq!(options.date, "2024-06-01");
    }

    #[test]
    fn literal_date_is_trimmed() {
        let options = parse_options_at("  modified:   2023-12-31  ", None, today());
        assert_eq!(options.date_type, DateType::Modified);
        assert_eq!(options.date, "2023-12-31");
    }

    #[test]
    fn last_date_directive_wins() {
        let source = "created:2024-01-01\nmodified:2024-02-02";
        let options = parse_options_at(source, None, today());
        assert_eq!(options.date_type, DateType::Modified);
        assert_eq!(options.date, "2024-02-02");
    }

    #[test]
    fn tags_keep_order_and_duplicates() {
        let source = "#work\n#urgent\n#work";
        let options = parse_options_at(source, None, today());
        assert_eq!(options.tags, vec!["work", "urgent", "work"]);
    }

    #[test]
    fn bare_hash_is_ignored() {
        let options = parse_options_at("#\n#  \n#ok", None, today());
        assert_eq!(options.tags, vec!["ok"]);
    }

    #[test]
    fn last_collection_wins() {
        let source = "@Inbox\n#tag\n@Reading";
        let options = parse_options_at(source, None, today());
        assert_eq!(options.collection, "Reading");
    }

    #[test]
    fn unrecognized_lines_are_ignored() {
        let source = "hello world\nupdated:2024-01-01\nCreated:2024-01-01\n\n";
        let options = parse_options_at(source, None, today());
        assert_eq!(options, parse_options_at("", None, today()));
    }

    #[test]
    fn mixed_block() {
        let path = PathBuf::from("2024-06-01.md");
        let source = "modified:{daily}\n  #rust \n@Dev Reading\n#async";
        let options = parse_options_at(source, Some(&path), today());
        assert_eq!(
            options,
            FilterOptions {
                date_type: DateType::Modified,
                date: "2024-06-01".to_string(),
                tags: vec!["rust".to_string(), "async".to_string()],
                collection: "Dev Reading".to_string(),
            }
        );
    }
}
