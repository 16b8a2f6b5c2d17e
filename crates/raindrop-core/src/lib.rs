//! # raindrop-core
//!
//! Host-independent pieces of raindrop-notes: the filter directives that live
//! inside a ```` ```raindrop ```` block, the search query sent to Raindrop.io,
//! and the output handed back to whatever renders the note.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use raindrop_core::{build_search_query, parse_options_at};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let options = parse_options_at("#rust\n@Reading", None, today);
//! assert_eq!(
//!     build_search_query(&options),
//!     r#"created:2024-06-01 #rust collection:"Reading""#
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blocks;
pub mod options;
pub mod query;
pub mod render;
pub mod types;

pub use blocks::{extract_blocks, RaindropBlock, BLOCK_LANGUAGE};
pub use options::{parse_options, parse_options_at, DAILY_TOKEN};
pub use query::build_search_query;
pub use render::{render_markdown, MarkdownSink, RenderOutput, RenderSink};
pub use types::{Bookmark, Collection, DateType, FilterOptions, UNSORTED_TITLE};
