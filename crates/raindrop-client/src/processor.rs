//! Turns raindrop blocks into render output
//!
//! This is the top of the processing stack: every failure is converted into a
//! single status line here and nothing propagates to the host.

use raindrop_core::{extract_blocks, parse_options, RenderOutput, RenderSink};
use std::path::Path;
use tracing::{debug, warn};

use crate::client::BookmarkSource;
use crate::error::FetchError;

/// Processes raindrop blocks against a bookmark source
pub struct BlockProcessor<S> {
    source: S,
    api_key: String,
}

impl<S: BookmarkSource> BlockProcessor<S> {
    /// Create a processor that authenticates with `api_key`
    pub fn new(source: S, api_key: impl Into<String>) -> Self {
        Self {
            source,
            api_key: api_key.into(),
        }
    }

    /// Process one block's directive text
    ///
    /// `note_path` is the path of the note containing the block; it is used
    /// to resolve `{daily}` dates.
    pub async fn process(&self, source: &str, note_path: Option<&Path>) -> RenderOutput {
        let options = parse_options(source, note_path);
        if !options.has_date() {
            debug!("Date filter unresolved, skipping fetch");
            return RenderOutput::NoResults;
        }

        match self.source.fetch_bookmarks(&self.api_key, &options).await {
            Ok(bookmarks) => {
                debug!("Fetched {} bookmark(s)", bookmarks.len());
                RenderOutput::from_bookmarks(bookmarks)
            }
            Err(FetchError::MissingApiKey) => RenderOutput::MissingApiKey,
            Err(e) => {
                warn!("Bookmark fetch failed: {}", e);
                RenderOutput::Error(e.to_string())
            }
        }
    }

    /// Process one block and hand the result to `sink`
    pub async fn process_into(
        &self,
        source: &str,
        note_path: Option<&Path>,
        sink: &mut dyn RenderSink,
    ) {
        let output = self.process(source, note_path).await;
        sink.render(output);
    }

    /// Process every raindrop block of a Markdown note, in document order
    pub async fn process_note(&self, markdown: &str, note_path: Option<&Path>) -> Vec<RenderOutput> {
        let mut outputs = Vec::new();
        for block in extract_blocks(markdown) {
            debug!("Processing raindrop block {}", block.index);
            outputs.push(self.process(&block.source, note_path).await);
        }
        outputs
    }
}
