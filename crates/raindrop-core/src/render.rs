//! Output handed to the note renderer
//!
//! A raindrop block always renders as exactly one of: a bookmark list, or a
//! single status line. Partial lists are never shown.

use serde::{Deserialize, Serialize};

use crate::types::Bookmark;

/// Status line for an empty result
pub const NO_RESULTS_MESSAGE: &str = "No Results";

/// Status line when no API key has been configured
pub const MISSING_API_KEY_MESSAGE: &str =
    "No API Key Specified. Set one with `raindrop config set-key`.";

/// Result of processing one raindrop block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum RenderOutput {
    /// Nothing matched, or the date filter could not be resolved
    NoResults,
    /// The API key is not set
    MissingApiKey,
    /// The fetch failed; carries a one-line message
    Error(String),
    /// Bookmarks in the order the service returned them
    Bookmarks(Vec<Bookmark>),
}

impl RenderOutput {
    /// Wrap a bookmark list, collapsing an empty list to `NoResults`
    pub fn from_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        if bookmarks.is_empty() {
            RenderOutput::NoResults
        } else {
            RenderOutput::Bookmarks(bookmarks)
        }
    }

    /// Whether this output is a status line rather than a list
    pub fn is_status(&self) -> bool {
        !matches!(self, RenderOutput::Bookmarks(_))
    }
}

/// Receiver for rendered block output
///
/// Hosts implement this to put the output wherever the note is displayed.
pub trait RenderSink {
    /// Display the output of one block
    fn render(&mut self, output: RenderOutput);
}

/// Sink that collects Markdown text
#[derive(Debug, Default)]
pub struct MarkdownSink {
    rendered: Vec<String>,
}

impl MarkdownSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered blocks, one entry per `render` call
    pub fn rendered(&self) -> &[String] {
        &self.rendered
    }

    /// Consume the sink and return the rendered blocks
    pub fn into_rendered(self) -> Vec<String> {
        self.rendered
    }
}

impl RenderSink for MarkdownSink {
    fn render(&mut self, output: RenderOutput) {
        self.rendered.push(render_markdown(&output));
    }
}

/// Render output as Markdown
///
/// Bookmarks become list items annotated with their collection and tags:
///
/// ```text
/// - [Title](https://example.com) (Reading) #rust #async
/// ```
pub fn render_markdown(output: &RenderOutput) -> String {
    match output {
        RenderOutput::NoResults => NO_RESULTS_MESSAGE.to_string(),
        RenderOutput::MissingApiKey => MISSING_API_KEY_MESSAGE.to_string(),
        RenderOutput::Error(message) => format!("Error fetching bookmarks: {}", message),
        RenderOutput::Bookmarks(bookmarks) => bookmarks
            .iter()
            .map(render_bookmark)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn render_bookmark(bookmark: &Bookmark) -> String {
    let label = if bookmark.title.is_empty() {
        &bookmark.link
    } else {
        &bookmark.title
    };

    let mut line = format!(
        "- [{}]({}) ({})",
        escape_label(label),
        escape_destination(&bookmark.link),
        bookmark.collection.title
    );
    for tag in &bookmark.tags {
        line.push_str(" #");
        line.push_str(tag);
    }
    line
}

fn escape_label(label: &str) -> String {
    label.replace('[', "\\[").replace(']', "\\]")
}

/// Percent-encode the characters that end or split a link destination
fn escape_destination(link: &str) -> String {
    link.replace(' ', "%20")
        .replace('(', "%28")
        .replace(')', "%29")
        .replace('<', "%3C")
        .replace('>', "%3E")
}
