//! Locate raindrop blocks inside a Markdown note

use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};

/// Info string that marks a fenced block as a bookmark list
pub const BLOCK_LANGUAGE: &str = "raindrop";

/// A fenced ```` ```raindrop ```` block found in a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaindropBlock {
    /// Position among the raindrop blocks of the note, starting at 0
    pub index: usize,
    /// Raw directive text between the fences
    pub source: String,
}

/// Extract every raindrop block from a Markdown document, in document order
pub fn extract_blocks(markdown: &str) -> Vec<RaindropBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<String> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info))) => {
                let language = info.split_whitespace().next().unwrap_or_default();
                if language == BLOCK_LANGUAGE {
                    current = Some(String::new());
                }
            }
            Event::Text(text) => {
                if let Some(source) = current.as_mut() {
                    source.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(source) = current.take() {
                    blocks.push(RaindropBlock {
                        index: blocks.len(),
                        source,
                    });
                }
            }
            _ => {}
        }
    }

    blocks
}
