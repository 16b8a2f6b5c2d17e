//! # raindrop-client
//!
//! Fetches bookmarks from Raindrop.io for a parsed filter and turns raindrop
//! blocks into [`raindrop_core::RenderOutput`].
//!
//! ```no_run
//! use raindrop_client::{BlockProcessor, RaindropClient};
//! use raindrop_core::render_markdown;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let processor = BlockProcessor::new(RaindropClient::new()?, "my-api-key");
//! let output = processor.process("#rust\n@Reading", None).await;
//! println!("{}", render_markdown(&output));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod processor;
pub mod refresh;
pub mod types;

pub use client::{BookmarkSource, RaindropClient};
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL};
pub use error::{ApiError, FetchError, Result};
pub use processor::BlockProcessor;
pub use refresh::{
    IntervalScheduler, RefreshLoop, RefreshScheduler, DEFAULT_REFRESH_INTERVAL,
    MAX_REFRESH_INTERVAL,
};
