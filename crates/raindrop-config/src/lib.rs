//! # raindrop-config
//!
//! The only durable state raindrop-notes keeps: a single settings blob
//! holding the Raindrop API key.
//!
//! ```json
//! { "apiKey": "..." }
//! ```
//!
//! # Resolution Priority
//!
//! [`resolve_api_key`] checks sources in this order:
//! 1. Environment variable (`RAINDROP_API_KEY`)
//! 2. Settings file value

#![warn(missing_docs)]
#![warn(clippy::all)]

mod settings;

pub use settings::*;
