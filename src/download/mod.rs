//! HTTP probing and streaming downloads.
//!
//! This module provides the leaf utility of the tool: given a URL it can
//! check remote availability with a bounded HEAD request, or stream a GET
//! response body to a local file while feeding a progress sink.
//!
//! # Example
//!
//! ```no_run
//! use lecture_mirror_core::download::HttpClient;
//! use lecture_mirror_core::progress::NoProgress;
//! use std::path::Path;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new();
//! let url = Url::parse("https://example.org/lectures/00/Slides00.pdf")?;
//! if client.probe(&url).await?.as_u16() == 200 {
//!     client
//!         .fetch_to_path(&url, Path::new("Slides00.pdf"), &NoProgress)
//!         .await?;
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::HttpClient;
pub use error::DownloadError;
