//! Fetching the news feed.
//!
//! One [`NewsEndpoint`] describes the remote API target; [`spawn`] runs a
//! single fetch for it on a background thread and delivers the outcome to
//! the UI thread over an [`mpsc`] channel, tagged with the generation that
//! requested it.  Parsing is split out into [`parse_response`] so tests can
//! exercise it without touching the network.

use std::sync::mpsc;
use std::thread;

use serde::Deserialize;
use thiserror::Error;

use crate::feed::Article;

/// Ways a fetch can fail.  Every variant carries a human-readable message;
/// transport and JSON errors pass the underlying message through verbatim.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("No news data found")]
    NoData,
}

/// The configured `latest-news` target.
///
/// The API key is an injected value; nothing in this module reads process
/// environment or any other ambient state.
#[derive(Clone)]
pub struct NewsEndpoint {
    pub base_url: String,
    pub language: String,
    pub api_key: String,
}

impl NewsEndpoint {
    pub fn new(
        base_url: impl Into<String>,
        language: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            language: language.into(),
            api_key: api_key.into(),
        }
    }

    /// The fully-formed request URL.
    pub fn request_url(&self) -> String {
        format!(
            "{}/latest-news?language={}&apiKey={}",
            self.base_url, self.language, self.api_key
        )
    }

    /// Issue exactly one GET and parse the body.
    ///
    /// No retry and no timeout beyond what the transport enforces.
    pub fn fetch(&self) -> Result<Vec<Article>, FetchError> {
        let body = reqwest::blocking::get(self.request_url())?.text()?;
        parse_response(&body)
    }
}

/// Parse a response body into the raw article list.
///
/// Pure function (no I/O).  A body that is not JSON is a [`FetchError::Json`];
/// valid JSON where `news` is absent, null, or not an array is
/// [`FetchError::NoData`].
pub fn parse_response(body: &str) -> Result<Vec<Article>, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    match value.get("news") {
        Some(news) if news.is_array() => Ok(Vec::<Article>::deserialize(news)?),
        _ => Err(FetchError::NoData),
    }
}

// ---------------------------------------------------------------------------
// Background fetch thread
// ---------------------------------------------------------------------------

/// Outcome of one fetch, delivered to the UI thread.
///
/// `generation` identifies which request produced this result; the app drops
/// messages from generations older than its current one so a slow response
/// can never clobber the state of a newer fetch.
pub struct FetchMsg {
    pub generation: u64,
    pub result: Result<Vec<Article>, FetchError>,
}

/// Run one fetch on a background thread.
///
/// Returns the receiving end; exactly one [`FetchMsg`] arrives and then the
/// channel closes.  If the receiver is dropped first the result is discarded
/// silently.
pub fn spawn(endpoint: NewsEndpoint, generation: u64) -> mpsc::Receiver<FetchMsg> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let result = endpoint.fetch();
        let _ = tx.send(FetchMsg { generation, result });
    });

    rx
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
