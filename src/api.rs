// API client module: contains a small blocking HTTP client that talks to
// the DigitalOcean Functions Challenge endpoint. It is intentionally
// small and synchronous: the program performs exactly one POST and exits.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::cli::Category;

/// Production endpoint for the challenge API.
pub const API_URL: &str = "https://functionschallenge.digitalocean.com/api/sammy";

/// Simple API client that holds a reqwest blocking client and the URL of
/// the creation endpoint.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    url: String,
}

/// Payload for creating a Sammy. Fields mirror the service expectations:
/// the category travels under the wire key `type`. Inputs are stored
/// verbatim, with no trimming or normalization.
#[derive(Serialize, Debug)]
pub struct CreationRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub category: Category,
}

impl CreationRequest {
    pub fn new(name: String, category: Category) -> Self {
        CreationRequest { name, category }
    }
}

impl ApiClient {
    /// Create an ApiClient pointed at the URL in the environment variable
    /// `SAMMY_API_URL`, or fallback to the production endpoint.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("SAMMY_API_URL").unwrap_or_else(|_| API_URL.into());
        Self::with_url(url)
    }

    /// Create an ApiClient pointed at an explicit endpoint URL.
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient { client, url: url.into() })
    }

    /// The fixed header pair sent with every request: `Accept` and
    /// `Content-Type`, both `application/json`.
    pub fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// POST the creation request and return the raw response body. The
    /// status code is not consulted: the service signals validation
    /// failures through the body shape, which `outcome::Outcome`
    /// classifies. A transport failure surfaces as an error.
    pub fn create(&self, req: &CreationRequest) -> Result<String> {
        let res = self
            .client
            .post(&self.url)
            .headers(Self::json_headers())
            .json(req)
            .send()
            .context("Failed to send creation request")?;
        res.text().context("Failed to read response body")
    }
}
