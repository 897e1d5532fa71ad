use chrono::{DateTime, TimeZone, Utc};
use reqwest::StatusCode;
use reqwest::redirect::Policy;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::core::error::QuoteError;

/// Base URL used when `fetch_quotes` is called with an empty override.
pub const DEFAULT_BASE_URL: &str = "http://apilayer.net/api/";

/// Output format flag sent unless the caller overrides it.
pub const DEFAULT_FORMAT: &str = "1";

/// Parameters of a `live` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub access_key: String,
    pub currencies: Vec<String>,
    /// Base currency; empty defers to the provider default (USD).
    pub source: String,
    pub format: String,
}

impl Default for RequestConfig {
    fn default() -> Self {
        RequestConfig {
            access_key: String::new(),
            currencies: Vec::new(),
            source: String::new(),
            format: DEFAULT_FORMAT.to_string(),
        }
    }
}

impl RequestConfig {
    /// Values are written verbatim, without percent-encoding. Currencies are
    /// joined with a literal comma as the provider expects.
    pub fn to_query_params(&self) -> String {
        format!(
            "access_key={}&currencies={}&source={}&format={}",
            self.access_key,
            self.currencies.join(","),
            self.source,
            self.format
        )
    }
}

// Every field is optional: the provider may omit a key or send `null`, and
// both mean the zero value.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct LiveResponse {
    success: Option<bool>,
    timestamp: Option<i64>,
    source: Option<String>,
    quotes: Option<HashMap<String, f64>>,
    error: Option<LiveError>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct LiveError {
    code: Option<i64>,
    #[serde(rename = "type")]
    kind: Option<String>,
    info: Option<String>,
}

/// Quotes returned by a successful `live` call, keyed by pair code (e.g. `USDKES`).
#[derive(Debug, Clone)]
pub struct QuoteCollection {
    quote_list: HashMap<String, f64>,
    source: String,
    timestamp: Option<DateTime<Utc>>,
}

impl QuoteCollection {
    pub fn all_quotes(&self) -> &HashMap<String, f64> {
        &self.quote_list
    }

    /// Looks up a rate by pair code, ignoring case.
    pub fn get_quote(&self, pair: &str) -> Option<f64> {
        self.quote_list.get(&pair.to_uppercase()).copied()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }
}

impl From<LiveResponse> for QuoteCollection {
    fn from(response: LiveResponse) -> Self {
        QuoteCollection {
            quote_list: response.quotes.unwrap_or_default(),
            source: response.source.unwrap_or_default(),
            timestamp: response
                .timestamp
                .and_then(|ts| Utc.timestamp_opt(ts, 0).single()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct QuoteClient {
    config: RequestConfig,
}

impl QuoteClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    /// Stores the access key and resets the format flag to its default.
    pub fn set_access_key(&mut self, key: impl Into<String>) {
        self.config.access_key = key.into();
        self.config.format = DEFAULT_FORMAT.to_string();
    }

    /// Replaces the currency list. An empty list asks for all currencies.
    pub fn set_currencies<I, S>(&mut self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.currencies = codes.into_iter().map(Into::into).collect();
    }

    pub fn set_source(&mut self, code: impl Into<String>) {
        self.config.source = code.into();
    }

    pub fn set_format(&mut self, flag: impl Into<String>) {
        self.config.format = flag.into();
    }

    pub fn query_params(&self) -> String {
        self.config.to_query_params()
    }

    /// Fetches live quotes from `<base_url>live`. An empty `base_url` uses
    /// [`DEFAULT_BASE_URL`].
    #[instrument(name = "CurrencyLayerLive", skip(self), fields(base_url = %base_url))]
    pub async fn fetch_quotes(&self, base_url: &str) -> Result<QuoteCollection, QuoteError> {
        if self.config.access_key.is_empty() {
            return Err(QuoteError::MissingAccessKey);
        }

        let base_url = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };
        let url = format!("{base_url}live?{}", self.query_params());
        debug!(
            currencies = ?self.config.currencies,
            source = %self.config.source,
            "Requesting live quotes"
        );

        // Errors are stripped of the url so the access key stays out of messages.
        let client = reqwest::Client::builder()
            .user_agent("currencylayer/0.1")
            .redirect(Policy::none())
            .build()
            .map_err(reqwest::Error::without_url)?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        debug!(%status, "Received currencylayer response");

        if status != StatusCode::OK {
            return Err(QuoteError::Status(status));
        }

        let data: LiveResponse = serde_json::from_str(&body)?;
        if !data.success.unwrap_or_default() {
            let error = data.error.unwrap_or_default();
            return Err(QuoteError::Provider {
                code: error.code.unwrap_or_default(),
                kind: error.kind.unwrap_or_default(),
                info: error.info.unwrap_or_default(),
            });
        }

        let quotes = QuoteCollection::from(data);
        debug!(count = quotes.all_quotes().len(), "Parsed live quotes");
        Ok(quotes)
    }
}
