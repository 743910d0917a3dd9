//! HTTP client for the Urban Dictionary API.

use url::Url;

use crate::{
    query::Lookup,
    transport::Transport,
    types::{DefineResponse, RawRecord, WordEntry},
    Error,
};

/// Base URL of the public API.
pub const DEFAULT_BASE_URL: &str = "https://api.urbandictionary.com/v0";

/// Number of results [`Client::search`] callers conventionally ask for.
pub const DEFAULT_SEARCH_LIMIT: usize = 3;

/// HTTP client for the Urban Dictionary API.
///
/// Every operation performs exactly one GET request. There is no retry,
/// caching or pagination. Operations take `&self` and may run
/// concurrently; [`close`](Self::close) needs `&mut self`.
#[derive(Debug)]
pub struct Client {
    /// Base URL for the API, without a trailing slash.
    base_api_url: String,
    /// `None` once the client has been closed.
    transport: Option<Transport>,
}

impl Client {
    /// Creates a client pointing at the production API, with its own connection pool.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL and its own connection pool.
    /// Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Ok(Self {
            base_api_url: normalize_base_url(base_url)?,
            transport: Some(Transport::owned()?),
        })
    }

    /// Creates a client that sends requests through a caller-owned `reqwest::Client`.
    ///
    /// [`close`](Self::close) will not shut that pool down; it stays usable
    /// by the caller for as long as they hold it.
    pub fn with_http_client(http: reqwest::Client) -> Self {
        Self {
            base_api_url: DEFAULT_BASE_URL.to_string(),
            transport: Some(Transport::borrowed(http)),
        }
    }

    /// Like [`with_http_client`](Self::with_http_client), with a custom base URL.
    pub fn with_http_client_and_base_url(
        http: reqwest::Client,
        base_url: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            base_api_url: normalize_base_url(base_url)?,
            transport: Some(Transport::borrowed(http)),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    pub fn is_closed(&self) -> bool {
        self.transport.is_none()
    }

    /// Whether the connection pool was created by this client.
    /// Always `false` once closed.
    pub fn owns_transport(&self) -> bool {
        self.transport.as_ref().is_some_and(Transport::is_owned)
    }

    /// Closes the client. Later operations fail with [`Error::Closed`].
    ///
    /// A pool the client created is released; a caller-supplied pool is left
    /// open. Closing twice is a no-op.
    pub fn close(&mut self) {
        if let Some(transport) = self.transport.take() {
            transport.release();
        }
    }

    fn get_url(&self, lookup: &Lookup) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, lookup.path()).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::InvalidBaseUrl(e)
            })?;
        Ok(lookup.add_to_url(&url))
    }

    /// Performs one request for `lookup` and returns the decoded body.
    ///
    /// The returned `list` is never empty. Fails with
    /// [`Error::ConnectionFailure`] on any status other than 200 without
    /// reading the body, with [`Error::NotFound`] when the list is empty or
    /// missing, and with [`Error::MalformedResponse`] when the body is not
    /// the expected JSON shape.
    pub async fn fetch(&self, lookup: &Lookup) -> Result<DefineResponse, Error> {
        let transport = self.transport.as_ref().ok_or(Error::Closed)?;
        if let Lookup::Term(term) = lookup {
            if term.trim().is_empty() {
                return Err(Error::EmptyTerm);
            }
        }

        let url = self.get_url(lookup)?;
        tracing::debug!("GET {}", url);
        let resp = transport.http().get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get {}: {}", lookup, e);
            Error::Network(e)
        })?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            tracing::error!("Request for {} failed with status {}", lookup, status);
            return Err(Error::ConnectionFailure {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;
        let parsed = serde_json::from_str::<DefineResponse>(&body).map_err(|e| {
            tracing::error!("Failed to parse response: {} | body: {}", e, truncate_body(&body));
            Error::MalformedResponse(e)
        })?;

        if parsed.list.is_empty() {
            tracing::debug!("No results for {}", lookup);
            return Err(Error::NotFound {
                lookup: lookup.clone(),
            });
        }
        Ok(parsed)
    }

    /// Fetches the first (top-ranked) definition of `term`.
    pub async fn get_word(&self, term: &str) -> Result<WordEntry, Error> {
        WordEntry::try_from(self.get_word_raw(term).await?)
    }

    /// Fetches up to `limit` definitions of `term`, in the order the API ranks them.
    ///
    /// The API only returns a fixed-size page, so `limit` may exceed what is
    /// available; all available definitions are returned in that case.
    /// A `limit` of zero yields an empty vector.
    pub async fn search(&self, term: &str, limit: usize) -> Result<Vec<WordEntry>, Error> {
        self.search_raw(term, limit)
            .await?
            .into_iter()
            .map(WordEntry::try_from)
            .collect()
    }

    /// Fetches one random definition.
    pub async fn get_random(&self) -> Result<WordEntry, Error> {
        WordEntry::try_from(self.get_random_raw().await?)
    }

    /// Like [`get_word`](Self::get_word), returning the record untouched.
    pub async fn get_word_raw(&self, term: &str) -> Result<RawRecord, Error> {
        let resp = self.fetch(&Lookup::term(term)).await?;
        Ok(first(resp))
    }

    /// Like [`search`](Self::search), returning the records untouched.
    pub async fn search_raw(&self, term: &str, limit: usize) -> Result<Vec<RawRecord>, Error> {
        let mut resp = self.fetch(&Lookup::term(term)).await?;
        resp.list.truncate(limit);
        Ok(resp.list)
    }

    /// Like [`get_random`](Self::get_random), returning the record untouched.
    pub async fn get_random_raw(&self) -> Result<RawRecord, Error> {
        let resp = self.fetch(&Lookup::Random).await?;
        Ok(first(resp))
    }
}

fn first(resp: DefineResponse) -> RawRecord {
    // fetch never returns an empty list
    resp.list.into_iter().next().unwrap_or_default()
}

fn normalize_base_url(base_url: &str) -> Result<String, Error> {
    let trimmed = base_url.trim_end_matches('/');
    Url::parse(trimmed)?;
    Ok(trimmed.to_string())
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let client = Client::with_base_url("http://localhost:3000/v0/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/v0");
    }

    #[test]
    fn get_url_for_term() {
        let client = Client::with_base_url("http://localhost:3000/v0").unwrap();
        let url = client.get_url(&Lookup::term("foo")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/v0/define?term=foo");
    }

    #[test]
    fn get_url_for_random() {
        let client = Client::with_base_url("http://localhost:3000/v0").unwrap();
        let url = client.get_url(&Lookup::Random).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/v0/random");
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let err = Client::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));

        let err =
            Client::with_http_client_and_base_url(reqwest::Client::new(), "::").unwrap_err();
        assert!(matches!(err, Error::InvalidBaseUrl(_)));
    }

    #[test]
    fn default_client_uses_production_url() {
        let client = Client::new().unwrap();
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert!(client.owns_transport());
        assert!(!client.is_closed());
    }

    #[test]
    fn close_is_idempotent() {
        let mut client = Client::with_http_client(reqwest::Client::new());
        assert!(!client.owns_transport());
        client.close();
        client.close();
        assert!(client.is_closed());
        assert!(!client.owns_transport());
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let out = truncate_body(&body);
        assert!(out.ends_with("...[truncated]"));
    }
}
