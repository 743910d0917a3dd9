//! Who owns the HTTP connection pool a [`Client`](crate::Client) talks through.

use std::time::Duration;

use crate::Error;

/// Request timeout for connection pools the client builds itself.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The HTTP transport behind a client.
///
/// `Owned` pools were created by the client and are released on close.
/// `Borrowed` pools belong to the caller; the client only holds a handle
/// and never shuts them down.
#[derive(Debug)]
pub(crate) enum Transport {
    Owned(reqwest::Client),
    Borrowed(reqwest::Client),
}

impl Transport {
    pub(crate) fn owned() -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;
        Ok(Transport::Owned(client))
    }

    pub(crate) fn borrowed(client: reqwest::Client) -> Self {
        Transport::Borrowed(client)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        match self {
            Transport::Owned(client) | Transport::Borrowed(client) => client,
        }
    }

    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Transport::Owned(_))
    }

    /// Consumes the transport. Owned pools are dropped here, which closes
    /// their idle connections; borrowed pools are left to the caller.
    pub(crate) fn release(self) {
        match self {
            Transport::Owned(client) => {
                tracing::debug!("Closing owned connection pool");
                drop(client);
            }
            Transport::Borrowed(_) => {
                tracing::debug!("Leaving caller-owned connection pool open");
            }
        }
    }
}
