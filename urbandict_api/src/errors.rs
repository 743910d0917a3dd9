//! Error types for the API client.

use crate::query::Lookup;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The API answered with a status other than 200. The body is not read.
    #[error("Request failed with status {status}")]
    ConnectionFailure { status: u16 },

    /// The API answered 200 but returned no words for the lookup.
    #[error("{}", not_found_message(.lookup))]
    NotFound { lookup: Lookup },

    /// The body was not JSON, or a record was missing or mistyping a field.
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("Network error")]
    Network(#[from] reqwest::Error),

    #[error("Search term must not be empty")]
    EmptyTerm,

    /// An operation was attempted after [`Client::close`](crate::Client::close).
    #[error("Client is closed")]
    Closed,

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

fn not_found_message(lookup: &Lookup) -> String {
    match lookup {
        Lookup::Term(term) => format!("Word \"{}\" not found", term),
        Lookup::Random => "No random word returned".to_string(),
    }
}
