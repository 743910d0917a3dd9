//! The two lookups the API supports and how each one is put on the wire.

use std::fmt;

use url::Url;

/// What a single request asks the API for.
///
/// A term lookup hits `/define?term=...`; a random lookup hits `/random`
/// with no query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// Definitions for a specific term.
    Term(String),
    /// A page of random words.
    Random,
}

impl Lookup {
    /// Creates a term lookup.
    pub fn term(term: impl Into<String>) -> Self {
        Lookup::Term(term.into())
    }

    /// Endpoint path relative to the API base URL.
    pub fn path(&self) -> &'static str {
        match self {
            Lookup::Term(_) => "/define",
            Lookup::Random => "/random",
        }
    }

    /// Appends this lookup's parameters to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Lookup::Term(term) = self {
            url.query_pairs_mut().append_pair("term", term);
        }
        url
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lookup::Term(term) => write!(f, "term \"{}\"", term),
            Lookup::Random => write!(f, "random"),
        }
    }
}
