//! Async client for the Urban Dictionary API.
//!
//! ```no_run
//! # async fn demo() -> Result<(), urbandict_api::Error> {
//! let mut client = urbandict_api::Client::new()?;
//! let word = client.get_word("yeet").await?;
//! println!("{}: {}", word, word.definition());
//! client.close();
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod query;
mod transport;
pub mod types;
pub use self::client::{Client, DEFAULT_BASE_URL, DEFAULT_SEARCH_LIMIT};
pub use self::errors::Error;
pub use self::query::Lookup;
pub use self::transport::REQUEST_TIMEOUT;
