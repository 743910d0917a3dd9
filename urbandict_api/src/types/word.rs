//! The typed view of a single definition.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::RawRecord;
use crate::Error;

/// Upstream numeric identifier of a definition.
pub type DefinitionID = u64;

/// One definition of a word, as published on Urban Dictionary.
///
/// Built once from an upstream record and never mutated. Equality and
/// hashing only consider [`definition_id`](Self::definition_id): the same
/// word usually has many definitions, each with its own id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    #[serde(rename = "defid")]
    definition_id: DefinitionID,

    #[serde(rename = "word")]
    term: String,

    author: String,

    permalink: String,

    definition: String,

    example: String,

    #[serde(rename = "thumbs_up")]
    upvotes: i64,

    #[serde(rename = "thumbs_down")]
    downvotes: i64,

    /// Always observed empty, kept verbatim in case that changes.
    current_vote: String,
}

impl WordEntry {
    pub fn definition_id(&self) -> DefinitionID {
        self.definition_id
    }

    /// The headword this definition belongs to.
    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    /// Link to the definition's page on the website.
    pub fn permalink(&self) -> &str {
        &self.permalink
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Usage example text.
    pub fn example(&self) -> &str {
        &self.example
    }

    pub fn upvotes(&self) -> i64 {
        self.upvotes
    }

    pub fn downvotes(&self) -> i64 {
        self.downvotes
    }

    /// `(upvotes, downvotes)`.
    pub fn votes(&self) -> (i64, i64) {
        (self.upvotes, self.downvotes)
    }

    pub fn current_vote(&self) -> &str {
        &self.current_vote
    }
}

impl TryFrom<RawRecord> for WordEntry {
    type Error = Error;

    fn try_from(record: RawRecord) -> Result<Self, Self::Error> {
        Ok(serde_json::from_value(serde_json::Value::Object(record))?)
    }
}

impl TryFrom<&RawRecord> for WordEntry {
    type Error = Error;

    fn try_from(record: &RawRecord) -> Result<Self, Self::Error> {
        Self::try_from(record.clone())
    }
}

impl PartialEq for WordEntry {
    fn eq(&self, other: &Self) -> bool {
        self.definition_id == other.definition_id
    }
}

impl Eq for WordEntry {}

impl Hash for WordEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.definition_id.hash(state);
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.term)
    }
}
