//! Chunker nodes
//!
//! Every chunker encodes `contextual_chunking_strategy: "v1"` in its
//! settings regardless of what the caller set.

use super::insert_field;
use crate::error::Result;
use crate::registry::{decode_as, has_duplicates, DecodeFn, Registry};
use crate::types::JsonValue;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Contextual chunking protocol version sent with every chunker
pub const CONTEXTUAL_CHUNKING_STRATEGY: &str = "v1";

/// `chunk_by_character` subtype
pub const CHUNK_BY_CHARACTER: &str = "chunk_by_character";
/// `chunk_by_title` subtype
pub const CHUNK_BY_TITLE: &str = "chunk_by_title";
/// `chunk_by_page` subtype
pub const CHUNK_BY_PAGE: &str = "chunk_by_page";
/// `chunk_by_similarity` subtype
pub const CHUNK_BY_SIMILARITY: &str = "chunk_by_similarity";

/// Every subtype the chunker registry accepts
pub(crate) const CHUNKER_SUBTYPES: [&str; 4] = [
    CHUNK_BY_CHARACTER,
    CHUNK_BY_TITLE,
    CHUNK_BY_PAGE,
    CHUNK_BY_SIMILARITY,
];

const _: () = assert!(
    !has_duplicates(&CHUNKER_SUBTYPES),
    "duplicate discriminator in chunker registry"
);

static CHUNKERS: Lazy<Registry<Chunker>> = Lazy::new(|| {
    let entries: [(&'static str, DecodeFn<Chunker>); 4] = [
        (CHUNK_BY_CHARACTER, decode_as::<ChunkerCharacter, Chunker>),
        (CHUNK_BY_TITLE, decode_as::<ChunkerTitle, Chunker>),
        (CHUNK_BY_PAGE, decode_as::<ChunkerPage, Chunker>),
        (CHUNK_BY_SIMILARITY, decode_as::<ChunkerSimilarity, Chunker>),
    ];
    Registry::new("chunker", entries.to_vec())
});

/// A chunking strategy with its settings
#[derive(Debug, Clone, PartialEq)]
pub enum Chunker {
    Character(ChunkerCharacter),
    Title(ChunkerTitle),
    Page(ChunkerPage),
    Similarity(ChunkerSimilarity),
}

impl Chunker {
    /// Envelope subtype
    pub fn subtype(&self) -> &'static str {
        match self {
            Chunker::Character(_) => CHUNK_BY_CHARACTER,
            Chunker::Title(_) => CHUNK_BY_TITLE,
            Chunker::Page(_) => CHUNK_BY_PAGE,
            Chunker::Similarity(_) => CHUNK_BY_SIMILARITY,
        }
    }

    /// Options shared by every strategy
    pub fn options(&self) -> &ChunkerOptions {
        match self {
            Chunker::Character(c) => &c.options,
            Chunker::Title(c) => &c.options,
            Chunker::Page(c) => &c.options,
            Chunker::Similarity(c) => &c.options,
        }
    }

    pub(crate) fn settings(&self) -> serde_json::Result<JsonValue> {
        let settings = match self {
            Chunker::Character(c) => serde_json::to_value(c)?,
            Chunker::Title(c) => serde_json::to_value(c)?,
            Chunker::Page(c) => serde_json::to_value(c)?,
            Chunker::Similarity(c) => serde_json::to_value(c)?,
        };
        Ok(insert_field(
            settings,
            "contextual_chunking_strategy",
            CONTEXTUAL_CHUNKING_STRATEGY,
        ))
    }

    pub(crate) fn decode(subtype: &str, settings: JsonValue) -> Result<Self> {
        CHUNKERS.decode(subtype, settings)
    }
}

/// Options common to all chunkers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unstructured_api_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unstructured_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_orig_elements: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_after_n_chars: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_characters: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap: Option<u32>,
    pub overlap_all: bool,
}

/// Split on character counts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerCharacter {
    #[serde(flatten)]
    pub options: ChunkerOptions,
}

/// Start a new chunk at every title element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerTitle {
    #[serde(flatten)]
    pub options: ChunkerOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combine_text_under_n_chars: Option<u32>,
}

/// Start a new chunk at every page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerPage {
    #[serde(flatten)]
    pub options: ChunkerOptions,
}

/// Group topically similar elements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkerSimilarity {
    #[serde(flatten)]
    pub options: ChunkerOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_threshold: Option<f64>,
}

impl From<ChunkerCharacter> for Chunker {
    fn from(c: ChunkerCharacter) -> Self {
        Chunker::Character(c)
    }
}

impl From<ChunkerTitle> for Chunker {
    fn from(c: ChunkerTitle) -> Self {
        Chunker::Title(c)
    }
}

impl From<ChunkerPage> for Chunker {
    fn from(c: ChunkerPage) -> Self {
        Chunker::Page(c)
    }
}

impl From<ChunkerSimilarity> for Chunker {
    fn from(c: ChunkerSimilarity) -> Self {
        Chunker::Similarity(c)
    }
}
