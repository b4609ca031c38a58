//! Enrichment nodes
//!
//! Enrichers carry no settings on the wire, except NER enrichments with a
//! prompt override which encode
//! `{"prompt_interface_overrides": {"prompt": {"user": <text>}}}`.

use crate::error::{Error, Result};
use crate::registry::has_duplicates;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

const PROMPT_OVERRIDE_POINTER: &str = "/prompt_interface_overrides/prompt/user";

/// Enrichment kind, carried as the node subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentType {
    OpenaiImageDescription,
    OpenaiTableDescription,
    #[serde(rename = "openai_table2html")]
    OpenaiTable2Html,
    OpenaiNer,
    AnthropicImageDescription,
    AnthropicTableDescription,
    AnthropicNer,
    BedrockImageDescription,
    BedrockTableDescription,
}

impl EnrichmentType {
    /// Every enrichment kind
    pub const ALL: &'static [EnrichmentType] = &[
        EnrichmentType::OpenaiImageDescription,
        EnrichmentType::OpenaiTableDescription,
        EnrichmentType::OpenaiTable2Html,
        EnrichmentType::OpenaiNer,
        EnrichmentType::AnthropicImageDescription,
        EnrichmentType::AnthropicTableDescription,
        EnrichmentType::AnthropicNer,
        EnrichmentType::BedrockImageDescription,
        EnrichmentType::BedrockTableDescription,
    ];

    /// Wire subtype of every kind, in [`EnrichmentType::ALL`] order
    pub const SUBTYPES: [&'static str; 9] = [
        EnrichmentType::OpenaiImageDescription.as_str(),
        EnrichmentType::OpenaiTableDescription.as_str(),
        EnrichmentType::OpenaiTable2Html.as_str(),
        EnrichmentType::OpenaiNer.as_str(),
        EnrichmentType::AnthropicImageDescription.as_str(),
        EnrichmentType::AnthropicTableDescription.as_str(),
        EnrichmentType::AnthropicNer.as_str(),
        EnrichmentType::BedrockImageDescription.as_str(),
        EnrichmentType::BedrockTableDescription.as_str(),
    ];

    /// Wire subtype
    pub const fn as_str(&self) -> &'static str {
        match self {
            EnrichmentType::OpenaiImageDescription => "openai_image_description",
            EnrichmentType::OpenaiTableDescription => "openai_table_description",
            EnrichmentType::OpenaiTable2Html => "openai_table2html",
            EnrichmentType::OpenaiNer => "openai_ner",
            EnrichmentType::AnthropicImageDescription => "anthropic_image_description",
            EnrichmentType::AnthropicTableDescription => "anthropic_table_description",
            EnrichmentType::AnthropicNer => "anthropic_ner",
            EnrichmentType::BedrockImageDescription => "bedrock_image_description",
            EnrichmentType::BedrockTableDescription => "bedrock_table_description",
        }
    }

    /// Look up a kind by its wire subtype
    pub fn from_subtype(subtype: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.as_str() == subtype)
    }

    /// Whether the kind accepts a prompt override
    pub fn is_ner(&self) -> bool {
        matches!(self, EnrichmentType::OpenaiNer | EnrichmentType::AnthropicNer)
    }

    /// Categories the kind counts against, matched on the subtype string
    pub fn categories(&self) -> Vec<EnrichmentCategory> {
        let subtype = self.as_str();
        EnrichmentCategory::ALL
            .iter()
            .copied()
            .filter(|category| subtype.contains(category.marker()))
            .collect()
    }
}

const _: () = assert!(
    !has_duplicates(&EnrichmentType::SUBTYPES),
    "duplicate enrichment subtype"
);

impl fmt::Display for EnrichmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enrichment category; a workflow may hold at most one of each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnrichmentCategory {
    Image,
    Table,
    Ner,
}

impl EnrichmentCategory {
    const ALL: &'static [EnrichmentCategory] = &[
        EnrichmentCategory::Image,
        EnrichmentCategory::Table,
        EnrichmentCategory::Ner,
    ];

    fn marker(&self) -> &'static str {
        match self {
            EnrichmentCategory::Image => "image",
            EnrichmentCategory::Table => "table",
            EnrichmentCategory::Ner => "ner",
        }
    }
}

impl fmt::Display for EnrichmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrichmentCategory::Image => f.write_str("image"),
            EnrichmentCategory::Table => f.write_str("table"),
            EnrichmentCategory::Ner => f.write_str("NER"),
        }
    }
}

/// Enrich partitioned elements with a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enricher {
    pub kind: EnrichmentType,
    /// User prompt override, only sent for NER kinds
    pub ner_prompt_override: Option<String>,
}

impl Enricher {
    pub fn new(kind: EnrichmentType) -> Self {
        Self {
            kind,
            ner_prompt_override: None,
        }
    }

    /// Set the NER user prompt
    pub fn with_prompt_override(mut self, prompt: impl Into<String>) -> Self {
        self.ner_prompt_override = Some(prompt.into());
        self
    }

    /// Envelope subtype
    pub fn subtype(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Settings object, or `None` when the node carries no settings
    pub(crate) fn settings(&self) -> Option<JsonValue> {
        match &self.ner_prompt_override {
            Some(prompt) if self.kind.is_ner() && !prompt.is_empty() => Some(json!({
                "prompt_interface_overrides": {"prompt": {"user": prompt}}
            })),
            _ => None,
        }
    }

    pub(crate) fn decode(subtype: &str, settings: JsonValue) -> Result<Self> {
        let kind = EnrichmentType::from_subtype(subtype)
            .ok_or_else(|| Error::unknown_variant("enrichment", subtype))?;
        let ner_prompt_override = settings
            .pointer(PROMPT_OVERRIDE_POINTER)
            .and_then(JsonValue::as_str)
            .filter(|prompt| !prompt.is_empty())
            .map(str::to_string);
        Ok(Self {
            kind,
            ner_prompt_override,
        })
    }
}

impl From<EnrichmentType> for Enricher {
    fn from(kind: EnrichmentType) -> Self {
        Enricher::new(kind)
    }
}
