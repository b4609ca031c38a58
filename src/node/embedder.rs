//! Embedder nodes and the per-provider model allow-lists

use crate::error::{Error, Result};
use crate::registry::has_duplicates;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const AZURE_OPENAI_MODELS: &[&str] = &[
    "text-embedding-3-small",
    "text-embedding-3-large",
    "text-embedding-ada-002",
];

const BEDROCK_MODELS: &[&str] = &[
    "amazon.titan-embed-text-v2:0",
    "amazon.titan-embed-text-v1",
    "amazon.titan-embed-image-v1",
    "cohere.embed-english-v3",
    "cohere.embed-multilingual-v3",
];

const TOGETHERAI_MODELS: &[&str] = &["togethercomputer/m2-bert-80M-32k-retrieval"];

const VOYAGEAI_MODELS: &[&str] = &[
    "voyage-3",
    "voyage-3-large",
    "voyage-3-lite",
    "voyage-code-3",
    "voyage-finance-2",
    "voyage-law-2",
    "voyage-code-2",
    "voyage-multimodal-3",
];

/// Embedding provider, carried as the node subtype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmbedderProvider {
    #[serde(rename = "azure_openai")]
    AzureOpenAi,
    #[serde(rename = "bedrock")]
    Bedrock,
    #[serde(rename = "togetherai")]
    TogetherAi,
    #[serde(rename = "voyageai")]
    VoyageAi,
}

impl EmbedderProvider {
    /// Every provider
    pub const ALL: &'static [EmbedderProvider] = &[
        EmbedderProvider::AzureOpenAi,
        EmbedderProvider::Bedrock,
        EmbedderProvider::TogetherAi,
        EmbedderProvider::VoyageAi,
    ];

    /// Wire subtype of every provider, in [`EmbedderProvider::ALL`] order
    pub const SUBTYPES: [&'static str; 4] = [
        EmbedderProvider::AzureOpenAi.as_str(),
        EmbedderProvider::Bedrock.as_str(),
        EmbedderProvider::TogetherAi.as_str(),
        EmbedderProvider::VoyageAi.as_str(),
    ];

    /// Wire subtype
    pub const fn as_str(&self) -> &'static str {
        match self {
            EmbedderProvider::AzureOpenAi => "azure_openai",
            EmbedderProvider::Bedrock => "bedrock",
            EmbedderProvider::TogetherAi => "togetherai",
            EmbedderProvider::VoyageAi => "voyageai",
        }
    }

    /// Name used in error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            EmbedderProvider::AzureOpenAi => "Azure OpenAI",
            EmbedderProvider::Bedrock => "Bedrock",
            EmbedderProvider::TogetherAi => "TogetherAI",
            EmbedderProvider::VoyageAi => "VoyageAI",
        }
    }

    /// Models this provider accepts
    pub fn models(&self) -> &'static [&'static str] {
        match self {
            EmbedderProvider::AzureOpenAi => AZURE_OPENAI_MODELS,
            EmbedderProvider::Bedrock => BEDROCK_MODELS,
            EmbedderProvider::TogetherAi => TOGETHERAI_MODELS,
            EmbedderProvider::VoyageAi => VOYAGEAI_MODELS,
        }
    }

    /// Fail unless `model` is on this provider's allow-list
    pub fn validate_model(&self, model: &str) -> Result<()> {
        if self.models().contains(&model) {
            Ok(())
        } else {
            Err(Error::InvalidModel {
                provider: self.display_name().to_string(),
                model: model.to_string(),
            })
        }
    }
}

const _: () = assert!(
    !has_duplicates(&EmbedderProvider::SUBTYPES),
    "duplicate embedder subtype"
);

impl FromStr for EmbedderProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        EmbedderProvider::ALL
            .iter()
            .copied()
            .find(|provider| provider.as_str() == s)
            .ok_or_else(|| Error::UnknownEmbedderProvider {
                subtype: s.to_string(),
            })
    }
}

impl fmt::Display for EmbedderProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check a provider subtype and model pair before submitting a workflow.
///
/// An unrecognized subtype fails with [`Error::UnknownEmbedderProvider`],
/// a model outside the provider's list with [`Error::InvalidModel`].
pub fn validate_embedder_model(subtype: &str, model: &str) -> Result<()> {
    subtype.parse::<EmbedderProvider>()?.validate_model(model)
}

/// Embed chunks with a provider's model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embedder {
    pub provider: EmbedderProvider,
    pub model_name: String,
}

#[derive(Serialize, Deserialize, Default)]
#[serde(default)]
struct EmbedderSettings {
    model_name: String,
}

impl Embedder {
    /// Create an embedder; the model is checked by [`Embedder::validate_model`]
    pub fn new(provider: EmbedderProvider, model_name: impl Into<String>) -> Self {
        Self {
            provider,
            model_name: model_name.into(),
        }
    }

    /// Envelope subtype
    pub fn subtype(&self) -> &'static str {
        self.provider.as_str()
    }

    /// Fail unless the model is on the provider's allow-list
    pub fn validate_model(&self) -> Result<()> {
        self.provider.validate_model(&self.model_name)
    }

    pub(crate) fn settings(&self) -> serde_json::Result<JsonValue> {
        serde_json::to_value(EmbedderSettings {
            model_name: self.model_name.clone(),
        })
    }

    /// Decode and validate; nodes coming back from the server are checked too
    pub(crate) fn decode(subtype: &str, settings: JsonValue) -> Result<Self> {
        let provider = subtype
            .parse::<EmbedderProvider>()
            .map_err(|_| Error::unknown_variant("embedder", subtype))?;
        let settings: EmbedderSettings = if settings.is_null() {
            EmbedderSettings::default()
        } else {
            serde_json::from_value(settings)
                .map_err(|e| Error::decode(format!("embedder {subtype}"), e))?
        };
        let embedder = Embedder::new(provider, settings.model_name);
        embedder.validate_model()?;
        Ok(embedder)
    }
}
