//! Partitioner nodes
//!
//! The four strategies share the `partition` node type. `fast` and `hi_res`
//! encode under their own subtype. `auto` encodes under the `vlm` subtype
//! with `strategy: "auto"` in its settings, which is how the API tells the
//! two apart.

use super::types::{BlockType, Encoding, ExcludableElement, Model, OutputFormat, Provider};
use super::{insert_field, is_false};
use crate::error::Result;
use crate::registry::{decode_as, has_duplicates, DecodeFn, Registry};
use crate::types::JsonValue;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// `auto` strategy
pub const STRATEGY_AUTO: &str = "auto";
/// `vlm` strategy
pub const STRATEGY_VLM: &str = "vlm";
/// `hi_res` strategy
pub const STRATEGY_HI_RES: &str = "hi_res";
/// `fast` strategy
pub const STRATEGY_FAST: &str = "fast";

/// Every subtype the partitioner registry accepts
pub(crate) const PARTITIONER_SUBTYPES: [&str; 4] =
    [STRATEGY_AUTO, STRATEGY_VLM, STRATEGY_HI_RES, STRATEGY_FAST];

const _: () = assert!(
    !has_duplicates(&PARTITIONER_SUBTYPES),
    "duplicate discriminator in partitioner registry"
);

static PARTITIONERS: Lazy<Registry<Partitioner>> = Lazy::new(|| {
    let entries: [(&'static str, DecodeFn<Partitioner>); 4] = [
        (STRATEGY_AUTO, decode_as::<PartitionerAuto, Partitioner>),
        (STRATEGY_VLM, decode_vlm_subtype),
        (STRATEGY_HI_RES, decode_as::<PartitionerHiRes, Partitioner>),
        (STRATEGY_FAST, decode_as::<PartitionerFast, Partitioner>),
    ];
    Registry::new("partitioner", entries.to_vec())
});

/// A partitioning strategy with its settings
#[derive(Debug, Clone, PartialEq)]
pub enum Partitioner {
    Auto(PartitionerAuto),
    Vlm(PartitionerVlm),
    HiRes(PartitionerHiRes),
    Fast(PartitionerFast),
}

impl Partitioner {
    /// Strategy name
    pub fn strategy(&self) -> &'static str {
        match self {
            Partitioner::Auto(_) => STRATEGY_AUTO,
            Partitioner::Vlm(_) => STRATEGY_VLM,
            Partitioner::HiRes(_) => STRATEGY_HI_RES,
            Partitioner::Fast(_) => STRATEGY_FAST,
        }
    }

    /// Envelope subtype; `auto` shares the `vlm` subtype
    pub fn subtype(&self) -> &'static str {
        match self {
            Partitioner::Auto(_) | Partitioner::Vlm(_) => STRATEGY_VLM,
            Partitioner::HiRes(_) => STRATEGY_HI_RES,
            Partitioner::Fast(_) => STRATEGY_FAST,
        }
    }

    pub(crate) fn settings(&self) -> serde_json::Result<JsonValue> {
        let settings = match self {
            Partitioner::Auto(p) => serde_json::to_value(p)?,
            Partitioner::Vlm(p) => serde_json::to_value(p)?,
            Partitioner::HiRes(p) => serde_json::to_value(p)?,
            Partitioner::Fast(p) => serde_json::to_value(p)?,
        };
        Ok(insert_field(settings, "strategy", self.strategy()))
    }

    pub(crate) fn decode(subtype: &str, settings: JsonValue) -> Result<Self> {
        PARTITIONERS.decode(subtype, settings)
    }
}

fn decode_vlm_subtype(settings: JsonValue) -> serde_json::Result<Partitioner> {
    if settings.get("strategy").and_then(JsonValue::as_str) == Some(STRATEGY_AUTO) {
        decode_as::<PartitionerAuto, Partitioner>(settings)
    } else {
        decode_as::<PartitionerVlm, Partitioner>(settings)
    }
}

/// Prompt override for VLM partitioning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prompt {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
}

/// Let the platform pick a strategy per document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionerAuto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Prompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_html: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_element_ids: Option<bool>,
    pub is_dynamic: bool,
    pub allow_fast: bool,
}

/// Partition with a vision-language model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionerVlm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<Provider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<Model>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<Prompt>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_html: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_element_ids: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_dynamic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_fast: Option<bool>,
}

/// High resolution partitioning with layout detection and OCR
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionerHiRes {
    #[serde(skip_serializing_if = "is_false")]
    pub include_page_breaks: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub pdf_infer_table_structure: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_elements: Vec<ExcludableElement>,
    #[serde(skip_serializing_if = "is_false")]
    pub xml_keep_tags: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ocr_languages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extract_image_block_types: Vec<BlockType>,
    #[serde(skip_serializing_if = "is_false")]
    pub infer_table_structure: bool,
}

/// Fast text extraction without layout models
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionerFast {
    #[serde(skip_serializing_if = "is_false")]
    pub include_page_breaks: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub pdf_infer_table_structure: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude_elements: Vec<ExcludableElement>,
    #[serde(skip_serializing_if = "is_false")]
    pub xml_keep_tags: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<Encoding>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ocr_languages: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extract_image_block_types: Vec<BlockType>,
    #[serde(skip_serializing_if = "is_false")]
    pub infer_table_structure: bool,
}

impl From<PartitionerAuto> for Partitioner {
    fn from(p: PartitionerAuto) -> Self {
        Partitioner::Auto(p)
    }
}

impl From<PartitionerVlm> for Partitioner {
    fn from(p: PartitionerVlm) -> Self {
        Partitioner::Vlm(p)
    }
}

impl From<PartitionerHiRes> for Partitioner {
    fn from(p: PartitionerHiRes) -> Self {
        Partitioner::HiRes(p)
    }
}

impl From<PartitionerFast> for Partitioner {
    fn from(p: PartitionerFast) -> Self {
        Partitioner::Fast(p)
    }
}
