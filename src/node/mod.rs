//! Workflow nodes
//!
//! A workflow is an ordered list of processing nodes. Each node belongs to
//! one of four families and travels inside a common envelope:
//!
//! ```text
//! { "id": "...", "name": "...", "type": "partition" | "chunk" | "embed" | "prompter",
//!   "subtype": "...", "settings": { ... } }
//! ```
//!
//! Decoding dispatches on `type` to a family, then on `subtype` within the
//! family. Unknown pairs fail with [`Error::UnknownVariant`]; nothing is
//! defaulted.
//!
//! # Example
//!
//! ```
//! use unstructured_client::node::{
//!     validate_node_order, ChunkerTitle, PartitionerFast, WorkflowNode,
//! };
//!
//! let nodes = vec![
//!     WorkflowNode::new("partition", PartitionerFast::default()),
//!     WorkflowNode::new("chunk", ChunkerTitle::default()),
//! ];
//! assert!(validate_node_order(&nodes).is_ok());
//! ```

mod chunker;
mod embedder;
mod enricher;
mod partitioner;
mod types;
mod validate;

#[cfg(test)]
mod tests;

pub use chunker::{
    Chunker, ChunkerCharacter, ChunkerOptions, ChunkerPage, ChunkerSimilarity, ChunkerTitle,
    CONTEXTUAL_CHUNKING_STRATEGY,
};
pub use embedder::{validate_embedder_model, Embedder, EmbedderProvider};
pub use enricher::{Enricher, EnrichmentCategory, EnrichmentType};
pub use partitioner::{
    Partitioner, PartitionerAuto, PartitionerFast, PartitionerHiRes, PartitionerVlm, Prompt,
};
pub use types::{BlockType, Encoding, ExcludableElement, Model, OutputFormat, Provider};
pub use validate::{
    validate_node_order, validate_workflow_nodes, NodeOrderErrors, NodeOrderViolation,
};

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Pre-rename envelope some servers still return for VLM partitioners
const LEGACY_VLM_TYPE: &str = "vlm";

/// Node family, carried as the envelope `type`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    #[serde(rename = "partition")]
    Partition,
    #[serde(rename = "chunk")]
    Chunk,
    #[serde(rename = "embed")]
    Embed,
    #[serde(rename = "prompter")]
    Enrich,
}

impl NodeType {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Partition => "partition",
            NodeType::Chunk => "chunk",
            NodeType::Embed => "embed",
            NodeType::Enrich => "prompter",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The family-specific part of a node
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Partitioner(Partitioner),
    Chunker(Chunker),
    Embedder(Embedder),
    Enricher(Enricher),
}

impl NodeKind {
    /// Envelope `type`
    pub fn node_type(&self) -> NodeType {
        match self {
            NodeKind::Partitioner(_) => NodeType::Partition,
            NodeKind::Chunker(_) => NodeType::Chunk,
            NodeKind::Embedder(_) => NodeType::Embed,
            NodeKind::Enricher(_) => NodeType::Enrich,
        }
    }

    /// Envelope `subtype`
    pub fn subtype(&self) -> &'static str {
        match self {
            NodeKind::Partitioner(p) => p.subtype(),
            NodeKind::Chunker(c) => c.subtype(),
            NodeKind::Embedder(e) => e.subtype(),
            NodeKind::Enricher(e) => e.subtype(),
        }
    }

    fn settings(&self) -> serde_json::Result<Option<JsonValue>> {
        match self {
            NodeKind::Partitioner(p) => p.settings().map(Some),
            NodeKind::Chunker(c) => c.settings().map(Some),
            NodeKind::Embedder(e) => e.settings().map(Some),
            NodeKind::Enricher(e) => Ok(e.settings()),
        }
    }

    fn decode(node_type: &str, subtype: &str, settings: JsonValue) -> Result<Self> {
        match node_type {
            "partition" => Partitioner::decode(subtype, settings).map(NodeKind::Partitioner),
            "chunk" => Chunker::decode(subtype, settings).map(NodeKind::Chunker),
            "embed" => Embedder::decode(subtype, settings).map(NodeKind::Embedder),
            "prompter" => Enricher::decode(subtype, settings).map(NodeKind::Enricher),
            LEGACY_VLM_TYPE if subtype == NodeType::Partition.as_str() => {
                Partitioner::decode(LEGACY_VLM_TYPE, settings).map(NodeKind::Partitioner)
            }
            other => {
                tracing::debug!("No workflow node family registered for '{}'", other);
                Err(Error::unknown_variant("workflow node", other))
            }
        }
    }
}

/// One processing step of a workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowNode {
    /// Server-assigned id; absent on nodes built locally
    pub id: Option<String>,
    pub name: String,
    pub kind: NodeKind,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    name: &'a str,
    #[serde(rename = "type")]
    node_type: NodeType,
    subtype: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    settings: Option<JsonValue>,
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    subtype: String,
    #[serde(default)]
    settings: JsonValue,
}

impl WorkflowNode {
    /// Create a node without an id
    pub fn new(name: impl Into<String>, kind: impl Into<NodeKind>) -> Self {
        Self {
            id: None,
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Attach a server id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    pub fn subtype(&self) -> &'static str {
        self.kind.subtype()
    }

    /// Encode the node envelope
    pub fn to_value(&self) -> Result<JsonValue> {
        let envelope = EnvelopeRef {
            id: self.id.as_deref(),
            name: &self.name,
            node_type: self.node_type(),
            subtype: self.subtype(),
            settings: self.kind.settings()?,
        };
        Ok(serde_json::to_value(envelope)?)
    }

    /// Decode a node envelope, dispatching on `type` and `subtype`
    pub fn from_value(value: JsonValue) -> Result<Self> {
        let raw: RawEnvelope =
            serde_json::from_value(value).map_err(|e| Error::decode("workflow node", e))?;
        let kind = NodeKind::decode(&raw.node_type, &raw.subtype, raw.settings)?;
        Ok(Self {
            id: raw.id.filter(|id| !id.is_empty()),
            name: raw.name,
            kind,
        })
    }

    /// Decode a node envelope from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let value: JsonValue =
            serde_json::from_str(json).map_err(|e| Error::decode("workflow node", e))?;
        Self::from_value(value)
    }

    /// Decode a node list; `null` decodes as empty
    pub fn list_from_value(value: JsonValue) -> Result<Vec<Self>> {
        match value {
            JsonValue::Null => Ok(Vec::new()),
            JsonValue::Array(items) => items.into_iter().map(Self::from_value).collect(),
            other => Err(Error::decode(
                "workflow node list",
                serde::de::Error::custom(format!("expected an array, found {other}")),
            )),
        }
    }
}

impl Serialize for WorkflowNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WorkflowNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        WorkflowNode::from_value(value).map_err(serde::de::Error::custom)
    }
}

macro_rules! into_node_kind {
    ($( $leaf:ty => $family:ident ),* $(,)?) => {
        $(
            impl From<$leaf> for NodeKind {
                fn from(value: $leaf) -> Self {
                    NodeKind::$family($family::from(value))
                }
            }
        )*
    };
}

into_node_kind! {
    Partitioner => Partitioner,
    PartitionerAuto => Partitioner,
    PartitionerVlm => Partitioner,
    PartitionerHiRes => Partitioner,
    PartitionerFast => Partitioner,
    Chunker => Chunker,
    ChunkerCharacter => Chunker,
    ChunkerTitle => Chunker,
    ChunkerPage => Chunker,
    ChunkerSimilarity => Chunker,
    Embedder => Embedder,
    Enricher => Enricher,
    EnrichmentType => Enricher,
}

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

/// Insert a fixed string field into an encoded settings object
pub(crate) fn insert_field(mut settings: JsonValue, key: &str, value: &str) -> JsonValue {
    if let JsonValue::Object(map) = &mut settings {
        map.insert(key.to_string(), JsonValue::String(value.to_string()));
    }
    settings
}
