//! Connector model and codec
//!
//! Sources and destinations share one wire envelope:
//!
//! ```text
//! { "id", "name", "created_at"?, "updated_at"?, "type", "config" }
//! ```
//!
//! `type` selects the concrete config variant. Decoding is two-phase: the
//! envelope is read with `config` left as raw JSON, then the registry for
//! the record kind decodes `config` into the variant named by `type`. An
//! unregistered `type` is a hard [`Error::UnknownVariant`].
//!
//! Connectors usable on both sides (S3, GCS, Postgres, ...) are one struct
//! each, wrapped by both [`SourceConfig`] and [`DestinationConfig`].

mod destination;
mod shared;
mod source;

pub use destination::*;
pub use shared::*;
pub use source::*;

use crate::error::{Error, Result};
use crate::types::{timestamp, JsonValue};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[cfg(test)]
mod tests;

// ============================================================================
// Traits
// ============================================================================

/// A concrete connector config with a fixed wire discriminator
pub trait ConnectorConfig {
    /// Discriminator written to the envelope `type` field
    const CONNECTOR_TYPE: &'static str;
}

/// A closed set of connector configs backed by a discriminator registry
pub trait TaggedConfig: Serialize + Sized {
    /// Registry name, used in error messages ("source", "destination")
    const REGISTRY: &'static str;

    /// Discriminator of this value
    fn connector_type(&self) -> &'static str;

    /// Decode a raw config object for the given discriminator
    fn decode(connector_type: &str, config: JsonValue) -> Result<Self>;

    /// Number of registered variants
    fn registry_len() -> usize;
}

// ============================================================================
// Records
// ============================================================================

/// A stored source or destination connector
///
/// The envelope `type` is always taken from `config`, so the two can never
/// disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector<C> {
    pub id: String,
    pub name: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub config: C,
}

/// A source connector record
pub type Source = Connector<SourceConfig>;

/// A destination connector record
pub type Destination = Connector<DestinationConfig>;

impl<C: TaggedConfig> Connector<C> {
    /// Wire discriminator of the config
    pub fn connector_type(&self) -> &'static str {
        self.config.connector_type()
    }

    /// Decode a record from its JSON envelope
    pub fn from_value(value: JsonValue) -> Result<Self> {
        let raw: RawEnvelope =
            serde_json::from_value(value).map_err(|e| Error::decode(C::REGISTRY, e))?;
        let config = C::decode(&raw.connector_type, raw.config)?;
        Ok(Self {
            id: raw.id,
            name: raw.name,
            created_at: raw.created_at,
            updated_at: raw.updated_at,
            config,
        })
    }

    /// Decode a record from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Decode a list body; `null` yields an empty list
    pub fn list_from_value(value: JsonValue) -> Result<Vec<Self>> {
        match value {
            JsonValue::Null => Ok(Vec::new()),
            JsonValue::Array(items) => items.into_iter().map(Self::from_value).collect(),
            other => Err(Error::decode(
                format!("{} list", C::REGISTRY),
                serde::de::Error::custom(format!("expected an array, got {other}")),
            )),
        }
    }
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default, with = "timestamp::option")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    connector_type: String,
    #[serde(default)]
    config: JsonValue,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, C> {
    id: &'a str,
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none", with = "timestamp::option")]
    updated_at: Option<DateTime<Utc>>,
    #[serde(rename = "type")]
    connector_type: &'static str,
    config: &'a C,
}

impl<C: TaggedConfig> Serialize for Connector<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        EnvelopeRef {
            id: &self.id,
            name: &self.name,
            created_at: self.created_at,
            updated_at: self.updated_at,
            connector_type: self.config.connector_type(),
            config: &self.config,
        }
        .serialize(serializer)
    }
}

impl<'de, C: TaggedConfig> Deserialize<'de> for Connector<C> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Body of a create call: `{name, type, config}`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateConnectorRequest<C> {
    pub name: String,
    pub config: C,
}

/// Create-source request
pub type CreateSourceRequest = CreateConnectorRequest<SourceConfig>;

/// Create-destination request
pub type CreateDestinationRequest = CreateConnectorRequest<DestinationConfig>;

impl<C> CreateConnectorRequest<C> {
    /// Create a new request
    pub fn new(name: impl Into<String>, config: impl Into<C>) -> Self {
        Self {
            name: name.into(),
            config: config.into(),
        }
    }
}

impl<C: TaggedConfig> Serialize for CreateConnectorRequest<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Body<'a, C> {
            name: &'a str,
            #[serde(rename = "type")]
            connector_type: &'static str,
            config: &'a C,
        }

        Body {
            name: &self.name,
            connector_type: self.config.connector_type(),
            config: &self.config,
        }
        .serialize(serializer)
    }
}

/// Body of an update call: `{config}`
///
/// Updates replace the whole config. An optional field left as `None` is
/// omitted from the request and the server resets it to its default; it is
/// not "left unchanged". Fetch, modify and send the full config to change a
/// single field.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateConnectorRequest<C> {
    pub id: String,
    pub config: C,
}

/// Update-source request
pub type UpdateSourceRequest = UpdateConnectorRequest<SourceConfig>;

/// Update-destination request
pub type UpdateDestinationRequest = UpdateConnectorRequest<DestinationConfig>;

impl<C> UpdateConnectorRequest<C> {
    /// Create a new request
    pub fn new(id: impl Into<String>, config: impl Into<C>) -> Self {
        Self {
            id: id.into(),
            config: config.into(),
        }
    }
}

impl<C: TaggedConfig> Serialize for UpdateConnectorRequest<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Body<'a, C> {
            config: &'a C,
        }

        Body {
            config: &self.config,
        }
        .serialize(serializer)
    }
}
