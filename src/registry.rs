//! Discriminator registries
//!
//! A registry maps a wire discriminator to the function that decodes the
//! nested config or settings object into one concrete variant. Connector
//! registries are generated from a single declarative list by
//! [`connector_configs!`], so variants and factories cannot drift.

use crate::error::{Error, Result};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use tracing::debug;

/// Decodes a nested config object into the registry's target type
pub type DecodeFn<T> = fn(JsonValue) -> serde_json::Result<T>;

/// Decode `value` as `C` and lift it into the wrapping type
pub fn decode_as<C, T>(value: JsonValue) -> serde_json::Result<T>
where
    C: DeserializeOwned,
    T: From<C>,
{
    // A missing or null object decodes like `{}`: every field takes its zero value.
    let value = if value.is_null() {
        JsonValue::Object(serde_json::Map::new())
    } else {
        value
    };
    serde_json::from_value::<C>(value).map(T::from)
}

/// Registry of decode functions keyed by discriminator
pub struct Registry<T: 'static> {
    name: &'static str,
    factories: HashMap<&'static str, DecodeFn<T>>,
}

impl<T> Registry<T> {
    /// Build a registry from `(discriminator, decoder)` entries.
    ///
    /// # Panics
    ///
    /// Panics if two entries share a discriminator.
    pub fn new(name: &'static str, entries: Vec<(&'static str, DecodeFn<T>)>) -> Self {
        let mut factories = HashMap::with_capacity(entries.len());
        for (discriminator, factory) in entries {
            assert!(
                factories.insert(discriminator, factory).is_none(),
                "duplicate discriminator '{discriminator}' in {name} registry"
            );
        }
        Self { name, factories }
    }

    /// Registry name used in error messages
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of registered variants
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Check whether a discriminator is registered
    pub fn contains(&self, discriminator: &str) -> bool {
        self.factories.contains_key(discriminator)
    }

    /// Registered discriminators, sorted
    pub fn discriminators(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.factories.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Decode `config` into the variant registered under `discriminator`
    pub fn decode(&self, discriminator: &str, config: JsonValue) -> Result<T> {
        let factory = self.factories.get(discriminator).ok_or_else(|| {
            debug!("No {} variant registered for '{}'", self.name, discriminator);
            Error::unknown_variant(self.name, discriminator)
        })?;

        factory(config).map_err(|e| Error::decode(format!("{} {discriminator}", self.name), e))
    }
}

impl<T> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("discriminators", &self.discriminators())
            .finish()
    }
}

/// Compile-time duplicate check over a discriminator list
pub const fn has_duplicates(discriminators: &[&str]) -> bool {
    let mut i = 0;
    while i < discriminators.len() {
        let mut j = i + 1;
        while j < discriminators.len() {
            if str_eq(discriminators[i], discriminators[j]) {
                return true;
            }
            j += 1;
        }
        i += 1;
    }
    false
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Declare a connector config enum together with its registry.
///
/// Generates the enum, `From` impls for every variant, the
/// `CONNECTOR_TYPES` list, a compile-time duplicate check, a lazily built
/// [`Registry`] and the [`TaggedConfig`](crate::connector::TaggedConfig) impl.
macro_rules! connector_configs {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $registry_name:literal {
            $( $(#[$vmeta:meta])* $variant:ident($config:ty), )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant($config), )*
        }

        impl $name {
            /// Every discriminator this registry accepts
            pub const CONNECTOR_TYPES: &'static [&'static str] = &[
                $( <$config as $crate::connector::ConnectorConfig>::CONNECTOR_TYPE, )*
            ];

            /// Wire discriminator of the wrapped config
            pub const fn connector_type(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => <$config as $crate::connector::ConnectorConfig>::CONNECTOR_TYPE, )*
                }
            }

            fn registry() -> &'static $crate::registry::Registry<Self> {
                static REGISTRY: once_cell::sync::Lazy<$crate::registry::Registry<$name>> =
                    once_cell::sync::Lazy::new(|| {
                        $crate::registry::Registry::new(
                            $registry_name,
                            vec![
                                $( (
                                    <$config as $crate::connector::ConnectorConfig>::CONNECTOR_TYPE,
                                    $crate::registry::decode_as::<$config, $name>
                                        as $crate::registry::DecodeFn<$name>,
                                ), )*
                            ],
                        )
                    });
                &REGISTRY
            }
        }

        const _: () = assert!(
            !$crate::registry::has_duplicates($name::CONNECTOR_TYPES),
            concat!("duplicate discriminator in ", $registry_name, " registry")
        );

        $(
            impl From<$config> for $name {
                fn from(config: $config) -> Self {
                    Self::$variant(config)
                }
            }
        )*

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                match self {
                    $( Self::$variant(config) => serde::Serialize::serialize(config, serializer), )*
                }
            }
        }

        impl $crate::connector::TaggedConfig for $name {
            const REGISTRY: &'static str = $registry_name;

            fn connector_type(&self) -> &'static str {
                $name::connector_type(self)
            }

            fn decode(connector_type: &str, config: $crate::types::JsonValue) -> $crate::error::Result<Self> {
                Self::registry().decode(connector_type, config)
            }

            fn registry_len() -> usize {
                Self::registry().len()
            }
        }
    };
}

pub(crate) use connector_configs;
