//! Option types shared by workflow node settings

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Declare a string-valued enum whose unknown values survive a round trip
/// through an `Other(String)` arm.
macro_rules! open_string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
            /// Value not known to this client
            Other(String),
        }

        impl $name {
            /// Every known value
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )* ];

            /// Wire representation
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )*
                    $name::Other(value) => value,
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $wire => $name::$variant, )*
                    other => $name::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                $name::from(value.as_str())
            }
        }

        impl FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                String::deserialize(deserializer).map($name::from)
            }
        }
    };
}

open_string_enum! {
    /// Model provider for VLM partitioning
    pub enum Provider {
        Auto => "auto",
        Anthropic => "anthropic",
        OpenAi => "openai",
        Bedrock => "bedrock",
    }
}

const NO_MODELS: &[Model] = &[];

const OPENAI_MODELS: &[Model] = &[Model::Gpt4o, Model::Gpt4oMini];

const ANTHROPIC_MODELS: &[Model] = &[Model::Claude35Sonnet, Model::Claude37Sonnet];

const BEDROCK_MODELS: &[Model] = &[
    Model::BedrockNovaLite,
    Model::BedrockNovaPro,
    Model::BedrockClaude3Opus,
    Model::BedrockClaude3Haiku,
    Model::BedrockClaude3Sonnet,
    Model::BedrockClaude35Sonnet,
    Model::BedrockLlama32_11b,
    Model::BedrockLlama32_90b,
];

impl Provider {
    /// Models the provider serves
    pub fn models(&self) -> &'static [Model] {
        match self {
            Provider::OpenAi => OPENAI_MODELS,
            Provider::Anthropic => ANTHROPIC_MODELS,
            Provider::Bedrock => BEDROCK_MODELS,
            Provider::Auto | Provider::Other(_) => NO_MODELS,
        }
    }

    /// Whether `model` is served by this provider
    pub fn supports(&self, model: &Model) -> bool {
        self.models().contains(model)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

open_string_enum! {
    /// Vision-language model used by VLM partitioning
    pub enum Model {
        Gpt4o => "gpt-4o",
        Gpt4oMini => "gpt-4o-mini",
        Claude35Sonnet => "claude-3-5-sonnet-20241022",
        Claude37Sonnet => "claude-3-7-sonnet-20250219",
        BedrockNovaLite => "us.amazon.nova-lite-v1:0",
        BedrockNovaPro => "us.amazon.nova-pro-v1:0",
        BedrockClaude3Opus => "us.anthropic.claude-3-opus-20240229-v1:0",
        BedrockClaude3Haiku => "us.anthropic.claude-3-haiku-20240307-v1:0",
        BedrockClaude3Sonnet => "us.anthropic.claude-3-sonnet-20240229-v1:0",
        BedrockClaude35Sonnet => "us.anthropic.claude-3-5-sonnet-20241022-v2:0",
        BedrockLlama32_11b => "us.meta.llama3-2-11b-instruct-v1:0",
        BedrockLlama32_90b => "us.meta.llama3-2-90b-instruct-v1:0",
    }
}

impl Model {
    /// Provider serving this model, if known
    pub fn provider(&self) -> Option<Provider> {
        [Provider::OpenAi, Provider::Anthropic, Provider::Bedrock]
            .into_iter()
            .find(|provider| provider.supports(self))
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

open_string_enum! {
    /// Output format of VLM partitioning
    pub enum OutputFormat {
        Html => "text/html",
        Json => "application/json",
    }
}

open_string_enum! {
    /// Text encoding hint for partitioning
    pub enum Encoding {
        Utf8 => "utf_8",
        Iso8859_1 => "iso_8859_1",
        Iso8859_6 => "iso_8859_6",
        Iso8859_8 => "iso_8859_8",
        Ascii => "ascii",
        Big5 => "big5",
        Utf16 => "utf_16",
        Utf16Be => "utf_16_be",
        Utf16Le => "utf_16_le",
        Utf32 => "utf_32",
        Utf32Be => "utf_32_be",
        Utf32Le => "utf_32_le",
        EucJis2004 => "euc_jis_2004",
        EucJisx0213 => "euc_jisx0213",
        EucJp => "euc_jp",
        EucKr => "euc_kr",
        Gb18030 => "gb18030",
        ShiftJis => "shift_jis",
        ShiftJis2004 => "shift_jis_2004",
        ShiftJisx0213 => "shift_jisx0213",
    }
}

/// Canonical codec name: lower case, hyphenated, without the `_i`/`_e`
/// suffix of the ISO 8859 bidi variants.
impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut name = self.as_str().trim().to_lowercase();
        if matches!(
            name.as_str(),
            "iso_8859_6_i" | "iso_8859_8_i" | "iso_8859_6_e" | "iso_8859_8_e"
        ) {
            name.truncate(name.len() - 2);
        }
        f.write_str(&name.replace('_', "-"))
    }
}

open_string_enum! {
    /// Element types that partitioning can drop from its output
    pub enum ExcludableElement {
        FigureCaption => "FigureCaption",
        NarrativeText => "NarrativeText",
        ListItem => "ListItem",
        Title => "Title",
        Address => "Address",
        Table => "Table",
        PageBreak => "PageBreak",
        Header => "Header",
        Footer => "Footer",
        UncategorizedText => "UncategorizedText",
        Image => "Image",
        Formula => "Formula",
        EmailAddress => "EmailAddress",
    }
}

open_string_enum! {
    /// Element types whose images are extracted as blocks
    pub enum BlockType {
        Image => "Image",
        Table => "Table",
    }
}
