//! Tests for workflow node codec and validation

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn fast() -> WorkflowNode {
    WorkflowNode::new("partition", PartitionerFast::default())
}

fn title() -> WorkflowNode {
    WorkflowNode::new("chunk", ChunkerTitle::default())
}

fn embed() -> WorkflowNode {
    WorkflowNode::new(
        "embed",
        Embedder::new(EmbedderProvider::AzureOpenAi, "text-embedding-3-small"),
    )
}

fn enrich(kind: EnrichmentType) -> WorkflowNode {
    WorkflowNode::new("enrich", kind)
}

fn variant_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Partitioner(Partitioner::Auto(_)) => "auto",
        NodeKind::Partitioner(Partitioner::Vlm(_)) => "vlm",
        NodeKind::Partitioner(Partitioner::HiRes(_)) => "hi_res",
        NodeKind::Partitioner(Partitioner::Fast(_)) => "fast",
        NodeKind::Chunker(c) => c.subtype(),
        NodeKind::Embedder(e) => e.subtype(),
        NodeKind::Enricher(e) => e.subtype(),
    }
}

// ============================================================================
// Node Order Tests
// ============================================================================

#[test_case(vec![fast(), title()], &[] ; "partition then chunk")]
#[test_case(
    vec![fast(), enrich(EnrichmentType::OpenaiImageDescription), title(), embed()],
    &[] ; "enrich before chunk then embed"
)]
#[test_case(
    vec![
        fast(),
        enrich(EnrichmentType::OpenaiImageDescription),
        enrich(EnrichmentType::AnthropicTableDescription),
        enrich(EnrichmentType::OpenaiNer),
        title(),
        embed(),
    ],
    &[] ; "one enrichment of each category"
)]
#[test_case(vec![], &["first node must be a partitioner"] ; "empty")]
#[test_case(vec![title(), embed()], &["first node must be a partitioner"] ; "no leading partitioner")]
#[test_case(
    vec![fast(), fast(), title()],
    &["only the first node may be a partitioner"] ; "second partitioner"
)]
#[test_case(vec![fast(), embed()], &["embed must be after chunk"] ; "embed without chunk")]
#[test_case(
    vec![fast(), title(), title()],
    &["chunk must be after partition or prompter"] ; "chunk after chunk"
)]
#[test_case(
    vec![
        fast(),
        enrich(EnrichmentType::OpenaiImageDescription),
        enrich(EnrichmentType::AnthropicImageDescription),
        title(),
    ],
    &["only one image enrichment is allowed"] ; "two image enrichments"
)]
#[test_case(
    vec![
        fast(),
        enrich(EnrichmentType::OpenaiTableDescription),
        enrich(EnrichmentType::OpenaiTable2Html),
        title(),
    ],
    &["only one table enrichment is allowed"] ; "two table enrichments"
)]
#[test_case(
    vec![
        fast(),
        enrich(EnrichmentType::OpenaiNer),
        enrich(EnrichmentType::AnthropicNer),
        title(),
    ],
    &["only one NER enrichment is allowed"] ; "two ner enrichments"
)]
#[test_case(
    vec![
        fast(),
        enrich(EnrichmentType::BedrockImageDescription),
        enrich(EnrichmentType::BedrockTableDescription),
        enrich(EnrichmentType::OpenaiImageDescription),
        title(),
    ],
    &["only one image enrichment is allowed"] ; "duplicate separated by another category"
)]
#[test_case(
    vec![fast(), title(), embed(), enrich(EnrichmentType::OpenaiImageDescription)],
    &[
        "prompter must not be the last node",
        "prompter must be after partition or prompter",
    ] ; "enricher last and misplaced"
)]
#[test_case(
    vec![fast(), enrich(EnrichmentType::OpenaiImageDescription)],
    &["prompter must not be the last node"] ; "enricher last after partition"
)]
#[test_case(
    vec![enrich(EnrichmentType::OpenaiNer)],
    &[
        "first node must be a partitioner",
        "prompter must not be the last node",
    ] ; "lone enricher"
)]
#[test_case(
    vec![enrich(EnrichmentType::OpenaiImageDescription), fast(), title()],
    &[
        "first node must be a partitioner",
        "only the first node may be a partitioner",
    ] ; "enricher first"
)]
fn test_node_order(nodes: Vec<WorkflowNode>, expected: &[&str]) {
    let messages: Vec<String> = match validate_node_order(&nodes) {
        Ok(()) => Vec::new(),
        Err(errors) => errors.iter().map(ToString::to_string).collect(),
    };
    assert_eq!(messages, expected);
}

#[test]
fn test_node_order_violations_carry_positions() {
    let nodes = vec![
        fast(),
        title(),
        embed(),
        enrich(EnrichmentType::OpenaiImageDescription),
    ];
    let errors = validate_node_order(&nodes).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.clone().into_inner(),
        vec![
            NodeOrderViolation::EnricherLast { index: 3 },
            NodeOrderViolation::MisplacedEnricher {
                index: 3,
                after: NodeType::Embed
            },
        ]
    );
    assert_eq!(
        errors.to_string(),
        "prompter must not be the last node\nprompter must be after partition or prompter"
    );
    assert!(errors.contains_message("prompter must not be the last node"));
}

#[test]
fn test_duplicate_enrichment_reports_category() {
    let nodes = vec![
        fast(),
        enrich(EnrichmentType::OpenaiImageDescription),
        enrich(EnrichmentType::AnthropicImageDescription),
        title(),
    ];
    let errors = validate_node_order(&nodes).unwrap_err();
    let violation = errors.into_iter().next().unwrap();
    assert_eq!(
        violation,
        NodeOrderViolation::DuplicateEnrichment {
            index: 2,
            category: EnrichmentCategory::Image
        }
    );
    assert_eq!(violation.index(), Some(2));
}

#[test]
fn test_node_order_error_lifts_into_crate_error() {
    let err = validate_workflow_nodes(&[]).unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, Error::NodeOrder(ref errors) if errors.len() == 1));
    assert_eq!(
        err.to_string(),
        "Invalid workflow node order: first node must be a partitioner"
    );
}

#[test]
fn test_validate_workflow_nodes_checks_embedder_models() {
    let nodes = vec![
        fast(),
        title(),
        WorkflowNode::new(
            "embed",
            Embedder::new(EmbedderProvider::VoyageAi, "text-embedding-3-small"),
        ),
    ];
    assert!(validate_node_order(&nodes).is_ok());

    let err = validate_workflow_nodes(&nodes).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid model text-embedding-3-small for VoyageAI embedder"
    );

    assert!(validate_workflow_nodes(&[fast(), title(), embed()]).is_ok());
}

// ============================================================================
// Embedder Model Tests
// ============================================================================

#[test_case("azure_openai", "text-embedding-3-small", true ; "azure small")]
#[test_case("azure_openai", "text-embedding-ada-002", true ; "azure ada")]
#[test_case("azure_openai", "not-a-real-model", false ; "azure unknown model")]
#[test_case("azure_openai", "voyage-3", false ; "azure with voyage model")]
#[test_case("bedrock", "amazon.titan-embed-text-v2:0", true ; "bedrock titan")]
#[test_case("bedrock", "cohere.embed-multilingual-v3", true ; "bedrock cohere")]
#[test_case("togetherai", "togethercomputer/m2-bert-80M-32k-retrieval", true ; "togetherai bert")]
#[test_case("togetherai", "m2-bert", false ; "togetherai partial name")]
#[test_case("voyageai", "voyage-multimodal-3", true ; "voyage multimodal")]
#[test_case("voyageai", "", false ; "voyage empty model")]
fn test_embedder_model(subtype: &str, model: &str, valid: bool) {
    let result = validate_embedder_model(subtype, model);
    assert_eq!(result.is_ok(), valid, "{subtype}/{model}: {result:?}");
    if !valid {
        assert!(matches!(result, Err(Error::InvalidModel { .. })));
    }
}

#[test]
fn test_embedder_unknown_provider() {
    let err = validate_embedder_model("unknown-provider", "voyage-3").unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownEmbedderProvider { ref subtype } if subtype == "unknown-provider"
    ));
}

#[test]
fn test_embedder_error_names_provider() {
    let err = Embedder::new(EmbedderProvider::AzureOpenAi, "not-a-real-model")
        .validate_model()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid model not-a-real-model for Azure OpenAI embedder"
    );
}

#[test]
fn test_embedder_provider_lists() {
    assert_eq!(EmbedderProvider::Bedrock.models().len(), 5);
    assert_eq!(EmbedderProvider::VoyageAi.models().len(), 8);
    assert_eq!("togetherai".parse::<EmbedderProvider>().unwrap(), EmbedderProvider::TogetherAi);
    assert_eq!(EmbedderProvider::TogetherAi.display_name(), "TogetherAI");
}

// ============================================================================
// Envelope Encode Tests
// ============================================================================

#[test]
fn test_fast_partitioner_envelope() {
    let node = WorkflowNode::new(
        "Partitioner",
        PartitionerFast {
            ocr_languages: vec!["eng".to_string()],
            include_page_breaks: true,
            ..Default::default()
        },
    );
    assert_eq!(
        node.to_value().unwrap(),
        json!({
            "name": "Partitioner",
            "type": "partition",
            "subtype": "fast",
            "settings": {
                "include_page_breaks": true,
                "ocr_languages": ["eng"],
                "strategy": "fast"
            }
        })
    );
}

#[test]
fn test_hi_res_partitioner_round_trip() {
    let node = WorkflowNode::new(
        "Partitioner",
        PartitionerHiRes {
            exclude_elements: vec![ExcludableElement::Header, ExcludableElement::Footer],
            encoding: Some(Encoding::Utf8),
            extract_image_block_types: vec![BlockType::Table],
            infer_table_structure: true,
            ..Default::default()
        },
    )
    .with_id("0a1b");

    let value = node.to_value().unwrap();
    assert_eq!(value["id"], "0a1b");
    assert_eq!(value["subtype"], "hi_res");
    assert_eq!(value["settings"]["strategy"], "hi_res");
    assert_eq!(value["settings"]["encoding"], "utf_8");
    assert!(value["settings"].get("xml_keep_tags").is_none());

    assert_eq!(WorkflowNode::from_value(value).unwrap(), node);
}

#[test]
fn test_auto_partitioner_shares_vlm_subtype() {
    let node = WorkflowNode::new("Partitioner", PartitionerAuto::default());
    let value = node.to_value().unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Partitioner",
            "type": "partition",
            "subtype": "vlm",
            "settings": {
                "is_dynamic": false,
                "allow_fast": false,
                "strategy": "auto"
            }
        })
    );

    let decoded = WorkflowNode::from_value(value).unwrap();
    assert_eq!(variant_name(&decoded.kind), "auto");
    assert_eq!(decoded, node);
}

#[test]
fn test_vlm_partitioner_round_trip() {
    let node = WorkflowNode::new(
        "Partitioner",
        PartitionerVlm {
            provider: Some(Provider::Anthropic),
            model: Some(Model::Claude37Sonnet),
            prompt: Some(Prompt {
                text: "describe every figure".to_string(),
            }),
            output_format: Some(OutputFormat::Html),
            ..Default::default()
        },
    );
    let value = node.to_value().unwrap();
    assert_eq!(value["subtype"], "vlm");
    assert_eq!(value["settings"]["strategy"], "vlm");
    assert_eq!(value["settings"]["model"], "claude-3-7-sonnet-20250219");
    assert_eq!(value["settings"]["prompt"], json!({"text": "describe every figure"}));
    assert!(value["settings"].get("is_dynamic").is_none());

    assert_eq!(WorkflowNode::from_value(value).unwrap(), node);
}

#[test]
fn test_legacy_vlm_envelope() {
    let node = WorkflowNode::from_value(json!({
        "name": "Partitioner",
        "type": "vlm",
        "subtype": "partition",
        "settings": {"provider": "anthropic"}
    }))
    .unwrap();
    match node.kind {
        NodeKind::Partitioner(Partitioner::Vlm(vlm)) => {
            assert_eq!(vlm.provider, Some(Provider::Anthropic));
        }
        other => panic!("expected vlm partitioner, got {other:?}"),
    }
}

#[test]
fn test_chunker_injects_contextual_strategy() {
    let node = WorkflowNode::new(
        "Chunker",
        ChunkerTitle {
            options: ChunkerOptions {
                max_characters: Some(1000),
                include_orig_elements: Some(false),
                ..Default::default()
            },
            combine_text_under_n_chars: Some(500),
        },
    );
    let value = node.to_value().unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Chunker",
            "type": "chunk",
            "subtype": "chunk_by_title",
            "settings": {
                "include_orig_elements": false,
                "max_characters": 1000,
                "overlap_all": false,
                "combine_text_under_n_chars": 500,
                "contextual_chunking_strategy": "v1"
            }
        })
    );

    assert_eq!(WorkflowNode::from_value(value).unwrap(), node);
}

#[test]
fn test_similarity_chunker_round_trip() {
    let node = WorkflowNode::new(
        "Chunker",
        ChunkerSimilarity {
            options: ChunkerOptions {
                overlap: Some(20),
                overlap_all: true,
                ..Default::default()
            },
            similarity_threshold: Some(0.5),
        },
    );
    let value = node.to_value().unwrap();
    assert_eq!(value["settings"]["similarity_threshold"], 0.5);
    assert_eq!(value["settings"]["contextual_chunking_strategy"], "v1");
    assert_eq!(WorkflowNode::from_value(value).unwrap(), node);
}

#[test]
fn test_embedder_envelope() {
    let node = WorkflowNode::new("Embedder", Embedder::new(EmbedderProvider::VoyageAi, "voyage-3"));
    let value = node.to_value().unwrap();
    assert_eq!(
        value,
        json!({
            "name": "Embedder",
            "type": "embed",
            "subtype": "voyageai",
            "settings": {"model_name": "voyage-3"}
        })
    );
    assert_eq!(WorkflowNode::from_value(value).unwrap(), node);
}

#[test]
fn test_embedder_decode_validates_model() {
    let err = WorkflowNode::from_value(json!({
        "name": "Embedder",
        "type": "embed",
        "subtype": "bedrock",
        "settings": {"model_name": "voyage-3"}
    }))
    .unwrap_err();
    assert!(matches!(err, Error::InvalidModel { ref provider, .. } if provider == "Bedrock"));

    let err = WorkflowNode::from_value(json!({
        "name": "Embedder",
        "type": "embed",
        "subtype": "openai",
        "settings": {"model_name": "voyage-3"}
    }))
    .unwrap_err();
    assert!(matches!(err, Error::UnknownVariant { registry: "embedder", .. }));
}

#[test]
fn test_enricher_omits_settings() {
    let value = enrich(EnrichmentType::OpenaiImageDescription).to_value().unwrap();
    assert_eq!(
        value,
        json!({"name": "enrich", "type": "prompter", "subtype": "openai_image_description"})
    );

    // Overrides only apply to NER kinds
    let table = Enricher::new(EnrichmentType::AnthropicTableDescription).with_prompt_override("x");
    let value = WorkflowNode::new("enrich", table).to_value().unwrap();
    assert!(value.get("settings").is_none());

    let empty = Enricher::new(EnrichmentType::OpenaiNer).with_prompt_override("");
    let value = WorkflowNode::new("enrich", empty).to_value().unwrap();
    assert!(value.get("settings").is_none());
}

#[test]
fn test_ner_enricher_prompt_override() {
    let ner = Enricher::new(EnrichmentType::AnthropicNer).with_prompt_override("find people");
    let node = WorkflowNode::new("enrich", ner);
    let value = node.to_value().unwrap();
    assert_eq!(
        value["settings"],
        json!({"prompt_interface_overrides": {"prompt": {"user": "find people"}}})
    );
    assert_eq!(WorkflowNode::from_value(value).unwrap(), node);
}

#[test]
fn test_enrichment_categories() {
    assert_eq!(
        EnrichmentType::OpenaiTable2Html.categories(),
        vec![EnrichmentCategory::Table]
    );
    assert_eq!(
        EnrichmentType::AnthropicNer.categories(),
        vec![EnrichmentCategory::Ner]
    );
    assert_eq!(
        EnrichmentType::BedrockImageDescription.categories(),
        vec![EnrichmentCategory::Image]
    );
    assert!(EnrichmentType::OpenaiNer.is_ner());
    assert!(!EnrichmentType::OpenaiTable2Html.is_ner());
}

fn full_chunker_options() -> ChunkerOptions {
    ChunkerOptions {
        unstructured_api_url: Some("https://api.example.com".to_string()),
        unstructured_api_key: Some("chunk-key".to_string()),
        include_orig_elements: Some(true),
        new_after_n_chars: Some(800),
        max_characters: Some(1500),
        overlap: Some(50),
        overlap_all: true,
    }
}

fn full_fast() -> NodeKind {
    PartitionerFast {
        include_page_breaks: true,
        pdf_infer_table_structure: true,
        exclude_elements: vec![ExcludableElement::PageBreak, ExcludableElement::Formula],
        xml_keep_tags: true,
        encoding: Some(Encoding::Iso8859_1),
        ocr_languages: vec!["eng".to_string(), "deu".to_string()],
        extract_image_block_types: vec![BlockType::Image, BlockType::Table],
        infer_table_structure: true,
    }
    .into()
}

fn full_auto() -> NodeKind {
    PartitionerAuto {
        provider: Some(Provider::OpenAi),
        provider_api_key: Some("sk-test".to_string()),
        model: Some(Model::Gpt4oMini),
        output_format: Some(OutputFormat::Json),
        prompt: Some(Prompt {
            text: "keep tables intact".to_string(),
        }),
        format_html: Some(true),
        unique_element_ids: Some(false),
        is_dynamic: true,
        allow_fast: true,
    }
    .into()
}

fn full_vlm_with_unknown_options() -> NodeKind {
    PartitionerVlm {
        provider: Some(Provider::Other("acme".to_string())),
        provider_api_key: Some("acme-key".to_string()),
        model: Some(Model::Other("acme-vision-1".to_string())),
        output_format: Some(OutputFormat::Html),
        prompt: Some(Prompt {
            text: "transcribe".to_string(),
        }),
        format_html: Some(false),
        unique_element_ids: Some(true),
        is_dynamic: Some(true),
        allow_fast: Some(false),
    }
    .into()
}

fn full_character() -> NodeKind {
    ChunkerCharacter {
        options: full_chunker_options(),
    }
    .into()
}

fn full_title() -> NodeKind {
    ChunkerTitle {
        options: full_chunker_options(),
        combine_text_under_n_chars: Some(200),
    }
    .into()
}

fn full_page() -> NodeKind {
    ChunkerPage {
        options: full_chunker_options(),
    }
    .into()
}

fn full_similarity() -> NodeKind {
    ChunkerSimilarity {
        options: full_chunker_options(),
        similarity_threshold: Some(0.75),
    }
    .into()
}

#[test_case(full_fast() ; "fast partitioner")]
#[test_case(full_auto() ; "auto partitioner")]
#[test_case(full_vlm_with_unknown_options() ; "vlm partitioner with unknown provider and model")]
#[test_case(full_character() ; "character chunker")]
#[test_case(full_title() ; "title chunker")]
#[test_case(full_page() ; "page chunker")]
#[test_case(full_similarity() ; "similarity chunker")]
#[test_case(Embedder::new(EmbedderProvider::TogetherAi, "togethercomputer/m2-bert-80M-32k-retrieval").into() ; "togetherai embedder")]
#[test_case(Enricher::new(EnrichmentType::OpenaiNer).with_prompt_override("list organisations").into() ; "openai ner with override")]
#[test_case(Enricher::new(EnrichmentType::AnthropicNer).with_prompt_override("list people").into() ; "anthropic ner with override")]
#[test_case(EnrichmentType::BedrockTableDescription.into() ; "table enricher")]
fn test_populated_node_round_trip(kind: NodeKind) {
    let node = WorkflowNode::new("node", kind).with_id("n-1");
    let value = node.to_value().unwrap();
    assert_eq!(WorkflowNode::from_value(value).unwrap(), node);
}

#[test]
fn test_node_discriminator_lists_match_registries() {
    assert!(!crate::registry::has_duplicates(&partitioner::PARTITIONER_SUBTYPES));
    assert!(!crate::registry::has_duplicates(&chunker::CHUNKER_SUBTYPES));
    assert!(!crate::registry::has_duplicates(&EnrichmentType::SUBTYPES));
    assert!(!crate::registry::has_duplicates(&EmbedderProvider::SUBTYPES));

    let enrichments: Vec<&str> = EnrichmentType::ALL.iter().map(EnrichmentType::as_str).collect();
    assert_eq!(enrichments, EnrichmentType::SUBTYPES);
    let providers: Vec<&str> = EmbedderProvider::ALL
        .iter()
        .map(EmbedderProvider::as_str)
        .collect();
    assert_eq!(providers, EmbedderProvider::SUBTYPES);

    for subtype in chunker::CHUNKER_SUBTYPES {
        let node = WorkflowNode::from_value(json!({"name": "c", "type": "chunk", "subtype": subtype}))
            .unwrap();
        assert_eq!(node.subtype(), subtype);
    }
    for subtype in partitioner::PARTITIONER_SUBTYPES {
        assert!(WorkflowNode::from_value(json!({"name": "p", "type": "partition", "subtype": subtype}))
            .is_ok());
    }
}

// ============================================================================
// Envelope Decode Tests
// ============================================================================

#[test]
fn test_every_discriminator_decodes_minimal_envelope() {
    let cases = [
        ("partition", "auto", json!({}), "auto"),
        ("partition", "vlm", json!({}), "vlm"),
        ("partition", "vlm", json!({"strategy": "auto"}), "auto"),
        ("partition", "hi_res", json!({}), "hi_res"),
        ("partition", "fast", json!({}), "fast"),
        ("chunk", "chunk_by_character", json!({}), "chunk_by_character"),
        ("chunk", "chunk_by_title", json!({}), "chunk_by_title"),
        ("chunk", "chunk_by_page", json!({}), "chunk_by_page"),
        ("chunk", "chunk_by_similarity", json!({}), "chunk_by_similarity"),
    ];
    for (node_type, subtype, settings, expected) in cases {
        let node = WorkflowNode::from_value(json!({
            "name": "n",
            "type": node_type,
            "subtype": subtype,
            "settings": settings
        }))
        .unwrap_or_else(|e| panic!("{node_type}/{subtype}: {e}"));
        assert_eq!(variant_name(&node.kind), expected);
    }

    // Embedder settings need a model the provider accepts
    for provider in EmbedderProvider::ALL {
        let node = WorkflowNode::from_value(json!({
            "name": "n",
            "type": "embed",
            "subtype": provider.as_str(),
            "settings": {"model_name": provider.models()[0]}
        }))
        .unwrap();
        assert_eq!(node.subtype(), provider.as_str());
    }

    for kind in EnrichmentType::ALL {
        let node = WorkflowNode::from_value(json!({
            "name": "n",
            "type": "prompter",
            "subtype": kind.as_str(),
            "settings": {}
        }))
        .unwrap();
        assert_eq!(node.kind, NodeKind::Enricher(Enricher::new(*kind)));
    }
}

#[test_case("totally-bogus-xyz", "fast", "workflow node" ; "unknown type")]
#[test_case("partition", "totally-bogus-xyz", "partitioner" ; "unknown partitioner")]
#[test_case("chunk", "chunk_by_sentence", "chunker" ; "unknown chunker")]
#[test_case("prompter", "openai_sentiment", "enrichment" ; "unknown enrichment")]
#[test_case("vlm", "fast", "workflow node" ; "legacy type with wrong subtype")]
fn test_unknown_discriminator(node_type: &str, subtype: &str, registry: &str) {
    let err = WorkflowNode::from_value(json!({
        "name": "n",
        "type": node_type,
        "subtype": subtype,
        "settings": {}
    }))
    .unwrap_err();
    match err {
        Error::UnknownVariant {
            registry: actual, ..
        } => assert_eq!(actual, registry),
        other => panic!("expected unknown variant, got {other:?}"),
    }
}

#[test]
fn test_decode_ignores_unknown_settings_and_null() {
    let node = WorkflowNode::from_value(json!({
        "id": "",
        "name": "n",
        "type": "partition",
        "subtype": "fast",
        "settings": {"strategy": "fast", "new_server_field": 1}
    }))
    .unwrap();
    assert_eq!(node.id, None);
    assert_eq!(node.kind, NodeKind::Partitioner(PartitionerFast::default().into()));

    let node = WorkflowNode::from_value(json!({
        "id": "abc",
        "name": "n",
        "type": "chunk",
        "subtype": "chunk_by_page",
        "settings": null
    }))
    .unwrap();
    assert_eq!(node.id.as_deref(), Some("abc"));
    assert_eq!(node.kind, NodeKind::Chunker(ChunkerPage::default().into()));
}

#[test]
fn test_bad_settings_is_decode_error() {
    let err = WorkflowNode::from_value(json!({
        "name": "n",
        "type": "chunk",
        "subtype": "chunk_by_character",
        "settings": {"max_characters": "many"}
    }))
    .unwrap_err();
    match err {
        Error::Decode { operation, .. } => assert_eq!(operation, "chunker chunk_by_character"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[test]
fn test_node_lists_and_serde() {
    assert!(WorkflowNode::list_from_value(JsonValue::Null).unwrap().is_empty());
    assert!(WorkflowNode::list_from_value(json!({"name": "n"})).is_err());

    let nodes = vec![fast(), title(), embed()];
    let json = serde_json::to_string(&nodes).unwrap();
    let decoded: Vec<WorkflowNode> = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, nodes);

    let err = serde_json::from_value::<WorkflowNode>(json!({
        "name": "n",
        "type": "totally-bogus-xyz",
        "subtype": "x"
    }))
    .unwrap_err();
    assert!(err.to_string().contains("Unknown workflow node type: totally-bogus-xyz"));
}

#[test]
fn test_from_json() {
    let node = WorkflowNode::from_json(
        r#"{"name":"e","type":"prompter","subtype":"openai_ner","settings":{"prompt_interface_overrides":{"prompt":{"user":"orgs"}}}}"#,
    )
    .unwrap();
    assert_eq!(
        node.kind,
        NodeKind::Enricher(Enricher::new(EnrichmentType::OpenaiNer).with_prompt_override("orgs"))
    );
    assert!(WorkflowNode::from_json("{").is_err());
}
