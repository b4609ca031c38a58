//! Workflow node ordering rules
//!
//! A legal pipeline starts with exactly one partitioner, chunks after
//! partitioning or enrichment, embeds right after chunking, and enriches
//! after partitioning or another enrichment but never as the final node.
//! At most one image, one table and one NER enrichment may appear.
//!
//! Every violation is collected; the scan never stops at the first one.

use super::{EnrichmentCategory, NodeKind, NodeType, WorkflowNode};
use crate::error::Result;
use std::fmt;

/// A single ordering rule broken by a node sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeOrderViolation {
    /// The sequence has no nodes
    Empty,
    /// The first node is not a partitioner
    FirstNotPartitioner { found: NodeType },
    /// A partitioner appears after the first position
    PartitionerNotFirst { index: usize },
    /// A chunker follows something other than a partitioner or enricher
    MisplacedChunker { index: usize, after: NodeType },
    /// An embedder does not directly follow a chunker
    MisplacedEmbedder { index: usize, after: NodeType },
    /// An enricher follows something other than a partitioner or enricher
    MisplacedEnricher { index: usize, after: NodeType },
    /// An enricher is the final node
    EnricherLast { index: usize },
    /// A second enrichment of the same category
    DuplicateEnrichment {
        index: usize,
        category: EnrichmentCategory,
    },
}

impl NodeOrderViolation {
    /// Position of the offending node, if the violation has one
    pub fn index(&self) -> Option<usize> {
        match self {
            NodeOrderViolation::Empty => None,
            NodeOrderViolation::FirstNotPartitioner { .. } => Some(0),
            NodeOrderViolation::PartitionerNotFirst { index }
            | NodeOrderViolation::MisplacedChunker { index, .. }
            | NodeOrderViolation::MisplacedEmbedder { index, .. }
            | NodeOrderViolation::MisplacedEnricher { index, .. }
            | NodeOrderViolation::EnricherLast { index }
            | NodeOrderViolation::DuplicateEnrichment { index, .. } => Some(*index),
        }
    }
}

impl fmt::Display for NodeOrderViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeOrderViolation::Empty | NodeOrderViolation::FirstNotPartitioner { .. } => {
                f.write_str("first node must be a partitioner")
            }
            NodeOrderViolation::PartitionerNotFirst { .. } => {
                f.write_str("only the first node may be a partitioner")
            }
            NodeOrderViolation::MisplacedChunker { .. } => write!(
                f,
                "{} must be after {} or {}",
                NodeType::Chunk,
                NodeType::Partition,
                NodeType::Enrich
            ),
            NodeOrderViolation::MisplacedEmbedder { .. } => {
                write!(f, "{} must be after {}", NodeType::Embed, NodeType::Chunk)
            }
            NodeOrderViolation::MisplacedEnricher { .. } => write!(
                f,
                "{} must be after {} or {}",
                NodeType::Enrich,
                NodeType::Partition,
                NodeType::Enrich
            ),
            NodeOrderViolation::EnricherLast { .. } => {
                write!(f, "{} must not be the last node", NodeType::Enrich)
            }
            NodeOrderViolation::DuplicateEnrichment { category, .. } => {
                write!(f, "only one {category} enrichment is allowed")
            }
        }
    }
}

/// Every ordering violation found in a node sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeOrderErrors(Vec<NodeOrderViolation>);

impl NodeOrderErrors {
    /// Iterate the violations in scan order
    pub fn iter(&self) -> std::slice::Iter<'_, NodeOrderViolation> {
        self.0.iter()
    }

    /// Number of violations
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a returned error
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any violation renders as `message`
    pub fn contains_message(&self, message: &str) -> bool {
        self.0.iter().any(|v| v.to_string() == message)
    }

    /// Take ownership of the violations
    pub fn into_inner(self) -> Vec<NodeOrderViolation> {
        self.0
    }
}

impl fmt::Display for NodeOrderErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for NodeOrderErrors {}

impl IntoIterator for NodeOrderErrors {
    type Item = NodeOrderViolation;
    type IntoIter = std::vec::IntoIter<NodeOrderViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a NodeOrderErrors {
    type Item = &'a NodeOrderViolation;
    type IntoIter = std::slice::Iter<'a, NodeOrderViolation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[derive(Default)]
struct SeenEnrichments {
    image: bool,
    table: bool,
    ner: bool,
}

impl SeenEnrichments {
    /// Record `category`, returning whether it was already present
    fn mark(&mut self, category: EnrichmentCategory) -> bool {
        let seen = match category {
            EnrichmentCategory::Image => &mut self.image,
            EnrichmentCategory::Table => &mut self.table,
            EnrichmentCategory::Ner => &mut self.ner,
        };
        std::mem::replace(seen, true)
    }
}

/// Check the ordering rules over a node sequence.
///
/// Returns every violation found. The predecessor family starts as the
/// first node's own family; a misplaced partitioner does not change it.
pub fn validate_node_order(nodes: &[WorkflowNode]) -> std::result::Result<(), NodeOrderErrors> {
    let Some(first) = nodes.first() else {
        return Err(NodeOrderErrors(vec![NodeOrderViolation::Empty]));
    };

    let mut violations = Vec::new();
    if first.node_type() != NodeType::Partition {
        violations.push(NodeOrderViolation::FirstNotPartitioner {
            found: first.node_type(),
        });
    }

    let final_index = nodes.len() - 1;
    let mut seen = SeenEnrichments::default();
    if let NodeKind::Enricher(enricher) = &first.kind {
        if final_index == 0 {
            violations.push(NodeOrderViolation::EnricherLast { index: 0 });
        }
        for category in enricher.kind.categories() {
            seen.mark(category);
        }
    }

    let mut last = first.node_type();

    for (index, node) in nodes.iter().enumerate().skip(1) {
        match &node.kind {
            NodeKind::Partitioner(_) => {
                violations.push(NodeOrderViolation::PartitionerNotFirst { index });
            }
            NodeKind::Chunker(_) => {
                if !matches!(last, NodeType::Partition | NodeType::Enrich) {
                    violations.push(NodeOrderViolation::MisplacedChunker { index, after: last });
                }
                last = NodeType::Chunk;
            }
            NodeKind::Embedder(_) => {
                if last != NodeType::Chunk {
                    violations.push(NodeOrderViolation::MisplacedEmbedder { index, after: last });
                }
                last = NodeType::Embed;
            }
            NodeKind::Enricher(enricher) => {
                if index == final_index {
                    violations.push(NodeOrderViolation::EnricherLast { index });
                }
                if !matches!(last, NodeType::Partition | NodeType::Enrich) {
                    violations.push(NodeOrderViolation::MisplacedEnricher { index, after: last });
                }
                for category in enricher.kind.categories() {
                    if seen.mark(category) {
                        violations.push(NodeOrderViolation::DuplicateEnrichment { index, category });
                    }
                }
                last = NodeType::Enrich;
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(NodeOrderErrors(violations))
    }
}

/// Pre-flight check of a node list: ordering rules, then embedder models
pub fn validate_workflow_nodes(nodes: &[WorkflowNode]) -> Result<()> {
    validate_node_order(nodes)?;
    for node in nodes {
        if let NodeKind::Embedder(embedder) = &node.kind {
            embedder.validate_model()?;
        }
    }
    Ok(())
}
