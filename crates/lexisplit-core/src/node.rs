// Decomposition nodes: the morphological parts a token is split into.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The role a decomposition part plays within its word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A known noun, either the whole token or the root beside an affix.
    Noun,
    /// The token could not be decomposed.
    Unknown,
    /// A dictionary prefix.
    Prefix,
    /// A dictionary suffix.
    Suffix,
    /// Singular root of a regular plural.
    PluralRoot,
    /// The plural ending ("s", "es", "ies", "ves").
    PluralSuffix,
    /// Singular root looked up in the irregular plural table.
    PluralRootIrregular,
    /// One half of a compound word.
    CompoundRoot,
}

impl NodeKind {
    /// All kinds, in declaration order.
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Noun,
        NodeKind::Unknown,
        NodeKind::Prefix,
        NodeKind::Suffix,
        NodeKind::PluralRoot,
        NodeKind::PluralSuffix,
        NodeKind::PluralRootIrregular,
        NodeKind::CompoundRoot,
    ];

    /// The wire name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Noun => "noun",
            NodeKind::Unknown => "unknown",
            NodeKind::Prefix => "prefix",
            NodeKind::Suffix => "suffix",
            NodeKind::PluralRoot => "plural_root",
            NodeKind::PluralSuffix => "plural_suffix",
            NodeKind::PluralRootIrregular => "plural_root_irregular",
            NodeKind::CompoundRoot => "compound_root",
        }
    }

    /// Whether nodes of this kind may carry sub-decompositions.
    pub fn allows_children(self) -> bool {
        matches!(self, NodeKind::CompoundRoot)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized node kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node kind: {0}")]
pub struct UnknownNodeKind(pub String);

impl FromStr for NodeKind {
    type Err = UnknownNodeKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownNodeKind(s.to_string()))
    }
}

/// Error returned when assembling a node from loose parts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("{kind} nodes cannot have children ({count} given)")]
    LeafWithChildren { kind: NodeKind, count: usize },
}

/// One morphological part of a decomposed token.
///
/// Each variant corresponds to exactly one [`NodeKind`]. Only compound
/// roots carry `children`; the slot exists so that a compound half can be
/// decomposed further without changing the data model. The current rule
/// set always leaves it empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DecompositionNode {
    Noun { value: String },
    Unknown { value: String },
    Prefix { value: String },
    Suffix { value: String },
    PluralRoot { value: String },
    PluralSuffix { value: String },
    PluralRootIrregular { value: String },
    CompoundRoot {
        value: String,
        children: Vec<DecompositionNode>,
    },
}

impl DecompositionNode {
    pub fn noun(value: impl Into<String>) -> Self {
        Self::Noun { value: value.into() }
    }

    pub fn unknown(value: impl Into<String>) -> Self {
        Self::Unknown { value: value.into() }
    }

    pub fn prefix(value: impl Into<String>) -> Self {
        Self::Prefix { value: value.into() }
    }

    pub fn suffix(value: impl Into<String>) -> Self {
        Self::Suffix { value: value.into() }
    }

    pub fn plural_root(value: impl Into<String>) -> Self {
        Self::PluralRoot { value: value.into() }
    }

    pub fn plural_suffix(value: impl Into<String>) -> Self {
        Self::PluralSuffix { value: value.into() }
    }

    pub fn plural_root_irregular(value: impl Into<String>) -> Self {
        Self::PluralRootIrregular { value: value.into() }
    }

    /// A compound half with no further decomposition.
    pub fn compound_root(value: impl Into<String>) -> Self {
        Self::CompoundRoot {
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Build a node from its kind, value and children.
    ///
    /// Fails if `children` is non-empty for a kind that cannot hold any.
    pub fn from_parts(
        kind: NodeKind,
        value: String,
        children: Vec<DecompositionNode>,
    ) -> Result<Self, NodeError> {
        if !children.is_empty() && !kind.allows_children() {
            return Err(NodeError::LeafWithChildren {
                kind,
                count: children.len(),
            });
        }
        Ok(match kind {
            NodeKind::Noun => Self::Noun { value },
            NodeKind::Unknown => Self::Unknown { value },
            NodeKind::Prefix => Self::Prefix { value },
            NodeKind::Suffix => Self::Suffix { value },
            NodeKind::PluralRoot => Self::PluralRoot { value },
            NodeKind::PluralSuffix => Self::PluralSuffix { value },
            NodeKind::PluralRootIrregular => Self::PluralRootIrregular { value },
            NodeKind::CompoundRoot => Self::CompoundRoot { value, children },
        })
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Noun { .. } => NodeKind::Noun,
            Self::Unknown { .. } => NodeKind::Unknown,
            Self::Prefix { .. } => NodeKind::Prefix,
            Self::Suffix { .. } => NodeKind::Suffix,
            Self::PluralRoot { .. } => NodeKind::PluralRoot,
            Self::PluralSuffix { .. } => NodeKind::PluralSuffix,
            Self::PluralRootIrregular { .. } => NodeKind::PluralRootIrregular,
            Self::CompoundRoot { .. } => NodeKind::CompoundRoot,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Noun { value }
            | Self::Unknown { value }
            | Self::Prefix { value }
            | Self::Suffix { value }
            | Self::PluralRoot { value }
            | Self::PluralSuffix { value }
            | Self::PluralRootIrregular { value }
            | Self::CompoundRoot { value, .. } => value,
        }
    }

    /// Sub-decompositions of this node; always empty for leaf kinds.
    pub fn children(&self) -> &[DecompositionNode] {
        match self {
            Self::CompoundRoot { children, .. } => children,
            _ => &[],
        }
    }
}

// ---------------------------------------------------------------------------
// Wire format: every node is `{ "value", "kind", "children" }`
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct NodeRef<'a> {
    value: &'a str,
    kind: NodeKind,
    children: &'a [DecompositionNode],
}

#[derive(Deserialize)]
struct NodeRepr {
    value: String,
    kind: NodeKind,
    #[serde(default)]
    children: Vec<DecompositionNode>,
}

impl Serialize for DecompositionNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NodeRef {
            value: self.value(),
            kind: self.kind(),
            children: self.children(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DecompositionNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = NodeRepr::deserialize(deserializer)?;
        DecompositionNode::from_parts(repr.kind, repr.value, repr.children)
            .map_err(serde::de::Error::custom)
    }
}
