// Per-token decomposition result

use serde::{Deserialize, Serialize};

use crate::node::{DecompositionNode, NodeKind};

/// The outcome of decomposing one token.
///
/// A successful tree holds the one or two parts produced by the rule that
/// fired. An unsuccessful tree holds exactly one `unknown` node whose value
/// is the original token. Failure is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecompositionTree {
    original: String,
    success: bool,
    parts: Vec<DecompositionNode>,
}

impl DecompositionTree {
    /// A successful decomposition of `original` into `parts`.
    pub fn decomposed(original: impl Into<String>, parts: Vec<DecompositionNode>) -> Self {
        Self {
            original: original.into(),
            success: true,
            parts,
        }
    }

    /// The fallback tree for a token no rule could decompose.
    pub fn unknown(original: impl Into<String>) -> Self {
        let original = original.into();
        let parts = vec![DecompositionNode::unknown(original.clone())];
        Self {
            original,
            success: false,
            parts,
        }
    }

    /// The token as it was given to the engine.
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn parts(&self) -> &[DecompositionNode] {
        &self.parts
    }

    /// Kinds of the parts, in order.
    pub fn kinds(&self) -> Vec<NodeKind> {
        self.parts.iter().map(DecompositionNode::kind).collect()
    }

    /// Values of the parts, in order.
    pub fn values(&self) -> Vec<&str> {
        self.parts.iter().map(DecompositionNode::value).collect()
    }
}
