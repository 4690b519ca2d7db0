//! Shared types for lexisplit.
//!
//! This crate holds the data model exchanged between the decomposition
//! engine (`lexisplit-en`) and its front ends. It contains no rule logic.
//!
//! - [`character`] -- word-character classification and folding
//! - [`token`] -- tokenizer output with source positions
//! - [`node`] -- `NodeKind` and the `DecompositionNode` sum type
//! - [`tree`] -- `DecompositionTree`, the per-token result

pub mod character;
pub mod node;
pub mod token;
pub mod tree;
