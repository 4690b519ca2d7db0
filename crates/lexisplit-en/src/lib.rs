//! English word decomposition for lexisplit.
//!
//! Splits lowercase word tokens into morphological parts (plural
//! root + ending, prefix + root, root + suffix, or a pair of compound
//! roots) using a static dictionary supplied by the caller.
//!
//! # Modules
//!
//! - [`dictionary`] -- the lookup dictionary and its JSON loader
//! - [`tokenizer`] -- extraction of lowercase letter runs from text
//! - [`decompose`] -- the ordered rule cascade
//! - [`handle`] -- a facade owning a dictionary
//!
//! Every engine entry point is a pure function of its arguments. The
//! dictionary is never mutated after it is built, so a single instance can
//! be shared freely between threads.

pub mod dictionary;

#[cfg(feature = "tokenize")]
pub mod tokenizer;

#[cfg(feature = "decompose")]
pub mod decompose;

#[cfg(feature = "handle")]
pub mod handle;
