// WASM bindings for lexisplit.
//
// Provides a `WasmLexisplit` class exported via wasm-bindgen that wraps the
// `LexHandle` from lexisplit-en. Decomposition trees are converted to plain
// JavaScript objects with serde-wasm-bindgen, in the same shape as the JSON
// exchange format.
//
// Usage from JavaScript:
//
//   const lex = new WasmLexisplit(await (await fetch("data/words.json")).text());
//   lex.tokenize("Cats, and Dogs!");    // => ["cats", "and", "dogs"]
//   lex.splitWord("cats");              // => { original: "cats", success: true, parts: [...] }
//   lex.classify(["cats", "zzz"]);      // => [{ ... }, { ... }]
//   lex.analyze("Cats, and Dogs!");     // => tokenize + classify
//   lex.labels("Cats, and Dogs!");      // => [{ token: "cats", type: "unknown" }, ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use lexisplit_en::handle::{LexError, LexHandle};

fn lex_error_to_js(e: LexError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/// Word decomposition engine for WebAssembly.
#[wasm_bindgen]
pub struct WasmLexisplit {
    handle: LexHandle,
}

#[wasm_bindgen]
impl WasmLexisplit {
    /// Create a new instance from the dictionary JSON text.
    #[wasm_bindgen(constructor)]
    pub fn new(dictionary_json: &str) -> Result<WasmLexisplit, JsError> {
        let handle = LexHandle::from_json(dictionary_json.as_bytes()).map_err(lex_error_to_js)?;
        Ok(WasmLexisplit { handle })
    }

    /// Split text into lowercase word tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.handle.tokenize(text)
    }

    /// Decompose a single token.
    #[wasm_bindgen(js_name = "splitWord")]
    pub fn split_word(&self, token: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.split_word(token))
    }

    /// Decompose each token of an array, preserving order.
    pub fn classify(&self, tokens: Vec<String>) -> Result<JsValue, JsError> {
        to_js(&self.handle.classify(&tokens))
    }

    /// Tokenize text and decompose every token.
    pub fn analyze(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.analyze(text))
    }

    /// Tokenize text and label each token as a known noun or unknown.
    pub fn labels(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.label(&self.handle.tokenize(text)))
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        LexHandle::get_version().to_string()
    }
}
