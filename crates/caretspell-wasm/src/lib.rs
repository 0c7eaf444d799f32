// WASM bindings for caretspell inline spell suggestion.
//
// Provides two classes exported via wasm-bindgen:
//
// - `WasmSpellChecker` wraps a dictionary and the default match strategy.
// - `WasmSession` binds a checker to one text field in the page and runs
//   both triggers: caret moves (debounced advisory) and boundary keys
//   (automatic replacement).
//
// Results are serialized to JavaScript values using serde-wasm-bindgen in
// JSON-compatible mode, so "no suggestion needed" arrives as `null`.
//
// Usage from JavaScript:
//
//   const checker = new WasmSpellChecker(["hello", "world"]);
//   checker.findSuggestions("helo");          // => { exact: [], suggestions: ["hello"] }
//   checker.chooseReplacement("helo", "helo"); // => "Hello"
//
//   const session = new WasmSession(checker, (id) => document.getElementById(id), "note");
//   session.setRenderer(showAdvisory, removeAdvisory);
//   input.addEventListener("selectionchange", () => session.caretMoved(performance.now()));
//   input.addEventListener("input", (e) => session.keyTyped(e.data ?? ""));
//   setInterval(() => session.tick(performance.now()), 100);

mod host;
mod offsets;

use std::rc::Rc;

use js_sys::Function;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use caretspell_engine::session::{
    AdvisoryId, EditingSession, SessionError, SessionOptions, apply_replacement,
    locate_word_at_offset,
};
use caretspell_engine::{Dictionary, DictionaryError, SpellChecker};

use host::{JsRegistry, JsRenderer, JsSurface};
use offsets::{millis, parse_keys};

// ============================================================================
// Conversion helpers
// ============================================================================

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn to_js_result<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    to_js(value).map_err(|e| JsError::new(&e.to_string()))
}

fn dictionary_error_to_js(e: DictionaryError) -> JsError {
    JsError::new(&e.to_string())
}

fn session_error_to_js(e: SessionError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmSpellChecker
// ============================================================================

/// Dictionary lookup and text correction for WebAssembly.
#[wasm_bindgen]
pub struct WasmSpellChecker {
    checker: Rc<SpellChecker>,
}

#[wasm_bindgen]
impl WasmSpellChecker {
    /// Create a checker from a dictionary.
    ///
    /// `words` is either an array of strings or a JSON array string.
    #[wasm_bindgen(constructor)]
    pub fn new(words: JsValue) -> Result<WasmSpellChecker, JsError> {
        let dictionary = match words.as_string() {
            Some(json) => Dictionary::from_json_str(&json).map_err(dictionary_error_to_js)?,
            None => {
                let list: Vec<String> = serde_wasm_bindgen::from_value(words)
                    .map_err(|e| JsError::new(&e.to_string()))?;
                Dictionary::from_words(list)
            }
        };
        Ok(WasmSpellChecker {
            checker: Rc::new(SpellChecker::new(dictionary)),
        })
    }

    /// Number of dictionary entries.
    #[wasm_bindgen(getter, js_name = "dictionarySize")]
    pub fn dictionary_size(&self) -> usize {
        self.checker.dictionary().len()
    }

    /// Look a word up.
    ///
    /// Returns `{ exact: string[], suggestions: string[] | null }`;
    /// `suggestions` is `null` exactly when `exact` is non-empty.
    #[wasm_bindgen(js_name = "findSuggestions")]
    pub fn find_suggestions(&self, word: &str) -> Result<JsValue, JsError> {
        to_js_result(&self.checker.find_suggestions(word))
    }

    /// The single unambiguous replacement for `word`, capitalized for its
    /// position in `fullText`, or `""` when there is none.
    #[wasm_bindgen(js_name = "chooseReplacement")]
    pub fn choose_replacement(&self, word: &str, full_text: &str) -> String {
        self.checker.replacement_for(word, full_text)
    }

    /// Replace every occurrence of `originalWord` in `text` with
    /// `replacement` in dictionary casing, keeping trailing punctuation and
    /// capitalizing each occurrence that starts a sentence.
    #[wasm_bindgen(js_name = "applyReplacement")]
    pub fn apply_replacement(&self, text: &str, original_word: &str, replacement: &str) -> String {
        apply_replacement(text, original_word, replacement)
    }

    /// The word at or before char offset `offset`, `""` between words, or
    /// `undefined` when the offset is past the end.
    #[wasm_bindgen(js_name = "locateWord")]
    pub fn locate_word(&self, text: &str, offset: usize) -> Option<String> {
        locate_word_at_offset(text, offset)
    }

    /// Correct `word` throughout `text` if an unambiguous replacement exists.
    pub fn correct(&self, text: &str, word: &str) -> String {
        self.checker.correct(text, word)
    }
}

// ============================================================================
// WasmSession
// ============================================================================

/// Inline spell suggestion bound to one text field.
#[wasm_bindgen]
pub struct WasmSession {
    session: EditingSession<JsSurface>,
}

#[wasm_bindgen]
impl WasmSession {
    /// Attach to the surface returned by `lookup(surfaceId)`.
    ///
    /// `options` may be `undefined` or a partial
    /// `{ debounceMs, boundaryKeys, advisoryMargin }` object. Throws
    /// "surface not found" when `lookup` returns nothing.
    #[wasm_bindgen(constructor)]
    pub fn new(
        checker: &WasmSpellChecker,
        lookup: Function,
        surface_id: &str,
        options: JsValue,
    ) -> Result<WasmSession, JsError> {
        let options: SessionOptions = if options.is_undefined() || options.is_null() {
            SessionOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options).map_err(|e| JsError::new(&e.to_string()))?
        };
        let registry = JsRegistry::new(lookup);
        let session =
            EditingSession::attach(&registry, surface_id, Rc::clone(&checker.checker), options)
                .map_err(session_error_to_js)?;
        Ok(WasmSession { session })
    }

    /// Draw advisories through `show(advisory)` and `remove(id)`.
    #[wasm_bindgen(js_name = "setRenderer")]
    pub fn set_renderer(&mut self, show: Function, remove: Function) {
        self.session.set_renderer(Box::new(JsRenderer::new(show, remove)));
    }

    /// Call `callback(result)` with every boundary-key lookup result.
    #[wasm_bindgen(js_name = "onResult")]
    pub fn on_result(&mut self, callback: Function) {
        self.session.set_result_callback(move |result| {
            let value = match to_js(result) {
                Ok(v) => v,
                Err(e) => {
                    log::warn!("failed to encode result: {e}");
                    return;
                }
            };
            if let Err(e) = callback.call1(&JsValue::NULL, &value) {
                log::warn!("result callback failed: {e:?}");
            }
        });
    }

    /// Note a caret or selection change at `nowMs` (e.g. `performance.now()`).
    #[wasm_bindgen(js_name = "caretMoved")]
    pub fn caret_moved(&mut self, now_ms: f64) {
        self.session.caret_moved(millis(now_ms));
    }

    /// Advance time to `nowMs`. Returns the new advisory when the debounced
    /// check ran and produced one, otherwise `null`.
    pub fn tick(&mut self, now_ms: f64) -> Result<JsValue, JsError> {
        to_js_result(&self.session.tick(millis(now_ms)))
    }

    /// React to a typed key (the first char of `key`). Returns
    /// `{ word, result, replacement, caret }` when a word was checked,
    /// otherwise `null`.
    #[wasm_bindgen(js_name = "keyTyped")]
    pub fn key_typed(&mut self, key: &str) -> Result<JsValue, JsError> {
        let Some(c) = key.chars().next() else {
            return Ok(JsValue::NULL);
        };
        to_js_result(&self.session.key_typed(c))
    }

    /// Apply the live advisory with id `id`. Returns `false` for stale ids.
    pub fn activate(&mut self, id: f64) -> bool {
        self.session.activate_advisory(AdvisoryId(id as u64))
    }

    /// Remove the live advisory without applying it.
    pub fn dismiss(&mut self) {
        self.session.dismiss_advisory();
    }

    /// Set the caret-move debounce delay in milliseconds.
    #[wasm_bindgen(js_name = "setDebounceMs")]
    pub fn set_debounce_ms(&mut self, ms: f64) {
        self.session.set_debounce(millis(ms));
    }

    /// Set the boundary keys; each char of `keys` is one key.
    #[wasm_bindgen(js_name = "setBoundaryKeys")]
    pub fn set_boundary_keys(&mut self, keys: &str) {
        self.session.set_boundary_keys(parse_keys(keys));
    }

    /// Cancel the pending check, remove the advisory and release the surface.
    pub fn detach(self) {
        drop(self.session.detach());
    }
}
