// JavaScript host collaborators: surfaces, surface lookup and rendering
//
// A surface is any JS object shaped like an `<input>` or `<textarea>`:
//   value                       text content (read/write)
//   selectionStart              caret offset in UTF-16 units
//   setSelectionRange(s, e)     move the caret
//   caretPoint(offset)          optional, returns {x, y} for advisory placement

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use caretspell_engine::session::{
    Advisory, AdvisoryId, AdvisoryRenderer, InputSurface, Point, SurfaceRegistry,
};

use crate::offsets::{char_to_utf16_offset, utf16_to_char_offset};

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    get(target, name).dyn_into::<Function>().ok()
}

// ============================================================================
// JsSurface
// ============================================================================

/// An input surface backed by a JS element-like object.
pub struct JsSurface {
    element: JsValue,
}

impl JsSurface {
    pub fn new(element: JsValue) -> Self {
        Self { element }
    }
}

impl InputSurface for JsSurface {
    fn text(&self) -> String {
        get(&self.element, "value").as_string().unwrap_or_default()
    }

    fn caret(&self) -> usize {
        let units = get(&self.element, "selectionStart").as_f64().unwrap_or(0.0);
        utf16_to_char_offset(&self.text(), units.max(0.0) as usize)
    }

    fn set_text(&mut self, text: &str) {
        if let Err(e) = Reflect::set(&self.element, &JsValue::from_str("value"), &JsValue::from_str(text)) {
            log::warn!("failed to write surface value: {e:?}");
        }
    }

    fn set_caret(&mut self, offset: usize) {
        let Some(set_range) = method(&self.element, "setSelectionRange") else {
            log::warn!("surface has no setSelectionRange");
            return;
        };
        let units = JsValue::from_f64(char_to_utf16_offset(&self.text(), offset) as f64);
        if let Err(e) = set_range.call2(&self.element, &units, &units) {
            log::warn!("setSelectionRange failed: {e:?}");
        }
    }

    fn caret_point(&self, offset: usize) -> Option<Point> {
        let caret_point = method(&self.element, "caretPoint")?;
        let units = JsValue::from_f64(char_to_utf16_offset(&self.text(), offset) as f64);
        let value = caret_point.call1(&self.element, &units).ok()?;
        serde_wasm_bindgen::from_value(value).ok()
    }
}

// ============================================================================
// JsRegistry
// ============================================================================

/// Resolves surface ids through a JS function `(id) => element | null`,
/// e.g. `(id) => document.getElementById(id)`.
pub struct JsRegistry {
    lookup: Function,
}

impl JsRegistry {
    pub fn new(lookup: Function) -> Self {
        Self { lookup }
    }
}

impl SurfaceRegistry for JsRegistry {
    type Surface = JsSurface;

    fn resolve(&self, id: &str) -> Option<JsSurface> {
        let element = self
            .lookup
            .call1(&JsValue::NULL, &JsValue::from_str(id))
            .ok()?;
        if element.is_null() || element.is_undefined() || !element.is_object() {
            return None;
        }
        Some(JsSurface::new(element))
    }
}

// ============================================================================
// JsRenderer
// ============================================================================

/// Forwards advisories to JS callbacks: `show(advisory)` and `remove(id)`.
pub struct JsRenderer {
    show: Function,
    remove: Function,
}

impl JsRenderer {
    pub fn new(show: Function, remove: Function) -> Self {
        Self { show, remove }
    }
}

impl AdvisoryRenderer for JsRenderer {
    fn show(&mut self, advisory: &Advisory) {
        let value = match crate::to_js(advisory) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("failed to encode advisory: {e}");
                return;
            }
        };
        if let Err(e) = self.show.call1(&JsValue::NULL, &value) {
            log::warn!("advisory show callback failed: {e:?}");
        }
    }

    fn remove(&mut self, id: AdvisoryId) {
        if let Err(e) = self.remove.call1(&JsValue::NULL, &JsValue::from_f64(id.0 as f64)) {
            log::warn!("advisory remove callback failed: {e:?}");
        }
    }
}
