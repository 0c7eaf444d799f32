// Input surfaces: the text fields a session reads from and writes to

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A point in the host's coordinate space (pixels for a browser).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point shifted by `offset`.
    pub fn offset_by(self, offset: Point) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }
}

/// A text field with a caret.
///
/// Offsets are char offsets into [`InputSurface::text`].
pub trait InputSurface {
    /// The full current text.
    fn text(&self) -> String;

    /// The caret offset (selection start).
    fn caret(&self) -> usize;

    /// Replace the full text.
    fn set_text(&mut self, text: &str);

    /// Move the caret.
    fn set_caret(&mut self, offset: usize);

    /// Where the caret at `offset` is drawn, if the host knows.
    fn caret_point(&self, _offset: usize) -> Option<Point> {
        None
    }
}

/// Resolves opaque surface ids to surfaces at attach time.
pub trait SurfaceRegistry {
    type Surface: InputSurface;

    /// Find the surface registered under `id`.
    fn resolve(&self, id: &str) -> Option<Self::Surface>;
}

// ============================================================================
// TextBuffer
// ============================================================================

/// An in-memory input surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    caret: usize,
}

impl TextBuffer {
    /// A buffer holding `text` with the caret at its end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = text.chars().count();
        Self { text, caret }
    }

    /// A buffer holding `text` with the caret at `caret` (clamped).
    pub fn with_caret(text: impl Into<String>, caret: usize) -> Self {
        let mut buffer = Self::new(text);
        buffer.set_caret(caret);
        buffer
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Type one character at the caret, as a keystroke would.
    pub fn insert(&mut self, c: char) {
        let byte_pos = self
            .text
            .char_indices()
            .nth(self.caret)
            .map_or(self.text.len(), |(i, _)| i);
        self.text.insert(byte_pos, c);
        self.caret += 1;
    }
}

impl InputSurface for TextBuffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.caret = self.caret.min(self.char_len());
    }

    fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.char_len());
    }
}

/// Shared handles let the host keep access to a surface it handed to a
/// session.
impl<T: InputSurface> InputSurface for Rc<RefCell<T>> {
    fn text(&self) -> String {
        self.borrow().text()
    }

    fn caret(&self) -> usize {
        self.borrow().caret()
    }

    fn set_text(&mut self, text: &str) {
        self.borrow_mut().set_text(text);
    }

    fn set_caret(&mut self, offset: usize) {
        self.borrow_mut().set_caret(offset);
    }

    fn caret_point(&self, offset: usize) -> Option<Point> {
        self.borrow().caret_point(offset)
    }
}

/// A registry of shared in-memory buffers keyed by id.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    surfaces: HashMap<String, Rc<RefCell<TextBuffer>>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `buffer` under `id` and return the shared handle.
    pub fn insert(&mut self, id: impl Into<String>, buffer: TextBuffer) -> Rc<RefCell<TextBuffer>> {
        let handle = Rc::new(RefCell::new(buffer));
        self.surfaces.insert(id.into(), Rc::clone(&handle));
        handle
    }
}

impl SurfaceRegistry for MemoryRegistry {
    type Surface = Rc<RefCell<TextBuffer>>;

    fn resolve(&self, id: &str) -> Option<Self::Surface> {
        self.surfaces.get(id).cloned()
    }
}
