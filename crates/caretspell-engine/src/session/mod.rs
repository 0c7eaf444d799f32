// EditingSession: spell suggestion bound to one input surface.
//
// A session reacts to two triggers:
// - caret moves restart a debounce deadline; when it fires the word at the
//   caret is checked and, if an unambiguous correction exists, an advisory
//   is shown (the text is not touched until the advisory is activated);
// - a boundary key (space by default) checks the word just finished and
//   replaces it in place, then repositions the caret.
//
// Everything runs on the host's event loop. The session owns its debounce
// deadline and at most one live advisory; no state is shared between
// sessions.

pub mod advisory;
pub mod debounce;
pub mod extract;
pub mod options;
pub mod replace;
pub mod surface;

use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;

use crate::checker::SpellChecker;
use crate::matcher::MatchResult;

pub use advisory::{Advisory, AdvisoryId, AdvisoryRenderer, NoopRenderer};
pub use debounce::Debouncer;
pub use extract::{is_checkable, locate_word_at_offset};
pub use options::SessionOptions;
pub use replace::{apply_replacement, choose_replacement};
pub use surface::{InputSurface, MemoryRegistry, Point, SurfaceRegistry, TextBuffer};

/// Error type for session failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No surface is registered under the requested id.
    #[error("surface not found: {0}")]
    SurfaceNotFound(String),
}

/// Callback receiving every boundary-path lookup.
type ResultCallback = Box<dyn FnMut(&MatchResult)>;

/// What the boundary-key path did for one checked word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryOutcome {
    /// The word that was checked.
    pub word: String,
    /// The raw lookup result.
    pub result: MatchResult,
    /// The replacement written into the text, if any.
    pub replacement: Option<String>,
    /// Caret offset after the check.
    pub caret: usize,
}

/// Spell suggestion bound to one input surface.
pub struct EditingSession<S: InputSurface> {
    surface_id: String,
    surface: S,
    checker: Rc<SpellChecker>,
    options: SessionOptions,
    debouncer: Debouncer,
    renderer: Box<dyn AdvisoryRenderer>,
    /// The live advisory, if one is shown.
    advisory: Option<Advisory>,
    next_advisory_id: u64,
    on_result: Option<ResultCallback>,
}

impl<S: InputSurface> EditingSession<S> {
    /// Bind a session to the surface registered under `surface_id`.
    ///
    /// Fails with [`SessionError::SurfaceNotFound`] if the registry has no
    /// such surface; nothing is looked up in that case.
    pub fn attach<R>(
        registry: &R,
        surface_id: &str,
        checker: Rc<SpellChecker>,
        options: SessionOptions,
    ) -> Result<Self, SessionError>
    where
        R: SurfaceRegistry<Surface = S>,
    {
        let Some(surface) = registry.resolve(surface_id) else {
            log::warn!("attach failed: surface {surface_id:?} not found");
            return Err(SessionError::SurfaceNotFound(surface_id.to_string()));
        };
        log::debug!("attached to surface {surface_id:?}");
        Ok(Self::new(surface_id, surface, checker, options))
    }

    /// Bind a session to a surface the host already holds.
    pub fn new(
        surface_id: impl Into<String>,
        surface: S,
        checker: Rc<SpellChecker>,
        options: SessionOptions,
    ) -> Self {
        Self {
            surface_id: surface_id.into(),
            surface,
            checker,
            debouncer: Debouncer::new(options.debounce),
            options,
            renderer: Box::new(NoopRenderer),
            advisory: None,
            next_advisory_id: 1,
            on_result: None,
        }
    }

    /// Unbind: cancel the pending check, remove the live advisory and hand
    /// the surface back.
    pub fn detach(mut self) -> S {
        self.debouncer.cancel();
        self.dismiss_advisory();
        log::debug!("detached from surface {:?}", self.surface_id);
        self.surface
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn AdvisoryRenderer>) {
        self.renderer = renderer;
    }

    /// Receive the raw result of every boundary-path lookup.
    pub fn set_result_callback(&mut self, callback: impl FnMut(&MatchResult) + 'static) {
        self.on_result = Some(Box::new(callback));
    }

    pub fn surface_id(&self) -> &str {
        &self.surface_id
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub fn set_debounce(&mut self, delay: Duration) {
        self.options.debounce = delay;
        self.debouncer.set_delay(delay);
    }

    pub fn set_boundary_keys(&mut self, keys: Vec<char>) {
        self.options.boundary_keys = keys;
    }

    /// The live advisory, if any.
    pub fn advisory(&self) -> Option<&Advisory> {
        self.advisory.as_ref()
    }

    /// Whether a caret check is waiting for its deadline.
    pub fn is_check_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    // =========================================================================
    // Caret-move path (advisory)
    // =========================================================================

    /// Note a caret or selection change at host time `now`. Restarts the
    /// debounce deadline; an earlier pending check is dropped.
    pub fn caret_moved(&mut self, now: Duration) {
        self.debouncer.restart(now);
    }

    /// Advance host time. When the debounce deadline has passed, the word
    /// at the caret is checked and the resulting advisory (if any) is
    /// returned.
    pub fn tick(&mut self, now: Duration) -> Option<&Advisory> {
        if !self.debouncer.fire(now) {
            return None;
        }
        self.check_at_caret()
    }

    /// Run the caret check immediately: remove the live advisory, then
    /// show a new one if the caret word has an unambiguous correction.
    pub fn check_at_caret(&mut self) -> Option<&Advisory> {
        self.dismiss_advisory();

        let caret = self.surface.caret();
        if caret == 0 {
            return None;
        }
        let text = self.surface.text();
        let word = locate_word_at_offset(&text, caret)?;
        if !is_checkable(&word) {
            return None;
        }

        let result = self.checker.find_suggestions(&word);
        let replacement = choose_replacement(&result, &text, &word);
        let candidate = match result.sole_candidate() {
            Some(candidate) if candidate != word && replacement != word => candidate.to_string(),
            _ => {
                log::debug!("caret word {word:?}: no advisory");
                return None;
            }
        };

        let id = AdvisoryId(self.next_advisory_id);
        self.next_advisory_id += 1;
        let anchor = self
            .surface
            .caret_point(caret)
            .map(|p| p.offset_by(self.options.advisory_margin));
        let advisory = Advisory {
            id,
            replacement,
            candidate,
            original_word: word,
            caret,
            anchor,
        };
        log::debug!(
            "advisory {:?}: {:?} -> {:?}",
            id,
            advisory.original_word,
            advisory.replacement
        );
        self.renderer.show(&advisory);
        self.advisory = Some(advisory);
        self.advisory.as_ref()
    }

    /// Apply the live advisory with the given id and remove it.
    ///
    /// Returns `false` if `id` is not the live advisory.
    pub fn activate_advisory(&mut self, id: AdvisoryId) -> bool {
        let Some(advisory) = self.advisory.take_if(|a| a.id == id) else {
            return false;
        };
        let text = self.surface.text();
        let corrected = apply_replacement(&text, &advisory.original_word, &advisory.candidate);
        self.surface.set_text(&corrected);
        self.renderer.remove(advisory.id);
        true
    }

    /// Remove the live advisory without applying it.
    pub fn dismiss_advisory(&mut self) {
        if let Some(advisory) = self.advisory.take() {
            self.renderer.remove(advisory.id);
        }
    }

    // =========================================================================
    // Boundary-key path (automatic replacement)
    // =========================================================================

    /// React to `key` having just been typed at the caret.
    ///
    /// If `key` is a boundary key, the word ending where it was typed is
    /// looked up. An unambiguous replacement is written in place and the
    /// caret moves by the length change. When there is no replacement, or
    /// writing it leaves the text unchanged, the caret stays where it was.
    /// Every lookup is reported to the result callback.
    ///
    /// Returns `None` when nothing was checked.
    pub fn key_typed(&mut self, key: char) -> Option<BoundaryOutcome> {
        if !self.options.is_boundary_key(key) {
            return None;
        }
        let caret = self.surface.caret();
        // Offset at which the boundary key was typed.
        let position = caret.checked_sub(1)?;
        let text = self.surface.text();
        let word = locate_word_at_offset(&text, position)?;
        if !is_checkable(&word) {
            return None;
        }

        let result = self.checker.find_suggestions(&word);
        let replacement = choose_replacement(&result, &text, &word);

        let corrected = match result.sole_candidate() {
            Some(candidate) => apply_replacement(&text, &word, candidate),
            None => text.clone(),
        };

        let (replacement, new_caret) = if corrected == text {
            self.surface.set_caret(caret);
            (None, caret)
        } else {
            self.surface.set_text(&corrected);
            let delta = replacement.chars().count() as isize - word.chars().count() as isize;
            let new_caret = (position as isize + delta + 1).max(0) as usize;
            self.surface.set_caret(new_caret);
            log::debug!("replaced {word:?} with {replacement:?}");
            (Some(replacement), self.surface.caret())
        };

        if let Some(callback) = self.on_result.as_mut() {
            callback(&result);
        }

        Some(BoundaryOutcome {
            word,
            result,
            replacement,
            caret: new_caret,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::dictionary::Dictionary;

    /// Records every show/remove call.
    #[derive(Default)]
    struct RecordingRenderer {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl AdvisoryRenderer for RecordingRenderer {
        fn show(&mut self, advisory: &Advisory) {
            self.events
                .borrow_mut()
                .push(format!("show {} {}", advisory.id.0, advisory.replacement));
        }

        fn remove(&mut self, id: AdvisoryId) {
            self.events.borrow_mut().push(format!("remove {}", id.0));
        }
    }

    /// A buffer that reports a fixed caret point.
    struct PointedBuffer(TextBuffer);

    impl InputSurface for PointedBuffer {
        fn text(&self) -> String {
            self.0.text()
        }
        fn caret(&self) -> usize {
            self.0.caret()
        }
        fn set_text(&mut self, text: &str) {
            self.0.set_text(text);
        }
        fn set_caret(&mut self, offset: usize) {
            self.0.set_caret(offset);
        }
        fn caret_point(&self, offset: usize) -> Option<Point> {
            Some(Point::new(offset as f64 * 8.0, 20.0))
        }
    }

    fn checker() -> Rc<SpellChecker> {
        Rc::new(SpellChecker::new(Dictionary::from_words([
            "hello", "world", "friend", "have", "a", "i",
        ])))
    }

    fn session(text: &str, caret: usize) -> EditingSession<TextBuffer> {
        EditingSession::new(
            "note",
            TextBuffer::with_caret(text, caret),
            checker(),
            SessionOptions::default(),
        )
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    // -- attach / detach --

    #[test]
    fn attach_unknown_surface_fails() {
        let registry = MemoryRegistry::new();
        let err = EditingSession::attach(&registry, "missing", checker(), SessionOptions::default())
            .err()
            .unwrap();
        assert_eq!(err, SessionError::SurfaceNotFound("missing".to_string()));
        assert_eq!(err.to_string(), "surface not found: missing");
    }

    #[test]
    fn attach_binds_registered_surface() {
        let mut registry = MemoryRegistry::new();
        let handle = registry.insert("note", TextBuffer::new("helo "));
        let mut s =
            EditingSession::attach(&registry, "note", checker(), SessionOptions::default()).unwrap();
        assert_eq!(s.surface_id(), "note");
        s.key_typed(' ').unwrap();
        assert_eq!(handle.borrow().as_str(), "Hello ");
    }

    #[test]
    fn detach_removes_advisory_and_cancels_timer() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut s = session("say helo", 8);
        s.set_renderer(Box::new(RecordingRenderer {
            events: Rc::clone(&events),
        }));
        s.check_at_caret().unwrap();
        s.caret_moved(ms(0));
        assert!(s.is_check_pending());
        let surface = s.detach();
        assert_eq!(surface.as_str(), "say helo");
        assert_eq!(*events.borrow(), vec!["show 1 hello", "remove 1"]);
    }

    // -- caret-move path --

    #[test]
    fn advisory_after_debounce() {
        let mut s = session("say helo there", 6);
        s.caret_moved(ms(0));
        assert!(s.tick(ms(999)).is_none());
        let advisory = s.tick(ms(1000)).unwrap();
        assert_eq!(advisory.replacement, "hello");
        assert_eq!(advisory.original_word, "helo");
        assert_eq!(advisory.caret, 6);
        assert_eq!(advisory.anchor, None);
        // Text is untouched until activation.
        assert_eq!(s.surface().as_str(), "say helo there");
    }

    #[test]
    fn latest_caret_move_wins() {
        let mut s = session("say helo there", 6);
        s.caret_moved(ms(0));
        s.surface_mut().set_caret(12);
        s.caret_moved(ms(500));
        assert!(s.tick(ms(1000)).is_none());
        // Caret now on "there", which has no correction.
        assert!(s.tick(ms(1500)).is_none());
        assert!(!s.is_check_pending());
    }

    #[test]
    fn new_check_replaces_live_advisory() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut s = session("helo wrld", 2);
        s.set_renderer(Box::new(RecordingRenderer {
            events: Rc::clone(&events),
        }));
        assert_eq!(s.check_at_caret().unwrap().replacement, "Hello");
        s.surface_mut().set_caret(7);
        assert_eq!(s.check_at_caret().unwrap().replacement, "world");
        assert_eq!(
            *events.borrow(),
            vec!["show 1 Hello", "remove 1", "show 2 world"]
        );
        assert_eq!(s.advisory().unwrap().id, AdvisoryId(2));
    }

    #[test]
    fn no_advisory_for_correct_word() {
        let mut s = session("say hello", 9);
        assert!(s.check_at_caret().is_none());
    }

    #[test]
    fn no_advisory_for_dictionary_word_at_sentence_start() {
        let mut s = session("hello world", 3);
        assert!(s.check_at_caret().is_none());
    }

    #[test]
    fn advisory_keeps_dictionary_casing_for_activation() {
        let mut s = session("Go. helo and helo there", 6);
        let advisory = s.check_at_caret().unwrap();
        assert_eq!(advisory.replacement, "Hello");
        assert_eq!(advisory.candidate, "hello");
        let id = advisory.id;
        assert!(s.activate_advisory(id));
        assert_eq!(s.surface().as_str(), "Go. Hello and hello there");
    }

    #[test]
    fn no_advisory_at_offset_zero_or_on_numbers() {
        let mut s = session("helo", 0);
        assert!(s.check_at_caret().is_none());

        let mut s = session("say 1234", 6);
        assert!(s.check_at_caret().is_none());
    }

    #[test]
    fn activate_applies_and_removes() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut s = session("Go. helo there", 6);
        s.set_renderer(Box::new(RecordingRenderer {
            events: Rc::clone(&events),
        }));
        let id = s.check_at_caret().unwrap().id;
        assert!(s.activate_advisory(id));
        assert_eq!(s.surface().as_str(), "Go. Hello there");
        assert!(s.advisory().is_none());
        assert_eq!(*events.borrow(), vec!["show 1 Hello", "remove 1"]);
        assert!(!s.activate_advisory(id));
    }

    #[test]
    fn activate_stale_id_is_noop() {
        let mut s = session("say helo", 8);
        s.check_at_caret().unwrap();
        assert!(!s.activate_advisory(AdvisoryId(99)));
        assert_eq!(s.surface().as_str(), "say helo");
        assert!(s.advisory().is_some());
    }

    #[test]
    fn anchor_uses_caret_point_and_margin() {
        let mut s = EditingSession::new(
            "note",
            PointedBuffer(TextBuffer::with_caret("say helo", 8)),
            checker(),
            SessionOptions::default(),
        );
        let advisory = s.check_at_caret().unwrap();
        assert_eq!(advisory.anchor, Some(Point::new(69.0, 30.0)));
    }

    // -- boundary-key path --

    #[test]
    fn boundary_key_replaces_and_moves_caret() {
        let mut s = session("I have a helo friend ", 14);
        let outcome = s.key_typed(' ').unwrap();
        assert_eq!(outcome.word, "helo");
        assert_eq!(outcome.replacement.as_deref(), Some("hello"));
        assert_eq!(s.surface().as_str(), "I have a hello friend ");
        assert_eq!(outcome.caret, 15);
        assert_eq!(s.surface().caret(), 15);
    }

    #[test]
    fn boundary_key_capitalizes_each_occurrence_for_its_position() {
        let mut s = session("Go. helo and helo ", 18);
        let outcome = s.key_typed(' ').unwrap();
        assert_eq!(outcome.replacement.as_deref(), Some("Hello"));
        assert_eq!(s.surface().as_str(), "Go. Hello and hello ");
        assert_eq!(s.surface().caret(), 19);
    }

    #[test]
    fn boundary_key_restores_caret_when_text_is_unchanged() {
        // The token "(helo" does not match "helo", so nothing is written.
        let mut s = session("say (helo ", 10);
        let outcome = s.key_typed(' ').unwrap();
        assert_eq!(outcome.word, "helo");
        assert_eq!(outcome.replacement, None);
        assert_eq!(outcome.caret, 10);
        assert_eq!(s.surface().as_str(), "say (helo ");
        assert_eq!(s.surface().caret(), 10);
    }

    #[test]
    fn boundary_key_without_replacement_restores_caret() {
        let mut s = session("say xyzzy ", 10);
        let outcome = s.key_typed(' ').unwrap();
        assert_eq!(outcome.replacement, None);
        assert_eq!(outcome.caret, 10);
        assert_eq!(s.surface().as_str(), "say xyzzy ");
    }

    #[test]
    fn boundary_key_reports_every_result() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut s = session("say xyzzy ", 10);
        let sink = Rc::clone(&seen);
        s.set_result_callback(move |r| sink.borrow_mut().push(r.clone()));
        s.key_typed(' ').unwrap();
        assert_eq!(*seen.borrow(), vec![MatchResult::candidates(Vec::new())]);
    }

    #[test]
    fn non_boundary_keys_are_ignored() {
        let mut s = session("helo", 4);
        assert!(s.key_typed('o').is_none());
        assert_eq!(s.surface().as_str(), "helo");
    }

    #[test]
    fn boundary_key_skips_numbers_and_empty() {
        let mut s = session("pay 100 ", 8);
        assert!(s.key_typed(' ').is_none());

        let mut s = session("  ", 2);
        assert!(s.key_typed(' ').is_none());

        let mut s = session("", 0);
        assert!(s.key_typed(' ').is_none());
    }

    #[test]
    fn boundary_key_shorter_replacement() {
        let checker = Rc::new(SpellChecker::new(Dictionary::from_words(["cat"])));
        let mut s = EditingSession::new(
            "note",
            TextBuffer::with_caret("my catt ", 8),
            checker,
            SessionOptions::default(),
        );
        let outcome = s.key_typed(' ').unwrap();
        assert_eq!(s.surface().as_str(), "my cat ");
        assert_eq!(outcome.caret, 7);
    }

    #[test]
    fn custom_boundary_keys() {
        let mut s = session("say helo,", 9);
        s.set_boundary_keys(vec![',']);
        let outcome = s.key_typed(',').unwrap();
        assert_eq!(outcome.word, "helo");
        assert_eq!(s.surface().as_str(), "say hello,");
        assert_eq!(s.surface().caret(), 10);
    }

    #[test]
    fn set_debounce_changes_delay() {
        let mut s = session("say helo", 8);
        s.set_debounce(ms(10));
        s.caret_moved(ms(0));
        assert!(s.tick(ms(10)).is_some());
        assert_eq!(s.options().debounce, ms(10));
    }
}
