// Advisory suggestions: non-destructive hints shown near the caret

use serde::Serialize;

use super::surface::Point;

/// Identifies one advisory for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct AdvisoryId(pub u64);

/// A proposed correction shown to the user without touching the text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub id: AdvisoryId,
    /// Text to show, capitalized for the word's position.
    pub replacement: String,
    /// The candidate in dictionary casing. Activation writes this into
    /// every occurrence, capitalizing each one for its own position.
    pub candidate: String,
    /// The word the advisory would replace.
    pub original_word: String,
    /// Caret offset the advisory was computed for.
    pub caret: usize,
    /// Where to draw it: the caret point plus the configured margin, when
    /// the surface can report caret coordinates.
    pub anchor: Option<Point>,
}

/// Draws and removes advisories. Styling is entirely up to the host.
///
/// When the user picks a shown advisory the host calls
/// `EditingSession::activate_advisory` with its id.
pub trait AdvisoryRenderer {
    fn show(&mut self, advisory: &Advisory);
    fn remove(&mut self, id: AdvisoryId);
}

/// A renderer that draws nothing, for hosts that poll
/// `EditingSession::advisory` instead.
#[derive(Debug, Default)]
pub struct NoopRenderer;

impl AdvisoryRenderer for NoopRenderer {
    fn show(&mut self, _advisory: &Advisory) {}

    fn remove(&mut self, _id: AdvisoryId) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advisory_serializes_camel_case() {
        let advisory = Advisory {
            id: AdvisoryId(3),
            replacement: "Hello".to_string(),
            candidate: "hello".to_string(),
            original_word: "helo".to_string(),
            caret: 4,
            anchor: Some(Point::new(15.0, 30.0)),
        };
        let json = serde_json::to_value(&advisory).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["originalWord"], "helo");
        assert_eq!(json["candidate"], "hello");
        assert_eq!(json["anchor"]["x"], 15.0);
    }
}
