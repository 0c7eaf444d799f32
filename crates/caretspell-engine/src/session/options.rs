// Session configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::surface::Point;

/// Default debounce delay for the caret-move path.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Default offset of an advisory from the caret point.
pub const DEFAULT_ADVISORY_MARGIN: Point = Point { x: 5.0, y: 10.0 };

/// Options for one editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionOptions {
    /// Quiet time after the last caret move before the caret word is checked.
    #[serde(rename = "debounceMs", with = "millis")]
    pub debounce: Duration,

    /// Keys that end a word and trigger automatic correction.
    pub boundary_keys: Vec<char>,

    /// Offset of an advisory anchor from the caret point.
    pub advisory_margin: Point,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            boundary_keys: vec![' '],
            advisory_margin: DEFAULT_ADVISORY_MARGIN,
        }
    }
}

impl SessionOptions {
    pub fn is_boundary_key(&self, key: char) -> bool {
        self.boundary_keys.contains(&key)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
