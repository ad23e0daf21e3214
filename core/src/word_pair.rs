use serde::{Deserialize, Serialize};

use crate::{ExportError, LEFT, RIGHT};

/// The two word lists a name generator combines.
///
/// Serializes as `{"Left": [...], "Right": [...]}`, in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    #[serde(rename = "Left")]
    left: Vec<String>,
    #[serde(rename = "Right")]
    right: Vec<String>,
}

impl WordPair {
    /// Create a new pair from two iterables, keeping their order.
    #[must_use]
    pub fn new(
        left: impl IntoIterator<Item = impl Into<String>>,
        right: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        WordPair {
            left: left.into_iter().map(Into::into).collect(),
            right: right.into_iter().map(Into::into).collect(),
        }
    }

    /// The pair made from the compiled-in [`LEFT`] and [`RIGHT`] lists.
    #[must_use]
    pub fn builtin() -> Self {
        WordPair::new(LEFT.iter().cloned(), RIGHT.iter().cloned())
    }

    /// The adjectives.
    #[inline]
    #[must_use]
    pub fn left(&self) -> &[String] {
        &self.left
    }

    /// The surnames.
    #[inline]
    #[must_use]
    pub fn right(&self) -> &[String] {
        &self.right
    }

    /// Encode as compact JSON, with no trailing newline.
    pub fn to_json(&self) -> Result<Vec<u8>, ExportError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Decode a pair previously written by [`WordPair::to_json`].
    pub fn from_json(bytes: &[u8]) -> Result<Self, ExportError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn serializes_named_fields_in_order() {
        let pair = WordPair::new(["admiring", "adoring"], ["turing", "curie"]);
        let bytes = pair.to_json().unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"Left":["admiring","adoring"],"Right":["turing","curie"]}"#,
        );
    }

    #[test]
    fn empty_lists_are_arrays() {
        let pair = WordPair::new(Vec::<String>::new(), ["curie"]);
        let value: Value = serde_json::from_slice(&pair.to_json().unwrap())
            .unwrap();
        assert_eq!(value, json!({"Left": [], "Right": ["curie"]}));
    }

    #[test]
    fn escaped_strings_survive() {
        let tricky = ["say \"hi\"", r"back\slash", "Schrödinger", "tab\there"];
        let pair = WordPair::new(tricky, ["名前"]);
        let bytes = pair.to_json().unwrap();
        let text = std::str::from_utf8(&bytes).unwrap();
        assert!(text.contains(r#"say \"hi\""#));
        assert!(text.contains(r"back\\slash"));
        assert!(text.contains(r"tab\there"));
        assert_eq!(WordPair::from_json(&bytes).unwrap(), pair);
    }

    #[test]
    fn reserializing_is_byte_identical() {
        let bytes = WordPair::builtin().to_json().unwrap();
        let again = WordPair::from_json(&bytes).unwrap().to_json().unwrap();
        assert_eq!(bytes, again);
    }

    #[test]
    fn duplicates_are_kept() {
        let pair = WordPair::new(["zen", "zen"], ["wu"]);
        assert_eq!(pair.left(), ["zen", "zen"]);
        assert_eq!(pair.right(), ["wu"]);
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = WordPair::from_json(br#"{"Left": []}"#).unwrap_err();
        assert!(matches!(err, ExportError::Serialize(_)));
    }

    #[test]
    fn builtin_matches_statics() {
        let pair = WordPair::builtin();
        assert_eq!(pair.left(), LEFT.as_slice());
        assert_eq!(pair.right(), RIGHT.as_slice());
    }
}
