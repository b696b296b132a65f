use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A flat map from metric key (such as `loc` or `ccnMethod`) to its aggregated value.
///
/// This is the shape persisted in history records and exposed to templates as
/// `sum` and `avg`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Aggregates(BTreeMap<String, f64>);

impl Aggregates {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub(crate) fn set(&mut self, key: &str, value: f64) {
        let _ = self.0.insert(key.to_string(), value);
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Aggregates {
    fn from_iter<T: IntoIterator<Item = (K, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Round to two decimals, folding negative zero into zero.
pub(crate) fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0 + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_hundredths() {
        assert!((round_to_hundredths(1.234_5) - 1.23).abs() < f64::EPSILON);
        assert!((round_to_hundredths(2.0 / 3.0) - 0.67).abs() < f64::EPSILON);
        assert!((round_to_hundredths(7.1 - 7.0) - 0.1).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_to_hundredths_folds_negative_zero() {
        let rounded = round_to_hundredths(-0.001);
        assert!(rounded.is_sign_positive());
        assert_eq!(rounded.to_string(), "0");
    }

    #[test]
    fn test_serialized_shape_is_a_plain_object() {
        let aggregates: Aggregates = [("loc", 10.0), ("ccn", 2.5)].into_iter().collect();
        let json = serde_json::to_string(&aggregates).unwrap();
        assert_eq!(json, r#"{"ccn":2.5,"loc":10.0}"#);

        let parsed: Aggregates = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, aggregates);
        assert_eq!(parsed.get("loc"), Some(10.0));
        assert_eq!(parsed.get("missing"), None);
    }
}
