use crate::Result;
use crate::metrics::Metrics;
use ohno::app_err;
use regex::Regex;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A named selection rule over the measurement set.
#[derive(Debug, Clone)]
pub struct Group {
    name: String,
    pattern: Regex,
}

impl Group {
    /// Create a group by compiling its match pattern
    ///
    /// # Errors
    /// Returns an error if the pattern is not a valid regular expression
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self> {
        let name = name.into();
        let pattern = Regex::new(pattern).map_err(|e| app_err!("invalid match pattern for group '{name}': {e}"))?;

        Ok(Self { name, pattern })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    #[must_use]
    pub fn matches(&self, unit_name: &str) -> bool {
        self.pattern.is_match(unit_name)
    }

    /// Select the part of the measurement set that belongs to this group.
    #[must_use]
    pub fn reduce(&self, metrics: &Metrics) -> Metrics {
        metrics.retain(|name| self.matches(name))
    }
}

impl Serialize for Group {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Group", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("match", self.pattern.as_str())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Group {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(deny_unknown_fields)]
        struct GroupData {
            name: String,
            #[serde(rename = "match")]
            pattern: String,
        }

        let data = GroupData::deserialize(deserializer)?;

        Self::new(data.name, &data.pattern).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{ClassMetrics, FileMetrics, PackageMetrics};

    fn metrics() -> Metrics {
        Metrics {
            classes: vec![
                ClassMetrics { name: "App\\Core\\Kernel".into(), ..ClassMetrics::default() },
                ClassMetrics { name: "App\\Core\\Container".into(), ..ClassMetrics::default() },
                ClassMetrics { name: "App\\Http\\Router".into(), ..ClassMetrics::default() },
            ],
            files: vec![FileMetrics { name: "src/Core/Kernel.php".into(), ..FileMetrics::default() }],
            packages: vec![
                PackageMetrics { name: "App\\Core".into(), ..PackageMetrics::default() },
                PackageMetrics { name: "App\\Http".into(), ..PackageMetrics::default() },
            ],
            ..Metrics::default()
        }
    }

    #[test]
    fn test_reduce_keeps_matching_units() {
        let group = Group::new("core", r"(?i)core").unwrap();
        let subset = group.reduce(&metrics());

        assert_eq!(subset.classes.len(), 2);
        assert_eq!(subset.files.len(), 1);
        assert_eq!(subset.packages.len(), 1);
        assert_eq!(subset.packages[0].name, "App\\Core");
    }

    #[test]
    fn test_groups_may_overlap() {
        let all = Group::new("all", "^App").unwrap();
        let http = Group::new("http", "Http").unwrap();
        let full = metrics();

        assert_eq!(all.reduce(&full).classes.len(), 3);
        assert_eq!(http.reduce(&full).classes.len(), 1);
    }

    #[test]
    fn test_reduce_without_matches_is_empty() {
        let group = Group::new("none", "^Vendor").unwrap();
        assert!(group.reduce(&metrics()).is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_rejected() {
        let err = Group::new("broken", "(unclosed").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_unsafe_name_is_accepted_at_construction() {
        let group = Group::new("not/a\0dir", ".*").unwrap();
        assert_eq!(group.name(), "not/a\0dir");
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Holder {
            groups: Vec<Group>,
        }

        let holder: Holder = toml::from_str("[[groups]]\nname = \"core\"\nmatch = \"^App\\\\\\\\Core\"\n").unwrap();
        assert_eq!(holder.groups.len(), 1);
        assert_eq!(holder.groups[0].name(), "core");
        assert!(holder.groups[0].matches("App\\Core\\Kernel"));
        assert!(!holder.groups[0].matches("App\\Http\\Router"));
    }

    #[test]
    fn test_deserialize_rejects_bad_pattern() {
        #[derive(Debug, Deserialize)]
        struct Holder {
            #[expect(dead_code, reason = "only deserialization is exercised")]
            groups: Vec<Group>,
        }

        let result = toml::from_str::<Holder>("[[groups]]\nname = \"x\"\nmatch = \"[\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_round_trips_pattern() {
        let group = Group::new("core", "Core").unwrap();
        let json = serde_json::to_value(&group).unwrap();
        assert_eq!(json["name"], "core");
        assert_eq!(json["match"], "Core");
    }
}
