use crate::parse::{flag, NamedArgs};

/// Documentation title of an object.
pub const TITLE: &str = "title";

/// Documentation description of an object.
pub const DESCRIPTION: &str = "description";

/// Free-form `key=value` properties attached to an object by `PROPS:` lines.
///
/// Keys keep their first-insertion order; assigning an existing key
/// overwrites its value. A key declared without `=` has no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: NamedArgs,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.insert(key.into(), value);
    }

    /// Merges `args` into the properties, later values winning.
    pub fn extend(&mut self, args: NamedArgs) {
        self.entries.extend(args);
    }

    /// Returns the value of `key`, if the key is present and carries a value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|value| value.as_deref())
    }

    /// Interprets `key` as a boolean flag. A key declared without a value is
    /// `true`; a missing key is `false`.
    pub fn get_bool(&self, key: &str) -> bool {
        flag(&self.entries, key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_deref()))
    }

    /// Properties other than the documentation keys ([`TITLE`] and
    /// [`DESCRIPTION`]).
    pub fn non_meta(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.iter()
            .filter(|(key, _)| *key != TITLE && *key != DESCRIPTION)
    }

    pub fn title(&self) -> Option<&str> {
        self.get(TITLE)
    }

    pub fn description(&self) -> Option<&str> {
        self.get(DESCRIPTION)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<NamedArgs> for Properties {
    fn from(entries: NamedArgs) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, Option<String>)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, Option<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(entries: &[(&str, Option<&str>)]) -> Properties {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.map(str::to_string)))
            .collect()
    }

    #[test]
    fn duplicate_keys_overwrite() {
        let mut properties = props(&[("cache", Some("10")), ("cycle", None)]);
        properties.insert("cache", Some("50".to_string()));

        assert_eq!(properties.get("cache"), Some("50"));
        assert_eq!(properties.len(), 2);
        assert!(properties.contains_key("cycle"));
        assert_eq!(properties.get("cycle"), None);
    }

    #[test]
    fn non_meta_skips_documentation_keys() {
        let properties = props(&[
            ("title", Some("Queue")),
            ("lang", Some("plpgsql")),
            ("description", Some("Holds queued tasks")),
        ]);

        assert_eq!(properties.title(), Some("Queue"));
        assert_eq!(properties.description(), Some("Holds queued tasks"));
        assert_eq!(
            properties.non_meta().collect::<Vec<_>>(),
            vec![("lang", Some("plpgsql"))]
        );
    }

    #[test]
    fn bool_values() {
        let properties = props(&[("a", Some("true")), ("b", Some("no")), ("c", None)]);
        assert!(properties.get_bool("a"));
        assert!(!properties.get_bool("b"));
        assert!(properties.get_bool("c"));
        assert!(!properties.get_bool("d"));
    }
}
