//! Caller-supplied option bag and the resolution helper.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known option keys.
pub mod key {
    /// Service key overriding the configured default token.
    pub const TOKEN: &str = "token";
    /// Recipient; the gateway always sets it from the `to` argument.
    pub const TO: &str = "to";
    /// Incident lifecycle action.
    pub const EVENT_TYPE: &str = "event_type";
    /// Name of the monitoring client.
    pub const CLIENT: &str = "client";
    /// URL of the monitoring client.
    pub const CLIENT_URL: &str = "client_url";
    /// Free-form details attached to the event.
    pub const DETAILS: &str = "details";
}

/// Provider-specific overrides passed alongside a notification.
///
/// Every key is optional. Gateways read values through [`Options::resolve`]
/// and [`Options::resolve_or`] so that anything the caller sets wins over the
/// gateway's own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, String>);

impl Options {
    /// Creates an empty option bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an option, replacing any previous value for `key`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets an option, returning the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Removes `key`, returning its value if it was set.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Returns the value stored at `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns true if `key` is present, whatever its value.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no option is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value at `key`, or `default` when the key is absent.
    ///
    /// A present key wins even when its value is empty.
    #[must_use]
    pub fn resolve<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Like [`Options::resolve`] for fields whose default may itself be unset.
    #[must_use]
    pub fn resolve_or<'a>(&'a self, key: &str, default: Option<&'a str>) -> Option<&'a str> {
        self.get(key).or(default)
    }

    /// Copies every entry of `other` that is not already set here.
    pub fn merge_defaults(&mut self, other: &Self) {
        for (key, value) in &other.0 {
            self.0
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Iterates over the options in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_returns_present_value() {
        let options = Options::new().with(key::TOKEN, "T2");

        assert_eq!(options.resolve(key::TOKEN, "T1"), "T2");
    }

    #[test]
    fn resolve_falls_back_when_absent() {
        let options = Options::new();

        assert_eq!(options.resolve(key::EVENT_TYPE, "trigger"), "trigger");
    }

    #[test]
    fn resolve_keeps_empty_value_when_key_present() {
        let options = Options::new().with(key::TOKEN, "");

        assert_eq!(options.resolve(key::TOKEN, "T1"), "");
        assert_eq!(options.resolve_or(key::TOKEN, Some("T1")), Some(""));
    }

    #[test]
    fn resolve_or_returns_none_when_both_absent() {
        let options = Options::new();

        assert_eq!(options.resolve_or(key::CLIENT, None), None);
    }

    #[test]
    fn insert_replaces_previous_value() {
        let mut options = Options::new().with(key::TO, "caller");

        assert_eq!(options.insert(key::TO, "positional"), Some("caller".to_string()));
        assert_eq!(options.get(key::TO), Some("positional"));
    }

    #[test]
    fn remove_drops_key() {
        let mut options = Options::new().with(key::TOKEN, "abc");

        assert_eq!(options.remove(key::TOKEN).as_deref(), Some("abc"));
        assert!(!options.contains(key::TOKEN));
        assert_eq!(options.remove(key::TOKEN), None);
    }

    #[test]
    fn merge_defaults_does_not_override() {
        let mut options = Options::new().with(key::CLIENT, "cli");
        let defaults = Options::new()
            .with(key::CLIENT, "toml")
            .with(key::CLIENT_URL, "https://monitor.example.com");

        options.merge_defaults(&defaults);

        assert_eq!(options.get(key::CLIENT), Some("cli"));
        assert_eq!(options.get(key::CLIENT_URL), Some("https://monitor.example.com"));
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn collects_from_pairs() {
        let options: Options = [("event_type", "resolve"), ("client", "nagios")]
            .into_iter()
            .collect();

        assert!(options.contains("event_type"));
        assert_eq!(
            options.iter().collect::<Vec<_>>(),
            vec![("client", "nagios"), ("event_type", "resolve")]
        );
    }
}
