// Subject identity and navigation context
use std::fmt;

/// Query parameter and storage key carrying the subject identifier.
pub const USER_ID_KEY: &str = "user_id";

/// Identifier used when neither navigation nor storage supply one.
pub const DEFAULT_USER_ID: &str = "1";

/// Opaque key identifying whose dashboard is shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubjectId(String);

impl SubjectId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SubjectId {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ID)
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Query parameters of the address the dashboard was opened with.
#[derive(Debug, Clone, Default)]
pub struct NavigationContext {
    params: Vec<(String, String)>,
}

impl NavigationContext {
    /// Parse the query string of a page address such as `/dashboard?user_id=42`.
    /// A bare query (`user_id=42`) is accepted as well.
    pub fn parse(address: &str) -> Self {
        let query = match address.split_once('?') {
            Some((_, query)) => query,
            None if address.contains('=') => address,
            None => "",
        };
        let query = query.split('#').next().unwrap_or_default();

        let params = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();

        Self { params }
    }

    /// First value for `key`, treating an empty value as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .unwrap_or(spaced)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_address_query() {
        let nav = NavigationContext::parse("/dashboard?user_id=42&tab=overview");
        assert_eq!(nav.get("user_id"), Some("42"));
        assert_eq!(nav.get("tab"), Some("overview"));
        assert_eq!(nav.get("missing"), None);
    }

    #[test]
    fn test_parse_decodes_and_ignores_fragment() {
        let nav = NavigationContext::parse("http://host/dashboard?user_id=alice%40corp+x#top");
        assert_eq!(nav.get("user_id"), Some("alice@corp x"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let nav = NavigationContext::parse("/dashboard?user_id=");
        assert_eq!(nav.get("user_id"), None);

        let nav = NavigationContext::parse("/dashboard");
        assert_eq!(nav.get("user_id"), None);
    }

    #[test]
    fn test_empty_first_value_shadows_later_ones() {
        let nav = NavigationContext::parse("/dashboard?user_id=&user_id=5");
        assert_eq!(nav.get(USER_ID_KEY), None);
    }

    #[test]
    fn test_bare_query() {
        let nav = NavigationContext::parse("user_id=7");
        assert_eq!(nav.get(USER_ID_KEY), Some("7"));
    }
}
