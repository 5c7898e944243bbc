/// A diagram style string parsed into an ordered attribute list. Entries are
/// either `key=value` pairs or bare shape tokens (`ellipse`, `rounded`).
/// Parsed once at ingestion so classification reads named fields instead of
/// re-scanning the raw string.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    entries: Vec<(String, Option<String>)>,
}

impl StyleMap {
    pub fn parse(style: &str) -> Self {
        let mut entries = Vec::new();
        for part in style.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match part.split_once('=') {
                Some((key, value)) => {
                    entries.push((key.trim().to_string(), Some(value.trim().to_string())));
                }
                None => entries.push((part.to_string(), None)),
            }
        }
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First value for `key`; bare tokens yield `None` here.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn has_token(&self, token: &str) -> bool {
        self.entries
            .iter()
            .any(|(k, v)| v.is_none() && k == token)
    }

    /// Whether any attribute name contains `fragment`. Case-sensitive, so
    /// `opacity` matches the plain `opacity` key but not `fillOpacity`.
    pub fn any_key_contains(&self, fragment: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.contains(fragment))
    }

    /// Whether any attribute value contains `fragment`.
    pub fn any_value_contains(&self, fragment: &str) -> bool {
        self.entries
            .iter()
            .any(|(_, v)| v.as_deref().is_some_and(|v| v.contains(fragment)))
    }
}
