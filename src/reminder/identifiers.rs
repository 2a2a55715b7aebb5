use std::collections::HashMap;

/// Source-platform username -> chat identifier.
///
/// A key can be present without a usable identifier (`user:` in the raw
/// string). Such entries resolve exactly like missing keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierMap {
    entries: HashMap<String, Option<String>>,
}

impl IdentifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, username: impl Into<String>, identifier: Option<String>) {
        self.entries.insert(username.into(), identifier);
    }

    /// Raw lookup: `None` if the key is missing, `Some(None)` if it is unresolved.
    pub fn get(&self, username: &str) -> Option<Option<&str>> {
        self.entries.get(username).map(|id| id.as_deref())
    }

    /// The identifier to mention, if one is configured and non-empty.
    pub fn resolve(&self, username: &str) -> Option<&str> {
        self.get(username).flatten().filter(|id| !id.is_empty())
    }

    pub fn contains(&self, username: &str) -> bool {
        self.entries.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for IdentifierMap {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (username, identifier) in iter {
            map.insert(username, identifier);
        }
        map
    }
}

/// Parse `user:ID,user:ID,...` into an [`IdentifierMap`].
///
/// Never fails. Entries without a `:` or with an empty username are
/// skipped; `user:` keeps the username with no identifier. The identifier is
/// everything after the first `:` rather than only the second part, so
/// `a:b:c` binds `a` to `b:c` and Teams ids like `29:1a2b` survive.
pub fn parse_identifier_map(raw: &str) -> IdentifierMap {
    let mut map = IdentifierMap::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let Some((username, identifier)) = entry.split_once(':') else {
            continue;
        };
        let username = username.trim();
        if username.is_empty() {
            continue;
        }
        let identifier = Some(identifier.trim())
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        map.insert(username, identifier);
    }

    map
}
