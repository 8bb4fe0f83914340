//! Address-bar model: query parameters and push/back/forward history.
//!
//! The address is a derived view of the selected tab. [`Location`] mirrors
//! the browser's `URL`/`URLSearchParams` behaviour closely enough for the
//! `type` parameter round trip; [`History`] is the in-memory address bar used
//! by the CLI and tests.

use std::borrow::Cow;
use std::fmt;

/// A parsed address: everything before `?`, the query pairs, and the
/// fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    base: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl Location {
    /// Parse a full URL or a path-and-query such as `/rating?type=bybonus`.
    pub fn parse(address: &str) -> Self {
        let (rest, fragment) = match address.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_owned())),
            None => (address, None),
        };
        let (base, search) = rest.split_once('?').unwrap_or((rest, ""));

        Self {
            base: base.to_owned(),
            query: parse_query(search),
            fragment,
        }
    }

    /// Build from browser parts: `pathname`, `search` (with or without `?`)
    /// and `hash` (with or without `#`).
    pub fn from_parts(path: &str, search: &str, hash: &str) -> Self {
        let hash = hash.strip_prefix('#').unwrap_or(hash);
        Self {
            base: path.to_owned(),
            query: parse_query(search),
            fragment: (!hash.is_empty()).then(|| hash.to_owned()),
        }
    }

    /// Everything before the query string.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// First value of `key`, decoded.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set `key` to `value`: the first occurrence is replaced in place and
    /// later duplicates removed; a missing key is appended.
    pub fn set_query_param(&mut self, key: &str, value: &str) {
        let mut seen = false;
        self.query.retain_mut(|(k, v)| {
            if k != key {
                return true;
            }
            if seen {
                return false;
            }
            seen = true;
            *v = value.to_owned();
            true
        });
        if !seen {
            self.query.push((key.to_owned(), value.to_owned()));
        }
    }

    /// Copy of `self` with `key` set to `value`.
    pub fn with_query_param(&self, key: &str, value: &str) -> Self {
        let mut next = self.clone();
        next.set_query_param(key, value);
        next
    }

    /// Encoded query string including the leading `?`, or empty.
    pub fn search(&self) -> String {
        if self.query.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        format!("?{}", pairs.join("&"))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.search())?;
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

fn parse_query(search: &str) -> Vec<(String, String)> {
    let search = search.strip_prefix('?').unwrap_or(search);
    search
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (decode_component(k), decode_component(v))
        })
        .collect()
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .unwrap_or(spaced)
}

/// Something that holds the current address and can gain history entries.
pub trait AddressBar {
    /// The address currently shown.
    fn current(&self) -> Location;

    /// Add a history entry without reloading; back navigation returns to the
    /// previous entry.
    fn push(&mut self, location: Location);
}

/// In-memory session history.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    cursor: usize,
}

impl History {
    pub fn new(initial: Location) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    /// Step back; returns false at the first entry.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Step forward; returns false at the last entry.
    pub fn forward(&mut self) -> bool {
        if self.cursor + 1 >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AddressBar for History {
    fn current(&self) -> Location {
        self.entries[self.cursor].clone()
    }

    fn push(&mut self, location: Location) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(location);
        self.cursor = self.entries.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_query_and_fragment() {
        let loc = Location::parse("/rating?type=byeditors&page=2#top");
        assert_eq!(loc.base(), "/rating");
        assert_eq!(loc.query_param("type"), Some("byeditors"));
        assert_eq!(loc.query_param("page"), Some("2"));
        assert_eq!(loc.to_string(), "/rating?type=byeditors&page=2#top");
    }

    #[test]
    fn decodes_plus_and_percent() {
        let loc = Location::parse("https://example.com/?q=a+b%21");
        assert_eq!(loc.base(), "https://example.com/");
        assert_eq!(loc.query_param("q"), Some("a b!"));
    }

    #[test]
    fn set_replaces_first_and_drops_duplicates() {
        let mut loc = Location::parse("/?type=byuser&x=1&type=bybonus");
        loc.set_query_param("type", "bysubrating");
        assert_eq!(loc.to_string(), "/?type=bysubrating&x=1");
    }

    #[test]
    fn set_appends_missing_key() {
        let loc = Location::parse("/rating#list").with_query_param("type", "bybonus");
        assert_eq!(loc.to_string(), "/rating?type=bybonus#list");
    }

    #[test]
    fn from_parts_matches_parse() {
        let parts = Location::from_parts("/rating", "?type=bybonus", "#top");
        assert_eq!(parts, Location::parse("/rating?type=bybonus#top"));
        assert_eq!(Location::from_parts("/", "", ""), Location::parse("/"));
    }

    #[test]
    fn history_push_truncates_forward_entries() {
        let mut history = History::new(Location::parse("/"));
        history.push(Location::parse("/?type=byeditors"));
        history.push(Location::parse("/?type=bybonus"));
        assert!(history.back());
        history.push(Location::parse("/?type=bysubrating"));

        assert_eq!(history.len(), 3);
        assert!(!history.forward());
        assert!(history.back());
        assert_eq!(history.current().query_param("type"), Some("byeditors"));
    }

    #[test]
    fn history_stops_at_edges() {
        let mut history = History::new(Location::default());
        assert!(!history.back());
        assert!(!history.forward());
    }
}
