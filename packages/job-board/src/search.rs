//! Pending/active search term state and its `?q=` URL form.

use std::fmt;

/// Search box state.
///
/// Keystrokes only touch `pending`. The active term, which takes part in the
/// query key, moves only on submit, clear or an external URL change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pending: String,
    active: Option<String>,
}

impl SearchState {
    /// Start from an externally supplied term, usually the URL's `q`.
    pub fn new(initial: Option<&str>) -> Self {
        let active = initial.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            pending: active.clone().unwrap_or_default(),
            active,
        }
    }

    pub fn pending(&self) -> &str {
        &self.pending
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// The clear control is offered only while something is typed.
    pub fn can_clear(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.pending = text.into();
    }

    /// Promote the pending term verbatim. Returns true if the active term changed.
    pub fn submit(&mut self) -> bool {
        let next = Some(self.pending.clone()).filter(|s| !s.is_empty());
        self.replace_active(next)
    }

    /// Drop both terms. Returns true if the active term changed.
    pub fn clear(&mut self) -> bool {
        self.pending.clear();
        self.replace_active(None)
    }

    /// Follow a term that arrived through the address bar.
    ///
    /// The pending text is only overwritten when the active term actually
    /// moves, so an echo of our own submit does not clobber typing.
    pub fn apply_url(&mut self, q: Option<&str>) -> bool {
        let next = q.filter(|s| !s.is_empty()).map(str::to_string);
        if next == self.active {
            return false;
        }
        self.pending = next.clone().unwrap_or_default();
        self.replace_active(next)
    }

    /// URL parameters reflecting the active term.
    pub fn params(&self) -> SearchParams {
        SearchParams {
            q: self.active.clone(),
        }
    }

    fn replace_active(&mut self, next: Option<String>) -> bool {
        if self.active == next {
            return false;
        }
        self.active = next;
        true
    }
}

/// Page URL query string. Only `q` is meaningful; absence means no search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    pub fn new(q: Option<&str>) -> Self {
        Self {
            q: q.filter(|s| !s.is_empty()).map(str::to_string),
        }
    }

    pub fn q(&self) -> Option<&str> {
        self.q.as_deref()
    }
}

impl From<&str> for SearchParams {
    /// Parse a raw query string (with or without the leading `?`).
    ///
    /// The first `q` wins; `q=` counts as absent.
    fn from(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();
        let q = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "q").then_some(value));

        Self::new(q.as_deref())
    }
}

impl fmt::Display for SearchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.q() {
            Some(q) => write!(f, "q={}", urlencoding::encode(q)),
            None => Ok(()),
        }
    }
}
