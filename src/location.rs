//! The page location the mutator reads from and navigates with.

use crate::error::Result;
use crate::query::ParamChange;

/// Read/write access to the current page's address.
///
/// `search` is read fresh on every mutation; nothing caches it.
pub trait Location {
    /// Path component, e.g. `/search`
    fn pathname(&self) -> String;

    /// Query component: empty or starting with `?`
    fn search(&self) -> String;

    /// Replace the current location, triggering a full page load
    fn assign(&mut self, href: &str) -> Result<()>;
}

/// Navigate to `<pathname><query>`.
///
/// Terminal: a failed assignment is logged and otherwise left to the browser.
pub fn navigate<L: Location + ?Sized>(location: &mut L, query: &str) {
    let href = format!("{}{query}", location.pathname());
    tracing::debug!(%href, "navigating");
    if let Err(err) = location.assign(&href) {
        tracing::warn!(%href, error = %err, "navigation failed");
    }
}

/// Apply `change` to the live query string and navigate to the result.
pub fn apply_and_navigate<L: Location + ?Sized>(location: &mut L, change: &ParamChange) {
    let query = change.apply_to(&location.search());
    navigate(location, &query);
}

/// Set (or, with an empty value, remove) one parameter and navigate.
pub fn change_and_navigate<'a, L: Location + ?Sized>(
    location: &mut L,
    key: &str,
    value: impl Into<Option<&'a str>>,
) {
    apply_and_navigate(location, &ParamChange::new(key, value));
}

/// Split an href into `(pathname, search, hash)`.
///
/// `search` keeps its leading `?` and `hash` its leading `#`; a bare `?` or
/// `#` yields an empty component, as `window.location` reports it. Scheme and
/// authority, when present, are skipped.
pub fn split_href(href: &str) -> (&str, &str, &str) {
    let rest = strip_origin(href);
    let bytes = rest.as_bytes();

    let hash_start = memchr::memchr(b'#', bytes).unwrap_or(rest.len());
    let (before_hash, hash) = rest.split_at(hash_start);

    let search_start = memchr::memchr(b'?', before_hash.as_bytes()).unwrap_or(before_hash.len());
    let (pathname, search) = before_hash.split_at(search_start);

    let search = if search == "?" { "" } else { search };
    let hash = if hash == "#" { "" } else { hash };
    (pathname, search, hash)
}

/// Scheme and authority end at the first `/`, `?` or `#` after `://`; a
/// `://` inside the path, query or fragment is not a scheme separator.
fn strip_origin(href: &str) -> &str {
    let bytes = href.as_bytes();
    let Some(scheme_end) = memchr::memmem::find(bytes, b"://") else {
        return href;
    };
    if memchr::memchr3(b'/', b'?', b'#', bytes).is_some_and(|pos| pos < scheme_end) {
        return href;
    }
    let authority = &href[scheme_end + 3..];
    memchr::memchr3(b'/', b'?', b'#', authority.as_bytes())
        .map_or("", |pos| &authority[pos..])
}

/// A location held in memory, for hosts without a browser window and for tests.
///
/// Every assignment is recorded and becomes the current address, as a page
/// load would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocation {
    pathname: String,
    search: String,
    hash: String,
    history: Vec<String>,
}

impl MemoryLocation {
    pub fn new(pathname: &str, search: &str) -> Self {
        Self {
            pathname: pathname.to_owned(),
            search: search.to_owned(),
            ..Self::default()
        }
    }

    pub fn from_href(href: &str) -> Self {
        let (pathname, search, hash) = split_href(href);
        Self {
            pathname: pathname.to_owned(),
            search: search.to_owned(),
            hash: hash.to_owned(),
            history: Vec::new(),
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn href(&self) -> String {
        format!("{}{}{}", self.pathname, self.search, self.hash)
    }

    /// Hrefs assigned so far, oldest first
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn last_navigation(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Location for MemoryLocation {
    fn pathname(&self) -> String {
        self.pathname.clone()
    }

    fn search(&self) -> String {
        self.search.clone()
    }

    fn assign(&mut self, href: &str) -> Result<()> {
        let (pathname, search, hash) = split_href(href);
        pathname.clone_into(&mut self.pathname);
        search.clone_into(&mut self.search);
        hash.clone_into(&mut self.hash);
        self.history.push(href.to_owned());
        Ok(())
    }
}
