//! Infinite scroll: fetch the next results page as JSON when the reader
//! reaches the bottom of the page, and append its documents.

use serde::{Deserialize, Deserializer};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::highlight::highlight;
use crate::location::Location;
use crate::param::{JSON_OUTPUT, Param};
use crate::query::change;

/// Longest result URL shown under a title, in characters
const DISPLAY_URL_LEN: usize = 80;

/// JSON body of a results page requested with `o=json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageResponse {
    pub search: SearchResults,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResults {
    /// Next page number; `None` on the last page
    #[serde(default, deserialize_with = "page_number")]
    pub next: Option<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Document {
    /// Result URL
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Pages arrive as strings from the server but numbers are accepted too.
fn page_number<'de, D>(deserializer: D) -> core::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(text)) if !text.is_empty() => Some(text),
        Some(Raw::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// A document ready to append below the current results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub url: String,
    pub display_url: String,
    pub title: String,
    /// Description with query terms emphasized
    pub description: String,
}

impl RenderedDocument {
    pub fn new(document: Document, query: &str) -> Self {
        let display_url = document.id.chars().take(DISPLAY_URL_LEN).collect();
        Self {
            description: highlight(&document.description, query),
            display_url,
            url: document.id,
            title: document.title,
        }
    }
}

/// Transport for results pages
pub trait PageSource {
    /// GET `url` and return the response body
    fn get(&mut self, url: &str) -> Result<String>;
}

/// URL of the JSON rendition of `page` for the current location.
///
/// ```
/// # use serp::{MemoryLocation, scroll::page_url};
/// let location = MemoryLocation::new("/", "?q=cats&p=1");
/// assert_eq!(page_url(&location, "2"), "/?q=cats&p=2&o=json");
/// ```
pub fn page_url<L: Location + ?Sized>(location: &L, page: &str) -> String {
    let query = change(&location.search(), Param::Page.as_str(), page);
    let separator = if query.is_empty() { '?' } else { '&' };
    format!(
        "{}{query}{separator}{}={JSON_OUTPUT}",
        location.pathname(),
        Param::Output
    )
}

/// Scroll position of the window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_top: f64,
    pub window_height: f64,
    pub document_height: f64,
}

impl Viewport {
    pub fn at_bottom(&self, slack: u32) -> bool {
        self.scroll_top + self.window_height >= self.document_height - f64::from(slack)
    }

    pub fn shows_return_to_top(&self, offset: u32) -> bool {
        self.scroll_top >= f64::from(offset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollState {
    /// Waiting for the reader; `next` is the page to fetch
    Idle { next: Option<String> },
    /// A page request is in flight
    Fetching { page: String },
    /// The last page has been appended
    Exhausted,
    /// A request failed; the page stays as it is
    Failed,
}

/// Drives page fetches from scroll events.
///
/// At most one request is in flight, and nothing is fetched again after a
/// failure.
#[derive(Debug, Clone)]
pub struct InfiniteScroll {
    state: ScrollState,
    query: String,
    enabled: bool,
    bottom_slack: u32,
    return_to_top_offset: u32,
}

impl InfiniteScroll {
    /// `next` is the page advertised by the initial render, if any.
    pub fn new(config: &Config, query: &str, next: Option<String>) -> Self {
        Self {
            state: ScrollState::Idle { next },
            query: query.to_owned(),
            enabled: config.infinite_scroll,
            bottom_slack: config.bottom_slack,
            return_to_top_offset: config.return_to_top_offset,
        }
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    /// Whether the return-to-top arrow is shown at this scroll position
    pub fn shows_return_to_top(&self, viewport: &Viewport) -> bool {
        viewport.shows_return_to_top(self.return_to_top_offset)
    }

    /// Called once the initial results are in place. A page rendered without
    /// documents loads page 1 through the JSON endpoint instead.
    pub fn on_load(&mut self, rendered_documents: usize) -> Option<String> {
        if rendered_documents > 0 || !matches!(self.state, ScrollState::Idle { .. }) {
            return None;
        }
        Some(self.begin(String::from("1")))
    }

    /// Returns the page to fetch when this scroll reached the bottom.
    pub fn on_scroll(&mut self, viewport: &Viewport) -> Option<String> {
        if !self.enabled || !viewport.at_bottom(self.bottom_slack) {
            return None;
        }
        let ScrollState::Idle { next } = &mut self.state else {
            return None;
        };
        match next.take() {
            Some(page) => Some(self.begin(page)),
            None => {
                self.state = ScrollState::Exhausted;
                None
            }
        }
    }

    fn begin(&mut self, page: String) -> String {
        self.state = ScrollState::Fetching { page: page.clone() };
        page
    }

    /// Settle the in-flight request with its response body.
    /// Returns the documents to append; empty on failure.
    pub fn finish(&mut self, body: Result<String>) -> Vec<RenderedDocument> {
        let ScrollState::Fetching { page } = &self.state else {
            return Vec::new();
        };
        let page = page.clone();
        let response =
            body.and_then(|body| serde_json::from_str::<PageResponse>(&body).map_err(Error::from));
        match response {
            Ok(response) => {
                tracing::debug!(
                    %page,
                    documents = response.search.documents.len(),
                    next = ?response.search.next,
                    "results page appended"
                );
                self.state = match response.search.next {
                    Some(next) => ScrollState::Idle { next: Some(next) },
                    None => ScrollState::Exhausted,
                };
                response
                    .search
                    .documents
                    .into_iter()
                    .map(|document| RenderedDocument::new(document, &self.query))
                    .collect()
            }
            Err(err) => {
                tracing::warn!(%page, error = %err, "results page fetch failed");
                self.state = ScrollState::Failed;
                Vec::new()
            }
        }
    }

    /// Request `page` through `source` and settle it.
    pub fn load<L, S>(&mut self, location: &L, source: &mut S, page: &str) -> Vec<RenderedDocument>
    where
        L: Location + ?Sized,
        S: PageSource + ?Sized,
    {
        let url = page_url(location, page);
        tracing::debug!(%url, "fetching results page");
        let body = source.get(&url);
        self.finish(body)
    }

    /// Handle a scroll event end to end.
    pub fn scroll<L, S>(&mut self, location: &L, source: &mut S, viewport: &Viewport) -> Vec<RenderedDocument>
    where
        L: Location + ?Sized,
        S: PageSource + ?Sized,
    {
        match self.on_scroll(viewport) {
            Some(page) => self.load(location, source, &page),
            None => Vec::new(),
        }
    }
}
