//! Query-box autocomplete: request URL, suggestion payload and what selecting
//! an entry does to the query box.

use std::time::Duration;

use serde::Deserialize;

use crate::config::Config;
use crate::error::Result;
use crate::param::Param;
use crate::query::change;

/// Body returned by the autocomplete endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SuggestResponse {
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

/// One entry of the dropdown
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Suggestion {
    /// `!bang` shortcut to an external site
    Bang {
        trigger: String,
        #[serde(default)]
        name: String,
        #[serde(default)]
        favicon: String,
    },
    /// Plain query completion
    Plain {
        label: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        favicon: Option<String>,
    },
}

/// What the query box does after an entry is picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    /// Fill the box and submit the search form
    Submit(String),
    /// Fill the box and keep editing (bang without a query yet)
    Continue(String),
}

impl Suggestion {
    pub fn is_bang(&self) -> bool {
        matches!(self, Self::Bang { .. })
    }

    /// Text the entry puts in the query box
    pub fn label(&self) -> String {
        match self {
            Self::Bang { trigger, .. } => format!("!{trigger}"),
            Self::Plain { label, .. } => label.clone(),
        }
    }

    pub fn favicon(&self) -> Option<&str> {
        match self {
            Self::Bang { favicon, .. } => Some(favicon.as_str()).filter(|f| !f.is_empty()),
            Self::Plain { favicon, .. } => favicon.as_deref(),
        }
    }

    pub fn on_select(&self) -> SelectAction {
        if self.is_bang() {
            SelectAction::Continue(format!("{} ", self.label()))
        } else {
            SelectAction::Submit(self.label())
        }
    }

    /// Query box text while the entry is highlighted
    pub fn on_focus(&self) -> String {
        self.label()
    }
}

/// Suggestion request for `term`, or `None` while the term is too short.
///
/// The term travels as `q` rather than `term`.
pub fn request_url(config: &Config, term: &str) -> Option<String> {
    if term.chars().count() < config.autocomplete_min_length.max(1) {
        return None;
    }
    Some(format!(
        "{}{}",
        config.autocomplete_endpoint,
        change("", Param::Query.as_str(), term)
    ))
}

/// How long the query box waits after the last keystroke before requesting
pub fn delay(config: &Config) -> Duration {
    Duration::from_millis(config.autocomplete_delay_ms)
}

/// Suggestions carried by an autocomplete response body.
///
/// # Errors
///
/// Returns [`Error::Decode`](crate::Error::Decode) when `body` is not a
/// suggestion response.
pub fn decode(body: &str) -> Result<Vec<Suggestion>> {
    let response: SuggestResponse = serde_json::from_str(body)?;
    Ok(response.suggestions)
}
