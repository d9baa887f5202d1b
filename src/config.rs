use serde::Deserialize;

use crate::error::{Error, Result};

/// Results-page settings, usually embedded in the page as JSON.
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search engine name shown in the "add to browser" prompt
    pub brand: String,
    pub autocomplete_endpoint: String,
    /// Characters typed before suggestions are requested
    pub autocomplete_min_length: usize,
    /// Pause (ms) after the last keystroke before suggestions are requested
    pub autocomplete_delay_ms: u64,
    /// Where [`Ballot::cast`](crate::vote::Ballot::cast) posts votes
    pub vote_endpoint: String,
    /// Scroll offset (px) from which the return-to-top arrow shows
    pub return_to_top_offset: u32,
    /// Distance (px) from the document bottom that triggers the next page fetch
    pub bottom_slack: u32,
    /// Append result pages on scroll instead of paginating
    pub infinite_scroll: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            brand: String::from("Search"),
            autocomplete_endpoint: String::from("/autocomplete"),
            autocomplete_min_length: 1,
            autocomplete_delay_ms: 25,
            vote_endpoint: String::from("/vote"),
            return_to_top_offset: 400,
            bottom_slack: 25,
            infinite_scroll: false,
        }
    }
}

impl Config {
    /// Parse settings from the JSON embedded in the page.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when `json` is malformed or a field has the
    /// wrong type.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| Error::Config(err.to_string()))
    }
}
