//! Client-side logic of a search results page.
//!
//! Every control on the page navigates by changing one query parameter of
//! the current address; [`change`] and [`remove`] compute the new query
//! string and [`navigate`] loads it.

// Internal modules (not public API)
mod encode;
mod error;
mod location;
mod param;
mod query;

pub mod browser;
pub mod config;
pub mod controls;
pub mod highlight;
pub mod scroll;
pub mod suggest;
pub mod vote;
#[cfg(feature = "web")]
pub mod web;

// Public API
pub use config::Config;
pub use controls::Control;
pub use error::{Error, Result};
pub use location::{
    Location, MemoryLocation, apply_and_navigate, change_and_navigate, navigate, split_href,
};
pub use param::{JSON_OUTPUT, Param, ResultType, SafeSearch};
pub use query::{ParamChange, QueryString, change, remove};
