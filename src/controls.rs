//! Results-page controls that navigate by changing one query parameter.

use crate::location::{Location, apply_and_navigate};
use crate::param::{Param, ResultType, SafeSearch};
use crate::query::ParamChange;

/// A user action on the results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Default `!bang` button; carries the bang query to run
    BangSubmit(String),
    /// Traditional pagination link
    Pagination(String),
    /// "Did you mean" suggestion
    Alternative(String),
    /// Wikipedia disambiguation entry or in-snippet link; carries the title
    WikipediaLink(String),
    /// Safe-search checkbox; carries the checked state after the click
    SafeSearch(bool),
    /// Search filter radio; an empty value clears the filter
    Filter(String),
    /// All / Images / Maps tabs
    ResultType(ResultType),
}

impl Control {
    /// The parameter change this control makes
    pub fn param_change(&self) -> ParamChange {
        match self {
            Self::BangSubmit(text) | Self::Alternative(text) | Self::WikipediaLink(text) => {
                ParamChange::new(Param::Query.as_str(), text.as_str())
            }
            Self::Pagination(page) => ParamChange::new(Param::Page.as_str(), page.as_str()),
            Self::SafeSearch(checked) => {
                ParamChange::new(Param::Safe.as_str(), SafeSearch::from_checked(*checked).value())
            }
            Self::Filter(value) => ParamChange::new(Param::Filter.as_str(), value.as_str()),
            Self::ResultType(kind) => ParamChange::new(Param::Type.as_str(), kind.value()),
        }
    }

    /// Query string this control would navigate to from `current`
    pub fn target(&self, current: &str) -> String {
        self.param_change().apply_to(current)
    }

    /// Apply the control to the live location and navigate.
    pub fn activate<L: Location + ?Sized>(&self, location: &mut L) {
        tracing::debug!(control = ?self, "control activated");
        apply_and_navigate(location, &self.param_change());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MemoryLocation;

    #[test]
    fn test_pagination() {
        let control = Control::Pagination("3".into());
        assert_eq!(control.target("?q=cats&p=2"), "?q=cats&p=3");
        assert_eq!(control.target("?q=cats"), "?q=cats&p=3");
    }

    #[test]
    fn test_bang_submit() {
        let control = Control::BangSubmit("!g cats".into());
        assert_eq!(control.target("?q=cats&p=2"), "?q=%21g+cats&p=2");
    }

    #[test]
    fn test_safe_search() {
        assert_eq!(Control::SafeSearch(false).target("?q=x"), "?q=x&safe=f");
        assert_eq!(Control::SafeSearch(true).target("?q=x&safe=f"), "?q=x");
    }

    #[test]
    fn test_result_type_tabs() {
        let images = Control::ResultType(ResultType::Images);
        let maps = Control::ResultType(ResultType::Maps);
        let all = Control::ResultType(ResultType::Web);
        assert_eq!(images.target("?q=x"), "?q=x&t=images");
        assert_eq!(maps.target("?q=x&t=images"), "?q=x&t=maps");
        assert_eq!(all.target("?q=x&t=maps"), "?q=x");
        assert_eq!(all.target("?q=x"), "?q=x");
    }

    #[test]
    fn test_filter() {
        assert_eq!(Control::Filter("week".into()).target("?q=x"), "?q=x&f=week");
        assert_eq!(Control::Filter(String::new()).target("?q=x&f=week"), "?q=x");
    }

    #[test]
    fn test_activate_navigates() {
        let mut location = MemoryLocation::new("/", "?q=rust");
        Control::Alternative("rust lang".into()).activate(&mut location);
        assert_eq!(location.last_navigation(), Some("/?q=rust+lang"));

        Control::WikipediaLink("Rust_(programming_language)".into()).activate(&mut location);
        assert_eq!(
            location.last_navigation(),
            Some("/?q=Rust_%28programming_language%29")
        );
    }
}
