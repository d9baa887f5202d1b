/// Query parameters the results page reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    /// `q`: query text
    Query,
    /// `p`: page number
    Page,
    /// `t`: result type
    Type,
    /// `f`: filter
    Filter,
    /// `safe`: safe-search flag
    Safe,
    /// `o`: output format marker
    Output,
}

impl Param {
    pub const ALL: [Self; 6] = [
        Self::Query,
        Self::Page,
        Self::Type,
        Self::Filter,
        Self::Safe,
        Self::Output,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Query => "q",
            Self::Page => "p",
            Self::Type => "t",
            Self::Filter => "f",
            Self::Safe => "safe",
            Self::Output => "o",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|param| param.as_str() == key)
    }
}

impl core::fmt::Display for Param {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result vertical selected by the `t` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultType {
    /// Parameter absent
    #[default]
    Web,
    Images,
    Maps,
}

impl ResultType {
    /// Parameter value; `None` for web results.
    pub fn value(self) -> Option<&'static str> {
        match self {
            Self::Web => None,
            Self::Images => Some("images"),
            Self::Maps => Some("maps"),
        }
    }

    /// Unknown values fall back to web results.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("images") => Self::Images,
            Some("maps") => Self::Maps,
            _ => Self::Web,
        }
    }
}

/// Safe-search state carried by the `safe` parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafeSearch {
    /// Parameter absent
    #[default]
    On,
    /// `safe=f`
    Off,
}

impl SafeSearch {
    pub fn value(self) -> Option<&'static str> {
        match self {
            Self::On => None,
            Self::Off => Some("f"),
        }
    }

    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("f") => Self::Off,
            _ => Self::On,
        }
    }

    /// State selected by the safe-search checkbox
    pub fn from_checked(checked: bool) -> Self {
        if checked { Self::On } else { Self::Off }
    }
}

/// JSON output marker appended to paginated result requests
pub const JSON_OUTPUT: &str = "json";
