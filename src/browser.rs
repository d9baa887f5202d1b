//! Browser detection for the "add this search engine" instructions.
//!
//! Detection is a fixed-precedence walk over one predicate per browser,
//! evaluated against feature checks gathered from the window. The result is
//! computed once per process and never changes afterwards.

use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Browser {
    Opera,
    Firefox,
    Safari,
    Chrome,
    InternetExplorer,
    Edge,
    /// Some other Blink-based browser
    Blink,
}

impl Browser {
    /// Precedence order of the predicates
    pub const PRECEDENCE: [Self; 7] = [
        Self::Opera,
        Self::Firefox,
        Self::Safari,
        Self::Chrome,
        Self::InternetExplorer,
        Self::Edge,
        Self::Blink,
    ];

    /// When nothing matches, Chrome instructions are the best guess
    pub const FALLBACK: Self = Self::Chrome;

    pub fn name(self) -> &'static str {
        match self {
            Self::Opera => "Opera",
            Self::Firefox => "Firefox",
            Self::Safari => "Safari",
            Self::Chrome => "Chrome",
            Self::InternetExplorer => "Internet Explorer",
            Self::Edge => "Edge",
            Self::Blink => "Blink",
        }
    }

    fn matches(self, caps: &Capabilities) -> bool {
        match self {
            Self::Opera => caps.is_opera(),
            Self::Firefox => caps.install_trigger,
            Self::Safari => caps.html_element_constructor || caps.safari_push_notification,
            Self::Chrome => caps.is_chrome(),
            Self::InternetExplorer => caps.document_mode,
            Self::Edge => !caps.document_mode && caps.style_media,
            Self::Blink => (caps.is_chrome() || caps.is_opera()) && caps.css,
        }
    }

    /// First browser whose predicate holds, in [`Browser::PRECEDENCE`] order.
    pub fn classify(caps: &Capabilities) -> Self {
        Self::PRECEDENCE
            .into_iter()
            .find(|browser| browser.matches(caps))
            .unwrap_or(Self::FALLBACK)
    }

    /// Only Chrome gets step-by-step instructions
    pub fn has_instructions(self) -> bool {
        self == Self::Chrome
    }
}

impl core::fmt::Display for Browser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Feature checks taken from the running browser
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// `window.opr.addons`
    pub opr_addons: bool,
    /// `window.opera`
    pub opera: bool,
    /// user agent contains ` OPR/`
    pub opr_user_agent: bool,
    /// `InstallTrigger`
    pub install_trigger: bool,
    /// `HTMLElement` stringifies as a constructor
    pub html_element_constructor: bool,
    /// `safari.pushNotification` is a `SafariRemoteNotification`
    pub safari_push_notification: bool,
    /// `document.documentMode`
    pub document_mode: bool,
    /// `window.StyleMedia`
    pub style_media: bool,
    /// `window.chrome.webstore`
    pub chrome_webstore: bool,
    /// `window.CSS`
    pub css: bool,
}

impl Capabilities {
    fn is_opera(&self) -> bool {
        self.opr_addons || self.opera || self.opr_user_agent
    }

    fn is_chrome(&self) -> bool {
        self.chrome_webstore
    }

    /// Set `opr_user_agent` from a user agent string
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.opr_user_agent = user_agent.contains(" OPR/");
        self
    }
}

static DETECTED: OnceLock<Browser> = OnceLock::new();

/// Classify the browser on first call; later calls return the same answer
/// without checking again.
pub fn detect_with<F>(gather: F) -> Browser
where
    F: FnOnce() -> Capabilities,
{
    *DETECTED.get_or_init(|| {
        let browser = Browser::classify(&gather());
        tracing::debug!(%browser, "browser detected");
        browser
    })
}

/// Text of the "add to browser" link
pub fn add_prompt(brand: &str, browser: Browser) -> String {
    format!("Add {brand} to {browser}")
}
