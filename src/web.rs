//! Browser bindings: the live `window.location` and the feature checks used
//! for browser detection.

use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};

use crate::browser::{Browser, Capabilities, detect_with};
use crate::error::{Error, Result};
use crate::location::Location;

fn window() -> Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| Error::Navigation(String::from("no global window")))
}

fn js_error(value: &JsValue) -> Error {
    Error::Navigation(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// `window.location` of the running page
#[derive(Debug, Clone)]
pub struct BrowserLocation {
    location: web_sys::Location,
}

impl BrowserLocation {
    /// Bind to the location of the global window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Navigation`] when there is no global `window`, e.g.
    /// inside a worker.
    pub fn new() -> Result<Self> {
        Ok(Self {
            location: window()?.location(),
        })
    }
}

impl Location for BrowserLocation {
    fn pathname(&self) -> String {
        self.location.pathname().unwrap_or_default()
    }

    fn search(&self) -> String {
        self.location.search().unwrap_or_default()
    }

    fn assign(&mut self, href: &str) -> Result<()> {
        self.location.set_href(href).map_err(|err| js_error(&err))
    }
}

fn property(target: &JsValue, name: &str) -> JsValue {
    if target.is_undefined() || target.is_null() {
        return JsValue::UNDEFINED;
    }
    Reflect::get(target, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
}

/// `String(value)`
fn stringify(value: &JsValue) -> String {
    if value.is_undefined() || value.is_null() {
        return String::new();
    }
    String::from(value.unchecked_ref::<js_sys::Object>().to_string())
}

/// Feature checks of the running browser.
///
/// # Errors
///
/// Returns [`Error::Navigation`] when there is no global `window`.
pub fn capabilities() -> Result<Capabilities> {
    let window = window()?;
    let user_agent = window.navigator().user_agent().unwrap_or_default();
    let document = window.document().map_or(JsValue::UNDEFINED, JsValue::from);
    let global = JsValue::from(window);

    let opr = property(&global, "opr");
    let chrome = property(&global, "chrome");
    let safari = property(&global, "safari");

    let caps = Capabilities {
        opr_addons: opr.is_truthy() && property(&opr, "addons").is_truthy(),
        opera: property(&global, "opera").is_truthy(),
        install_trigger: !property(&global, "InstallTrigger").is_undefined(),
        html_element_constructor: stringify(&property(&global, "HTMLElement"))
            .to_lowercase()
            .contains("constructor"),
        safari_push_notification: safari.is_truthy()
            && stringify(&property(&safari, "pushNotification"))
                == "[object SafariRemoteNotification]",
        document_mode: property(&document, "documentMode").is_truthy(),
        style_media: property(&global, "StyleMedia").is_truthy(),
        chrome_webstore: chrome.is_truthy() && property(&chrome, "webstore").is_truthy(),
        css: property(&global, "CSS").is_truthy(),
        ..Capabilities::default()
    };
    Ok(caps.with_user_agent(&user_agent))
}

/// Detect the running browser once per page.
pub fn detect() -> Browser {
    detect_with(|| {
        capabilities().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "browser feature checks unavailable");
            Capabilities::default()
        })
    })
}
