//! `window.location` / `window.history` and `window.fetch` behind the
//! pipeline's address-bar and data-source traits.

use ranktable::LoadError;
use ranktable::location::{AddressBar, Location};
use ranktable::source::{DataSource, Dataset};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

/// The browser address bar.
pub struct BrowserAddressBar {
    window: Window,
}

impl BrowserAddressBar {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl AddressBar for BrowserAddressBar {
    fn current(&self) -> Location {
        let location = self.window.location();
        Location::from_parts(
            &location.pathname().unwrap_or_default(),
            &location.search().unwrap_or_default(),
            &location.hash().unwrap_or_default(),
        )
    }

    fn push(&mut self, location: Location) {
        let url = location.to_string();
        let pushed = self
            .window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(err) = pushed {
            warn!(url, error = %js_message(&err), "failed to push history entry");
        }
    }
}

/// Dataset fetched with `window.fetch` on every request.
pub struct FetchSource {
    window: Window,
    url: String,
}

impl FetchSource {
    pub fn new(window: Window, url: impl Into<String>) -> Self {
        Self {
            window,
            url: url.into(),
        }
    }
}

impl DataSource for FetchSource {
    async fn fetch(&self) -> Result<Dataset, LoadError> {
        let response = JsFuture::from(self.window.fetch_with_str(&self.url))
            .await
            .map_err(transport)?;
        let response: Response = response.dyn_into().map_err(transport)?;

        if !response.ok() {
            return Err(LoadError::Http {
                status: response.status(),
            });
        }

        let body = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        let text = body
            .as_string()
            .ok_or_else(|| LoadError::Transport("response body is not text".into()))?;
        Dataset::from_json(&text)
    }
}

fn transport(err: JsValue) -> LoadError {
    LoadError::Transport(js_message(&err))
}

/// Message of a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}
