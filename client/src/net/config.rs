//! API base URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the configured base URL into a `<meta>` tag of the SSR
//! shell. The hydrated app reads it back so both sides agree without a
//! compile-time constant.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Name of the `<meta>` tag carrying the API base URL.
pub const API_BASE_META: &str = "api-base-url";

/// Base URL used when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "/api";

/// Where the remote inventory API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Build a config from a raw base URL. Trailing slashes are dropped and an
    /// empty value falls back to [`DEFAULT_API_BASE_URL`].
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an absolute endpoint path (`/telefonos`) onto the base URL.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Read the base URL from the document's `<meta name="api-base-url">`.
    /// Falls back to the default outside the browser or when the tag is absent.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
                .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
                .map(|meta| meta.content());
            match content {
                Some(base) => Self::new(&base),
                None => {
                    log::warn!("no {API_BASE_META} meta tag; using {DEFAULT_API_BASE_URL}");
                    Self::default()
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
