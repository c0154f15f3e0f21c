//! Runtime configuration for the page.
//!
//! Loaded from an optional inline JSON block in the host document:
//!
//! ```html
//! <script type="application/json" id="landing-config">
//!   { "header_offset": 96, "scroll_behavior": "instant" }
//! </script>
//! ```
//!
//! Missing fields keep their defaults.

use serde::Deserialize;

use crate::error::{LandingError, Result};

/// Height of the fixed header bar (`h-20`) in CSS pixels.
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Id of the inline config element.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// How the viewport moves to an anchor target.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMode {
    #[default]
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    /// Pixels subtracted from every anchor destination so targets clear the header.
    pub header_offset: f64,
    pub scroll_behavior: ScrollMode,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            header_offset: HEADER_OFFSET_PX,
            scroll_behavior: ScrollMode::Smooth,
        }
    }
}

impl LandingConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.header_offset.is_finite() || self.header_offset < 0.0 {
            return Err(LandingError::InvalidConfig(format!(
                "header_offset must be a non-negative number, got {}",
                self.header_offset
            )));
        }
        Ok(())
    }

    /// Read `#landing-config` from the document.
    /// Returns the default config if the element is absent or invalid.
    pub fn load_from_document(document: &web_sys::Document) -> Self {
        let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let json = element.text_content().unwrap_or_default();
        Self::from_json_or_default(&json)
    }

    /// Like [`LandingConfig::from_json`], but logs and falls back on failure.
    pub fn from_json_or_default(json: &str) -> Self {
        if json.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(json) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring #{CONFIG_ELEMENT_ID}");
                Self::default()
            }
        }
    }
}
