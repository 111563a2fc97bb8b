//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! overridden by the user's `config.toml` in the source directory, and the
//! base URL can finally be overridden from the environment:
//!
//! ```text
//! stock defaults  <  <source>/config.toml  <  $STADIUMPORT_SITE_URL
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "StadiumPort"
//! base_url = "https://stadiumport.com"
//! locale = "en_US"
//! logo = "/images/stadiumport-logo.png"
//! twitter = "@stadiumport"
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f4f6f8"
//! text = "#0f172a"
//! text_muted = "#64748b"
//! accent = "#0b6e4f"
//! link = "#0b6e4f"
//!
//! [[affiliates]]
//! label = "Compare hotels"
//! url = "https://www.booking.com/"
//! blurb = "Refundable rooms near every host stadium."
//!
//! [processing]
//! max_processes = 4         # Max parallel render workers (omit for auto)
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Environment variable that overrides `site.base_url`.
pub const BASE_URL_ENV: &str = "STADIUMPORT_SITE_URL";

/// Base URL used when neither the config nor the environment sets one.
pub const DEFAULT_BASE_URL: &str = "https://stadiumport.com";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Identity and absolute-URL settings.
    pub site: SiteInfo,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Partner links shown in the call-to-action block on article pages.
    pub affiliates: Vec<Affiliate>,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            colors: ColorConfig::default(),
            affiliates: default_affiliates(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = &self.site.base_url;
        if !(base.starts_with("https://") || base.starts_with("http://")) {
            return Err(ConfigError::Validation(format!(
                "site.base_url must be an absolute http(s) URL, got {base:?}"
            )));
        }
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Validation("site.name must not be empty".into()));
        }
        if self.site.locale.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.locale must not be empty".into(),
            ));
        }
        for affiliate in &self.affiliates {
            if !affiliate.url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "affiliate {:?} must link over https",
                    affiliate.label
                )));
            }
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Replace the base URL with an override (normally the environment).
    /// Blank overrides are ignored; trailing slashes are dropped.
    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.site.base_url = url.trim().to_string();
        }
        self.site.base_url = self.site.base_url.trim_end_matches('/').to_string();
        self
    }

    /// Absolute URL for a site-relative path.
    ///
    /// Spaces are percent-encoded so image paths like
    /// `/images/travel-tips/Host City Guide.webp` stay valid in meta tags.
    pub fn absolute_url(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.replace(' ', "%20");
        if path.is_empty() || path == "/" {
            format!("{base}/")
        } else if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Name used in page titles, Open Graph and the publisher schema.
    pub name: String,
    /// Origin used for canonical links and Open Graph images.
    pub base_url: String,
    /// Open Graph locale, e.g. `en_US`.
    pub locale: String,
    /// Site-relative path of the publisher logo.
    pub logo: String,
    /// Twitter handle for `twitter:site`. An empty string omits the tag.
    pub twitter: Option<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "StadiumPort".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            locale: "en_US".to_string(),
            logo: "/images/stadiumport-logo.png".to_string(),
            twitter: Some("@stadiumport".to_string()),
        }
    }
}

/// A partner link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Affiliate {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub blurb: String,
}

fn default_affiliates() -> Vec<Affiliate> {
    vec![
        Affiliate {
            label: "Compare hotels".to_string(),
            url: "https://www.booking.com/".to_string(),
            blurb: "Refundable rooms near every host stadium.".to_string(),
        },
        Affiliate {
            label: "Search flights".to_string(),
            url: "https://www.skyscanner.com/".to_string(),
            blurb: "Track fares between host cities.".to_string(),
        },
        Affiliate {
            label: "Travel insurance".to_string(),
            url: "https://www.worldnomads.com/".to_string(),
            blurb: "Cover for cancelled matches and missed connections.".to_string(),
        },
    ]
}

/// Parallel rendering settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel page-rendering workers.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Cards, tables and the affiliate block.
    pub surface: String,
    /// Body text.
    pub text: String,
    /// Breadcrumbs, captions, footer.
    pub text_muted: String,
    /// Header bar, active table-of-contents entry, buttons.
    pub accent: String,
    /// Inline links.
    pub link: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f4f6f8".to_string(),
            text: "#0f172a".to_string(),
            text_muted: "#64748b".to_string(),
            accent: "#0b6e4f".to_string(),
            link: "#0b6e4f".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0b1120".to_string(),
            surface: "#111827".to_string(),
            text: "#e5e7eb".to_string(),
            text_muted: "#94a3b8".to_string(),
            accent: "#34d399".to_string(),
            link: "#6ee7b7".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely, so an
///   `[[affiliates]]` list in the overlay replaces the stock list.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, apply the base URL
/// override, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
    base_url_override: Option<String>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let mut config: SiteConfig = merged.try_into()?;
    // An empty handle turns the twitter:site tag off.
    config.site.twitter = config.site.twitter.filter(|h| !h.trim().is_empty());
    let config = config.with_base_url_override(base_url_override);
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, with
/// `$STADIUMPORT_SITE_URL` taking precedence for the base URL.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay, std::env::var(BASE_URL_ENV).ok())
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# StadiumPort Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site identity
# ---------------------------------------------------------------------------
[site]
name = "StadiumPort"

# Origin for canonical links and Open Graph images.
# The STADIUMPORT_SITE_URL environment variable takes precedence.
base_url = "https://stadiumport.com"

# Open Graph locale.
locale = "en_US"

# Publisher logo (site-relative path).
logo = "/images/stadiumport-logo.png"

# Twitter handle for twitter:site. Set to "" to omit the tag.
twitter = "@stadiumport"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f4f6f8"
text = "#0f172a"
text_muted = "#64748b"    # Breadcrumbs, captions, footer
accent = "#0b6e4f"        # Header, active TOC entry, buttons
link = "#0b6e4f"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0b1120"
surface = "#111827"
text = "#e5e7eb"
text_muted = "#94a3b8"
accent = "#34d399"
link = "#6ee7b7"

# ---------------------------------------------------------------------------
# Affiliate links (article call-to-action block)
# A list here replaces the whole default list.
# ---------------------------------------------------------------------------
[[affiliates]]
label = "Compare hotels"
url = "https://www.booking.com/"
blurb = "Refundable rooms near every host stadium."

[[affiliates]]
label = "Search flights"
url = "https://www.skyscanner.com/"
blurb = "Track fares between host cities."

[[affiliates]]
label = "Travel insurance"
url = "https://www.worldnomads.com/"
blurb = "Cover for cancelled matches and missed connections."

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel page-rendering workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = scheme_variables(&colors.light, "    "),
        dark = scheme_variables(&colors.dark, "        "),
    )
}

fn scheme_variables(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("bg", &scheme.background),
        ("surface", &scheme.surface),
        ("text", &scheme.text),
        ("text-muted", &scheme.text_muted),
        ("accent", &scheme.accent),
        ("link", &scheme.link),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}--color-{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}
