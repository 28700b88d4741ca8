//! Bar display settings.
//!
//! Mirrors the key/value settings the extension UI keeps in browser storage.
//! The lookup pipeline never reads them; the CLI uses them to decide whether
//! and how to print the bar.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Where the bar is pinned on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BarPosition {
    /// Top edge (default)
    #[default]
    Top,
    /// Bottom edge
    Bottom,
}

impl<'de> Deserialize<'de> for BarPosition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Anything other than "bottom" pins the bar to the top
        let value = Value::deserialize(deserializer)?;
        Ok(match value.as_str() {
            Some("bottom") => BarPosition::Bottom,
            _ => BarPosition::Top,
        })
    }
}

fn default_enabled() -> bool {
    true
}

fn default_opacity() -> u32 {
    100
}

/// JSON truthiness: `false`, `null`, `0` and `""` switch the bar off.
fn lenient_enabled<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// Leading integer of a number or numeric string (`"60px"` is 60).
fn leading_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim_start();
            let (sign, digits) = match s.strip_prefix('-') {
                Some(rest) => (-1, rest),
                None => (1, s.strip_prefix('+').unwrap_or(s)),
            };
            let end = digits
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(digits.len());
            digits[..end].parse::<i64>().ok().map(|n| sign * n)
        }
        _ => None,
    }
}

/// Non-positive or unparsable opacity means fully opaque.
fn lenient_opacity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match leading_integer(&value) {
        Some(n) if n > 0 => u32::try_from(n.min(100)).unwrap_or(100),
        _ => default_opacity(),
    })
}

/// Anything but an array counts as no disabled sites; non-string entries are
/// dropped.
fn lenient_sites<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(site) => Some(site),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Persisted bar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarSettings {
    /// Global on/off switch
    #[serde(default = "default_enabled", deserialize_with = "lenient_enabled")]
    pub enabled: bool,
    /// Opacity percent, 1-100
    #[serde(default = "default_opacity", deserialize_with = "lenient_opacity")]
    pub opacity: u32,
    /// Bar position
    #[serde(default)]
    pub position: BarPosition,
    /// Hostnames the bar is hidden on
    #[serde(default, deserialize_with = "lenient_sites")]
    pub disabled_sites: Vec<String>,
}

impl Default for BarSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            opacity: default_opacity(),
            position: BarPosition::Top,
            disabled_sites: Vec::new(),
        }
    }
}

impl BarSettings {
    /// Loads settings from a JSON file. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings: BarSettings = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        Ok(settings.normalized())
    }

    /// Writes settings to a JSON file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).context("Failed to create settings directory")?;
        }
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings file {}", path.display()))?;
        Ok(())
    }

    /// Clamps opacity into 1-100; zero falls back to fully opaque.
    pub fn normalized(mut self) -> Self {
        self.opacity = match self.opacity {
            0 => 100,
            o => o.min(100),
        };
        self
    }

    /// Returns `true` if the bar is hidden on `host`.
    pub fn is_site_disabled(&self, host: &str) -> bool {
        self.disabled_sites.iter().any(|site| site == host)
    }

    /// Returns `true` if the bar should be shown on `host`.
    pub fn should_show(&self, host: &str) -> bool {
        self.enabled && !self.is_site_disabled(host)
    }

    /// Hides the bar on `host` if shown there, shows it otherwise.
    ///
    /// Returns `true` if the site is disabled afterwards.
    pub fn toggle_site(&mut self, host: &str) -> bool {
        if self.is_site_disabled(host) {
            self.disabled_sites.retain(|site| site != host);
            false
        } else {
            self.disabled_sites.push(host.to_string());
            true
        }
    }
}
