//! Named spring presets and their custom-property block
//!
//! The built-in catalog is generated on first use and shared for the rest of
//! the process. User presets from the config file can be layered on top with
//! [`catalog_with`].

use std::fmt::Write as _;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{SpringCurve, SpringParameters, TimingCurveDescriptor};
use crate::{Error, Result};

/// Built-in presets: (name, perceived duration in seconds, bounce)
const BUILTIN_PRESETS: [(&str, f64, f64); 6] = [
    ("snappy", 0.3, 0.15),
    ("gentle", 0.6, 0.1),
    ("bouncy", 0.5, 0.4),
    ("stiff", 0.2, 0.0),
    ("slow", 1.0, 0.1),
    ("wobbly", 0.7, 0.6),
];

/// A named pair of spring parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringPreset {
    pub name: String,
    /// Perceived duration in seconds
    pub duration: f64,
    #[serde(default)]
    pub bounce: f64,
}

impl SpringPreset {
    pub fn new(name: impl Into<String>, duration: f64, bounce: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            bounce,
        }
    }

    /// Names become custom property names, so only `[A-Za-z0-9_-]` is allowed
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidPreset {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(invalid("name may only contain letters, digits, '-' and '_'"));
        }
        Ok(())
    }

    pub fn parameters(&self) -> SpringParameters {
        SpringParameters::new(self.duration, self.bounce)
    }

    pub fn compile(&self) -> PresetCurve {
        let curve = SpringCurve::from_parameters(self.parameters());
        PresetCurve {
            descriptor: curve.descriptor(),
            preset: self.clone(),
            curve,
        }
    }
}

/// A preset together with its generated curve
#[derive(Debug, Clone, PartialEq)]
pub struct PresetCurve {
    pub preset: SpringPreset,
    pub curve: SpringCurve,
    pub descriptor: TimingCurveDescriptor,
}

impl PresetCurve {
    pub fn name(&self) -> &str {
        &self.preset.name
    }
}

static BUILTIN: OnceLock<Vec<PresetCurve>> = OnceLock::new();
static BUILTIN_CSS: OnceLock<String> = OnceLock::new();

/// The built-in preset table
pub fn presets() -> &'static [PresetCurve] {
    BUILTIN.get_or_init(|| {
        BUILTIN_PRESETS
            .iter()
            .map(|&(name, duration, bounce)| SpringPreset::new(name, duration, bounce).compile())
            .collect()
    })
}

/// Look up a built-in preset by name
pub fn preset(name: &str) -> Result<&'static PresetCurve> {
    presets()
        .iter()
        .find(|p| p.name() == name)
        .ok_or_else(|| Error::PresetNotFound(name.to_string()))
}

/// Custom-property block for the built-in presets
pub fn css_custom_properties() -> &'static str {
    BUILTIN_CSS.get_or_init(|| css_block(presets()))
}

/// Render `--<name>: <descriptor>;` lines under a `:root` selector
pub fn css_block(entries: &[PresetCurve]) -> String {
    let mut css = String::from(":root {\n");
    for entry in entries {
        // Writing to a String cannot fail
        let _ = writeln!(css, "  --{}: {};", entry.name(), entry.descriptor);
    }
    css.push_str("}\n");
    css
}

/// Built-in presets followed by validated user presets
///
/// A user preset with the name of a built-in one replaces it in place.
pub fn catalog_with(custom: &[SpringPreset]) -> Result<Vec<PresetCurve>> {
    let mut catalog = presets().to_vec();

    for user in custom {
        user.validate()?;
        let compiled = user.compile();
        match catalog.iter_mut().find(|p| p.name() == user.name) {
            Some(existing) => {
                warn!("Custom preset '{}' overrides the built-in preset", user.name);
                *existing = compiled;
            }
            None => catalog.push(compiled),
        }
    }

    Ok(catalog)
}
