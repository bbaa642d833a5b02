//! Theme data for the grid
//!
//! A theme is a flat, string-keyed map of scalar values taken from the
//! `theme` section of the config. The model never looks inside it. The
//! markup renderer injects every entry as a CSS custom property and the
//! terminal front end picks out the handful of color keys it understands.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Theme keys the terminal front end reads colors from
pub mod keys {
    pub const CELL_BACKGROUND: &str = "cellBackground";
    pub const CELL_FOREGROUND: &str = "cellForeground";
    pub const HIGHLIGHT_BACKGROUND: &str = "highlightBackground";
    pub const HIGHLIGHT_FOREGROUND: &str = "highlightForeground";
    pub const ACCENT_COLOR: &str = "accentColor";
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| e.to_string());
        match hex.len() {
            6 => Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Color {
                r: channel(0)?,
                g: channel(2)?,
                b: channel(4)?,
                a: channel(6)?,
            }),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(c: Color) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

/// A single theme entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for ThemeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeValue::Bool(b) => write!(f, "{}", b),
            ThemeValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            ThemeValue::Number(n) => write!(f, "{}", n),
            ThemeValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ThemeValue {
    fn from(s: &str) -> Self {
        ThemeValue::Text(s.to_string())
    }
}

/// Pass-through theme map
///
/// Entries iterate in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    entries: BTreeMap<String, ThemeValue>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ThemeValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ThemeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Color stored under `key`, if it is a valid hex string
    pub fn color(&self, key: &str) -> Option<Color> {
        match self.get(key)? {
            ThemeValue::Text(s) => match Color::from_hex(s) {
                Ok(color) => Some(color),
                Err(e) => {
                    tracing::warn!("Ignoring theme key {}: {}", key, e);
                    None
                }
            },
            _ => None,
        }
    }

    /// Resolve the terminal palette, falling back to defaults per key
    pub fn palette(&self) -> Palette {
        let defaults = Palette::default();
        Palette {
            cell_bg: self.color(keys::CELL_BACKGROUND).unwrap_or(defaults.cell_bg),
            cell_fg: self.color(keys::CELL_FOREGROUND).unwrap_or(defaults.cell_fg),
            highlight_bg: self
                .color(keys::HIGHLIGHT_BACKGROUND)
                .unwrap_or(defaults.highlight_bg),
            highlight_fg: self
                .color(keys::HIGHLIGHT_FOREGROUND)
                .unwrap_or(defaults.highlight_fg),
            accent: self.color(keys::ACCENT_COLOR).unwrap_or(defaults.accent),
        }
    }
}

/// Colors used by the terminal front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub cell_bg: Color,
    pub cell_fg: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
    pub accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            cell_bg: Color::rgb(0x1e, 0x1f, 0x22),
            cell_fg: Color::rgb(0xbc, 0xbe, 0xc4),
            highlight_bg: Color::rgb(0x35, 0x74, 0xf0),
            highlight_fg: Color::rgb(0xff, 0xff, 0xff),
            accent: Color::rgb(0xe5, 0xc0, 0x7b),
        }
    }
}
