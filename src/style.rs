//! Category colors for chart bars
//!
//! The built-in palette covers every [`Category`]. A partial user palette
//! either sets a `fallback` color or makes the summary fail with
//! `UnstyledCategory` for the categories it leaves out.

use crate::model::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing color literals
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Neutral grey
    pub const NEUTRAL: Color = Color::rgb(0x7f, 0x7f, 0x7f);

    /// `#rrggbb` form used by every output format
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StyleError::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Color::rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Mapping from category to bar color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryStyle {
    colors: BTreeMap<Category, Color>,
    fallback: Option<Color>,
}

impl CategoryStyle {
    /// Style with no mappings and no fallback
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
            fallback: None,
        }
    }

    /// Set the color for one category
    pub fn with_color(mut self, category: Category, color: Color) -> Self {
        self.colors.insert(category, color);
        self
    }

    /// Color used for categories without an explicit mapping
    pub fn with_fallback(mut self, color: Color) -> Self {
        self.fallback = Some(color);
        self
    }

    /// Lay `overrides` on top of this style
    pub fn merged(mut self, overrides: &CategoryStyle) -> Self {
        self.colors
            .extend(overrides.colors.iter().map(|(c, col)| (*c, *col)));
        if overrides.fallback.is_some() {
            self.fallback = overrides.fallback;
        }
        self
    }

    /// Color for a category, falling back when unmapped
    pub fn color_for(&self, category: Category) -> Option<Color> {
        self.colors.get(&category).copied().or(self.fallback)
    }

    pub fn fallback(&self) -> Option<Color> {
        self.fallback
    }
}

impl Default for CategoryStyle {
    /// Palette covering every category (threads, processes and serial runs
    /// stay visually distinct)
    fn default() -> Self {
        Self::empty()
            .with_color(Category::Serial, Color::rgb(0x1f, 0x77, 0xb4))
            .with_color(Category::Vectorized, Color::rgb(0x17, 0xbe, 0xcf))
            .with_color(Category::Jit, Color::rgb(0x2c, 0xa0, 0x2c))
            .with_color(Category::NativeExt, Color::rgb(0x94, 0x67, 0xbd))
            .with_color(Category::Multiprocess, Color::rgb(0xff, 0x7f, 0x0e))
            .with_color(Category::MessagePassing, Color::rgb(0xd6, 0x27, 0x28))
            .with_color(Category::Threaded, Color::rgb(0xbc, 0xbd, 0x22))
    }
}
