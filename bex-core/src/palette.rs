//! Color palettes.
//!
//! The branch/program palette is supplied at runtime as a JSON array of
//! color strings (`sunburst-colors.json`). The department and fund type
//! palettes are fixed.

use crate::payload;
use serde::{Deserialize, Serialize};

/// Embedded sample branch/program palette.
pub static SAMPLE_PALETTE_JSON: &str = include_str!("../../fixtures/sunburst-colors.json");

/// Fixed palette for the department row chart.
pub const ROW_COLORS: [&str; 23] = [
    "#b3d485", "#da84ec", "#bbe532", "#ef85c0",
    "#6fda4c", "#afaae6", "#dfc32b", "#73c3e2",
    "#ec9228", "#74d4cb", "#f48658", "#5cdca9",
    "#ec9084", "#6bd77d", "#e0a2b5", "#c6d04e",
    "#bbc2cc", "#dbad4d", "#9dcfa7", "#d6b46f",
    "#b6cf64", "#ccc2a7", "#d6ba86",
];

/// Fixed palette for the fund type bubble chart.
pub const BUBBLE_COLORS: [&str; 4] = ["#fbb4ae", "#b3cde3", "#ccebc5", "#decbe4"];

/// An ordered list of color strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<String>);

impl Palette {
    pub fn new(colors: Vec<String>) -> Self {
        Self(colors)
    }

    /// Build a palette from one of the fixed color tables.
    pub fn from_static(colors: &[&str]) -> Self {
        Self(colors.iter().map(|c| c.to_string()).collect())
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let palette: Palette = serde_json::from_str(json)?;
        log::info!("[BEX] palette: parsed {} colors", palette.len());
        Ok(palette)
    }

    /// Parse a raw payload that may be gzip-compressed JSON.
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let decoded = payload::decode(bytes)?;
        let palette: Palette = serde_json::from_slice(&decoded)?;
        log::info!("[BEX] palette: parsed {} colors", palette.len());
        Ok(palette)
    }

    pub fn sample() -> anyhow::Result<Self> {
        Self::from_json(SAMPLE_PALETTE_JSON)
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Color at `index`, wrapping around the end of the palette.
    pub fn cycle(&self, index: usize) -> Option<&str> {
        if self.0.is_empty() {
            return None;
        }
        Some(self.0[index % self.0.len()].as_str())
    }
}
