//! Ordinal color scales.
//!
//! A scale maps a fixed domain of category names to a palette by position,
//! wrapping around when the domain outgrows the palette. The domain is frozen
//! when the scale is built, so lookups are stable for the whole session.

use bex_core::palette::ROW_COLORS;
use bex_core::{Dataset, Palette};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct OrdinalScale {
    domain: Vec<String>,
    positions: HashMap<String, usize>,
    range: Palette,
}

impl OrdinalScale {
    /// Build a scale; duplicate domain values keep their first position.
    pub fn new<I>(domain: I, range: Palette) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut positions = HashMap::new();
        let mut ordered = Vec::new();
        for value in domain {
            if !positions.contains_key(&value) {
                positions.insert(value.clone(), ordered.len());
                ordered.push(value);
            }
        }
        Self {
            domain: ordered,
            positions,
            range,
        }
    }

    /// Color for `value`, or `None` if it is outside the domain or the
    /// palette is empty.
    pub fn get(&self, value: &str) -> Option<&str> {
        let position = *self.positions.get(value)?;
        self.range.cycle(position)
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Every domain value paired with its color, in domain order.
    pub fn assignments(&self) -> Vec<(&str, &str)> {
        self.domain
            .iter()
            .filter_map(|v| self.get(v).map(|c| (v.as_str(), c)))
            .collect()
    }
}

/// Department names (first-seen order) over the fixed row palette.
pub fn department_scale(dataset: &Dataset) -> OrdinalScale {
    OrdinalScale::new(
        dataset.distinct(|r| &r.department),
        Palette::from_static(&ROW_COLORS),
    )
}

/// Branch names followed by program names over the supplied palette.
pub fn branch_program_scale(dataset: &Dataset, palette: &Palette) -> OrdinalScale {
    let branches = dataset.distinct(|r| &r.branch);
    let programs = dataset.distinct(|r| &r.program);
    if palette.len() < branches.len() + programs.len() {
        log::warn!(
            "[BEX] color: {} colors for {} branch/program names, colors will repeat",
            palette.len(),
            branches.len() + programs.len()
        );
    }
    OrdinalScale::new(branches.into_iter().chain(programs), palette.clone())
}
