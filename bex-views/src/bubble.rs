//! Fund type bubble placement.
//!
//! Bubbles are placed on an ordinal x axis: each fund type's x position is
//! its 1-based rank in the value-descending ordering taken when the
//! dashboard loads. The ranking is not recomputed as filters change, so a
//! bubble keeps its slot while its size and height move.

use bex_core::palette::BUBBLE_COLORS;
use bex_filter::{Key, KeyValue};
use std::cmp::Ordering;

/// Largest bubble radius as a fraction of the x axis length.
pub const MAX_BUBBLE_RELATIVE_SIZE: f64 = 0.03;
/// Radius of a bubble whose value is zero on the radius scale.
pub const MIN_BUBBLE_RADIUS: f64 = 10.0;
/// Fixed x domain of the bubble chart.
pub const X_DOMAIN: [f64; 2] = [0.0, 4.0];

#[derive(Debug, Clone, PartialEq)]
pub struct BubbleLayout {
    ranked: Vec<Key>,
    min_value: f64,
    max_value: f64,
}

impl BubbleLayout {
    /// Rank the entries by descending value; ties keep their input order.
    pub fn from_entries(entries: &[KeyValue]) -> Self {
        let mut sorted: Vec<&KeyValue> = entries.iter().collect();
        sorted.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        let min_value = sorted.last().map(|kv| kv.value).unwrap_or(0.0);
        let max_value = sorted.first().map(|kv| kv.value).unwrap_or(0.0);
        Self {
            ranked: sorted.into_iter().map(|kv| kv.key.clone()).collect(),
            min_value,
            max_value,
        }
    }

    /// 1-based x position of `key`.
    pub fn rank(&self, key: &Key) -> Option<usize> {
        self.ranked.iter().position(|k| k == key).map(|i| i + 1)
    }

    pub fn ranked_keys(&self) -> &[Key] {
        &self.ranked
    }

    pub fn min_value(&self) -> f64 {
        self.min_value
    }

    pub fn max_value(&self) -> f64 {
        self.max_value
    }

    /// Fill color by rank, cycling through the bubble palette.
    pub fn color(&self, key: &Key) -> Option<&'static str> {
        self.rank(key)
            .map(|rank| BUBBLE_COLORS[(rank - 1) % BUBBLE_COLORS.len()])
    }

    /// Radius for `value`: linear from `MIN_BUBBLE_RADIUS` at zero to
    /// `MAX_BUBBLE_RELATIVE_SIZE * axis_length` at the smallest load-time
    /// aggregate. Larger values extrapolate past that size.
    pub fn radius(&self, value: f64, axis_length: f64) -> f64 {
        if value <= 0.0 || value.is_nan() {
            return 0.0;
        }
        if self.min_value <= 0.0 {
            return MIN_BUBBLE_RADIUS;
        }
        let max_radius = axis_length * MAX_BUBBLE_RELATIVE_SIZE;
        MIN_BUBBLE_RADIUS + value / self.min_value * (max_radius - MIN_BUBBLE_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<KeyValue> {
        vec![
            KeyValue { key: Key::single("Capital"), value: 50.0 },
            KeyValue { key: Key::single("Enterprise"), value: 300.0 },
            KeyValue { key: Key::single("General"), value: 900.0 },
            KeyValue { key: Key::single("Special"), value: 300.0 },
            KeyValue { key: Key::single("Trust"), value: 10.0 },
        ]
    }

    #[test]
    fn test_rank_is_value_descending_and_stable() {
        let layout = BubbleLayout::from_entries(&entries());
        assert_eq!(layout.rank(&Key::single("General")), Some(1));
        assert_eq!(layout.rank(&Key::single("Enterprise")), Some(2));
        assert_eq!(layout.rank(&Key::single("Special")), Some(3));
        assert_eq!(layout.rank(&Key::single("Trust")), Some(5));
        assert_eq!(layout.rank(&Key::single("Missing")), None);
    }

    #[test]
    fn test_color_cycles_by_rank() {
        let layout = BubbleLayout::from_entries(&entries());
        assert_eq!(layout.color(&Key::single("General")), Some(BUBBLE_COLORS[0]));
        assert_eq!(layout.color(&Key::single("Trust")), Some(BUBBLE_COLORS[0]));
    }

    #[test]
    fn test_radius_is_linear_against_minimum() {
        let layout = BubbleLayout::from_entries(&entries());
        assert_eq!(layout.min_value(), 10.0);
        assert_eq!(layout.max_value(), 900.0);
        assert_eq!(layout.radius(10.0, 1000.0), 30.0);
        assert_eq!(layout.radius(20.0, 1000.0), 50.0);
        assert_eq!(layout.radius(0.0, 1000.0), 0.0);
    }

    #[test]
    fn test_empty_layout() {
        let layout = BubbleLayout::from_entries(&[]);
        assert!(layout.ranked_keys().is_empty());
        assert_eq!(layout.radius(5.0, 100.0), MIN_BUBBLE_RADIUS);
    }
}
