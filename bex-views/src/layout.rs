//! Static proportional layout constants.
//!
//! Heights and margins are fractions of the rendered chart width, so a chart
//! keeps its shape at any container size.

use serde::Serialize;

/// Chart margins, either as fractions of the width or resolved to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const ZERO: Margins = Margins {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    fn scaled(&self, width: f64) -> Margins {
        Margins {
            top: self.top * width,
            right: self.right * width,
            bottom: self.bottom * width,
            left: self.left * width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub height_ratio: f64,
    pub margins: Margins,
    /// Tick count on the value axis
    pub ticks: Option<u32>,
}

/// A layout resolved for a concrete width, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<u32>,
}

impl ResolvedLayout {
    /// Horizontal space left for the x axis.
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margins.left - self.margins.right).max(0.0)
    }
}

impl ChartLayout {
    pub fn resolve(&self, width: f64) -> ResolvedLayout {
        ResolvedLayout {
            width,
            height: width * self.height_ratio,
            margins: self.margins.scaled(width),
            ticks: self.ticks,
        }
    }
}

pub const ROW_LAYOUT: ChartLayout = ChartLayout {
    height_ratio: 0.9,
    margins: Margins {
        top: 0.024,
        right: 0.024,
        bottom: 0.043,
        left: 0.012,
    },
    ticks: Some(4),
};

pub const BAR_LAYOUT: ChartLayout = ChartLayout {
    height_ratio: 0.25,
    margins: Margins {
        top: 0.017,
        right: 0.033,
        bottom: 0.04,
        left: 0.18,
    },
    ticks: Some(4),
};

/// Padding between bars and at the outer edges of the ordinal x axis.
pub const BAR_PADDING: f64 = 0.07;
pub const BAR_OUTER_PADDING: f64 = 0.1;

pub const BUBBLE_LAYOUT: ChartLayout = ChartLayout {
    height_ratio: 0.506,
    margins: Margins {
        top: 0.121,
        right: 0.169,
        bottom: 0.097,
        left: -0.0121,
    },
    ticks: None,
};

pub const SUNBURST_LAYOUT: ChartLayout = ChartLayout {
    height_ratio: 0.897,
    margins: Margins::ZERO,
    ticks: None,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_scales_with_width() {
        let resolved = ROW_LAYOUT.resolve(500.0);
        assert!((resolved.height - 450.0).abs() < 1e-9);
        assert!((resolved.margins.top - 12.0).abs() < 1e-9);
        assert!((resolved.margins.left - 6.0).abs() < 1e-9);
        assert_eq!(resolved.ticks, Some(4));
    }

    #[test]
    fn test_inner_width_allows_negative_margin() {
        let resolved = BUBBLE_LAYOUT.resolve(1000.0);
        assert!((resolved.inner_width() - (1000.0 + 12.1 - 169.0)).abs() < 1e-9);
    }

    #[test]
    fn test_layout_serializes_camel_case() {
        let json = serde_json::to_value(SUNBURST_LAYOUT.resolve(100.0)).unwrap();
        assert!(json.get("ticks").is_none());
        assert_eq!(json["margins"]["top"], 0.0);
    }
}
