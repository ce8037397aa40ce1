//! Figure Model
//! Backend-independent description of a chart: series, labels and legend.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default series colors, used in draw order when a series has no explicit color.
pub const PALETTE: [Rgb; 4] = [
    Rgb(31, 119, 180),  // Blue
    Rgb(255, 127, 14),  // Orange
    Rgb(44, 160, 44),   // Green
    Rgb(148, 103, 189), // Purple
];

pub const RED: Rgb = Rgb(255, 0, 0);

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid hex color '{0}'")]
pub struct ParseColorError(pub String);

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#rrggbb`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// One drawn line.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub color: Rgb,
    pub label: Option<String>,
}

impl Series {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Where the legend box is anchored inside the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
    CenterLeft,
    CenterRight,
    /// Corner covering the fewest data points.
    #[default]
    Best,
}

/// Options for a single draw call.
#[derive(Debug, Clone, Default)]
pub struct SeriesOptions {
    pub color: Option<Rgb>,
    pub label: Option<String>,
}

impl SeriesOptions {
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Rendering target that accumulates series until it is saved or shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Figure {
    pub title: Option<String>,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    /// `None` draws no legend.
    pub legend: Option<LegendPosition>,
    pub series: Vec<Series>,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a series. `x` and `y` are truncated to the shorter of the two.
    pub fn plot(mut self, x: &[f64], y: &[f64], options: SeriesOptions) -> Self {
        let len = x.len().min(y.len());
        let color = options
            .color
            .unwrap_or(PALETTE[self.series.len() % PALETTE.len()]);
        self.series.push(Series {
            x: x[..len].to_vec(),
            y: y[..len].to_vec(),
            color,
            label: options.label,
        });
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend = Some(position);
        self
    }

    /// Find a series by its legend label.
    pub fn series_labelled(&self, label: &str) -> Option<&Series> {
        self.series
            .iter()
            .find(|s| s.label.as_deref() == Some(label))
    }

    /// Bounding box `(x_min, x_max, y_min, y_max)` over all finite points.
    ///
    /// Degenerate ranges are widened by one unit so they can be drawn.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (x, y) in self.series.iter().flat_map(Series::points) {
            if x.is_finite() && y.is_finite() {
                x_min = x_min.min(x);
                x_max = x_max.max(x);
                y_min = y_min.min(y);
                y_max = y_max.max(y);
            }
        }
        if x_min > x_max {
            return (0.0, 1.0, 0.0, 1.0);
        }
        if x_min == x_max {
            x_min -= 0.5;
            x_max += 0.5;
        }
        if y_min == y_max {
            y_min -= 0.5;
            y_max += 0.5;
        }
        (x_min, x_max, y_min, y_max)
    }

    /// Resolve [`LegendPosition::Best`] to the corner whose quadrant holds the
    /// fewest points. Other positions are returned unchanged.
    pub fn resolved_legend(&self) -> Option<LegendPosition> {
        let position = self.legend?;
        if position != LegendPosition::Best {
            return Some(position);
        }

        let (x_min, x_max, y_min, y_max) = self.bounds();
        let x_mid = (x_min + x_max) / 2.0;
        let y_mid = (y_min + y_max) / 2.0;

        // Tie order: upper right, upper left, lower left, lower right.
        let mut counts = [
            (LegendPosition::UpperRight, 0usize),
            (LegendPosition::UpperLeft, 0),
            (LegendPosition::LowerLeft, 0),
            (LegendPosition::LowerRight, 0),
        ];
        for (x, y) in self.series.iter().flat_map(Series::points) {
            let idx = match (x >= x_mid, y >= y_mid) {
                (true, true) => 0,
                (false, true) => 1,
                (false, false) => 2,
                (true, false) => 3,
            };
            counts[idx].1 += 1;
        }

        counts
            .iter()
            .min_by_key(|(_, count)| *count)
            .map(|(position, _)| *position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!("#d7191c".parse::<Rgb>().unwrap(), Rgb(0xd7, 0x19, 0x1c));
        assert_eq!("#2B83BA".parse::<Rgb>().unwrap(), Rgb(0x2b, 0x83, 0xba));
        assert_eq!(Rgb(0xab, 0xdd, 0xa4).to_string(), "#abdda4");
        assert!("d7191c".parse::<Rgb>().is_err());
        assert!("#d7191".parse::<Rgb>().is_err());
        assert_eq!(
            "#zz191c".parse::<Rgb>().unwrap_err().to_string(),
            "invalid hex color '#zz191c'"
        );
    }

    #[test]
    fn uncolored_series_take_palette_in_order() {
        let figure = Figure::new()
            .plot(&[0.0], &[1.0], SeriesOptions::default())
            .plot(&[0.0], &[2.0], SeriesOptions::default().color(RED))
            .plot(&[0.0], &[3.0], SeriesOptions::default());
        let colors: Vec<Rgb> = figure.series.iter().map(|s| s.color).collect();
        assert_eq!(colors, vec![PALETTE[0], RED, PALETTE[2]]);
    }

    #[test]
    fn bounds_widen_degenerate_ranges() {
        let figure = Figure::new().plot(&[2.0, 2.0], &[1.0, 3.0], SeriesOptions::default());
        assert_eq!(figure.bounds(), (1.5, 2.5, 1.0, 3.0));
        assert_eq!(Figure::new().bounds(), (0.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn best_legend_avoids_crowded_corners() {
        // A rising CDF leaves the upper left and lower right empty.
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 0.1, 0.5, 0.9, 1.0];
        let figure = Figure::new()
            .plot(&x, &y, SeriesOptions::default())
            .legend(LegendPosition::Best);
        assert_eq!(figure.resolved_legend(), Some(LegendPosition::UpperLeft));

        let fixed = figure.clone().legend(LegendPosition::CenterLeft);
        assert_eq!(fixed.resolved_legend(), Some(LegendPosition::CenterLeft));
        assert_eq!(Figure::new().resolved_legend(), None);
    }
}
