//! Figures derived from a transfer-function model.
//!
//! A [`Figure`] is plain data (title, axis labels, bounds and point series);
//! the terminal UI draws it, tests inspect it.

mod config;
mod selector;

pub use config::PlotConfig;
pub use selector::{
    analog_impulse_plot, digital_impulse_plot, frequency_magnitude_plot, phase_plot,
    pole_zero_plot, s_plane_plot, time_response_plot, z_plane_plot, PlotSelector,
};

/// Title of the pole-zero map.
pub const POLE_ZERO_TITLE: &str = "Pole Zero map";
/// Title of the impulse response plot.
pub const TIME_RESPONSE_TITLE: &str = "Time response";
/// Title of the magnitude response plot.
pub const FREQUENCY_RESPONSE_TITLE: &str = "frequency response";
/// Title of the phase response plot.
pub const PHASE_RESPONSE_TITLE: &str = "phase response";

/// Which root a marker stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// Denominator root, drawn as a cross.
    Pole,
    /// Numerator root, drawn as a circle.
    Zero,
}

impl MarkerKind {
    /// Glyph used to draw the marker.
    pub fn symbol(self) -> &'static str {
        match self {
            MarkerKind::Pole => "×",
            MarkerKind::Zero => "o",
        }
    }
}

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Connected line through the points.
    Line,
    /// Sample-and-hold staircase.
    Step,
    /// Individual markers.
    Markers(MarkerKind),
    /// Reference geometry (axes, unit circle).
    Guide,
}

/// A named sequence of points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend name.
    pub name: String,
    /// Drawing style.
    pub kind: SeriesKind,
    /// Points in data coordinates.
    pub points: Vec<(f64, f64)>,
}

impl Series {
    /// Create a series.
    pub fn new(name: impl Into<String>, kind: SeriesKind, points: Vec<(f64, f64)>) -> Self {
        Self {
            name: name.into(),
            kind,
            points,
        }
    }

    /// X coordinates.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|(x, _)| *x).collect()
    }

    /// Y coordinates.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|(_, y)| *y).collect()
    }

    /// Staircase outline holding each sample until the next one.
    pub fn step_outline(&self) -> Vec<(f64, f64)> {
        let mut out = Vec::with_capacity(self.points.len() * 2);
        for pair in self.points.windows(2) {
            let ((x0, y0), (x1, _)) = (pair[0], pair[1]);
            out.push((x0, y0));
            out.push((x1, y0));
        }
        if let Some(last) = self.points.last() {
            out.push(*last);
        }
        out
    }
}

/// A renderable 2-D plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Plot title.
    pub title: String,
    /// Horizontal axis label.
    pub x_label: String,
    /// Vertical axis label.
    pub y_label: String,
    /// Horizontal axis range.
    pub x_bounds: [f64; 2],
    /// Vertical axis range.
    pub y_bounds: [f64; 2],
    /// Series in drawing order.
    pub series: Vec<Series>,
}

impl Figure {
    /// Create an empty figure with unit bounds.
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            x_bounds: [0.0, 1.0],
            y_bounds: [0.0, 1.0],
            series: Vec::new(),
        }
    }

    /// Append a series.
    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    /// The first series that carries data (not a guide or marker set).
    pub fn trace(&self) -> Option<&Series> {
        self.series
            .iter()
            .find(|s| matches!(s.kind, SeriesKind::Line | SeriesKind::Step))
    }

    /// Y values of the data trace, empty if there is none.
    pub fn y_values(&self) -> Vec<f64> {
        self.trace().map(Series::ys).unwrap_or_default()
    }

    /// X values of the data trace, empty if there is none.
    pub fn x_values(&self) -> Vec<f64> {
        self.trace().map(Series::xs).unwrap_or_default()
    }

    /// All marker positions of the given kind.
    pub fn markers(&self, kind: MarkerKind) -> Vec<(f64, f64)> {
        self.series
            .iter()
            .filter(|s| s.kind == SeriesKind::Markers(kind))
            .flat_map(|s| s.points.iter().copied())
            .collect()
    }

    /// Whether any series is a staircase.
    pub fn is_step(&self) -> bool {
        self.series.iter().any(|s| s.kind == SeriesKind::Step)
    }
}

/// Finite range of a set of values.
pub(crate) fn value_range(values: impl IntoIterator<Item = f64>) -> Option<[f64; 2]> {
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some([v, v]),
            Some([lo, hi]) => Some([lo.min(v), hi.max(v)]),
        })
}

/// Widen a range by `factor` of its span; a degenerate range gets a unit span.
pub(crate) fn pad_range(range: [f64; 2], factor: f64) -> [f64; 2] {
    let [lo, hi] = range;
    let span = hi - lo;
    if span <= f64::EPSILON * lo.abs().max(hi.abs()).max(1.0) {
        let half = (lo.abs() * factor).max(0.5);
        return [lo - half, hi + half];
    }
    [lo - span * factor, hi + span * factor]
}
