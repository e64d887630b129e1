//! Plot selection: one figure per view, dispatching on the model's domain.

use std::f64::consts::PI;

use super::{
    pad_range, value_range, Figure, MarkerKind, PlotConfig, Series, SeriesKind,
    FREQUENCY_RESPONSE_TITLE, PHASE_RESPONSE_TITLE, POLE_ZERO_TITLE, TIME_RESPONSE_TITLE,
};
use crate::error::{PolezeroError, Result};
use crate::model::{Domain, FilterModel};
use crate::response::{LtiEvaluator, ResponseEvaluator};

/// Builds figures from models, using `E` for impulse responses.
#[derive(Debug, Clone, Default)]
pub struct PlotSelector<E = LtiEvaluator> {
    config: PlotConfig,
    evaluator: E,
}

impl<E: ResponseEvaluator> PlotSelector<E> {
    /// Create a selector.
    pub fn new(config: PlotConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }

    /// Pole-zero map on the z-plane or the s-plane.
    pub fn pole_zero_plot<M: FilterModel + ?Sized>(&self, model: &M) -> Result<Figure> {
        match model.domain() {
            Domain::Discrete => self.z_plane_plot(model),
            Domain::Continuous => self.s_plane_plot(model),
        }
    }

    /// Pole-zero map against the unit circle. Discrete models only.
    pub fn z_plane_plot<M: FilterModel + ?Sized>(&self, model: &M) -> Result<Figure> {
        require(model, Domain::Discrete)?;

        let n = self.config.unit_circle_points;
        let circle: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let theta = if n > 1 {
                    2.0 * PI * i as f64 / (n - 1) as f64
                } else {
                    0.0
                };
                (theta.cos(), theta.sin())
            })
            .collect();
        let (poles, zeros) = root_series(model);

        let pad = self.config.padding_factor;
        let x_range = value_range(
            [-1.0, 1.0]
                .into_iter()
                .chain(poles.xs())
                .chain(zeros.xs()),
        )
        .unwrap_or([-1.0, 1.0]);
        let y_range = value_range(
            [-1.0, 1.0]
                .into_iter()
                .chain(poles.ys())
                .chain(zeros.ys()),
        )
        .unwrap_or([-1.0, 1.0]);

        let mut fig = Figure::new(POLE_ZERO_TITLE, "Real", "Imaginary");
        fig.x_bounds = pad_range(x_range, pad);
        fig.y_bounds = pad_range(y_range, pad);
        push_axes(&mut fig);
        fig.push(Series::new("unit circle", SeriesKind::Guide, circle));
        fig.push(poles);
        fig.push(zeros);
        Ok(fig)
    }

    /// Pole-zero map on the plain s-plane. Continuous models only.
    pub fn s_plane_plot<M: FilterModel + ?Sized>(&self, model: &M) -> Result<Figure> {
        require(model, Domain::Continuous)?;

        let (poles, zeros) = root_series(model);
        let x_range = value_range(
            [-1.0, 1.0]
                .into_iter()
                .chain(poles.xs())
                .chain(zeros.xs()),
        )
        .unwrap_or([-1.0, 1.0]);

        let mut fig = Figure::new(POLE_ZERO_TITLE, "Real", "Imaginary");
        fig.x_bounds = pad_range(x_range, self.config.padding_factor);
        fig.y_bounds = self.config.s_plane_range;
        push_axes(&mut fig);
        fig.push(poles);
        fig.push(zeros);
        Ok(fig)
    }

    /// Magnitude of the frequency response against frequency.
    pub fn frequency_magnitude_plot<M: FilterModel + ?Sized>(&self, model: &M) -> Figure {
        let points = model
            .frequencies()
            .iter()
            .zip(model.complex_frequency_response())
            .map(|(w, h)| (*w, h.norm()))
            .collect();
        self.trace_figure(
            Figure::new(FREQUENCY_RESPONSE_TITLE, "frequencies", "response"),
            Series::new("frequency response", SeriesKind::Line, points),
        )
    }

    /// Principal-value phase of the frequency response, in radians.
    pub fn phase_plot<M: FilterModel + ?Sized>(&self, model: &M) -> Figure {
        let points = model
            .frequencies()
            .iter()
            .zip(model.complex_frequency_response())
            .map(|(w, h)| (*w, h.arg()))
            .collect();
        self.trace_figure(
            Figure::new(PHASE_RESPONSE_TITLE, "frequencies", "phase"),
            Series::new("phase response", SeriesKind::Line, points),
        )
    }

    /// Impulse response, stepped for digital models and continuous for analog ones.
    pub fn time_response_plot<M: FilterModel + ?Sized>(&self, model: &M) -> Result<Figure> {
        match model.domain() {
            Domain::Discrete => self.digital_impulse_plot(model),
            Domain::Continuous => self.analog_impulse_plot(model),
        }
    }

    /// Impulse response of a discrete model, indexed by sample number.
    pub fn digital_impulse_plot<M: FilterModel + ?Sized>(&self, model: &M) -> Result<Figure> {
        require(model, Domain::Discrete)?;

        let response = self.evaluator.discrete_impulse(
            model.numerator(),
            model.denominator(),
            self.config.sample_interval,
            self.config.impulse_samples,
        )?;
        let points = response
            .amplitude
            .iter()
            .enumerate()
            .map(|(k, y)| (k as f64, *y))
            .collect();

        Ok(self.trace_figure(
            Figure::new(TIME_RESPONSE_TITLE, "Number of samples", "Amplitude"),
            Series::new("impulse response", SeriesKind::Step, points),
        ))
    }

    /// Impulse response of a continuous model, indexed by time.
    pub fn analog_impulse_plot<M: FilterModel + ?Sized>(&self, model: &M) -> Result<Figure> {
        require(model, Domain::Continuous)?;

        let response = self
            .evaluator
            .continuous_impulse(model.numerator(), model.denominator())?;
        let points = response
            .time
            .iter()
            .copied()
            .zip(response.amplitude.iter().copied())
            .collect();

        Ok(self.trace_figure(
            Figure::new(TIME_RESPONSE_TITLE, "time", "Amplitude"),
            Series::new("impulse response", SeriesKind::Line, points),
        ))
    }

    fn trace_figure(&self, mut fig: Figure, trace: Series) -> Figure {
        if let Some(x_range) = value_range(trace.xs()) {
            fig.x_bounds = pad_range(x_range, 0.0);
        }
        if let Some(y_range) = value_range(trace.ys()) {
            fig.y_bounds = pad_range(y_range, self.config.padding_factor);
        }
        fig.push(trace);
        fig
    }
}

/// Pole-zero map with the default selector.
pub fn pole_zero_plot<M: FilterModel + ?Sized>(model: &M) -> Result<Figure> {
    PlotSelector::<LtiEvaluator>::default().pole_zero_plot(model)
}

/// Z-plane map with the default selector.
pub fn z_plane_plot<M: FilterModel + ?Sized>(model: &M) -> Result<Figure> {
    PlotSelector::<LtiEvaluator>::default().z_plane_plot(model)
}

/// S-plane map with the default selector.
pub fn s_plane_plot<M: FilterModel + ?Sized>(model: &M) -> Result<Figure> {
    PlotSelector::<LtiEvaluator>::default().s_plane_plot(model)
}

/// Magnitude response with the default selector.
pub fn frequency_magnitude_plot<M: FilterModel + ?Sized>(model: &M) -> Figure {
    PlotSelector::<LtiEvaluator>::default().frequency_magnitude_plot(model)
}

/// Phase response with the default selector.
pub fn phase_plot<M: FilterModel + ?Sized>(model: &M) -> Figure {
    PlotSelector::<LtiEvaluator>::default().phase_plot(model)
}

/// Impulse response with the default selector.
pub fn time_response_plot<M: FilterModel + ?Sized>(model: &M) -> Result<Figure> {
    PlotSelector::<LtiEvaluator>::default().time_response_plot(model)
}

/// Digital impulse response with the default selector.
pub fn digital_impulse_plot<M: FilterModel + ?Sized>(model: &M) -> Result<Figure> {
    PlotSelector::<LtiEvaluator>::default().digital_impulse_plot(model)
}

/// Analog impulse response with the default selector.
pub fn analog_impulse_plot<M: FilterModel + ?Sized>(model: &M) -> Result<Figure> {
    PlotSelector::<LtiEvaluator>::default().analog_impulse_plot(model)
}

fn require<M: FilterModel + ?Sized>(model: &M, expected: Domain) -> Result<()> {
    let found = model.domain();
    if found == expected {
        Ok(())
    } else {
        Err(PolezeroError::domain_mismatch(expected, found))
    }
}

fn root_series<M: FilterModel + ?Sized>(model: &M) -> (Series, Series) {
    let poles = model.poles().iter().map(|p| (p.re, p.im)).collect();
    let zeros = model.zeros().iter().map(|z| (z.re, z.im)).collect();
    (
        Series::new("poles", SeriesKind::Markers(MarkerKind::Pole), poles),
        Series::new("zeros", SeriesKind::Markers(MarkerKind::Zero), zeros),
    )
}

fn push_axes(fig: &mut Figure) {
    let [x0, x1] = fig.x_bounds;
    let [y0, y1] = fig.y_bounds;
    fig.push(Series::new(
        "real axis",
        SeriesKind::Guide,
        vec![(x0, 0.0), (x1, 0.0)],
    ));
    fig.push(Series::new(
        "imaginary axis",
        SeriesKind::Guide,
        vec![(0.0, y0), (0.0, y1)],
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Model, ModelParts};
    use num_complex::Complex64;

    fn discrete(poles: Vec<Complex64>, zeros: Vec<Complex64>) -> Model {
        Model::new(ModelParts {
            domain: Domain::Discrete,
            poles,
            zeros,
            numerator: vec![1.0],
            denominator: vec![1.0, -0.5],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn z_plane_places_markers_at_roots() {
        let fig = z_plane_plot(&discrete(
            vec![Complex64::new(0.5, 0.0), Complex64::new(1.2, 0.3)],
            vec![Complex64::new(-1.0, 0.0)],
        ))
        .unwrap();
        assert_eq!(fig.title, "Pole Zero map");
        assert_eq!(fig.markers(MarkerKind::Pole), vec![(0.5, 0.0), (1.2, 0.3)]);
        assert_eq!(fig.markers(MarkerKind::Zero), vec![(-1.0, 0.0)]);
        assert!(fig.x_bounds[1] > 1.2);
    }

    #[test]
    fn unit_circle_has_radius_one() {
        let fig = z_plane_plot(&discrete(Vec::new(), Vec::new())).unwrap();
        let circle = fig
            .series
            .iter()
            .find(|s| s.name == "unit circle")
            .unwrap();
        assert_eq!(circle.points.len(), 150);
        for (x, y) in &circle.points {
            assert!(((x * x + y * y).sqrt() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn s_plane_uses_fixed_vertical_range() {
        let model = Model::new(ModelParts {
            domain: Domain::Continuous,
            poles: vec![Complex64::new(-3.0, 0.0)],
            denominator: vec![1.0, 3.0],
            numerator: vec![1.0],
            ..Default::default()
        })
        .unwrap();
        let fig = pole_zero_plot(&model).unwrap();
        assert_eq!(fig.y_bounds, [-4.0, 4.0]);
        assert!(fig.x_bounds[0] < -3.0);
        assert!(fig.series.iter().all(|s| s.name != "unit circle"));
    }

    #[test]
    fn domain_specific_branches_reject_other_domain() {
        let model = discrete(Vec::new(), Vec::new());
        assert!(matches!(
            s_plane_plot(&model),
            Err(PolezeroError::DomainMismatch {
                expected: Domain::Continuous,
                found: Domain::Discrete
            })
        ));
        assert!(matches!(
            analog_impulse_plot(&model),
            Err(PolezeroError::DomainMismatch { .. })
        ));
    }

    #[test]
    fn digital_impulse_is_stepped_over_thirty_samples() {
        let fig = time_response_plot(&discrete(vec![Complex64::new(0.5, 0.0)], Vec::new())).unwrap();
        assert!(fig.is_step());
        assert_eq!(fig.x_label, "Number of samples");
        let xs = fig.x_values();
        assert_eq!(xs.len(), 30);
        assert_eq!(xs[29], 29.0);
        assert_eq!(&fig.y_values()[..3], &[0.0, 1.0, 0.5]);
    }
}
