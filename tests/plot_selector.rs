use approx::assert_relative_eq;
use num_complex::Complex64;
use polezero::model::{design, Domain, FilterModel, Model, ModelParts};
use polezero::plot::{self, MarkerKind, PlotConfig, PlotSelector, SeriesKind};
use polezero::response::{ResponseEvaluator, TimeResponse};
use polezero::{PolezeroError, Result};
use std::f64::consts::PI;

fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

fn three_point_model() -> Model {
    Model::new(ModelParts {
        domain: Domain::Discrete,
        poles: vec![c(0.5, 0.0)],
        zeros: vec![],
        numerator: vec![1.0],
        denominator: vec![1.0, -0.5],
        frequencies: vec![0.0, 1.0, 2.0],
        complex_frequency_response: vec![c(1.0, 0.0), c(0.0, 1.0), c(-1.0, 0.0)],
    })
    .unwrap()
}

fn first_order_lowpass() -> Model {
    design::from_coefficients(Domain::Continuous, &[1.0], &[1.0, 1.0], 64).unwrap()
}

#[test]
fn magnitude_and_phase_follow_the_stored_response() {
    let model = three_point_model();

    let magnitude = plot::frequency_magnitude_plot(&model);
    assert_eq!(magnitude.x_values(), vec![0.0, 1.0, 2.0]);
    for y in magnitude.y_values() {
        assert_relative_eq!(y, 1.0);
    }

    let phase = plot::phase_plot(&model);
    let ys = phase.y_values();
    assert_eq!(ys.len(), 3);
    assert_relative_eq!(ys[0], 0.0);
    assert_relative_eq!(ys[1], PI / 2.0);
    assert_relative_eq!(ys[2], PI);
}

#[test]
fn continuous_first_order_decays_from_one() {
    let model = first_order_lowpass();
    let fig = plot::time_response_plot(&model).unwrap();

    assert!(!fig.is_step());
    assert_eq!(fig.x_label, "time");
    let ys = fig.y_values();
    assert!(!ys.is_empty());
    assert_relative_eq!(ys[0], 1.0, epsilon = 1e-9);
    assert!(ys.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn discrete_impulse_is_a_staircase_of_thirty_samples() {
    let model = three_point_model();
    let fig = plot::time_response_plot(&model).unwrap();

    assert!(fig.is_step());
    assert_eq!(fig.x_label, "Number of samples");
    let ys = fig.y_values();
    assert_eq!(ys.len(), 30);
    assert_relative_eq!(ys[0], 0.0);
    assert_relative_eq!(ys[1], 1.0);
    assert_relative_eq!(ys[2], 0.5);
    assert_relative_eq!(ys[3], 0.25);
}

#[test]
fn empty_roots_give_an_empty_map() {
    for domain in [Domain::Discrete, Domain::Continuous] {
        let model = design::from_poles_zeros(domain, &[], &[], 16).unwrap();
        let fig = plot::pole_zero_plot(&model).unwrap();
        assert!(fig.markers(MarkerKind::Pole).is_empty());
        assert!(fig.markers(MarkerKind::Zero).is_empty());
    }
}

#[test]
fn empty_grid_gives_empty_traces() {
    let model = Model::new(ModelParts {
        domain: Domain::Discrete,
        numerator: vec![1.0],
        denominator: vec![1.0],
        ..Default::default()
    })
    .unwrap();

    assert!(plot::frequency_magnitude_plot(&model).y_values().is_empty());
    assert!(plot::phase_plot(&model).y_values().is_empty());
}

#[test]
fn markers_sit_on_the_roots() {
    let model =
        design::from_poles_zeros(Domain::Discrete, &[c(0.5, 0.5)], &[c(-1.0, 0.0)], 16).unwrap();
    let fig = plot::z_plane_plot(&model).unwrap();

    let poles = fig.markers(MarkerKind::Pole);
    assert_eq!(poles.len(), 2);
    assert!(poles.contains(&(0.5, 0.5)));
    assert!(poles.contains(&(0.5, -0.5)));
    assert_eq!(fig.markers(MarkerKind::Zero), vec![(-1.0, 0.0)]);
    assert!(fig
        .series
        .iter()
        .any(|s| s.kind == SeriesKind::Guide && s.points.len() == 150));
}

#[test]
fn s_plane_uses_fixed_vertical_range() {
    let fig = plot::s_plane_plot(&first_order_lowpass()).unwrap();
    assert_eq!(fig.y_bounds, [-4.0, 4.0]);
    let poles = fig.markers(MarkerKind::Pole);
    assert_eq!(poles.len(), 1);
    assert_relative_eq!(poles[0].0, -1.0, epsilon = 1e-12);
    assert_relative_eq!(poles[0].1, 0.0, epsilon = 1e-12);
}

#[test]
fn wrong_domain_is_rejected() {
    let digital = three_point_model();
    let analog = first_order_lowpass();

    assert!(matches!(
        plot::s_plane_plot(&digital),
        Err(PolezeroError::DomainMismatch { .. })
    ));
    assert!(matches!(
        plot::z_plane_plot(&analog),
        Err(PolezeroError::DomainMismatch { .. })
    ));
    assert!(matches!(
        plot::analog_impulse_plot(&digital),
        Err(PolezeroError::DomainMismatch { .. })
    ));
    assert!(matches!(
        plot::digital_impulse_plot(&analog),
        Err(PolezeroError::DomainMismatch { .. })
    ));
}

#[test]
fn improper_model_is_a_numerical_error() {
    let model =
        design::from_coefficients(Domain::Continuous, &[1.0, 0.0, 0.0], &[1.0, 1.0], 8).unwrap();
    assert!(matches!(
        plot::time_response_plot(&model),
        Err(PolezeroError::Numerical(_))
    ));
}

#[test]
fn plots_are_repeatable() {
    let model = first_order_lowpass();
    assert_eq!(
        plot::pole_zero_plot(&model).unwrap(),
        plot::pole_zero_plot(&model).unwrap()
    );
    assert_eq!(
        plot::time_response_plot(&model).unwrap(),
        plot::time_response_plot(&model).unwrap()
    );
    assert_eq!(
        plot::frequency_magnitude_plot(&model),
        plot::frequency_magnitude_plot(&model)
    );
    assert_eq!(plot::phase_plot(&model), plot::phase_plot(&model));
}

/// Records nothing, answers with a fixed ramp.
struct RampEvaluator;

impl ResponseEvaluator for RampEvaluator {
    fn discrete_impulse(&self, _: &[f64], _: &[f64], dt: f64, n: usize) -> Result<TimeResponse> {
        Ok(TimeResponse {
            time: (0..n).map(|k| k as f64 * dt).collect(),
            amplitude: (0..n).map(|k| k as f64).collect(),
        })
    }

    fn continuous_impulse(&self, _: &[f64], _: &[f64]) -> Result<TimeResponse> {
        Err(PolezeroError::numerical("not supported"))
    }
}

#[test]
fn selector_uses_its_evaluator_and_config() {
    let config = PlotConfig {
        impulse_samples: 5,
        ..PlotConfig::default()
    };
    let selector = PlotSelector::new(config, RampEvaluator);

    let fig = selector.time_response_plot(&three_point_model()).unwrap();
    assert_eq!(fig.y_values(), vec![0.0, 1.0, 2.0, 3.0, 4.0]);

    let err = selector
        .time_response_plot(&first_order_lowpass())
        .unwrap_err();
    assert_eq!(err.to_string(), PolezeroError::numerical("not supported").to_string());
}

/// A model kept outside the crate's own type.
struct Integrator;

impl FilterModel for Integrator {
    fn domain(&self) -> Domain {
        Domain::Continuous
    }
    fn poles(&self) -> &[Complex64] {
        &[]
    }
    fn zeros(&self) -> &[Complex64] {
        &[]
    }
    fn numerator(&self) -> &[f64] {
        &[1.0]
    }
    fn denominator(&self) -> &[f64] {
        &[1.0, 0.0]
    }
    fn frequencies(&self) -> &[f64] {
        &[]
    }
    fn complex_frequency_response(&self) -> &[Complex64] {
        &[]
    }
}

#[test]
fn accepts_any_filter_model() {
    let fig = plot::time_response_plot(&Integrator).unwrap();
    for y in fig.y_values() {
        assert_relative_eq!(y, 1.0, epsilon = 1e-9);
    }
}
