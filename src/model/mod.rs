//! Transfer-function model consumed by the plot selector.
//!
//! A [`Model`] is built once (from a filter preset or from manual pole/zero
//! entries) and never mutated afterwards; the presenter swaps in a new one on
//! every change.

pub mod design;
pub mod poly;

use std::fmt;

use num_complex::Complex64;

use crate::error::{PolezeroError, Result};

pub use design::{DesignParams, FilterFamily};

/// Whether a model describes a continuous or a sampled system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Domain {
    /// Continuous-time (s-plane) system.
    Continuous,
    /// Sampled (z-plane) system.
    #[default]
    Discrete,
}

impl Domain {
    /// Get the other domain.
    pub fn next(self) -> Self {
        match self {
            Domain::Continuous => Domain::Discrete,
            Domain::Discrete => Domain::Continuous,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Domain::Continuous => "Analog",
            Domain::Discrete => "Digital",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read-only view of a transfer-function model.
///
/// Everything the plot selector needs, and nothing else. [`Model`] is the
/// canonical implementation; tests and other front ends may supply their own.
pub trait FilterModel {
    /// Continuous or sampled.
    fn domain(&self) -> Domain;
    /// Roots of the denominator, in display order.
    fn poles(&self) -> &[Complex64];
    /// Roots of the numerator, in display order.
    fn zeros(&self) -> &[Complex64];
    /// Numerator coefficients, highest power first.
    fn numerator(&self) -> &[f64];
    /// Denominator coefficients, highest power first.
    fn denominator(&self) -> &[f64];
    /// Frequency grid the response was evaluated on.
    fn frequencies(&self) -> &[f64];
    /// Complex response, one sample per frequency.
    fn complex_frequency_response(&self) -> &[Complex64];
}

/// Raw fields for [`Model::new`].
#[derive(Debug, Clone, Default)]
pub struct ModelParts {
    /// Continuous or sampled.
    pub domain: Domain,
    /// Denominator roots.
    pub poles: Vec<Complex64>,
    /// Numerator roots.
    pub zeros: Vec<Complex64>,
    /// Numerator coefficients, highest power first.
    pub numerator: Vec<f64>,
    /// Denominator coefficients, highest power first.
    pub denominator: Vec<f64>,
    /// Frequency grid.
    pub frequencies: Vec<f64>,
    /// Response samples on the grid.
    pub complex_frequency_response: Vec<Complex64>,
}

/// Validated, immutable transfer-function model.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    domain: Domain,
    poles: Vec<Complex64>,
    zeros: Vec<Complex64>,
    numerator: Vec<f64>,
    denominator: Vec<f64>,
    frequencies: Vec<f64>,
    complex_frequency_response: Vec<Complex64>,
}

impl Model {
    /// Build a model, checking its invariants.
    pub fn new(parts: ModelParts) -> Result<Self> {
        if parts.frequencies.len() != parts.complex_frequency_response.len() {
            return Err(PolezeroError::invalid_model(format!(
                "{} frequencies but {} response samples",
                parts.frequencies.len(),
                parts.complex_frequency_response.len()
            )));
        }
        if parts.denominator.is_empty() {
            return Err(PolezeroError::invalid_model("empty denominator"));
        }

        Ok(Self {
            domain: parts.domain,
            poles: parts.poles,
            zeros: parts.zeros,
            numerator: parts.numerator,
            denominator: parts.denominator,
            frequencies: parts.frequencies,
            complex_frequency_response: parts.complex_frequency_response,
        })
    }
}

impl FilterModel for Model {
    fn domain(&self) -> Domain {
        self.domain
    }

    fn poles(&self) -> &[Complex64] {
        &self.poles
    }

    fn zeros(&self) -> &[Complex64] {
        &self.zeros
    }

    fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    fn denominator(&self) -> &[f64] {
        &self.denominator
    }

    fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    fn complex_frequency_response(&self) -> &[Complex64] {
        &self.complex_frequency_response
    }
}

/// Format a model as plain text (used for the clipboard and `--summary`).
pub fn summarize<M: FilterModel + ?Sized>(model: &M) -> String {
    let mut text = format!("Domain: {}\n", model.domain());
    text.push_str(&format!("Numerator: {:?}\n", model.numerator()));
    text.push_str(&format!("Denominator: {:?}\n", model.denominator()));

    text.push_str("\nPoles [Real, Imaginary]:\n");
    for p in model.poles() {
        text.push_str(&format!("  {:.6}, {:.6}\n", p.re, p.im));
    }

    text.push_str("\nZeros [Real, Imaginary]:\n");
    for z in model.zeros() {
        text.push_str(&format!("  {:.6}, {:.6}\n", z.re, z.im));
    }

    text.push_str(&format!(
        "\nFrequency samples: {}\n",
        model.frequencies().len()
    ));
    text
}
