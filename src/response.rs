//! Impulse responses of discrete and continuous transfer functions.
//!
//! The plot selector only talks to the [`ResponseEvaluator`] trait; any
//! failure an evaluator reports is handed back to the caller untouched.

use nalgebra::{DMatrix, DVector};

use crate::error::{PolezeroError, Result};
use crate::model::poly;

/// Paired (time or sample index, amplitude) sequences.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeResponse {
    /// Sample times.
    pub time: Vec<f64>,
    /// Output amplitude at each sample time.
    pub amplitude: Vec<f64>,
}

impl TimeResponse {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether there are no samples.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Numerical evaluation of transfer-function impulse responses.
pub trait ResponseEvaluator {
    /// Impulse response of `num / den` in z, sampled every `dt` for `n` samples.
    fn discrete_impulse(
        &self,
        numerator: &[f64],
        denominator: &[f64],
        dt: f64,
        n: usize,
    ) -> Result<TimeResponse>;

    /// Impulse response of `num / den` in s over an evaluator-chosen horizon.
    fn continuous_impulse(&self, numerator: &[f64], denominator: &[f64]) -> Result<TimeResponse>;
}

/// Default evaluator for linear time-invariant systems.
#[derive(Debug, Clone)]
pub struct LtiEvaluator {
    /// Number of samples of a continuous response.
    pub points: usize,
    /// Horizon, in multiples of the slowest time constant.
    pub time_constants: f64,
}

impl Default for LtiEvaluator {
    fn default() -> Self {
        Self {
            points: 100,
            time_constants: 7.0,
        }
    }
}

impl LtiEvaluator {
    /// Create an evaluator with default horizon settings.
    pub fn new() -> Self {
        Self::default()
    }

    fn time_grid(&self, end: f64) -> Vec<f64> {
        match self.points {
            0 => Vec::new(),
            1 => vec![0.0],
            n => (0..n).map(|k| end * k as f64 / (n - 1) as f64).collect(),
        }
    }
}

impl ResponseEvaluator for LtiEvaluator {
    fn discrete_impulse(
        &self,
        numerator: &[f64],
        denominator: &[f64],
        dt: f64,
        n: usize,
    ) -> Result<TimeResponse> {
        if !(dt > 0.0 && dt.is_finite()) {
            return Err(PolezeroError::numerical(format!(
                "sample interval must be positive, got {}",
                dt
            )));
        }
        let (b, a) = normalize(numerator, denominator)?;

        let mut amplitude: Vec<f64> = Vec::with_capacity(n);
        for k in 0..n {
            let mut y = b.get(k).copied().unwrap_or(0.0);
            for i in 1..a.len().min(k + 1) {
                y -= a[i] * amplitude[k - i];
            }
            amplitude.push(y);
        }
        check_finite(&amplitude)?;

        Ok(TimeResponse {
            time: (0..n).map(|k| k as f64 * dt).collect(),
            amplitude,
        })
    }

    fn continuous_impulse(&self, numerator: &[f64], denominator: &[f64]) -> Result<TimeResponse> {
        let (b, a) = normalize(numerator, denominator)?;
        let order = a.len() - 1;

        if order == 0 {
            // Pure feed-through: nothing but the (undrawn) impulse itself.
            let time = self.time_grid(self.time_constants);
            let amplitude = vec![0.0; time.len()];
            return Ok(TimeResponse { time, amplitude });
        }

        // Controllable canonical form.
        let mut state = DMatrix::<f64>::zeros(order, order);
        for j in 0..order {
            state[(0, j)] = -a[j + 1];
        }
        for i in 1..order {
            state[(i, i - 1)] = 1.0;
        }
        let d = b[0];
        let output = DVector::from_iterator(order, (0..order).map(|j| b[j + 1] - d * a[j + 1]));

        let slowest = state
            .complex_eigenvalues()
            .iter()
            .map(|e| e.re.abs())
            .fold(f64::INFINITY, f64::min);
        // Marginal poles fall back to a unit rate.
        let rate = if slowest < 1e-12 || !slowest.is_finite() {
            1.0
        } else {
            slowest
        };
        let time = self.time_grid(self.time_constants / rate);

        let step = if time.len() > 1 { time[1] - time[0] } else { 0.0 };
        let transition = (&state * step).exp();

        let mut x = DVector::<f64>::zeros(order);
        x[0] = 1.0;
        let mut amplitude = Vec::with_capacity(time.len());
        for _ in 0..time.len() {
            amplitude.push(output.dot(&x));
            x = &transition * x;
        }
        check_finite(&amplitude)?;

        tracing::debug!(
            "Continuous impulse response of order {} over {:.3}s",
            order,
            time.last().copied().unwrap_or(0.0)
        );

        Ok(TimeResponse { time, amplitude })
    }
}

/// Normalize to a monic denominator, padding the numerator to its length.
fn normalize(numerator: &[f64], denominator: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    let den = poly::trim_leading_zeros(denominator);
    let Some(&lead) = den.first() else {
        return Err(PolezeroError::numerical(
            "denominator must have at least one nonzero coefficient",
        ));
    };
    let num = poly::trim_leading_zeros(numerator);
    if num.len() > den.len() {
        return Err(PolezeroError::numerical(format!(
            "improper transfer function: numerator degree {} exceeds denominator degree {}",
            num.len() - 1,
            den.len() - 1
        )));
    }

    let mut b = vec![0.0; den.len() - num.len()];
    b.extend(num.iter().map(|c| c / lead));
    let a = den.iter().map(|c| c / lead).collect();
    Ok((b, a))
}

fn check_finite(values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(PolezeroError::numerical("response diverged to a non-finite value"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn discrete_one_pole_is_delayed_geometric() {
        // H(z) = 1 / (z - 0.5)
        let r = LtiEvaluator::new()
            .discrete_impulse(&[1.0], &[1.0, -0.5], 0.1, 5)
            .unwrap();
        assert_eq!(r.amplitude, vec![0.0, 1.0, 0.5, 0.25, 0.125]);
        assert_relative_eq!(r.time[3], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn discrete_biproper_starts_with_direct_term() {
        // H(z) = (2z + 1) / (z - 0.5)
        let r = LtiEvaluator::new()
            .discrete_impulse(&[2.0, 1.0], &[1.0, -0.5], 1.0, 3)
            .unwrap();
        assert_eq!(r.amplitude, vec![2.0, 2.0, 1.0]);
    }

    #[test]
    fn normalizes_leading_denominator() {
        let a = LtiEvaluator::new()
            .discrete_impulse(&[2.0], &[2.0, -1.0], 1.0, 4)
            .unwrap();
        let b = LtiEvaluator::new()
            .discrete_impulse(&[1.0], &[1.0, -0.5], 1.0, 4)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_improper_and_zero_denominator() {
        let eval = LtiEvaluator::new();
        assert!(matches!(
            eval.discrete_impulse(&[1.0, 0.0, 0.0], &[1.0, 0.5], 0.1, 30),
            Err(PolezeroError::Numerical(_))
        ));
        assert!(matches!(
            eval.continuous_impulse(&[1.0], &[0.0, 0.0]),
            Err(PolezeroError::Numerical(_))
        ));
    }

    #[test]
    fn continuous_first_order_decays_exponentially() {
        let r = LtiEvaluator::new()
            .continuous_impulse(&[1.0], &[1.0, 1.0])
            .unwrap();
        assert_eq!(r.len(), 100);
        assert_relative_eq!(r.time[99], 7.0, epsilon = 1e-9);
        for (t, y) in r.time.iter().zip(&r.amplitude) {
            assert_relative_eq!(*y, (-t).exp(), epsilon = 1e-6);
        }
    }

    #[test]
    fn continuous_horizon_follows_slowest_pole() {
        // Poles at -0.5 and -4.
        let r = LtiEvaluator::new()
            .continuous_impulse(&[1.0], &[1.0, 4.5, 2.0])
            .unwrap();
        assert_relative_eq!(*r.time.last().unwrap(), 14.0, epsilon = 1e-6);
        assert_relative_eq!(r.amplitude[0], 0.0, epsilon = 1e-12);
    }

    #[test]
    fn continuous_oscillator_uses_unit_rate() {
        // Poles at +-j: response is sin(t).
        let r = LtiEvaluator::new()
            .continuous_impulse(&[1.0], &[1.0, 0.0, 1.0])
            .unwrap();
        assert_relative_eq!(*r.time.last().unwrap(), 7.0, epsilon = 1e-6);
        for (t, y) in r.time.iter().zip(&r.amplitude) {
            assert_relative_eq!(*y, t.sin(), epsilon = 1e-6);
        }
    }

    #[test]
    fn continuous_constant_gain_is_flat() {
        let r = LtiEvaluator::new().continuous_impulse(&[3.0], &[1.0]).unwrap();
        assert!(r.amplitude.iter().all(|y| *y == 0.0));
    }
}
