//! Polynomial helpers. Coefficients are stored highest power first.

use nalgebra::DMatrix;
use num_complex::Complex64;

use crate::error::{PolezeroError, Result};

/// Coefficients of the monic polynomial with the given roots.
pub fn from_roots(roots: &[Complex64]) -> Vec<Complex64> {
    let mut coeffs = vec![Complex64::new(1.0, 0.0)];
    for root in roots {
        coeffs = convolve(&coeffs, &[Complex64::new(1.0, 0.0), -root]);
    }
    coeffs
}

/// Discrete linear convolution of two sequences.
fn convolve(f: &[Complex64], g: &[Complex64]) -> Vec<Complex64> {
    let mut out = vec![Complex64::new(0.0, 0.0); f.len() + g.len() - 1];
    for (i, fv) in f.iter().enumerate() {
        for (j, gv) in g.iter().enumerate() {
            out[i + j] += fv * gv;
        }
    }
    out
}

/// Drop leading (highest power) zero coefficients.
pub fn trim_leading_zeros(coeffs: &[f64]) -> &[f64] {
    let start = coeffs
        .iter()
        .position(|c| *c != 0.0)
        .unwrap_or(coeffs.len());
    &coeffs[start..]
}

/// Evaluate a real polynomial at a complex point (Horner).
pub fn eval(coeffs: &[f64], x: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, c| acc * x + *c)
}

/// Roots of a real polynomial, as eigenvalues of its companion matrix.
pub fn roots(coeffs: &[f64]) -> Result<Vec<Complex64>> {
    let coeffs = trim_leading_zeros(coeffs);
    let Some((&lead, rest)) = coeffs.split_first() else {
        return Err(PolezeroError::numerical("roots of the zero polynomial"));
    };

    let n = rest.len();
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut companion = DMatrix::<f64>::zeros(n, n);
    for (j, c) in rest.iter().enumerate() {
        companion[(0, j)] = -c / lead;
    }
    for i in 1..n {
        companion[(i, i - 1)] = 1.0;
    }

    let roots: Vec<Complex64> = companion.complex_eigenvalues().iter().copied().collect();
    if roots.iter().any(|r| !r.re.is_finite() || !r.im.is_finite()) {
        return Err(PolezeroError::numerical("root finding did not converge"));
    }
    Ok(roots)
}
