//! Model construction: Butterworth presets and manual pole/zero models.
//!
//! Presets start from the analog Butterworth prototype, move it to the
//! requested band, and (for the digital domain) map it onto the z-plane with
//! the bilinear transform.

use std::f64::consts::PI;

use num_complex::Complex64;

use super::{poly, Domain, Model, ModelParts};
use crate::error::{PolezeroError, Result};

/// Filter family offered by the filter menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterFamily {
    /// Low pass.
    #[default]
    LowPass,
    /// High pass.
    HighPass,
    /// Band pass.
    BandPass,
    /// Band stop.
    BandStop,
}

impl FilterFamily {
    /// Get the next family in the menu cycle.
    pub fn next(self) -> Self {
        match self {
            Self::LowPass => Self::HighPass,
            Self::HighPass => Self::BandPass,
            Self::BandPass => Self::BandStop,
            Self::BandStop => Self::LowPass,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::LowPass => "Low pass",
            Self::HighPass => "High pass",
            Self::BandPass => "Band pass",
            Self::BandStop => "Band stop",
        }
    }
}

/// Highest Butterworth order the presets accept.
pub const MAX_ORDER: u32 = 64;

/// Parameters for the Butterworth presets.
#[derive(Debug, Clone)]
pub struct DesignParams {
    /// Butterworth order, 1 to [`MAX_ORDER`].
    pub order: u32,
    /// Number of frequency samples.
    pub points: usize,
    /// Digital low/high pass cutoff, relative to Nyquist.
    pub digital_cutoff: f64,
    /// Digital band edges, relative to Nyquist.
    pub digital_band: (f64, f64),
    /// Analog low/high pass cutoff in rad/s.
    pub analog_cutoff: f64,
    /// Analog band edges in rad/s.
    pub analog_band: (f64, f64),
}

impl Default for DesignParams {
    fn default() -> Self {
        Self {
            order: 2,
            points: 256,
            digital_cutoff: 0.3,
            digital_band: (0.2, 0.5),
            analog_cutoff: 1.0,
            analog_band: (1.0, 3.0),
        }
    }
}

/// Zeros, poles and gain.
#[derive(Debug, Clone)]
struct Zpk {
    z: Vec<Complex64>,
    p: Vec<Complex64>,
    k: f64,
}

impl Zpk {
    fn relative_degree(&self) -> Result<usize> {
        self.p.len().checked_sub(self.z.len()).ok_or_else(|| {
            PolezeroError::numerical("improper transfer function: more zeros than poles")
        })
    }
}

/// Build a preset model.
pub fn design(domain: Domain, family: FilterFamily, params: &DesignParams) -> Result<Model> {
    if params.order == 0 || params.order > MAX_ORDER {
        return Err(PolezeroError::invalid_model(format!(
            "filter order must be between 1 and {}, got {}",
            MAX_ORDER, params.order
        )));
    }

    let zpk = match domain {
        Domain::Discrete => {
            let (lo, hi) = params.digital_band;
            for w in [params.digital_cutoff, lo, hi] {
                if !(w > 0.0 && w < 1.0) {
                    return Err(PolezeroError::invalid_model(format!(
                        "digital critical frequencies must be in (0, 1), got {}",
                        w
                    )));
                }
            }
            // Pre-warp for the bilinear transform with fs = 2.
            let fs = 2.0;
            let warp = |w: f64| 2.0 * fs * (PI * w / fs).tan();
            let analog = transform(
                family,
                warp(params.digital_cutoff),
                (warp(lo), warp(hi)),
                params.order,
            )?;
            bilinear(&analog, fs)?
        },
        Domain::Continuous => {
            let (lo, hi) = params.analog_band;
            for w in [params.analog_cutoff, lo, hi] {
                if !(w > 0.0 && w.is_finite()) {
                    return Err(PolezeroError::invalid_model(format!(
                        "analog critical frequencies must be positive, got {}",
                        w
                    )));
                }
            }
            transform(family, params.analog_cutoff, (lo, hi), params.order)?
        },
    };

    tracing::debug!(
        "Designed {} {} filter of order {}",
        domain,
        family.name(),
        params.order
    );

    build(domain, zpk, params.points)
}

/// Build a unit-gain model from manually entered roots.
///
/// Complex roots without their conjugate get it appended, so the
/// coefficients stay real.
pub fn from_poles_zeros(
    domain: Domain,
    poles: &[Complex64],
    zeros: &[Complex64],
    points: usize,
) -> Result<Model> {
    let zpk = Zpk {
        z: complete_conjugates(zeros),
        p: complete_conjugates(poles),
        k: 1.0,
    };
    build(domain, zpk, points)
}

/// Build a model from transfer-function coefficients.
pub fn from_coefficients(
    domain: Domain,
    numerator: &[f64],
    denominator: &[f64],
    points: usize,
) -> Result<Model> {
    let zeros = poly::roots(numerator)?;
    let poles = poly::roots(denominator)?;
    let frequencies = frequency_grid(domain, &poles, &zeros, points);
    let complex_frequency_response =
        frequency_response(domain, numerator, denominator, &frequencies);

    Model::new(ModelParts {
        domain,
        poles,
        zeros,
        numerator: numerator.to_vec(),
        denominator: denominator.to_vec(),
        frequencies,
        complex_frequency_response,
    })
}

/// Frequency grid for a model.
///
/// Digital: `points` samples over [0, pi) rad/sample. Analog: `points`
/// samples over [0, 3 * max(1, largest root modulus)] rad/s.
pub fn frequency_grid(
    domain: Domain,
    poles: &[Complex64],
    zeros: &[Complex64],
    points: usize,
) -> Vec<f64> {
    match domain {
        Domain::Discrete => (0..points)
            .map(|i| PI * i as f64 / points as f64)
            .collect(),
        Domain::Continuous => {
            let w_max = 3.0
                * poles
                    .iter()
                    .chain(zeros)
                    .map(|r| r.norm())
                    .fold(1.0_f64, f64::max);
            if points <= 1 {
                return vec![0.0; points];
            }
            (0..points)
                .map(|i| w_max * i as f64 / (points - 1) as f64)
                .collect()
        },
    }
}

/// Evaluate B(x) / A(x) on the grid, with x = e^jw (digital) or jw (analog).
pub fn frequency_response(
    domain: Domain,
    numerator: &[f64],
    denominator: &[f64],
    frequencies: &[f64],
) -> Vec<Complex64> {
    frequencies
        .iter()
        .map(|&w| {
            let x = match domain {
                Domain::Discrete => Complex64::from_polar(1.0, w),
                Domain::Continuous => Complex64::new(0.0, w),
            };
            poly::eval(numerator, x) / poly::eval(denominator, x)
        })
        .collect()
}

fn build(domain: Domain, zpk: Zpk, points: usize) -> Result<Model> {
    let numerator: Vec<f64> = poly::from_roots(&zpk.z)
        .iter()
        .map(|c| zpk.k * c.re)
        .collect();
    let denominator: Vec<f64> = poly::from_roots(&zpk.p).iter().map(|c| c.re).collect();

    let frequencies = frequency_grid(domain, &zpk.p, &zpk.z, points);
    let complex_frequency_response =
        frequency_response(domain, &numerator, &denominator, &frequencies);

    Model::new(ModelParts {
        domain,
        poles: zpk.p,
        zeros: zpk.z,
        numerator,
        denominator,
        frequencies,
        complex_frequency_response,
    })
}

fn complete_conjugates(roots: &[Complex64]) -> Vec<Complex64> {
    const TOL: f64 = 1e-12;
    let mut out = roots.to_vec();
    let mut unmatched: Vec<Complex64> = Vec::new();

    for r in roots.iter().filter(|r| r.im.abs() > TOL) {
        if let Some(pos) = unmatched.iter().position(|u| (u.conj() - r).norm() < TOL) {
            unmatched.remove(pos);
        } else {
            unmatched.push(*r);
        }
    }

    for r in unmatched {
        tracing::debug!("Adding conjugate of {} + {}j", r.re, r.im);
        out.push(r.conj());
    }
    out
}

/// Analog Butterworth prototype with unit cutoff.
fn butter_prototype(order: u32) -> Zpk {
    let n = i64::from(order);
    let p = (-n + 1..n)
        .step_by(2)
        .map(|m| -(Complex64::i() * PI * m as f64 / (2.0 * n as f64)).exp())
        .collect();
    Zpk {
        z: Vec::new(),
        p,
        k: 1.0,
    }
}

fn transform(family: FilterFamily, cutoff: f64, band: (f64, f64), order: u32) -> Result<Zpk> {
    let proto = butter_prototype(order);
    let (lo, hi) = band;
    if matches!(family, FilterFamily::BandPass | FilterFamily::BandStop) && lo >= hi {
        return Err(PolezeroError::invalid_model(
            "lower band edge must be below the upper band edge",
        ));
    }
    let bw = hi - lo;
    let wo = (lo * hi).sqrt();

    match family {
        FilterFamily::LowPass => lp2lp(&proto, cutoff),
        FilterFamily::HighPass => lp2hp(&proto, cutoff),
        FilterFamily::BandPass => lp2bp(&proto, wo, bw),
        FilterFamily::BandStop => lp2bs(&proto, wo, bw),
    }
}

fn prod_neg(roots: &[Complex64]) -> Complex64 {
    roots
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, r| acc * -r)
}

fn lp2lp(zpk: &Zpk, wo: f64) -> Result<Zpk> {
    let degree = zpk.relative_degree()?;
    Ok(Zpk {
        z: zpk.z.iter().map(|z| z * wo).collect(),
        p: zpk.p.iter().map(|p| p * wo).collect(),
        k: zpk.k * wo.powi(degree as i32),
    })
}

fn lp2hp(zpk: &Zpk, wo: f64) -> Result<Zpk> {
    let degree = zpk.relative_degree()?;
    let mut z: Vec<Complex64> = zpk.z.iter().map(|z| wo / *z).collect();
    let p = zpk.p.iter().map(|p| wo / *p).collect();
    // Zeros at infinity move to the origin.
    z.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(degree));
    Ok(Zpk {
        z,
        p,
        k: zpk.k * (prod_neg(&zpk.z) / prod_neg(&zpk.p)).re,
    })
}

fn shift_pair(roots: &[Complex64], wo: f64) -> Vec<Complex64> {
    let up = roots.iter().map(|r| r + (r * r - wo * wo).sqrt());
    let down = roots.iter().map(|r| r - (r * r - wo * wo).sqrt());
    up.chain(down).collect()
}

fn lp2bp(zpk: &Zpk, wo: f64, bw: f64) -> Result<Zpk> {
    let degree = zpk.relative_degree()?;
    let z_lp: Vec<Complex64> = zpk.z.iter().map(|z| z * bw / 2.0).collect();
    let p_lp: Vec<Complex64> = zpk.p.iter().map(|p| p * bw / 2.0).collect();

    let mut z = shift_pair(&z_lp, wo);
    z.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(degree));
    Ok(Zpk {
        z,
        p: shift_pair(&p_lp, wo),
        k: zpk.k * bw.powi(degree as i32),
    })
}

fn lp2bs(zpk: &Zpk, wo: f64, bw: f64) -> Result<Zpk> {
    let degree = zpk.relative_degree()?;
    let z_hp: Vec<Complex64> = zpk.z.iter().map(|z| (bw / 2.0) / *z).collect();
    let p_hp: Vec<Complex64> = zpk.p.iter().map(|p| (bw / 2.0) / *p).collect();

    // Zeros at infinity move to the center of the stop band.
    let mut z = shift_pair(&z_hp, wo);
    z.extend(std::iter::repeat(Complex64::new(0.0, wo)).take(degree));
    z.extend(std::iter::repeat(Complex64::new(0.0, -wo)).take(degree));
    Ok(Zpk {
        z,
        p: shift_pair(&p_hp, wo),
        k: zpk.k * (prod_neg(&zpk.z) / prod_neg(&zpk.p)).re,
    })
}

fn bilinear(zpk: &Zpk, fs: f64) -> Result<Zpk> {
    let degree = zpk.relative_degree()?;
    let fs2 = Complex64::new(2.0 * fs, 0.0);

    let mut z: Vec<Complex64> = zpk.z.iter().map(|z| (fs2 + z) / (fs2 - z)).collect();
    let p = zpk.p.iter().map(|p| (fs2 + p) / (fs2 - p)).collect();
    // Zeros at infinity move to Nyquist.
    z.extend(std::iter::repeat(Complex64::new(-1.0, 0.0)).take(degree));

    let num = zpk
        .z
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, z| acc * (fs2 - z));
    let den = zpk
        .p
        .iter()
        .fold(Complex64::new(1.0, 0.0), |acc, p| acc * (fs2 - p));

    Ok(Zpk {
        z,
        p,
        k: zpk.k * (num / den).re,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterModel;
    use approx::assert_relative_eq;

    #[test]
    fn prototype_poles_lie_on_unit_circle_in_left_half_plane() {
        let proto = butter_prototype(5);
        assert_eq!(proto.p.len(), 5);
        for p in &proto.p {
            assert_relative_eq!(p.norm(), 1.0, epsilon = 1e-12);
            assert!(p.re < 0.0);
        }
    }

    #[test]
    fn digital_low_pass_has_unit_dc_gain_and_stable_poles() {
        let model = design(
            Domain::Discrete,
            FilterFamily::LowPass,
            &DesignParams::default(),
        )
        .unwrap();
        assert_eq!(model.poles().len(), 2);
        assert_eq!(model.zeros().len(), 2);
        for p in model.poles() {
            assert!(p.norm() < 1.0);
        }
        assert_relative_eq!(
            model.complex_frequency_response()[0].norm(),
            1.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn digital_high_pass_blocks_dc() {
        let model = design(
            Domain::Discrete,
            FilterFamily::HighPass,
            &DesignParams::default(),
        )
        .unwrap();
        assert!(model.complex_frequency_response()[0].norm() < 1e-9);
    }

    #[test]
    fn band_designs_double_the_order() {
        for family in [FilterFamily::BandPass, FilterFamily::BandStop] {
            for domain in [Domain::Discrete, Domain::Continuous] {
                let model = design(domain, family, &DesignParams::default()).unwrap();
                assert_eq!(model.poles().len(), 4, "{:?} {:?}", domain, family);
                assert_eq!(model.denominator().len(), 5);
            }
        }
    }

    #[test]
    fn analog_low_pass_is_minus_3db_at_cutoff() {
        let params = DesignParams {
            points: 2,
            ..Default::default()
        };
        let model = design(Domain::Continuous, FilterFamily::LowPass, &params).unwrap();
        let h = frequency_response(
            Domain::Continuous,
            model.numerator(),
            model.denominator(),
            &[params.analog_cutoff],
        );
        assert_relative_eq!(h[0].norm(), 1.0 / 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn rejects_out_of_range_digital_cutoff() {
        let params = DesignParams {
            digital_cutoff: 1.5,
            ..Default::default()
        };
        assert!(design(Domain::Discrete, FilterFamily::LowPass, &params).is_err());
    }

    #[test]
    fn rejects_zero_order() {
        let params = DesignParams {
            order: 0,
            ..Default::default()
        };
        assert!(design(Domain::Continuous, FilterFamily::LowPass, &params).is_err());
    }

    #[test]
    fn rejects_order_above_cap() {
        for order in [MAX_ORDER + 1, u32::MAX] {
            let params = DesignParams {
                order,
                points: 8,
                ..Default::default()
            };
            let err = design(Domain::Continuous, FilterFamily::LowPass, &params).unwrap_err();
            assert!(matches!(err, PolezeroError::InvalidModel(_)));
        }
    }

    #[test]
    fn accepts_order_at_cap() {
        let params = DesignParams {
            order: MAX_ORDER,
            points: 8,
            ..Default::default()
        };
        let model = design(Domain::Continuous, FilterFamily::LowPass, &params).unwrap();
        assert_eq!(model.poles().len(), MAX_ORDER as usize);
    }

    #[test]
    fn manual_roots_get_conjugates() {
        let model = from_poles_zeros(
            Domain::Discrete,
            &[Complex64::new(0.5, 0.5)],
            &[],
            8,
        )
        .unwrap();
        assert_eq!(model.poles().len(), 2);
        assert_eq!(model.poles()[0], Complex64::new(0.5, 0.5));
        assert_eq!(model.poles()[1], Complex64::new(0.5, -0.5));
        assert_relative_eq!(model.denominator()[1], -1.0, epsilon = 1e-12);
    }

    #[test]
    fn manual_pairs_are_left_alone() {
        let poles = [Complex64::new(0.1, 0.3), Complex64::new(0.1, -0.3)];
        let model = from_poles_zeros(Domain::Discrete, &poles, &[], 8).unwrap();
        assert_eq!(model.poles(), &poles);
    }

    #[test]
    fn empty_manual_model_is_unit_gain() {
        let model = from_poles_zeros(Domain::Continuous, &[], &[], 4).unwrap();
        assert_eq!(model.numerator(), &[1.0]);
        assert_eq!(model.denominator(), &[1.0]);
        for h in model.complex_frequency_response() {
            assert_relative_eq!(h.re, 1.0);
        }
    }

    #[test]
    fn coefficients_round_trip_through_roots() {
        let model = from_coefficients(Domain::Continuous, &[1.0], &[1.0, 1.0], 16).unwrap();
        assert_eq!(model.poles().len(), 1);
        assert_relative_eq!(model.poles()[0].re, -1.0, epsilon = 1e-12);
        assert!(model.zeros().is_empty());
        assert_eq!(model.frequencies().len(), 16);
        assert_relative_eq!(*model.frequencies().last().unwrap(), 3.0);
    }

    #[test]
    fn digital_grid_stops_short_of_nyquist() {
        let grid = frequency_grid(Domain::Discrete, &[], &[], 4);
        assert_eq!(grid, vec![0.0, PI / 4.0, PI / 2.0, 3.0 * PI / 4.0]);
    }
}
