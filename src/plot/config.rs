//! Fixed plotting constants.

/// Constants shared by the plot selector functions.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Number of points on the unit circle of the z-plane map.
    pub unit_circle_points: usize,
    /// Vertical range of the s-plane map.
    pub s_plane_range: [f64; 2],
    /// Number of samples of a digital impulse response.
    pub impulse_samples: usize,
    /// Sample interval of a digital impulse response, in seconds.
    pub sample_interval: f64,
    /// Padding factor for data-driven axis ranges (0.1 = 10% margin).
    pub padding_factor: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            unit_circle_points: 150,
            s_plane_range: [-4.0, 4.0],
            impulse_samples: 30,
            sample_interval: 0.1,
            padding_factor: 0.1,
        }
    }
}
