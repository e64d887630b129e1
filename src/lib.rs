//! Polezero - A terminal pole-zero and response explorer for linear filters.
//!
//! Polezero shows four views of a filter side by side: its pole-zero map,
//! its impulse response, and the magnitude and phase of its frequency
//! response. Models come from Butterworth presets or from manually entered
//! poles and zeros, in either the analog (s-plane) or digital (z-plane)
//! domain.
//!
//! # Features
//!
//! - Butterworth low pass, high pass, band pass and band stop presets
//! - Manual pole/zero entry with conjugate completion
//! - Discrete impulse response as a staircase, continuous as a line
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use polezero::model::{design, DesignParams, Domain, FilterFamily};
//! use polezero::plot;
//!
//! let model = design::design(Domain::Discrete, FilterFamily::LowPass, &DesignParams::default())?;
//! let map = plot::pole_zero_plot(&model)?;
//! let impulse = plot::time_response_plot(&model)?;
//! println!("{} with {} samples", impulse.title, impulse.y_values().len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod entry;
pub mod error;
pub mod model;
pub mod plot;
pub mod presenter;
pub mod response;
pub mod ui;

pub use error::{PolezeroError, Result};
