//! Presenter: owns the current model and the figures drawn from it.
//!
//! Every change builds a fresh [`Model`] and a fresh [`PlotSet`]; nothing is
//! patched in place, and the previous figures are dropped on replacement.

use num_complex::Complex64;

use crate::error::Result;
use crate::model::{design, DesignParams, Domain, FilterFamily, FilterModel, Model};
use crate::plot::{
    value_range, Figure, MarkerKind, PlotSelector, FREQUENCY_RESPONSE_TITLE, PHASE_RESPONSE_TITLE,
    POLE_ZERO_TITLE, TIME_RESPONSE_TITLE,
};
use crate::response::{LtiEvaluator, ResponseEvaluator};

/// One figure slot; a failed figure keeps its error message for display.
pub type PlotSlot = std::result::Result<Figure, String>;

/// The four figures of one redraw.
#[derive(Debug, Clone)]
pub struct PlotSet {
    /// Pole-zero map.
    pub pole_zero: PlotSlot,
    /// Impulse response.
    pub time: PlotSlot,
    /// Magnitude response.
    pub frequency: PlotSlot,
    /// Phase response.
    pub phase: PlotSlot,
}

impl PlotSet {
    /// Build all four figures for a model.
    pub fn generate<E, M>(selector: &PlotSelector<E>, model: &M) -> Self
    where
        E: ResponseEvaluator,
        M: FilterModel + ?Sized,
    {
        let slot = |result: Result<Figure>| {
            result.map_err(|e| {
                tracing::warn!("Figure failed: {}", e);
                e.to_string()
            })
        };

        Self {
            pole_zero: slot(selector.pole_zero_plot(model)),
            time: slot(selector.time_response_plot(model)),
            frequency: Ok(selector.frequency_magnitude_plot(model)),
            phase: Ok(selector.phase_plot(model)),
        }
    }

    /// Slots in display order: top left, bottom left, top right, bottom right.
    pub fn slots(&self) -> [&PlotSlot; 4] {
        [&self.pole_zero, &self.time, &self.frequency, &self.phase]
    }

    /// One headline line per figure, in display order.
    pub fn describe(&self) -> String {
        let titles = [
            POLE_ZERO_TITLE,
            TIME_RESPONSE_TITLE,
            FREQUENCY_RESPONSE_TITLE,
            PHASE_RESPONSE_TITLE,
        ];
        let mut text = String::new();
        for (slot, title) in self.slots().into_iter().zip(titles) {
            let line = match slot {
                Ok(fig) => format!("{}: {}", fig.title, headline(fig)),
                Err(message) => format!("{}: error: {}", title, message),
            };
            text.push_str(&line);
            text.push('\n');
        }
        text
    }
}

fn headline(fig: &Figure) -> String {
    if fig.trace().is_none() {
        return format!(
            "{} poles, {} zeros",
            fig.markers(MarkerKind::Pole).len(),
            fig.markers(MarkerKind::Zero).len()
        );
    }
    let ys = fig.y_values();
    match value_range(ys.iter().copied()) {
        Some([lo, hi]) => format!(
            "{} samples, {} in [{:.4}, {:.4}]",
            ys.len(),
            fig.y_label,
            lo,
            hi
        ),
        None => format!("{} samples", ys.len()),
    }
}

/// Owns the model and regenerates the figures on every change.
#[derive(Debug)]
pub struct Presenter<E = LtiEvaluator> {
    model: Model,
    domain: Domain,
    family: FilterFamily,
    manual: bool,
    params: DesignParams,
    selector: PlotSelector<E>,
    plots: PlotSet,
}

impl Presenter<LtiEvaluator> {
    /// Create a presenter showing a preset filter.
    pub fn new(domain: Domain, family: FilterFamily, params: DesignParams) -> Result<Self> {
        Self::with_selector(domain, family, params, PlotSelector::default())
    }
}

impl<E: ResponseEvaluator> Presenter<E> {
    /// Create a presenter with a custom selector.
    pub fn with_selector(
        domain: Domain,
        family: FilterFamily,
        params: DesignParams,
        selector: PlotSelector<E>,
    ) -> Result<Self> {
        let model = design::design(domain, family, &params)?;
        let plots = PlotSet::generate(&selector, &model);
        Ok(Self {
            model,
            domain,
            family,
            manual: false,
            params,
            selector,
            plots,
        })
    }

    /// Current model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Figures for the current model.
    pub fn plots(&self) -> &PlotSet {
        &self.plots
    }

    /// Selected domain.
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Selected filter family.
    pub fn family(&self) -> FilterFamily {
        self.family
    }

    /// Whether the current model came from manual entries.
    pub fn is_manual(&self) -> bool {
        self.manual
    }

    /// Preset parameters.
    pub fn params(&self) -> &DesignParams {
        &self.params
    }

    /// Switch to a preset. On error the current model stays.
    pub fn change_default_model(&mut self, domain: Domain, family: FilterFamily) -> Result<()> {
        let model = design::design(domain, family, &self.params)?;
        tracing::info!("Preset model: {} {}", domain, family.name());
        self.domain = domain;
        self.family = family;
        self.manual = false;
        self.replace(model);
        Ok(())
    }

    /// Switch to a model built from entered roots, in the current domain.
    pub fn change_manual_model(&mut self, poles: &[Complex64], zeros: &[Complex64]) -> Result<()> {
        let model = design::from_poles_zeros(self.domain, poles, zeros, self.params.points)?;
        tracing::info!(
            "Manual {} model: {} poles, {} zeros",
            self.domain,
            model.poles().len(),
            model.zeros().len()
        );
        self.manual = true;
        self.replace(model);
        Ok(())
    }

    /// Regenerate every figure from the current model.
    pub fn refresh(&mut self) {
        self.plots = PlotSet::generate(&self.selector, &self.model);
    }

    fn replace(&mut self, model: Model) {
        self.model = model;
        self.refresh();
    }
}
