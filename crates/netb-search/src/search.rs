//! Search tasks statically specialised on construction family and embedding.

use std::marker::PhantomData;

use netb_core::{
    EmbeddingType, ErrorInfo, NetBuilderError, OutputFormat, Precision, RngHandle,
};
use netb_merit::Embedding;
use netb_net::{ConstructionMethod, DigitalNet};

use crate::exploration::ExplorationMethod;
use crate::settings::SearchSettings;
use crate::task::Task;

/// Largest number of candidates enumerated by the exhaustive explorations.
pub const MAX_ENUMERATED_CANDIDATES: u64 = 1 << 20;

/// Search for a good net of family `C` scored under embedding `E`.
pub struct SearchTask<C: ConstructionMethod, E: Embedding> {
    settings: SearchSettings,
    design: C::DesignParameter,
    fixed_net: Option<Vec<C::GenValue>>,
    best: Option<(DigitalNet<C>, f64)>,
    _embedding: PhantomData<E>,
}

impl<C: ConstructionMethod, E: Embedding> SearchTask<C, E> {
    /// Parses the design parameter and, for `evaluation`, the net description.
    pub fn new(settings: SearchSettings) -> Result<Self, NetBuilderError> {
        if settings.dimension == 0 {
            return Err(NetBuilderError::Configuration(ErrorInfo::new(
                "zero_dimension",
                "the dimension must be at least 1",
            )));
        }
        let design =
            C::parse_design_parameter(&settings.design_parameter, settings.m, settings.dimension)?;
        if E::TAG == EmbeddingType::Multilevel {
            settings.evaluator.check_levels(settings.m)?;
        }
        let fixed_net = match &settings.exploration {
            ExplorationMethod::Evaluation { net } => {
                Some(parse_net::<C>(&design, settings.dimension, net)?)
            }
            _ => None,
        };
        Ok(Self {
            settings,
            design,
            fixed_net,
            best: None,
            _embedding: PhantomData,
        })
    }

    /// Best net found by the last execution.
    pub fn best_net(&self) -> Option<&DigitalNet<C>> {
        self.best.as_ref().map(|(net, _)| net)
    }

    /// Merit of the best net found by the last execution.
    pub fn best_merit(&self) -> Option<f64> {
        self.best.as_ref().map(|(_, merit)| *merit)
    }

    fn score(&self, net: &DigitalNet<C>, best: Option<f64>) -> Option<f64> {
        self.settings
            .evaluator
            .evaluate::<E>(net.matrices(), self.settings.m, best)
    }

    fn consider(&mut self, net: DigitalNet<C>) {
        let incumbent = self.best_merit();
        if let Some(merit) = self.score(&net, incumbent) {
            if incumbent.map_or(true, |best| merit < best) {
                tracing::debug!(merit, "new best net");
                self.best = Some((net, merit));
            }
        }
    }

    fn evaluate_fixed(&mut self) -> Result<(), NetBuilderError> {
        let genvalues = self
            .fixed_net
            .clone()
            .ok_or_else(|| search_error("missing_net", "no net to evaluate"))?;
        let net = DigitalNet::from_genvalues(self.design.clone(), genvalues);
        let merit = self
            .score(&net, None)
            .ok_or_else(|| {
                search_error("evaluation_aborted", "evaluation aborted without a bound")
            })?;
        self.best = Some((net, merit));
        Ok(())
    }

    fn exhaustive(&mut self) -> Result<(), NetBuilderError> {
        let dimension = self.settings.dimension;
        let mut radices = Vec::with_capacity(dimension);
        let mut total = 1u64;
        for coord in 0..dimension {
            let size = C::space_size(&self.design, coord);
            total = size
                .and_then(|size| total.checked_mul(size))
                .filter(|&total| total <= MAX_ENUMERATED_CANDIDATES)
                .ok_or_else(|| too_large("exhaustive", coord))?;
            radices.push(size.unwrap_or(1));
        }
        for index in 0..total {
            let mut rest = index;
            let genvalues = radices
                .iter()
                .enumerate()
                .map(|(coord, &radix)| {
                    let digit = rest % radix;
                    rest /= radix;
                    C::genvalue_at(&self.design, coord, digit)
                })
                .collect();
            tracing::info!("net {}/{}", index + 1, total);
            let net = DigitalNet::from_genvalues(self.design.clone(), genvalues);
            self.consider(net);
        }
        Ok(())
    }

    fn random(&mut self, samples: usize) -> Result<(), NetBuilderError> {
        if samples == 0 {
            return Err(no_candidates());
        }
        let mut rng = RngHandle::from_seed(self.settings.seed);
        for sample in 0..samples {
            let genvalues = (0..self.settings.dimension)
                .map(|coord| C::random_genvalue(&self.design, coord, &mut rng))
                .collect();
            tracing::info!("net {}/{}", sample + 1, samples);
            let net = DigitalNet::from_genvalues(self.design.clone(), genvalues);
            self.consider(net);
        }
        Ok(())
    }

    /// Component-by-component construction; coordinates below
    /// `full_coordinates` try every value, the others `samples` random ones.
    fn cbc(&mut self, full_coordinates: usize, samples: usize) -> Result<(), NetBuilderError> {
        let dimension = self.settings.dimension;
        let mut rng = RngHandle::from_seed(self.settings.seed);
        let mut net = DigitalNet::<C>::empty(self.design.clone());
        let mut merit = 0.0;
        for coord in 0..dimension {
            let candidates = if coord < full_coordinates {
                let size = C::space_size(&self.design, coord)
                    .filter(|&size| size <= MAX_ENUMERATED_CANDIDATES)
                    .ok_or_else(|| too_large("full-CBC", coord))?;
                (0..size)
                    .map(|index| C::genvalue_at(&self.design, coord, index))
                    .collect::<Vec<_>>()
            } else {
                (0..samples)
                    .map(|_| C::random_genvalue(&self.design, coord, &mut rng))
                    .collect()
            };
            let total = candidates.len();
            let mut stage: Option<(C::GenValue, f64)> = None;
            for (index, genvalue) in candidates.into_iter().enumerate() {
                tracing::info!(
                    "coordinate {}/{} - net {}/{}",
                    coord + 1,
                    dimension,
                    index + 1,
                    total
                );
                let incumbent = stage.as_ref().map(|(_, value)| *value);
                let trial = net.extended(genvalue.clone());
                if let Some(value) = self.score(&trial, incumbent) {
                    if incumbent.map_or(true, |best| value < best) {
                        stage = Some((genvalue, value));
                    }
                }
            }
            let (genvalue, value) = stage.ok_or_else(no_candidates)?;
            tracing::debug!(coordinate = coord + 1, merit = value, "coordinate fixed");
            net.push(genvalue);
            merit = value;
        }
        self.best = Some((net, merit));
        Ok(())
    }
}

impl<C: ConstructionMethod, E: Embedding> Task for SearchTask<C, E> {
    fn label(&self) -> String {
        format!("{}/{}/{}", C::TAG, E::TAG, self.settings.exploration.name())
    }

    fn execute(&mut self) -> Result<(), NetBuilderError> {
        self.best = None;
        tracing::info!(
            task = %self.label(),
            m = self.settings.m,
            dimension = self.settings.dimension,
            "exploring"
        );
        match self.settings.exploration.clone() {
            ExplorationMethod::Evaluation { .. } => self.evaluate_fixed()?,
            ExplorationMethod::Exhaustive => self.exhaustive()?,
            ExplorationMethod::Random { samples } => self.random(samples)?,
            ExplorationMethod::FullCbc => self.cbc(self.settings.dimension, 0)?,
            ExplorationMethod::RandomCbc { samples } => self.cbc(0, samples)?,
            ExplorationMethod::MixedCbc {
                samples,
                full_coordinates,
            } => self.cbc(full_coordinates, samples)?,
        }
        if self.best.is_none() {
            return Err(no_candidates());
        }
        Ok(())
    }

    fn output_net(&self, format: OutputFormat) -> Result<String, NetBuilderError> {
        self.best_net()
            .map(|net| net.render(format))
            .ok_or_else(not_executed)
    }

    fn output_merit_value(&self, precision: Precision) -> Result<String, NetBuilderError> {
        self.best_merit()
            .map(|merit| precision.format(merit))
            .ok_or_else(not_executed)
    }
}

/// Parses a `/`-separated net description with one entry per coordinate.
pub fn parse_net<C: ConstructionMethod>(
    design: &C::DesignParameter,
    dimension: usize,
    text: &str,
) -> Result<Vec<C::GenValue>, NetBuilderError> {
    let parts: Vec<&str> = text.split('/').collect();
    if parts.len() != dimension {
        return Err(NetBuilderError::Grammar(
            ErrorInfo::new(
                "net_dimension",
                format!("net description has {} coordinates, expected {dimension}", parts.len()),
            )
            .with_context("net", text),
        ));
    }
    parts
        .iter()
        .enumerate()
        .map(|(coord, part)| C::parse_genvalue(design, coord, part))
        .collect()
}

fn search_error(code: &str, message: &str) -> NetBuilderError {
    NetBuilderError::Search(ErrorInfo::new(code, message))
}

fn too_large(method: &str, coord: usize) -> NetBuilderError {
    NetBuilderError::Search(
        ErrorInfo::new("search_space_too_large", "too many candidates to enumerate")
            .with_context("method", method)
            .with_context("coordinate", (coord + 1).to_string())
            .with_hint("use a random exploration method"),
    )
}

fn no_candidates() -> NetBuilderError {
    search_error("no_candidates", "the exploration produced no candidate net")
}

fn not_executed() -> NetBuilderError {
    search_error("task_not_executed", "the task has not produced a net yet")
}
