//! Task descriptor and report options built from a validated configuration.

use std::str::FromStr;

use netb_core::{EmbeddingType, ErrorInfo, NetBuilderError, Precision};
use netb_merit::{Figure, FigureCombiner, LevelCombiner, MeritEvaluator};
use netb_parse::{
    parse_dimension, parse_exploration_method, parse_figure, parse_figure_combiner,
    parse_level_combiner, parse_output_targets, parse_set_type, parse_size, parse_weights_power,
    ConstructionChoice, OutputTarget, SetType,
};
use netb_search::{ExplorationMethod, SearchSettings};

use crate::config::{OptionKey, RawConfiguration};

/// Everything needed to build a task, parsed once per run.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDescriptor {
    /// Verbosity requested with `--verbose`.
    pub verbosity: u8,
    /// Requested point set type.
    pub set_type: SetType,
    /// Exploration method.
    pub exploration: ExplorationMethod,
    /// Column count `m` (nets of `2^m` points).
    pub m: usize,
    /// Number of coordinates.
    pub dimension: usize,
    /// Figures with their effective importance.
    pub figures: Vec<Figure>,
    /// Combiner across figures.
    pub figure_combiner: FigureCombiner,
    /// Combiner across levels, when one applies.
    pub level_combiner: Option<LevelCombiner>,
    /// Whether candidates may be abandoned early.
    pub early_abort: bool,
    /// Power the importances were supplied at.
    pub weights_power: Option<f64>,
    /// Unconsumed remainder of the construction option.
    pub design_parameter: String,
}

/// Reporting parameters shared by every repeat.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Number of executions.
    pub repeat: usize,
    /// Precision of the printed merit.
    pub precision: Precision,
    /// Output files, in configured order.
    pub targets: Vec<OutputTarget>,
    /// Master seed of the per-repeat substreams, when fixed by the user.
    pub seed: Option<u64>,
}

pub(crate) fn parse_number<T: FromStr>(
    raw: &RawConfiguration,
    key: OptionKey,
) -> Result<Option<T>, NetBuilderError> {
    raw.single(key)
        .map(|text| {
            text.trim().parse::<T>().map_err(|_| {
                NetBuilderError::Grammar(
                    ErrorInfo::new("number", format!("invalid value for {key}"))
                        .with_context("input", text),
                )
            })
        })
        .transpose()
}

fn required<'a>(raw: &'a RawConfiguration, key: OptionKey) -> Result<&'a str, NetBuilderError> {
    raw.single(key).ok_or_else(|| {
        NetBuilderError::Configuration(
            ErrorInfo::new("missing_option", format!("{key} must be specified"))
                .with_context("option", key.long_name()),
        )
    })
}

impl TaskDescriptor {
    /// Parses every task option of a validated configuration.
    pub fn from_raw(
        raw: &RawConfiguration,
        embedding: EmbeddingType,
        construction: &ConstructionChoice,
    ) -> Result<Self, NetBuilderError> {
        let weights_power = raw
            .single(OptionKey::WeightsPower)
            .map(parse_weights_power)
            .transpose()?;
        let figures = raw
            .values(OptionKey::AddFigure)
            .iter()
            .map(|text| -> Result<Figure, NetBuilderError> {
                let figure = parse_figure(text)?;
                Ok(match weights_power {
                    Some(power) => figure.with_weights_power(power),
                    None => figure,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let figure_combiner = raw
            .single(OptionKey::FigureCombiner)
            .map(parse_figure_combiner)
            .transpose()?
            .unwrap_or_default();
        let level_combiner = match raw.single(OptionKey::Combiner) {
            Some(text) => Some(parse_level_combiner(text)?),
            None if embedding == EmbeddingType::Multilevel => Some(LevelCombiner::default()),
            None => None,
        };
        let set_type = raw
            .single(OptionKey::SetType)
            .map(parse_set_type)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            verbosity: parse_number(raw, OptionKey::Verbose)?.unwrap_or(0),
            set_type,
            exploration: parse_exploration_method(required(raw, OptionKey::ExplorationMethod)?)?,
            m: parse_size(required(raw, OptionKey::Size)?)?,
            dimension: parse_dimension(required(raw, OptionKey::Dimension)?)?,
            figures,
            figure_combiner,
            level_combiner,
            early_abort: !raw.is_supplied(OptionKey::NoEarlyAbort),
            weights_power,
            design_parameter: construction.design_parameter.clone(),
        })
    }

    /// Search settings for one execution seeded with `seed`.
    pub fn search_settings(&self, seed: u64) -> Result<SearchSettings, NetBuilderError> {
        let evaluator = MeritEvaluator::new(
            self.figures.clone(),
            self.figure_combiner,
            self.level_combiner.unwrap_or_default(),
            self.early_abort,
        )?;
        Ok(SearchSettings {
            m: self.m,
            dimension: self.dimension,
            design_parameter: self.design_parameter.clone(),
            exploration: self.exploration.clone(),
            evaluator,
            seed,
        })
    }
}

impl ReportOptions {
    /// Parses repeat count, merit precision, output targets and seed.
    pub fn from_raw(raw: &RawConfiguration) -> Result<Self, NetBuilderError> {
        Ok(Self {
            repeat: parse_number(raw, OptionKey::Repeat)?.unwrap_or(1),
            precision: Precision::new(
                parse_number(raw, OptionKey::MeritDigitsDisplayed)?.unwrap_or(0),
            ),
            targets: parse_output_targets(raw.values(OptionKey::OutputFormat))?,
            seed: parse_number(raw, OptionKey::Seed)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netb_core::NetConstruction;

    fn sobol() -> ConstructionChoice {
        ConstructionChoice {
            construction: NetConstruction::Sobol,
            design_parameter: String::new(),
        }
    }

    fn raw_with(pairs: &[(OptionKey, &str)]) -> RawConfiguration {
        let mut raw = RawConfiguration::new();
        raw.push(OptionKey::Size, "2^6");
        raw.push(OptionKey::ExplorationMethod, "full-CBC");
        raw.push(OptionKey::Dimension, "3");
        for (key, value) in pairs {
            raw.push(*key, *value);
        }
        raw
    }

    #[test]
    fn defaults_apply_when_options_are_absent() {
        let raw = raw_with(&[(OptionKey::AddFigure, "t-value")]);
        let descriptor =
            TaskDescriptor::from_raw(&raw, EmbeddingType::Unilevel, &sobol()).expect("descriptor");
        assert_eq!(descriptor.m, 6);
        assert_eq!(descriptor.figure_combiner, FigureCombiner::Max);
        assert_eq!(descriptor.level_combiner, None);
        assert!(descriptor.early_abort);
        assert_eq!(descriptor.verbosity, 0);

        let report = ReportOptions::from_raw(&raw).expect("report");
        assert_eq!(report.repeat, 1);
        assert_eq!(report.precision, Precision::new(0));
        assert!(report.targets.is_empty());
    }

    #[test]
    fn multilevel_defaults_to_level_sum() {
        let raw = raw_with(&[(OptionKey::AddFigure, "t-value")]);
        let descriptor = TaskDescriptor::from_raw(&raw, EmbeddingType::Multilevel, &sobol())
            .expect("descriptor");
        assert_eq!(descriptor.level_combiner, Some(LevelCombiner::Sum));
    }

    #[test]
    fn weights_power_is_applied_to_importances() {
        let raw = raw_with(&[
            (OptionKey::AddFigure, "4*t-value"),
            (OptionKey::WeightsPower, "2"),
        ]);
        let descriptor =
            TaskDescriptor::from_raw(&raw, EmbeddingType::Unilevel, &sobol()).expect("descriptor");
        assert_eq!(descriptor.weights_power, Some(2.0));
        assert!((descriptor.figures[0].importance() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn malformed_numbers_are_grammar_errors() {
        let raw = raw_with(&[(OptionKey::AddFigure, "t-value"), (OptionKey::Repeat, "often")]);
        let err = ReportOptions::from_raw(&raw).expect_err("repeat");
        assert_eq!(err.banner(), "COMMAND LINE ERROR");
    }
}
