//! Figures of merit and their combiners.

use netb_core::NetBuilderError;
use netb_merit::{Figure, FigureCombiner, FigureKind, LevelCombiner, DEFAULT_PROJECTION_ORDER};

use crate::error::grammar_error;

/// Parses `[<importance>*]<name>`.
pub fn parse_figure(text: &str) -> Result<Figure, NetBuilderError> {
    let trimmed = text.trim();
    let (importance, name) = match trimmed.split_once('*') {
        Some((weight, name)) => {
            let weight = weight
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite() && *value >= 0.0)
                .ok_or_else(|| grammar_error("figure_importance", "invalid importance", text))?;
            (weight, name.trim())
        }
        None => (1.0, trimmed),
    };
    let kind = match name.split_once(':') {
        None if name == "t-value" => FigureKind::TValue,
        None if name == "resolution-gap" => FigureKind::ResolutionGap,
        Some(("projdep", rest)) => {
            let (inner, order) = rest.split_once(':').unwrap_or((rest, ""));
            if inner != "t-value" {
                return Err(grammar_error("figure", "projdep supports t-value only", text));
            }
            let max_order = if order.is_empty() {
                DEFAULT_PROJECTION_ORDER
            } else {
                order
                    .parse::<usize>()
                    .ok()
                    .filter(|order| *order > 0)
                    .ok_or_else(|| grammar_error("figure_order", "invalid projection order", text))?
            };
            FigureKind::ProjectionTValue { max_order }
        }
        _ => return Err(grammar_error("figure", "unknown figure of merit", text)),
    };
    Ok(Figure::new(kind, importance))
}

/// Parses `sum` or `max`.
pub fn parse_figure_combiner(text: &str) -> Result<FigureCombiner, NetBuilderError> {
    match text.trim() {
        "sum" => Ok(FigureCombiner::Sum),
        "max" => Ok(FigureCombiner::Max),
        _ => Err(grammar_error("figure_combiner", "expected sum or max", text)),
    }
}

/// Parses `sum`, `max`, `level:<l>` or `level:max`.
pub fn parse_level_combiner(text: &str) -> Result<LevelCombiner, NetBuilderError> {
    match text.trim() {
        "sum" => Ok(LevelCombiner::Sum),
        "max" => Ok(LevelCombiner::Max),
        "level:max" => Ok(LevelCombiner::LevelMax),
        other => other
            .strip_prefix("level:")
            .and_then(|level| level.parse::<usize>().ok())
            .filter(|level| *level > 0)
            .map(LevelCombiner::Level)
            .ok_or_else(|| {
                grammar_error("combiner", "expected sum, max, level:<l> or level:max", text)
            }),
    }
}

/// Parses a positive weights power or `inf`.
pub fn parse_weights_power(text: &str) -> Result<f64, NetBuilderError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("inf") {
        return Ok(f64::INFINITY);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|power| power.is_finite() && *power > 0.0)
        .ok_or_else(|| grammar_error("weights_power", "expected a positive number or inf", text))
}
