use netb_cli::{run_configuration, validate, DispatchMatrix, OptionKey, RawConfiguration};
use netb_core::{ErrorKind, NetBuilderError};

fn complete() -> RawConfiguration {
    let mut raw = RawConfiguration::new();
    raw.push(OptionKey::Size, "2^4");
    raw.push(OptionKey::ExplorationMethod, "full-CBC");
    raw.push(OptionKey::Dimension, "2");
    raw.push(OptionKey::AddFigure, "t-value");
    raw.push(OptionKey::Seed, "3");
    raw
}

fn without(key: OptionKey) -> RawConfiguration {
    let mut raw = RawConfiguration::new();
    for other in OptionKey::ALL.into_iter().filter(|other| *other != key) {
        for value in complete().values(other) {
            raw.push(other, value.clone());
        }
    }
    raw
}

#[test]
fn each_required_option_is_enforced_before_any_task() {
    for key in [
        OptionKey::Size,
        OptionKey::ExplorationMethod,
        OptionKey::Dimension,
        OptionKey::AddFigure,
    ] {
        let mut out = Vec::new();
        let err = run_configuration(without(key), &DispatchMatrix::new(), &mut out)
            .expect_err("missing option");
        assert!(matches!(err, NetBuilderError::Configuration(_)), "{key}");
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(out.is_empty(), "no task output expected for {key}");
    }
}

#[test]
fn required_options_must_appear_exactly_once() {
    let mut raw = complete();
    raw.push(OptionKey::Dimension, "3");
    assert_eq!(validate(raw).expect_err("twice").info().code, "missing_option");
}

#[test]
fn several_figures_need_a_figure_combiner() {
    let mut raw = complete();
    raw.push(OptionKey::AddFigure, "resolution-gap");
    let err = validate(raw.clone()).expect_err("no combiner");
    assert_eq!(err.info().context["option"], "figure-combiner");

    raw.push(OptionKey::FigureCombiner, "sum");
    assert!(validate(raw).is_ok());
}

#[test]
fn sequence_needs_a_combiner() {
    let mut raw = complete();
    raw.push(OptionKey::SetType, "sequence");
    let err = validate(raw.clone()).expect_err("no combiner");
    assert_eq!(err.info().context["option"], "combiner");

    raw.push(OptionKey::Combiner, "sum");
    assert!(validate(raw).is_ok());
}

#[test]
fn unknown_set_type_is_a_grammar_error() {
    let mut raw = complete();
    raw.push(OptionKey::SetType, "lattice");
    let err = validate(raw).expect_err("lattice");
    assert_eq!(err.banner(), "COMMAND LINE ERROR");
}
