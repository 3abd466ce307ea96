use netb_core::{NetBuilderError, OutputFormat, Precision};
use netb_merit::{
    Figure, FigureCombiner, FigureKind, LevelCombiner, MeritEvaluator, Multilevel, Unilevel,
};
use netb_net::{Explicit, Polynomial, Sobol};
use netb_search::{ExplorationMethod, SearchSettings, SearchTask, Task};

fn settings(m: usize, dimension: usize, exploration: ExplorationMethod) -> SearchSettings {
    SearchSettings {
        m,
        dimension,
        design_parameter: String::new(),
        exploration,
        evaluator: MeritEvaluator::new(
            vec![Figure::unweighted(FigureKind::TValue)],
            FigureCombiner::Max,
            LevelCombiner::Sum,
            true,
        )
        .expect("one figure"),
        seed: 7,
    }
}

#[test]
fn full_cbc_sobol_reaches_zero_t_in_two_dimensions() {
    let mut task =
        SearchTask::<Sobol, Unilevel>::new(settings(6, 2, ExplorationMethod::FullCbc)).expect("task");
    task.execute().expect("execute");
    assert_eq!(task.best_merit(), Some(0.0));
    assert_eq!(task.output_merit_value(Precision::ambient()).expect("merit"), "0");
    let text = task.output_net(OutputFormat::Cli).expect("net");
    assert!(text.starts_with("Sobol Digital Net - Dimension: 2\n"));
}

#[test]
fn outputs_before_execute_are_errors() {
    let task =
        SearchTask::<Sobol, Unilevel>::new(settings(4, 2, ExplorationMethod::FullCbc)).expect("task");
    assert!(matches!(task.output_net(OutputFormat::Cli), Err(NetBuilderError::Search(_))));
    assert!(task.output_merit_value(Precision::ambient()).is_err());
}

#[test]
fn evaluation_of_identity_pair() {
    let method = ExplorationMethod::Evaluation {
        net: "1/1".to_string(),
    };
    let mut task = SearchTask::<Sobol, Unilevel>::new(settings(5, 2, method)).expect("task");
    task.execute().expect("execute");
    assert_eq!(task.best_merit(), Some(0.0));
}

#[test]
fn evaluation_with_wrong_coordinate_count_is_grammar_error() {
    let method = ExplorationMethod::Evaluation {
        net: "1".to_string(),
    };
    let err = SearchTask::<Sobol, Unilevel>::new(settings(5, 2, method))
        .err()
        .expect("dimension mismatch");
    assert!(matches!(err, NetBuilderError::Grammar(_)));
}

#[test]
fn random_cbc_is_reproducible_for_a_seed() {
    let run = || {
        let mut task = SearchTask::<Polynomial, Unilevel>::new(settings(
            6,
            3,
            ExplorationMethod::RandomCbc { samples: 8 },
        ))
        .expect("task");
        task.execute().expect("execute");
        task.output_net(OutputFormat::Cli).expect("net")
    };
    assert_eq!(run(), run());
}

#[test]
fn exhaustive_refuses_oversized_spaces() {
    let mut task =
        SearchTask::<Explicit, Unilevel>::new(settings(8, 3, ExplorationMethod::Exhaustive))
            .expect("task");
    let err = task.execute().expect_err("too large");
    assert_eq!(err.info().code, "search_space_too_large");
}

#[test]
fn exhaustive_small_explicit_space() {
    let mut task =
        SearchTask::<Explicit, Unilevel>::new(settings(2, 1, ExplorationMethod::Exhaustive))
            .expect("task");
    task.execute().expect("execute");
    // a non-singular 2x2 matrix exists
    assert_eq!(task.best_merit(), Some(0.0));
}

#[test]
fn zero_random_samples_fail() {
    let mut task = SearchTask::<Sobol, Unilevel>::new(settings(
        4,
        2,
        ExplorationMethod::Random { samples: 0 },
    ))
    .expect("task");
    assert!(task.execute().is_err());
}

#[test]
fn multilevel_sobol_mixed_cbc() {
    let mut task = SearchTask::<Sobol, Multilevel>::new(settings(
        5,
        3,
        ExplorationMethod::MixedCbc {
            samples: 4,
            full_coordinates: 2,
        },
    ))
    .expect("task");
    task.execute().expect("execute");
    assert!(task.best_merit().is_some());
    assert_eq!(task.best_net().map(|net| net.dimension()), Some(3));
    assert_eq!(task.label(), "sobol/multilevel/mixed-CBC");
}
