use netb_cli::{run_configuration, DispatchMatrix, OptionKey, RawConfiguration, TaskDescriptor};
use netb_core::{EmbeddingType, NetBuilderError, NetConstruction};
use netb_parse::ConstructionChoice;

fn descriptor(embedding: EmbeddingType, construction: NetConstruction) -> TaskDescriptor {
    let mut raw = RawConfiguration::new();
    raw.push(OptionKey::Size, "2^3");
    raw.push(OptionKey::ExplorationMethod, "random:2");
    raw.push(OptionKey::Dimension, "2");
    raw.push(OptionKey::AddFigure, "t-value");
    let choice = ConstructionChoice {
        construction,
        design_parameter: String::new(),
    };
    TaskDescriptor::from_raw(&raw, embedding, &choice).expect("descriptor")
}

#[test]
fn supported_pairs_build_tasks() {
    let matrix = DispatchMatrix::new();
    for (construction, embedding) in matrix.supported_pairs() {
        let settings = descriptor(embedding, construction)
            .search_settings(11)
            .expect("settings");
        let mut task = matrix
            .build(construction, embedding, settings)
            .expect("supported pair");
        task.execute().expect("execute");
        assert!(task.label().starts_with(construction.as_str()));
    }
}

#[test]
fn unsupported_pairs_are_absent_and_rejected() {
    let matrix = DispatchMatrix::new();
    for construction in NetConstruction::ALL {
        for embedding in EmbeddingType::ALL {
            let supported = matrix.supported_pairs().contains(&(construction, embedding));
            assert_eq!(matrix.lookup(construction, embedding).is_some(), supported);
            if !supported {
                let settings = descriptor(embedding, construction)
                    .search_settings(0)
                    .expect("settings");
                let err = matrix
                    .build(construction, embedding, settings)
                    .err()
                    .expect("unsupported pair");
                assert!(matches!(err, NetBuilderError::UnsupportedCombination(_)));
            }
        }
    }
}

#[test]
fn unsupported_pair_never_reaches_the_harness() {
    let mut raw = RawConfiguration::new();
    raw.push(OptionKey::Size, "2^3");
    raw.push(OptionKey::ExplorationMethod, "full-CBC");
    raw.push(OptionKey::Dimension, "2");
    raw.push(OptionKey::AddFigure, "t-value");
    raw.push(OptionKey::Multilevel, "true");
    raw.push(OptionKey::Construction, "polynomial");
    let mut out = Vec::new();
    let err = run_configuration(raw, &DispatchMatrix::new(), &mut out).expect_err("unsupported");
    assert!(matches!(err, NetBuilderError::UnsupportedCombination(_)));
    assert_eq!(err.banner(), "ERROR");
    assert!(out.is_empty());
}
