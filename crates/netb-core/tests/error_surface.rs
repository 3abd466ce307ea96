use netb_core::errors::{ErrorInfo, ErrorKind, NetBuilderError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("option", "size")
        .with_context("reason", "example")
}

#[test]
fn grammar_errors_use_command_line_banner() {
    let err = NetBuilderError::Grammar(sample_info("G001", "bad size"));
    assert_eq!(err.info().code, "G001");
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.banner(), "COMMAND LINE ERROR");
}

#[test]
fn configuration_errors_use_plain_banner() {
    let err = NetBuilderError::Configuration(sample_info("C001", "missing option"));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.banner(), "ERROR");
    assert!(err.info().context.contains_key("option"));
}

#[test]
fn unsupported_combination_is_a_configuration_error() {
    let err = NetBuilderError::UnsupportedCombination(sample_info("U001", "no task"));
    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(err.banner(), "ERROR");
}

#[test]
fn io_and_search_errors_are_runtime() {
    let io = NetBuilderError::Io(sample_info("IO1", "cannot open"));
    let search = NetBuilderError::Search(sample_info("S001", "empty space"));
    assert_eq!(io.kind(), ErrorKind::Runtime);
    assert_eq!(search.kind(), ErrorKind::Runtime);
}

#[test]
fn display_includes_context_and_hint() {
    let err = NetBuilderError::Configuration(
        ErrorInfo::new("missing_option", "--size must be specified exactly once")
            .with_hint("try --help"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("--size must be specified exactly once"));
    assert!(rendered.contains("code: missing_option"));
    assert!(rendered.ends_with("hint: try --help"));
}
