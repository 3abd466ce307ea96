use netb_cli::run;
use netb_core::NetBuilderError;

fn run_args(args: &[&str]) -> (Result<(), NetBuilderError>, String) {
    let mut out = Vec::new();
    let argv = std::iter::once("netbuilder").chain(args.iter().copied());
    let result = run(argv, &mut out);
    (result, String::from_utf8(out).expect("utf8"))
}

#[test]
fn sobol_full_cbc_t_value_runs_once() {
    let (result, text) = run_args(&[
        "--construction", "sobol",
        "--multilevel", "false",
        "--size", "2^10",
        "--dimension", "5",
        "--exploration-method", "full-CBC",
        "--add-figure", "t-value",
    ]);
    result.expect("run");
    assert!(text.starts_with("Sobol Digital Net - Dimension: 5\n"));
    assert_eq!(text.matches("merit: ").count(), 1);
    assert_eq!(text.matches("ELAPSED CPU TIME: ").count(), 1);
    let net_end = text.find("merit: ").expect("merit line");
    assert!(text[..net_end].contains("Direction numbers = ("));
}

#[test]
fn two_output_formats_are_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ssj = dir.path().join("net.ssj");
    let gui = dir.path().join("net gui.txt");
    let ssj_arg = format!("file:{}:ssj", ssj.display());
    let gui_arg = format!("file:\"{}\":gui", gui.display());
    let (result, _) = run_args(&[
        "-s", "2^4",
        "-d", "3",
        "-E", "random-CBC:4",
        "-a", "t-value",
        "--seed", "5",
        "-g", &ssj_arg,
        "-g", &gui_arg,
    ]);
    result.expect("run");
    let ssj_text = std::fs::read_to_string(&ssj).expect("ssj file");
    assert!(ssj_text.starts_with("# Parameters for a digital net in base 2\n3    # dimension s\n"));
    let gui_text = std::fs::read_to_string(&gui).expect("gui file");
    assert!(gui_text.starts_with("//dim 0\n"));
    assert_eq!(gui_text.matches("//dim ").count(), 3);
}

#[test]
fn repeats_with_a_seed_are_reproducible() {
    let args = [
        "-c", "polynomial",
        "-s", "64",
        "-d", "3",
        "-E", "random:6",
        "-a", "t-value",
        "-r", "2",
        "--seed", "42",
    ];
    let (first, text_a) = run_args(&args);
    let (second, text_b) = run_args(&args);
    first.expect("first");
    second.expect("second");
    let strip = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|line| !line.starts_with("ELAPSED"))
            .map(str::to_string)
            .collect()
    };
    assert_eq!(strip(&text_a), strip(&text_b));
    assert_eq!(text_a.matches("merit: ").count(), 2);
}

#[test]
fn merit_digits_displayed_limits_the_merit() {
    let identity = "1000,0100,0010,0001";
    let net = format!("evaluation:{identity}/{identity}");
    let base = [
        "-c", "explicit",
        "-s", "2^4",
        "-d", "2",
        "-E", net.as_str(),
        "-a", "0.123456789*t-value",
    ];
    let (result, text) = run_args(&base);
    result.expect("run");
    assert!(text.contains("merit: 0.37037\n"), "{text}");

    let mut limited = base.to_vec();
    limited.extend(["--merit-digits-displayed", "2"]);
    let (result, text) = run_args(&limited);
    result.expect("run");
    assert!(text.contains("merit: 0.37\n"), "{text}");
}

#[test]
fn multilevel_sobol_with_level_combiner() {
    let (result, text) = run_args(&[
        "-m", "yes",
        "-T", "sequence",
        "-b", "level:max",
        "-s", "2^5",
        "-d", "3",
        "-E", "full-CBC",
        "-a", "t-value",
    ]);
    result.expect("run");
    assert!(text.contains("merit: "));
}

#[test]
fn help_prints_usage_without_running() {
    let (result, text) = run_args(&["--help"]);
    result.expect("help");
    assert!(text.contains("Usage"));
    assert!(text.contains("--exploration-method"));
    assert!(!text.contains("merit: "));
}

#[test]
fn version_short_circuits_validation() {
    let (result, text) = run_args(&["-V"]);
    result.expect("version");
    assert!(text.contains("netbuilder"));
}

#[test]
fn grammar_failures_report_the_command_line_banner() {
    let (result, text) = run_args(&["-s", "3^4", "-d", "2", "-E", "full-CBC", "-a", "t-value"]);
    let err = result.expect_err("base 3");
    assert_eq!(err.banner(), "COMMAND LINE ERROR");
    assert_eq!(err.info().context["input"], "3^4");
    assert!(text.is_empty());
}

#[test]
fn unknown_flags_are_grammar_errors() {
    let (result, _) = run_args(&["--norm-type", "2"]);
    assert!(matches!(result, Err(NetBuilderError::Grammar(_))));
}

#[test]
fn yaml_configuration_supplies_missing_options() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("run.yaml");
    std::fs::write(
        &config,
        "size: 2^4\ndimension: 2\nexploration-method: full-CBC\nadd-figure:\n  - t-value\n",
    )
    .expect("write config");
    let config_arg = config.display().to_string();
    let (result, text) = run_args(&["--config", &config_arg, "--dimension", "3"]);
    result.expect("run");
    assert!(text.starts_with("Sobol Digital Net - Dimension: 3\n"));
}
