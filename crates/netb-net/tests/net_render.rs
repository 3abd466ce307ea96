use netb_core::OutputFormat;
use netb_net::{ConstructionMethod, DigitalNet, Polynomial, Sobol};

#[test]
fn sobol_cli_lists_direction_numbers() {
    let design = Sobol::parse_design_parameter("", 4, 3).expect("design");
    let net = DigitalNet::<Sobol>::from_genvalues(design, vec![vec![], vec![1], vec![1, 3]]);
    let text = net.render(OutputFormat::Cli);
    assert!(text.starts_with("Sobol Digital Net - Dimension: 3\n"));
    assert!(text.contains("Direction numbers = (\n  1\n  1\n  1 3\n)\n"));
}

#[test]
fn polynomial_cli_lists_modulus_and_vector() {
    let design = Polynomial::parse_design_parameter("10011", 4, 2).expect("design");
    let q = Polynomial::parse_genvalue(&design, 1, "101").expect("genvalue");
    let net = DigitalNet::<Polynomial>::from_genvalues(design, vec![netb_net::Gf2Poly::ONE, q]);
    let text = net.render(OutputFormat::Cli);
    assert!(text.contains("Modulus =\n  10011\n"));
    assert!(text.contains("GeneratingVector =\n  1\n  101\n"));
}

#[test]
fn gui_output_has_one_block_per_coordinate() {
    let design = Sobol::parse_design_parameter("", 3, 2).expect("design");
    let net = DigitalNet::<Sobol>::from_genvalues(design, vec![vec![], vec![1]]);
    let text = net.render(OutputFormat::Gui);
    assert_eq!(text.matches("//dim").count(), 2);
    assert_eq!(text.lines().filter(|line| line.ends_with(' ')).count(), 6);
}

#[test]
fn extended_net_keeps_original_untouched() {
    let design = Sobol::parse_design_parameter("", 5, 2).expect("design");
    let base = DigitalNet::<Sobol>::from_genvalues(design, vec![vec![]]);
    let longer = base.extended(vec![1]);
    assert_eq!(base.dimension(), 1);
    assert_eq!(longer.dimension(), 2);
    assert_eq!(longer.matrices().len(), 2);
}
