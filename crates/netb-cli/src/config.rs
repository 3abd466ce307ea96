//! Raw configuration: the command line, an optional YAML layer and the
//! cross-field validation rules.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use clap::error::ErrorKind as ClapErrorKind;
use clap::Parser;
use serde::Deserialize;

use netb_core::{ErrorInfo, NetBuilderError};
use netb_parse::{parse_set_type, SetType};

/// Option keys recognised on the command line and in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionKey {
    /// `--set-type`
    SetType,
    /// `--construction`
    Construction,
    /// `--multilevel`
    Multilevel,
    /// `--size`
    Size,
    /// `--exploration-method`
    ExplorationMethod,
    /// `--dimension`
    Dimension,
    /// `--merit-digits-displayed`
    MeritDigitsDisplayed,
    /// `--weights-power`
    WeightsPower,
    /// `--combiner`
    Combiner,
    /// `--figure-combiner`
    FigureCombiner,
    /// `--add-figure`
    AddFigure,
    /// `--no-early-abort`
    NoEarlyAbort,
    /// `--output-format`
    OutputFormat,
    /// `--repeat`
    Repeat,
    /// `--verbose`
    Verbose,
    /// `--seed`
    Seed,
}

impl OptionKey {
    /// Every key, in help order.
    pub const ALL: [OptionKey; 16] = [
        OptionKey::SetType,
        OptionKey::Construction,
        OptionKey::Multilevel,
        OptionKey::Size,
        OptionKey::ExplorationMethod,
        OptionKey::Dimension,
        OptionKey::MeritDigitsDisplayed,
        OptionKey::WeightsPower,
        OptionKey::Combiner,
        OptionKey::FigureCombiner,
        OptionKey::AddFigure,
        OptionKey::NoEarlyAbort,
        OptionKey::OutputFormat,
        OptionKey::Repeat,
        OptionKey::Verbose,
        OptionKey::Seed,
    ];

    /// Long option name without the leading dashes.
    pub fn long_name(self) -> &'static str {
        match self {
            OptionKey::SetType => "set-type",
            OptionKey::Construction => "construction",
            OptionKey::Multilevel => "multilevel",
            OptionKey::Size => "size",
            OptionKey::ExplorationMethod => "exploration-method",
            OptionKey::Dimension => "dimension",
            OptionKey::MeritDigitsDisplayed => "merit-digits-displayed",
            OptionKey::WeightsPower => "weights-power",
            OptionKey::Combiner => "combiner",
            OptionKey::FigureCombiner => "figure-combiner",
            OptionKey::AddFigure => "add-figure",
            OptionKey::NoEarlyAbort => "no-early-abort",
            OptionKey::OutputFormat => "output-format",
            OptionKey::Repeat => "repeat",
            OptionKey::Verbose => "verbose",
            OptionKey::Seed => "seed",
        }
    }

    /// Key for a long option name.
    pub fn from_long_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.long_name() == name)
    }

    /// Whether the option may be given several times.
    pub fn repeatable(self) -> bool {
        matches!(self, OptionKey::AddFigure | OptionKey::OutputFormat)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--{}", self.long_name())
    }
}

/// Command-line flags. Every value is kept as text; grammars run later.
#[derive(Parser, Debug, Default)]
#[command(
    name = "netbuilder",
    version,
    about = "Construct digital nets in base 2 with good figures of merit"
)]
pub struct CliArgs {
    /// Point set type: net (default) or sequence.
    #[arg(short = 'T', long = "set-type", value_name = "TYPE")]
    pub set_type: Vec<String>,
    /// Construction: sobol (default), polynomial[:<modulus>] or explicit[:<matrix-size>].
    #[arg(short = 'c', long)]
    pub construction: Vec<String>,
    /// Multilevel point set: false (default) or true.
    #[arg(short = 'm', long)]
    pub multilevel: Vec<String>,
    /// (required) Size of the net: <size> or 2^<max-power>.
    #[arg(short = 's', long)]
    pub size: Vec<String>,
    /// (required) Exploration method: evaluation:<net>, exhaustive, random:<r>,
    /// full-CBC, random-CBC:<r> or mixed-CBC:<r>:<nb_full>.
    #[arg(short = 'E', long = "exploration-method", value_name = "METHOD")]
    pub exploration_method: Vec<String>,
    /// (required) Net dimension.
    #[arg(short = 'd', long)]
    pub dimension: Vec<String>,
    /// Significant digits of displayed merit values (0 keeps the default).
    #[arg(long = "merit-digits-displayed", value_name = "DIGITS")]
    pub merit_digits_displayed: Vec<String>,
    /// Power the figure importances are already raised to (inf leaves them as is).
    #[arg(short = 'o', long = "weights-power", value_name = "POWER")]
    pub weights_power: Vec<String>,
    /// Combiner of multilevel merit values: sum, max, level:<l> or level:max.
    #[arg(short = 'b', long)]
    pub combiner: Vec<String>,
    /// Combiner of several figures: sum or max (default).
    #[arg(short = 'B', long = "figure-combiner", value_name = "COMBINER")]
    pub figure_combiner: Vec<String>,
    /// (at least one required) Figure of merit: [<importance>*]<name> with name
    /// t-value, resolution-gap or projdep:t-value[:<max-order>].
    #[arg(short = 'a', long = "add-figure", value_name = "FIGURE")]
    pub add_figure: Vec<String>,
    /// Disable early abortion of candidate evaluation.
    #[arg(short = 'e', long = "no-early-abort")]
    pub no_early_abort: bool,
    /// Output target: file:"<path>":<format> with format cli, ssj or gui.
    #[arg(short = 'g', long = "output-format", value_name = "TARGET")]
    pub output_format: Vec<String>,
    /// Number of times the construction is executed (default 1).
    #[arg(short = 'r', long)]
    pub repeat: Vec<String>,
    /// Verbosity: 0 warn (default), 1 info, 2 debug, 3 trace.
    #[arg(short = 'v', long, value_name = "LEVEL")]
    pub verbose: Vec<String>,
    /// Master seed of random explorations (drawn from entropy when absent).
    #[arg(long)]
    pub seed: Vec<String>,
    /// YAML file supplying options absent from the command line.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Invocation {
    /// Print the rendered help text and stop.
    Help(String),
    /// Print the version and stop.
    Version(String),
    /// Build and run tasks from the configuration.
    Run(RawConfiguration),
}

/// Parses `args` (program name first) and merges the optional YAML layer.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, NetBuilderError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match CliArgs::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ClapErrorKind::DisplayHelp
                | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    Ok(Invocation::Help(err.render().to_string()))
                }
                ClapErrorKind::DisplayVersion => Ok(Invocation::Version(err.render().to_string())),
                _ => Err(NetBuilderError::Grammar(ErrorInfo::new(
                    "command_line",
                    first_line(&err.render().to_string()),
                ))),
            };
        }
    };
    let mut raw = RawConfiguration::from_cli(&cli);
    if let Some(path) = &cli.config {
        raw.merge_yaml_file(path)?;
    }
    Ok(Invocation::Run(raw))
}

fn first_line(text: &str) -> String {
    let line = text.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

/// Option values actually supplied by the user, keyed by option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfiguration {
    values: BTreeMap<OptionKey, Vec<String>>,
}

impl RawConfiguration {
    /// Empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration holding the flags present on the command line.
    pub fn from_cli(cli: &CliArgs) -> Self {
        let mut raw = Self::new();
        let lists = [
            (OptionKey::SetType, &cli.set_type),
            (OptionKey::Construction, &cli.construction),
            (OptionKey::Multilevel, &cli.multilevel),
            (OptionKey::Size, &cli.size),
            (OptionKey::ExplorationMethod, &cli.exploration_method),
            (OptionKey::Dimension, &cli.dimension),
            (OptionKey::MeritDigitsDisplayed, &cli.merit_digits_displayed),
            (OptionKey::WeightsPower, &cli.weights_power),
            (OptionKey::Combiner, &cli.combiner),
            (OptionKey::FigureCombiner, &cli.figure_combiner),
            (OptionKey::AddFigure, &cli.add_figure),
            (OptionKey::OutputFormat, &cli.output_format),
            (OptionKey::Repeat, &cli.repeat),
            (OptionKey::Verbose, &cli.verbose),
            (OptionKey::Seed, &cli.seed),
        ];
        for (key, values) in lists {
            for value in values {
                raw.push(key, value.clone());
            }
        }
        if cli.no_early_abort {
            raw.push(OptionKey::NoEarlyAbort, "true");
        }
        raw
    }

    /// Appends one value for `key`.
    pub fn push(&mut self, key: OptionKey, value: impl Into<String>) {
        self.values.entry(key).or_default().push(value.into());
    }

    /// Every value supplied for `key`, in order.
    pub fn values(&self, key: OptionKey) -> &[String] {
        self.values.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of times `key` was supplied.
    pub fn count(&self, key: OptionKey) -> usize {
        self.values(key).len()
    }

    /// Whether the user supplied `key`.
    pub fn is_supplied(&self, key: OptionKey) -> bool {
        self.count(key) > 0
    }

    /// First value supplied for `key`.
    pub fn single(&self, key: OptionKey) -> Option<&str> {
        self.values(key).first().map(String::as_str)
    }

    /// Fills keys the command line left unset from a YAML mapping of long
    /// option names to a scalar or a list of scalars.
    pub fn merge_yaml_file(&mut self, path: &Path) -> Result<(), NetBuilderError> {
        let text = fs::read_to_string(path).map_err(|err| {
            NetBuilderError::Io(
                ErrorInfo::new("config_read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        self.merge_yaml_str(&text)
            .map_err(|err| match err {
                NetBuilderError::Configuration(info) => NetBuilderError::Configuration(
                    info.with_context("path", path.display().to_string()),
                ),
                other => other,
            })
    }

    /// Same as [`RawConfiguration::merge_yaml_file`] on in-memory text.
    pub fn merge_yaml_str(&mut self, text: &str) -> Result<(), NetBuilderError> {
        let layer: BTreeMap<String, ConfigValue> = serde_yaml::from_str(text).map_err(|err| {
            NetBuilderError::Configuration(ErrorInfo::new("config_parse", err.to_string()))
        })?;
        for (name, value) in layer {
            let key = OptionKey::from_long_name(&name).ok_or_else(|| {
                NetBuilderError::Configuration(
                    ErrorInfo::new("config_unknown_key", "unknown option in configuration file")
                        .with_context("key", name.clone()),
                )
            })?;
            if self.is_supplied(key) {
                continue;
            }
            match value {
                ConfigValue::List(items) => {
                    for item in items {
                        self.push(key, item.to_string());
                    }
                }
                ConfigValue::Single(item) => {
                    if key == OptionKey::NoEarlyAbort {
                        if matches!(item, ConfigScalar::Flag(true)) {
                            self.push(key, "true");
                        }
                    } else {
                        self.push(key, item.to_string());
                    }
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigValue {
    List(Vec<ConfigScalar>),
    Single(ConfigScalar),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigScalar {
    Flag(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl fmt::Display for ConfigScalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigScalar::Flag(flag) => write!(f, "{flag}"),
            ConfigScalar::Integer(value) => write!(f, "{value}"),
            ConfigScalar::Real(value) => write!(f, "{value}"),
            ConfigScalar::Text(text) => f.write_str(text),
        }
    }
}

fn missing(key: OptionKey, rule: &str) -> NetBuilderError {
    NetBuilderError::Configuration(
        ErrorInfo::new("missing_option", format!("{key} {rule}"))
            .with_context("option", key.long_name())
            .with_hint("try --help"),
    )
}

/// Checks the cross-field rules and hands the configuration back unchanged.
pub fn validate(raw: RawConfiguration) -> Result<RawConfiguration, NetBuilderError> {
    if !raw.is_supplied(OptionKey::AddFigure) {
        return Err(missing(OptionKey::AddFigure, "must be specified"));
    }
    for key in [OptionKey::Size, OptionKey::ExplorationMethod, OptionKey::Dimension] {
        if raw.count(key) != 1 {
            return Err(missing(key, "must be specified exactly once"));
        }
    }
    for key in OptionKey::ALL.into_iter().filter(|key| !key.repeatable()) {
        if raw.count(key) > 1 {
            return Err(NetBuilderError::Configuration(
                ErrorInfo::new("duplicate_option", format!("{key} may be specified only once"))
                    .with_context("option", key.long_name()),
            ));
        }
    }
    if raw.count(OptionKey::AddFigure) >= 2 && !raw.is_supplied(OptionKey::FigureCombiner) {
        return Err(missing(
            OptionKey::FigureCombiner,
            "must be specified when several figures are added",
        ));
    }
    let set_type = match raw.single(OptionKey::SetType) {
        Some(text) => parse_set_type(text)?,
        None => SetType::default(),
    };
    if set_type == SetType::Sequence && !raw.is_supplied(OptionKey::Combiner) {
        return Err(missing(
            OptionKey::Combiner,
            "must be specified for sequence set type",
        ));
    }
    Ok(raw)
}
