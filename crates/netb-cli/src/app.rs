//! End-to-end driver: parse, validate, classify, dispatch and run.

use std::ffi::OsString;
use std::io::Write;

use netb_core::{derive_substream_seed, entropy_seed, NetBuilderError};
use tracing_subscriber::EnvFilter;

use crate::classify::{classify_construction, classify_embedding};
use crate::config::{parse_invocation, validate, Invocation, OptionKey, RawConfiguration};
use crate::descriptor::{parse_number, ReportOptions, TaskDescriptor};
use crate::dispatch::DispatchMatrix;
use crate::emit::stream_error;
use crate::harness::Harness;

/// Installs the stderr subscriber for the requested verbosity. Later calls
/// keep the first subscriber.
pub fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs the driver on `args` (program name first), reporting to `out`.
pub fn run<I, T, W>(args: I, out: &mut W) -> Result<(), NetBuilderError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    let raw = match parse_invocation(args)? {
        Invocation::Help(text) | Invocation::Version(text) => {
            write!(out, "{text}").map_err(stream_error)?;
            return Ok(());
        }
        Invocation::Run(raw) => raw,
    };
    init_tracing(parse_number::<u8>(&raw, OptionKey::Verbose)?.unwrap_or(0));
    run_configuration(raw, &DispatchMatrix::new(), out)
}

/// Runs an already parsed configuration with the given dispatch table.
pub fn run_configuration<W: Write>(
    raw: RawConfiguration,
    matrix: &DispatchMatrix,
    out: &mut W,
) -> Result<(), NetBuilderError> {
    let raw = validate(raw)?;
    let embedding = classify_embedding(&raw)?;
    let construction = classify_construction(&raw, embedding)?;
    let descriptor = TaskDescriptor::from_raw(&raw, embedding, &construction)?;
    let report = ReportOptions::from_raw(&raw)?;
    let factory = matrix.resolve(construction.construction, embedding)?;
    let master_seed = report.seed.unwrap_or_else(entropy_seed);
    tracing::debug!(
        construction = %construction.construction,
        embedding = %embedding,
        m = descriptor.m,
        dimension = descriptor.dimension,
        master_seed,
        "dispatching"
    );
    let mut harness = Harness::new(out, report.precision, &report.targets);
    harness.run(report.repeat, |iteration| {
        let seed = derive_substream_seed(master_seed, iteration as u64);
        factory(descriptor.search_settings(seed)?)
    })?;
    Ok(())
}
