//! Repeated, timed execution of freshly built tasks.

use std::io::Write;
use std::time::Instant;

use netb_core::{NetBuilderError, Precision};
use netb_parse::OutputTarget;
use netb_search::Task;

use crate::emit::{emit, stream_error};

/// Lifecycle of the harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HarnessState {
    /// Between iterations, no task alive.
    Idle,
    /// A task is executing.
    Running,
    /// The executed task is being reported.
    Reporting,
    /// Every iteration completed.
    Done,
}

/// Drives `repeat` executions, writing reports to `out`.
pub struct Harness<'a, W: Write> {
    out: &'a mut W,
    precision: Precision,
    targets: &'a [OutputTarget],
    state: HarnessState,
}

impl<'a, W: Write> Harness<'a, W> {
    /// Harness reporting with `precision` and writing `targets` after each run.
    pub fn new(out: &'a mut W, precision: Precision, targets: &'a [OutputTarget]) -> Self {
        Self {
            out,
            precision,
            targets,
            state: HarnessState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> HarnessState {
        self.state
    }

    /// Runs `repeat` iterations. Iteration `i` owns the task returned by
    /// `build(i)` and releases it before the next one starts. The first error
    /// aborts the remaining iterations; output already produced stands.
    ///
    /// Returns the number of completed iterations.
    pub fn run<F>(&mut self, repeat: usize, mut build: F) -> Result<usize, NetBuilderError>
    where
        F: FnMut(usize) -> Result<Box<dyn Task>, NetBuilderError>,
    {
        for iteration in 0..repeat {
            self.state = HarnessState::Idle;
            let mut task = build(iteration)?;
            tracing::info!(iteration = iteration + 1, repeat, task = %task.label(), "running task");

            self.state = HarnessState::Running;
            let started = Instant::now();
            task.execute()?;
            let elapsed = started.elapsed().as_secs_f64();

            self.state = HarnessState::Reporting;
            emit(&mut *self.out, task.as_ref(), self.precision, self.targets)?;
            writeln!(self.out).map_err(stream_error)?;
            writeln!(
                self.out,
                "ELAPSED CPU TIME: {} seconds",
                Precision::ambient().format(elapsed)
            )
            .map_err(stream_error)?;
            drop(task);
        }
        self.state = HarnessState::Done;
        Ok(repeat)
    }
}
