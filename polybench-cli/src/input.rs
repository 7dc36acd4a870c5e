//! Degree Input
//!
//! The sweep asks a [`DegreeSource`] for one degree per step. The console
//! implementation prompts the operator; the preset one replays a list given
//! on the command line or in `polybench.toml`.

use polybench_core::MAX_DEGREE;
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Prompt shown before every degree read from the console
pub const DEGREE_PROMPT: &str = "Enter polynomial's degree: ";

/// Errors from degree input
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading or prompting failed
    #[error("failed to read degree: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before all steps had a degree
    #[error("input ended before a degree was given for step {step}")]
    Exhausted {
        /// 1-based sweep step
        step: usize,
    },

    /// Input was not a non-negative integer small enough to allocate
    #[error("invalid degree {input:?}: expected a non-negative integer up to {MAX_DEGREE}")]
    Invalid {
        /// Raw text as entered
        input: String,
    },
}

/// Supplier of one degree per sweep step
pub trait DegreeSource {
    /// Degree for `step` (1-based)
    fn next_degree(&mut self, step: usize) -> Result<usize, InputError>;
}

impl<D: DegreeSource + ?Sized> DegreeSource for Box<D> {
    fn next_degree(&mut self, step: usize) -> Result<usize, InputError> {
        (**self).next_degree(step)
    }
}

/// Parse a single degree, ignoring surrounding whitespace
pub fn parse_degree(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    trimmed
        .parse::<usize>()
        .ok()
        .filter(|degree| *degree <= MAX_DEGREE)
        .ok_or_else(|| InputError::Invalid {
            input: trimmed.to_string(),
        })
}

/// Interactive prompt on a reader/writer pair
pub struct ConsolePrompt<R, W> {
    reader: R,
    writer: W,
}

impl ConsolePrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on the process's stdin/stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    /// Prompt on arbitrary streams
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> DegreeSource for ConsolePrompt<R, W> {
    fn next_degree(&mut self, step: usize) -> Result<usize, InputError> {
        self.writer.write_all(DEGREE_PROMPT.as_bytes())?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(InputError::Exhausted { step });
        }
        parse_degree(&line)
    }
}

/// Fixed list of degrees, consumed in order
#[derive(Debug, Clone)]
pub struct PresetDegrees {
    degrees: VecDeque<usize>,
}

impl PresetDegrees {
    /// Replay `degrees` in order
    pub fn new(degrees: impl IntoIterator<Item = usize>) -> Self {
        Self {
            degrees: degrees.into_iter().collect(),
        }
    }

    /// Degrees not yet handed out
    pub fn remaining(&self) -> usize {
        self.degrees.len()
    }
}

impl DegreeSource for PresetDegrees {
    fn next_degree(&mut self, step: usize) -> Result<usize, InputError> {
        self.degrees
            .pop_front()
            .ok_or(InputError::Exhausted { step })
    }
}

/// Parse a comma-separated degree list such as `10,100,1000`
pub fn parse_degree_list(input: &str) -> Result<Vec<usize>, InputError> {
    input
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_degree)
        .collect()
}
