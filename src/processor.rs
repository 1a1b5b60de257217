//! Line-oriented batch processing.
//!
//! Each input line is an independent `owed,paid` record. Lines are parsed,
//! broken down into denominations and rendered in input order. Blank lines
//! are kept as empty results so the output has exactly one line per input
//! line.
//!
//! Processing is atomic: the first malformed line aborts the whole batch and
//! no partial results are returned.

use crate::breakdown::{compute_breakdown, ChangeBreakdown};
use crate::denomination::DenominationTable;
use crate::error::Result;
use crate::formatter::format_breakdown;
use crate::transaction::{parse_line, TransactionLine};
use log::debug;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::io::Write;
use std::num::NonZeroU64;

/// Change amounts that are a non-zero multiple of this are handed back at random.
pub const DEFAULT_RANDOM_DIVISOR: NonZeroU64 = match NonZeroU64::new(3) {
    Some(divisor) => divisor,
    None => unreachable!(),
};

/// Per-call processing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOptions {
    pub random_divisor: NonZeroU64,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        ProcessOptions {
            random_divisor: DEFAULT_RANDOM_DIVISOR,
        }
    }
}

/// Outcome for a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineResult {
    /// Blank input line. Renders as empty text.
    Empty { line_number: usize },

    /// An `owed,paid` record with its computed change.
    Change {
        line: TransactionLine,
        breakdown: ChangeBreakdown,
        output: String,
    },
}

impl LineResult {
    /// 1-based position in the input.
    pub fn line_number(&self) -> usize {
        match self {
            LineResult::Empty { line_number } => *line_number,
            LineResult::Change { line, .. } => line.line_number(),
        }
    }

    /// Rendered text, empty for blank lines.
    pub fn output(&self) -> &str {
        match self {
            LineResult::Empty { .. } => "",
            LineResult::Change { output, .. } => output,
        }
    }

    /// `true` for a blank input line.
    pub fn is_empty(&self) -> bool {
        matches!(self, LineResult::Empty { .. })
    }

    /// Whether the change was drawn at random. Always `false` for blank lines.
    pub fn random_mode(&self) -> bool {
        match self {
            LineResult::Empty { .. } => false,
            LineResult::Change { breakdown, .. } => breakdown.random_mode,
        }
    }
}

impl Serialize for LineResult {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            LineResult::Empty { line_number } => {
                let mut state = serializer.serialize_struct("LineResult", 3)?;
                state.serialize_field("lineNumber", line_number)?;
                state.serialize_field("empty", &true)?;
                state.serialize_field("output", "")?;
                state.end()
            }
            LineResult::Change {
                line,
                breakdown,
                output,
            } => {
                let mut state = serializer.serialize_struct("LineResult", 6)?;
                state.serialize_field("lineNumber", &line.line_number())?;
                state.serialize_field("owedCents", &line.owed())?;
                state.serialize_field("paidCents", &line.paid())?;
                state.serialize_field("changeCents", &line.change())?;
                state.serialize_field("randomMode", &breakdown.random_mode)?;
                state.serialize_field("output", output)?;
                state.end()
            }
        }
    }
}

/// Results of one batch, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOutput {
    pub results: Vec<LineResult>,

    /// Rendered text of every line joined by `\n`.
    pub output_text: String,
}

impl ProcessOutput {
    /// Writes a CSV report with one row per input line.
    ///
    /// Blank lines keep their line number and leave the other columns empty.
    pub fn write_report<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["line", "owed", "paid", "change", "random_mode", "breakdown"])?;

        for result in &self.results {
            match result {
                LineResult::Empty { line_number } => {
                    csv_writer.write_record([
                        line_number.to_string(),
                        String::new(),
                        String::new(),
                        String::new(),
                        String::new(),
                        String::new(),
                    ])?;
                }
                LineResult::Change {
                    line,
                    breakdown,
                    output,
                } => {
                    csv_writer.write_record([
                        line.line_number().to_string(),
                        line.owed().to_string(),
                        line.paid().to_string(),
                        line.change().to_string(),
                        breakdown.random_mode.to_string(),
                        output.clone(),
                    ])?;
                }
            }
        }

        csv_writer.flush()?;
        Ok(())
    }
}

/// Batch processor bound to a denomination table, options and a randomness source.
///
/// The table and options are never mutated, so a processor per request (or per
/// thread) is all that concurrent callers need.
pub struct ChangeProcessor<R = ThreadRng> {
    table: DenominationTable,
    options: ProcessOptions,
    rng: R,
}

impl ChangeProcessor<ThreadRng> {
    /// Creates a processor drawing from the thread-local generator.
    pub fn new(table: DenominationTable, options: ProcessOptions) -> Self {
        Self::with_rng(table, options, rand::rng())
    }
}

impl<R: Rng> ChangeProcessor<R> {
    /// Creates a processor with an injected randomness source.
    pub fn with_rng(table: DenominationTable, options: ProcessOptions, rng: R) -> Self {
        ChangeProcessor {
            table,
            options,
            rng,
        }
    }

    /// Denomination table used for every batch.
    pub fn table(&self) -> &DenominationTable {
        &self.table
    }

    /// Options used for every batch.
    pub fn options(&self) -> &ProcessOptions {
        &self.options
    }

    /// Processes a whole multi-line input.
    pub fn process(&mut self, input: &str) -> Result<ProcessOutput> {
        process_with(input, &self.table, &self.options, &mut self.rng)
    }
}

/// Processes `input` using the thread-local generator for random-mode lines.
///
/// # Examples
///
/// ```
/// use cash_register::{process_input, DenominationTable, ProcessOptions};
/// use std::num::NonZeroU64;
///
/// let options = ProcessOptions { random_divisor: NonZeroU64::new(97).unwrap() };
/// let output = process_input("2.12,3.00\n1.97,2.00", &DenominationTable::usd(), &options).unwrap();
/// assert_eq!(output.output_text, "3 quarters,1 dime,3 pennies\n3 pennies");
/// ```
pub fn process_input(
    input: &str,
    table: &DenominationTable,
    options: &ProcessOptions,
) -> Result<ProcessOutput> {
    process_with(input, table, options, &mut rand::rng())
}

fn process_with<R: Rng>(
    input: &str,
    table: &DenominationTable,
    options: &ProcessOptions,
    rng: &mut R,
) -> Result<ProcessOutput> {
    let mut results = Vec::new();

    for (idx, raw) in input.split('\n').enumerate() {
        let line_number = idx + 1;
        let raw = raw.strip_suffix('\r').unwrap_or(raw);

        let line = match parse_line(raw, line_number)? {
            Some(line) => line,
            None => {
                debug!("Line {}: blank", line_number);
                results.push(LineResult::Empty { line_number });
                continue;
            }
        };

        let breakdown = compute_breakdown(line.change(), table, options.random_divisor, rng);
        let output = format_breakdown(&breakdown, table);

        debug!(
            "Line {}: owed {}, paid {}, change {} ({} mode): {}",
            line_number,
            line.owed(),
            line.paid(),
            line.change(),
            if breakdown.random_mode { "random" } else { "minimum" },
            output
        );

        results.push(LineResult::Change {
            line,
            breakdown,
            output,
        });
    }

    let output_text = results
        .iter()
        .map(LineResult::output)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(ProcessOutput {
        results,
        output_text,
    })
}
