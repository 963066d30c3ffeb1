//! Console session: prompts for two operands and renders the outcome.
//!
//! Reads are blocking and line-based. Each operand is validated as soon
//! as it is entered, so a bad first value aborts before the second prompt.
//!
//! Generic over `BufRead`/`Write` so tests drive it with in-memory buffers.

use std::fmt;
use std::io::{BufRead, Write};

use adder_kernel::codec::parse_integer;
use adder_kernel::{Adder, AdditionResult, Mode};
use tracing::debug;

use crate::error::{RuntimeError, RuntimeResult};

pub const FIRST_PROMPT: &str = "Enter 1st integer:";
pub const SECOND_PROMPT: &str = "Enter 2nd integer:";

/// A prompt/answer channel over any line reader and writer.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `text` without a newline and read one line back.
    ///
    /// Returns `InputClosed` when the reader is exhausted.
    pub fn prompt(&mut self, text: &str) -> RuntimeResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RuntimeError::InputClosed(text.to_string()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn write_line(&mut self, text: &str) -> RuntimeResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Interactive addition: announce the range, read and validate both
/// operands, then add.
pub fn run_session<R: BufRead, W: Write>(
    adder: &Adder,
    console: &mut Console<R, W>,
) -> RuntimeResult<AdditionResult> {
    let config = adder.config();
    let (min, max) = config.effective_bounds();
    console.write_line(&format!("Integer range: {} - {}", min, max))?;

    let first = console.prompt(FIRST_PROMPT)?;
    let x = parse_integer(&first, config)?;
    let second = console.prompt(SECOND_PROMPT)?;
    let y = parse_integer(&second, config)?;
    debug!(x, y, "operands read from console");

    Ok(adder.add(x, y)?)
}

/// Column-aligned view of an addition, optionally with the full-adder
/// steps.
pub struct ResultView<'a> {
    result: &'a AdditionResult,
    with_steps: bool,
}

impl<'a> ResultView<'a> {
    pub fn new(result: &'a AdditionResult, with_steps: bool) -> Self {
        Self { result, with_steps }
    }
}

impl fmt::Display for ResultView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        let [left, right] = &result.operands;
        let column = result.raw_sum.len().max(result.width);

        writeln!(f, "mode: {} (width {})", result.mode, result.width)?;
        writeln!(f, "  {:>column$}  ({})", left.bits.to_string(), left.value)?;
        writeln!(f, "+ {:>column$}  ({})", right.bits.to_string(), right.value)?;
        writeln!(f, "  {}", "-".repeat(column))?;
        if result.mode == Mode::Signed && result.raw_sum != result.bits {
            writeln!(f, "  {:>column$}  raw sum", result.raw_sum.to_string())?;
        }
        writeln!(f, "= {:>column$}  ({})", result.bits.to_string(), result.value)?;

        if result.truncated {
            writeln!(f, "note: carry-out bit dropped to keep {} bits", result.width)?;
        }
        if result.overflow {
            writeln!(f, "note: signed overflow, result wrapped modulo 2^{}", result.width)?;
        }

        if self.with_steps {
            writeln!(f, "steps: {}", result.steps.len())?;
            for (n, step) in result.steps.iter().enumerate() {
                let position = step
                    .index
                    .map(|i| i.to_string())
                    .unwrap_or_else(|| "flush".to_string());
                writeln!(
                    f,
                    "  #{:<3} pos {:>5}: {} + {} + carry {} -> sum {}, carry {}",
                    n, position, step.a, step.b, step.carry_in, step.sum, step.carry_out
                )?;
            }
        }
        Ok(())
    }
}

pub fn render_result(result: &AdditionResult, with_steps: bool) -> String {
    ResultView::new(result, with_steps).to_string()
}
