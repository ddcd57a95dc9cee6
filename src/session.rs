//! The table session: interactive loop followed by the reference tables.
//!
//! Generic over reader and writer. `main` hands it locked stdin/stdout;
//! tests hand it byte slices and a `Vec<u8>`.

use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::input::{prompt_number, read_line};
use crate::messages::{CONTINUE_PROMPT, FAREWELL, NUMBER_PROMPT, WELCOME};
use crate::table::{reference_tables, write_table};
use crate::types::{Continuation, SessionSummary, Table};

/// A console session over `input` and `output`.
pub struct TableSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TableSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run the whole program: welcome, interactive loop, farewell, reference tables.
    ///
    /// # Errors
    /// Returns an error only if the underlying reader or writer fails.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        writeln!(self.output, "{}", WELCOME)?;

        let summary = self.run_interactive()?;

        writeln!(self.output, "{}", FAREWELL)?;
        self.print_reference_tables()?;
        self.output.flush()?;

        Ok(summary)
    }

    /// Ask for a base, print its table, ask whether to go again.
    ///
    /// Always runs at least once. Repeats only while the answer is exactly
    /// "s" or "S".
    ///
    /// # Errors
    /// Returns an error if reading or writing fails.
    pub fn run_interactive(&mut self) -> io::Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let reply = prompt_number(&mut self.input, &mut self.output, NUMBER_PROMPT)?;
            summary.rejected_inputs += reply.rejected;

            let Some(base) = reply.value else {
                summary.input_closed = true;
                break;
            };

            self.print_table(base)?;
            summary.tables_printed += 1;

            writeln!(self.output, "{}", CONTINUE_PROMPT)?;
            self.output.flush()?;

            let answer = match read_line(&mut self.input)? {
                Some(answer) => answer,
                None => {
                    summary.input_closed = true;
                    break;
                }
            };

            if Continuation::from_answer(&answer) == Continuation::Stop {
                debug!("Stopping on answer {:?}", answer);
                break;
            }
        }

        info!(
            "Interactive session done: {} tables, {} rejected lines, input closed: {}",
            summary.tables_printed, summary.rejected_inputs, summary.input_closed
        );

        Ok(summary)
    }

    /// Print the table of `base` up to `base` itself.
    ///
    /// A negative base prints only the terminator line.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn print_table(&mut self, base: i32) -> io::Result<()> {
        debug!("Printing table for {}", base);
        write_table(&mut self.output, &Table::interactive(base))
    }

    /// Print the tables of 0 through 10, each up to `* 10`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn print_reference_tables(&mut self) -> io::Result<()> {
        for table in reference_tables() {
            write_table(&mut self.output, &table)?;
        }
        Ok(())
    }

    /// Give back the writer, e.g. to inspect a test buffer.
    pub fn into_output(self) -> W {
        self.output
    }
}

// ============================================================================
// TESTS
// ============================================================================
