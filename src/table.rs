//! Table rendering.
//!
//! Interactive tables and reference tables share one renderer: a table is
//! its product lines followed by the terminator line.

use std::io::{self, Write};

use crate::messages::TABLE_END;
use crate::types::{Table, REFERENCE_BASES};

/// Rendered lines of a table, terminator included, without newlines.
///
/// Lazy, so a table for a large base never materializes in memory.
fn rendered_lines(table: &Table) -> impl Iterator<Item = String> {
    table
        .lines()
        .map(|line| line.to_string())
        .chain(std::iter::once(TABLE_END.to_string()))
}

/// The reference tables, in ascending base order.
pub fn reference_tables() -> impl Iterator<Item = Table> {
    REFERENCE_BASES.map(Table::reference)
}

/// Stream a table to `out`, one line at a time.
///
/// # Errors
/// Returns an error if writing fails.
pub fn write_table<W: Write>(out: &mut W, table: &Table) -> io::Result<()> {
    for line in rendered_lines(table) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
