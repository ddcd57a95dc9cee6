//! Domain types for tablas.
//!
//! Plain data: no I/O, no formatting beyond `Display` for a single line.

use std::fmt;
use std::ops::RangeInclusive;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Bases printed unconditionally once the interactive session ends.
pub const REFERENCE_BASES: RangeInclusive<i32> = 0..=10;

/// Last multiplier used for every reference table.
///
/// Reference tables always run `i` from 0 to 10, whatever their base.
pub const REFERENCE_LAST_MULTIPLIER: i32 = 10;

// ============================================================================
// TABLES
// ============================================================================

/// One product line: `base * multiplier = product`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLine {
    pub base: i32,
    pub multiplier: i32,
    /// Computed in 64 bits so `i32::MAX * i32::MAX` still fits.
    pub product: i64,
}

impl TableLine {
    pub fn new(base: i32, multiplier: i32) -> Self {
        Self {
            base,
            multiplier,
            product: i64::from(base) * i64::from(multiplier),
        }
    }
}

impl fmt::Display for TableLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {} = {}", self.base, self.multiplier, self.product)
    }
}

/// A multiplication table for `base`, multipliers `0..=last_multiplier`.
///
/// A negative `last_multiplier` yields no product lines at all: the table
/// is just its terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub base: i32,
    pub last_multiplier: i32,
}

impl Table {
    /// The table shown after the user picks `base`: multipliers `0..=base`.
    pub fn interactive(base: i32) -> Self {
        Self {
            base,
            last_multiplier: base,
        }
    }

    /// A reference table: multipliers `0..=10`.
    pub fn reference(base: i32) -> Self {
        Self {
            base,
            last_multiplier: REFERENCE_LAST_MULTIPLIER,
        }
    }

    /// Product lines in ascending multiplier order.
    pub fn lines(&self) -> impl Iterator<Item = TableLine> {
        let base = self.base;
        (0..=self.last_multiplier).map(move |i| TableLine::new(base, i))
    }
}

// ============================================================================
// SESSION
// ============================================================================

/// Decision taken from the continuation answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Answer was exactly "s" or "S".
    Another,
    /// Anything else, including end of input.
    Stop,
}

impl Continuation {
    /// Literal comparison; surrounding whitespace counts.
    pub fn from_answer(answer: &str) -> Self {
        match answer {
            "s" | "S" => Continuation::Another,
            _ => Continuation::Stop,
        }
    }
}

/// What happened during the interactive part of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Tables printed on request (reference tables excluded).
    pub tables_printed: usize,
    /// Lines rejected because they were not integers.
    pub rejected_inputs: usize,
    /// Whether standard input ended before the user declined to continue.
    pub input_closed: bool,
}

// ============================================================================
// TESTS
// ============================================================================
