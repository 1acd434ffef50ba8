//! This module defines the `Tape`, a sparse, bi-infinite storage of symbols indexed by
//! signed position.

use crate::types::Symbol;
use std::collections::BTreeMap;
use std::fmt;

/// A sparse tape, unbounded in both directions.
///
/// Only cells holding a non-blank symbol are stored. Reading any other position yields the
/// blank symbol, and writing the blank symbol erases the cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: BTreeMap<i64, Symbol>,
    blank: Symbol,
}

impl Tape {
    /// Creates an empty tape using `blank` for every unwritten position.
    pub fn new(blank: Symbol) -> Self {
        Self {
            cells: BTreeMap::new(),
            blank,
        }
    }

    /// Returns the symbol at `position`, or the blank symbol if the cell holds nothing.
    pub fn read(&self, position: i64) -> Symbol {
        self.cells.get(&position).copied().unwrap_or(self.blank)
    }

    /// Stores `symbol` at `position`, overwriting any prior value.
    pub fn write(&mut self, position: i64, symbol: Symbol) {
        if symbol == self.blank {
            self.cells.remove(&position);
        } else {
            self.cells.insert(position, symbol);
        }
    }

    /// Writes `input` one symbol per cell starting at position 0.
    ///
    /// Cells outside the input's span keep whatever they held before.
    pub fn load(&mut self, input: &str) {
        for (position, symbol) in (0_i64..).zip(input.chars()) {
            self.write(position, symbol);
        }
    }

    /// Erases every cell.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Returns the lowest and highest occupied positions, if any cell is occupied.
    pub fn bounds(&self) -> Option<(i64, i64)> {
        let (&min, _) = self.cells.first_key_value()?;
        let (&max, _) = self.cells.last_key_value()?;
        Some((min, max))
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn blank(&self) -> Symbol {
        self.blank
    }

    /// Returns the symbols across the occupied span, with blanks filling the holes.
    ///
    /// An empty tape renders as an empty sequence.
    pub fn render(&self) -> Vec<Symbol> {
        match self.bounds() {
            Some((min, max)) => (min..=max).map(|position| self.read(position)).collect(),
            None => Vec::new(),
        }
    }

    /// Returns the occupied span as a `String`.
    pub fn render_string(&self) -> String {
        self.render().into_iter().collect()
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_string())
    }
}
