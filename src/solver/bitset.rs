// Copyright (C) 2021 Quentin M. Kniep <hello@quentinkniep.com>
// Distributed under terms of the MIT license.

//! Implementation of DecisionTable, a dense row-major bitmask with one bit per
//! (seat, remaining weight) state of the covering DP.
//! Storing decisions as bits keeps memory at `n·(W+1)/8` bytes for the whole table.

/// A rows × width bitmask storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecisionTable {
    width: usize,
    data: Vec<u64>,
}

impl DecisionTable {
    /// Creates a table with all bits cleared.
    pub fn new(rows: usize, width: usize) -> Self {
        Self {
            width,
            data: vec![0; (rows * width + 63) / 64],
        }
    }

    /// Number of bits required for a table of the given shape.
    pub fn bits_for(rows: usize, width: usize) -> Option<usize> {
        rows.checked_mul(width)
    }

    /// Sets the bit at (row, col).
    pub fn set_bit(&mut self, row: usize, col: usize) {
        let bit = row * self.width + col;
        self.data[bit / 64] |= 1 << (bit & 63);
    }

    /// Tests the bit at (row, col).
    pub fn bit(&self, row: usize, col: usize) -> bool {
        let bit = row * self.width + col;
        (self.data[bit / 64] & (1 << (bit & 63))) != 0
    }

    /// Stores a whole row of decisions at once.
    pub fn set_row(&mut self, row: usize, bits: &[bool]) {
        debug_assert_eq!(bits.len(), self.width);
        for (col, _) in bits.iter().enumerate().filter(|(_, b)| **b) {
            self.set_bit(row, col);
        }
    }
}
