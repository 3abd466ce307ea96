use std::fmt;

use rand::RngCore;

/// Dense matrix over GF(2) with at most 64 columns.
///
/// Row `i` is stored as a `u64` whose bit `c` holds entry `(i, c)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    rows: usize,
    cols: usize,
    data: Vec<u64>,
}

impl fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitMatrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish_non_exhaustive()
    }
}

impl BitMatrix {
    /// Maximum supported number of rows or columns.
    pub const MAX_WIDTH: usize = 64;

    /// All-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(cols <= Self::MAX_WIDTH && rows <= Self::MAX_WIDTH);
        Self {
            rows,
            cols,
            data: vec![0; rows],
        }
    }

    /// Square identity matrix.
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zeros(size, size);
        for i in 0..size {
            matrix.set(i, i, true);
        }
        matrix
    }

    /// Builds a matrix from packed rows; bits at or above `cols` are cleared.
    pub fn from_rows(cols: usize, rows: Vec<u64>) -> Self {
        assert!(cols <= Self::MAX_WIDTH && rows.len() <= Self::MAX_WIDTH);
        let mask = column_mask(cols);
        Self {
            rows: rows.len(),
            cols,
            data: rows.into_iter().map(|row| row & mask).collect(),
        }
    }

    /// Uniformly random matrix of the given shape.
    pub fn random(rows: usize, cols: usize, rng: &mut impl RngCore) -> Self {
        let data = (0..rows).map(|_| rng.next_u64()).collect();
        Self::from_rows(cols, data)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        (self.data[row] >> col) & 1 == 1
    }

    /// Sets entry `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: bool) {
        assert!(col < self.cols);
        if value {
            self.data[row] |= 1u64 << col;
        } else {
            self.data[row] &= !(1u64 << col);
        }
    }

    /// Packed row `row`.
    pub fn row(&self, row: usize) -> u64 {
        self.data[row]
    }

    /// Packed rows, top to bottom.
    pub fn packed_rows(&self) -> &[u64] {
        &self.data
    }

    /// Column `col` as an integer whose most significant bit (of `rows`) is row 0.
    pub fn column_as_integer(&self, col: usize) -> u64 {
        self.data
            .iter()
            .fold(0u64, |acc, row| (acc << 1) | ((row >> col) & 1))
    }

    /// Upper-left sub-matrix with the given shape.
    pub fn truncated(&self, rows: usize, cols: usize) -> Self {
        let rows = rows.min(self.rows);
        let cols = cols.min(self.cols);
        Self::from_rows(cols, self.data[..rows].to_vec())
    }

    /// Rank over GF(2).
    pub fn rank(&self) -> usize {
        rank_of_rows(&self.data, self.cols)
    }
}

/// Rank over GF(2) of the packed rows, considering the first `cols` bits.
pub fn rank_of_rows(rows: &[u64], cols: usize) -> usize {
    let mut rows: Vec<u64> = rows.iter().map(|row| row & column_mask(cols)).collect();
    let mut rank = 0;
    for col in 0..cols {
        let bit = 1u64 << col;
        if let Some(pivot) = (rank..rows.len()).find(|&idx| rows[idx] & bit != 0) {
            rows.swap(rank, pivot);
            let pivot_row = rows[rank];
            for (idx, row) in rows.iter_mut().enumerate() {
                if idx != rank && *row & bit != 0 {
                    *row ^= pivot_row;
                }
            }
            rank += 1;
            if rank == rows.len() {
                break;
            }
        }
    }
    rank
}

fn column_mask(cols: usize) -> u64 {
    if cols >= 64 {
        u64::MAX
    } else {
        (1u64 << cols) - 1
    }
}

/// Incrementally maintained row-echelon basis of GF(2) vectors.
///
/// Used by the merit evaluators to test linear independence of a growing set
/// of generating-matrix rows without recomputing from scratch.
#[derive(Debug, Clone)]
pub struct EchelonBasis {
    /// Basis vectors indexed by their leading bit.
    pivots: [u64; 64],
    len: usize,
}

impl Default for EchelonBasis {
    fn default() -> Self {
        Self {
            pivots: [0; 64],
            len: 0,
        }
    }
}

impl EchelonBasis {
    /// Empty basis.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of independent vectors inserted so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no vector has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts `vector`; returns `false` if it was already in the span.
    pub fn insert(&mut self, mut vector: u64) -> bool {
        while vector != 0 {
            let lead = 63 - vector.leading_zeros() as usize;
            if self.pivots[lead] == 0 {
                self.pivots[lead] = vector;
                self.len += 1;
                return true;
            }
            vector ^= self.pivots[lead];
        }
        false
    }
}
