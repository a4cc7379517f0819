//! Initiator matrix for recursive quadrant selection.

/// Probabilities of descending into each quadrant of the adjacency matrix.
///
/// The bottom-right probability is implied as `1 - (a + b + c)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Initiator {
    a: f64,
    b: f64,
    c: f64,
}

/// Initiator used by the Graph500 reference generator.
pub const GRAPH500_INITIATOR: Initiator = Initiator {
    a: 0.57,
    b: 0.19,
    c: 0.19,
};

impl Initiator {
    /// Top-left probability.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// Top-right probability.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// Bottom-left probability.
    #[must_use]
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Bottom-right probability.
    #[must_use]
    pub fn d(&self) -> f64 {
        1.0 - (self.a + self.b + self.c)
    }

    /// Maps a uniform draw in `[0, 1)` onto `(row_bit, column_bit)`.
    #[must_use]
    pub fn quadrant(&self, draw: f64) -> (usize, usize) {
        if draw < self.a {
            (0, 0)
        } else if draw < self.a + self.b {
            (0, 1)
        } else if draw < self.a + self.b + self.c {
            (1, 0)
        } else {
            (1, 1)
        }
    }
}
