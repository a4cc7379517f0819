//! Undirected edge type shared by every generator in the workspace.

use std::fmt;

/// An unordered pair of super-node indices, stored with `v0 <= v1`.
///
/// # Examples
/// ```
/// use brg_core::Edge;
///
/// let edge = Edge::new(5, 2);
/// assert_eq!((edge.v0(), edge.v1()), (2, 5));
/// assert!(!edge.is_self_loop());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    v0: usize,
    v1: usize,
}

impl Edge {
    /// Creates an edge between `left` and `right`, ordering the endpoints.
    #[must_use]
    pub const fn new(left: usize, right: usize) -> Self {
        if left <= right {
            Self {
                v0: left,
                v1: right,
            }
        } else {
            Self {
                v0: right,
                v1: left,
            }
        }
    }

    /// Returns the smaller endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub const fn v0(self) -> usize { self.v0 }

    /// Returns the larger endpoint.
    #[rustfmt::skip]
    #[must_use]
    pub const fn v1(self) -> usize { self.v1 }

    /// Returns `true` when both endpoints are the same vertex.
    ///
    /// # Examples
    /// ```
    /// use brg_core::Edge;
    ///
    /// assert!(Edge::new(3, 3).is_self_loop());
    /// ```
    #[must_use]
    pub const fn is_self_loop(self) -> bool {
        self.v0 == self.v1
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.v0, self.v1)
    }
}

impl From<(usize, usize)> for Edge {
    fn from((left, right): (usize, usize)) -> Self {
        Self::new(left, right)
    }
}
