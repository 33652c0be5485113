//! # Diagrams - Planar Matchings with Rational Coefficients
//!
//! A diagram is the basic building block of the Temperley–Lieb algebra
//! TL_n: a crossingless matching of 2n points together with an exact
//! rational coefficient.
//!
//! Points are numbered counter-clockwise: `0..n` across the top edge,
//! `n..2n` across the bottom edge from right to left. The identity on two
//! strands therefore has matching `{(0, 3), (1, 2)}`:
//!
//! ```text
//! 1 *
//!   0 1 2 3
//!   | \_/ |
//!   \_____/
//! ```
//!
//! ## Key Concepts
//!
//! - **Composition** (`compose`): stack one diagram on top of another and
//!   trace the strands through the glued interface. Closed loops formed at
//!   the interface disappear, each contributing a factor of [`LOOP_VALUE`].
//! - **Tensor** (`tensor`): place two diagrams side by side.
//!
//! Planarity is guaranteed by construction — identity, generators, and
//! compose/tensor all preserve it — and is never checked explicitly.

use num_rational::Rational64;
use num_traits::One;
use std::fmt;
use tracing::{debug, trace};

use crate::error::TlError;

/// The loop value δ of this algebra: every closed loop formed while
/// stacking two diagrams contributes this scalar factor.
pub const LOOP_VALUE: i64 = -2;

/// A single crossingless matching on 2n points with a rational coefficient.
///
/// Immutable once built. The matching is stored canonically: each pair as
/// `(min, max)`, pairs sorted ascending, so shape comparison is plain
/// slice equality.
#[derive(Debug, Clone)]
pub struct Diagram {
    /// Half the point count: this diagram lives in TL_n.
    n: usize,
    /// Canonical pair list covering `{0, ..., 2n-1}` exactly once.
    matching: Vec<(usize, usize)>,
    /// Partner lookup: `partners[k]` is the point matched with `k`.
    partners: Vec<usize>,
    /// Exact rational coefficient.
    coefficient: Rational64,
}

impl Diagram {
    /// Build a diagram from an explicit pair list.
    ///
    /// `n` is inferred as the number of pairs. Fails with
    /// [`TlError::Validation`] if the list is empty, a point is out of
    /// range, or any point appears more than once.
    pub fn new(pairs: &[(usize, usize)], coefficient: Rational64) -> Result<Self, TlError> {
        let n = pairs.len();
        if n == 0 {
            return Err(TlError::Validation {
                reason: "empty pair list".to_string(),
            });
        }

        let mut seen = vec![false; 2 * n];
        for &(a, b) in pairs {
            if a == b {
                return Err(TlError::Validation {
                    reason: format!("point {a} paired with itself"),
                });
            }
            for p in [a, b] {
                if p >= 2 * n {
                    return Err(TlError::Validation {
                        reason: format!("point {p} out of range for 2n = {}", 2 * n),
                    });
                }
                if seen[p] {
                    return Err(TlError::Validation {
                        reason: format!("point {p} appears in more than one pair"),
                    });
                }
                seen[p] = true;
            }
        }

        // n pairs over 2n slots with no repeats is a perfect matching.
        Ok(Self::from_parts(n, pairs.to_vec(), coefficient))
    }

    /// Internal constructor for matchings that are perfect by construction.
    /// Canonicalizes pair order and derives the partner table.
    fn from_parts(n: usize, mut matching: Vec<(usize, usize)>, coefficient: Rational64) -> Self {
        for pair in matching.iter_mut() {
            if pair.0 > pair.1 {
                *pair = (pair.1, pair.0);
            }
        }
        matching.sort_unstable();

        let mut partners = vec![0; 2 * n];
        for &(a, b) in &matching {
            partners[a] = b;
            partners[b] = a;
        }

        Self {
            n,
            matching,
            partners,
            coefficient,
        }
    }

    /// The identity of TL_n: n parallel strands, coefficient 1.
    pub fn identity(n: usize) -> Self {
        let matching = (0..n).map(|a| (a, 2 * n - 1 - a)).collect();
        Self::from_parts(n, matching, Rational64::one())
    }

    /// The elementary cap-cup generator `U_i` of TL_n.
    ///
    /// Valid for `0 <= i <= n - 2`; anything else fails with
    /// [`TlError::InvalidIndex`]. The cap joins top points `i` and `i + 1`,
    /// the cup joins the two bottom points directly below, and every other
    /// strand runs straight through.
    pub fn generator(n: usize, i: usize) -> Result<Self, TlError> {
        if i + 2 > n {
            return Err(TlError::InvalidIndex { index: i, n });
        }

        let mut matching = Vec::with_capacity(n);
        matching.push((i, i + 1));
        matching.push((2 * n - i - 2, 2 * n - i - 1));
        for j in 0..n {
            if j != i && j != i + 1 {
                matching.push((j, 2 * n - 1 - j));
            }
        }

        Ok(Self::from_parts(n, matching, Rational64::one()))
    }

    /// This diagram lives in TL_n; returns that n.
    pub fn n(&self) -> usize {
        self.n
    }

    /// The canonical matching: pairs as `(min, max)`, sorted ascending.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.matching
    }

    /// The exact rational coefficient. 64-bit numerator and denominator;
    /// see the crate docs for why that range suffices.
    pub fn coefficient(&self) -> Rational64 {
        self.coefficient
    }

    /// The unique partner of point `k`.
    ///
    /// `k` must lie in `[0, 2n)`; the matching is an involution with no
    /// fixed points over that range.
    pub fn partner(&self, k: usize) -> usize {
        self.partners[k]
    }

    /// Same matching, coefficient multiplied by `c`.
    pub fn scale_by(&self, c: Rational64) -> Self {
        Self {
            coefficient: self.coefficient * c,
            ..self.clone()
        }
    }

    /// Same matching, coefficient replaced outright.
    pub(crate) fn with_coefficient(&self, coefficient: Rational64) -> Self {
        Self {
            coefficient,
            ..self.clone()
        }
    }

    /// True iff both diagrams have the same n and the same matching,
    /// ignoring coefficients. Pair order and within-pair order are
    /// irrelevant (the stored form is canonical).
    pub fn shape_eq(&self, other: &Diagram) -> bool {
        self.n == other.n && self.matching == other.matching
    }

    /// Horizontal juxtaposition: `self` on the left, `right` on the right.
    ///
    /// The result lives in TL_{self.n + right.n}. Left top ids are
    /// unchanged; right ids shift uniformly by `self.n`; left bottom ids
    /// shift by `2 * right.n` to make room. Coefficients multiply.
    pub fn tensor(&self, right: &Diagram) -> Diagram {
        let ln = self.n;
        let rn = right.n;

        let mut matching = Vec::with_capacity(ln + rn);
        let left_id = |p: usize| if p < ln { p } else { p + 2 * rn };
        for &(a, b) in &self.matching {
            matching.push((left_id(a), left_id(b)));
        }
        for &(a, b) in &right.matching {
            matching.push((a + ln, b + ln));
        }

        Self::from_parts(ln + rn, matching, self.coefficient * right.coefficient)
    }

    /// Stack `self` on top of `bottom` and glue along the interface.
    ///
    /// The result keeps `self`'s top points as ids `0..n` and `bottom`'s
    /// bottom points as ids `n..2n`. The n interface points — `self`'s
    /// lower edge identified pointwise with `bottom`'s upper edge via the
    /// re-indexing `flip(j) = 2n - 1 - j` — are internal and disappear.
    ///
    /// Strands are traced over fixed-size claimed/unclaimed arenas, in
    /// ascending id order: first every strand that starts at a top point,
    /// then every remaining strand starting at a bottom point. Interface
    /// points left unclaimed after both passes form closed loops; each
    /// loop multiplies the coefficient by [`LOOP_VALUE`].
    ///
    /// Fails with [`TlError::DimensionMismatch`] if the diagrams disagree
    /// on n (checked before any traversal), and with
    /// [`TlError::InternalFault`] if a traversal invariant breaks.
    pub fn compose(&self, bottom: &Diagram) -> Result<Diagram, TlError> {
        if self.n != bottom.n {
            return Err(TlError::DimensionMismatch {
                expected: self.n,
                got: bottom.n,
            });
        }

        let n = self.n;
        let flip = |j: usize| 2 * n - 1 - j;

        // Unclaimed markers for the three point arenas. TOP and MIDDLE are
        // indexed in `self`'s frame, BOTTOM in `bottom`'s frame; MIDDLE
        // slot k stands for `self`'s lower point n + k.
        let mut top_open = vec![true; n];
        let mut bottom_open = vec![true; n];
        let mut middle_open = vec![true; n];

        let mut matching = Vec::with_capacity(n);

        // First pass: every strand that starts at a top point.
        for start in 0..n {
            if !top_open[start] {
                continue;
            }
            top_open[start] = false;

            let mut j = start;
            loop {
                // Follow `self`'s matching downward.
                j = self.partner(j);
                if j < n {
                    trace!(start, end = j, "strand exits at top");
                    top_open[j] = false;
                    matching.push((start, j));
                    break;
                }
                middle_open[j - n] = false;

                // Cross the interface and follow `bottom`'s matching.
                j = bottom.partner(flip(j));
                if j >= n {
                    trace!(start, end = j, "strand exits at bottom");
                    bottom_open[j - n] = false;
                    matching.push((start, j));
                    break;
                }
                middle_open[flip(j) - n] = false;
                j = flip(j);
            }
        }

        // Second pass: remaining strands start and end at the bottom. All
        // top-reachable interface points were consumed above, so a strand
        // escaping to a top point here means the algorithm is broken.
        for start in 0..n {
            if !bottom_open[start] {
                continue;
            }
            bottom_open[start] = false;
            let start_id = start + n;

            let mut j = start_id;
            loop {
                j = bottom.partner(j);
                if j >= n {
                    trace!(start = start_id, end = j, "strand exits at bottom");
                    bottom_open[j - n] = false;
                    matching.push((start_id, j));
                    break;
                }
                middle_open[flip(j) - n] = false;

                j = self.partner(flip(j));
                if j < n {
                    return Err(TlError::InternalFault {
                        reason: format!(
                            "bottom-pass strand starting at {start_id} escaped to top point {j}"
                        ),
                    });
                }
                middle_open[j - n] = false;
                j = flip(j);
            }
        }

        // Whatever is left at the interface belongs to closed loops. A
        // single loop may meander through any even number of interface
        // points, so each residual cycle is traced out and counted once.
        let leftover = middle_open.iter().filter(|open| **open).count();
        if leftover % 2 != 0 {
            return Err(TlError::InternalFault {
                reason: format!("odd number of unclaimed interface points: {leftover}"),
            });
        }

        let mut loops = 0;
        for slot in 0..n {
            if !middle_open[slot] {
                continue;
            }
            loops += 1;

            let start_id = slot + n;
            let mut j = start_id;
            loop {
                middle_open[j - n] = false;
                j = self.partner(j);
                if j < n {
                    return Err(TlError::InternalFault {
                        reason: format!("interface loop through {start_id} escaped to top point {j}"),
                    });
                }
                middle_open[j - n] = false;

                let k = bottom.partner(flip(j));
                if k >= n {
                    return Err(TlError::InternalFault {
                        reason: format!(
                            "interface loop through {start_id} escaped to bottom point {k}"
                        ),
                    });
                }
                j = flip(k);
                if j == start_id {
                    break;
                }
            }
        }

        let mut coefficient = self.coefficient * bottom.coefficient;
        for _ in 0..loops {
            coefficient *= Rational64::from_integer(LOOP_VALUE);
        }
        if loops > 0 {
            debug!(loops, "closed loops absorbed into coefficient");
        }

        Ok(Self::from_parts(n, matching, coefficient))
    }
}

impl PartialEq for Diagram {
    /// Full equality: same shape and same coefficient.
    fn eq(&self, other: &Self) -> bool {
        self.shape_eq(other) && self.coefficient == other.coefficient
    }
}

impl Eq for Diagram {}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * {:?}", self.coefficient, self.matching)
    }
}
