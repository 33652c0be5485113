//! # Jones–Wenzl Projectors
//!
//! The Jones–Wenzl projector `p_n` is the unique idempotent of TL_n that
//! is annihilated by every generator on either side. It is built by the
//! standard rational recursion
//!
//! ```text
//! p_1 = id_1
//! p_m = e + (m-1)/m * e . U_{m-2} . e    where e = p_{m-1} (x) id_1
//! ```
//!
//! with all arithmetic exact. The recursion makes `p_m` depend on every
//! lower projector, so computed values are memoized.
//!
//! [`JonesWenzl`] is an explicit cache object with an injectable lifetime
//! rather than a hidden process global; extension mutates a shared,
//! index-keyed, monotonically growing vector, so the whole cache sits
//! behind one mutex. Already-cached lookups are pure reads.

use num_rational::Rational64;
use parking_lot::Mutex;
use tracing::debug;

use crate::element::Element;
use crate::error::TlError;

/// Memoizing cache of Jones–Wenzl projectors. Slot `m - 1` holds the
/// projector of TL_m; the cache only ever grows, in ascending index
/// order, and never rewrites an existing entry.
pub struct JonesWenzl {
    cache: Mutex<Vec<Element>>,
}

impl JonesWenzl {
    /// A fresh cache holding only the base case `p_1 = id_1`.
    pub fn new() -> Self {
        Self {
            cache: Mutex::new(vec![Element::identity(1)]),
        }
    }

    /// The Jones–Wenzl projector of TL_n.
    ///
    /// Extends the cache through every missing index up to n if needed;
    /// afterwards this is a read with no side effect. Fails with
    /// [`TlError::InvalidIndex`] for n = 0 (TL_0 has no projector here).
    pub fn get(&self, n: usize) -> Result<Element, TlError> {
        if n == 0 {
            return Err(TlError::InvalidIndex { index: 0, n: 0 });
        }

        let mut cache = self.cache.lock();
        while cache.len() < n {
            let m = cache.len() + 1;
            debug!(m, "extending Jones-Wenzl cache");

            // Widen the previous projector by one straight strand.
            let wide = cache[m - 2].tensor(&Element::identity(1));
            let u = Element::generator(m, m - 2)?;
            let correction = wide.compose(&u)?.compose(&wide)?;
            let coefficient = Rational64::new(m as i64 - 1, m as i64);
            let next = wide.add(&correction.scale_by(coefficient))?;
            cache.push(next);
        }

        Ok(cache[n - 1].clone())
    }

    /// Highest index currently cached.
    pub fn computed_up_to(&self) -> usize {
        self.cache.lock().len()
    }
}

impl Default for JonesWenzl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::Diagram;

    #[test]
    fn rejects_index_zero() {
        let jw = JonesWenzl::new();
        assert!(matches!(
            jw.get(0),
            Err(TlError::InvalidIndex { index: 0, .. })
        ));
    }

    #[test]
    fn base_case_is_identity() {
        let jw = JonesWenzl::new();
        assert_eq!(jw.get(1).unwrap(), Element::identity(1));
    }

    #[test]
    fn second_projector_explicitly() {
        // p_2 = id_2 + 1/2 U_0.
        let jw = JonesWenzl::new();
        let expected = Element::new(vec![
            Diagram::identity(2),
            Diagram::generator(2, 0)
                .unwrap()
                .scale_by(Rational64::new(1, 2)),
        ])
        .unwrap();
        assert_eq!(jw.get(2).unwrap(), expected);
    }

    #[test]
    fn cache_grows_monotonically_and_rereads_are_stable() {
        let jw = JonesWenzl::new();
        assert_eq!(jw.computed_up_to(), 1);

        let p3 = jw.get(3).unwrap();
        assert_eq!(jw.computed_up_to(), 3);

        // A request for a lower index is a pure read.
        let p2 = jw.get(2).unwrap();
        assert_eq!(jw.computed_up_to(), 3);

        // Re-reads return the same values.
        assert_eq!(jw.get(3).unwrap(), p3);
        assert_eq!(jw.get(2).unwrap(), p2);
    }

    #[test]
    fn projectors_live_in_the_right_algebra() {
        let jw = JonesWenzl::new();
        for n in 1..=4 {
            assert_eq!(jw.get(n).unwrap().n(), n);
        }
    }
}
